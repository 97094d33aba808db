//! Throwaway HTTP endpoint standing in for the episode API in tests.

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub struct Reply {
	status: u16,
	body: String,
}

impl Reply {
	pub fn ok(body: impl Into<String>) -> Self {
		Reply::status(200, body)
	}

	pub fn status(status: u16, body: impl Into<String>) -> Self {
		Reply {
			status,
			body: body.into(),
		}
	}

	fn to_http(&self) -> String {
		format!(
			"HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
			self.status,
			self.body.len(),
			self.body
		)
	}
}

pub struct TestServer {
	pub base_url: String,
	requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
	/// First line of every request received so far.
	pub fn request_lines(&self) -> Vec<String> {
		self.requests.lock().unwrap().clone()
	}
}

/// Serve `reply` to every connection until the test's runtime shuts down.
pub async fn spawn(reply: Reply) -> TestServer {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let base_url = format!("http://{}/", listener.local_addr().unwrap());
	let requests = Arc::new(Mutex::new(Vec::new()));

	let seen = requests.clone();
	tokio::spawn(async move {
		while let Ok((stream, _)) = listener.accept().await {
			answer(stream, &reply, &seen).await;
		}
	});

	TestServer { base_url, requests }
}

/// A base url nothing listens on.
pub async fn closed_port_url() -> String {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);
	format!("http://{}/", addr)
}

async fn answer(mut stream: TcpStream, reply: &Reply, seen: &Mutex<Vec<String>>) {
	let mut head = Vec::new();
	let mut buf = [0u8; 1024];
	while !head.windows(4).any(|w| w == b"\r\n\r\n") {
		match stream.read(&mut buf).await {
			Ok(0) | Err(_) => break,
			Ok(n) => head.extend_from_slice(&buf[..n]),
		}
	}
	let request_line = String::from_utf8_lossy(&head)
		.lines()
		.next()
		.unwrap_or_default()
		.to_owned();
	seen.lock().unwrap().push(request_line);

	let _ = stream.write_all(reply.to_http().as_bytes()).await;
	let _ = stream.shutdown().await;
}
