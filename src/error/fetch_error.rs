use reqwest::StatusCode;

/// The episode API could not be reached or answered with something unusable.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
	#[error("could not build http client: {0}")]
	Client(#[source] reqwest::Error),
	#[error("invalid episode endpoint: {0}")]
	Endpoint(#[from] url::ParseError),
	#[error("episode api unreachable: {0}")]
	Unreachable(#[from] reqwest::Error),
	#[error("status code was not a success.\nCode: {0}")]
	Status(StatusCode),
	#[error("malformed episode list: {0}")]
	Malformed(#[from] serde_json::Error),
}

impl FetchError {
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			FetchError::Status(status) => Some(*status),
			_ => None,
		}
	}
}
