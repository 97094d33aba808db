use crate::locale::{Locale, PT_BR};
use url::Url;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3333/";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Eight hours.
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(60 * 60 * 8);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("{key}: {value:?} is not a valid url: {source}")]
	Url {
		key: &'static str,
		value: String,
		source: url::ParseError,
	},
	#[error("{key}: {value:?} is not a number of seconds")]
	Seconds { key: &'static str, value: String },
	#[error("{key}: {value:?} is not a socket address")]
	Bind { key: &'static str, value: String },
	#[error("{key}: unknown locale {value:?}")]
	Locale { key: &'static str, value: String },
}

/// Where the episode API lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
	/// Always ends with `/` so relative paths append to it.
	pub base_url: Url,
	pub timeout: Duration,
}

impl ApiConfig {
	pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
		Ok(ApiConfig {
			base_url: parse_base_url("PODCAST_API_URL", base_url)?,
			timeout,
		})
	}
}

#[derive(Debug, Clone)]
pub struct AppConfig {
	pub api: ApiConfig,
	pub bind: SocketAddr,
	pub revalidate: Duration,
	pub locale: &'static Locale,
}

impl AppConfig {
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Build the config from any key-value source, falling back to defaults for absent keys.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let base_url = match lookup("PODCAST_API_URL") {
			Some(value) => parse_base_url("PODCAST_API_URL", &value)?,
			None => parse_base_url("PODCAST_API_URL", DEFAULT_API_URL)?,
		};
		let timeout = seconds(&lookup, "PODCAST_API_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT);
		let revalidate = seconds(&lookup, "PODCAST_REVALIDATE_SECS")?.unwrap_or(DEFAULT_REVALIDATE);

		let bind_value = lookup("PODCAST_BIND").unwrap_or_else(|| DEFAULT_BIND.to_owned());
		let bind = bind_value.trim().parse().map_err(|_| ConfigError::Bind {
			key: "PODCAST_BIND",
			value: bind_value.clone(),
		})?;

		let locale = match lookup("PODCAST_LOCALE") {
			Some(value) => Locale::from_code(&value).ok_or(ConfigError::Locale {
				key: "PODCAST_LOCALE",
				value,
			})?,
			None => &PT_BR,
		};

		Ok(AppConfig {
			api: ApiConfig { base_url, timeout },
			bind,
			revalidate,
			locale,
		})
	}
}

fn parse_base_url(key: &'static str, value: &str) -> Result<Url, ConfigError> {
	let mut base = value.trim().to_owned();
	if !base.ends_with('/') {
		base.push('/');
	}
	Url::parse(&base).map_err(|source| ConfigError::Url {
		key,
		value: value.to_owned(),
		source,
	})
}

fn seconds(
	lookup: &impl Fn(&str) -> Option<String>,
	key: &'static str,
) -> Result<Option<Duration>, ConfigError> {
	lookup(key)
		.map(|value| {
			value
				.trim()
				.parse::<u64>()
				.map(Duration::from_secs)
				.map_err(|_| ConfigError::Seconds { key, value })
		})
		.transpose()
}
