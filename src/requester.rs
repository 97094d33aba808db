use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::models::RawEpisodeRecord;
use reqwest::{Client, Url};

pub type Result<T, E = FetchError> = std::result::Result<T, E>;

/// Query parameters of a list request against the episode collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeQuery {
	pub limit: u32,
	pub sort: &'static str,
	/// `asc` or `desc`.
	pub order: &'static str,
}

impl EpisodeQuery {
	/// The twelve most recently published episodes.
	pub const LATEST: EpisodeQuery = EpisodeQuery {
		limit: 12,
		sort: "published_at",
		order: "desc",
	};

	fn params(&self) -> [(&'static str, String); 3] {
		[
			("_limit", self.limit.to_string()),
			("_sort", self.sort.to_owned()),
			("_order", self.order.to_owned()),
		]
	}
}

/// HTTP access to the episode API. Built once from an [`ApiConfig`] and shared by reference.
#[derive(Debug, Clone)]
pub struct Requester {
	net: Client,
	episodes_url: Url,
}

impl Requester {
	pub fn new(config: &ApiConfig) -> Result<Requester> {
		let net = Client::builder()
			.timeout(config.timeout)
			.build()
			.map_err(FetchError::Client)?;
		let episodes_url = config.base_url.join("episodes")?;
		Ok(Requester { net, episodes_url })
	}

	pub fn episodes_url(&self) -> &Url {
		&self.episodes_url
	}

	pub async fn get_episodes(&self, query: &EpisodeQuery) -> Result<Vec<RawEpisodeRecord>> {
		log::debug!("requesting {} with {:?}", self.episodes_url, query);
		let response = self
			.net
			.get(self.episodes_url.clone())
			.query(&query.params())
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status(status));
		}

		let text = response.text().await?;
		let records = serde_json::from_str::<Vec<RawEpisodeRecord>>(&text)?;
		log::debug!("received {} episode records", records.len());
		Ok(records)
	}
}
