use crate::error::{FormatError, OkOrMissing, Result};
use crate::format::{duration_as_string, format_published_at, parse_duration};
use crate::locale::Locale;
use crate::models::{EpisodeView, RawEpisodeRecord};
use crate::presenter::HomePage;
use crate::requester::{EpisodeQuery, Requester};

/// Loads the latest episodes and turns them into display models.
#[derive(Debug, Clone)]
pub struct EpisodeFetcher {
	requester: Requester,
	locale: &'static Locale,
}

impl EpisodeFetcher {
	pub fn new(requester: Requester, locale: &'static Locale) -> Self {
		EpisodeFetcher { requester, locale }
	}

	pub fn locale(&self) -> &'static Locale {
		self.locale
	}

	/// One request for [`EpisodeQuery::LATEST`], one view per record, in API order.
	///
	/// A single record that fails to format fails the whole call.
	pub async fn fetch_episode_views(&self) -> Result<Vec<EpisodeView>> {
		let records = self.requester.get_episodes(&EpisodeQuery::LATEST).await?;
		let views = to_views(records, self.locale)?;
		log::info!("fetched {} episodes", views.len());
		Ok(views)
	}

	pub async fn fetch_home_page(&self) -> Result<HomePage> {
		let episodes = self.fetch_episode_views().await?;
		Ok(HomePage::from_episodes(episodes))
	}
}

pub fn to_views(records: Vec<RawEpisodeRecord>, locale: &Locale) -> Result<Vec<EpisodeView>, FormatError> {
	records
		.into_iter()
		.map(|record| to_view(record, locale))
		.collect()
}

pub fn to_view(record: RawEpisodeRecord, locale: &Locale) -> Result<EpisodeView, FormatError> {
	let RawEpisodeRecord {
		id,
		title,
		thumbnail,
		members,
		description,
		published_at,
		file,
	} = record;

	let published_at = match format_published_at(&published_at, locale) {
		Some(formatted) => formatted,
		None => {
			return Err(FormatError::PublishedAt {
				id,
				value: published_at,
			})
		}
	};

	let (raw_duration, url) = match file {
		Some(file) => (file.duration, file.url),
		None => (None, None),
	};
	let raw_duration = raw_duration.ok_or_missing(&id, "file.duration")?;
	let duration = match parse_duration(&raw_duration) {
		Some(duration) => duration,
		None => {
			return Err(FormatError::Duration {
				id,
				value: raw_duration.to_string(),
			})
		}
	};
	let url = url.ok_or_missing(&id, "file.url")?;

	Ok(EpisodeView {
		id,
		title,
		thumbnail,
		members: members.unwrap_or_default(),
		published_at,
		duration,
		duration_as_string: duration_as_string(duration),
		description: description.unwrap_or_default(),
		url,
	})
}
