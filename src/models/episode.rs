use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One episode as the API returns it. Nothing here is trusted yet.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEpisodeRecord {
	pub id: String,
	pub title: String,
	pub thumbnail: String,
	/// Absent or `null` renders as empty.
	#[serde(default)]
	pub members: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	pub published_at: String,
	#[serde(default)]
	pub file: Option<RawEpisodeFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEpisodeFile {
	/// Seconds, sent either as a number or as a numeric string.
	#[serde(default)]
	pub duration: Option<Value>,
	#[serde(default)]
	pub url: Option<String>,
}

/// An episode ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeView {
	pub id: String,
	pub title: String,
	pub thumbnail: String,
	pub members: String,
	pub published_at: String,
	pub duration: u64,
	pub duration_as_string: String,
	pub description: String,
	pub url: String,
}
