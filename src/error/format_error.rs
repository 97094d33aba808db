/// A single episode record carries a field that cannot be turned into its display form.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
	#[error("episode {id}: published_at {value:?} is not an ISO-8601 date")]
	PublishedAt { id: String, value: String },
	#[error("episode {id}: missing field {field}")]
	MissingField { id: String, field: &'static str },
	#[error("episode {id}: duration {value} is not a non-negative integer")]
	Duration { id: String, value: String },
}

impl FormatError {
	/// Id of the record that failed to format.
	pub fn episode_id(&self) -> &str {
		match self {
			FormatError::PublishedAt { id, .. }
			| FormatError::MissingField { id, .. }
			| FormatError::Duration { id, .. } => id,
		}
	}
}
