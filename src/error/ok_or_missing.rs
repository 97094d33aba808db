use super::format_error::FormatError;

pub trait OkOrMissing<T> {
	fn ok_or_missing(self, id: &str, field: &'static str) -> Result<T, FormatError>;
}

impl<T> OkOrMissing<T> for Option<T> {
	fn ok_or_missing(self, id: &str, field: &'static str) -> Result<T, FormatError> {
		self.ok_or_else(|| FormatError::MissingField {
			id: id.to_owned(),
			field,
		})
	}
}
