pub mod fetch_error;
pub mod format_error;
pub mod ok_or_missing;

pub use fetch_error::FetchError;
pub use format_error::FormatError;
pub use ok_or_missing::OkOrMissing;

/// Any failure of the fetch-transform pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Fetch(#[from] FetchError),
	#[error(transparent)]
	Format(#[from] FormatError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
