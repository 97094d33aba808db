use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'~');

/// Log to stdout at `RUST_LOG`, or at `default_spec` when it is unset.
/// Keep the returned handle alive for as long as logging is needed.
pub fn init_log(default_spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
	Logger::try_with_env_or_str(default_spec)?
		.log_to_stdout()
		.start()
}

/// Percent-encode one path segment so ids with `/`, `?` or spaces stay inside it.
pub fn encode_path_segment(segment: &str) -> String {
	utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn encodes_segments() {
		assert_eq!(encode_path_segment("faladev-30"), "faladev-30");
		assert_eq!(encode_path_segment("a b/c?"), "a%20b%2Fc%3F");
		assert_eq!(encode_path_segment("ç"), "%C3%A7");
	}
}
