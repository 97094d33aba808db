use crate::locale::Locale;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;

// `%#z` takes `Z`, `+03`, `+0300` and `+03:00`.
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];
const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Render whole seconds as `HH:MM:SS`. Hours grow past two digits instead of wrapping.
pub fn duration_as_string(duration: u64) -> String {
	let hours = duration / 3600;
	let minutes = (duration % 3600) / 60;
	let seconds = duration % 60;
	format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Read a duration in whole seconds from a JSON number or a numeric string.
/// `120`, `120.0`, `"120"` and `"120.0"` all read as 120.
pub fn parse_duration(value: &Value) -> Option<u64> {
	match value {
		Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_seconds)),
		Value::String(s) => {
			let s = s.trim();
			s.parse()
				.ok()
				.or_else(|| s.parse::<f64>().ok().and_then(whole_seconds))
		}
		_ => None,
	}
}

fn whole_seconds(f: f64) -> Option<u64> {
	if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
		Some(f as u64)
	} else {
		None
	}
}

/// Parse an ISO-8601 date or date-time.
///
/// Timestamps with an offset keep their own wall-clock time, so a publish date
/// never shifts with the server's time zone.
pub fn parse_iso8601(value: &str) -> Option<NaiveDateTime> {
	let mut value = value.trim().to_owned();
	// ISO-8601 allows a space between date and time.
	if value.len() > 10 && value.as_bytes()[10] == b' ' {
		value.replace_range(10..11, "T");
	}

	if let Ok(dt) = DateTime::parse_from_rfc3339(&value) {
		return Some(dt.naive_local());
	}
	for format in OFFSET_DATE_TIME_FORMATS {
		if let Ok(dt) = DateTime::parse_from_str(&value, format) {
			return Some(dt.naive_local());
		}
	}
	for format in NAIVE_DATE_TIME_FORMATS {
		if let Ok(dt) = NaiveDateTime::parse_from_str(&value, format) {
			return Some(dt);
		}
	}
	NaiveDate::parse_from_str(&value, "%Y-%m-%d")
		.ok()
		.and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format a publish timestamp as `d MMM yy`, e.g. `8 jan 21` for pt-BR.
pub fn format_published_at(value: &str, locale: &Locale) -> Option<String> {
	let dt = parse_iso8601(value)?;
	Some(format!(
		"{} {} {:02}",
		dt.day(),
		locale.month_abbreviation(dt.month()),
		dt.year().rem_euclid(100)
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::locale::{EN_US, PT_BR};
	use serde_json::json;

	#[test]
	fn duration_strings() {
		assert_eq!(duration_as_string(0), "00:00:00");
		assert_eq!(duration_as_string(59), "00:00:59");
		assert_eq!(duration_as_string(60), "00:01:00");
		assert_eq!(duration_as_string(3661), "01:01:01");
		assert_eq!(duration_as_string(360000), "100:00:00");
	}

	#[test]
	fn duration_string_parts() {
		for d in (0..200_000u64).step_by(997) {
			let s = duration_as_string(d);
			let parts = s
				.split(':')
				.map(|p| p.parse::<u64>().unwrap())
				.collect::<Vec<u64>>();
			assert_eq!(parts, vec![d / 3600, (d / 60) % 60, d % 60]);
			assert!(s.split(':').all(|p| p.len() >= 2));
		}
	}

	#[test]
	fn durations_from_json() {
		assert_eq!(parse_duration(&json!(3981)), Some(3981));
		assert_eq!(parse_duration(&json!("3981")), Some(3981));
		assert_eq!(parse_duration(&json!(" 42 ")), Some(42));
		assert_eq!(parse_duration(&json!(120.0)), Some(120));
		assert_eq!(parse_duration(&json!("120.0")), Some(120));
		assert_eq!(parse_duration(&json!("1.5")), None);
		assert_eq!(parse_duration(&json!("NaN")), None);
		assert_eq!(parse_duration(&json!("")), None);
		assert_eq!(parse_duration(&json!(1.5)), None);
		assert_eq!(parse_duration(&json!(-1)), None);
		assert_eq!(parse_duration(&json!("-1")), None);
		assert_eq!(parse_duration(&json!("abc")), None);
		assert_eq!(parse_duration(&json!(null)), None);
	}

	#[test]
	fn published_at_pt_br() {
		assert_eq!(
			format_published_at("2021-01-08 17:00:00", &PT_BR).as_deref(),
			Some("8 jan 21")
		);
		assert_eq!(
			format_published_at("2020-12-31T23:59:59Z", &PT_BR).as_deref(),
			Some("31 dez 20")
		);
		assert_eq!(
			format_published_at("2021-02-15T03:00:00.000-03:00", &PT_BR).as_deref(),
			Some("15 fev 21")
		);
		assert_eq!(
			format_published_at("2009-05-01", &PT_BR).as_deref(),
			Some("1 mai 09")
		);
		for value in [
			"2021-01-08T17:00Z",
			"2021-01-08T17:00:00+0300",
			"2021-01-08T17:00:00+03",
			"2021-01-08 17:00:00.250-0300",
			"2021-01-08T17:00+03:00",
		] {
			assert_eq!(
				format_published_at(value, &PT_BR).as_deref(),
				Some("8 jan 21"),
				"{}",
				value
			);
		}
	}

	#[test]
	fn published_at_follows_locale() {
		assert_eq!(
			format_published_at("2021-05-10T12:00:00", &EN_US).as_deref(),
			Some("10 May 21")
		);
	}

	#[test]
	fn published_at_rejects_garbage() {
		assert_eq!(format_published_at("yesterday", &PT_BR), None);
		assert_eq!(format_published_at("2021-13-01", &PT_BR), None);
		assert_eq!(format_published_at("", &PT_BR), None);
	}
}
