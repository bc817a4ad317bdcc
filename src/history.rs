//! History-log formatting helpers.
//!
//! A history log is a newline-joined transcript: one line per `"message"`
//! entry, each carrying the raw text, the post time in local calendar form,
//! and the poster's real name.

use chrono::{DateTime, Local, Utc};

/// Convert seconds since the epoch into the local calendar representation.
#[must_use]
pub fn unix_to_timestamp(unix_seconds: i64) -> DateTime<Local> {
    DateTime::<Utc>::from_timestamp(unix_seconds, 0)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .with_timezone(&Local)
}

/// Parse a Slack `ts` value ("1503435956.000247") into whole unix seconds.
#[must_use]
pub fn parse_slack_ts(ts: &str) -> Option<i64> {
    ts.parse::<f64>().ok().map(|secs| secs.trunc() as i64)
}

/// Format a Slack `ts` for a log line, falling back to the raw value when it
/// is not numeric.
#[must_use]
pub fn format_ts(ts: &str) -> String {
    match parse_slack_ts(ts) {
        Some(secs) => unix_to_timestamp(secs)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => ts.to_string(),
    }
}

/// One log line: leading newline, message text, local timestamp, poster name.
#[must_use]
pub fn format_line(text: &str, ts: &str, real_name: &str) -> String {
    format!("\n{} {} {}", text, format_ts(ts), real_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_to_timestamp_epoch() {
        let at_epoch = unix_to_timestamp(0);
        assert_eq!(at_epoch.timestamp(), 0);
    }

    #[test]
    fn test_parse_slack_ts_truncates_fraction() {
        assert_eq!(parse_slack_ts("1503435956.000247"), Some(1503435956));
        assert_eq!(parse_slack_ts("1000"), Some(1000));
        assert_eq!(parse_slack_ts("not-a-ts"), None);
    }

    #[test]
    fn test_format_ts_falls_back_to_raw_value() {
        assert_eq!(format_ts("garbage"), "garbage");
    }

    #[test]
    fn test_format_line_shape() {
        let line = format_line("hi", "1000", "Alice");
        assert!(line.starts_with("\nhi "));
        assert!(line.ends_with(" Alice"));
        assert_eq!(line, format!("\nhi {} Alice", format_ts("1000")));
    }
}
