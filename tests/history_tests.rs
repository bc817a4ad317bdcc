use slack_rest::history::{format_line, format_ts, parse_slack_ts};
use slack_rest::unix_to_timestamp;

#[test]
fn test_unix_to_timestamp_epoch_in_local_calendar() {
    let at_epoch = unix_to_timestamp(0);

    // Local calendar representation of the epoch instant
    assert_eq!(at_epoch.timestamp(), 0);
    assert_eq!(
        at_epoch.naive_utc(),
        chrono::DateTime::<chrono::Utc>::from_timestamp(0, 0)
            .unwrap()
            .naive_utc()
    );
}

#[test]
fn test_slack_ts_fraction_is_truncated() {
    assert_eq!(parse_slack_ts("1503435956.000247"), Some(1503435956));
}

#[test]
fn test_format_line_matches_log_shape() {
    let line = format_line("hi", "1000", "Alice");

    assert_eq!(line, format!("\nhi {} Alice", format_ts("1000")));
}

#[test]
fn test_format_ts_keeps_unparseable_values_verbatim() {
    assert_eq!(format_ts(""), "");
    assert_eq!(format_ts("later"), "later");
}
