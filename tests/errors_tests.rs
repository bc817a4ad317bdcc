use std::error::Error;

use slack_rest::errors::SlackError;

#[test]
fn test_slack_error_implements_error_trait() {
    // Verify SlackError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = SlackError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_slack_error_display() {
    // Verify Display implementation works correctly
    let error = SlackError::ApiError("invalid_auth".to_string());
    assert_eq!(
        format!("{error}"),
        "Slack API rejected the call: invalid_auth"
    );

    let error = SlackError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );

    let error = SlackError::ParseError("unexpected end of input".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to parse Slack response: unexpected end of input"
    );
}

#[test]
fn test_slack_error_from_serde_json() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let slack_err: SlackError = parse_err.into();

    match slack_err {
        SlackError::ParseError(_) => {}
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[test]
fn test_slack_error_from_reqwest() {
    // We can't easily construct a reqwest::Error directly, but we can verify
    // that the From<reqwest::Error> trait is implemented by checking
    // that our conversion function compiles
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SlackError {
        SlackError::from(err)
    }
}
