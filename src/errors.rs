use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Failed to parse Slack response: {0}")]
    ParseError(String),

    #[error("Slack API rejected the call: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for SlackError {
    fn from(error: reqwest::Error) -> Self {
        SlackError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SlackError {
    fn from(error: serde_json::Error) -> Self {
        SlackError::ParseError(error.to_string())
    }
}
