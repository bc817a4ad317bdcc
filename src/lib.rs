/// slack-rest - A thin client wrapper around Slack's REST API.
///
/// This crate exposes one operation per Slack capability the wrapper covers:
/// create/list/archive channel, fetch channel history, user lookup by id or
/// email, channel invites, and message posting. Each operation builds a
/// percent-encoded path and query string, performs exactly one HTTP round
/// trip through an injected [`transport::SlackTransport`], and maps the JSON
/// response into typed data or a [`errors::SlackError`].
///
/// # Architecture
///
/// The client holds its bearer token explicitly and passes it into every
/// call, including internal ones (channel lookup inside archive/history).
/// There is no retry, pagination, or caching layer: only the first page of
/// `channels.list` is consulted, and history formatting performs one
/// `users.info` lookup per message.
///
/// # Example
///
/// ```no_run
/// use slack_rest::{HttpTransport, SlackClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     slack_rest::setup_logging();
///
///     let client = SlackClient::new(HttpTransport::new(), "xoxb-my-token");
///
///     if let Some(channel) = client.get_channel("general").await? {
///         println!("#general is {}", channel.id);
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod client;
pub mod errors;
pub mod history;
pub mod models;
pub mod transport;

// Re-export main types for convenience
pub use client::{HistoryOptions, SlackClient};
pub use errors::SlackError;
pub use history::unix_to_timestamp;
pub use models::{Channel, Message, Profile, Team, User};
pub use transport::{HttpTransport, SlackTransport};

/// Configure structured logging with tracing-subscriber.
///
/// Call once at startup of the embedding application; the client itself only
/// emits `tracing` events and never installs a subscriber.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
