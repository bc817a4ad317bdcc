//! The Slack Web API client.
//!
//! One method per covered capability; each builds a percent-encoded path,
//! performs exactly one round trip through the injected transport, and maps
//! the JSON envelope to typed data, `Ok(None)` for lookups that find
//! nothing, or a [`SlackError`] carrying the upstream error code.

use serde_json::Value;
use tracing::{info, warn};

use crate::errors::SlackError;
use crate::history;
use crate::models::{
    Channel, ChannelListResponse, ChannelResponse, HistoryResponse, Team, TeamResponse, User,
    UserResponse,
};
use crate::transport::SlackTransport;

/// Optional cursors for a `channels.history` call.
#[derive(Debug, Clone, Default)]
pub struct HistoryOptions {
    pub count: Option<u32>,
    pub latest: Option<String>,
    pub oldest: Option<String>,
}

/// Build a Web API path with a uniformly percent-encoded query string.
#[must_use]
pub fn build_path(method: &str, params: &[(&str, &str)]) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        query.append_pair(key, value);
    }
    format!("/{}?{}", method, query.finish())
}

/// Build the `chat.postMessage` path from an arbitrary payload.
///
/// The client token always wins: any `token` key the caller put in the
/// payload is dropped and replaced.
#[must_use]
pub fn build_post_message_path(token: &str, payload: &serde_json::Map<String, Value>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("token", token);
    for (key, value) in payload {
        if key == "token" {
            continue;
        }
        match value {
            Value::String(s) => query.append_pair(key, s),
            other => query.append_pair(key, &other.to_string()),
        };
    }
    format!("/chat.postMessage?{}", query.finish())
}

/// Slack Web API client over an injected transport.
///
/// The bearer token lives here and is passed explicitly into every call,
/// including the internal channel lookups archive and history perform.
pub struct SlackClient<T: SlackTransport> {
    transport: T,
    token: String,
}

impl<T: SlackTransport> SlackClient<T> {
    pub fn new(transport: T, token: impl Into<String>) -> Self {
        Self {
            transport,
            token: token.into(),
        }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create a channel, or fetch the existing one when the name is taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Slack rejects the call with
    /// any code other than `name_taken`.
    pub async fn create_channel(&self, name: &str) -> Result<Channel, SlackError> {
        let path = build_path("channels.create", &[("token", &self.token), ("name", name)]);
        let body = self.transport.post(&path).await?;
        let resp: ChannelResponse = serde_json::from_str(&body)?;

        if resp.ok {
            return resp.channel.ok_or_else(|| {
                SlackError::ParseError("channels.create: no channel in response".to_string())
            });
        }

        let code = resp.error.unwrap_or_else(|| "unknown".to_string());
        if code == "name_taken" {
            info!("Channel \"{}\" already exists. Getting info.", name);
            return match self.get_channel(name).await? {
                Some(channel) => Ok(channel),
                None => Err(SlackError::ApiError("name_taken".to_string())),
            };
        }

        warn!("channels.create error: {}", code);
        Err(SlackError::ApiError(code))
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or Slack rejects the call.
    pub async fn get_team(&self) -> Result<Team, SlackError> {
        let path = build_path("team.info", &[("token", &self.token)]);
        let body = self.transport.get(&path).await?;
        let resp: TeamResponse = serde_json::from_str(&body)?;

        if !resp.ok {
            let code = resp.error.unwrap_or_else(|| "unknown".to_string());
            warn!("team.info error: {}", code);
            return Err(SlackError::ApiError(code));
        }

        resp.team
            .ok_or_else(|| SlackError::ParseError("team.info: no team in response".to_string()))
    }

    /// Find a channel by exact name: first match in list order wins.
    ///
    /// Only the first page of `channels.list` is consulted; channels beyond
    /// it are invisible to this lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Slack rejects the list call.
    /// A missing channel is `Ok(None)`, not an error.
    pub async fn get_channel(&self, name: &str) -> Result<Option<Channel>, SlackError> {
        let path = build_path("channels.list", &[("token", &self.token)]);
        let body = self.transport.get(&path).await?;
        let resp: ChannelListResponse = serde_json::from_str(&body)?;

        if !resp.ok {
            let code = resp.error.unwrap_or_else(|| "unknown".to_string());
            warn!("Error getting channel list: {}", code);
            return Err(SlackError::ApiError(code));
        }

        for channel in resp.channels.unwrap_or_default() {
            if channel.name == name {
                return Ok(Some(channel));
            }
        }

        info!("Channel \"{}\" not found", name);
        Ok(None)
    }

    /// Archive a channel by name.
    ///
    /// Returns the parsed response body, or `Ok(None)` when no channel with
    /// that name exists.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails.
    pub async fn archive_channel(&self, name: &str) -> Result<Option<Value>, SlackError> {
        let Some(channel) = self.get_channel(name).await? else {
            warn!("Channel \"{}\" not found.", name);
            return Ok(None);
        };

        let path = build_path(
            "channels.archive",
            &[("token", &self.token), ("channel", &channel.id)],
        );
        let body = self.transport.post(&path).await?;
        let parsed: Value = serde_json::from_str(&body)?;

        Ok(Some(parsed))
    }

    /// Fetch channel history by name and fold it into a readable log.
    ///
    /// One line per `"message"` entry, in the order the API returned them,
    /// each carrying the text, the local post time, and the poster's real
    /// name resolved through `users.info`. A per-message lookup failure
    /// falls back to the raw user id rather than aborting the log.
    ///
    /// # Errors
    ///
    /// Returns an error if the list or history request fails or Slack
    /// rejects the history call. An unknown channel is `Ok(None)`.
    pub async fn get_room_history(
        &self,
        name: &str,
        opts: &HistoryOptions,
    ) -> Result<Option<String>, SlackError> {
        let Some(channel) = self.get_channel(name).await? else {
            warn!("Channel \"{}\" not found.", name);
            return Ok(None);
        };

        let mut params: Vec<(&str, String)> = vec![
            ("token", self.token.clone()),
            ("channel", channel.id.clone()),
        ];
        if let Some(count) = opts.count {
            params.push(("count", count.to_string()));
        }
        if let Some(latest) = &opts.latest {
            params.push(("latest", latest.clone()));
        }
        if let Some(oldest) = &opts.oldest {
            params.push(("oldest", oldest.clone()));
        }
        let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let path = build_path("channels.history", &pairs);

        let body = self.transport.get(&path).await?;
        let resp: HistoryResponse = serde_json::from_str(&body)?;

        if !resp.ok {
            let code = resp.error.unwrap_or_else(|| "unknown".to_string());
            warn!("Error getting channel history: {}", code);
            return Err(SlackError::ApiError(code));
        }

        let mut log = String::new();
        for message in resp.messages.unwrap_or_default() {
            if message.kind != "message" {
                continue;
            }

            let poster = match &message.user {
                Some(user_id) => self.resolve_poster(user_id).await,
                None => "unknown".to_string(),
            };
            log.push_str(&history::format_line(&message.text, &message.ts, &poster));
        }

        Ok(Some(log))
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or Slack rejects the call.
    pub async fn get_user_info(&self, user_id: &str) -> Result<User, SlackError> {
        let path = build_path("users.info", &[("token", &self.token), ("user", user_id)]);
        let body = self.transport.get(&path).await?;
        let resp: UserResponse = serde_json::from_str(&body)?;

        if !resp.ok {
            let code = resp.error.unwrap_or_else(|| "unknown".to_string());
            warn!("Error getting user \"{}\": {}", user_id, code);
            return Err(SlackError::ApiError(code));
        }

        resp.user
            .ok_or_else(|| SlackError::ParseError("users.info: no user in response".to_string()))
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or Slack rejects the call.
    pub async fn lookup_by_email(&self, email: &str) -> Result<User, SlackError> {
        let path = build_path(
            "users.lookupByEmail",
            &[("token", &self.token), ("email", email)],
        );
        let body = self.transport.get(&path).await?;
        let resp: UserResponse = serde_json::from_str(&body)?;

        if !resp.ok {
            let code = resp.error.unwrap_or_else(|| "unknown".to_string());
            warn!("Error {} looking up user by email \"{}\"", code, email);
            return Err(SlackError::ApiError(code));
        }

        resp.user.ok_or_else(|| {
            SlackError::ParseError("users.lookupByEmail: no user in response".to_string())
        })
    }

    /// Invite a user to a channel, returning the full parsed response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Slack rejects the call.
    pub async fn invite_to_channel(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<Value, SlackError> {
        let path = build_path(
            "channels.invite",
            &[
                ("token", &self.token),
                ("channel", channel_id),
                ("user", user_id),
            ],
        );
        let body = self.transport.post(&path).await?;
        let parsed: Value = serde_json::from_str(&body)?;

        if !parsed.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            let code = parsed
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string();
            warn!("Error {} inviting to channel \"{}\"", code, channel_id);
            return Err(SlackError::ApiError(code));
        }

        Ok(parsed)
    }

    /// Post a message from an arbitrary key/value payload.
    ///
    /// The client's own token is always sent, replacing any `token` key the
    /// caller supplied.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Slack rejects the call.
    pub async fn post_message(
        &self,
        payload: &serde_json::Map<String, Value>,
    ) -> Result<Value, SlackError> {
        let path = build_post_message_path(&self.token, payload);
        let body = self.transport.post(&path).await?;
        let parsed: Value = serde_json::from_str(&body)?;

        if !parsed.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            let code = parsed
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string();
            warn!("Error posting message: {}", code);
            return Err(SlackError::ApiError(code));
        }

        Ok(parsed)
    }

    /// Resolve a poster's display line for the history log, preferring the
    /// profile real name and falling back to the raw user id.
    async fn resolve_poster(&self, user_id: &str) -> String {
        match self.get_user_info(user_id).await {
            Ok(user) => user
                .profile
                .as_ref()
                .and_then(|p| p.real_name.clone())
                .or_else(|| user.profile.as_ref().and_then(|p| p.display_name.clone()))
                .unwrap_or_else(|| user_id.to_string()),
            Err(e) => {
                warn!("Failed to fetch user info for {}: {}", user_id, e);
                user_id.to_string()
            }
        }
    }
}
