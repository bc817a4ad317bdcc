//! Pass-through representations of Slack's JSON shapes.
//!
//! The client reads only a handful of fields; everything else the upstream
//! API populates is preserved in the flattened `extra` maps so callers can
//! dig out what they need.

use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Clone)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Profile {
    pub real_name: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub profile: Option<Profile>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Message {
    /// Slack's message subtype discriminator; only `"message"` entries
    /// contribute to a history log.
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub text: String,

    /// Unix seconds as a string, possibly with a fractional part.
    pub ts: String,

    /// Might not exist for bot messages.
    pub user: Option<String>,
}

// Per-method response envelopes. Every Web API response carries `ok` and,
// on failure, an `error` code.

#[derive(Deserialize, Debug)]
pub struct ChannelResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub channel: Option<Channel>,
}

#[derive(Deserialize, Debug)]
pub struct ChannelListResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub channels: Option<Vec<Channel>>,
}

#[derive(Deserialize, Debug)]
pub struct TeamResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub team: Option<Team>,
}

#[derive(Deserialize, Debug)]
pub struct HistoryResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub messages: Option<Vec<Message>>,
    pub has_more: Option<bool>,
}

#[derive(Deserialize, Debug)]
pub struct UserResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_list_response_parsing() {
        let json_str = r#"{"ok": true, "channels": [
            {"id": "C1", "name": "general", "is_archived": false},
            {"id": "C2", "name": "random", "is_archived": true}
        ]}"#;
        let resp: ChannelListResponse = serde_json::from_str(json_str).unwrap();

        assert!(resp.ok);
        let channels = resp.channels.unwrap();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].id, "C1");
        assert_eq!(channels[0].name, "general");
        assert_eq!(channels[1].extra["is_archived"], true);
    }

    #[test]
    fn test_error_envelope_parsing() {
        let json_str = r#"{"ok": false, "error": "invalid_auth"}"#;
        let resp: ChannelListResponse = serde_json::from_str(json_str).unwrap();

        assert!(!resp.ok);
        assert_eq!(resp.error, Some("invalid_auth".to_string()));
        assert!(resp.channels.is_none());
    }

    #[test]
    fn test_user_response_parsing() {
        let json_str = r#"{"ok": true, "user": {
            "id": "U1",
            "profile": {"real_name": "Alice Example", "display_name": "alice"}
        }}"#;
        let resp: UserResponse = serde_json::from_str(json_str).unwrap();

        let user = resp.user.unwrap();
        assert_eq!(user.id, "U1");
        let profile = user.profile.unwrap();
        assert_eq!(profile.real_name.as_deref(), Some("Alice Example"));
    }

    #[test]
    fn test_message_parsing_without_user() {
        // Bot messages may omit the user field entirely
        let json_str = r#"{"type": "message", "text": "beep", "ts": "1000.000200"}"#;
        let msg: Message = serde_json::from_str(json_str).unwrap();

        assert_eq!(msg.kind, "message");
        assert_eq!(msg.text, "beep");
        assert!(msg.user.is_none());
    }
}
