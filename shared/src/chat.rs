//! AI coach conversation model
//!
//! The conversation is append-only and lives only as long as the dashboard
//! that owns it. Assistant replies are sometimes the raw JSON envelope the
//! agent produced; `display_content` unwraps the `assistant_reply` field of
//! such envelopes and leaves everything else untouched.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

/// Shown in place of a reply when the chat request fails.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong talking to AROMI.";

const SESSION_ID_PREFIX: &str = "local-";
const SESSION_ID_LEN: usize = 8;

/// `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: Option<i64>,
    pub message: String,
    pub session_id: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            user_id: None,
            message: message.into(),
            session_id: session_id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default)]
    pub tool_used: Option<String>,
    #[serde(default)]
    pub tool_result: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }

    /// Text to render. User messages are shown verbatim.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self.role {
            ChatRole::User => Cow::Borrowed(&self.content),
            ChatRole::Assistant => display_content(&self.content),
        }
    }
}

/// Unwraps `{"assistant_reply": "..."}` envelopes.
///
/// Plain text, malformed JSON, JSON without the field and JSON whose field
/// is not a string are all returned unchanged.
pub fn display_content(content: &str) -> Cow<'_, str> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Cow::Borrowed(content);
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => match map.get("assistant_reply") {
            Some(serde_json::Value::String(reply)) => Cow::Owned(reply.clone()),
            _ => Cow::Borrowed(content),
        },
        _ => Cow::Borrowed(content),
    }
}

/// Append-only conversation log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_reply(&mut self, reply: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(reply));
    }

    pub fn push_fallback(&mut self) {
        self.push_reply(FALLBACK_REPLY);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Generates a per-mount chat session id such as `local-3f9a0c1e`.
pub fn new_session_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}{}", SESSION_ID_PREFIX, &id[..SESSION_ID_LEN])
}

/// One conversation thread with AROMI.
///
/// Created once per dashboard mount; every request built from it carries the
/// same session id, so the coach sees one continuous history no matter how
/// often the chat panel itself is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    id: String,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: new_session_id(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn request(&self, message: impl Into<String>) -> ChatRequest {
        ChatRequest::new(message, self.id.clone())
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_assistant_reply_envelope() {
        assert_eq!(display_content(r#"{"assistant_reply":"hi"}"#), "hi");
        assert_eq!(
            display_content("  {\"assistant_reply\": \"stretch first\", \"tool\": null}\n"),
            "stretch first"
        );
    }

    #[test]
    fn plain_text_is_verbatim() {
        assert_eq!(display_content("hello"), "hello");
        assert_eq!(display_content(""), "");
        assert_eq!(display_content("   "), "   ");
    }

    #[test]
    fn json_without_string_reply_is_verbatim() {
        assert_eq!(display_content(r#"{"foo":1}"#), r#"{"foo":1}"#);
        assert_eq!(
            display_content(r#"{"assistant_reply":42}"#),
            r#"{"assistant_reply":42}"#
        );
        assert_eq!(display_content(r#"["assistant_reply"]"#), r#"["assistant_reply"]"#);
        assert_eq!(display_content(r#"{"assistant_reply":"#), r#"{"assistant_reply":"#);
    }

    #[test]
    fn user_messages_are_never_unwrapped() {
        let msg = ChatMessage::user(r#"{"assistant_reply":"hi"}"#);
        assert_eq!(msg.display_text(), r#"{"assistant_reply":"hi"}"#);
        let reply = ChatMessage::assistant(r#"{"assistant_reply":"hi"}"#);
        assert_eq!(reply.display_text(), "hi");
    }

    #[test]
    fn log_appends_in_order() {
        let mut log = ChatLog::new();
        log.push_user("How many squats?");
        log.push_fallback();
        log.push_user("Retry");
        log.push_reply("Three sets of ten.");

        let roles: Vec<ChatRole> = log.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::User,
                ChatRole::Assistant
            ]
        );
        assert_eq!(log.messages()[1].content, FALLBACK_REPLY);
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn request_serializes_null_user_id() {
        let body = serde_json::to_value(ChatRequest::new("hey", "local-abc")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"user_id": null, "message": "hey", "session_id": "local-abc"})
        );
    }

    #[test]
    fn session_id_shape() {
        let id = new_session_id();
        assert!(id.starts_with("local-"));
        let suffix = &id["local-".len()..];
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(id, new_session_id());
    }

    #[test]
    fn one_session_keeps_its_id_across_requests() {
        let session = ChatSession::new();
        let first = session.request("Warm-up ideas?");
        let second = session.clone().request("And cool-down?");

        assert_eq!(first.session_id, session.id());
        assert_eq!(second.session_id, first.session_id);
        assert_eq!(second.message, "And cool-down?");
    }

    #[test]
    fn separate_sessions_get_separate_ids() {
        assert_ne!(ChatSession::new().id(), ChatSession::new().id());
    }
}
