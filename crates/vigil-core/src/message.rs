//! Conversation message types.
//!
//! This module contains types for representing messages exchanged with the
//! console assistant, including roles, payload shapes, and message content.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the console assistant.
    Assistant,
    /// System-generated message.
    System,
}

/// Determines which renderer consumes the message payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Plain text, no payload.
    Text,
    /// Category/value series for a chart renderer.
    Chart,
    /// Tabular rows for a table renderer.
    Table,
    /// A suggested action for the host surface.
    Action,
}

/// Tabular payload: column headers plus rows of display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePayload {
    /// Column headers, in display order.
    pub columns: Vec<String>,
    /// Rows of cell values; each row has one cell per column.
    pub rows: Vec<Vec<String>>,
}

/// A single labelled point in a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Category label (e.g., a weekday).
    pub label: String,
    /// Numeric value at this point.
    pub value: f64,
}

/// Chart payload: a named series of labelled points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    /// Name of the series (e.g., "Risk score").
    pub series: String,
    /// Ordered data points.
    pub points: Vec<SeriesPoint>,
}

/// Structured data attached to a message, consumed by the renderer
/// selected by [`MessageKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagePayload {
    /// Tabular rows.
    Table(TablePayload),
    /// Category/value series.
    Chart(ChartPayload),
}

/// A single message in a conversation history.
///
/// Messages are append-only values: once created they are never mutated or
/// deleted. The list holding them is owned by the conversation session and
/// discarded with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique, monotonically increasing (time-based) identifier.
    pub id: u64,
    /// The role of the message sender.
    pub role: MessageRole,
    /// Which renderer consumes the payload.
    pub kind: MessageKind,
    /// Human-readable content.
    pub text: String,
    /// Optional structured data; shape depends on `kind`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<MessagePayload>,
    /// Timestamp when the message was created (ISO 8601 format).
    pub created_at: String,
}

/// Issues the next message id: current Unix millis, bumped past the last
/// issued id so ids stay strictly increasing even within one millisecond.
fn next_message_id() -> u64 {
    static LAST_ID: AtomicU64 = AtomicU64::new(0);
    let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(prev + 1);
        match LAST_ID.compare_exchange_weak(prev, candidate, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(actual) => prev = actual,
        }
    }
}

impl Message {
    fn new(role: MessageRole, kind: MessageKind, text: String, payload: Option<MessagePayload>) -> Self {
        Self {
            id: next_message_id(),
            role,
            kind,
            text,
            payload,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates a plain-text user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, MessageKind::Text, text.into(), None)
    }

    /// Creates a plain-text assistant message.
    pub fn assistant_text(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, MessageKind::Text, text.into(), None)
    }

    /// Creates an assistant message carrying a tabular payload.
    pub fn assistant_table(text: impl Into<String>, table: TablePayload) -> Self {
        Self::new(
            MessageRole::Assistant,
            MessageKind::Table,
            text.into(),
            Some(MessagePayload::Table(table)),
        )
    }

    /// Creates an assistant message carrying a chart payload.
    pub fn assistant_chart(text: impl Into<String>, chart: ChartPayload) -> Self {
        Self::new(
            MessageRole::Assistant,
            MessageKind::Chart,
            text.into(),
            Some(MessagePayload::Chart(chart)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_strictly_increase() {
        let ids: Vec<u64> = (0..50).map(|_| Message::user("hi").id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "ids must be strictly increasing");
        }
    }

    #[test]
    fn test_user_message_has_no_payload() {
        let msg = Message::user("show me vulnerabilities");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.kind, MessageKind::Text);
        assert!(msg.payload.is_none());
        assert!(!msg.created_at.is_empty());
    }

    #[test]
    fn test_message_serialization_round_trip() {
        let original = Message::assistant_chart(
            "Risk trend for the last week",
            ChartPayload {
                series: "Risk score".to_string(),
                points: vec![SeriesPoint {
                    label: "Mon".to_string(),
                    value: 62.0,
                }],
            },
        );

        let json_string = serde_json::to_string(&original).unwrap();
        let deserialized: Message = serde_json::from_str(&json_string).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_payload_tagging() {
        let msg = Message::assistant_table(
            "Open vulnerabilities",
            TablePayload {
                columns: vec!["ID".to_string()],
                rows: vec![vec!["CVE-2024-1234".to_string()]],
            },
        );
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["kind"], "table");
        assert_eq!(json["payload"]["type"], "table");
    }
}
