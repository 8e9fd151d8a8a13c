//! Analytics event store port.
//!
//! An append-only log of tool invocations plus the aggregation queries the
//! admin dashboard consumes. Events are immutable once written; there is no
//! update, delete, or retention logic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One logged tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    /// Monotonically increasing row id.
    pub id: i64,
    pub tool: String,
    pub query: Option<String>,
    pub category: Option<String>,
    pub user_message: Option<String>,
    /// RFC-3339 UTC timestamp stamped by the store at insert time.
    pub timestamp: String,
}

/// Fields supplied by the caller when logging an event.
///
/// The id and timestamp are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewAnalyticsEvent {
    pub tool: String,
    pub query: Option<String>,
    pub category: Option<String>,
    pub user_message: Option<String>,
}

impl NewAnalyticsEvent {
    pub fn for_tool(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            ..Self::default()
        }
    }
}

/// Invocation count for one tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCount {
    pub tool: String,
    pub count: i64,
}

/// Invocation count for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Append-only analytics log with aggregation reads.
///
/// The store is the only shared mutable resource in the system. Each insert
/// is a single atomic row append; readers never observe a half-written row.
/// After `close` the store accepts no further operations; construct a new
/// store to reopen.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Appends one event, stamping the current wall-clock timestamp.
    async fn insert(&self, event: NewAnalyticsEvent) -> Result<(), AnalyticsError>;

    /// Per-tool invocation counts, ordered by count descending.
    async fn tool_counts(&self) -> Result<Vec<ToolCount>, AnalyticsError>;

    /// Per-category invocation counts, ordered by count descending.
    /// Events without a category are excluded.
    async fn category_counts(&self) -> Result<Vec<CategoryCount>, AnalyticsError>;

    /// Up to `limit` most recent events, newest first. Equal timestamps are
    /// broken by insertion order, most-recently-inserted first.
    async fn recent_events(&self, limit: i64) -> Result<Vec<AnalyticsEvent>, AnalyticsError>;

    /// Releases the underlying storage. Callers invoke this exactly once
    /// during shutdown.
    async fn close(&self);
}

/// Default number of events returned by the recent-events query.
pub const DEFAULT_RECENT_LIMIT: i64 = 50;

/// Errors from the analytics storage layer.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for AnalyticsError {
    fn from(err: sqlx::Error) -> Self {
        AnalyticsError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_for_tool_leaves_optionals_unset() {
        let event = NewAnalyticsEvent::for_tool("ask_anything");
        assert_eq!(event.tool, "ask_anything");
        assert!(event.query.is_none());
        assert!(event.category.is_none());
        assert!(event.user_message.is_none());
    }

    #[test]
    fn event_serializes_user_message_camel_case() {
        let event = AnalyticsEvent {
            id: 1,
            tool: "get_resume".to_string(),
            query: None,
            category: None,
            user_message: Some("hi".to_string()),
            timestamp: "2025-01-01T00:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["userMessage"], "hi");
        assert_eq!(json["query"], serde_json::Value::Null);
    }

    #[test]
    fn error_conversion_from_sqlx() {
        let err: AnalyticsError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AnalyticsError::Database(_)));
    }
}
