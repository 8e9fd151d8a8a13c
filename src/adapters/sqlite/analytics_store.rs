//! SQLite implementation of AnalyticsStore.
//!
//! One table, append-only. SQLite gives row-level atomicity on inserts, so
//! concurrent writers cannot corrupt the log and readers never observe a
//! half-written row; no application-level locking is needed.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

use crate::ports::{
    AnalyticsError, AnalyticsEvent, AnalyticsStore, CategoryCount, NewAnalyticsEvent, ToolCount,
};

/// SQLite-backed analytics event log.
#[derive(Clone)]
pub struct SqliteAnalyticsStore {
    pool: SqlitePool,
}

impl SqliteAnalyticsStore {
    /// Opens (creating if missing) the database file at `db_path`.
    pub async fn connect(db_path: &str) -> Result<Self, AnalyticsError> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::initialize(pool).await
    }

    /// Opens a private in-memory database, used by tests and local runs that
    /// don't want a file on disk.
    ///
    /// The pool is pinned to a single connection: an in-memory SQLite
    /// database lives and dies with its connection.
    pub async fn in_memory() -> Result<Self, AnalyticsError> {
        let options = SqliteConnectOptions::new().filename(":memory:");
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::initialize(pool).await
    }

    async fn initialize(pool: SqlitePool) -> Result<Self, AnalyticsError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS analytics_events (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                tool         TEXT NOT NULL,
                query        TEXT,
                category     TEXT,
                user_message TEXT,
                timestamp    TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    fn row_to_event(row: &sqlx::sqlite::SqliteRow) -> AnalyticsEvent {
        AnalyticsEvent {
            id: row.get("id"),
            tool: row.get("tool"),
            query: row.get("query"),
            category: row.get("category"),
            user_message: row.get("user_message"),
            timestamp: row.get("timestamp"),
        }
    }
}

#[async_trait]
impl AnalyticsStore for SqliteAnalyticsStore {
    async fn insert(&self, event: NewAnalyticsEvent) -> Result<(), AnalyticsError> {
        // Stamped here, not by the caller
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        sqlx::query(
            r#"
            INSERT INTO analytics_events (tool, query, category, user_message, timestamp)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&event.tool)
        .bind(&event.query)
        .bind(&event.category)
        .bind(&event.user_message)
        .bind(&timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn tool_counts(&self) -> Result<Vec<ToolCount>, AnalyticsError> {
        let rows = sqlx::query(
            r#"
            SELECT tool, COUNT(*) AS count
            FROM analytics_events
            GROUP BY tool
            ORDER BY count DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| ToolCount {
                tool: row.get("tool"),
                count: row.get("count"),
            })
            .collect())
    }

    async fn category_counts(&self) -> Result<Vec<CategoryCount>, AnalyticsError> {
        let rows = sqlx::query(
            r#"
            SELECT category, COUNT(*) AS count
            FROM analytics_events
            WHERE category IS NOT NULL
            GROUP BY category
            ORDER BY count DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| CategoryCount {
                category: row.get("category"),
                count: row.get("count"),
            })
            .collect())
    }

    async fn recent_events(&self, limit: i64) -> Result<Vec<AnalyticsEvent>, AnalyticsError> {
        // id DESC breaks sub-millisecond timestamp collisions: the
        // later-inserted event sorts first
        let rows = sqlx::query(
            r#"
            SELECT id, tool, query, category, user_message, timestamp
            FROM analytics_events
            ORDER BY timestamp DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_event).collect())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
