//! SQLite adapters.

mod analytics_store;

pub use analytics_store::SqliteAnalyticsStore;
