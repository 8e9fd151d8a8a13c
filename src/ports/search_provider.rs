//! Search provider port.

use crate::domain::profile::ProfileRecord;
use crate::domain::search::SearchResult;

/// Ranks profile sections against a free-text query.
///
/// Implementations must be pure with respect to their inputs: no side
/// effects, no error channel, an empty result list for queries that match
/// nothing. The engine only reads the immutable profile record, so it may be
/// invoked concurrently without coordination.
pub trait SearchProvider: Send + Sync {
    fn search(&self, query: &str, profile: &ProfileRecord) -> Vec<SearchResult>;
}
