//! Relevance search - ranks profile sections against a free-text query.

mod keyword;
mod result;

pub use keyword::KeywordSearchEngine;
pub use result::SearchResult;
