//! Search result type.

use serde::Serialize;

use crate::domain::views::ViewPayload;

/// One ranked section match.
///
/// Produced per search call and never persisted; `score` is always at least
/// 1 (zero-score entities are not emitted).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(flatten)]
    pub payload: ViewPayload,
    pub score: u32,
    /// Names of the scored fields that produced at least one hit.
    pub matched_fields: Vec<String>,
}

impl SearchResult {
    /// The wire tag of the matched section.
    pub fn view_name(&self) -> &'static str {
        self.payload.view_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::views::ViewPayload;

    #[test]
    fn result_flattens_view_and_data() {
        let result = SearchResult {
            payload: ViewPayload::Hobbies(vec!["Travel".to_string()]),
            score: 3,
            matched_fields: vec!["name".to_string()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["view"], "hobbies");
        assert_eq!(json["score"], 3);
        assert_eq!(json["matchedFields"][0], "name");
    }
}
