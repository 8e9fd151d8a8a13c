//! Keyword relevance search over the profile record.
//!
//! Pure, synchronous ranking: the query is lower-cased and split on
//! whitespace, every section exposes a handful of weighted text fields, and
//! an entity scores one hit per token contained in a field (substring, not
//! word-boundary aware). Hits are multiplied by the field weight and summed.
//!
//! Emission policy per section:
//! - experience, projects, recommendations: one result per matching entity,
//!   wrapping that entity alone
//! - education: one result per matching entry, but carrying the entire
//!   education list (the education view renders the whole section)
//! - skills: categories are scored individually, only the best one emits,
//!   and its result carries the entire skills array
//! - overview: a single pseudo-entity
//!
//! Results sort by score descending with a stable sort, so equal scores keep
//! the scan order above and entity declaration order within a section.

use crate::domain::profile::ProfileRecord;
use crate::domain::views::ViewPayload;
use crate::ports::SearchProvider;

use super::result::SearchResult;

/// Field name shown in `matched_fields`, derived text, and weight.
type ScoredField = (&'static str, String, u32);

/// Name-like fields count double.
const WEIGHT_NAME: u32 = 2;
const WEIGHT_TEXT: u32 = 1;

/// Keyword-containment search engine.
///
/// Holds no state; may be shared freely across in-flight requests.
#[derive(Debug, Default, Clone)]
pub struct KeywordSearchEngine;

impl KeywordSearchEngine {
    pub fn new() -> Self {
        Self
    }
}

impl SearchProvider for KeywordSearchEngine {
    fn search(&self, query: &str, profile: &ProfileRecord) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let tokens: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let mut results = Vec::new();

        for exp in &profile.experience {
            let fields: Vec<ScoredField> = vec![
                ("company", exp.company.clone(), WEIGHT_NAME),
                ("role", exp.role.clone(), WEIGHT_NAME),
                ("technologies", exp.technologies.join(" "), WEIGHT_TEXT),
                ("achievements", exp.achievements.join(" "), WEIGHT_TEXT),
            ];
            if let Some(scored) = score_fields(&tokens, &fields) {
                results.push(scored.into_result(ViewPayload::Experience(vec![exp.clone()])));
            }
        }

        for project in &profile.projects {
            let fields: Vec<ScoredField> = vec![
                ("name", project.name.clone(), WEIGHT_NAME),
                ("techStack", project.tech_stack.join(" "), WEIGHT_TEXT),
                ("description", project.description.clone(), WEIGHT_TEXT),
                ("impact", project.impact.clone().unwrap_or_default(), WEIGHT_TEXT),
            ];
            if let Some(scored) = score_fields(&tokens, &fields) {
                results.push(scored.into_result(ViewPayload::Projects(vec![project.clone()])));
            }
        }

        // Skills: best category wins, result carries the full skills array
        let mut best_skill: Option<FieldScore> = None;
        for cat in &profile.skills {
            let names: Vec<&str> = cat.skills.iter().map(|s| s.name.as_str()).collect();
            let fields: Vec<ScoredField> = vec![
                ("category", cat.category.clone(), WEIGHT_NAME),
                ("skills", names.join(" "), WEIGHT_TEXT),
            ];
            if let Some(scored) = score_fields(&tokens, &fields) {
                let beats_current = best_skill
                    .as_ref()
                    .map(|best| scored.score > best.score)
                    .unwrap_or(true);
                if beats_current {
                    best_skill = Some(scored);
                }
            }
        }
        if let Some(best) = best_skill {
            results.push(best.into_result(ViewPayload::Skills(profile.skills.clone())));
        }

        let overview_fields: Vec<ScoredField> = vec![
            ("name", profile.overview.name.clone(), WEIGHT_NAME),
            ("title", profile.overview.title.clone(), WEIGHT_NAME),
            ("tagline", profile.overview.tagline.clone(), WEIGHT_TEXT),
        ];
        if let Some(scored) = score_fields(&tokens, &overview_fields) {
            results.push(scored.into_result(ViewPayload::Overview(profile.overview.clone())));
        }

        for edu in &profile.education {
            let fields: Vec<ScoredField> = vec![
                ("institution", edu.institution.clone(), WEIGHT_NAME),
                ("degree", edu.degree.clone(), WEIGHT_NAME),
                ("field", edu.field.clone(), WEIGHT_TEXT),
                ("highlights", edu.highlights.join(" "), WEIGHT_TEXT),
            ];
            if let Some(scored) = score_fields(&tokens, &fields) {
                // The education view renders the whole section, so every
                // match carries the full list rather than the single entry.
                results.push(scored.into_result(ViewPayload::Education(profile.education.clone())));
            }
        }

        for rec in &profile.recommendations {
            let fields: Vec<ScoredField> = vec![
                ("author", rec.author.clone(), WEIGHT_NAME),
                ("company", rec.company.clone(), WEIGHT_TEXT),
                ("role", rec.role.clone(), WEIGHT_TEXT),
                ("text", rec.text.clone(), WEIGHT_TEXT),
            ];
            if let Some(scored) = score_fields(&tokens, &fields) {
                results.push(scored.into_result(ViewPayload::Recommendations(vec![rec.clone()])));
            }
        }

        // Stable: ties keep section scan order, then entity order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }
}

/// Accumulated score for one entity.
struct FieldScore {
    score: u32,
    matched_fields: Vec<String>,
}

impl FieldScore {
    fn into_result(self, payload: ViewPayload) -> SearchResult {
        SearchResult {
            payload,
            score: self.score,
            matched_fields: self.matched_fields,
        }
    }
}

/// Scores one entity's fields against the query tokens.
///
/// Returns None when no field produced a hit, so callers emit only
/// positive-score entities.
fn score_fields(tokens: &[String], fields: &[ScoredField]) -> Option<FieldScore> {
    let mut score = 0u32;
    let mut matched_fields = Vec::new();

    for (name, value, weight) in fields {
        if value.is_empty() {
            continue;
        }
        let lower = value.to_lowercase();
        let hits = tokens.iter().filter(|t| lower.contains(t.as_str())).count() as u32;
        if hits > 0 {
            score += hits * weight;
            matched_fields.push((*name).to_string());
        }
    }

    (score > 0).then_some(FieldScore {
        score,
        matched_fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::ProfileRecord;
    use crate::domain::views::ViewPayload;

    fn engine() -> KeywordSearchEngine {
        KeywordSearchEngine::new()
    }

    fn profile() -> &'static ProfileRecord {
        ProfileRecord::bundled()
    }

    // ─── Empty and unmatched queries ─────────────────────────────────

    #[test]
    fn empty_query_returns_nothing() {
        assert!(engine().search("", profile()).is_empty());
    }

    #[test]
    fn whitespace_query_returns_nothing() {
        assert!(engine().search("   \t\n  ", profile()).is_empty());
    }

    #[test]
    fn garbage_query_returns_nothing() {
        assert!(engine().search("xyznonexistent999", profile()).is_empty());
    }

    // ─── Scoring and ordering ─────────────────────────────────────────

    #[test]
    fn every_result_has_positive_score() {
        let results = engine().search("python engineer toronto", profile());
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.score > 0));
    }

    #[test]
    fn results_are_sorted_by_score_descending() {
        let results = engine().search("python ai engineer", profile());
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn equal_scores_keep_section_scan_order() {
        // A query hitting several sections with identical low scores must
        // preserve experience-before-projects emission order.
        let results = engine().search("go", profile());
        let mut last_score = u32::MAX;
        let mut first_exp_rank = None;
        let mut first_proj_rank = None;
        for (rank, r) in results.iter().enumerate() {
            assert!(r.score <= last_score);
            last_score = r.score;
            match (&r.payload, r.score) {
                (ViewPayload::Experience(_), s) if first_exp_rank.is_none() => {
                    first_exp_rank = Some((rank, s));
                }
                (ViewPayload::Projects(_), s) if first_proj_rank.is_none() => {
                    first_proj_rank = Some((rank, s));
                }
                _ => {}
            }
        }
        if let (Some((exp_rank, exp_score)), Some((proj_rank, proj_score))) =
            (first_exp_rank, first_proj_rank)
        {
            if exp_score == proj_score {
                assert!(exp_rank < proj_rank);
            }
        }
    }

    #[test]
    fn more_matching_tokens_never_lower_the_top_score() {
        let single = engine().search("Python", profile());
        let multi = engine().search("Python AI engineer", profile());
        assert!(!single.is_empty());
        assert!(single[0].score <= multi[0].score);
    }

    #[test]
    fn search_is_case_insensitive() {
        let lower = engine().search("python dayforce", profile());
        let upper = engine().search("PYTHON DAYFORCE", profile());
        assert_eq!(lower, upper);
    }

    #[test]
    fn name_fields_outweigh_text_fields() {
        // "Dayforce" appears as a company name (weight 2) and in a
        // recommendation text (weight 1); the experience entry must rank
        // first.
        let results = engine().search("Dayforce", profile());
        assert!(matches!(results[0].payload, ViewPayload::Experience(_)));
        assert!(results[0].matched_fields.contains(&"company".to_string()));
    }

    #[test]
    fn substring_containment_is_not_word_boundary_aware() {
        // "script" is a substring of "TypeScript" and "JavaScript"
        let results = engine().search("script", profile());
        assert!(!results.is_empty());
    }

    #[test]
    fn repeated_tokens_count_twice() {
        let once = engine().search("Dayforce", profile());
        let twice = engine().search("Dayforce Dayforce", profile());
        assert_eq!(twice[0].score, once[0].score * 2);
    }

    // ─── Section emission policies ────────────────────────────────────

    #[test]
    fn experience_results_wrap_a_single_entry() {
        let results = engine().search("Dayforce", profile());
        match &results[0].payload {
            ViewPayload::Experience(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].company, "Dayforce");
            }
            other => panic!("expected experience view, got {}", other.view_name()),
        }
    }

    #[test]
    fn project_results_wrap_a_single_entry() {
        let results = engine().search("MailflowAI", profile());
        let project = results
            .iter()
            .find_map(|r| match &r.payload {
                ViewPayload::Projects(p) => Some(p),
                _ => None,
            })
            .expect("a project result");
        assert_eq!(project.len(), 1);
        assert_eq!(project[0].name, "MailflowAI");
    }

    #[test]
    fn skills_emit_at_most_one_result_with_full_array() {
        let results = engine().search("MongoDB PostgreSQL Redis", profile());
        let skills: Vec<_> = results
            .iter()
            .filter_map(|r| match &r.payload {
                ViewPayload::Skills(cats) => Some(cats),
                _ => None,
            })
            .collect();
        assert_eq!(skills.len(), 1);
        // Full array, not the matching category alone
        assert_eq!(skills[0].len(), profile().skills.len());
    }

    #[test]
    fn skills_tie_keeps_first_category_in_order() {
        use crate::domain::profile::{Proficiency, Skill, SkillCategory};

        // Two categories scoring identically: the first one scores via its
        // skill names (1 hit x weight 1, twice), the second via its category
        // name (2 hits x weight 2 would break the tie, so give it one token).
        let mut record = profile().clone();
        record.skills = vec![
            SkillCategory {
                category: "x".to_string(),
                skills: vec![
                    Skill {
                        name: "aa bb".to_string(),
                        proficiency: Proficiency::Expert,
                    },
                ],
            },
            SkillCategory {
                category: "aa".to_string(),
                skills: vec![],
            },
        ];

        // "aa bb": first category scores 2 via skills, second scores 2 via
        // category name - a tie that must resolve to the first category.
        let results = engine().search("aa bb", &record);
        let skills_result = results
            .iter()
            .find(|r| matches!(r.payload, ViewPayload::Skills(_)))
            .expect("skills result");
        assert_eq!(skills_result.score, 2);
        assert_eq!(skills_result.matched_fields, vec!["skills".to_string()]);
    }

    #[test]
    fn education_match_carries_entire_list() {
        let results = engine().search("Toronto university", profile());
        let edu = results
            .iter()
            .find_map(|r| match &r.payload {
                ViewPayload::Education(list) => Some(list),
                _ => None,
            })
            .expect("an education result");
        assert_eq!(edu.len(), profile().education.len());
    }

    #[test]
    fn overview_emits_at_most_one_result() {
        let results = engine().search("Aneeq", profile());
        let overviews = results
            .iter()
            .filter(|r| matches!(r.payload, ViewPayload::Overview(_)))
            .count();
        assert_eq!(overviews, 1);
    }

    #[test]
    fn recommendation_results_wrap_a_single_entry() {
        let results = engine().search("Jane", profile());
        let recs = results
            .iter()
            .find_map(|r| match &r.payload {
                ViewPayload::Recommendations(r) => Some(r),
                _ => None,
            })
            .expect("a recommendation result");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].author, "Jane Smith");
    }

    #[test]
    fn matched_fields_name_only_hit_fields() {
        let results = engine().search("LangGraph", profile());
        let exp = results
            .iter()
            .find(|r| matches!(r.payload, ViewPayload::Experience(_)))
            .expect("experience result");
        assert!(exp.matched_fields.contains(&"technologies".to_string()));
        assert!(!exp.matched_fields.contains(&"company".to_string()));
    }
}
