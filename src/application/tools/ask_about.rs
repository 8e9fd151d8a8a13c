//! AskAboutHandler - category lookup into the profile record.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::profile::ProfileRecord;
use crate::domain::views::ViewPayload;

use super::reply::ToolReply;

/// Category selector for the ask-about tool.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AskCategory {
    Overview,
    Experience,
    Projects,
    Skills,
    Education,
    Contact,
    Hobbies,
    CurrentRole,
}

/// Input for the ask-about tool.
#[derive(Debug, Clone, Deserialize)]
pub struct AskAboutInput {
    pub category: AskCategory,
}

/// Handler for category lookups.
pub struct AskAboutHandler {
    profile: Arc<ProfileRecord>,
}

impl AskAboutHandler {
    pub fn new(profile: Arc<ProfileRecord>) -> Self {
        Self { profile }
    }

    pub fn handle(&self, input: AskAboutInput) -> ToolReply {
        let profile = &self.profile;
        match input.category {
            AskCategory::Overview => {
                let o = &profile.overview;
                let text = format!(
                    "{} is an {} with {}+ years of experience. {}",
                    o.name, o.title, o.years_experience, o.tagline
                );
                ToolReply::new(ViewPayload::Overview(o.clone()), text)
            }

            AskCategory::CurrentRole => match profile.current_role() {
                Some(current) => {
                    let first_achievement =
                        current.achievements.first().map(String::as_str).unwrap_or("");
                    let text = format!(
                        "Currently working at {} as {}. {}",
                        current.company, current.role, first_achievement
                    );
                    ToolReply::new(ViewPayload::Experience(vec![current.clone()]), text)
                        .with_focus_id(current.id.clone())
                }
                None => ToolReply::new(
                    ViewPayload::Experience(Vec::new()),
                    "No current role found.",
                ),
            },

            AskCategory::Experience => {
                let companies: Vec<&str> = profile
                    .experience
                    .iter()
                    .take(3)
                    .map(|e| e.company.as_str())
                    .collect();
                let text = format!(
                    "{} has worked at {} companies including {}",
                    profile.overview.name,
                    profile.experience.len(),
                    companies.join(", ")
                );
                ToolReply::new(ViewPayload::Experience(profile.experience.clone()), text)
            }

            AskCategory::Projects => {
                let featured: Vec<&str> = profile
                    .projects
                    .iter()
                    .filter(|p| p.featured)
                    .map(|p| p.name.as_str())
                    .collect();
                let text = format!("Featured projects: {}", featured.join(", "));
                ToolReply::new(ViewPayload::Projects(profile.projects.clone()), text)
            }

            AskCategory::Skills => {
                let expert: Vec<&str> = profile
                    .skills
                    .iter()
                    .flat_map(|c| c.skills.iter())
                    .filter(|s| s.proficiency == crate::domain::profile::Proficiency::Expert)
                    .map(|s| s.name.as_str())
                    .collect();
                let text = format!("Expert in {}", expert.join(", "));
                ToolReply::new(ViewPayload::Skills(profile.skills.clone()), text)
            }

            AskCategory::Education => {
                let text = match profile.education.first() {
                    Some(edu) => format!(
                        "{} in {} from {}",
                        edu.degree, edu.field, edu.institution
                    ),
                    None => "No education on record.".to_string(),
                };
                ToolReply::new(ViewPayload::Education(profile.education.clone()), text)
            }

            AskCategory::Contact => {
                let c = &profile.contact;
                let text = format!("Email: {}, Portfolio: {}", c.email, c.portfolio);
                ToolReply::new(ViewPayload::Contact(c.clone()), text)
            }

            AskCategory::Hobbies => {
                let text = format!("Interests: {}", profile.hobbies.join(", "));
                ToolReply::new(ViewPayload::Hobbies(profile.hobbies.clone()), text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> AskAboutHandler {
        AskAboutHandler::new(Arc::new(ProfileRecord::bundled().clone()))
    }

    fn handle(category: AskCategory) -> ToolReply {
        handler().handle(AskAboutInput { category })
    }

    #[test]
    fn overview_returns_overview_view() {
        let reply = handle(AskCategory::Overview);
        assert!(matches!(reply.payload, ViewPayload::Overview(_)));
        assert!(reply.text.contains("Aneeq Hassan"));
        assert!(reply.text.contains("3+ years"));
    }

    #[test]
    fn current_role_focuses_the_current_entry() {
        let reply = handle(AskCategory::CurrentRole);
        match &reply.payload {
            ViewPayload::Experience(entries) => {
                assert_eq!(entries.len(), 1);
                assert!(entries[0].current);
            }
            other => panic!("unexpected view {}", other.view_name()),
        }
        assert_eq!(reply.focus_id.as_deref(), Some("dayforce"));
        assert!(reply.text.starts_with("Currently working at Dayforce"));
    }

    #[test]
    fn current_role_without_current_entry_is_empty() {
        let mut record = ProfileRecord::bundled().clone();
        for exp in &mut record.experience {
            exp.current = false;
        }
        let handler = AskAboutHandler::new(Arc::new(record));
        let reply = handler.handle(AskAboutInput {
            category: AskCategory::CurrentRole,
        });
        assert!(matches!(&reply.payload, ViewPayload::Experience(e) if e.is_empty()));
        assert_eq!(reply.text, "No current role found.");
        assert!(reply.focus_id.is_none());
    }

    #[test]
    fn experience_lists_all_entries() {
        let reply = handle(AskCategory::Experience);
        match &reply.payload {
            ViewPayload::Experience(entries) => {
                assert_eq!(entries.len(), ProfileRecord::bundled().experience.len());
            }
            other => panic!("unexpected view {}", other.view_name()),
        }
        assert!(reply.text.contains("Dayforce"));
    }

    #[test]
    fn projects_text_names_featured_only() {
        let reply = handle(AskCategory::Projects);
        assert!(reply.text.contains("MailflowAI"));
        assert!(!reply.text.contains("Proxy Server"));
    }

    #[test]
    fn skills_text_names_expert_skills() {
        let reply = handle(AskCategory::Skills);
        assert!(reply.text.contains("Python"));
        assert!(!reply.text.contains("scikit-learn"));
    }

    #[test]
    fn education_reports_first_entry() {
        let reply = handle(AskCategory::Education);
        assert_eq!(
            reply.text,
            "Bachelor of Science in Computer Science from University of Toronto"
        );
    }

    #[test]
    fn contact_and_hobbies_views() {
        assert!(matches!(handle(AskCategory::Contact).payload, ViewPayload::Contact(_)));
        assert!(matches!(handle(AskCategory::Hobbies).payload, ViewPayload::Hobbies(_)));
    }

    #[test]
    fn category_deserializes_kebab_case() {
        let input: AskAboutInput =
            serde_json::from_value(serde_json::json!({"category": "current-role"})).unwrap();
        assert_eq!(input.category, AskCategory::CurrentRole);
    }
}
