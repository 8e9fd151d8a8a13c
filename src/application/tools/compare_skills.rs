//! CompareSkillsHandler - proficiency lookup for a handful of skill names.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::profile::ProfileRecord;
use crate::domain::views::{SkillMatch, ViewPayload};

use super::reply::ToolReply;

/// Largest number of skills comparable in one call.
pub const MAX_SKILLS: usize = 4;

/// Input for the compare-skills tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareSkillsInput {
    pub skills: Vec<String>,
}

impl CompareSkillsInput {
    pub fn validate(&self) -> Result<(), String> {
        if self.skills.is_empty() {
            return Err("skills must contain at least one name".to_string());
        }
        if self.skills.len() > MAX_SKILLS {
            return Err(format!("skills must contain at most {} names", MAX_SKILLS));
        }
        Ok(())
    }
}

/// Handler for skill comparisons.
pub struct CompareSkillsHandler {
    profile: Arc<ProfileRecord>,
}

impl CompareSkillsHandler {
    pub fn new(profile: Arc<ProfileRecord>) -> Self {
        Self { profile }
    }

    pub fn handle(&self, input: CompareSkillsInput) -> ToolReply {
        let matches: Vec<SkillMatch> = input
            .skills
            .iter()
            .map(|name| match self.profile.find_skill(name) {
                Some((skill, category)) => SkillMatch {
                    name: skill.name.clone(),
                    proficiency: Some(skill.proficiency),
                    category: Some(category.to_string()),
                },
                None => SkillMatch {
                    name: name.clone(),
                    proficiency: None,
                    category: None,
                },
            })
            .collect();

        let text_parts: Vec<String> = matches
            .iter()
            .map(|m| match (&m.proficiency, &m.category) {
                (Some(proficiency), Some(category)) => {
                    format!("{}: {} ({})", m.name, proficiency.as_str(), category)
                }
                _ => format!("{}: not in skill set", m.name),
            })
            .collect();

        ToolReply::new(
            ViewPayload::SkillComparison(matches),
            text_parts.join(" | "),
        )
    }
}
