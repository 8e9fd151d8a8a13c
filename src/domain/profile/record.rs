//! Profile record types.
//!
//! The profile is a fixed aggregate partitioned into named sections. It is
//! loaded once at startup and never mutated afterwards; every entity inside
//! it is value-typed (cloning a section clones its data, there are no
//! cross-entity references beyond denormalized strings).

use serde::{Deserialize, Serialize};

/// The complete profile dataset for one person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRecord {
    pub overview: Overview,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<Education>,
    pub contact: Contact,
    pub hobbies: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Headline facts about the person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub years_experience: u32,
    pub languages: Vec<String>,
}

/// One position held, past or present.
///
/// At most one entry should carry `current == true`; this is a dataset
/// convention, not an enforced invariant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub location: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
    pub current: bool,
}

/// A personal or professional project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
    pub featured: bool,
}

/// External links for a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

/// A named group of related skills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// A single skill with its proficiency level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub proficiency: Proficiency,
}

/// Self-assessed proficiency scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Expert,
    Advanced,
    Intermediate,
}

impl Proficiency {
    /// Returns the lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Expert => "expert",
            Proficiency::Advanced => "advanced",
            Proficiency::Intermediate => "intermediate",
        }
    }
}

/// One education entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub duration: String,
    pub highlights: Vec<String>,
}

/// Ways to reach the person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub portfolio: String,
}

/// A recommendation from a colleague.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub author: String,
    pub role: String,
    pub company: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
}

impl ProfileRecord {
    /// Returns the current role, if any entry is flagged as current.
    pub fn current_role(&self) -> Option<&Experience> {
        self.experience.iter().find(|e| e.current)
    }

    /// Returns the projects flagged as featured.
    pub fn featured_projects(&self) -> Vec<Project> {
        self.projects.iter().filter(|p| p.featured).cloned().collect()
    }

    /// Case-insensitive exact-name skill lookup across all categories.
    ///
    /// Returns the matching skill together with its category name.
    pub fn find_skill(&self, name: &str) -> Option<(&Skill, &str)> {
        let lower = name.to_lowercase();
        for cat in &self.skills {
            if let Some(skill) = cat.skills.iter().find(|s| s.name.to_lowercase() == lower) {
                return Some((skill, cat.category.as_str()));
            }
        }
        None
    }
}
