//! View payloads - the tagged union carried by every tool response.
//!
//! Each variant pairs a view tag with its strongly-typed payload, so the
//! handler/UI boundary never degrades to an untyped blob. On the wire this
//! serializes as `{"view": "...", "data": ...}`.

use serde::{Deserialize, Serialize};

use super::profile::{
    Contact, Education, Experience, Overview, Proficiency, Project, Recommendation, SkillCategory,
};

/// A view tag plus its payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "view", content = "data", rename_all = "kebab-case")]
pub enum ViewPayload {
    Overview(Overview),
    Experience(Vec<Experience>),
    Projects(Vec<Project>),
    Skills(Vec<SkillCategory>),
    SkillComparison(Vec<SkillMatch>),
    Education(Vec<Education>),
    Contact(Contact),
    Hobbies(Vec<String>),
    Recommendations(Vec<Recommendation>),
    Resume(ResumeView),
    Availability(AvailabilityView),
    Analytics(AnalyticsAck),
}

impl ViewPayload {
    /// The wire tag for this view.
    pub fn view_name(&self) -> &'static str {
        match self {
            ViewPayload::Overview(_) => "overview",
            ViewPayload::Experience(_) => "experience",
            ViewPayload::Projects(_) => "projects",
            ViewPayload::Skills(_) => "skills",
            ViewPayload::SkillComparison(_) => "skill-comparison",
            ViewPayload::Education(_) => "education",
            ViewPayload::Contact(_) => "contact",
            ViewPayload::Hobbies(_) => "hobbies",
            ViewPayload::Recommendations(_) => "recommendations",
            ViewPayload::Resume(_) => "resume",
            ViewPayload::Availability(_) => "availability",
            ViewPayload::Analytics(_) => "analytics",
        }
    }
}

/// Outcome of looking up one skill name in the profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillMatch {
    pub name: String,
    /// None when the skill is not in the profile at all.
    pub proficiency: Option<Proficiency>,
    pub category: Option<String>,
}

/// The assembled resume: overview fields plus the resume sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeView {
    #[serde(flatten)]
    pub overview: Overview,
    pub experience: Vec<Experience>,
    /// Featured projects only.
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<Education>,
    pub contact: Contact,
}

/// Scheduling pointer for the availability tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityView {
    pub booking_url: String,
    pub name: String,
}

/// Acknowledgement returned by the analytics tracking tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsAck {
    pub logged: bool,
}
