//! GetResumeHandler - assembles the resume view.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::profile::ProfileRecord;
use crate::domain::views::{ResumeView, ViewPayload};

use super::reply::{ResumeFormat, ToolReply};

/// Input for the get-resume tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetResumeInput {
    #[serde(default)]
    pub format: ResumeFormat,
}

/// Handler for resume retrieval.
pub struct GetResumeHandler {
    profile: Arc<ProfileRecord>,
}

impl GetResumeHandler {
    pub fn new(profile: Arc<ProfileRecord>) -> Self {
        Self { profile }
    }

    pub fn handle(&self, input: GetResumeInput) -> ToolReply {
        let profile = &self.profile;
        let featured = profile.featured_projects();

        let text = match input.format {
            ResumeFormat::Full => format!(
                "Complete resume for {}, including {} positions and {} featured projects.",
                profile.overview.name,
                profile.experience.len(),
                featured.len()
            ),
            ResumeFormat::Summary => format!(
                "Executive summary for {}: {} with {}+ years experience.",
                profile.overview.name, profile.overview.title, profile.overview.years_experience
            ),
        };

        let resume = ResumeView {
            overview: profile.overview.clone(),
            experience: profile.experience.clone(),
            projects: featured,
            skills: profile.skills.clone(),
            education: profile.education.clone(),
            contact: profile.contact.clone(),
        };

        ToolReply::new(ViewPayload::Resume(resume), text).with_format(input.format)
    }
}
