//! Tool handlers - one per supported query intent.
//!
//! Each handler composes profile lookups and, for free-text queries, the
//! search provider, returning a [`ToolReply`] the RPC adapter serializes.
//! Handlers receive their dependencies explicitly; there is no ambient
//! store or profile lookup.

mod ask_about;
mod ask_anything;
mod compare_skills;
mod get_availability;
mod get_recommendations;
mod get_resume;
mod registry;
mod reply;
mod search_projects;
mod track_analytics;

pub use ask_about::{AskAboutHandler, AskAboutInput, AskCategory};
pub use ask_anything::{AskAnythingHandler, AskAnythingInput};
pub use compare_skills::{CompareSkillsHandler, CompareSkillsInput, MAX_SKILLS};
pub use get_availability::GetAvailabilityHandler;
pub use get_recommendations::{GetRecommendationsHandler, GetRecommendationsInput, MAX_LIMIT};
pub use get_resume::{GetResumeHandler, GetResumeInput};
pub use registry::{tool_descriptors, ToolDescriptor};
pub use reply::{ResumeFormat, ToolReply};
pub use search_projects::{SearchProjectsHandler, SearchProjectsInput};
pub use track_analytics::{TrackAnalyticsHandler, TrackAnalyticsInput};
