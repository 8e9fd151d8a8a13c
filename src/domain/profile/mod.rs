//! Profile domain - the static dataset and its types.

mod dataset;
mod record;

pub use record::{
    Contact, Education, Experience, Overview, Proficiency, ProfileRecord, Project, ProjectLinks,
    Recommendation, Skill, SkillCategory,
};
