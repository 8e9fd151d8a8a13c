//! SearchProjectsHandler - keyword and technology filters over projects.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::profile::ProfileRecord;
use crate::domain::views::ViewPayload;

use super::reply::ToolReply;

/// Input for the search-projects tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchProjectsInput {
    /// Substring filter on project name and description.
    pub query: Option<String>,
    /// Substring filter on the tech stack.
    pub technology: Option<String>,
}

/// Handler for project search.
pub struct SearchProjectsHandler {
    profile: Arc<ProfileRecord>,
}

impl SearchProjectsHandler {
    pub fn new(profile: Arc<ProfileRecord>) -> Self {
        Self { profile }
    }

    pub fn handle(&self, input: SearchProjectsInput) -> ToolReply {
        let mut projects = self.profile.projects.clone();

        if let Some(query) = &input.query {
            let lower = query.to_lowercase();
            projects.retain(|p| {
                p.name.to_lowercase().contains(&lower)
                    || p.description.to_lowercase().contains(&lower)
            });
        }

        if let Some(technology) = &input.technology {
            let lower = technology.to_lowercase();
            projects.retain(|p| {
                p.tech_stack
                    .iter()
                    .any(|t| t.to_lowercase().contains(&lower))
            });
        }

        let plural = if projects.len() == 1 { "" } else { "s" };
        let mut text = format!("Found {} project{}", projects.len(), plural);
        if let Some(query) = &input.query {
            text.push_str(&format!(" matching \"{}\"", query));
        }
        if let Some(technology) = &input.technology {
            text.push_str(&format!(" using {}", technology));
        }

        let mut reply = ToolReply::new(ViewPayload::Projects(projects), text);
        if let Some(query) = input.query {
            reply = reply.with_search_query(query);
        }
        if let Some(technology) = input.technology {
            reply = reply.with_technology_filter(technology);
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(query: Option<&str>, technology: Option<&str>) -> ToolReply {
        let handler = SearchProjectsHandler::new(Arc::new(ProfileRecord::bundled().clone()));
        handler.handle(SearchProjectsInput {
            query: query.map(String::from),
            technology: technology.map(String::from),
        })
    }

    fn project_names(reply: &ToolReply) -> Vec<String> {
        match &reply.payload {
            ViewPayload::Projects(projects) => projects.iter().map(|p| p.name.clone()).collect(),
            other => panic!("unexpected view {}", other.view_name()),
        }
    }

    #[test]
    fn no_filters_returns_all_projects() {
        let reply = search(None, None);
        assert_eq!(
            project_names(&reply).len(),
            ProfileRecord::bundled().projects.len()
        );
        assert!(reply.search_query.is_none());
        assert!(reply.technology_filter.is_none());
    }

    #[test]
    fn query_filters_name_and_description() {
        let reply = search(Some("mailflow"), None);
        assert_eq!(project_names(&reply), vec!["MailflowAI"]);
        assert_eq!(reply.search_query.as_deref(), Some("mailflow"));
        assert_eq!(reply.text, "Found 1 project matching \"mailflow\"");
    }

    #[test]
    fn technology_filters_tech_stack() {
        let reply = search(None, Some("redis"));
        let names = project_names(&reply);
        assert!(names.contains(&"Delivery Service App".to_string()));
        assert!(!names.contains(&"MailflowAI".to_string()));
        assert_eq!(reply.technology_filter.as_deref(), Some("redis"));
    }

    #[test]
    fn filters_compose() {
        let reply = search(Some("delivery"), Some("redis"));
        assert_eq!(project_names(&reply), vec!["Delivery Service App"]);
        assert_eq!(
            reply.text,
            "Found 1 project matching \"delivery\" using redis"
        );
    }

    #[test]
    fn unmatched_filters_return_empty_list() {
        let reply = search(Some("zzz-no-such-project"), None);
        assert!(project_names(&reply).is_empty());
        assert!(reply.text.starts_with("Found 0 projects"));
    }
}
