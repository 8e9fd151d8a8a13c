//! The fixed set of tools this connector exposes.

use serde::Serialize;

/// Externally visible description of one tool.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub read_only: bool,
}

/// All tools, in registration order.
pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: "ask_about_aneeq",
            title: "Ask About Aneeq Hassan",
            description: "Get information about Aneeq Hassan - his experience, projects, \
                          skills, education, or contact info. Use the category parameter to \
                          specify what information you want.",
            read_only: true,
        },
        ToolDescriptor {
            name: "get_resume",
            title: "Get Aneeq's Resume",
            description: "Retrieve Aneeq Hassan's resume in full or summary format, showing \
                          his complete professional profile.",
            read_only: true,
        },
        ToolDescriptor {
            name: "search_projects",
            title: "Search Aneeq's Projects",
            description: "Search through Aneeq Hassan's projects by keyword or technology. \
                          Returns matching projects with details.",
            read_only: true,
        },
        ToolDescriptor {
            name: "compare_skills",
            title: "Compare Aneeq's Skills",
            description: "Look up 1-4 skill names and report Aneeq's proficiency and skill \
                          category for each.",
            read_only: true,
        },
        ToolDescriptor {
            name: "ask_anything",
            title: "Ask Anything About Aneeq",
            description: "Free-text question about Aneeq Hassan, answered by ranking his \
                          profile sections against the query.",
            read_only: true,
        },
        ToolDescriptor {
            name: "get_recommendations",
            title: "Get Aneeq's Recommendations",
            description: "Retrieve recommendations from people who have worked with Aneeq, \
                          optionally limited to the first N.",
            read_only: true,
        },
        ToolDescriptor {
            name: "get_availability",
            title: "Get Aneeq's Availability",
            description: "Get a scheduling link for booking time with Aneeq.",
            read_only: true,
        },
        ToolDescriptor {
            name: "track_analytics",
            title: "Track Analytics",
            description: "Log a tool invocation for usage analytics.",
            read_only: false,
        },
    ]
}
