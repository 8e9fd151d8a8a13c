//! The bundled profile dataset.
//!
//! Compiled in and exposed as a process-wide immutable static. Content edits
//! happen here and ship with a new build; there is no runtime data source.

use once_cell::sync::Lazy;

use super::record::{
    Contact, Education, Experience, Overview, Proficiency, ProfileRecord, Project, ProjectLinks,
    Recommendation, Skill, SkillCategory,
};

fn s(value: &str) -> String {
    value.to_string()
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| s(i)).collect()
}

fn skill(name: &str, proficiency: Proficiency) -> Skill {
    Skill {
        name: s(name),
        proficiency,
    }
}

static BUNDLED: Lazy<ProfileRecord> = Lazy::new(|| ProfileRecord {
    overview: Overview {
        name: s("Aneeq Hassan"),
        title: s("AI Software Engineer"),
        tagline: s(
            "Building intelligent systems that deliver meaningful impact. Over 3 years of \
             experience developing AI solutions and scalable applications.",
        ),
        years_experience: 3,
        languages: list(&["English", "French", "Spanish", "Arabic", "Urdu"]),
    },

    experience: vec![
        Experience {
            id: s("dayforce"),
            company: s("Dayforce"),
            role: s("AI Software Engineer"),
            duration: s("Sept 2025 - Present"),
            location: s("Toronto, ON"),
            technologies: list(&["LangGraph", "Python", "ChromaDB", "FastAPI", "LangChain", "RAG"]),
            achievements: list(&[
                "Built QueryGPT, an internal agentic application for SQL generation across 50K+ tables",
                "Implemented RAG architecture with ChromaDB for semantic search",
                "Designed conversational AI workflows with LangGraph",
            ]),
            current: true,
        },
        Experience {
            id: s("learning-mode"),
            company: s("Learning Mode AI"),
            role: s("Software Engineer Intern"),
            duration: s("May - Aug 2025"),
            location: s("Toronto, ON"),
            technologies: list(&["Go", "Redis", "OpenAI", "Microservices"]),
            achievements: list(&[
                "Developed quiz microservices with real-time video synchronization",
                "Built high-performance backend services in Go",
                "Implemented Redis-based caching strategies",
            ]),
            current: false,
        },
        Experience {
            id: s("magnet"),
            company: s("Magnet Forensics"),
            role: s("Software Engineer Intern"),
            duration: s("Jan - Apr 2025"),
            location: s("Waterloo, ON"),
            technologies: list(&["C#", ".NET", "Enterprise Software"]),
            achievements: list(&[
                "Created Fastrak, reducing specialized tool usage by 85%",
                "Built forensic analysis tools with .NET framework",
            ]),
            current: false,
        },
        Experience {
            id: s("annaly"),
            company: s("Annaly"),
            role: s("Software Engineer Intern"),
            duration: s("Feb - Aug 2024"),
            location: s("New York, NY"),
            technologies: list(&["Python", "ETL", "Data Pipelines"]),
            achievements: list(&[
                "Implemented ETL notification system reducing incident response by 95%",
                "Performance optimizations cutting execution time by 50%",
            ]),
            current: false,
        },
        Experience {
            id: s("enbridge"),
            company: s("Enbridge"),
            role: s("Software Engineer Intern"),
            duration: s("June - Sept 2023"),
            location: s("Toronto, ON"),
            technologies: list(&["Power Apps", "SharePoint", "Automation"]),
            achievements: list(&[
                "Built Power Apps tool improving inter-departmental communication by 75%",
            ]),
            current: false,
        },
        Experience {
            id: s("koho"),
            company: s("Koho Financial"),
            role: s("Software Engineer Intern"),
            duration: s("May 2022 - May 2023"),
            location: s("Toronto, ON"),
            technologies: list(&["Angular", "Go", "Google Pay API"]),
            achievements: list(&[
                "Integrated Google Pay achieving 40% adoption and $2M in transactions",
                "Implemented state management reducing API calls by 60%",
                "Developed Angular/Go solutions for financial features",
            ]),
            current: false,
        },
        Experience {
            id: s("uoft-ta"),
            company: s("University of Toronto"),
            role: s("Teaching Assistant"),
            duration: s("Jan 2022 - May 2025"),
            location: s("Toronto, ON"),
            technologies: list(&["Python", "Education"]),
            achievements: list(&[
                "Instructed 2,000+ students in Python programming",
                "Improved student grades by 47%",
            ]),
            current: false,
        },
    ],

    projects: vec![
        Project {
            id: s("mailflowai"),
            name: s("MailflowAI"),
            description: s(
                "AI-powered 24/7 customer service automation that processes emails and generates \
                 intelligent responses",
            ),
            tech_stack: list(&[
                "Python",
                "GCP",
                "Cloud Pub/Sub",
                "OpenAI",
                "Shopify GraphQL Admin API",
                "Gmail API",
            ]),
            impact: Some(s("Reduced monthly costs by $14K")),
            metrics: Some(s("Response times from hours to minutes")),
            links: Some(ProjectLinks {
                github: Some(s("https://github.com/HassanA01/mailflowai")),
                demo: None,
            }),
            featured: true,
        },
        Project {
            id: s("b2w"),
            name: s("B2W - UofT Hacks 12"),
            description: s(
                "Financial management platform with ML-powered spending predictions, expense \
                 tracking, and personalized recommendations",
            ),
            tech_stack: list(&[
                "Next.js",
                "Express.js",
                "PostgreSQL",
                "Flask",
                "Databricks",
                "AWS",
                "scikit-learn",
            ]),
            impact: None,
            metrics: None,
            links: Some(ProjectLinks {
                github: Some(s("https://github.com/HassanA01/UofTHacks12")),
                demo: None,
            }),
            featured: true,
        },
        Project {
            id: s("bizreach"),
            name: s("BizReach Marketplace"),
            description: s(
                "Full-stack marketplace connecting mobile businesses with clients, with \
                 AI-powered gig description generator",
            ),
            tech_stack: list(&[
                "React",
                "Express",
                "OAuth",
                "Node.js",
                "Socket.io",
                "Firebase",
                "OpenAI",
            ]),
            impact: Some(s("Led team of 5 developers")),
            metrics: None,
            links: Some(ProjectLinks {
                github: Some(s("https://github.com/HassanA01/final-project-s23-cd-users-baddies")),
                demo: None,
            }),
            featured: true,
        },
        Project {
            id: s("myriad-cro"),
            name: s("Myriad CRO Landing Page"),
            description: s(
                "Conversion-focused landing page with step-by-step processes, expandable FAQs, \
                 and responsive design",
            ),
            tech_stack: list(&[
                "Next.js",
                "Shadcn",
                "Tailwind CSS",
                "Aceternity UI",
                "RadixUI",
                "Motion",
            ]),
            impact: None,
            metrics: None,
            links: Some(ProjectLinks {
                github: Some(s("https://github.com/HassanA01/myriad-cro-website")),
                demo: Some(s("https://myriadcro.com")),
            }),
            featured: true,
        },
        Project {
            id: s("iot-monitoring"),
            name: s("IoT Data Monitoring System"),
            description: s(
                "Manages 1+ million records with optimized retrieval using continuous aggregates",
            ),
            tech_stack: list(&["TypeScript", "TimescaleDB", "Grafana"]),
            impact: None,
            metrics: None,
            links: Some(ProjectLinks {
                github: Some(s("https://github.com/HassanA01/IoT-Data-Monitoring-System")),
                demo: None,
            }),
            featured: false,
        },
        Project {
            id: s("proxy-server"),
            name: s("Proxy Server"),
            description: s(
                "Caching mechanisms reducing data retrieval times by 50%, uses socket programming",
            ),
            tech_stack: list(&["Python"]),
            impact: Some(s("50% faster data retrieval")),
            metrics: None,
            links: Some(ProjectLinks {
                github: Some(s("https://github.com/HassanA01/ProxyServer")),
                demo: None,
            }),
            featured: false,
        },
        Project {
            id: s("delivery-service"),
            name: s("Delivery Service App"),
            description: s(
                "Delivery tracking system with event-driven architecture and order lifecycle \
                 simulation",
            ),
            tech_stack: list(&["React", "Bootstrap", "Python", "Redis", "FastAPI"]),
            impact: None,
            metrics: None,
            links: Some(ProjectLinks {
                github: Some(s("https://github.com/HassanA01/DeliveryService")),
                demo: None,
            }),
            featured: false,
        },
        Project {
            id: s("network-simulation"),
            name: s("Network Simulation"),
            description: s(
                "Network application for retrieving and displaying web content, focusing on \
                 socket programming and TCP/IP protocols",
            ),
            tech_stack: list(&["C++"]),
            impact: None,
            metrics: None,
            links: Some(ProjectLinks {
                github: Some(s("https://github.com/HassanA01/networksimulation")),
                demo: Some(s("https://networksimulation.dev")),
            }),
            featured: false,
        },
    ],

    skills: vec![
        SkillCategory {
            category: s("Languages"),
            skills: vec![
                skill("Python", Proficiency::Expert),
                skill("TypeScript", Proficiency::Expert),
                skill("JavaScript", Proficiency::Expert),
                skill("Go", Proficiency::Advanced),
                skill("C#", Proficiency::Advanced),
                skill("Java", Proficiency::Advanced),
                skill("C++", Proficiency::Intermediate),
                skill("C", Proficiency::Intermediate),
            ],
        },
        SkillCategory {
            category: s("Frontend"),
            skills: vec![
                skill("React", Proficiency::Expert),
                skill("Next.js", Proficiency::Advanced),
                skill("Angular", Proficiency::Advanced),
                skill("Tailwind CSS", Proficiency::Expert),
            ],
        },
        SkillCategory {
            category: s("Backend"),
            skills: vec![
                skill("FastAPI", Proficiency::Expert),
                skill("Flask", Proficiency::Advanced),
                skill("Express.js", Proficiency::Advanced),
                skill("Spring Boot", Proficiency::Advanced),
                skill("Node.js", Proficiency::Expert),
            ],
        },
        SkillCategory {
            category: s("Databases"),
            skills: vec![
                skill("MongoDB", Proficiency::Advanced),
                skill("PostgreSQL", Proficiency::Advanced),
                skill("Firebase", Proficiency::Advanced),
                skill("TimescaleDB", Proficiency::Intermediate),
                skill("Redis", Proficiency::Advanced),
            ],
        },
        SkillCategory {
            category: s("Cloud & DevOps"),
            skills: vec![
                skill("AWS", Proficiency::Advanced),
                skill("Docker", Proficiency::Advanced),
                skill("GCP", Proficiency::Advanced),
                skill("Grafana", Proficiency::Intermediate),
            ],
        },
        SkillCategory {
            category: s("AI / ML"),
            skills: vec![
                skill("OpenAI", Proficiency::Expert),
                skill("LangChain", Proficiency::Expert),
                skill("LangGraph", Proficiency::Expert),
                skill("ChromaDB", Proficiency::Expert),
                skill("RAG", Proficiency::Expert),
                skill("scikit-learn", Proficiency::Intermediate),
            ],
        },
    ],

    education: vec![Education {
        institution: s("University of Toronto"),
        degree: s("Bachelor of Science"),
        field: s("Computer Science"),
        duration: s("2020 - 2025"),
        highlights: list(&[
            "Teaching Assistant for 2,000+ students in Python",
            "Improved student grades by 47%",
        ]),
    }],

    contact: Contact {
        email: s("hassan.aneeq01@gmail.com"),
        github: s("https://github.com/hassana01"),
        linkedin: s("https://linkedin.com/in/hassana01"),
        portfolio: s("https://aneeqhassan.com"),
    },

    hobbies: list(&["Soccer", "Gaming", "Travel", "Fitness", "Food & Culinary Exploration"]),

    recommendations: vec![
        Recommendation {
            id: s("rec-1"),
            author: s("Jane Smith"),
            role: s("Senior Engineering Manager"),
            company: s("Dayforce"),
            text: s(
                "Aneeq consistently delivers beyond expectations. His ability to architect \
                 complex AI systems while keeping code clean and maintainable is rare for \
                 someone at his career stage.",
            ),
            linked_in: Some(s("https://linkedin.com/in/janesmith")),
        },
        Recommendation {
            id: s("rec-2"),
            author: s("John Doe"),
            role: s("Staff Engineer"),
            company: s("Koho Financial"),
            text: s(
                "Working with Aneeq was a pleasure. He took ownership of the Google Pay \
                 integration end-to-end and drove it to $2M in transactions with minimal \
                 oversight.",
            ),
            linked_in: None,
        },
        Recommendation {
            id: s("rec-3"),
            author: s("Alex Chen"),
            role: s("Engineering Lead"),
            company: s("Learning Mode AI"),
            text: s(
                "Aneeq ramped up on our Go microservices stack incredibly fast and shipped \
                 production-quality features in his first week. Strong communicator and team \
                 player.",
            ),
            linked_in: Some(s("https://linkedin.com/in/alexchen")),
        },
    ],
});

impl ProfileRecord {
    /// The dataset compiled into this build.
    pub fn bundled() -> &'static ProfileRecord {
        &BUNDLED
    }
}
