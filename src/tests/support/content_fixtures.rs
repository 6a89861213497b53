use indexmap::IndexMap;

use crate::content::domain::entities::{
    Certificate, EducationRecord, EntityId, ExperienceEntry, PersonalInfo, Photo, PortfolioContent,
    Project, ProjectStatus, SkillSet, SoftSkills, VolunteerEntry,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_personal() -> PersonalInfo {
    PersonalInfo {
        name: "Test Person".to_string(),
        title: "Engineer".to_string(),
        tagline: "Ships things".to_string(),
        bio: "Fixture biography.".to_string(),
        email: "person@example.com".to_string(),
        phone: None,
        location: "Athens, Greece".to_string(),
        resume_url: "/resume.pdf".to_string(),
        social_links: IndexMap::from([
            ("github".to_string(), "https://github.com/example".to_string()),
            ("linkedin".to_string(), "https://linkedin.com/in/example".to_string()),
        ]),
    }
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: EntityId::Number(1),
            title: "Exam Tutor".to_string(),
            description: "Practice platform".to_string(),
            technologies: strings(&["React.js", "Python"]),
            features: strings(&["Quizzes", "Flashcards"]),
            github_url: "https://github.com/example/tutor".to_string(),
            demo_url: Some("#".to_string()),
            status: ProjectStatus::InProgress,
        },
        Project {
            id: EntityId::Number(2),
            title: "Gear Marketplace".to_string(),
            description: "Second-hand listings".to_string(),
            technologies: strings(&["Figma", "React.js"]),
            features: strings(&["Search"]),
            github_url: "https://github.com/example/market".to_string(),
            demo_url: None,
            status: ProjectStatus::Completed,
        },
    ]
}

pub fn sample_gallery() -> Vec<Photo> {
    let photo = |title: &str, tag: &str| Photo {
        url: format!("/gallery/{}.jpg", title.to_lowercase().replace(' ', "-")),
        title: title.to_string(),
        description: None,
        tag: Some(tag.to_string()),
    };

    vec![
        photo("Hackathon kickoff", "events"),
        photo("Exam prep workshop", "teaching"),
        photo("Main stage", "events"),
        photo("First place", "achievements"),
        photo("Live coding stream", "teaching"),
        photo("Scholarship award", "achievements"),
    ]
}

pub fn sample_content() -> PortfolioContent {
    PortfolioContent {
        personal: sample_personal(),
        skills: SkillSet {
            languages: strings(&["C", "SQL"]),
            frameworks: strings(&["React.js"]),
            concepts: strings(&["Scrum"]),
            tools: strings(&["Jira"]),
        },
        softskills: SoftSkills {
            categories: IndexMap::from([(
                "corporate".to_string(),
                strings(&["Teamwork", "Communication"]),
            )]),
        },
        projects: sample_projects(),
        experience: vec![ExperienceEntry {
            id: EntityId::Number(1),
            company: "Acme".to_string(),
            position: "Project Manager".to_string(),
            duration: "2025 - Present".to_string(),
            location: "Remote".to_string(),
            description: "Runs delivery.".to_string(),
            achievements: strings(&["Shipped on time"]),
        }],
        education: vec![
            EducationRecord {
                degree: "BSc Informatics".to_string(),
                institution: "Example University".to_string(),
                duration: "2024 - 2028".to_string(),
                gpa: Some("8.3/10".to_string()),
                relevant_courses: strings(&["Databases"]),
                achievements: strings(&["Hackathon winner"]),
            },
            EducationRecord {
                degree: "High School Diploma".to_string(),
                institution: "Example Lyceum".to_string(),
                duration: "2021 - 2024".to_string(),
                gpa: None,
                relevant_courses: strings(&["Calculus"]),
                achievements: vec![],
            },
        ],
        certificates: vec![Certificate {
            id: EntityId::Number(1),
            title: "Elements of AI".to_string(),
            issuer: "University of Helsinki".to_string(),
            date: "9/2025-11/2025".to_string(),
            description: "AI fundamentals.".to_string(),
            link: Some("https://www.elementsofai.com/".to_string()),
        }],
        volunteer: vec![VolunteerEntry {
            id: EntityId::Number(1),
            role: "Mentor".to_string(),
            organization: "Coding Club".to_string(),
            duration: "2024 - Present".to_string(),
            location: "Hybrid".to_string(),
            description: "Mentors students.".to_string(),
            achievements: vec![],
        }],
        gallery: sample_gallery(),
    }
}
