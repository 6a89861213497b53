use std::fmt;

/// One independently loaded section of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentDomain {
    Personal,
    Projects,
    Skills,
    SoftSkills,
    Experience,
    Education,
    Certificates,
    Volunteer,
    Gallery,
}

impl ContentDomain {
    pub const ALL: [ContentDomain; 9] = [
        ContentDomain::Personal,
        ContentDomain::Projects,
        ContentDomain::Skills,
        ContentDomain::SoftSkills,
        ContentDomain::Experience,
        ContentDomain::Education,
        ContentDomain::Certificates,
        ContentDomain::Volunteer,
        ContentDomain::Gallery,
    ];

    /// Backend path, relative to the API root.
    pub fn path(&self) -> &'static str {
        match self {
            ContentDomain::Personal => "/personal",
            ContentDomain::Projects => "/projects",
            ContentDomain::Skills => "/skills",
            ContentDomain::SoftSkills => "/softskills",
            ContentDomain::Experience => "/experience",
            ContentDomain::Education => "/education",
            ContentDomain::Certificates => "/certificates",
            ContentDomain::Volunteer => "/volunteer",
            ContentDomain::Gallery => "/gallery",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentDomain::Personal => "personal information",
            ContentDomain::Projects => "projects",
            ContentDomain::Skills => "skills",
            ContentDomain::SoftSkills => "soft skills",
            ContentDomain::Experience => "experience",
            ContentDomain::Education => "education",
            ContentDomain::Certificates => "certificates",
            ContentDomain::Volunteer => "volunteer work",
            ContentDomain::Gallery => "photos",
        }
    }

    /// Message shown in place of a section that failed to load.
    pub fn failure_message(&self) -> String {
        format!("Failed to load {}", self.label())
    }
}

impl fmt::Display for ContentDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
