use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::content_domain::ContentDomain;

const BUNDLED_DATASET: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/portfolio.json"));

/// Identifier of a collection entity.
///
/// The bundled dataset uses integers, the backend issues UUID strings.
/// Ids are display data only and are not guaranteed unique.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum EntityId {
    Number(u64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

pub trait Identified {
    fn id(&self) -> &EntityId;
}

/// Key that stays unique within a rendered list even when ids repeat.
pub fn display_key(index: usize, id: &EntityId) -> String {
    format!("{}-{}", id, index)
}

/// Ids that occur more than once, each reported once in first-seen order.
pub fn duplicate_ids<T: Identified>(items: &[T]) -> Vec<EntityId> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for item in items {
        let id = item.id();
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id.clone());
        }
    }

    duplicates
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: String,
    pub resume_url: String,
    #[serde(default)]
    pub social_links: IndexMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SkillSet {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub concepts: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

/// Soft skills grouped by category name, e.g. `corporate`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct SoftSkills {
    pub categories: IndexMap<String, Vec<String>>,
}

/// Only `completed` is finished; every other spelling (`in_progress`,
/// `in progress`, `in-progress`, ...) counts as ongoing.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().eq_ignore_ascii_case("completed") {
            Ok(ProjectStatus::Completed)
        } else {
            Ok(ProjectStatus::InProgress)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub github_url: String,
    #[serde(default)]
    pub demo_url: Option<String>,
    pub status: ProjectStatus,
}

impl Project {
    /// The demo URL, unless it is blank or the `#` placeholder.
    pub fn demo_link(&self) -> Option<&str> {
        self.demo_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != "#")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub id: EntityId,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EducationRecord {
    pub degree: String,
    #[serde(alias = "university")]
    pub institution: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default)]
    pub relevant_courses: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Education as served by either source: a list, or a single record from
/// older backends.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum EducationPayload {
    Records(Vec<EducationRecord>),
    Single(EducationRecord),
}

impl EducationPayload {
    pub fn into_records(self) -> Vec<EducationRecord> {
        match self {
            EducationPayload::Records(records) => records,
            EducationPayload::Single(record) => vec![record],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Certificate {
    pub id: EntityId,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VolunteerEntry {
    pub id: EntityId,
    pub role: String,
    pub organization: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Photo {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl Identified for Project {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Identified for ExperienceEntry {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Identified for Certificate {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Identified for VolunteerEntry {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// The whole portfolio, as served by the static source.
///
/// Built once and shared read-only; tests construct their own instead of
/// touching the bundled dataset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PortfolioContent {
    pub personal: PersonalInfo,
    pub skills: SkillSet,
    #[serde(default)]
    pub softskills: SoftSkills,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub volunteer: Vec<VolunteerEntry>,
    #[serde(default)]
    pub gallery: Vec<Photo>,
}

impl PortfolioContent {
    /// Dataset shipped with the crate.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Collections whose ids repeat, with the repeated ids.
    pub fn duplicate_id_report(&self) -> Vec<(ContentDomain, Vec<EntityId>)> {
        [
            (ContentDomain::Projects, duplicate_ids(&self.projects)),
            (ContentDomain::Experience, duplicate_ids(&self.experience)),
            (ContentDomain::Certificates, duplicate_ids(&self.certificates)),
            (ContentDomain::Volunteer, duplicate_ids(&self.volunteer)),
        ]
        .into_iter()
        .filter(|(_, ids)| !ids.is_empty())
        .collect()
    }
}
