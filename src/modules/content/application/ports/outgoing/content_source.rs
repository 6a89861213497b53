// content_source.rs
use async_trait::async_trait;

use crate::content::domain::entities::{
    Certificate, EducationRecord, ExperienceEntry, PersonalInfo, Photo, Project, SkillSet,
    SoftSkills, VolunteerEntry,
};
use crate::shared::api::ApiError;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum LoadFailure {
    #[error("Content source unavailable: {0}")]
    Unavailable(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Backend responded with {status} for {path}")]
    Status { status: u16, path: String },

    #[error("Malformed response body: {0}")]
    Decode(String),
}

impl From<ApiError> for LoadFailure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Client(msg) => LoadFailure::Unavailable(msg),
            ApiError::Network(msg) => LoadFailure::Network(msg),
            ApiError::Timeout => LoadFailure::Timeout,
            ApiError::Status { status, path } => LoadFailure::Status { status, path },
            ApiError::Decode(msg) => LoadFailure::Decode(msg),
        }
    }
}

/// Where portfolio content comes from.
///
/// One method per content domain. Each call is a single independent
/// attempt: no retries, no caching between calls.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_personal_info(&self) -> Result<PersonalInfo, LoadFailure>;
    async fn fetch_projects(&self) -> Result<Vec<Project>, LoadFailure>;
    async fn fetch_skills(&self) -> Result<SkillSet, LoadFailure>;
    async fn fetch_soft_skills(&self) -> Result<SoftSkills, LoadFailure>;
    async fn fetch_experience(&self) -> Result<Vec<ExperienceEntry>, LoadFailure>;
    async fn fetch_education(&self) -> Result<Vec<EducationRecord>, LoadFailure>;
    async fn fetch_certificates(&self) -> Result<Vec<Certificate>, LoadFailure>;
    async fn fetch_volunteer_entries(&self) -> Result<Vec<VolunteerEntry>, LoadFailure>;
    async fn fetch_gallery_photos(&self) -> Result<Vec<Photo>, LoadFailure>;
}
