use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::content::application::ports::outgoing::{ContentSource, LoadFailure};
use crate::content::domain::entities::{
    Certificate, EducationRecord, ExperienceEntry, PersonalInfo, Photo, PortfolioContent, Project,
    SkillSet, SoftSkills, VolunteerEntry,
};

/// Delay applied to every answer, so views exercise their loading state.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(500);

/// Serves an in-memory dataset after a fixed delay. Never fails.
#[derive(Debug, Clone)]
pub struct StaticContentSource {
    content: Arc<PortfolioContent>,
    latency: Duration,
}

impl StaticContentSource {
    pub fn new(content: Arc<PortfolioContent>) -> Self {
        Self::with_latency(content, SIMULATED_LATENCY)
    }

    pub fn with_latency(content: Arc<PortfolioContent>, latency: Duration) -> Self {
        for (domain, ids) in content.duplicate_id_report() {
            let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
            warn!(
                domain = %domain,
                ids = %ids.join(", "),
                "Dataset repeats entity ids; items are keyed by position instead"
            );
        }

        Self { content, latency }
    }

    async fn resolve<T>(
        &self,
        pick: impl FnOnce(&PortfolioContent) -> T + Send,
    ) -> Result<T, LoadFailure> {
        tokio::time::sleep(self.latency).await;
        Ok(pick(&self.content))
    }
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn fetch_personal_info(&self) -> Result<PersonalInfo, LoadFailure> {
        self.resolve(|c| c.personal.clone()).await
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, LoadFailure> {
        self.resolve(|c| c.projects.clone()).await
    }

    async fn fetch_skills(&self) -> Result<SkillSet, LoadFailure> {
        self.resolve(|c| c.skills.clone()).await
    }

    async fn fetch_soft_skills(&self) -> Result<SoftSkills, LoadFailure> {
        self.resolve(|c| c.softskills.clone()).await
    }

    async fn fetch_experience(&self) -> Result<Vec<ExperienceEntry>, LoadFailure> {
        self.resolve(|c| c.experience.clone()).await
    }

    async fn fetch_education(&self) -> Result<Vec<EducationRecord>, LoadFailure> {
        self.resolve(|c| c.education.clone()).await
    }

    async fn fetch_certificates(&self) -> Result<Vec<Certificate>, LoadFailure> {
        self.resolve(|c| c.certificates.clone()).await
    }

    async fn fetch_volunteer_entries(&self) -> Result<Vec<VolunteerEntry>, LoadFailure> {
        self.resolve(|c| c.volunteer.clone()).await
    }

    async fn fetch_gallery_photos(&self) -> Result<Vec<Photo>, LoadFailure> {
        self.resolve(|c| c.gallery.clone()).await
    }
}
