use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::content::application::ports::outgoing::{ContentSource, LoadFailure};
use crate::content::domain::entities::{
    Certificate, EducationPayload, EducationRecord, ExperienceEntry, PersonalInfo, Photo, Project,
    SkillSet, SoftSkills, VolunteerEntry,
};
use crate::content::domain::ContentDomain;
use crate::shared::api::ApiClient;

/// Banner returned by the backend's root endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BackendStatus {
    pub message: String,
    pub version: String,
}

/// Loads content from the portfolio REST backend, one GET per domain.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    api: ApiClient,
}

impl HttpContentSource {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /` on the API root; used as a deployment smoke check.
    pub async fn health_check(&self) -> Result<BackendStatus, LoadFailure> {
        self.api.get("/").await.map_err(LoadFailure::from)
    }

    async fn fetch<T: DeserializeOwned>(&self, domain: ContentDomain) -> Result<T, LoadFailure> {
        self.api.get(domain.path()).await.map_err(LoadFailure::from)
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_personal_info(&self) -> Result<PersonalInfo, LoadFailure> {
        self.fetch(ContentDomain::Personal).await
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, LoadFailure> {
        self.fetch(ContentDomain::Projects).await
    }

    async fn fetch_skills(&self) -> Result<SkillSet, LoadFailure> {
        self.fetch(ContentDomain::Skills).await
    }

    async fn fetch_soft_skills(&self) -> Result<SoftSkills, LoadFailure> {
        self.fetch(ContentDomain::SoftSkills).await
    }

    async fn fetch_experience(&self) -> Result<Vec<ExperienceEntry>, LoadFailure> {
        self.fetch(ContentDomain::Experience).await
    }

    async fn fetch_education(&self) -> Result<Vec<EducationRecord>, LoadFailure> {
        self.fetch::<EducationPayload>(ContentDomain::Education)
            .await
            .map(EducationPayload::into_records)
    }

    async fn fetch_certificates(&self) -> Result<Vec<Certificate>, LoadFailure> {
        self.fetch(ContentDomain::Certificates).await
    }

    async fn fetch_volunteer_entries(&self) -> Result<Vec<VolunteerEntry>, LoadFailure> {
        self.fetch(ContentDomain::Volunteer).await
    }

    async fn fetch_gallery_photos(&self) -> Result<Vec<Photo>, LoadFailure> {
        self.fetch(ContentDomain::Gallery).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::services::ContentFacade;
    use crate::content::domain::entities::{EntityId, ProjectStatus};
    use crate::content::domain::LoadState;
    use crate::tests::support::fake_server::FakeServer;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use std::sync::Arc;

    fn backend_projects() -> serde_json::Value {
        json!([
            {
                "id": "0b6f3c1e-8d2a-4f7e-9a51-2c4d8e6f1a90",
                "title": "Exam Tutor",
                "description": "Practice platform",
                "technologies": ["React.js", "Python"],
                "features": ["Quizzes"],
                "github_url": "https://github.com/example/tutor",
                "demo_url": "#",
                "status": "in progress",
                "created_at": "2025-10-01T12:00:00"
            }
        ])
    }

    async fn source_for(router: Router) -> (FakeServer, HttpContentSource) {
        let server = FakeServer::start(router).await;
        let api = ApiClient::for_backend(&server.base_url).unwrap();
        (server, HttpContentSource::new(api))
    }

    #[tokio::test]
    async fn test_http_200_resolves_ready_with_decoded_body() {
        let (_server, source) = source_for(Router::new().route(
            "/api/projects",
            get(|| async { Json(backend_projects()) }),
        ))
        .await;

        let facade = ContentFacade::new(Arc::new(source));
        let state = facade.projects().settled().await;

        let projects = state.value().expect("projects should load");
        assert_eq!(projects.len(), 1);
        assert_eq!(
            projects[0].id,
            EntityId::from("0b6f3c1e-8d2a-4f7e-9a51-2c4d8e6f1a90")
        );
        assert_eq!(projects[0].status, ProjectStatus::InProgress);
        assert_eq!(projects[0].demo_link(), None);
    }

    #[tokio::test]
    async fn test_http_500_resolves_failed() {
        let (_server, source) = source_for(Router::new().route(
            "/api/projects",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error") }),
        ))
        .await;

        let facade = ContentFacade::new(Arc::new(source));
        let state = facade.projects().settled().await;

        assert_eq!(
            state,
            LoadState::Failed(LoadFailure::Status {
                status: 500,
                path: "/projects".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_wrong_shape_is_decode_failure() {
        let (_server, source) = source_for(Router::new().route(
            "/api/skills",
            get(|| async { Json(json!({"languages": "not a list"})) }),
        ))
        .await;

        let result = source.fetch_skills().await;
        match result {
            Err(LoadFailure::Decode(detail)) => {
                assert!(detail.contains("invalid type"), "detail: {}", detail);
            }
            other => panic!("Expected Decode failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_seeded_backend_projects_load_with_hyphenated_status() {
        let (_server, source) = source_for(Router::new().route(
            "/api/projects",
            get(|| async {
                Json(json!([
                    {
                        "id": "3f9a1c52-6b1e-4d0b-a2f4-5e7c9d1b3a68",
                        "title": "Algorithm Visualizer",
                        "description": "Interactive sorting and pathfinding visualizations.",
                        "technologies": ["JavaScript", "Canvas API"],
                        "features": ["Interactive controls"],
                        "github_url": "https://github.com/example/algo-visualizer",
                        "demo_url": "https://algovis.demo.com",
                        "status": "completed",
                        "created_at": "2025-10-01T12:00:00.123456"
                    },
                    {
                        "id": "8d2e7b40-1c3f-4a5e-9b6d-0f2a4c6e8b13",
                        "title": "Blockchain Voting System",
                        "description": "Transparent voting on a blockchain.",
                        "technologies": ["Solidity", "Web3.js"],
                        "features": ["Anonymous voting"],
                        "github_url": "https://github.com/example/blockchain-voting",
                        "demo_url": "https://blockvote.demo.com",
                        "status": "in-progress",
                        "created_at": "2025-10-01T12:00:00.654321"
                    }
                ]))
            }),
        ))
        .await;

        let facade = ContentFacade::new(Arc::new(source));
        let state = facade.projects().settled().await;

        let projects = state.value().expect("seeded projects should load");
        let statuses: Vec<ProjectStatus> = projects.iter().map(|p| p.status).collect();
        assert_eq!(
            statuses,
            vec![ProjectStatus::Completed, ProjectStatus::InProgress]
        );
        assert_eq!(projects[1].demo_link(), Some("https://blockvote.demo.com"));
    }

    #[tokio::test]
    async fn test_single_education_object_becomes_list() {
        let (_server, source) = source_for(Router::new().route(
            "/api/education",
            get(|| async {
                Json(json!({
                    "id": "edu",
                    "degree": "Bachelor in Computer Science",
                    "university": "Example University",
                    "duration": "2024 - 2028",
                    "gpa": "8.3/10",
                    "relevant_courses": ["Databases", "Web Development"],
                    "achievements": ["Hackathon winner"]
                }))
            }),
        ))
        .await;

        let education = source.fetch_education().await.unwrap();
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].degree, "Bachelor in Computer Science");
        assert_eq!(education[0].gpa.as_deref(), Some("8.3/10"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_resolves_failed() {
        let base_url = FakeServer::unused_base_url().await;
        let source = HttpContentSource::new(ApiClient::for_backend(&base_url).unwrap());

        let facade = ContentFacade::new(Arc::new(source));
        let state = facade.personal_info().settled().await;

        assert!(
            matches!(state, LoadState::Failed(LoadFailure::Network(_))),
            "got {:?}",
            state
        );
    }

    #[tokio::test]
    async fn test_health_check() {
        let (_server, source) = source_for(Router::new().route(
            "/api/",
            get(|| async {
                Json(json!({"message": "CS Portfolio API is running", "version": "1.0.0"}))
            }),
        ))
        .await;

        let status = source.health_check().await.unwrap();
        assert_eq!(status.version, "1.0.0");
    }
}
