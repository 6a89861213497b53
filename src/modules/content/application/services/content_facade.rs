use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::content::application::ports::outgoing::{ContentSource, LoadFailure};
use crate::content::domain::entities::{
    Certificate, EducationRecord, ExperienceEntry, PersonalInfo, Photo, Project, SkillSet,
    SoftSkills, VolunteerEntry,
};
use crate::content::domain::{ContentDomain, LoadState};

pub type ContentState<T> = LoadState<T, LoadFailure>;

type Fetch<T> = BoxFuture<'static, Result<T, LoadFailure>>;

// ============================================================================
// Load handle
// ============================================================================

/// One in-flight load of a content domain, owned by the view that asked.
///
/// Starts `Pending` and publishes exactly one terminal state. Dropping the
/// handle cancels the load: nothing is published or logged afterwards.
pub struct ContentLoad<T> {
    domain: ContentDomain,
    state: watch::Receiver<ContentState<T>>,
    task: JoinHandle<()>,
}

impl<T: Clone> ContentLoad<T> {
    pub fn domain(&self) -> ContentDomain {
        self.domain
    }

    /// Current state, for views that poll on each render.
    pub fn state(&self) -> ContentState<T> {
        self.state.borrow().clone()
    }

    /// Change notifications, for views that subscribe instead of polling.
    pub fn watch(&self) -> watch::Receiver<ContentState<T>> {
        self.state.clone()
    }

    /// Waits until the load reaches `Ready` or `Failed`.
    pub async fn settled(&mut self) -> ContentState<T> {
        loop {
            let current = self.state.borrow_and_update().clone();
            if current.is_terminal() {
                return current;
            }
            if self.state.changed().await.is_err() {
                let last = self.state.borrow().clone();
                return if last.is_terminal() {
                    last
                } else {
                    LoadState::Failed(LoadFailure::Unavailable(
                        "load ended without a result".to_string(),
                    ))
                };
            }
        }
    }
}

impl<T> fmt::Debug for ContentLoad<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentLoad")
            .field("domain", &self.domain)
            .field("finished", &self.task.is_finished())
            .finish()
    }
}

impl<T> Drop for ContentLoad<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// ============================================================================
// Facade
// ============================================================================

/// Uniform access to every content domain, whichever source backs it.
///
/// Each accessor returns immediately with a `Pending` handle and resolves
/// on a spawned task, so it must be called from within a Tokio runtime.
/// Every call fetches again; retrying a failed section means calling the
/// accessor again.
#[derive(Clone)]
pub struct ContentFacade {
    source: Arc<dyn ContentSource>,
}

impl fmt::Debug for ContentFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentFacade")
            .field("source", &"<dyn ContentSource>")
            .finish()
    }
}

impl ContentFacade {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub fn personal_info(&self) -> ContentLoad<PersonalInfo> {
        self.load(ContentDomain::Personal, |source| {
            Box::pin(async move { source.fetch_personal_info().await })
        })
    }

    pub fn projects(&self) -> ContentLoad<Vec<Project>> {
        self.load(ContentDomain::Projects, |source| {
            Box::pin(async move { source.fetch_projects().await })
        })
    }

    pub fn skills(&self) -> ContentLoad<SkillSet> {
        self.load(ContentDomain::Skills, |source| {
            Box::pin(async move { source.fetch_skills().await })
        })
    }

    pub fn soft_skills(&self) -> ContentLoad<SoftSkills> {
        self.load(ContentDomain::SoftSkills, |source| {
            Box::pin(async move { source.fetch_soft_skills().await })
        })
    }

    pub fn experience(&self) -> ContentLoad<Vec<ExperienceEntry>> {
        self.load(ContentDomain::Experience, |source| {
            Box::pin(async move { source.fetch_experience().await })
        })
    }

    pub fn education(&self) -> ContentLoad<Vec<EducationRecord>> {
        self.load(ContentDomain::Education, |source| {
            Box::pin(async move { source.fetch_education().await })
        })
    }

    pub fn certificates(&self) -> ContentLoad<Vec<Certificate>> {
        self.load(ContentDomain::Certificates, |source| {
            Box::pin(async move { source.fetch_certificates().await })
        })
    }

    pub fn volunteer_entries(&self) -> ContentLoad<Vec<VolunteerEntry>> {
        self.load(ContentDomain::Volunteer, |source| {
            Box::pin(async move { source.fetch_volunteer_entries().await })
        })
    }

    pub fn gallery_photos(&self) -> ContentLoad<Vec<Photo>> {
        self.load(ContentDomain::Gallery, |source| {
            Box::pin(async move { source.fetch_gallery_photos().await })
        })
    }

    fn load<T, F>(&self, domain: ContentDomain, fetch: F) -> ContentLoad<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce(Arc<dyn ContentSource>) -> Fetch<T>,
    {
        let (tx, rx) = watch::channel(LoadState::Pending);
        let pending = fetch(Arc::clone(&self.source));

        let task = tokio::spawn(async move {
            let result = pending.await;

            // The view went away while we were waiting.
            if tx.is_closed() {
                return;
            }

            match &result {
                Ok(_) => debug!(domain = %domain, "Content loaded"),
                Err(e) => warn!(domain = %domain, error = %e, "Content load failed"),
            }

            tx.send_replace(LoadState::from(result));
        });

        ContentLoad {
            domain,
            state: rx,
            task,
        }
    }
}
