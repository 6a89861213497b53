use std::sync::Arc;
use tracing::info;

use crate::config::{
    ConfigError, ContentSourceKind, PortfolioConfig, BACKEND_URL_VAR,
};
use crate::contact::adapter::outgoing::{
    BackendContactSender, MailRelaySender, SimulatedContactSender,
};
use crate::contact::application::ports::outgoing::{ContactSendError, ContactSender};
use crate::contact::application::services::ContactGateway;
use crate::contact::domain::entities::DeliveryChannel;
use crate::content::adapter::outgoing::{BackendStatus, HttpContentSource, StaticContentSource};
use crate::content::application::ports::outgoing::{ContentSource, LoadFailure};
use crate::content::application::services::ContentFacade;
use crate::content::domain::entities::PortfolioContent;
use crate::shared::api::{ApiClient, ApiError};

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Backend client: {0}")]
    Api(#[from] ApiError),

    #[error("Bundled dataset is malformed: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("Contact channel: {0}")]
    Contact(#[from] ContactSendError),
}

/// Everything the views need, wired from one config.
#[derive(Clone, Debug)]
pub struct Portfolio {
    pub content: ContentFacade,
    pub contact: ContactGateway,
    backend: Option<HttpContentSource>,
}

impl Portfolio {
    pub fn new(content: ContentFacade, contact: ContactGateway) -> Self {
        Self {
            content,
            contact,
            backend: None,
        }
    }

    pub fn from_config(config: &PortfolioConfig) -> Result<Self, PortfolioError> {
        let api = match &config.backend_url {
            Some(url) => Some(ApiClient::for_backend(url)?),
            None => None,
        };

        let backend = match config.content_source {
            ContentSourceKind::Static => None,
            ContentSourceKind::Remote => {
                let api = api.clone().ok_or(ConfigError::Missing(BACKEND_URL_VAR))?;
                Some(HttpContentSource::new(api))
            }
        };

        let source: Arc<dyn ContentSource> = match &backend {
            Some(remote) => Arc::new(remote.clone()),
            None => {
                let dataset = Arc::new(PortfolioContent::bundled()?);
                Arc::new(StaticContentSource::new(dataset))
            }
        };

        let sender: Arc<dyn ContactSender> = match config.contact_channel {
            DeliveryChannel::MailRelay => Arc::new(MailRelaySender::new(config.mail_relay.clone())?),
            DeliveryChannel::Backend => {
                let api = api.ok_or(ConfigError::Missing(BACKEND_URL_VAR))?;
                Arc::new(BackendContactSender::new(api))
            }
            DeliveryChannel::Simulated => Arc::new(SimulatedContactSender::new()),
        };

        info!(
            content_source = ?config.content_source,
            contact_channel = ?config.contact_channel,
            "Portfolio wired"
        );

        Ok(Self {
            content: ContentFacade::new(source),
            contact: ContactGateway::new(sender),
            backend,
        })
    }

    /// The backend's banner, when content comes from a backend.
    pub async fn backend_health(&self) -> Option<Result<BackendStatus, LoadFailure>> {
        match &self.backend {
            Some(backend) => Some(backend.health_check().await),
            None => None,
        }
    }
}
