use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

use crate::contact::application::ports::outgoing::{ContactSendError, ContactSender};
use crate::contact::domain::entities::{ContactReceipt, ContactSubmission, DeliveryChannel};
use crate::shared::api::REQUEST_TIMEOUT;

pub const DEFAULT_MAIL_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Identifiers for the transactional email service.
///
/// Missing identifiers are tolerated at startup and reported on the first
/// submission, before anything goes over the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRelayConfig {
    pub endpoint: String,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

impl MailRelayConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: DEFAULT_MAIL_RELAY_ENDPOINT.to_string(),
            service_id: Some(service_id.into()),
            template_id: Some(template_id.into()),
            public_key: Some(public_key.into()),
        }
    }

    fn credentials(&self) -> Result<Credentials<'_>, ContactSendError> {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().map(str::trim).filter(|v| !v.is_empty())
        }

        let service_id = present(&self.service_id);
        let template_id = present(&self.template_id);
        let public_key = present(&self.public_key);

        match (service_id, template_id, public_key) {
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(Credentials {
                service_id,
                template_id,
                public_key,
            }),
            _ => {
                let missing: Vec<&str> = [
                    ("MAIL_RELAY_SERVICE_ID", service_id),
                    ("MAIL_RELAY_TEMPLATE_ID", template_id),
                    ("MAIL_RELAY_PUBLIC_KEY", public_key),
                ]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(name, _)| name)
                .collect();
                Err(ContactSendError::Configuration(format!(
                    "missing {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

struct Credentials<'a> {
    service_id: &'a str,
    template_id: &'a str,
    public_key: &'a str,
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    reply_to: &'a str,
    message: &'a str,
}

/// Delivers submissions through an EmailJS-compatible relay.
#[derive(Debug, Clone)]
pub struct MailRelaySender {
    http: reqwest::Client,
    config: MailRelayConfig,
}

impl MailRelaySender {
    pub fn new(config: MailRelayConfig) -> Result<Self, ContactSendError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ContactSendError::Delivery(e.to_string()))?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl ContactSender for MailRelaySender {
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactReceipt, ContactSendError> {
        let credentials = self.config.credentials()?;

        let body = RelayRequest {
            service_id: credentials.service_id,
            template_id: credentials.template_id,
            user_id: credentials.public_key,
            template_params: TemplateParams {
                from_name: &submission.name,
                from_email: &submission.email,
                reply_to: &submission.email,
                message: &submission.message,
            },
        };

        info!(endpoint = %self.config.endpoint, "Mail relay request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Mail relay unreachable");
                ContactSendError::Delivery(e.to_string())
            })?;

        let status = response.status();
        info!(status = status.as_u16(), "Mail relay response");

        if status.is_success() {
            Ok(ContactReceipt::sent(DeliveryChannel::MailRelay))
        } else {
            let detail = response.text().await.unwrap_or_default();
            Err(ContactSendError::Delivery(format!(
                "mail relay responded with {}: {}",
                status.as_u16(),
                detail
            )))
        }
    }
}
