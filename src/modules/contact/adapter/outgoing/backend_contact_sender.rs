use async_trait::async_trait;

use crate::contact::application::ports::outgoing::{ContactSendError, ContactSender};
use crate::contact::domain::entities::{
    ContactMessage, ContactReceipt, ContactSubmission, DeliveryChannel,
};
use crate::shared::api::{ApiClient, ApiError};

const CONTACT_PATH: &str = "/contact";

/// Posts submissions to the portfolio backend, which stores them.
#[derive(Debug, Clone)]
pub struct BackendContactSender {
    api: ApiClient,
}

impl BackendContactSender {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Messages stored by the backend, newest first (admin view).
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
        self.api.get(CONTACT_PATH).await
    }
}

#[async_trait]
impl ContactSender for BackendContactSender {
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactReceipt, ContactSendError> {
        let stored: ContactMessage = self
            .api
            .post(CONTACT_PATH, submission)
            .await
            .map_err(|e| ContactSendError::Delivery(e.to_string()))?;

        Ok(ContactReceipt {
            reference: Some(stored.id),
            received_at: stored.timestamp,
            ..ContactReceipt::sent(DeliveryChannel::Backend)
        })
    }
}
