use async_trait::async_trait;

use crate::contact::domain::entities::{ContactReceipt, ContactSubmission};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContactSendError {
    /// Required delivery settings are missing; nothing was sent.
    #[error("Contact delivery is not configured: {0}")]
    Configuration(String),

    #[error("Contact delivery failed: {0}")]
    Delivery(String),
}

/// Hands a submission to whatever actually delivers it.
///
/// One outbound call per `send`; no retries.
#[async_trait]
pub trait ContactSender: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactReceipt, ContactSendError>;
}
