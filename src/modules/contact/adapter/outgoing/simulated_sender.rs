use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

use crate::contact::application::ports::outgoing::{ContactSendError, ContactSender};
use crate::contact::domain::entities::{ContactReceipt, ContactSubmission, DeliveryChannel};

pub const SIMULATED_SEND_DELAY: Duration = Duration::from_secs(1);

/// Confirms every submission after a short delay without sending anything.
///
/// Used when the site runs on the static dataset. The submission is dropped
/// once confirmed; nothing is kept.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedContactSender {
    delay: Duration,
}

impl SimulatedContactSender {
    pub fn new() -> Self {
        Self::with_delay(SIMULATED_SEND_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedContactSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactSender for SimulatedContactSender {
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactReceipt, ContactSendError> {
        info!(from = %submission.email, "Simulating contact delivery");
        tokio::time::sleep(self.delay).await;

        Ok(ContactReceipt::sent(DeliveryChannel::Simulated))
    }
}
