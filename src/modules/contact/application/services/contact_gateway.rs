use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{error, info, warn};

use crate::contact::application::ports::outgoing::{ContactSendError, ContactSender};
use crate::contact::domain::entities::{ContactReceipt, ContactSubmission};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("A submission is already in flight")]
    AlreadySubmitting,

    #[error("Contact delivery is not configured: {0}")]
    Configuration(String),

    #[error("Contact delivery failed: {0}")]
    Delivery(String),
}

impl ContactError {
    /// Text for the visitor. The detailed reason only goes to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            ContactError::AlreadySubmitting => "Your message is still being sent.",
            ContactError::Configuration(_) => {
                "The contact form is unavailable right now. Please reach out by email."
            }
            ContactError::Delivery(_) => "Failed to send message. Please try again.",
        }
    }
}

impl From<ContactSendError> for ContactError {
    fn from(err: ContactSendError) -> Self {
        match err {
            ContactSendError::Configuration(msg) => ContactError::Configuration(msg),
            ContactSendError::Delivery(msg) => ContactError::Delivery(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// State
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Delivered(ContactReceipt),
    Failed(ContactError),
}

impl SubmissionStatus {
    /// Whether a new submission would be accepted.
    pub fn accepts_submission(&self) -> bool {
        !matches!(self, SubmissionStatus::Submitting)
    }
}

fn lock(status: &Mutex<SubmissionStatus>) -> MutexGuard<'_, SubmissionStatus> {
    status.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Resets a submission that was abandoned mid-flight back to `Idle`.
struct InFlight<'a> {
    status: &'a Mutex<SubmissionStatus>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, outcome: SubmissionStatus) {
        *lock(self.status) = outcome;
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *lock(self.status) = SubmissionStatus::Idle;
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Gateway
// ──────────────────────────────────────────────────────────
//

/// Sends contact form submissions and tracks
/// `Idle → Submitting → Delivered | Failed`.
///
/// Only one submission may be in flight; once it settles, the next one is
/// accepted whatever the outcome.
#[derive(Clone)]
pub struct ContactGateway {
    sender: Arc<dyn ContactSender>,
    status: Arc<Mutex<SubmissionStatus>>,
}

impl fmt::Debug for ContactGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactGateway")
            .field("sender", &"<dyn ContactSender>")
            .field("status", &self.status())
            .finish()
    }
}

impl ContactGateway {
    pub fn new(sender: Arc<dyn ContactSender>) -> Self {
        Self {
            sender,
            status: Arc::new(Mutex::new(SubmissionStatus::Idle)),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        lock(&self.status).clone()
    }

    pub fn is_submitting(&self) -> bool {
        !lock(&self.status).accepts_submission()
    }

    pub async fn submit(&self, submission: ContactSubmission) -> Result<ContactReceipt, ContactError> {
        let in_flight = {
            let mut status = lock(&self.status);
            if !status.accepts_submission() {
                warn!("Contact submission ignored: another one is in flight");
                return Err(ContactError::AlreadySubmitting);
            }
            *status = SubmissionStatus::Submitting;
            InFlight {
                status: &self.status,
                settled: false,
            }
        };

        info!(from = %submission.email, "Submitting contact message");

        match self.sender.send(&submission).await {
            Ok(receipt) => {
                info!(
                    from = %submission.email,
                    reference = receipt.reference.as_deref().unwrap_or("-"),
                    "Contact message delivered"
                );
                in_flight.settle(SubmissionStatus::Delivered(receipt.clone()));
                Ok(receipt)
            }
            Err(e) => {
                error!(from = %submission.email, error = %e, "Contact message not delivered");
                let err = ContactError::from(e);
                in_flight.settle(SubmissionStatus::Failed(err.clone()));
                Err(err)
            }
        }
    }
}
