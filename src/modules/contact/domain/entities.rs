use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// What a visitor typed into the contact form. Sent once, never stored here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// All three fields are filled in. The form checks this before submitting.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryChannel {
    MailRelay,
    Backend,
    Simulated,
}

/// Confirmation that a submission was handed off.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactReceipt {
    pub channel: DeliveryChannel,
    pub message: String,
    /// Identifier assigned by the receiving side, when it returns one.
    pub reference: Option<String>,
    pub received_at: Option<NaiveDateTime>,
}

impl ContactReceipt {
    pub const SENT_MESSAGE: &'static str = "Message sent successfully!";

    pub fn sent(channel: DeliveryChannel) -> Self {
        Self {
            channel,
            message: Self::SENT_MESSAGE.to_string(),
            reference: None,
            received_at: None,
        }
    }
}

/// A message as stored by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: Option<String>,
}
