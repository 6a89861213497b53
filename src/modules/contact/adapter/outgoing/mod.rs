pub mod backend_contact_sender;
pub mod mail_relay_sender;
pub mod simulated_sender;

pub use backend_contact_sender::BackendContactSender;
pub use mail_relay_sender::{MailRelayConfig, MailRelaySender, DEFAULT_MAIL_RELAY_ENDPOINT};
pub use simulated_sender::SimulatedContactSender;
