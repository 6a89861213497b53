use crate::contact::adapter::outgoing::{MailRelayConfig, DEFAULT_MAIL_RELAY_ENDPOINT};
use crate::contact::domain::entities::DeliveryChannel;

pub const CONTENT_SOURCE_VAR: &str = "PORTFOLIO_CONTENT_SOURCE";
pub const BACKEND_URL_VAR: &str = "PORTFOLIO_BACKEND_URL";
pub const CONTACT_CHANNEL_VAR: &str = "PORTFOLIO_CONTACT_CHANNEL";
pub const MAIL_RELAY_ENDPOINT_VAR: &str = "MAIL_RELAY_ENDPOINT";
pub const MAIL_RELAY_SERVICE_ID_VAR: &str = "MAIL_RELAY_SERVICE_ID";
pub const MAIL_RELAY_TEMPLATE_ID_VAR: &str = "MAIL_RELAY_TEMPLATE_ID";
pub const MAIL_RELAY_PUBLIC_KEY_VAR: &str = "MAIL_RELAY_PUBLIC_KEY";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} has unsupported value '{value}' (expected one of: {expected})")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentSourceKind {
    #[default]
    Static,
    Remote,
}

impl ContentSourceKind {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "remote" => Ok(Self::Remote),
            _ => Err(ConfigError::Invalid {
                var: CONTENT_SOURCE_VAR,
                value: value.to_string(),
                expected: "static, remote",
            }),
        }
    }
}

fn parse_contact_channel(value: &str) -> Result<DeliveryChannel, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "mail_relay" => Ok(DeliveryChannel::MailRelay),
        "backend" => Ok(DeliveryChannel::Backend),
        "simulated" => Ok(DeliveryChannel::Simulated),
        _ => Err(ConfigError::Invalid {
            var: CONTACT_CHANNEL_VAR,
            value: value.to_string(),
            expected: "mail_relay, backend, simulated",
        }),
    }
}

/// Deployment settings: where content comes from and how contact
/// submissions leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioConfig {
    pub content_source: ContentSourceKind,
    /// Backend origin; the API lives under `{backend_url}/api`.
    pub backend_url: Option<String>,
    pub contact_channel: DeliveryChannel,
    pub mail_relay: MailRelayConfig,
}

impl Default for PortfolioConfig {
    /// Static content with the simulated contact channel. Needs no environment.
    fn default() -> Self {
        Self {
            content_source: ContentSourceKind::Static,
            backend_url: None,
            contact_channel: DeliveryChannel::Simulated,
            mail_relay: MailRelayConfig {
                endpoint: DEFAULT_MAIL_RELAY_ENDPOINT.to_string(),
                service_id: None,
                template_id: None,
                public_key: None,
            },
        }
    }
}

impl PortfolioConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        // Try .env.{environment} first, then fall back to .env
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let content_source = read(CONTENT_SOURCE_VAR)
            .map(|v| ContentSourceKind::parse(&v))
            .transpose()?
            .unwrap_or_default();

        let contact_channel = read(CONTACT_CHANNEL_VAR)
            .map(|v| parse_contact_channel(&v))
            .transpose()?
            .unwrap_or(DeliveryChannel::Simulated);

        let backend_url = read(BACKEND_URL_VAR).map(|url| url.trim_end_matches('/').to_string());

        let needs_backend = content_source == ContentSourceKind::Remote
            || contact_channel == DeliveryChannel::Backend;
        if needs_backend && backend_url.is_none() {
            return Err(ConfigError::Missing(BACKEND_URL_VAR));
        }

        let mail_relay = MailRelayConfig {
            endpoint: read(MAIL_RELAY_ENDPOINT_VAR)
                .unwrap_or_else(|| DEFAULT_MAIL_RELAY_ENDPOINT.to_string()),
            service_id: read(MAIL_RELAY_SERVICE_ID_VAR),
            template_id: read(MAIL_RELAY_TEMPLATE_ID_VAR),
            public_key: read(MAIL_RELAY_PUBLIC_KEY_VAR),
        };

        Ok(Self {
            content_source,
            backend_url,
            contact_channel,
            mail_relay,
        })
    }

    /// The backend origin, for wiring that requires it.
    pub fn require_backend_url(&self) -> Result<&str, ConfigError> {
        self.backend_url
            .as_deref()
            .ok_or(ConfigError::Missing(BACKEND_URL_VAR))
    }
}
