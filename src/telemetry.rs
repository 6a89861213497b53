use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "info,portfolio_core=debug";

/// Installs the global subscriber: `RUST_LOG` if set, otherwise
/// [`DEFAULT_FILTER`], formatted to stdout.
///
/// Returns `false` when a subscriber was already installed (the host
/// application set up its own).
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
