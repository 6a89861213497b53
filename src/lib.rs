pub mod app_state;
pub mod config;
pub mod modules;
pub mod shared;
pub mod telemetry;

pub use modules::contact;
pub use modules::content;
pub use modules::visibility;

pub use app_state::{Portfolio, PortfolioError};
pub use config::{ConfigError, PortfolioConfig};

#[cfg(test)]
mod tests;
