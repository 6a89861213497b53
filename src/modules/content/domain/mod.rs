pub mod content_domain;
pub mod entities;
pub mod load_state;

pub use content_domain::ContentDomain;
pub use load_state::LoadState;
