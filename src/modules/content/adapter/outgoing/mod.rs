pub mod http_content_source;
pub mod static_content_source;

pub use http_content_source::{BackendStatus, HttpContentSource};
pub use static_content_source::StaticContentSource;
