pub mod content_facade;
pub mod gallery_filter;

pub use content_facade::{ContentFacade, ContentLoad, ContentState};
