pub mod content_fixtures;
pub mod fake_server;
pub mod log_capture;
