pub mod visibility_tracker;

pub use visibility_tracker::{VisibilitySubscription, VisibilityTracker};
