//! Segment persistence handlers.

mod save_as_segment;

pub use save_as_segment::{SaveAsSegmentForm, SaveAsSegmentHandler, SaveOutcome};
