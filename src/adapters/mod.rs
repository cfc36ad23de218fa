//! Adapters - implementations of the ports.

mod minting;
mod notify;
pub mod segments;
mod validation;

pub use minting::{SequenceMinter, UuidMinter};
pub use notify::TracingNotifier;
pub use segments::{HttpSegmentClient, InMemorySegmentStore, SegmentApiConfig};
pub use validation::SurveyActionValidator;
