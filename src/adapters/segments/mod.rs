//! Segment repository adapters.

mod http_client;
mod in_memory;

pub use http_client::{HttpSegmentClient, SegmentApiConfig};
pub use in_memory::InMemorySegmentStore;
