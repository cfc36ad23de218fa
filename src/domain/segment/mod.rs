//! Audience segments - named, reusable filter sets.
//!
//! A survey's audience starts as a private ad-hoc filter set. Saving it as
//! a segment gives it a title and description and makes it public, so other
//! surveys in the environment can reference it by id. A public segment is
//! never re-privatized by this flow.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{EnvironmentId, SegmentId, Timestamp, ValidationError};
use crate::domain::logic::StaticValue;

/// Comparison applied by a single audience filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
}

/// One audience filter: an attribute compared against a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentFilter {
    pub attribute: String,
    pub operator: FilterOperator,
    pub value: StaticValue,
}

/// A named, shareable set of audience filters owned by an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: SegmentId,
    pub environment_id: EnvironmentId,
    pub title: String,
    pub description: String,
    pub is_private: bool,
    pub filters: Vec<SegmentFilter>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Segment {
    /// Whether this segment has any filters attached.
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}

/// Errors raised by segment persistence and validation.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Segment '{id}' was not found")]
    NotFound { id: SegmentId },

    #[error("Segment persistence failed: {message}")]
    Persistence { message: String },
}

impl SegmentError {
    /// Creates a persistence error from an underlying failure.
    pub fn persistence(message: impl Into<String>) -> Self {
        SegmentError::Persistence {
            message: message.into(),
        }
    }
}
