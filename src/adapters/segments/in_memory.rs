//! In-memory segment store for testing.
//!
//! Deterministic, synchronous stand-in for the segment API. Test-only:
//! lock operations use `.expect()` and will panic if poisoned.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::{SegmentId, Timestamp};
use crate::domain::segment::{Segment, SegmentError};
use crate::ports::{SegmentDraft, SegmentRepository, SegmentUpdate};

/// In-memory SegmentRepository.
///
/// Features:
/// - Seeding with existing segments
/// - Call and creation counters for assertions
/// - A failing mode that rejects every call with a persistence error
pub struct InMemorySegmentStore {
    segments: RwLock<HashMap<SegmentId, Segment>>,
    calls: AtomicUsize,
    created: AtomicUsize,
    failure: Option<String>,
}

impl InMemorySegmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            segments: RwLock::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            created: AtomicUsize::new(0),
            failure: None,
        }
    }

    /// Creates a store seeded with the given segments.
    pub fn with_segments(segments: Vec<Segment>) -> Self {
        let store = Self::new();
        {
            let mut map = store.segments.write().expect("segments lock poisoned");
            for segment in segments {
                map.insert(segment.id.clone(), segment);
            }
        }
        store
    }

    /// Creates a store whose every call fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Total repository calls made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Segments created (as opposed to updated).
    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Returns the stored segment with the given id, if any.
    pub fn segment(&self, id: &SegmentId) -> Option<Segment> {
        self.segments
            .read()
            .expect("segments lock poisoned")
            .get(id)
            .cloned()
    }

    fn check_failure(&self) -> Result<(), SegmentError> {
        match &self.failure {
            Some(message) => Err(SegmentError::persistence(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for InMemorySegmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SegmentRepository for InMemorySegmentStore {
    async fn create(&self, draft: SegmentDraft) -> Result<Segment, SegmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let now = Timestamp::now();
        let segment = Segment {
            id: SegmentId::from(Uuid::new_v4().to_string()),
            environment_id: draft.environment_id,
            title: draft.title,
            description: draft.description,
            is_private: draft.is_private,
            filters: draft.filters,
            created_at: now,
            updated_at: now,
        };

        self.segments
            .write()
            .expect("segments lock poisoned")
            .insert(segment.id.clone(), segment.clone());
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(segment)
    }

    async fn update(&self, id: &SegmentId, update: SegmentUpdate) -> Result<Segment, SegmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let mut segments = self.segments.write().expect("segments lock poisoned");
        let segment = segments
            .get_mut(id)
            .ok_or_else(|| SegmentError::NotFound { id: id.clone() })?;

        segment.title = update.title;
        segment.description = update.description;
        segment.is_private = update.is_private;
        segment.filters = update.filters;
        segment.updated_at = Timestamp::now();
        Ok(segment.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EnvironmentId, SurveyId};

    fn draft() -> SegmentDraft {
        SegmentDraft {
            environment_id: EnvironmentId::from("env1"),
            survey_id: SurveyId::from("s1"),
            title: "Power Users".to_string(),
            description: "Most active".to_string(),
            is_private: false,
            filters: vec![],
        }
    }

    #[tokio::test]
    async fn create_stores_and_counts() {
        let store = InMemorySegmentStore::new();
        let segment = store.create(draft()).await.unwrap();

        assert_eq!(store.created_count(), 1);
        assert_eq!(store.call_count(), 1);
        assert_eq!(store.segment(&segment.id).unwrap().title, "Power Users");
    }

    #[tokio::test]
    async fn update_of_missing_segment_is_not_found() {
        let store = InMemorySegmentStore::new();
        let result = store
            .update(
                &SegmentId::from("missing"),
                SegmentUpdate {
                    title: "t".to_string(),
                    description: "d".to_string(),
                    is_private: false,
                    filters: vec![],
                },
            )
            .await;
        assert!(matches!(result, Err(SegmentError::NotFound { .. })));
    }

    #[tokio::test]
    async fn failing_store_rejects_every_call() {
        let store = InMemorySegmentStore::failing("down");
        let result = store.create(draft()).await;
        assert!(matches!(result, Err(SegmentError::Persistence { .. })));
        assert_eq!(store.created_count(), 0);
    }
}
