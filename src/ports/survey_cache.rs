//! Survey cache port - refresh trigger for dependent survey views.

use async_trait::async_trait;

use crate::domain::foundation::{EnvironmentId, SurveyId};

/// Port for invalidating cached survey state after a segment changes.
///
/// Refreshing is best-effort: a failed invalidation only leaves a stale
/// view behind, so implementations log rather than propagate errors.
#[async_trait]
pub trait SurveyCache: Send + Sync {
    /// Marks the survey's cached state as stale so it is refetched.
    async fn invalidate(&self, environment_id: &EnvironmentId, survey_id: &SurveyId);
}
