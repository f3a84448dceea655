use async_trait::async_trait;

use crate::domain::assessment::RawInteraction;
use crate::domain::foundation::UserId;

/// Read-only port for a user's technique interaction rows.
///
/// Rows come back unvalidated; the engine filters malformed entries
/// before aggregation. Failure here is non-fatal: insight generation
/// proceeds with empty technique stats.
#[async_trait]
pub trait InteractionReader: Send + Sync {
    /// Fetches technique interaction rows for a user, newest first.
    async fn fetch_interactions(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<RawInteraction>, InteractionReadError>;
}

/// Errors that can occur while fetching interactions.
#[derive(Debug, thiserror::Error)]
pub enum InteractionReadError {
    #[error("Database error: {0}")]
    Database(String),
}
