//! GetInsightHistory - Query handler for previously saved insights.
//!
//! Reads back up to the 10 most recent stored results, reshaping each
//! row defensively. Collaborator failure means "no history", never an
//! error to the caller.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::insights::UserInsightsResult;
use crate::ports::{InsightStore, DEFAULT_HISTORY_LIMIT};

/// Query for a user's stored insight history.
#[derive(Debug, Clone)]
pub struct GetInsightHistoryQuery {
    pub user_id: UserId,
}

/// Handler for reading insight history.
pub struct GetInsightHistoryHandler {
    store: Arc<dyn InsightStore>,
}

impl GetInsightHistoryHandler {
    pub fn new(store: Arc<dyn InsightStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetInsightHistoryQuery) -> Vec<UserInsightsResult> {
        let rows = match self
            .store
            .fetch_insight_history(&query.user_id, DEFAULT_HISTORY_LIMIT)
            .await
        {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!("Failed to fetch insight history: {}", err);
                return Vec::new();
            }
        };

        rows.into_iter().map(|row| row.reshape()).collect()
    }
}
