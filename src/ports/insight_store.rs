use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssessmentId, InsightId, UserId};
use crate::domain::insights::{InsightItem, UserInsightsResult};

/// Default number of stored results returned by a history read.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// A computed insight ready for persistence.
#[derive(Debug, Clone, Serialize)]
pub struct NewInsight {
    pub general_insight: String,
    pub strengths: Vec<InsightItem>,
    pub weaknesses: Vec<InsightItem>,
    pub source_assessment_id: Option<AssessmentId>,
}

/// Identifier and timestamp assigned by the store on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedInsight {
    pub id: InsightId,
    pub created_at: DateTime<Utc>,
}

/// A stored insight row as persisted, possibly from an older schema.
///
/// Strength and weakness entries are kept as raw JSON here and decoded
/// defensively during reshaping, since legacy rows may hold entries that
/// no longer match the expected shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredInsightRow {
    pub id: InsightId,
    pub created_at: DateTime<Utc>,
    pub general_insight: String,
    pub strengths: Vec<serde_json::Value>,
    pub weaknesses: Vec<serde_json::Value>,
    pub source_assessment_id: Option<AssessmentId>,
}

impl StoredInsightRow {
    /// Reshapes this row into a [`UserInsightsResult`], silently dropping
    /// any stored entry that is not a well-formed (area, description) pair.
    pub fn reshape(self) -> UserInsightsResult {
        UserInsightsResult {
            id: Some(self.id),
            created_at: Some(self.created_at),
            strengths: decode_items(self.strengths),
            weaknesses: decode_items(self.weaknesses),
            general_insight: self.general_insight,
            source_assessment_id: self.source_assessment_id,
        }
    }
}

fn decode_items(values: Vec<serde_json::Value>) -> Vec<InsightItem> {
    values
        .into_iter()
        .filter_map(|v| serde_json::from_value::<InsightItem>(v).ok())
        .collect()
}

/// Port for persisting and reading back generated insights.
#[async_trait]
pub trait InsightStore: Send + Sync {
    /// Saves a generated insight, returning the assigned id and creation
    /// timestamp. Failure is non-fatal to insight generation.
    async fn save_insight(
        &self,
        user_id: &UserId,
        insight: &NewInsight,
    ) -> Result<SavedInsight, InsightStoreError>;

    /// Fetches up to `limit` previously saved insights, newest first.
    async fn fetch_insight_history(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<StoredInsightRow>, InsightStoreError>;
}

/// Errors that can occur during insight persistence.
#[derive(Debug, thiserror::Error)]
pub enum InsightStoreError {
    #[error("Database error: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(strengths: Vec<serde_json::Value>) -> StoredInsightRow {
        StoredInsightRow {
            id: InsightId::new(),
            created_at: Utc::now(),
            general_insight: "summary".to_string(),
            strengths,
            weaknesses: Vec::new(),
            source_assessment_id: None,
        }
    }

    #[test]
    fn reshape_decodes_well_formed_entries() {
        let row = row(vec![json!({"area": "memory", "description": "Strong recall."})]);
        let result = row.reshape();
        assert_eq!(result.strengths.len(), 1);
        assert_eq!(result.strengths[0].area, "memory");
        assert!(result.id.is_some());
        assert!(result.created_at.is_some());
    }

    #[test]
    fn reshape_drops_malformed_entries() {
        let row = row(vec![
            json!({"area": "memory", "description": "Strong recall."}),
            json!({"area": "focus"}),
            json!("just a string"),
            json!(42),
        ]);
        let result = row.reshape();
        assert_eq!(result.strengths.len(), 1);
        assert_eq!(result.strengths[0].area, "memory");
    }

    #[test]
    fn reshape_preserves_narrative_and_source() {
        let assessment_id = AssessmentId::new();
        let mut stored = row(Vec::new());
        stored.source_assessment_id = Some(assessment_id);
        let result = stored.reshape();
        assert_eq!(result.general_insight, "summary");
        assert_eq!(result.source_assessment_id, Some(assessment_id));
    }
}
