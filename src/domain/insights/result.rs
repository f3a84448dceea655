//! The result object handed back to callers and to the persistence port.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssessmentId, InsightId};
use crate::domain::insights::narrative::{EMPTY_HISTORY_MESSAGE, FALLBACK_MESSAGE};
use crate::domain::insights::selection::InsightItem;

/// Strengths, weaknesses, and narrative for one user.
///
/// `id` and `created_at` are populated only after the persistence step
/// succeeds; a failed save leaves them unset without failing the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInsightsResult {
    pub id: Option<InsightId>,
    pub created_at: Option<DateTime<Utc>>,
    pub strengths: Vec<InsightItem>,
    pub weaknesses: Vec<InsightItem>,
    pub general_insight: String,
    pub source_assessment_id: Option<AssessmentId>,
}

impl UserInsightsResult {
    /// Result for a user with no completed assessments.
    pub fn empty_history() -> Self {
        Self::message_only(EMPTY_HISTORY_MESSAGE)
    }

    /// Fixed fallback returned when analysis cannot run at all.
    pub fn fallback() -> Self {
        Self::message_only(FALLBACK_MESSAGE)
    }

    fn message_only(message: &str) -> Self {
        Self {
            id: None,
            created_at: None,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            general_insight: message.to_string(),
            source_assessment_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_carries_the_fixed_message_and_nothing_else() {
        let result = UserInsightsResult::fallback();
        assert!(result.strengths.is_empty());
        assert!(result.weaknesses.is_empty());
        assert!(result.id.is_none());
        assert_eq!(
            result.general_insight,
            "We're having trouble analyzing your data. Please try again later."
        );
    }

    #[test]
    fn empty_history_carries_the_prompt_message() {
        let result = UserInsightsResult::empty_history();
        assert!(result.strengths.is_empty());
        assert!(result.general_insight.starts_with("Complete an assessment"));
    }

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let result = UserInsightsResult::fallback();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("generalInsight"));
        assert!(json.contains("sourceAssessmentId"));
    }
}
