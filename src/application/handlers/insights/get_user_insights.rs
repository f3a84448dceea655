//! GetUserInsights - Query handler that runs the full insight pipeline.
//!
//! Orchestrates the analyzers in dependency order and applies the
//! two-tier degradation policy: a failed assessment fetch yields the
//! fixed fallback result, while a failed interaction fetch or save only
//! reduces the output and is logged.

use std::sync::Arc;

use chrono::{Timelike, Utc};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::domain::assessment::filter_valid;
use crate::domain::foundation::UserId;
use crate::domain::insights::{
    InsightSelector, NarrativeComposer, NarrativeContext, PatternAnalyzer, PriorityScorer,
    TechniqueAnalyzer, TimeOfDay, UserInsightsResult,
};
use crate::ports::{AssessmentReader, InsightStore, InteractionReader, NewInsight};

/// Query to compute strengths and weaknesses for a user.
#[derive(Debug, Clone)]
pub struct GetUserInsightsQuery {
    pub user_id: UserId,
}

/// Handler computing and persisting a user's insight result.
///
/// Never returns an error: every collaborator failure maps to either the
/// fallback result or a degraded-but-complete one.
pub struct GetUserInsightsHandler {
    assessments: Arc<dyn AssessmentReader>,
    interactions: Arc<dyn InteractionReader>,
    store: Arc<dyn InsightStore>,
    /// Fixed seed for the narrative template draw; entropy when unset.
    rng_seed: Option<u64>,
}

impl GetUserInsightsHandler {
    pub fn new(
        assessments: Arc<dyn AssessmentReader>,
        interactions: Arc<dyn InteractionReader>,
        store: Arc<dyn InsightStore>,
    ) -> Self {
        Self {
            assessments,
            interactions,
            store,
            rng_seed: None,
        }
    }

    /// Pins the template draw to a fixed seed, for deterministic output.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub async fn handle(&self, query: GetUserInsightsQuery) -> UserInsightsResult {
        // The two fetches are independent; issue them together.
        let (assessments, interactions) = tokio::join!(
            self.assessments.fetch_assessments(&query.user_id),
            self.interactions.fetch_interactions(&query.user_id),
        );

        let records = match assessments {
            Ok(records) => records,
            Err(err) => {
                tracing::error!("Failed to fetch assessments: {}", err);
                return UserInsightsResult::fallback();
            }
        };

        if records.is_empty() {
            return UserInsightsResult::empty_history();
        }

        let raw_interactions = match interactions {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!("Failed to fetch interactions, proceeding without: {}", err);
                Vec::new()
            }
        };
        let valid_interactions = filter_valid(raw_interactions);

        let patterns = PatternAnalyzer::analyze(&records);
        let technique_stats = TechniqueAnalyzer::analyze(&valid_interactions);
        let scored = PriorityScorer::score_all(&records, &patterns);
        let selected = InsightSelector::select(&scored);

        let context = NarrativeContext {
            latest_completed_at: records[0].completed_at,
            time_of_day: TimeOfDay::from_hour(Utc::now().hour()),
            assessment_count: records.len(),
        };
        let mut rng = match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let narrative = NarrativeComposer::compose(
            &selected,
            &patterns,
            &technique_stats,
            &context,
            &mut rng,
        );

        let mut result = UserInsightsResult {
            id: None,
            created_at: None,
            strengths: selected.strengths,
            weaknesses: selected.weaknesses,
            general_insight: narrative,
            source_assessment_id: Some(records[0].id),
        };

        let new_insight = NewInsight {
            general_insight: result.general_insight.clone(),
            strengths: result.strengths.clone(),
            weaknesses: result.weaknesses.clone(),
            source_assessment_id: result.source_assessment_id,
        };
        match self.store.save_insight(&query.user_id, &new_insight).await {
            Ok(saved) => {
                result.id = Some(saved.id);
                result.created_at = Some(saved.created_at);
            }
            Err(err) => {
                tracing::warn!("Failed to save insight, returning unsaved result: {}", err);
            }
        }

        result
    }
}
