//! Technique analysis - Aggregated feedback counts per technique.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::assessment::{Feedback, TechniqueInteraction};
use crate::domain::foundation::TechniqueId;

/// Aggregated feedback counts for one technique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechniqueStats {
    pub helpful: u32,
    pub not_helpful: u32,
    pub total_interactions: u32,
}

impl TechniqueStats {
    /// Whether the feedback so far is net positive.
    pub fn is_working(&self) -> bool {
        self.helpful > self.not_helpful && self.helpful > 0
    }
}

/// Analyzer for technique interaction feedback.
pub struct TechniqueAnalyzer;

impl TechniqueAnalyzer {
    /// Groups interactions by technique and tallies feedback.
    ///
    /// Every interaction counts toward the total; interactions without
    /// feedback count toward the total only. Accumulation is commutative,
    /// so input order does not affect the result.
    pub fn analyze(
        interactions: &[TechniqueInteraction],
    ) -> BTreeMap<TechniqueId, TechniqueStats> {
        let mut stats: BTreeMap<TechniqueId, TechniqueStats> = BTreeMap::new();

        for interaction in interactions {
            let entry = stats.entry(interaction.technique_id.clone()).or_default();
            entry.total_interactions += 1;
            match interaction.feedback {
                Some(Feedback::Helpful) => entry.helpful += 1,
                Some(Feedback::NotHelpful) => entry.not_helpful += 1,
                None => {}
            }
        }

        stats
    }
}
