//! Priority scoring - Blends a dimension's latest value with its history.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::assessment::{AssessmentRecord, CognitiveDimension};
use crate::domain::insights::pattern::{DimensionPattern, Trend};

/// A dimension with a final score at or above this is a strength;
/// anything below is a weakness. The cutoff is hard, so no dimension is
/// ever both and none is neither.
pub const STRENGTH_THRESHOLD: f64 = 70.0;

const IMPROVING_BONUS: f64 = 15.0;
const DECLINING_PENALTY: f64 = 10.0;
const HIGH_CONSISTENCY_BONUS: f64 = 8.0;
const LOW_CONSISTENCY_PENALTY: f64 = 5.0;
const MAX_HISTORICAL_WEIGHT: f64 = 0.3;
const RECENCY_FACTOR: f64 = 0.2;

/// A cognitive dimension with its computed priority score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDimension {
    pub dimension: CognitiveDimension,
    pub latest_value: i64,
    pub pattern: Option<DimensionPattern>,
    /// Blended score, clamped to 0-100.
    pub priority_score: f64,
    pub is_strength: bool,
}

/// Scorer combining latest value, historical pattern, and recency signal.
pub struct PriorityScorer;

impl PriorityScorer {
    /// Scores every dimension from the latest record and the pattern map.
    ///
    /// `records` must be ordered newest-first and non-empty.
    pub fn score_all(
        records: &[AssessmentRecord],
        patterns: &BTreeMap<CognitiveDimension, DimensionPattern>,
    ) -> Vec<ScoredDimension> {
        let Some(latest) = records.first() else {
            return Vec::new();
        };

        CognitiveDimension::ALL
            .into_iter()
            .map(|dimension| {
                let latest_value = latest.scores.get(dimension);
                let values: Vec<f64> = records
                    .iter()
                    .map(|r| r.scores.get(dimension) as f64)
                    .collect();
                let pattern = patterns.get(&dimension);
                let priority_score = Self::score(latest_value as f64, pattern, &values);

                ScoredDimension {
                    dimension,
                    latest_value,
                    pattern: pattern.cloned(),
                    priority_score,
                    is_strength: Self::is_strength(priority_score),
                }
            })
            .collect()
    }

    /// Computes the priority score for one dimension.
    ///
    /// `values` holds this dimension's raw value from each assessment,
    /// newest-first. The adjustments apply in a fixed order: trend, then
    /// consistency, then the historical blend, then recency; the result
    /// is clamped to 0-100 last.
    pub fn score(latest: f64, pattern: Option<&DimensionPattern>, values: &[f64]) -> f64 {
        let mut score = latest;

        if let Some(pattern) = pattern {
            score += match pattern.trend {
                Trend::Improving => IMPROVING_BONUS,
                Trend::Declining => -DECLINING_PENALTY,
                Trend::Stable => 0.0,
            };

            if pattern.consistency > 80.0 {
                score += HIGH_CONSISTENCY_BONUS;
            } else if pattern.consistency < 40.0 {
                score -= LOW_CONSISTENCY_PENALTY;
            }

            if pattern.average != 0.0 {
                let weight = (values.len() as f64 / 10.0).min(MAX_HISTORICAL_WEIGHT);
                score = score * (1.0 - weight) + pattern.average * weight;
            }
        }

        if values.len() > 1 {
            let recent = &values[..values.len().min(3)];
            if recent.len() >= 2 {
                let recent_change = recent[0] - recent[recent.len() - 1];
                score += recent_change * RECENCY_FACTOR;
            }
        }

        score.clamp(0.0, 100.0)
    }

    /// Hard strength/weakness cutoff at [`STRENGTH_THRESHOLD`].
    pub fn is_strength(score: f64) -> bool {
        score >= STRENGTH_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::DimensionScores;
    use crate::domain::foundation::AssessmentId;
    use chrono::{Duration, Utc};
    use proptest::prelude::*;

    fn pattern(average: f64, trend: Trend, consistency: f64) -> DimensionPattern {
        DimensionPattern { average, trend, consistency }
    }

    #[test]
    fn no_pattern_and_single_value_returns_raw_value() {
        let score = PriorityScorer::score(80.0, None, &[80.0]);
        assert!((score - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn improving_trend_adds_fifteen() {
        // Average 0 skips the blend; consistency 50 is neutral.
        let p = pattern(0.0, Trend::Improving, 50.0);
        let score = PriorityScorer::score(60.0, Some(&p), &[60.0]);
        assert!((score - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn declining_trend_subtracts_ten() {
        let p = pattern(0.0, Trend::Declining, 50.0);
        let score = PriorityScorer::score(60.0, Some(&p), &[60.0]);
        assert!((score - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn high_consistency_adds_eight() {
        let p = pattern(0.0, Trend::Stable, 90.0);
        let score = PriorityScorer::score(60.0, Some(&p), &[60.0]);
        assert!((score - 68.0).abs() < f64::EPSILON);
    }

    #[test]
    fn low_consistency_subtracts_five() {
        let p = pattern(0.0, Trend::Stable, 30.0);
        let score = PriorityScorer::score(60.0, Some(&p), &[60.0]);
        assert!((score - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn historical_blend_pulls_toward_average() {
        // 5 assessments: weight = min(5/10, 0.3) = 0.3.
        // score = 60 * 0.7 + 80 * 0.3 = 66, then recency on flat values adds 0.
        let p = pattern(80.0, Trend::Stable, 50.0);
        let values = [60.0, 60.0, 60.0, 60.0, 60.0];
        let score = PriorityScorer::score(60.0, Some(&p), &values);
        assert!((score - 66.0).abs() < 1e-9);
    }

    #[test]
    fn historical_weight_caps_at_point_three() {
        let p = pattern(100.0, Trend::Stable, 50.0);
        let twenty = vec![50.0; 20];
        let five = vec![50.0; 5];
        // Both hit the 0.3 cap, so the blend is identical.
        let a = PriorityScorer::score(50.0, Some(&p), &twenty);
        let b = PriorityScorer::score(50.0, Some(&p), &five);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn recency_bias_uses_newest_minus_third_newest() {
        // values newest-first: change = 70 - 50 = 20, bias = +4.
        let values = [70.0, 60.0, 50.0, 90.0];
        let score = PriorityScorer::score(70.0, None, &values);
        assert!((score - 74.0).abs() < 1e-9);
    }

    #[test]
    fn recency_bias_skipped_for_single_assessment() {
        let score = PriorityScorer::score(70.0, None, &[70.0]);
        assert!((score - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn recency_bias_with_two_values() {
        // change = 60 - 40 = 20, bias = +4.
        let score = PriorityScorer::score(60.0, None, &[60.0, 40.0]);
        assert!((score - 64.0).abs() < 1e-9);
    }

    #[test]
    fn score_clamps_at_one_hundred() {
        let p = pattern(0.0, Trend::Improving, 95.0);
        let score = PriorityScorer::score(98.0, Some(&p), &[98.0]);
        assert!((score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_clamps_at_zero() {
        let p = pattern(0.0, Trend::Declining, 10.0);
        let score = PriorityScorer::score(3.0, Some(&p), &[3.0, 80.0]);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn threshold_is_inclusive_at_seventy() {
        assert!(PriorityScorer::is_strength(70.0));
        assert!(!PriorityScorer::is_strength(69.999));
    }

    #[test]
    fn score_all_covers_every_dimension() {
        let record = AssessmentRecord::new(
            AssessmentId::new(),
            Utc::now(),
            DimensionScores::uniform(80),
        );
        let records = vec![record];
        let patterns = crate::domain::insights::PatternAnalyzer::analyze(&records);
        let scored = PriorityScorer::score_all(&records, &patterns);
        assert_eq!(scored.len(), 8);
    }

    #[test]
    fn score_all_empty_records_yields_empty() {
        let scored = PriorityScorer::score_all(&[], &BTreeMap::new());
        assert!(scored.is_empty());
    }

    #[test]
    fn score_all_uses_newest_record_as_latest() {
        let mut newest_scores = DimensionScores::uniform(90);
        newest_scores.memory = 20;
        let newest = AssessmentRecord::new(
            AssessmentId::new(),
            Utc::now(),
            newest_scores,
        );
        let older = AssessmentRecord::new(
            AssessmentId::new(),
            Utc::now() - Duration::days(7),
            DimensionScores::uniform(90),
        );
        let records = vec![newest, older];
        let patterns = crate::domain::insights::PatternAnalyzer::analyze(&records);
        let scored = PriorityScorer::score_all(&records, &patterns);

        let memory = scored
            .iter()
            .find(|s| s.dimension == CognitiveDimension::Memory)
            .unwrap();
        assert_eq!(memory.latest_value, 20);
        assert!(!memory.is_strength);
    }

    proptest! {
        #[test]
        fn score_is_always_within_bounds(
            latest in -500.0..500.0f64,
            average in -500.0..500.0f64,
            consistency in 0.0..150.0f64,
            trend_idx in 0..3usize,
            values in prop::collection::vec(-500.0..500.0f64, 0..12),
        ) {
            let trend = [Trend::Improving, Trend::Declining, Trend::Stable][trend_idx];
            let p = pattern(average, trend, consistency);
            let score = PriorityScorer::score(latest, Some(&p), &values);
            prop_assert!((0.0..=100.0).contains(&score));
        }

        #[test]
        fn score_without_pattern_is_always_within_bounds(
            latest in -500.0..500.0f64,
            values in prop::collection::vec(-500.0..500.0f64, 0..12),
        ) {
            let score = PriorityScorer::score(latest, None, &values);
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }
}
