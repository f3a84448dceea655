//! Pattern analysis - Historical statistics per cognitive dimension.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::assessment::{AssessmentRecord, CognitiveDimension};

/// Minimum history length before a trend other than Stable is reported.
pub const MIN_RECORDS_FOR_TREND: usize = 4;

/// Mean difference (in score points) required to call a trend.
pub const TREND_THRESHOLD: f64 = 5.0;

/// Qualitative direction of a dimension's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

/// Historical statistics for one cognitive dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionPattern {
    /// Arithmetic mean across all records.
    pub average: f64,
    pub trend: Trend,
    /// 100 minus the population standard deviation, floored at 0.
    /// Higher means more stable; not clamped above 100.
    pub consistency: f64,
}

/// Analyzer for per-dimension historical statistics.
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    /// Computes average, trend, and consistency for every dimension.
    ///
    /// `records` must be ordered newest-first; the trend split depends on
    /// that ordering. Empty input yields an empty map.
    pub fn analyze(
        records: &[AssessmentRecord],
    ) -> BTreeMap<CognitiveDimension, DimensionPattern> {
        let mut patterns = BTreeMap::new();
        if records.is_empty() {
            return patterns;
        }

        for dimension in CognitiveDimension::ALL {
            let values: Vec<f64> = records
                .iter()
                .map(|r| r.scores.get(dimension) as f64)
                .collect();

            patterns.insert(
                dimension,
                DimensionPattern {
                    average: mean(&values),
                    trend: Self::compute_trend(&values),
                    consistency: Self::compute_consistency(&values),
                },
            );
        }

        patterns
    }

    /// Trend over a newest-first value sequence.
    ///
    /// The head half of the slice is the chronologically later (recent)
    /// half; the tail is the earlier half. Improving means the recent mean
    /// exceeds the older mean by more than [`TREND_THRESHOLD`].
    fn compute_trend(values: &[f64]) -> Trend {
        if values.len() < MIN_RECORDS_FOR_TREND {
            return Trend::Stable;
        }

        let mid = values.len() / 2;
        let recent_mean = mean(&values[..mid]);
        let older_mean = mean(&values[mid..]);

        if recent_mean - older_mean > TREND_THRESHOLD {
            Trend::Improving
        } else if older_mean - recent_mean > TREND_THRESHOLD {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }

    /// 100 minus the population standard deviation, floored at 0.
    fn compute_consistency(values: &[f64]) -> f64 {
        let avg = mean(values);
        let variance =
            values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
        (100.0 - variance.sqrt()).max(0.0)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
