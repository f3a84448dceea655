//! Insight selection - Ranks scored dimensions into strengths and
//! growth areas, each capped at three, with canned descriptions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::assessment::CognitiveDimension;
use crate::domain::insights::pattern::Trend;
use crate::domain::insights::scoring::ScoredDimension;

/// Maximum number of strengths and of weaknesses surfaced to the user.
pub const MAX_INSIGHTS: usize = 3;

/// Two scores within this distance are considered tied for strength
/// ranking and broken by consistency.
const TIE_BREAK_MARGIN: f64 = 5.0;

/// Bonus added to an improving weakness's actionability score, pushing
/// it later in the list: weaknesses that are not yet improving are shown
/// first.
const IMPROVING_ACTIONABILITY_BONUS: f64 = 10.0;

/// A surfaced insight: an area name with its canned description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightItem {
    pub area: String,
    pub description: String,
}

/// Canned description pair for one dimension.
struct DimensionDescriptions {
    strength: &'static str,
    growth: &'static str,
}

static DESCRIPTIONS: Lazy<BTreeMap<CognitiveDimension, DimensionDescriptions>> =
    Lazy::new(|| {
        use CognitiveDimension::*;
        BTreeMap::from([
            (Memory, DimensionDescriptions {
                strength: "You retain and recall information reliably, even under pressure.",
                growth: "Short daily recall exercises can noticeably sharpen your memory.",
            }),
            (Attention, DimensionDescriptions {
                strength: "You notice details others miss and stay alert through long tasks.",
                growth: "Practicing single-tasking in short blocks will strengthen your attention.",
            }),
            (Focus, DimensionDescriptions {
                strength: "You sustain deep concentration and resist distraction well.",
                growth: "Reducing context switching will help you hold focus for longer stretches.",
            }),
            (ProblemSolving, DimensionDescriptions {
                strength: "You break complex problems into workable steps with ease.",
                growth: "Working through puzzles of gradually rising difficulty will build your problem solving.",
            }),
            (Creativity, DimensionDescriptions {
                strength: "You generate original ideas and connect concepts in unexpected ways.",
                growth: "Open-ended brainstorming without self-editing will unlock more creative range.",
            }),
            (ProcessingSpeed, DimensionDescriptions {
                strength: "You absorb new information quickly and react fast when it counts.",
                growth: "Timed drills at a comfortable pace will gradually raise your processing speed.",
            }),
            (Flexibility, DimensionDescriptions {
                strength: "You switch between approaches smoothly when circumstances change.",
                growth: "Deliberately trying an unfamiliar approach now and then will grow your mental flexibility.",
            }),
            (Reasoning, DimensionDescriptions {
                strength: "You draw sound conclusions and spot weak arguments quickly.",
                growth: "Explaining your reasoning out loud, step by step, will tighten your logic.",
            }),
        ])
    });

/// Selected strengths and weaknesses, ready for narrative composition.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedInsights {
    pub strengths: Vec<InsightItem>,
    pub weaknesses: Vec<InsightItem>,
}

/// Selector that partitions, ranks, and truncates scored dimensions.
pub struct InsightSelector;

impl InsightSelector {
    /// Picks up to three strengths and up to three weaknesses.
    ///
    /// Classification comes from the scorer's hard threshold, so no
    /// dimension can land in both lists.
    pub fn select(scored: &[ScoredDimension]) -> SelectedInsights {
        let (strengths, weaknesses): (Vec<_>, Vec<_>) =
            scored.iter().partition(|s| s.is_strength);

        SelectedInsights {
            strengths: Self::rank_strengths(strengths),
            weaknesses: Self::rank_weaknesses(weaknesses),
        }
    }

    /// Strongest first; near-ties (within 5 points) go to the more
    /// consistent dimension.
    fn rank_strengths(mut strengths: Vec<&ScoredDimension>) -> Vec<InsightItem> {
        strengths.sort_by(|a, b| {
            if (a.priority_score - b.priority_score).abs() <= TIE_BREAK_MARGIN {
                consistency_of(b)
                    .partial_cmp(&consistency_of(a))
                    .unwrap_or(Ordering::Equal)
            } else {
                b.priority_score
                    .partial_cmp(&a.priority_score)
                    .unwrap_or(Ordering::Equal)
            }
        });

        strengths
            .into_iter()
            .take(MAX_INSIGHTS)
            .map(|s| strength_item(s.dimension))
            .collect()
    }

    /// Most actionable first: lowest score wins, but improving dimensions
    /// are nudged later since they are already on their way up.
    fn rank_weaknesses(mut weaknesses: Vec<&ScoredDimension>) -> Vec<InsightItem> {
        weaknesses.sort_by(|a, b| {
            actionability_of(a)
                .partial_cmp(&actionability_of(b))
                .unwrap_or(Ordering::Equal)
        });

        weaknesses
            .into_iter()
            .take(MAX_INSIGHTS)
            .map(|s| growth_item(s.dimension))
            .collect()
    }
}

fn consistency_of(scored: &ScoredDimension) -> f64 {
    scored.pattern.as_ref().map(|p| p.consistency).unwrap_or(0.0)
}

fn actionability_of(scored: &ScoredDimension) -> f64 {
    let bonus = match scored.pattern.as_ref().map(|p| p.trend) {
        Some(Trend::Improving) => IMPROVING_ACTIONABILITY_BONUS,
        _ => 0.0,
    };
    scored.priority_score + bonus
}

fn strength_item(dimension: CognitiveDimension) -> InsightItem {
    InsightItem {
        area: dimension.label().to_string(),
        description: DESCRIPTIONS[&dimension].strength.to_string(),
    }
}

fn growth_item(dimension: CognitiveDimension) -> InsightItem {
    InsightItem {
        area: dimension.label().to_string(),
        description: DESCRIPTIONS[&dimension].growth.to_string(),
    }
}
