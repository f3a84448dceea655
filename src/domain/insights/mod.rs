//! Insights domain - Pure services that turn assessment history into
//! ranked strengths, growth areas, and a narrative summary.
//!
//! Pipeline order: [`PatternAnalyzer`] and [`TechniqueAnalyzer`] run
//! independently, [`PriorityScorer`] consumes the patterns,
//! [`InsightSelector`] ranks the scored dimensions, and
//! [`NarrativeComposer`] writes the summary sentence.

mod narrative;
mod pattern;
mod result;
mod scoring;
mod selection;
mod techniques;

pub use narrative::{
    NarrativeComposer, NarrativeContext, TimeOfDay, EMPTY_HISTORY_MESSAGE, FALLBACK_MESSAGE,
};
pub use pattern::{DimensionPattern, PatternAnalyzer, Trend, MIN_RECORDS_FOR_TREND};
pub use result::UserInsightsResult;
pub use scoring::{PriorityScorer, ScoredDimension, STRENGTH_THRESHOLD};
pub use selection::{InsightItem, InsightSelector, SelectedInsights, MAX_INSIGHTS};
pub use techniques::{TechniqueAnalyzer, TechniqueStats};
