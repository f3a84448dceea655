//! Insight query handlers.
//!
//! `GetUserInsights` runs the full analysis pipeline; `GetInsightHistory`
//! reads back previously persisted results.

mod get_insight_history;
mod get_user_insights;

pub use get_insight_history::{GetInsightHistoryHandler, GetInsightHistoryQuery};
pub use get_user_insights::{GetUserInsightsHandler, GetUserInsightsQuery};
