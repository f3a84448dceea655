//! Query handlers grouped by concern.

pub mod insights;

pub use insights::{
    GetInsightHistoryHandler, GetInsightHistoryQuery, GetUserInsightsHandler,
    GetUserInsightsQuery,
};
