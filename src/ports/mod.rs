//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters (persistence, transport)
//! live outside this crate and implement these traits.

mod assessment_reader;
mod insight_store;
mod interaction_reader;

pub use assessment_reader::{AssessmentReadError, AssessmentReader};
pub use insight_store::{
    InsightStore, InsightStoreError, NewInsight, SavedInsight, StoredInsightRow,
    DEFAULT_HISTORY_LIMIT,
};
pub use interaction_reader::{InteractionReadError, InteractionReader};
