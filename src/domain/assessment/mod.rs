//! Assessment domain types: records, dimensions, and technique interactions.

mod interaction;
mod record;

pub use interaction::{filter_valid, Feedback, RawInteraction, TechniqueInteraction};
pub use record::{AssessmentRecord, CognitiveDimension, DimensionScores};
