//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Cogniscope domain.

mod errors;
mod ids;

pub use errors::ValidationError;
pub use ids::{AssessmentId, InsightId, TechniqueId, UserId};
