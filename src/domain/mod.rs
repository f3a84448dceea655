//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assessment` - Assessment records, cognitive dimensions, interactions
//! - `insights` - Pure analysis services (patterns, scoring, selection, narrative)

pub mod assessment;
pub mod foundation;
pub mod insights;
