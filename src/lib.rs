//! Cogniscope - Cognitive Assessment Insights Engine
//!
//! Turns a user's assessment history and technique feedback into ranked
//! strengths and growth areas plus a narrative summary. Persistence and
//! transport live behind ports; the analysis itself is pure apart from
//! one injectable random draw and one wall-clock read.

pub mod application;
pub mod domain;
pub mod ports;
