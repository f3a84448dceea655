//! Technique interaction records and validity filtering.
//!
//! Interaction rows come from denormalized storage and may be missing
//! fields or carry unknown feedback values. Malformed rows are dropped
//! before aggregation rather than treated as errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::TechniqueId;

/// User feedback on a suggested technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Helpful,
    NotHelpful,
}

impl Feedback {
    /// Parses a stored feedback string; unknown values are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "helpful" => Some(Feedback::Helpful),
            "not_helpful" => Some(Feedback::NotHelpful),
            _ => None,
        }
    }
}

/// A validated technique interaction. `feedback` is `None` when the user
/// tried the technique without rating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueInteraction {
    pub technique_id: TechniqueId,
    pub technique_title: String,
    pub feedback: Option<Feedback>,
    pub occurred_at: DateTime<Utc>,
}

/// An interaction row as stored, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInteraction {
    pub technique_id: Option<String>,
    pub technique_title: Option<String>,
    pub feedback: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl RawInteraction {
    /// Validates this row into a [`TechniqueInteraction`].
    ///
    /// Returns `None` when the technique id or title is missing/empty, or
    /// when a feedback value is present but not one of the known states.
    pub fn validate(self) -> Option<TechniqueInteraction> {
        let technique_id = TechniqueId::new(self.technique_id?).ok()?;
        let technique_title = self.technique_title.filter(|t| !t.is_empty())?;
        let feedback = match self.feedback {
            Some(raw) => Some(Feedback::parse(&raw)?),
            None => None,
        };
        Some(TechniqueInteraction {
            technique_id,
            technique_title,
            feedback,
            occurred_at: self.occurred_at,
        })
    }
}

/// Drops malformed rows, keeping the supplied order.
pub fn filter_valid(rows: Vec<RawInteraction>) -> Vec<TechniqueInteraction> {
    rows.into_iter().filter_map(RawInteraction::validate).collect()
}
