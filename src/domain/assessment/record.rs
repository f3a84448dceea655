//! Assessment records and the fixed cognitive dimensions they measure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::AssessmentId;

/// The eight cognitive dimensions measured by every assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveDimension {
    Memory,
    Attention,
    Focus,
    ProblemSolving,
    Creativity,
    ProcessingSpeed,
    Flexibility,
    Reasoning,
}

impl CognitiveDimension {
    /// All dimensions in canonical order.
    pub const ALL: [CognitiveDimension; 8] = [
        CognitiveDimension::Memory,
        CognitiveDimension::Attention,
        CognitiveDimension::Focus,
        CognitiveDimension::ProblemSolving,
        CognitiveDimension::Creativity,
        CognitiveDimension::ProcessingSpeed,
        CognitiveDimension::Flexibility,
        CognitiveDimension::Reasoning,
    ];

    /// Returns the snake_case key used in serialized data.
    pub fn as_str(&self) -> &'static str {
        match self {
            CognitiveDimension::Memory => "memory",
            CognitiveDimension::Attention => "attention",
            CognitiveDimension::Focus => "focus",
            CognitiveDimension::ProblemSolving => "problem_solving",
            CognitiveDimension::Creativity => "creativity",
            CognitiveDimension::ProcessingSpeed => "processing_speed",
            CognitiveDimension::Flexibility => "flexibility",
            CognitiveDimension::Reasoning => "reasoning",
        }
    }

    /// Returns the human-readable label used in narrative text.
    pub fn label(&self) -> &'static str {
        match self {
            CognitiveDimension::Memory => "memory",
            CognitiveDimension::Attention => "attention",
            CognitiveDimension::Focus => "focus",
            CognitiveDimension::ProblemSolving => "problem solving",
            CognitiveDimension::Creativity => "creativity",
            CognitiveDimension::ProcessingSpeed => "processing speed",
            CognitiveDimension::Flexibility => "mental flexibility",
            CognitiveDimension::Reasoning => "reasoning",
        }
    }
}

impl fmt::Display for CognitiveDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw scores for all eight dimensions of a single assessment.
///
/// Values are intended to fall in 0-100 but the engine does not enforce
/// the range; scoring clamps its own output instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub memory: i64,
    pub attention: i64,
    pub focus: i64,
    pub problem_solving: i64,
    pub creativity: i64,
    pub processing_speed: i64,
    pub flexibility: i64,
    pub reasoning: i64,
}

impl DimensionScores {
    /// Creates scores with the same value for every dimension.
    pub fn uniform(value: i64) -> Self {
        Self {
            memory: value,
            attention: value,
            focus: value,
            problem_solving: value,
            creativity: value,
            processing_speed: value,
            flexibility: value,
            reasoning: value,
        }
    }

    /// Returns the raw value for one dimension.
    pub fn get(&self, dimension: CognitiveDimension) -> i64 {
        match dimension {
            CognitiveDimension::Memory => self.memory,
            CognitiveDimension::Attention => self.attention,
            CognitiveDimension::Focus => self.focus,
            CognitiveDimension::ProblemSolving => self.problem_solving,
            CognitiveDimension::Creativity => self.creativity,
            CognitiveDimension::ProcessingSpeed => self.processing_speed,
            CognitiveDimension::Flexibility => self.flexibility,
            CognitiveDimension::Reasoning => self.reasoning,
        }
    }

    /// Sets the raw value for one dimension.
    pub fn set(&mut self, dimension: CognitiveDimension, value: i64) {
        match dimension {
            CognitiveDimension::Memory => self.memory = value,
            CognitiveDimension::Attention => self.attention = value,
            CognitiveDimension::Focus => self.focus = value,
            CognitiveDimension::ProblemSolving => self.problem_solving = value,
            CognitiveDimension::Creativity => self.creativity = value,
            CognitiveDimension::ProcessingSpeed => self.processing_speed = value,
            CognitiveDimension::Flexibility => self.flexibility = value,
            CognitiveDimension::Reasoning => self.reasoning = value,
        }
    }
}

/// One completed assessment. Immutable once read; the caller supplies
/// records ordered newest-first by completion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub completed_at: DateTime<Utc>,
    pub scores: DimensionScores,
}

impl AssessmentRecord {
    pub fn new(id: AssessmentId, completed_at: DateTime<Utc>, scores: DimensionScores) -> Self {
        Self {
            id,
            completed_at,
            scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_dimensions_has_eight_entries() {
        assert_eq!(CognitiveDimension::ALL.len(), 8);
    }

    #[test]
    fn dimension_keys_are_unique() {
        for (i, a) in CognitiveDimension::ALL.iter().enumerate() {
            for b in CognitiveDimension::ALL.iter().skip(i + 1) {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn dimension_serializes_as_snake_case() {
        let json = serde_json::to_string(&CognitiveDimension::ProblemSolving).unwrap();
        assert_eq!(json, "\"problem_solving\"");
    }

    #[test]
    fn uniform_scores_apply_to_every_dimension() {
        let scores = DimensionScores::uniform(72);
        for dim in CognitiveDimension::ALL {
            assert_eq!(scores.get(dim), 72);
        }
    }

    #[test]
    fn set_updates_a_single_dimension() {
        let mut scores = DimensionScores::uniform(50);
        scores.set(CognitiveDimension::Creativity, 85);
        assert_eq!(scores.get(CognitiveDimension::Creativity), 85);
        assert_eq!(scores.get(CognitiveDimension::Memory), 50);
    }
}
