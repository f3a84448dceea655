//! Narrative composition - Builds the human-readable summary sentence.
//!
//! The template draw is the engine's only randomness; the RNG is injected
//! so callers (and tests) control it.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use std::collections::BTreeMap;

use crate::domain::assessment::CognitiveDimension;
use crate::domain::foundation::TechniqueId;
use crate::domain::insights::pattern::{DimensionPattern, Trend};
use crate::domain::insights::selection::SelectedInsights;
use crate::domain::insights::techniques::TechniqueStats;

/// Shown when the user has no completed assessments yet.
pub const EMPTY_HISTORY_MESSAGE: &str =
    "Complete an assessment to unlock personalized insights about your cognitive strengths and growth areas.";

/// Shown when the assessment fetch itself fails.
pub const FALLBACK_MESSAGE: &str =
    "We're having trouble analyzing your data. Please try again later.";

const TEMPLATE_COUNT: u32 = 3;

/// Coarse time-of-day bucket derived from the current wall-clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Buckets an hour (0-23): morning before 12, afternoon before 18,
    /// evening otherwise.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeOfDay::Morning
        } else if hour < 18 {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        }
    }
}

/// Context values the composer needs beyond the analysis outputs.
///
/// `time_of_day` is carried for parity with the legacy behavior but is
/// not currently interpolated into any template.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeContext {
    pub latest_completed_at: DateTime<Utc>,
    pub time_of_day: TimeOfDay,
    pub assessment_count: usize,
}

/// Composer that fills one of three phrasing templates.
pub struct NarrativeComposer;

impl NarrativeComposer {
    /// Builds the summary sentence, drawing one of three templates
    /// uniformly from `rng`.
    pub fn compose<R: Rng>(
        selected: &SelectedInsights,
        patterns: &BTreeMap<CognitiveDimension, DimensionPattern>,
        technique_stats: &BTreeMap<TechniqueId, TechniqueStats>,
        context: &NarrativeContext,
        rng: &mut R,
    ) -> String {
        let strengths_phrase = Self::strengths_phrase(selected);
        let weaknesses_phrase = Self::weaknesses_phrase(selected);
        let trend_sentence = Self::trend_sentence(patterns);
        let technique_sentence = Self::technique_sentence(technique_stats);

        let count = context.assessment_count;
        let noun = if count == 1 { "assessment" } else { "assessments" };
        let date = format_date(&context.latest_completed_at);

        match rng.random_range(0..TEMPLATE_COUNT) {
            0 => format!(
                "Based on your {count} {noun} (most recent on {date}), {strengths_phrase}, while {weaknesses_phrase}.{trend_sentence}{technique_sentence}"
            ),
            1 => format!(
                "Across {count} {noun}, with the latest completed on {date}, {strengths_phrase} and {weaknesses_phrase}.{trend_sentence}{technique_sentence}"
            ),
            _ => format!(
                "After {count} {noun} (last one on {date}), {strengths_phrase}; meanwhile, {weaknesses_phrase}.{trend_sentence}{technique_sentence}"
            ),
        }
    }

    fn strengths_phrase(selected: &SelectedInsights) -> String {
        if selected.strengths.is_empty() {
            return "your strengths profile is still taking shape".to_string();
        }
        let names: Vec<&str> = selected.strengths.iter().map(|s| s.area.as_str()).collect();
        format!("your key strengths are {}", join_natural(&names))
    }

    fn weaknesses_phrase(selected: &SelectedInsights) -> String {
        if selected.weaknesses.is_empty() {
            return "no pressing growth areas stand out right now".to_string();
        }
        let names: Vec<&str> = selected.weaknesses.iter().map(|w| w.area.as_str()).collect();
        format!("your biggest growth opportunities are {}", join_natural(&names))
    }

    /// A sentence for dimensions trending upward, or empty when none are.
    fn trend_sentence(patterns: &BTreeMap<CognitiveDimension, DimensionPattern>) -> String {
        let improving: Vec<&str> = patterns
            .iter()
            .filter(|(_, p)| p.trend == Trend::Improving)
            .map(|(d, _)| d.label())
            .collect();

        if improving.is_empty() {
            return String::new();
        }
        let verb = if improving.len() == 1 { "is" } else { "are" };
        format!(
            " Your {} {} showing steady improvement.",
            join_natural(&improving),
            verb
        )
    }

    /// A sentence counting techniques with net-positive feedback, or
    /// empty when there are none.
    fn technique_sentence(stats: &BTreeMap<TechniqueId, TechniqueStats>) -> String {
        let working = stats.values().filter(|s| s.is_working()).count();
        if working == 0 {
            return String::new();
        }
        let verb = if working == 1 { "has" } else { "have" };
        format!(
            " {working} of the techniques you've tried {verb} been making a real difference."
        )
    }
}

/// Day/month/year, no zero padding.
fn format_date(date: &DateTime<Utc>) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// "a", "a and b", "a, b and c".
fn join_natural(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}
