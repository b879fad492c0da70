//! Prioritized improvement suggestions derived from a [`ScoreReport`].
//!
//! Suggestions are not a mirror of the issue list: rules look at
//! combinations of metrics (e.g. high CFC with shallow nesting versus
//! moderate CFC with deep nesting) and say what to change.

pub mod rules;

use crate::config::DimensionWeights;
use crate::core::IssueCategory;
use crate::scoring::ScoreReport;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub priority: Priority,
    pub category: IssueCategory,
    pub title: String,
    pub recommendation: String,
    pub actions: Vec<String>,
    /// Points the total score could gain if the suggestion is followed.
    pub score_impact: f64,
}

/// Run the rule table over a report, most urgent first.
///
/// Impacts use the weights the total was computed with, so a diagram
/// without role data sees the other dimensions scaled up.
pub fn generate_suggestions(report: &ScoreReport, weights: &DimensionWeights) -> Vec<Suggestion> {
    let effective = match report.dimensions.handover {
        Some(_) => weights.clone(),
        None => weights.without_handover(),
    };
    let mut suggestions: Vec<Suggestion> = rules::RULES
        .iter()
        .flat_map(|rule| rule(report, &effective))
        .collect();
    sort_suggestions(&mut suggestions);
    log::debug!("generated {} suggestions", suggestions.len());
    suggestions
}

/// Priority first, then larger impact; ties keep rule order.
pub fn sort_suggestions(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.score_impact.total_cmp(&a.score_impact))
    });
}

/// Estimated total-score gain from bringing one dimension to 100.
pub fn score_impact(dimension_score: f64, weight: f64) -> f64 {
    let raw = (100.0 - dimension_score).max(0.0) * weight;
    (raw * 10.0).round() / 10.0
}
