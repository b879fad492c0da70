//! Weighted multi-dimension scoring.
//!
//! Each analyzer produces a raw metric; [`normalize`] maps the count-based
//! ones onto 0-100 and [`aggregator`] combines all dimensions into the
//! final [`ScoreReport`].

pub mod aggregator;
pub mod normalize;
pub mod report;

pub use aggregator::{score_diagram, sort_issues, ScoreAggregator};
pub use normalize::{clamp_score, piecewise_linear};
pub use report::{
    ComplexityClass, DimensionScores, Grade, ScoreReport, SizeClass, ThresholdClassification,
};

use crate::config::ScoringConfig;
use crate::core::ProcessGraph;

/// Score with an explicit configuration.
pub fn score_diagram_with(graph: &ProcessGraph, config: &ScoringConfig) -> ScoreReport {
    ScoreAggregator::new(config).score(graph)
}
