//! Structural quality scoring for BPMN-style process diagrams.
//!
//! A read-only [`ProcessGraph`] snapshot goes through traversal utilities,
//! the metric analyzers and the score aggregator; the suggestion generator
//! turns the resulting [`ScoreReport`] into prioritized advice.

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod metrics;
pub mod scoring;
pub mod suggestions;
pub mod traversal;

// Re-export commonly used types
pub use crate::core::{
    CfcType, ConnectionKind, Edge, ElementKind, Error, Issue, IssueCategory, Node, ProcessGraph,
    Result, Severity,
};

pub use crate::config::{DimensionWeights, ScoreThresholds, ScoringConfig};

pub use crate::traversal::{compute_levels, compute_nesting_depths, NestingDepths};

pub use crate::metrics::{
    analyze_control_flow, analyze_handovers, analyze_modularity, analyze_naming,
    analyze_start_end, analyze_structuredness, assess_label,
};

pub use crate::scoring::{score_diagram, score_diagram_with, Grade, ScoreAggregator, ScoreReport};

pub use crate::suggestions::{generate_suggestions, Priority, Suggestion};

pub use crate::io::{load_graph, DiagramSnapshot};
