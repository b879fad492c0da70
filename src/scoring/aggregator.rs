//! Combines analyzer outputs into one weighted score.

use super::normalize::{clamp_score, piecewise_linear};
use super::report::{
    ComplexityClass, DimensionScores, Grade, ScoreReport, SizeClass, ThresholdClassification,
    SIZE_LARGE_MAX, SIZE_MEDIUM_MAX,
};
use crate::config::ScoringConfig;
use crate::core::{Issue, IssueCategory, ProcessGraph, Severity};
use crate::metrics::{
    analyze_control_flow, analyze_handovers, analyze_modularity, analyze_naming,
    analyze_start_end, analyze_structuredness, HandoverReport,
};
use crate::traversal::compute_nesting_depths;
use tracing::info_span;

/// Scores a diagram snapshot against a scoring configuration.
pub struct ScoreAggregator<'a> {
    config: &'a ScoringConfig,
}

impl<'a> ScoreAggregator<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Run every analyzer and assemble the report.
    pub fn score(&self, graph: &ProcessGraph) -> ScoreReport {
        let span = info_span!(
            "score_diagram",
            nodes = graph.nodes().len(),
            edges = graph.edges().len()
        );
        let _enter = span.enter();

        let depths = compute_nesting_depths(graph);
        let control_flow = analyze_control_flow(graph, &depths);
        let structuredness = analyze_structuredness(graph);
        let naming = analyze_naming(graph);
        let handover = analyze_handovers(graph);
        let start_end = analyze_start_end(graph);
        let modularity = analyze_modularity(graph);

        let element_count = graph.flow_element_count();
        let thresholds = &self.config.thresholds;
        let dimensions = DimensionScores {
            structural: piecewise_linear(element_count as f64, &thresholds.structural),
            control_flow: piecewise_linear(
                control_flow.weighted_cfc as f64,
                &thresholds.control_flow,
            ),
            structuredness: clamp_score(structuredness.score as f64),
            naming: clamp_score(naming.overall_score as f64),
            handover: handover_dimension(&handover),
            start_end: clamp_score(start_end.score as f64),
            modularity: clamp_score(modularity.score as f64),
        };

        let total_score = self.total(&dimensions);
        let grade = Grade::from_score(total_score);

        let mut issues = size_issues(element_count);
        issues.extend(control_flow.issues.iter().cloned());
        issues.extend(structuredness.issues.iter().cloned());
        issues.extend(naming.issues.iter().cloned());
        issues.extend(handover.issues.iter().cloned());
        issues.extend(start_end.issues.iter().cloned());
        issues.extend(modularity.issues.iter().cloned());
        sort_issues(&mut issues);

        log::debug!(
            "score {} ({}) from {} elements, weighted CFC {}, {} issues",
            total_score,
            grade,
            element_count,
            control_flow.weighted_cfc,
            issues.len()
        );

        ScoreReport {
            total_score,
            grade,
            classification: ThresholdClassification {
                size: SizeClass::from_element_count(element_count),
                control_flow: ComplexityClass::from_weighted_cfc(control_flow.weighted_cfc),
            },
            element_count,
            total_cfc: control_flow.total_cfc,
            weighted_cfc: control_flow.weighted_cfc,
            dimensions,
            control_flow,
            structuredness,
            naming,
            handover,
            start_end,
            modularity,
            issues,
        }
    }

    /// Weighted mean over the dimensions that have a value, rounded.
    ///
    /// An unknown handover dimension drops out and the remaining weights
    /// are rescaled, so role-less diagrams are neither rewarded nor punished.
    pub fn total(&self, dimensions: &DimensionScores) -> u32 {
        let (weighted, weight_sum) = self
            .config
            .weights
            .named()
            .iter()
            .zip(dimensions.named())
            .filter_map(|((_, weight), (_, score))| score.map(|s| (s * weight, *weight)))
            .fold((0.0, 0.0), |(acc, sum), (ws, w)| (acc + ws, sum + w));

        if weight_sum <= 0.0 {
            return 100;
        }
        clamp_score(weighted / weight_sum).round() as u32
    }
}

/// Handover dimension, `None` when no role was ever recorded.
pub fn handover_dimension(handover: &HandoverReport) -> Option<f64> {
    handover
        .has_role_data
        .then(|| clamp_score(100.0 - 10.0 * handover.normalized_score))
}

fn size_issues(element_count: usize) -> Vec<Issue> {
    if element_count > SIZE_LARGE_MAX {
        vec![Issue::new(
            Severity::High,
            IssueCategory::Size,
            format!(
                "{} flow elements; diagrams above {} should be decomposed into sub-processes",
                element_count, SIZE_LARGE_MAX
            ),
        )]
    } else if element_count > SIZE_MEDIUM_MAX {
        vec![Issue::new(
            Severity::Medium,
            IssueCategory::Size,
            format!(
                "{} flow elements; diagrams above {} get hard to read",
                element_count, SIZE_MEDIUM_MAX
            ),
        )]
    } else {
        Vec::new()
    }
}

/// Most severe first; analyzer order is kept within a severity.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by_key(|issue| issue.severity);
}

/// Score with the default configuration.
pub fn score_diagram(graph: &ProcessGraph) -> ScoreReport {
    let config = ScoringConfig::default();
    ScoreAggregator::new(&config).score(graph)
}
