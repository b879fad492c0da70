//! The suggestion rule table. Each rule inspects one concern of the
//! report and yields zero or more suggestions.

use super::{score_impact, Priority, Suggestion};
use crate::config::DimensionWeights;
use crate::core::IssueCategory;
use crate::metrics::handover::HEAVY_HANDOVER;
use crate::metrics::modularity::MODULARITY_WARNING;
use crate::scoring::report::{SIZE_LARGE_MAX, SIZE_MEDIUM_MAX};
use crate::scoring::ScoreReport;

pub type Rule = fn(&ScoreReport, &DimensionWeights) -> Vec<Suggestion>;

/// Evaluation order; also the tie-break order after sorting.
pub const RULES: &[Rule] = &[
    size_rule,
    control_flow_rule,
    inclusive_gateway_rule,
    structuredness_rule,
    naming_rule,
    start_end_rule,
    handover_rule,
    modularity_rule,
];

pub const HIGH_WEIGHTED_CFC: u64 = 30;
pub const MODERATE_WEIGHTED_CFC: u64 = 15;
pub const SHALLOW_NESTING: usize = 2;
pub const INCLUSIVE_FAN_OUT: usize = 3;
pub const POOR_STRUCTUREDNESS: f64 = 50.0;
pub const POOR_NAMING: f64 = 70.0;
pub const FAIR_NAMING: f64 = 90.0;
/// Relabel actions listed per naming suggestion.
pub const MAX_RELABEL_ACTIONS: usize = 5;

fn suggestion(
    priority: Priority,
    category: IssueCategory,
    title: &str,
    recommendation: impl Into<String>,
    actions: Vec<String>,
    score_impact: f64,
) -> Suggestion {
    Suggestion {
        priority,
        category,
        title: title.to_string(),
        recommendation: recommendation.into(),
        actions,
        score_impact,
    }
}

pub fn size_rule(report: &ScoreReport, weights: &DimensionWeights) -> Vec<Suggestion> {
    let count = report.element_count;
    let priority = if count > SIZE_LARGE_MAX {
        Priority::Critical
    } else if count > SIZE_MEDIUM_MAX {
        Priority::High
    } else {
        return Vec::new();
    };

    vec![suggestion(
        priority,
        IssueCategory::Size,
        "Decompose process",
        format!(
            "The diagram has {} flow elements; models above {} are error-prone and hard to read",
            count, SIZE_MEDIUM_MAX
        ),
        vec![
            "Identify self-contained phases of the process".to_string(),
            "Move each phase into a collapsed sub-process or call activity".to_string(),
            "Keep the top-level diagram as an overview of the phases".to_string(),
        ],
        score_impact(report.dimensions.structural, weights.structural),
    )]
}

pub fn control_flow_rule(report: &ScoreReport, weights: &DimensionWeights) -> Vec<Suggestion> {
    let weighted = report.weighted_cfc;
    let nesting = report.control_flow.max_nesting_depth;
    let impact = score_impact(report.dimensions.control_flow, weights.control_flow);

    let found = if weighted >= HIGH_WEIGHTED_CFC && nesting <= SHALLOW_NESTING {
        suggestion(
            Priority::High,
            IssueCategory::ControlFlow,
            "Reduce decision points",
            format!(
                "Weighted control-flow complexity is {} with shallow nesting; the diagram has too many sibling decisions",
                weighted
            ),
            vec![
                "Merge gateways that test related conditions".to_string(),
                "Move rule-heavy decisions into a business rule task".to_string(),
            ],
            impact,
        )
    } else if weighted >= MODERATE_WEIGHTED_CFC && nesting > SHALLOW_NESTING {
        suggestion(
            Priority::High,
            IssueCategory::ControlFlow,
            "Flatten nested decisions",
            format!(
                "Weighted control-flow complexity is {} and decisions are nested {} levels deep",
                weighted, nesting
            ),
            vec![
                "Close each branch with a join before opening the next split".to_string(),
                "Extract inner decision blocks into sub-processes".to_string(),
            ],
            impact,
        )
    } else if weighted >= MODERATE_WEIGHTED_CFC {
        suggestion(
            Priority::Medium,
            IssueCategory::ControlFlow,
            "Simplify branching",
            format!("Weighted control-flow complexity is {}", weighted),
            vec!["Remove branches that lead to the same outcome".to_string()],
            impact,
        )
    } else {
        return Vec::new();
    };
    vec![found]
}

pub fn inclusive_gateway_rule(report: &ScoreReport, weights: &DimensionWeights) -> Vec<Suggestion> {
    let actions: Vec<String> = report
        .control_flow
        .gateways
        .iter()
        .filter(|g| g.cfc_type.is_exponential() && g.fan_out >= INCLUSIVE_FAN_OUT)
        .map(|g| {
            format!(
                "Replace {} gateway '{}' ({} paths, CFC {}) with exclusive or parallel gateways",
                g.cfc_type, g.node_id, g.fan_out, g.base_cfc
            )
        })
        .collect();
    if actions.is_empty() {
        return Vec::new();
    }

    vec![suggestion(
        Priority::High,
        IssueCategory::ControlFlow,
        "Replace inclusive gateways",
        "Inclusive and complex gateways allow every combination of outgoing paths",
        actions,
        score_impact(report.dimensions.control_flow, weights.control_flow),
    )]
}

pub fn structuredness_rule(report: &ScoreReport, weights: &DimensionWeights) -> Vec<Suggestion> {
    let structuredness = &report.structuredness;
    let impact = score_impact(report.dimensions.structuredness, weights.structuredness);
    let mut found = Vec::new();

    if !structuredness.unmatched_splits.is_empty() {
        let priority = if report.dimensions.structuredness < POOR_STRUCTUREDNESS {
            Priority::High
        } else {
            Priority::Medium
        };
        found.push(suggestion(
            priority,
            IssueCategory::Structuredness,
            "Close open branches",
            format!(
                "{} split gateway(s) never merge through a matching join",
                structuredness.unmatched_splits.len()
            ),
            structuredness
                .unmatched_splits
                .iter()
                .map(|g| format!("Add a {} join that merges the branches of '{}'", g.cfc_type, g.node_id))
                .collect(),
            impact,
        ));
    }

    if !structuredness.unmatched_joins.is_empty() {
        found.push(suggestion(
            Priority::Low,
            IssueCategory::Structuredness,
            "Remove dangling joins",
            format!(
                "{} join gateway(s) merge branches no split opened",
                structuredness.unmatched_joins.len()
            ),
            structuredness
                .unmatched_joins
                .iter()
                .map(|g| format!("Remove '{}' or pair it with a {} split", g.node_id, g.cfc_type))
                .collect(),
            impact,
        ));
    }
    found
}

pub fn naming_rule(report: &ScoreReport, weights: &DimensionWeights) -> Vec<Suggestion> {
    let score = report.dimensions.naming;
    let priority = if score < POOR_NAMING {
        Priority::High
    } else if score < FAIR_NAMING {
        Priority::Medium
    } else {
        return Vec::new();
    };

    let actions = report
        .naming
        .worst_labels(MAX_RELABEL_ACTIONS)
        .into_iter()
        .map(|label| match (&label.suggested_label, label.label.is_empty()) {
            (Some(better), _) => format!("Rename '{}' to '{}'", label.label, better),
            (None, true) => format!("Give activity '{}' a verb-object label", label.node_id),
            (None, false) => format!(
                "Rename '{}' using a verb-object label (e.g. 'Approve Invoice')",
                label.label
            ),
        })
        .collect();

    vec![suggestion(
        priority,
        IssueCategory::Naming,
        "Improve labels",
        format!(
            "Naming quality is {:.0}/100; activities read best as verb plus object",
            score
        ),
        actions,
        score_impact(score, weights.naming),
    )]
}

pub fn start_end_rule(report: &ScoreReport, weights: &DimensionWeights) -> Vec<Suggestion> {
    if report.dimensions.start_end >= 100.0 {
        return Vec::new();
    }
    let start_end = &report.start_end;
    vec![suggestion(
        Priority::Medium,
        IssueCategory::StartEnd,
        "Consolidate start/end events",
        format!(
            "The diagram has {} start and {} end event(s); aim for one start and at most two ends",
            start_end.start_count, start_end.end_count
        ),
        vec![
            "Merge alternative triggers behind a single start event".to_string(),
            "Route equivalent outcomes into a shared end event".to_string(),
        ],
        score_impact(report.dimensions.start_end, weights.start_end),
    )]
}

pub fn handover_rule(report: &ScoreReport, weights: &DimensionWeights) -> Vec<Suggestion> {
    let handover = &report.handover;
    match report.dimensions.handover {
        None if report.element_count > 0 => vec![suggestion(
            Priority::Low,
            IssueCategory::Handover,
            "Assign lanes",
            "No activity carries a role, so handovers between participants cannot be assessed",
            vec!["Place activities in lanes for the roles that perform them".to_string()],
            0.0,
        )],
        Some(dimension) if handover.normalized_score >= HEAVY_HANDOVER => vec![suggestion(
            Priority::Medium,
            IssueCategory::Handover,
            "Reduce handovers",
            format!(
                "Work changes hands {} times across {} role(s)",
                handover.handover_count,
                handover.roles_involved.len()
            ),
            vec![
                "Group consecutive steps of the same role".to_string(),
                "Let one role own each phase end to end".to_string(),
            ],
            score_impact(dimension, weights.handover),
        )],
        _ => Vec::new(),
    }
}

pub fn modularity_rule(report: &ScoreReport, weights: &DimensionWeights) -> Vec<Suggestion> {
    if report.dimensions.modularity >= MODULARITY_WARNING as f64 {
        return Vec::new();
    }
    let modularity = &report.modularity;
    vec![suggestion(
        Priority::Medium,
        IssueCategory::Modularity,
        "Extract sub-processes",
        format!(
            "{} activities with {} sub-process(es); {} are not covered by any module",
            modularity.activity_count, modularity.module_count, modularity.uncovered_activities
        ),
        vec!["Group related activities into sub-processes of up to ten steps".to_string()],
        score_impact(report.dimensions.modularity, weights.modularity),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Edge, ElementKind, Node, ProcessGraph};
    use crate::scoring::score_diagram;

    fn chain(kinds: &[(&str, ElementKind, &str)]) -> ProcessGraph {
        let nodes = kinds
            .iter()
            .map(|(id, kind, label)| Node::new(*id, *kind).with_label(*label))
            .collect();
        let edges = kinds
            .windows(2)
            .enumerate()
            .map(|(i, w)| Edge::sequence(format!("f{}", i), w[0].0, w[1].0))
            .collect();
        ProcessGraph::new(nodes, edges)
    }

    #[test]
    fn test_large_diagram_is_critical() {
        let mut kinds = vec![("s", ElementKind::StartEvent, "")];
        let ids: Vec<String> = (0..55).map(|i| format!("t{}", i)).collect();
        for id in &ids {
            kinds.push((id.as_str(), ElementKind::Task, "Check Order"));
        }
        kinds.push(("e", ElementKind::EndEvent, ""));
        let report = score_diagram(&chain(&kinds));

        let found = size_rule(&report, &DimensionWeights::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].priority, Priority::Critical);
        assert!(found[0].score_impact > 0.0);
    }

    #[test]
    fn test_inclusive_gateway_rule() {
        let graph = ProcessGraph::new(
            vec![
                Node::new("s", ElementKind::StartEvent),
                Node::new("or", ElementKind::InclusiveGateway),
                Node::new("a", ElementKind::Task).with_label("Ship Goods"),
                Node::new("b", ElementKind::Task).with_label("Bill Customer"),
                Node::new("c", ElementKind::Task).with_label("Notify Customer"),
            ],
            vec![
                Edge::sequence("f0", "s", "or"),
                Edge::sequence("f1", "or", "a"),
                Edge::sequence("f2", "or", "b"),
                Edge::sequence("f3", "or", "c"),
            ],
        );
        let report = score_diagram(&graph);
        let found = inclusive_gateway_rule(&report, &DimensionWeights::default());
        assert_eq!(found.len(), 1);
        assert!(found[0].actions[0].contains("'or'"));
        assert!(found[0].actions[0].contains("CFC 7"));
    }

    #[test]
    fn test_naming_rule_lists_relabels() {
        let report = score_diagram(&chain(&[
            ("s", ElementKind::StartEvent, ""),
            ("a", ElementKind::Task, "Processing"),
            ("b", ElementKind::Task, "Task 1"),
            ("c", ElementKind::Task, ""),
            ("e", ElementKind::EndEvent, ""),
        ]));
        let found = naming_rule(&report, &DimensionWeights::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].priority, Priority::High);
        assert_eq!(found[0].actions.len(), 3);
        assert!(found[0]
            .actions
            .iter()
            .any(|a| a == "Give activity 'c' a verb-object label"));
    }

    #[test]
    fn test_lanes_suggested_only_for_non_empty_diagrams() {
        let report = score_diagram(&chain(&[
            ("s", ElementKind::StartEvent, ""),
            ("a", ElementKind::Task, "Check Order"),
            ("e", ElementKind::EndEvent, ""),
        ]));
        let found = handover_rule(&report, &DimensionWeights::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Assign lanes");
        assert_eq!(found[0].score_impact, 0.0);

        let empty = score_diagram(&ProcessGraph::empty());
        assert!(handover_rule(&empty, &DimensionWeights::default()).is_empty());
    }
}
