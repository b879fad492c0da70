//! Responsibility handovers between roles along control flow.

use crate::core::{Issue, IssueCategory, Node, ProcessGraph, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Role assumed for nodes that carry none.
pub const DEFAULT_ROLE: &str = "default";

/// Cost of handing work to a role for the first time.
pub const NEW_ROLE_COST: f64 = 1.5;
/// Cost of handing work back to a role already involved.
pub const RETURNING_ROLE_COST: f64 = 1.0;

/// Raw total that normalizes to 0.
pub const NORMALIZATION_FLOOR: f64 = 1.5;
/// Width of the raw range mapped onto 0-10.
pub const NORMALIZATION_SPAN: f64 = 8.5;

/// Normalized score at or above which a Medium issue is raised.
pub const HEAVY_HANDOVER: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Handover {
    pub edge_id: String,
    pub from_role: String,
    pub to_role: String,
    pub new_role: bool,
    pub cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandoverReport {
    pub base_score: f64,
    /// 0-10
    pub normalized_score: f64,
    pub handover_count: usize,
    /// Distinct roles that received work, in order of first handover.
    pub roles_involved: Vec<String>,
    pub has_role_data: bool,
    pub handovers: Vec<Handover>,
    pub issues: Vec<Issue>,
}

fn role_of(node: &Node) -> &str {
    node.role
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_ROLE)
}

fn bears_role(node: &Node) -> bool {
    node.kind.is_flow_element()
}

pub fn analyze_handovers(graph: &ProcessGraph) -> HandoverReport {
    let mut report = HandoverReport {
        has_role_data: graph
            .nodes()
            .iter()
            .filter(|n| bears_role(n))
            .any(|n| role_of(n) != DEFAULT_ROLE),
        ..HandoverReport::default()
    };
    let mut seen: HashSet<&str> = HashSet::new();

    for edge in graph.edges() {
        if !edge.kind.is_sequence_flow() {
            continue;
        }
        let (Some(source), Some(target)) = (graph.node(&edge.source), graph.node(&edge.target))
        else {
            continue;
        };
        if !bears_role(source) || !bears_role(target) {
            continue;
        }

        let from_role = role_of(source);
        let to_role = role_of(target);
        if from_role == DEFAULT_ROLE && to_role == DEFAULT_ROLE {
            continue;
        }
        if from_role == to_role || to_role == DEFAULT_ROLE {
            continue;
        }

        let new_role = seen.insert(to_role);
        let cost = if new_role {
            report.roles_involved.push(to_role.to_string());
            NEW_ROLE_COST
        } else {
            RETURNING_ROLE_COST
        };
        report.base_score += cost;
        report.handovers.push(Handover {
            edge_id: edge.id.clone(),
            from_role: from_role.to_string(),
            to_role: to_role.to_string(),
            new_role,
            cost,
        });
    }

    report.handover_count = report.handovers.len();
    report.normalized_score = normalize_handover_score(report.base_score);

    if report.normalized_score >= HEAVY_HANDOVER {
        report.issues.push(Issue::new(
            Severity::Medium,
            IssueCategory::Handover,
            format!(
                "{} handovers across {} roles (handover complexity {:.1}/10)",
                report.handover_count,
                report.roles_involved.len(),
                report.normalized_score
            ),
        ));
    }

    log::debug!(
        "handover: {} handovers, raw {:.1}, normalized {:.2}, role data: {}",
        report.handover_count,
        report.base_score,
        report.normalized_score,
        report.has_role_data
    );
    report
}

/// Map a raw handover total onto 0-10: one first-time handover is 0, ten
/// raw points or more is 10.
pub fn normalize_handover_score(base_score: f64) -> f64 {
    if base_score > NORMALIZATION_FLOOR {
        (((base_score - NORMALIZATION_FLOOR) / NORMALIZATION_SPAN) * 10.0).clamp(0.0, 10.0)
    } else {
        0.0
    }
}
