//! Split/join balance per gateway type.
//!
//! A split whose branches re-converge on an ordinary node (an implicit
//! join) has no join gateway to pair with and is counted as unmatched.
//! That is valid BPMN, but the scoring treats it as a structural defect on
//! purpose; changing it would shift every score.

use crate::core::{CfcType, Issue, IssueCategory, ProcessGraph, Severity};
use crate::traversal::{is_join, is_split};
use serde::{Deserialize, Serialize};

/// Flat deduction when aggregate splits and joins disagree.
pub const MISMATCH_PENALTY: u32 = 10;

/// Gateway families that are balanced against each other. COMPLEX
/// gateways are folded into OR.
pub const BALANCED_TYPES: [CfcType; 3] = [CfcType::Xor, CfcType::And, CfcType::Or];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedGateway {
    pub node_id: String,
    pub cfc_type: CfcType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeBalance {
    pub splits: usize,
    pub joins: usize,
    pub matched: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructurednessReport {
    /// 0-100
    pub score: u32,
    pub total_splits: usize,
    pub total_joins: usize,
    pub matched_pairs: usize,
    pub xor: TypeBalance,
    pub and: TypeBalance,
    pub or: TypeBalance,
    pub unmatched_splits: Vec<UnmatchedGateway>,
    pub unmatched_joins: Vec<UnmatchedGateway>,
    pub issues: Vec<Issue>,
}

impl Default for StructurednessReport {
    fn default() -> Self {
        Self {
            score: 100,
            total_splits: 0,
            total_joins: 0,
            matched_pairs: 0,
            xor: TypeBalance::default(),
            and: TypeBalance::default(),
            or: TypeBalance::default(),
            unmatched_splits: Vec::new(),
            unmatched_joins: Vec::new(),
            issues: Vec::new(),
        }
    }
}

fn bucket(cfc_type: CfcType) -> CfcType {
    match cfc_type {
        CfcType::Complex => CfcType::Or,
        other => other,
    }
}

pub fn analyze_structuredness(graph: &ProcessGraph) -> StructurednessReport {
    let mut report = StructurednessReport::default();

    for cfc_type in BALANCED_TYPES {
        let mut splits: Vec<&str> = Vec::new();
        let mut joins: Vec<&str> = Vec::new();

        for node in graph.gateways() {
            let Some(profile) = node.kind.gateway_profile() else {
                continue;
            };
            if bucket(profile.cfc_type) != cfc_type {
                continue;
            }
            if is_split(graph, &node.id) {
                splits.push(&node.id);
            }
            if is_join(graph, &node.id) {
                joins.push(&node.id);
            }
        }

        let matched = splits.len().min(joins.len());
        let balance = TypeBalance {
            splits: splits.len(),
            joins: joins.len(),
            matched,
        };

        // Surplus entries are the ones furthest down the diagram order.
        for id in splits.iter().skip(matched) {
            report.unmatched_splits.push(UnmatchedGateway {
                node_id: id.to_string(),
                cfc_type,
            });
            report.issues.push(
                Issue::new(
                    Severity::Medium,
                    IssueCategory::Structuredness,
                    format!("Unmatched {} split '{}' has no corresponding join", cfc_type, id),
                )
                .at(*id),
            );
        }
        for id in joins.iter().skip(matched) {
            report.unmatched_joins.push(UnmatchedGateway {
                node_id: id.to_string(),
                cfc_type,
            });
            report.issues.push(
                Issue::new(
                    Severity::Low,
                    IssueCategory::Structuredness,
                    format!("Unmatched {} join '{}' has no corresponding split", cfc_type, id),
                )
                .at(*id),
            );
        }

        report.total_splits += balance.splits;
        report.total_joins += balance.joins;
        report.matched_pairs += balance.matched;
        match cfc_type {
            CfcType::Xor => report.xor = balance,
            CfcType::And => report.and = balance,
            _ => report.or = balance,
        }
    }

    report.score = structuredness_score(
        report.matched_pairs,
        report.total_splits,
        report.total_joins,
    );

    log::debug!(
        "structuredness: {} splits, {} joins, {} matched, score {}",
        report.total_splits,
        report.total_joins,
        report.matched_pairs,
        report.score
    );
    report
}

/// Matched-pair ratio as a percentage, minus the mismatch penalty.
pub fn structuredness_score(matched_pairs: usize, total_splits: usize, total_joins: usize) -> u32 {
    let base = if total_splits > 0 {
        (100.0 * matched_pairs as f64 / total_splits as f64).round() as u32
    } else {
        100
    };
    if total_splits != total_joins {
        base.saturating_sub(MISMATCH_PENALTY)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Edge, ElementKind, Node};

    #[test]
    fn test_balanced_xor_block() {
        let graph = ProcessGraph::new(
            vec![
                Node::new("s", ElementKind::StartEvent),
                Node::new("split", ElementKind::ExclusiveGateway),
                Node::new("a", ElementKind::Task),
                Node::new("b", ElementKind::Task),
                Node::new("c", ElementKind::Task),
                Node::new("join", ElementKind::ExclusiveGateway),
            ],
            vec![
                Edge::sequence("f0", "s", "split"),
                Edge::sequence("f1", "split", "a"),
                Edge::sequence("f2", "split", "b"),
                Edge::sequence("f3", "split", "c"),
                Edge::sequence("f4", "a", "join"),
                Edge::sequence("f5", "b", "join"),
                Edge::sequence("f6", "c", "join"),
            ],
        );
        let report = analyze_structuredness(&graph);
        assert_eq!(report.score, 100);
        assert_eq!(report.xor.matched, 1);
        assert!(report.unmatched_splits.is_empty());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_complex_pairs_with_inclusive() {
        let graph = ProcessGraph::new(
            vec![
                Node::new("split", ElementKind::ComplexGateway),
                Node::new("a", ElementKind::Task),
                Node::new("b", ElementKind::Task),
                Node::new("join", ElementKind::InclusiveGateway),
            ],
            vec![
                Edge::sequence("f1", "split", "a"),
                Edge::sequence("f2", "split", "b"),
                Edge::sequence("f3", "a", "join"),
                Edge::sequence("f4", "b", "join"),
            ],
        );
        let report = analyze_structuredness(&graph);
        assert_eq!(report.or.matched, 1);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_mismatched_types_are_not_paired() {
        let graph = ProcessGraph::new(
            vec![
                Node::new("split", ElementKind::ParallelGateway),
                Node::new("a", ElementKind::Task),
                Node::new("b", ElementKind::Task),
                Node::new("join", ElementKind::ExclusiveGateway),
            ],
            vec![
                Edge::sequence("f1", "split", "a"),
                Edge::sequence("f2", "split", "b"),
                Edge::sequence("f3", "a", "join"),
                Edge::sequence("f4", "b", "join"),
            ],
        );
        let report = analyze_structuredness(&graph);
        // totals agree (1 vs 1) so no flat penalty, but nothing pairs up
        assert_eq!(report.score, 0);
        assert_eq!(report.unmatched_splits[0].cfc_type, CfcType::And);
        assert_eq!(report.unmatched_joins[0].node_id, "join");
    }

    #[test]
    fn test_score_formula() {
        assert_eq!(structuredness_score(0, 0, 0), 100);
        assert_eq!(structuredness_score(0, 0, 2), 90);
        assert_eq!(structuredness_score(2, 3, 2), 57);
        assert_eq!(structuredness_score(0, 1, 0), 0);
    }
}
