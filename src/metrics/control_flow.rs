//! Control-flow complexity (CFC) per splitting gateway.
//!
//! XOR counts one state per branch, AND a single state regardless of
//! fan-out, OR/COMPLEX every non-empty subset of branches. Each gateway's
//! contribution is then multiplied by its nesting depth.

use crate::core::{CfcType, Issue, IssueCategory, ProcessGraph, Severity};
use crate::traversal::{nesting::FALLBACK_DEPTH, outgoing, NestingDepths};
use serde::{Deserialize, Serialize};

/// Exponential gateways at or above this fan-out are reported.
pub const EXPONENTIAL_FAN_OUT_WARNING: usize = 3;

/// Splits nested at least this deep are reported.
pub const DEEP_NESTING_WARNING: usize = 3;

/// Contribution of a single splitting gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayCfc {
    pub node_id: String,
    pub cfc_type: CfcType,
    pub fan_out: usize,
    pub base_cfc: u64,
    pub nesting_depth: usize,
    pub weighted_cfc: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlFlowReport {
    pub total_cfc: u64,
    pub weighted_cfc: u64,
    pub cfc_xor: u64,
    /// OR and COMPLEX gateways together.
    pub cfc_or: u64,
    pub cfc_and: u64,
    /// Deepest nesting among splitting gateways, 0 when there are none.
    pub max_nesting_depth: usize,
    pub gateways: Vec<GatewayCfc>,
    pub issues: Vec<Issue>,
}

impl ControlFlowReport {
    pub fn has_exponential_gateway(&self) -> bool {
        self.gateways
            .iter()
            .any(|g| g.cfc_type.is_exponential() && g.fan_out >= EXPONENTIAL_FAN_OUT_WARNING)
    }
}

/// Base CFC for one gateway. Fan-out of one or less is not a decision.
pub fn base_cfc(cfc_type: CfcType, fan_out: usize) -> u64 {
    if fan_out <= 1 {
        0
    } else {
        cfc_type.cfc(fan_out)
    }
}

pub fn analyze_control_flow(graph: &ProcessGraph, depths: &NestingDepths) -> ControlFlowReport {
    let mut report = ControlFlowReport::default();

    for node in graph.gateways() {
        let Some(profile) = node.kind.gateway_profile() else {
            continue;
        };
        let fan_out = outgoing(graph, &node.id).len();
        if fan_out <= 1 {
            continue;
        }

        let cfc_type = profile.cfc_type;
        let base = base_cfc(cfc_type, fan_out);
        let depth = depths.get(&node.id).copied().unwrap_or(FALLBACK_DEPTH);
        let weighted = base.saturating_mul(depth as u64);

        report.total_cfc = report.total_cfc.saturating_add(base);
        report.weighted_cfc = report.weighted_cfc.saturating_add(weighted);
        match cfc_type {
            CfcType::Xor => report.cfc_xor = report.cfc_xor.saturating_add(base),
            CfcType::And => report.cfc_and = report.cfc_and.saturating_add(base),
            CfcType::Or | CfcType::Complex => report.cfc_or = report.cfc_or.saturating_add(base),
        }
        report.max_nesting_depth = report.max_nesting_depth.max(depth);

        if cfc_type.is_exponential() && fan_out >= EXPONENTIAL_FAN_OUT_WARNING {
            report.issues.push(
                Issue::new(
                    Severity::High,
                    IssueCategory::ControlFlow,
                    format!(
                        "{} gateway '{}' has {} outgoing paths (CFC {}); complexity grows exponentially with each branch",
                        cfc_type,
                        display_name(&node.label, &node.id),
                        fan_out,
                        base
                    ),
                )
                .at(&node.id),
            );
        }
        if depth >= DEEP_NESTING_WARNING {
            report.issues.push(
                Issue::new(
                    Severity::Medium,
                    IssueCategory::ControlFlow,
                    format!(
                        "Gateway '{}' is nested {} levels deep",
                        display_name(&node.label, &node.id),
                        depth
                    ),
                )
                .at(&node.id),
            );
        }

        report.gateways.push(GatewayCfc {
            node_id: node.id.clone(),
            cfc_type,
            fan_out,
            base_cfc: base,
            nesting_depth: depth,
            weighted_cfc: weighted,
        });
    }

    log::debug!(
        "control flow: total CFC {}, weighted {}, {} splitting gateways",
        report.total_cfc,
        report.weighted_cfc,
        report.gateways.len()
    );
    report
}

pub(crate) fn display_name<'a>(label: &'a str, id: &'a str) -> &'a str {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        id
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Edge, ElementKind, Node};
    use crate::traversal::compute_nesting_depths;

    fn fan(kind: ElementKind, fan_out: usize) -> ProcessGraph {
        let mut nodes = vec![
            Node::new("s", ElementKind::StartEvent),
            Node::new("g", kind),
        ];
        let mut edges = vec![Edge::sequence("in", "s", "g")];
        for i in 0..fan_out {
            nodes.push(Node::new(format!("t{i}"), ElementKind::Task));
            edges.push(Edge::sequence(format!("out{i}"), "g", format!("t{i}")));
        }
        ProcessGraph::new(nodes, edges)
    }

    fn analyze(graph: &ProcessGraph) -> ControlFlowReport {
        analyze_control_flow(graph, &compute_nesting_depths(graph))
    }

    #[test]
    fn test_xor_is_linear() {
        let report = analyze(&fan(ElementKind::ExclusiveGateway, 5));
        assert_eq!(report.total_cfc, 5);
        assert_eq!(report.cfc_xor, 5);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_or_reports_exponential_growth() {
        let report = analyze(&fan(ElementKind::InclusiveGateway, 3));
        assert_eq!(report.total_cfc, 7);
        assert_eq!(report.cfc_or, 7);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].severity, Severity::High);
        assert_eq!(report.issues[0].node_id.as_deref(), Some("g"));
    }

    #[test]
    fn test_single_path_gateway_contributes_nothing() {
        let report = analyze(&fan(ElementKind::ComplexGateway, 1));
        assert_eq!(report.total_cfc, 0);
        assert!(report.gateways.is_empty());
    }

    #[test]
    fn test_weighting_uses_nesting_depth() {
        let mut depths = NestingDepths::new();
        depths.insert("g".to_string(), 3);
        let report = analyze_control_flow(&fan(ElementKind::ExclusiveGateway, 2), &depths);
        assert_eq!(report.total_cfc, 2);
        assert_eq!(report.weighted_cfc, 6);
        assert_eq!(report.max_nesting_depth, 3);
        assert!(report
            .issues
            .iter()
            .any(|i| i.severity == Severity::Medium && i.message.contains("nested 3")));
    }

    #[test]
    fn test_base_cfc_edge_cases() {
        assert_eq!(base_cfc(CfcType::Or, 0), 0);
        assert_eq!(base_cfc(CfcType::Xor, 1), 0);
        assert_eq!(base_cfc(CfcType::And, 2), 1);
    }
}
