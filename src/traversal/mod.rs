//! Graph traversal utilities shared by every analyzer.
//!
//! Only sequence-like connections (sequence, conditional, default) carry
//! control flow; message and association edges are invisible here. Edges
//! whose far endpoint does not exist are skipped rather than reported.

pub mod levels;
pub mod nesting;

pub use levels::compute_levels;
pub use nesting::{compute_nesting_depths, NestingDepths};

use crate::core::{Edge, ProcessGraph};

/// Outgoing control-flow edges of `node_id`, in edge-list order.
pub fn outgoing<'g>(graph: &'g ProcessGraph, node_id: &str) -> Vec<&'g Edge> {
    graph
        .edges()
        .iter()
        .filter(|e| e.kind.is_sequence_flow() && e.source == node_id && graph.contains(&e.target))
        .collect()
}

/// Incoming control-flow edges of `node_id`, in edge-list order.
pub fn incoming<'g>(graph: &'g ProcessGraph, node_id: &str) -> Vec<&'g Edge> {
    graph
        .edges()
        .iter()
        .filter(|e| e.kind.is_sequence_flow() && e.target == node_id && graph.contains(&e.source))
        .collect()
}

/// A gateway with more than one outgoing path.
pub fn is_split(graph: &ProcessGraph, node_id: &str) -> bool {
    is_gateway(graph, node_id) && outgoing(graph, node_id).len() > 1
}

/// A gateway with more than one incoming path.
pub fn is_join(graph: &ProcessGraph, node_id: &str) -> bool {
    is_gateway(graph, node_id) && incoming(graph, node_id).len() > 1
}

fn is_gateway(graph: &ProcessGraph, node_id: &str) -> bool {
    graph.node(node_id).is_some_and(|n| n.kind.is_gateway())
}

/// How a gateway behaves in this particular diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayRole {
    Split,
    Join,
    /// Both split and join at once.
    Mixed,
    /// One in, one out (or dangling).
    Passthrough,
}

pub fn gateway_role(graph: &ProcessGraph, node_id: &str) -> Option<GatewayRole> {
    if !is_gateway(graph, node_id) {
        return None;
    }
    let role = match (is_split(graph, node_id), is_join(graph, node_id)) {
        (true, false) => GatewayRole::Split,
        (false, true) => GatewayRole::Join,
        (true, true) => GatewayRole::Mixed,
        (false, false) => GatewayRole::Passthrough,
    };
    Some(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConnectionKind, ElementKind, Node};

    fn diamond() -> ProcessGraph {
        ProcessGraph::new(
            vec![
                Node::new("s", ElementKind::StartEvent),
                Node::new("split", ElementKind::ExclusiveGateway),
                Node::new("a", ElementKind::Task),
                Node::new("b", ElementKind::Task),
                Node::new("join", ElementKind::ExclusiveGateway),
                Node::new("e", ElementKind::EndEvent),
            ],
            vec![
                Edge::sequence("f1", "s", "split"),
                Edge::sequence("f2", "split", "a"),
                Edge::new("f3", "split", "b", ConnectionKind::Default),
                Edge::sequence("f4", "a", "join"),
                Edge::sequence("f5", "b", "join"),
                Edge::sequence("f6", "join", "e"),
            ],
        )
    }

    #[test]
    fn test_adjacency() {
        let graph = diamond();
        let out: Vec<_> = outgoing(&graph, "split").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(out, vec!["f2", "f3"]);
        assert_eq!(incoming(&graph, "join").len(), 2);
        assert!(outgoing(&graph, "e").is_empty());
    }

    #[test]
    fn test_split_and_join_classification() {
        let graph = diamond();
        assert!(is_split(&graph, "split"));
        assert!(!is_join(&graph, "split"));
        assert!(is_join(&graph, "join"));
        assert_eq!(gateway_role(&graph, "join"), Some(GatewayRole::Join));
        // tasks never split, whatever their fan-out
        assert_eq!(gateway_role(&graph, "a"), None);
    }

    #[test]
    fn test_dangling_and_non_flow_edges_are_skipped() {
        let graph = ProcessGraph::new(
            vec![
                Node::new("g", ElementKind::ParallelGateway),
                Node::new("a", ElementKind::Task),
            ],
            vec![
                Edge::sequence("f1", "g", "a"),
                Edge::sequence("f2", "g", "ghost"),
                Edge::new("m1", "g", "a", ConnectionKind::Message),
            ],
        );
        assert_eq!(outgoing(&graph, "g").len(), 1);
        assert!(!is_split(&graph, "g"));
        assert_eq!(gateway_role(&graph, "g"), Some(GatewayRole::Passthrough));
    }
}
