//! Immutable snapshot of a process diagram.

use super::kinds::{ConnectionKind, ElementKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Graph vertex: a typed diagram element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: ElementKind,
    #[serde(default)]
    pub label: String,
    /// Assigned lane or actor, if any.
    #[serde(default)]
    pub role: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: String::new(),
            role: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Directed, typed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub kind: ConnectionKind,
    #[serde(default)]
    pub label: String,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        kind: ConnectionKind,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind,
            label: String::new(),
        }
    }

    /// Plain sequence flow, the overwhelmingly common case.
    pub fn sequence(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(id, source, target, ConnectionKind::Sequence)
    }
}

/// Read-only diagram snapshot handed to the engine.
///
/// Node order is preserved from the editor; every traversal that has a
/// choice of order follows it, which is what makes results reproducible.
#[derive(Debug, Clone, Default)]
pub struct ProcessGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, usize>,
}

impl ProcessGraph {
    /// Build a snapshot. When ids collide the first node wins the index.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            index.entry(node.id.clone()).or_insert(position);
        }
        Self {
            nodes,
            edges,
            index,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Start-event nodes, in diagram order.
    pub fn start_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind.is_start_event())
    }

    pub fn end_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind.is_end_event())
    }

    pub fn gateways(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind.is_gateway())
    }

    pub fn activities(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind.is_activity())
    }

    pub fn flow_element_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.kind.is_flow_element()).count()
    }
}
