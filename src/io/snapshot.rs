//! Editor snapshot format: `{ elements, connections, viewport }`.
//!
//! Geometry and any other editor-owned fields are carried through opaquely
//! so a snapshot can be re-serialized without loss.

use crate::core::{
    ConnectionKind, Edge, ElementKind, Error, Node, ProcessGraph, Result, ResultExt,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramSnapshot {
    #[serde(default)]
    pub elements: Vec<SnapshotElement>,
    #[serde(default)]
    pub connections: Vec<SnapshotConnection>,
    #[serde(default)]
    pub viewport: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotElement {
    pub id: String,
    #[serde(rename = "type", alias = "elementKind")]
    pub kind: ElementKind,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Position, size and styling, owned by the editor.
    #[serde(flatten)]
    pub geometry: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotConnection {
    pub id: String,
    #[serde(alias = "sourceId")]
    pub source: String,
    #[serde(alias = "targetId")]
    pub target: String,
    #[serde(rename = "type", default)]
    pub kind: ConnectionKind,
    #[serde(default)]
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DiagramSnapshot {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode into the engine's graph.
    ///
    /// Connections pointing at unknown elements, repeated connection ids and
    /// repeated control-flow connections between the same pair are dropped.
    pub fn into_graph(self) -> ProcessGraph {
        let element_ids: HashSet<&str> = self.elements.iter().map(|e| e.id.as_str()).collect();
        let mut seen_ids = HashSet::new();
        let mut seen_flows = HashSet::new();
        let mut edges = Vec::with_capacity(self.connections.len());

        for connection in &self.connections {
            if !element_ids.contains(connection.source.as_str())
                || !element_ids.contains(connection.target.as_str())
            {
                log::warn!(
                    "dropping connection '{}': {} -> {} references a missing element",
                    connection.id,
                    connection.source,
                    connection.target
                );
                continue;
            }
            if !seen_ids.insert(connection.id.as_str()) {
                log::warn!("dropping connection with duplicate id '{}'", connection.id);
                continue;
            }
            if connection.kind.is_sequence_flow()
                && !seen_flows.insert((connection.source.as_str(), connection.target.as_str()))
            {
                log::warn!(
                    "dropping connection '{}': {} -> {} is already connected",
                    connection.id,
                    connection.source,
                    connection.target
                );
                continue;
            }

            let mut edge = Edge::new(
                connection.id.clone(),
                connection.source.clone(),
                connection.target.clone(),
                connection.kind,
            );
            edge.label = connection.label.clone();
            edges.push(edge);
        }

        let nodes = self
            .elements
            .into_iter()
            .map(|element| {
                let node = Node::new(element.id, element.kind).with_label(element.label);
                match element.role {
                    Some(role) => node.with_role(role),
                    None => node,
                }
            })
            .collect();

        ProcessGraph::new(nodes, edges)
    }
}

/// Read and decode a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<DiagramSnapshot> {
    let text = fs::read_to_string(path).map_err(|e| Error::io_at(e, path))?;
    DiagramSnapshot::from_json(&text).context(format!("Failed to decode {}", path.display()))
}

/// Read a snapshot file straight into a graph.
pub fn load_graph(path: &Path) -> Result<ProcessGraph> {
    let snapshot = load_snapshot(path)?;
    log::info!(
        "loaded {} elements and {} connections from {}",
        snapshot.elements.len(),
        snapshot.connections.len(),
        path.display()
    );
    Ok(snapshot.into_graph())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SNAPSHOT: &str = indoc! {r#"
        {
          "elements": [
            { "id": "s", "type": "start_event", "x": 10, "y": 20 },
            { "id": "t", "type": "user_task", "label": "Review Claim", "role": "Clerk", "width": 120 },
            { "id": "n", "type": "sticky_note" },
            { "id": "e", "type": "end_event" }
          ],
          "connections": [
            { "id": "f1", "source": "s", "target": "t" },
            { "id": "f2", "sourceId": "t", "targetId": "e", "type": "conditional", "label": "ok" },
            { "id": "f3", "source": "t", "target": "ghost" },
            { "id": "f1", "source": "t", "target": "s" },
            { "id": "f4", "source": "s", "target": "t" },
            { "id": "m1", "source": "n", "target": "t", "type": "association" }
          ],
          "viewport": { "zoom": 1.5 }
        }
    "#};

    #[test]
    fn test_decode_keeps_geometry_opaque() {
        let snapshot = DiagramSnapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.elements.len(), 4);
        assert_eq!(snapshot.elements[0].geometry.get("x"), Some(&Value::from(10)));
        assert_eq!(snapshot.elements[1].role.as_deref(), Some("Clerk"));
        assert_eq!(snapshot.elements[2].kind, ElementKind::Unknown);
        assert_eq!(snapshot.viewport["zoom"], Value::from(1.5));
    }

    #[test]
    fn test_into_graph_drops_bad_connections() {
        let graph = DiagramSnapshot::from_json(SNAPSHOT).unwrap().into_graph();
        let ids: Vec<&str> = graph.edges().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f2", "m1"]);
        assert_eq!(graph.edges()[1].kind, ConnectionKind::Conditional);
        assert_eq!(graph.edges()[1].label, "ok");
        assert_eq!(graph.node("t").and_then(|n| n.role.as_deref()), Some("Clerk"));
    }

    #[test]
    fn test_empty_object_is_an_empty_graph() {
        let graph = DiagramSnapshot::from_json("{}").unwrap().into_graph();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let err = DiagramSnapshot::from_json("{ \"elements\": 3 }").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_malformed_file_names_the_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"connections\": {} }").unwrap();
        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, Error::WithContext { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_snapshot(Path::new("/nonexistent/flow.json")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }
}
