pub mod errors;
pub mod graph;
pub mod kinds;

pub use errors::{Error, Result, ResultExt};
pub use graph::{Edge, Node, ProcessGraph};
pub use kinds::{CfcType, ConnectionKind, ElementCategory, ElementKind, GatewayProfile};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of an analytical finding, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        };
        write!(f, "{}", name)
    }
}

/// A finding produced by an analyzer. Findings are the output, never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
    /// Offending node, for highlighting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
}

impl Issue {
    pub fn new(severity: Severity, category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            node_id: None,
        }
    }

    pub fn at(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    ControlFlow,
    Structuredness,
    Naming,
    Handover,
    StartEnd,
    Size,
    Modularity,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IssueCategory::ControlFlow => "control flow",
            IssueCategory::Structuredness => "structuredness",
            IssueCategory::Naming => "naming",
            IssueCategory::Handover => "handover",
            IssueCategory::StartEnd => "start/end",
            IssueCategory::Size => "size",
            IssueCategory::Modularity => "modularity",
        };
        write!(f, "{}", name)
    }
}
