//! Metric analyzers.
//!
//! Each analyzer reads a [`ProcessGraph`](crate::core::ProcessGraph)
//! snapshot and returns its own report, issues included. None of them can
//! fail: odd diagrams are what they are there to describe.

pub mod control_flow;
pub mod handover;
pub mod modularity;
pub mod naming;
pub mod start_end;
pub mod structuredness;

pub use control_flow::{analyze_control_flow, ControlFlowReport, GatewayCfc};
pub use handover::{analyze_handovers, HandoverReport};
pub use modularity::{analyze_modularity, ModularityReport};
pub use naming::{analyze_naming, assess_label, LabelAssessment, LabelStyle, NamingReport};
pub use start_end::{analyze_start_end, StartEndReport};
pub use structuredness::{analyze_structuredness, StructurednessReport, UnmatchedGateway};
