//! Static element and connection taxonomy.
//!
//! Everything here is lookup data: the engine never stores per-instance
//! gateway behaviour, it asks the kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a diagram node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    // Events
    StartEvent,
    MessageStartEvent,
    TimerStartEvent,
    EndEvent,
    MessageEndEvent,
    ErrorEndEvent,
    TerminateEndEvent,
    IntermediateEvent,
    MessageIntermediateEvent,
    TimerIntermediateEvent,
    BoundaryEvent,

    // Activities
    Task,
    UserTask,
    ServiceTask,
    ScriptTask,
    ManualTask,
    SendTask,
    ReceiveTask,
    BusinessRuleTask,
    SubProcess,
    CallActivity,

    // Gateways
    ExclusiveGateway,
    EventBasedGateway,
    ParallelGateway,
    InclusiveGateway,
    ComplexGateway,

    // Containers
    Pool,
    Lane,
    Group,

    // Data and artifacts
    DataObject,
    DataStore,
    TextAnnotation,

    #[serde(other)]
    Unknown,
}

/// Broad family an element kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    Event,
    Activity,
    Gateway,
    Container,
    Artifact,
    Unknown,
}

impl ElementKind {
    pub fn category(self) -> ElementCategory {
        use ElementKind::*;
        match self {
            StartEvent | MessageStartEvent | TimerStartEvent | EndEvent | MessageEndEvent
            | ErrorEndEvent | TerminateEndEvent | IntermediateEvent | MessageIntermediateEvent
            | TimerIntermediateEvent | BoundaryEvent => ElementCategory::Event,
            Task | UserTask | ServiceTask | ScriptTask | ManualTask | SendTask | ReceiveTask
            | BusinessRuleTask | SubProcess | CallActivity => ElementCategory::Activity,
            ExclusiveGateway | EventBasedGateway | ParallelGateway | InclusiveGateway
            | ComplexGateway => ElementCategory::Gateway,
            Pool | Lane | Group => ElementCategory::Container,
            DataObject | DataStore | TextAnnotation => ElementCategory::Artifact,
            Unknown => ElementCategory::Unknown,
        }
    }

    pub fn is_start_event(self) -> bool {
        matches!(
            self,
            ElementKind::StartEvent | ElementKind::MessageStartEvent | ElementKind::TimerStartEvent
        )
    }

    pub fn is_end_event(self) -> bool {
        matches!(
            self,
            ElementKind::EndEvent
                | ElementKind::MessageEndEvent
                | ElementKind::ErrorEndEvent
                | ElementKind::TerminateEndEvent
        )
    }

    pub fn is_gateway(self) -> bool {
        self.category() == ElementCategory::Gateway
    }

    pub fn is_activity(self) -> bool {
        self.category() == ElementCategory::Activity
    }

    /// Sub-processes and call activities: the units a diagram is decomposed into.
    pub fn is_module(self) -> bool {
        matches!(self, ElementKind::SubProcess | ElementKind::CallActivity)
    }

    /// Events, activities and gateways. Containers and artifacts are not flow.
    pub fn is_flow_element(self) -> bool {
        matches!(
            self.category(),
            ElementCategory::Event | ElementCategory::Activity | ElementCategory::Gateway
        )
    }

    /// Gateway behaviour, `None` for anything that is not a gateway.
    pub fn gateway_profile(self) -> Option<GatewayProfile> {
        let cfc_type = match self {
            ElementKind::ExclusiveGateway | ElementKind::EventBasedGateway => CfcType::Xor,
            ElementKind::ParallelGateway => CfcType::And,
            ElementKind::InclusiveGateway => CfcType::Or,
            ElementKind::ComplexGateway => CfcType::Complex,
            _ => return None,
        };
        Some(GatewayProfile { cfc_type })
    }
}

/// Control-flow semantics of a gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CfcType {
    Xor,
    And,
    Or,
    Complex,
}

impl CfcType {
    /// Number of reachable branch states for a gateway with `fan_out` outgoing paths.
    ///
    /// XOR picks exactly one branch, AND always takes all of them, OR and
    /// COMPLEX may fire any non-empty subset.
    pub fn cfc(self, fan_out: usize) -> u64 {
        match self {
            CfcType::Xor => fan_out as u64,
            CfcType::And => 1,
            CfcType::Or | CfcType::Complex => {
                // saturate rather than overflow on absurd fan-outs
                if fan_out >= 64 {
                    u64::MAX
                } else {
                    (1u64 << fan_out) - 1
                }
            }
        }
    }

    /// Whether the formula grows exponentially with fan-out.
    pub fn is_exponential(self) -> bool {
        matches!(self, CfcType::Or | CfcType::Complex)
    }
}

impl fmt::Display for CfcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CfcType::Xor => "XOR",
            CfcType::And => "AND",
            CfcType::Or => "OR",
            CfcType::Complex => "COMPLEX",
        };
        write!(f, "{}", name)
    }
}

/// Per-kind gateway lookup entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayProfile {
    pub cfc_type: CfcType,
}

/// Type tag of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    #[default]
    Sequence,
    Conditional,
    Default,
    Message,
    Association,
    DataAssociation,
}

impl ConnectionKind {
    /// Connections that carry control flow. Everything else is ignored by traversal.
    pub fn is_sequence_flow(self) -> bool {
        matches!(
            self,
            ConnectionKind::Sequence | ConnectionKind::Conditional | ConnectionKind::Default
        )
    }
}
