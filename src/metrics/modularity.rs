//! Diagram size and decomposition into sub-processes.

use crate::core::{Issue, IssueCategory, ProcessGraph, Severity};
use serde::{Deserialize, Serialize};

/// Activities a diagram may hold before decomposition is expected.
pub const FLAT_ACTIVITY_LIMIT: usize = 15;
/// Activities each sub-process or call activity is credited with absorbing.
pub const ACTIVITIES_PER_MODULE: usize = 10;
/// Every started block of this many uncovered activities costs a step.
pub const UNCOVERED_BLOCK: usize = 5;
pub const UNCOVERED_BLOCK_PENALTY: u32 = 10;

/// Modularity scores below this raise an issue.
pub const MODULARITY_WARNING: u32 = 70;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModularityReport {
    /// Events, activities and gateways.
    pub flow_elements: usize,
    pub activity_count: usize,
    /// Sub-processes and call activities.
    pub module_count: usize,
    pub gateway_count: usize,
    pub uncovered_activities: usize,
    /// 0-100
    pub score: u32,
    pub issues: Vec<Issue>,
}

pub fn analyze_modularity(graph: &ProcessGraph) -> ModularityReport {
    let activity_count = graph.activities().count();
    let module_count = graph.nodes().iter().filter(|n| n.kind.is_module()).count();
    let uncovered = uncovered_activities(activity_count, module_count);
    let score = modularity_score(uncovered);

    let mut issues = Vec::new();
    if score < MODULARITY_WARNING {
        issues.push(Issue::new(
            Severity::Medium,
            IssueCategory::Modularity,
            format!(
                "{} activities with {} sub-processes; {} activities are not decomposed",
                activity_count, module_count, uncovered
            ),
        ));
    }

    log::debug!(
        "modularity: {} activities, {} modules, score {}",
        activity_count,
        module_count,
        score
    );
    ModularityReport {
        flow_elements: graph.flow_element_count(),
        activity_count,
        module_count,
        gateway_count: graph.gateways().count(),
        uncovered_activities: uncovered,
        score,
        issues,
    }
}

pub fn uncovered_activities(activity_count: usize, module_count: usize) -> usize {
    if activity_count <= FLAT_ACTIVITY_LIMIT {
        return 0;
    }
    activity_count
        .saturating_sub(FLAT_ACTIVITY_LIMIT)
        .saturating_sub(ACTIVITIES_PER_MODULE * module_count)
}

pub fn modularity_score(uncovered: usize) -> u32 {
    let blocks = uncovered.div_ceil(UNCOVERED_BLOCK) as u32;
    100u32.saturating_sub(blocks.saturating_mul(UNCOVERED_BLOCK_PENALTY))
}
