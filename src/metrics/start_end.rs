//! Start/end event balance: one start, at most two ends.

use crate::core::{Issue, IssueCategory, ProcessGraph, Severity};
use serde::{Deserialize, Serialize};

pub const EXTRA_START_PENALTY: u32 = 15;
pub const EXTRA_END_PENALTY: u32 = 10;
pub const MISSING_START_PENALTY: u32 = 15;
pub const MISSING_END_PENALTY: u32 = 10;

/// End events tolerated before penalties apply (e.g. success and failure).
pub const TOLERATED_ENDS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartEndReport {
    pub start_count: usize,
    pub end_count: usize,
    /// 0-100
    pub score: u32,
    pub issues: Vec<Issue>,
}

pub fn analyze_start_end(graph: &ProcessGraph) -> StartEndReport {
    let start_count = graph.start_nodes().count();
    let end_count = graph.end_nodes().count();
    let mut issues = Vec::new();
    let mut penalty: u32 = 0;

    if graph.flow_element_count() > 0 {
        if start_count == 0 {
            penalty += MISSING_START_PENALTY;
            issues.push(Issue::new(
                Severity::High,
                IssueCategory::StartEnd,
                "Process has no start event",
            ));
        }
        if end_count == 0 {
            penalty += MISSING_END_PENALTY;
            issues.push(Issue::new(
                Severity::High,
                IssueCategory::StartEnd,
                "Process has no end event",
            ));
        }
    }

    if start_count > 1 {
        penalty += EXTRA_START_PENALTY * (start_count as u32 - 1);
        issues.push(Issue::new(
            Severity::Medium,
            IssueCategory::StartEnd,
            format!("{} start events; use a single start event", start_count),
        ));
    }
    if end_count > TOLERATED_ENDS {
        penalty += EXTRA_END_PENALTY * (end_count - TOLERATED_ENDS) as u32;
        issues.push(Issue::new(
            Severity::Low,
            IssueCategory::StartEnd,
            format!(
                "{} end events; keep at most {} (e.g. success and failure)",
                end_count, TOLERATED_ENDS
            ),
        ));
    }

    let score = 100u32.saturating_sub(penalty);
    log::debug!(
        "start/end: {} starts, {} ends, score {}",
        start_count,
        end_count,
        score
    );
    StartEndReport {
        start_count,
        end_count,
        score,
        issues,
    }
}
