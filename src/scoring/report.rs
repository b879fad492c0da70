//! The immutable result of one scoring pass.

use crate::core::Issue;
use crate::metrics::{
    ControlFlowReport, HandoverReport, ModularityReport, NamingReport, StartEndReport,
    StructurednessReport,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIZE_SMALL_MAX: usize = 17;
pub const SIZE_MEDIUM_MAX: usize = 33;
pub const SIZE_LARGE_MAX: usize = 50;

pub const CFC_LOW_BELOW: u64 = 5;
pub const CFC_MODERATE_BELOW: u64 = 15;
pub const CFC_HIGH_BELOW: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl SizeClass {
    pub fn from_element_count(count: usize) -> Self {
        match count {
            c if c <= SIZE_SMALL_MAX => SizeClass::Small,
            c if c <= SIZE_MEDIUM_MAX => SizeClass::Medium,
            c if c <= SIZE_LARGE_MAX => SizeClass::Large,
            _ => SizeClass::VeryLarge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityClass {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ComplexityClass {
    pub fn from_weighted_cfc(weighted_cfc: u64) -> Self {
        match weighted_cfc {
            w if w < CFC_LOW_BELOW => ComplexityClass::Low,
            w if w < CFC_MODERATE_BELOW => ComplexityClass::Moderate,
            w if w < CFC_HIGH_BELOW => ComplexityClass::High,
            _ => ComplexityClass::VeryHigh,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdClassification {
    pub size: SizeClass,
    pub control_flow: ComplexityClass,
}

/// Per-dimension scores, each 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub structural: f64,
    pub control_flow: f64,
    pub structuredness: f64,
    pub naming: f64,
    /// `None` when the diagram records no roles at all.
    pub handover: Option<f64>,
    pub start_end: f64,
    pub modularity: f64,
}

impl DimensionScores {
    /// Scores paired with names, in report order.
    pub fn named(&self) -> [(&'static str, Option<f64>); 7] {
        [
            ("structural", Some(self.structural)),
            ("control_flow", Some(self.control_flow)),
            ("structuredness", Some(self.structuredness)),
            ("naming", Some(self.naming)),
            ("handover", self.handover),
            ("start_end", Some(self.start_end)),
            ("modularity", Some(self.modularity)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// 0-100
    pub total_score: u32,
    pub grade: Grade,
    pub dimensions: DimensionScores,
    /// Flow elements counted by the structural dimension.
    pub element_count: usize,
    pub total_cfc: u64,
    pub weighted_cfc: u64,
    pub control_flow: ControlFlowReport,
    pub structuredness: StructurednessReport,
    pub naming: NamingReport,
    pub handover: HandoverReport,
    pub start_end: StartEndReport,
    pub modularity: ModularityReport,
    /// All findings, most severe first.
    pub issues: Vec<Issue>,
    pub classification: ThresholdClassification,
}
