//! Scoring configuration: dimension weights and normalization breakpoints.
//!
//! The defaults are the calibrated design constants. They are exposed as
//! named constants so a recalibration touches this file only.

use serde::{Deserialize, Serialize};

/// (raw value, dimension score) points for the flow-element count.
pub const STRUCTURAL_BREAKPOINTS: [(f64, f64); 4] =
    [(17.0, 100.0), (33.0, 75.0), (50.0, 50.0), (100.0, 0.0)];

/// (raw value, dimension score) points for weighted CFC.
pub const CONTROL_FLOW_BREAKPOINTS: [(f64, f64); 4] =
    [(5.0, 100.0), (15.0, 70.0), (30.0, 40.0), (60.0, 0.0)];

/// Dimension weights (0.0-1.0 each, summing to 1.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    #[serde(default = "default_structural_weight")]
    pub structural: f64,

    #[serde(default = "default_control_flow_weight")]
    pub control_flow: f64,

    #[serde(default = "default_structuredness_weight")]
    pub structuredness: f64,

    #[serde(default = "default_naming_weight")]
    pub naming: f64,

    #[serde(default = "default_handover_weight")]
    pub handover: f64,

    #[serde(default = "default_start_end_weight")]
    pub start_end: f64,

    #[serde(default = "default_modularity_weight")]
    pub modularity: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            structural: default_structural_weight(),
            control_flow: default_control_flow_weight(),
            structuredness: default_structuredness_weight(),
            naming: default_naming_weight(),
            handover: default_handover_weight(),
            start_end: default_start_end_weight(),
            modularity: default_modularity_weight(),
        }
    }
}

impl DimensionWeights {
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    /// Weights paired with their names, in report order.
    pub fn named(&self) -> [(&'static str, f64); 7] {
        [
            ("structural", self.structural),
            ("control_flow", self.control_flow),
            ("structuredness", self.structuredness),
            ("naming", self.naming),
            ("handover", self.handover),
            ("start_end", self.start_end),
            ("modularity", self.modularity),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.named().iter().map(|(_, w)| w).sum()
    }

    /// Validate that weights sum to 1.0 (with small tolerance for floating point)
    pub fn validate(&self) -> Result<(), String> {
        for (name, weight) in self.named() {
            Self::validate_weight(weight, name)?;
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!(
                "Dimension weights must sum to 1.0, but sum to {:.3}",
                sum
            ));
        }
        Ok(())
    }

    /// Normalize weights to ensure they sum to 1.0
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 && (sum - 1.0).abs() > 0.001 {
            self.divide_by(sum);
        }
    }

    /// The weights that apply when handover could not be scored: handover
    /// drops to zero and the rest are rescaled to sum to 1.0.
    pub fn without_handover(&self) -> Self {
        let mut weights = Self {
            handover: 0.0,
            ..self.clone()
        };
        let sum = weights.sum();
        if sum > 0.0 {
            weights.divide_by(sum);
        }
        weights
    }

    fn divide_by(&mut self, sum: f64) {
        self.structural /= sum;
        self.control_flow /= sum;
        self.structuredness /= sum;
        self.naming /= sum;
        self.handover /= sum;
        self.start_end /= sum;
        self.modularity /= sum;
    }
}

// Default weights: control flow dominates, handover/start-end/modularity are supporting signals
pub fn default_structural_weight() -> f64 {
    0.15
}
pub fn default_control_flow_weight() -> f64 {
    0.25
}
pub fn default_structuredness_weight() -> f64 {
    0.15
}
pub fn default_naming_weight() -> f64 {
    0.15
}
pub fn default_handover_weight() -> f64 {
    0.10
}
pub fn default_start_end_weight() -> f64 {
    0.10
}
pub fn default_modularity_weight() -> f64 {
    0.10
}

/// One point of a piecewise-linear curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Raw metric value
    pub at: f64,
    /// Dimension score (0-100) at that value
    pub score: f64,
}

impl From<(f64, f64)> for Breakpoint {
    fn from((at, score): (f64, f64)) -> Self {
        Self { at, score }
    }
}

/// Breakpoints for the dimensions that are derived from raw counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    #[serde(default = "default_structural_breakpoints")]
    pub structural: Vec<Breakpoint>,

    #[serde(default = "default_control_flow_breakpoints")]
    pub control_flow: Vec<Breakpoint>,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            structural: default_structural_breakpoints(),
            control_flow: default_control_flow_breakpoints(),
        }
    }
}

impl ScoreThresholds {
    pub fn validate(&self) -> Result<(), String> {
        validate_curve(&self.structural, "structural")?;
        validate_curve(&self.control_flow, "control_flow")
    }
}

fn validate_curve(points: &[Breakpoint], name: &str) -> Result<(), String> {
    if points.is_empty() {
        return Err(format!("{} breakpoints must not be empty", name));
    }
    if points.iter().any(|p| !(0.0..=100.0).contains(&p.score)) {
        return Err(format!("{} breakpoint scores must be within 0-100", name));
    }
    if points.windows(2).any(|w| w[1].at <= w[0].at) {
        return Err(format!(
            "{} breakpoints must be strictly increasing in `at`",
            name
        ));
    }
    Ok(())
}

pub fn default_structural_breakpoints() -> Vec<Breakpoint> {
    STRUCTURAL_BREAKPOINTS.iter().copied().map(Breakpoint::from).collect()
}

pub fn default_control_flow_breakpoints() -> Vec<Breakpoint> {
    CONTROL_FLOW_BREAKPOINTS
        .iter()
        .copied()
        .map(Breakpoint::from)
        .collect()
}
