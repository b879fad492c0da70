pub mod loader;
pub mod scoring;

pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config,
};
pub use scoring::{Breakpoint, DimensionWeights, ScoreThresholds};

use serde::{Deserialize, Serialize};

/// File name searched for when no config path is given.
pub const CONFIG_FILE_NAME: &str = ".flowscore.toml";

/// Everything the aggregator can be recalibrated with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: DimensionWeights,

    #[serde(default)]
    pub thresholds: ScoreThresholds,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.weights.validate()?;
        self.thresholds.validate()
    }
}

/// Commented default config written by `flowscore init`.
pub fn default_config_toml() -> String {
    let config = ScoringConfig::default();
    let body = toml::to_string_pretty(&config).unwrap_or_default();
    format!(
        "# flowscore configuration\n\
         #\n\
         # weights: share of each dimension in the total score (must sum to 1.0)\n\
         # thresholds: piecewise-linear curves mapping raw values to 0-100\n\
         #   structural   -> number of flow elements (events, activities, gateways)\n\
         #   control_flow -> weighted control-flow complexity\n\n{}",
        body
    )
}
