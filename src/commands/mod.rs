//! CLI command implementations.
//!
//! - **analyze**: score a diagram snapshot
//! - **suggest**: list improvement suggestions
//! - **levels**: print layout levels
//! - **init**: write a default configuration file

pub mod analyze;
pub mod init;
pub mod levels;
pub mod suggest;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
pub use levels::handle_levels;
pub use suggest::{handle_suggest, SuggestConfig};

use crate::config::{load_config, load_config_from_path, ScoringConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Explicit config file, or the nearest `.flowscore.toml`, or defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<ScoringConfig> {
    match path {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}
