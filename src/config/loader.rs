use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::scoring::DimensionWeights;
use super::{ScoringConfig, CONFIG_FILE_NAME};
use crate::core::{Error, Result, ResultExt};

/// Directories searched upward from the starting point.
pub const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML config and validate it.
///
/// Invalid weights are replaced by the defaults with a warning; valid ones
/// are normalized to an exact sum of 1.0. Malformed TOML or unusable
/// breakpoints are errors.
pub fn parse_and_validate_config(contents: &str) -> Result<ScoringConfig> {
    let mut config = toml::from_str::<ScoringConfig>(contents)?;

    if let Err(e) = config.weights.validate() {
        log::warn!("Invalid dimension weights: {}. Using defaults.", e);
        config.weights = DimensionWeights::default();
    } else {
        config.weights.normalize();
    }

    config
        .thresholds
        .validate()
        .map_err(Error::Configuration)?;

    Ok(config)
}

/// Load a config file that must exist.
pub fn load_config_from_path(path: &Path) -> Result<ScoringConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io_at(e, path))?;
    let config = parse_and_validate_config(&contents)
        .context(format!("Failed to parse {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load a config file if present; missing or broken files yield `None`.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ScoringConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, nearest first, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest config file at or above `start`, falling back to defaults.
pub fn discover_config(start: PathBuf) -> ScoringConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ScoringConfig::default()
        })
}

/// Discover config from the current working directory.
pub fn load_config() -> ScoringConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ScoringConfig::default()
        }
    }
}
