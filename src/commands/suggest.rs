use super::resolve_config;
use crate::io::{create_writer, load_graph, OutputFormat};
use crate::scoring::score_diagram_with;
use crate::suggestions::generate_suggestions;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct SuggestConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
    pub top: Option<usize>,
}

pub fn handle_suggest(config: SuggestConfig) -> Result<()> {
    let scoring = resolve_config(config.config.as_deref())?;
    let graph = load_graph(&config.path)
        .with_context(|| format!("Failed to read snapshot {}", config.path.display()))?;

    let report = score_diagram_with(&graph, &scoring);
    let mut suggestions = generate_suggestions(&report, &scoring.weights);
    if let Some(top) = config.top {
        suggestions.truncate(top);
    }

    let mut writer = create_writer(config.format, None, scoring.weights, 0)?;
    writer.write_suggestions(&suggestions)
}
