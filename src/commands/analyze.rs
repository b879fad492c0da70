use super::resolve_config;
use crate::io::{create_writer, load_graph, OutputFormat};
use crate::scoring::score_diagram_with;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub verbosity: u8,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let scoring = resolve_config(config.config.as_deref())?;
    let graph = load_graph(&config.path)
        .with_context(|| format!("Failed to read snapshot {}", config.path.display()))?;

    let report = score_diagram_with(&graph, &scoring);
    log::info!(
        "{}: score {} ({})",
        config.path.display(),
        report.total_score,
        report.grade
    );

    let mut writer = create_writer(
        config.format,
        config.output.as_deref(),
        scoring.weights.clone(),
        config.verbosity,
    )?;
    writer.write_report(&report)
}
