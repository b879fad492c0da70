use crate::config::DimensionWeights;
use crate::io::{create_writer, load_graph, OutputFormat};
use crate::traversal::compute_levels;
use anyhow::{Context, Result};
use std::path::Path;

/// Levels are computed from every start event of the diagram.
pub fn handle_levels(path: &Path, format: OutputFormat) -> Result<()> {
    let graph = load_graph(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let starts: Vec<&str> = graph.start_nodes().map(|n| n.id.as_str()).collect();
    let levels = compute_levels(&graph, &starts);

    let mut writer = create_writer(format, None, DimensionWeights::default(), 0)?;
    writer.write_levels(&levels)
}
