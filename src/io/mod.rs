pub mod output;
pub mod snapshot;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};
pub use snapshot::{load_graph, load_snapshot, DiagramSnapshot, SnapshotConnection, SnapshotElement};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
