//! Report output: writers for terminal, JSON, and markdown.

pub mod output;

use anyhow::Context;
use std::path::Path;

/// Write rendered report content to a file.
pub fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("failed to write report to {}", path.display()))
}
