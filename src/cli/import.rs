//! CLI `import` command — load templates from an exported JSON file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::FaceplateConfig;

/// Import templates from a JSON file.
///
/// Every accepted record becomes a custom template; existing ids are
/// replaced. The corpus is not regenerated here.
pub fn import(config: &FaceplateConfig, file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read import file: {}", file.display()))?;

    let mut store = super::open_store(config)?;
    let report = store
        .import_json(&json)
        .context("failed to import templates")?;

    println!("Import complete:");
    println!("  Imported: {}", report.imported);
    println!("  Updated:  {}", report.updated);
    if report.skipped > 0 {
        println!("  Skipped:  {} (missing id, title, or code)", report.skipped);
    }
    println!();
    println!("Run `faceplate embed` to include imported templates in retrieval.");

    Ok(())
}
