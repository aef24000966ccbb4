//! CLI `export` command — dump the whole library as JSON.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::FaceplateConfig;

/// Export all templates (built-ins included) as pretty JSON, to a file or
/// to stdout.
pub fn export(config: &FaceplateConfig, file: Option<&Path>) -> Result<()> {
    let store = super::open_store(config)?;
    let json = store.export_json().context("failed to serialize templates")?;

    match file {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "Exported {} templates ({} custom) to {}",
                store.len(),
                store.custom_count(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
