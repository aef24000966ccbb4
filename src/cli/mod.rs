//! Command bodies for the `faceplate` binary, one file per command.

pub mod ask;
pub mod doctor;
pub mod embed;
pub mod export;
pub mod import;
pub mod search;
pub mod stats;
pub mod template;

use anyhow::{Context, Result};

use crate::config::FaceplateConfig;
use crate::corpus::EmbeddingCorpus;
use crate::template::TemplateStore;

/// Open the template library at the configured path.
pub fn open_store(config: &FaceplateConfig) -> Result<TemplateStore> {
    let path = config.resolved_templates_path();
    TemplateStore::open(&path)
        .with_context(|| format!("failed to open template library at {}", path.display()))
}

/// Load the embedding corpus at the configured path.
pub fn load_corpus(config: &FaceplateConfig) -> Result<EmbeddingCorpus> {
    let path = config.resolved_corpus_path();
    EmbeddingCorpus::load(&path)
        .with_context(|| format!("failed to load embedding corpus from {}", path.display()))
}
