//! CLI `embed` command — regenerate the embedding corpus from the library.

use anyhow::{Context, Result};
use indicatif::ProgressBar;

use crate::config::FaceplateConfig;
use crate::corpus::embed_corpus;

/// Embed every template and write a fresh corpus file.
pub fn embed(config: &FaceplateConfig) -> Result<()> {
    let store = super::open_store(config)?;
    let documents = store.documents();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Embedding {} templates...", documents.len()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let corpus = embed_corpus(&documents, &config.embedding.model)
        .context("failed to embed template library")?;

    let path = config.resolved_corpus_path();
    corpus
        .save(&path)
        .with_context(|| format!("failed to write corpus to {}", path.display()))?;
    spinner.finish_and_clear();

    println!("Embedding corpus generated:");
    println!("  Templates:    {}", corpus.len());
    println!("  Dimensions:   {}", corpus.metadata.dimensions);
    println!("  Model:        {}", corpus.metadata.model);
    println!("  Output:       {}", path.display());
    println!();
    println!("Category distribution:");
    for (category, count) in store.categories() {
        println!("  {category:<24} {count}");
    }

    Ok(())
}
