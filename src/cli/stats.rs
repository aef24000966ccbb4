//! CLI `stats` command — library and corpus statistics.

use anyhow::Result;

use crate::config::FaceplateConfig;
use crate::corpus::EmbeddingCorpus;

/// Display template library statistics and corpus metadata.
pub fn stats(config: &FaceplateConfig) -> Result<()> {
    let store = super::open_store(config)?;

    println!("Template Library");
    println!("{}", "=".repeat(40));
    println!("  Total templates:   {}", store.len());
    println!("  Custom:            {}", store.custom_count());
    println!();

    println!("By Category:");
    for (category, count) in store.categories() {
        println!("  {category:<24} {count}");
    }
    println!();

    let corpus_path = config.resolved_corpus_path();
    match EmbeddingCorpus::load(&corpus_path) {
        Ok(corpus) => {
            println!("Embedding Corpus");
            println!("{}", "=".repeat(40));
            println!("  Templates:         {}", corpus.len());
            println!("  Dimensions:        {}", corpus.metadata.dimensions);
            println!("  Model:             {}", corpus.metadata.model);
            println!("  Created:           {}", corpus.metadata.created);
            if corpus.len() != store.len() {
                println!();
                println!(
                    "  NOTE: corpus holds {} templates but the library has {}.",
                    corpus.len(),
                    store.len()
                );
                println!("  Run `faceplate embed` to regenerate.");
            }
        }
        Err(e) => {
            println!("Embedding Corpus: unavailable ({e})");
        }
    }

    Ok(())
}
