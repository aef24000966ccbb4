//! CLI `doctor` command — check corpus health and endpoint reachability.

use anyhow::Result;

use crate::config::FaceplateConfig;
use crate::corpus::EmbeddingCorpus;
use crate::scripter::LmStudioClient;

/// Run diagnostics and print a health report.
pub async fn doctor(config: &FaceplateConfig) -> Result<()> {
    println!("Faceplate Health Report");
    println!("=======================");
    println!();

    let store = super::open_store(config)?;
    println!("Template library:  {} templates ({} custom)", store.len(), store.custom_count());
    println!();

    let corpus_path = config.resolved_corpus_path();
    println!("Corpus:            {}", corpus_path.display());
    match EmbeddingCorpus::load(&corpus_path) {
        Ok(corpus) => {
            println!("  Templates:       {}", corpus.len());
            println!("  Dimensions:      {}", corpus.metadata.dimensions);
            println!("  Model stored:    {}", corpus.metadata.model);
            println!("  Model configured: {}", config.embedding.model);
            if corpus.metadata.model != config.embedding.model {
                println!("  WARNING: model label mismatch. Run `faceplate embed` to regenerate.");
            }
            if corpus.len() != store.len() {
                println!(
                    "  WARNING: corpus is stale ({} embedded, {} in library). Run `faceplate embed`.",
                    corpus.len(),
                    store.len()
                );
            }
        }
        Err(e) => {
            println!("  UNAVAILABLE: {e}");
        }
    }
    println!();

    println!("LLM endpoint:      {}", config.generation.base_url());
    let client = LmStudioClient::new(&config.generation)?;
    match client.models().await {
        Ok(models) => {
            println!("  Status:          reachable");
            println!("  Configured model: {}", config.generation.model);
            if models.is_empty() {
                println!("  WARNING: server reports no loaded models.");
            } else {
                println!("  Loaded models:");
                for model in &models {
                    println!("    {model}");
                }
                if !models.iter().any(|m| m == &config.generation.model) {
                    println!(
                        "  WARNING: configured model `{}` is not in the loaded list.",
                        config.generation.model
                    );
                }
            }
        }
        Err(e) => {
            println!("  UNREACHABLE: {e}");
            println!("  Start the LM Studio server, or `faceplate ask` will fail.");
        }
    }

    Ok(())
}
