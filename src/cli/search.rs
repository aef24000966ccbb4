//! CLI `search` command — rank templates against a query.

use anyhow::Result;

use crate::config::FaceplateConfig;
use crate::retrieval::{find_similar, RetrievalOptions};

/// Run a similarity search and print the ranked matches.
pub fn search(
    config: &FaceplateConfig,
    query: &str,
    limit: Option<usize>,
    min_similarity: Option<f32>,
) -> Result<()> {
    let corpus = super::load_corpus(config)?;

    let mut options = RetrievalOptions::from(&config.retrieval);
    if let Some(limit) = limit {
        options.max_results = limit;
    }
    if let Some(floor) = min_similarity {
        options.min_similarity = floor;
    }

    let matches = find_similar(query, &corpus, &options);
    if matches.is_empty() {
        println!(
            "No templates scored at or above {:.2} for this query.",
            options.min_similarity
        );
        return Ok(());
    }

    println!("Matches for \"{query}\":");
    for m in &matches {
        println!(
            "  {:.3}  {:<20} {} ({})",
            m.similarity, m.template.id, m.template.title, m.template.category
        );
    }

    Ok(())
}
