//! CLI `ask` command — generate a WinCC script from a natural-language
//! prompt, with retrieved templates as in-context examples.

use anyhow::Result;

use crate::config::FaceplateConfig;
use crate::retrieval::context::build_context;
use crate::retrieval::{find_similar, RetrievalOptions};
use crate::scripter::{generate_script, render_system_prompt};

/// Run the generation pipeline. With `dry_run`, print the assembled prompt
/// instead of calling the endpoint.
pub async fn ask(config: &FaceplateConfig, prompt: &str, dry_run: bool) -> Result<()> {
    let corpus = super::load_corpus(config)?;

    if dry_run {
        let options = RetrievalOptions::from(&config.retrieval);
        let matches = find_similar(prompt, &corpus, &options);
        let context = build_context(&matches, config.retrieval.max_context_chars);
        let system = render_system_prompt(&context);

        println!("Retrieved {} example(s):", matches.len());
        for m in &matches {
            println!("  {:.3}  {}", m.similarity, m.template.id);
        }
        println!();
        println!("--- system prompt ---");
        println!("{system}");
        println!("--- user message ---");
        println!("{prompt}");
        return Ok(());
    }

    let result = generate_script(prompt, &corpus, config).await?;

    if result.matches.is_empty() {
        println!("(no relevant templates found; generated from base instructions)");
    } else {
        println!("Used {} example template(s):", result.matches.len());
        for m in &result.matches {
            println!("  {:.3}  {}", m.similarity, m.template.id);
        }
    }
    println!();
    println!("{}", result.code);

    if !result.validation.is_clean() {
        println!();
        println!("Validation warnings:");
        for issue in result.validation.issues() {
            println!("  - {issue}");
        }
    }

    Ok(())
}
