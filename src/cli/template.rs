//! CLI `template` subcommands — list, show, add, and remove library entries.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::FaceplateConfig;

/// List templates, optionally restricted to one category.
pub fn list(config: &FaceplateConfig, category: Option<&str>) -> Result<()> {
    let store = super::open_store(config)?;

    match category {
        Some(category) => {
            let templates = store.by_category(category);
            if templates.is_empty() {
                println!("No templates in category \"{category}\".");
                return Ok(());
            }
            println!("{category}:");
            for template in templates {
                let marker = if template.is_custom { "custom" } else { "" };
                println!("  {:<24} {:<28} {}", template.id, template.title, marker);
            }
        }
        None => {
            for (category, _count) in store.categories() {
                println!("{category}:");
                for template in store.by_category(&category) {
                    let marker = if template.is_custom { "custom" } else { "" };
                    println!("  {:<24} {:<28} {}", template.id, template.title, marker);
                }
                println!();
            }
            println!(
                "{} templates ({} custom)",
                store.len(),
                store.custom_count()
            );
        }
    }

    Ok(())
}

/// Print one template in full.
pub fn show(config: &FaceplateConfig, id: &str) -> Result<()> {
    let store = super::open_store(config)?;
    let template = store
        .get(id)
        .with_context(|| format!("no template with id `{id}`"))?;

    println!("Id:          {}", template.id);
    println!("Title:       {}", template.title);
    println!("Category:    {}", template.category);
    println!("Custom:      {}", if template.is_custom { "yes" } else { "no" });
    if let Some(ref created) = template.created_at {
        println!("Created:     {created}");
    }
    println!("Description: {}", template.description);
    println!();
    println!("{}", template.code);

    Ok(())
}

/// Create a custom template. The code body comes from `code_file`, or from
/// stdin when no file is given.
pub fn add(
    config: &FaceplateConfig,
    title: &str,
    description: Option<&str>,
    category: Option<&str>,
    code_file: Option<&Path>,
) -> Result<()> {
    let code = match code_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read code file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read code from stdin")?;
            buffer
        }
    };
    anyhow::ensure!(!code.trim().is_empty(), "template code must not be empty");

    let mut store = super::open_store(config)?;
    let created = store.create_custom(title, description, category, &code)?;

    println!("Created template {} ({})", created.id, created.title);
    println!("Run `faceplate embed` to include it in retrieval.");
    Ok(())
}

/// Remove a custom template.
pub fn remove(config: &FaceplateConfig, id: &str) -> Result<()> {
    let mut store = super::open_store(config)?;
    let removed = store.remove(id)?;

    println!("Removed template {} ({})", removed.id, removed.title);
    println!("Run `faceplate embed` to update retrieval.");
    Ok(())
}
