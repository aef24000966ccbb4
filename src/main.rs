use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use faceplate::{cli, config::FaceplateConfig};

#[derive(Parser)]
#[command(
    name = "faceplate",
    version,
    about = "Template library and retrieval-assisted WinCC Unified script generation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Embed the template library into the retrieval corpus
    Embed,
    /// Rank templates by similarity to a query
    Search {
        query: String,
        /// Maximum number of matches to show
        #[arg(long)]
        limit: Option<usize>,
        /// Similarity floor in [0, 1]
        #[arg(long)]
        min_similarity: Option<f32>,
    },
    /// Generate a WinCC script with retrieved templates as examples
    Ask {
        prompt: String,
        /// Print the assembled prompt instead of calling the server
        #[arg(long)]
        dry_run: bool,
    },
    /// Manage the template library
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },
    /// Import templates from an exported JSON file
    Import { file: PathBuf },
    /// Export all templates as JSON (to a file, or stdout)
    Export { file: Option<PathBuf> },
    /// Show library and corpus statistics
    Stats,
    /// Check corpus health and LLM endpoint reachability
    Doctor,
}

#[derive(Subcommand)]
enum TemplateAction {
    /// List templates by category
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Print one template in full
    Show { id: String },
    /// Create a custom template (code from --code-file, or stdin)
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        code_file: Option<PathBuf>,
    },
    /// Remove a custom template
    Remove { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = FaceplateConfig::load()?;

    // Log to stderr so stdout stays clean for exported JSON and scripts.
    let filter =
        EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Embed => cli::embed::embed(&config)?,
        Command::Search {
            query,
            limit,
            min_similarity,
        } => cli::search::search(&config, &query, limit, min_similarity)?,
        Command::Ask { prompt, dry_run } => {
            cli::ask::ask(&config, &prompt, dry_run).await?;
        }
        Command::Template { action } => match action {
            TemplateAction::List { category } => {
                cli::template::list(&config, category.as_deref())?;
            }
            TemplateAction::Show { id } => cli::template::show(&config, &id)?,
            TemplateAction::Add {
                title,
                description,
                category,
                code_file,
            } => cli::template::add(
                &config,
                &title,
                description.as_deref(),
                category.as_deref(),
                code_file.as_deref(),
            )?,
            TemplateAction::Remove { id } => cli::template::remove(&config, &id)?,
        },
        Command::Import { file } => cli::import::import(&config, &file)?,
        Command::Export { file } => cli::export::export(&config, file.as_deref())?,
        Command::Stats => cli::stats::stats(&config)?,
        Command::Doctor => cli::doctor::doctor(&config).await?,
    }

    Ok(())
}
