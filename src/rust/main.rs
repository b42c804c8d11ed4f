use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use contextual::{reclassify, AppConfig, CategorizationStore, Categorizer};
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the categorization store
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Base URL of the Ollama server
    #[arg(long, global = true)]
    ollama_url: Option<String>,

    /// Model used for categorization
    #[arg(long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Categorize text with the language model
    Categorize {
        text: String,
        /// Persist the result for later reclassification
        #[arg(short, long)]
        save: bool,
    },
    /// Reclassify a tag set against stored categorizations
    Classify {
        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',', required = true)]
        tags: Vec<String>,
        /// Category to report when no stored entry is similar enough
        #[arg(short, long)]
        fallback: Option<String>,
    },
    /// Show the most recent categorizations
    Recent {
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Count stored categorizations
    Count,
    /// Delete a stored categorization
    Delete { id: u64 },
    /// Delete every stored categorization
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    contextual::init_logger();
    let args = Args::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(url) = args.ollama_url {
        config.categorizer.base_url = url;
    }
    if let Some(model) = args.model {
        config.categorizer.model = model;
    }

    let store = CategorizationStore::open(&config.data_dir)
        .with_context(|| format!("Failed to open store in {:?}", config.data_dir))?;
    info!("Using store at {:?}", store.path());

    match args.command {
        Command::Categorize { text, save } => {
            let start = Instant::now();
            let categorizer = Categorizer::new(&config.categorizer)?;
            let categorization = categorizer.categorize(&text).await?;
            info!("Categorization took {:.2?}", start.elapsed());

            println!("{}", serde_json::to_string_pretty(&categorization)?);
            if save {
                let id = store.insert(&text, &categorization).await?;
                println!("Saved as #{}", id);
            }
        }
        Command::Classify { tags, fallback } => {
            let outcome = reclassify(&store, config.knn, &tags, fallback.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Command::Recent { limit } => {
            let records = store.recent(limit).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Count => {
            println!("{}", store.count().await?);
        }
        Command::Delete { id } => {
            if store.delete(id).await? {
                println!("Deleted #{}", id);
            } else {
                anyhow::bail!("No categorization with id {}", id);
            }
        }
        Command::Clear => {
            let removed = store.clear().await?;
            println!("All categories deleted successfully ({} removed).", removed);
        }
    }

    Ok(())
}
