//! CLI command implementations

use anyhow::Context;
use clap::Subcommand;
use shutter_search::{PhotoSearchService, UnsplashConfig};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search Unsplash for photos
    Search {
        /// Search term
        query: String,
        /// Number of results per page
        #[arg(short, long, default_value = "80")]
        per_page: u32,
        /// Print the decoded response as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the given command.
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Search {
            query,
            per_page,
            json,
        } => search(&query, per_page, json).await,
    }
}

async fn search(query: &str, per_page: u32, json: bool) -> anyhow::Result<()> {
    let config = UnsplashConfig::from_env().context("loading Unsplash configuration")?;
    let service = PhotoSearchService::new(config);

    tracing::debug!(query, per_page, "issuing photo search");

    let response = service
        .search_with_limit(query, per_page)
        .await
        .with_context(|| format!("searching for '{query}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "{} results ({} pages) for '{}'",
        response.total, response.total_pages, query
    );
    for photo in &response.results {
        let label = photo
            .description
            .as_deref()
            .or(photo.alt_description.as_deref())
            .unwrap_or("(no description)");
        println!("  {}  {}x{}  {}", photo.id, photo.width, photo.height, label);
        println!("    {}", photo.urls.regular);
    }

    Ok(())
}
