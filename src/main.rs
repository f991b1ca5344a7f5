//! # article_previews
//!
//! Renders the article list of a static site: reads the article index,
//! fetches every article, cuts a text excerpt from each and writes newest-first
//! preview cards into the host page's list container.
//!
//! ## Usage
//!
//! ```sh
//! article_previews --site ./public --page index.html -o public/index.html
//! ```
//!
//! ## Architecture
//!
//! One forward pass:
//! 1. **Gate**: read the host page; stop quietly if it has no `#articles-list`
//! 2. **Index**: fetch and parse `articles/articles.json`, sort newest first
//! 3. **Articles**: fetch each article in turn and build its preview card
//! 4. **Output**: write the page (or print the list) and optional JSON

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod extract;
mod fetch;
mod markup;
mod models;
mod outputs;
mod page;
mod render;
mod utils;

use cli::Cli;
use config::SiteConfig;
use fetch::{Fetch, SiteFetcher};
use outputs::{html, json};
use page::HostPage;
use render::{ArticleListRenderer, ListState};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!(version = env!("CARGO_PKG_VERSION"), "Welcome to article_previews");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = SiteConfig::load(args.config.as_deref()).await?;
    let fetcher = SiteFetcher::for_site(&args.site, &config)?;
    let renderer = ArticleListRenderer::new(fetcher, config)?;

    let page = HostPage::new(renderer.fetcher().fetch_text(&args.page).await?);

    let Some((container, outcome)) = renderer.render_page(&page).await? else {
        debug!(page = %args.page, "Host page has no article list container");
        return Ok(());
    };

    match &args.output {
        Some(path) => {
            html::write_page(&page, &renderer.config().container_id, &container, path).await?
        }
        None => html::print_container(&container).await?,
    }

    if let Some(path) = &args.json_output {
        if outcome.state == ListState::IndexUnavailable {
            debug!(path = %path.display(), "Index unavailable; skipping JSON output");
        } else {
            json::write_previews(&outcome.previews, path).await?;
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        state = ?outcome.state,
        previews = outcome.previews.len(),
        "Execution complete"
    );

    Ok(())
}
