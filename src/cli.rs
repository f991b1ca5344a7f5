//! Command-line interface definitions for article_previews.
//!
//! All arguments can be provided via command-line flags; the site can also
//! come from the environment.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Print the rendered list for a site checked out in ./public
/// article_previews --site ./public
///
/// # Render a live site's page into a file, plus a JSON dump of the previews
/// article_previews --site https://user.github.io/blog --page articles.html \
///     -o build/articles.html -j build/previews.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Site root: an http(s) base URL or a local directory
    #[arg(short, long, env = "ARTICLE_PREVIEWS_SITE", default_value = ".")]
    pub site: String,

    /// Host page, relative to the site root
    #[arg(short, long, default_value = "index.html")]
    pub page: String,

    /// Write the rendered page here instead of printing the list to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the rendered previews as JSON
    #[arg(short, long)]
    pub json_output: Option<PathBuf>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
