//! Fetch capability: resolve a site-relative path to a text body.
//!
//! A site is either served over HTTP(S) or sits in a local directory:
//!
//! | Site | Module | Missing resource |
//! |------|--------|------------------|
//! | `https://example.org/blog/` | [`http`] | status from the server |
//! | `./public` | [`dir`] | status 404 |
//!
//! Callers await one request at a time; nothing here fans out.

pub mod dir;
pub mod http;

use crate::config::SiteConfig;
use crate::error::FetchError;
use std::error::Error;

pub use dir::DirFetcher;
pub use http::HttpFetcher;

/// Source of site resources.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    /// Fetch `path` (relative to the site root) and return its body as text.
    ///
    /// A non-success response is an error, never an empty body.
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

/// The fetcher selected by the `--site` argument.
#[derive(Debug)]
pub enum SiteFetcher {
    Http(HttpFetcher),
    Dir(DirFetcher),
}

impl SiteFetcher {
    /// `http://` and `https://` sites are fetched over the network, anything
    /// else is treated as a local directory.
    pub fn for_site(site: &str, config: &SiteConfig) -> Result<Self, Box<dyn Error>> {
        let lower = site.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(SiteFetcher::Http(HttpFetcher::new(site, config)?))
        } else {
            Ok(SiteFetcher::Dir(DirFetcher::new(site)))
        }
    }
}

impl Fetch for SiteFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        match self {
            SiteFetcher::Http(f) => f.fetch_text(path).await,
            SiteFetcher::Dir(f) => f.fetch_text(path).await,
        }
    }
}
