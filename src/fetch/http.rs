//! HTTP(S) site fetcher.
//!
//! Resource paths are resolved against the site's base URL, so a site
//! published under a sub-path (`https://user.github.io/blog/`) resolves
//! `articles/articles.json` to `https://user.github.io/blog/articles/articles.json`.

use crate::config::SiteConfig;
use crate::error::FetchError;
use crate::fetch::Fetch;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, instrument};
use url::Url;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    /// Build a fetcher for `site`.
    ///
    /// A base URL without a trailing slash gets one, so that relative paths
    /// land under it instead of replacing its last segment.
    pub fn new(site: &str, config: &SiteConfig) -> Result<Self, Box<dyn Error>> {
        let base = base_url(site)?;
        let mut builder = Client::builder().timeout(config.timeout());
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        Ok(Self {
            client: builder.build()?,
            base,
        })
    }

    /// Absolute URL of a site-relative path.
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.base
            .join(path)
            .map_err(|_| FetchError::InvalidPath(path.to_string()))
    }
}

fn base_url(site: &str) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(site)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

impl Fetch for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.resolve(path)?;
        let transport = |source| FetchError::Transport {
            path: path.to_string(),
            source,
        };

        let response = self.client.get(url.clone()).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await.map_err(transport)?;
        debug!(%url, bytes = body.len(), "Fetched resource");
        Ok(body)
    }
}
