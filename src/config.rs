//! Site conventions: where the index and articles live, which element hosts
//! the list, and how excerpts are cut.
//!
//! Every key is optional. The defaults are the conventional layout of a
//! static site that lists its articles under `articles/`:
//!
//! ```yaml
//! articles_root: articles
//! index_file: articles.json
//! container_id: articles-list
//! content_selector: .content
//! excerpt_chars: 200
//! timeout_secs: 30
//! ```

use crate::error::ConfigError;
use scraper::Selector;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory (relative to the site) holding the index and article files.
    pub articles_root: String,
    /// File name of the index resource inside `articles_root`.
    pub index_file: String,
    /// Id of the container element in the host page.
    pub container_id: String,
    /// CSS selector of the content region inside an article.
    pub content_selector: String,
    /// Number of characters kept in an excerpt.
    pub excerpt_chars: usize,
    /// User-Agent header for HTTP sites.
    pub user_agent: Option<String>,
    /// Per-request timeout for HTTP sites.
    pub timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            articles_root: "articles".to_string(),
            index_file: "articles.json".to_string(),
            container_id: "articles-list".to_string(),
            content_selector: ".content".to_string(),
            excerpt_chars: 200,
            user_agent: None,
            timeout_secs: 30,
        }
    }
}

impl SiteConfig {
    /// Load a YAML config file, or the defaults when `path` is `None`.
    #[instrument(level = "info")]
    pub async fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config = Self::from_yaml(&raw)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        // An empty document deserialises to `null`, which means "all defaults".
        let config: Self = if raw.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(raw)?
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.container_id.is_empty() {
            return Err(ConfigError::Validation("container_id must not be empty".into()));
        }
        if self
            .container_id
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '\\')
        {
            return Err(ConfigError::Validation(format!(
                "container_id `{}` must not contain whitespace, quotes or backslashes",
                self.container_id
            )));
        }
        if self.index_file.trim().is_empty() {
            return Err(ConfigError::Validation("index_file must not be empty".into()));
        }
        self.content_selector()?;
        Ok(())
    }

    /// Compiled content-region selector.
    pub fn content_selector(&self) -> Result<Selector, ConfigError> {
        Selector::parse(&self.content_selector).map_err(|e| {
            ConfigError::Validation(format!(
                "content_selector `{}` is not a valid CSS selector: {}",
                self.content_selector, e
            ))
        })
    }

    /// Site-relative path of the index resource, e.g. `articles/articles.json`.
    pub fn index_path(&self) -> String {
        self.article_path(&self.index_file)
    }

    /// Site-relative path of an article (or any file) under the articles root.
    pub fn article_path(&self, filename: &str) -> String {
        let root = self.articles_root.trim_matches('/');
        if root.is_empty() {
            filename.to_string()
        } else {
            format!("{}/{}", root, filename)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
