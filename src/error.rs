//! Error taxonomy for loading and rendering the article list.
//!
//! Only start-up problems ([`ConfigError`], [`PageError`], I/O on outputs)
//! ever leave the process as errors. [`IndexLoadError`] and
//! [`ArticleLoadError`] are caught inside the renderer and turned into page
//! content and log lines.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a resource from the site.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The resource answered with a non-success status (404 for a missing file).
    #[error("request for `{path}` failed with status {status}")]
    Status { path: String, status: u16 },

    #[error("request for `{path}` failed")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read `{path}`")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{0}` is not a valid resource path for this site")]
    InvalidPath(String),
}

impl FetchError {
    /// HTTP-style status code when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The index resource could not be fetched or parsed.
#[derive(Debug, Error)]
pub enum IndexLoadError {
    #[error("could not load articles metadata")]
    Fetch(#[source] FetchError),

    #[error("articles metadata is not a valid index")]
    Parse(#[source] serde_json::Error),
}

/// A single article could not be fetched; the item is skipped.
#[derive(Debug, Error)]
#[error("could not load article `{filename}`")]
pub struct ArticleLoadError {
    pub filename: String,
    #[source]
    pub source: FetchError,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Problems locating or rewriting the container inside the host page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no element with id `{0}` in the host page")]
    MissingContainer(String),

    #[error("could not rewrite the host page")]
    Rewrite(#[from] lol_html::errors::RewritingError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_fetch_error_status() {
        let e = FetchError::Status {
            path: "articles/articles.json".to_string(),
            status: 404,
        };
        assert_eq!(e.status(), Some(404));
        assert!(e.to_string().contains("404"));
        assert_eq!(FetchError::InvalidPath("../x".to_string()).status(), None);
    }

    #[test]
    fn test_article_load_error_keeps_cause() {
        let e = ArticleLoadError {
            filename: "first.html".to_string(),
            source: FetchError::Status {
                path: "articles/first.html".to_string(),
                status: 500,
            },
        };
        assert_eq!(e.to_string(), "could not load article `first.html`");
        assert!(e.source().is_some());
    }
}
