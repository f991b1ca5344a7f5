//! Local directory site fetcher, for sites checked out on disk.

use crate::error::FetchError;
use crate::fetch::Fetch;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a site-relative path onto the directory.
    ///
    /// Absolute paths and `..` components are refused so a crafted index
    /// cannot read outside the site.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || path.is_empty() {
            return Err(FetchError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl Fetch for DirFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let file = self.resolve(path)?;
        match fs::read_to_string(&file).await {
            Ok(body) => {
                debug!(file = %file.display(), bytes = body.len(), "Read resource");
                Ok(body)
            }
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory) => {
                Err(FetchError::Status {
                    path: path.to_string(),
                    status: 404,
                })
            }
            Err(e) => Err(FetchError::Io {
                path: path.to_string(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "article_previews_dir_{}_{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(dir.join("articles")).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_reads_existing_file() {
        let dir = scratch_dir("read");
        std::fs::write(dir.join("articles/articles.json"), "[]").unwrap();

        let fetcher = DirFetcher::new(&dir);
        assert_eq!(fetcher.fetch_text("articles/articles.json").await.unwrap(), "[]");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = scratch_dir("missing");

        let fetcher = DirFetcher::new(&dir);
        let err = fetcher.fetch_text("articles/nope.html").await.unwrap_err();
        assert_eq!(err.status(), Some(404));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_resolve_refuses_escaping_paths() {
        let fetcher = DirFetcher::new("/srv/site");
        assert!(matches!(
            fetcher.resolve("articles/../../etc/passwd"),
            Err(FetchError::InvalidPath(_))
        ));
        assert!(matches!(fetcher.resolve("/etc/passwd"), Err(FetchError::InvalidPath(_))));
        assert!(matches!(fetcher.resolve(""), Err(FetchError::InvalidPath(_))));
        assert_eq!(
            fetcher.resolve("./articles/a.html").unwrap(),
            PathBuf::from("/srv/site/./articles/a.html")
        );
    }
}
