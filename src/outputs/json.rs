//! JSON output of the rendered previews.
//!
//! The file is a pretty-printed array in rendered (newest-first) order:
//!
//! ```json
//! [
//!   {
//!     "title": "Hello",
//!     "author": "Ann",
//!     "publishDate": "January 5, 2024",
//!     "excerpt": "First words...",
//!     "filename": "hello.html",
//!     "href": "articles/hello.html"
//!   }
//! ]
//! ```

use crate::models::ArticlePreview;
use crate::utils::ensure_parent_dir;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `previews` to `path`, creating parent directories as needed.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = previews.len()))]
pub async fn write_previews(previews: &[ArticlePreview], path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(previews)?;

    if let Err(e) = ensure_parent_dir(path).await {
        error!(error = %e, "Failed to create JSON output dir");
        return Err(e);
    }

    fs::write(path, json).await?;
    info!("Wrote previews JSON");
    Ok(())
}
