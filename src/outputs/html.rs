//! Page output: the host page with its container filled in.

use crate::page::{Container, HostPage};
use crate::utils::ensure_parent_dir;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

/// Write the page with the container content replaced.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_page(
    page: &HostPage,
    container_id: &str,
    container: &Container,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let html = page.with_container_html(container_id, &container.inner_html())?;
    ensure_parent_dir(path).await?;
    fs::write(path, html).await?;
    info!(children = container.child_count(), "Wrote rendered page");
    Ok(())
}

/// Print the container content to stdout.
pub async fn print_container(container: &Container) -> Result<(), Box<dyn Error>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(container.inner_html().as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}
