//! Article list rendering: index → articles → preview cards.
//!
//! One forward pass with two failure scopes:
//!
//! 1. **Index**: fetch and parse the index. Any failure here replaces the
//!    container content with setup instructions and ends the pass.
//! 2. **Per article**: fetch one article and build its preview. A failure is
//!    logged and the article skipped; siblings are unaffected.
//!
//! Articles are fetched one after another in sorted order, so the first
//! card in the container is always the newest article.

use crate::config::SiteConfig;
use crate::error::{ArticleLoadError, ConfigError, IndexLoadError, PageError};
use crate::extract::excerpt;
use crate::fetch::Fetch;
use crate::markup::{no_articles, preview_card, setup_instructions};
use crate::models::{ArticleMeta, ArticlePreview, parse_index};
use crate::page::{Container, HostPage};
use crate::utils::{format_publish_date, parse_publish_date, truncate_for_log};
use futures::stream::{self, StreamExt};
use scraper::Selector;
use std::cmp::Reverse;
use std::error::Error;
use std::pin::pin;
use tracing::{debug, error, info, instrument, warn};

/// Terminal state of one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    /// At least one preview was rendered.
    Rendered(usize),
    /// The index loaded but produced no renderable article.
    Empty,
    /// The index could not be fetched or parsed.
    IndexUnavailable,
}

#[derive(Debug)]
pub struct RenderOutcome {
    pub state: ListState,
    /// Previews in rendered order.
    pub previews: Vec<ArticlePreview>,
}

#[derive(Debug)]
pub struct ArticleListRenderer<F> {
    fetcher: F,
    config: SiteConfig,
    content_selector: Selector,
}

impl<F: Fetch> ArticleListRenderer<F> {
    pub fn new(fetcher: F, config: SiteConfig) -> Result<Self, ConfigError> {
        let content_selector = config.content_selector()?;
        Ok(Self {
            fetcher,
            config,
            content_selector,
        })
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Render the article list into `page`, if it has a container.
    ///
    /// Pages without the container element are left alone: `Ok(None)`,
    /// nothing fetched, nothing logged.
    pub async fn render_page(
        &self,
        page: &HostPage,
    ) -> Result<Option<(Container, RenderOutcome)>, PageError> {
        let id = &self.config.container_id;
        if !page.has_container(id)? {
            return Ok(None);
        }
        let mut container = page.container(id)?;
        let outcome = self.load_articles(&mut container).await;
        Ok(Some((container, outcome)))
    }

    /// Load the index and every article, filling `container` with the result.
    ///
    /// Never fails: index problems become the setup-instructions block and
    /// an empty result becomes the "no articles found" message.
    #[instrument(level = "info", skip_all)]
    pub async fn load_articles(&self, container: &mut Container) -> RenderOutcome {
        let root = &self.config.articles_root;
        let index_file = &self.config.index_file;

        match self.fill(container).await {
            Ok(previews) => {
                if container.is_empty() {
                    info!("No articles rendered");
                    container.replace_content(no_articles(root, index_file));
                    RenderOutcome {
                        state: ListState::Empty,
                        previews,
                    }
                } else {
                    info!(count = previews.len(), "Rendered article previews");
                    RenderOutcome {
                        state: ListState::Rendered(previews.len()),
                        previews,
                    }
                }
            }
            Err(e) => {
                container.replace_content(setup_instructions(root, index_file));
                let cause = e.source().map(|s| s.to_string()).unwrap_or_default();
                error!(error = %e, %cause, "Error loading articles");
                RenderOutcome {
                    state: ListState::IndexUnavailable,
                    previews: Vec::new(),
                }
            }
        }
    }

    async fn fill(&self, container: &mut Container) -> Result<Vec<ArticlePreview>, IndexLoadError> {
        let mut index = self.load_index().await?;
        sort_newest_first(&mut index);
        container.clear();

        let this = self;
        let mut results = pin!(stream::iter(index).then(move |meta| async move {
            this.load_preview(&meta).await
        }));

        let mut previews = Vec::new();
        while let Some(result) = results.next().await {
            match result {
                Ok(preview) => {
                    container.append(preview_card(&preview));
                    previews.push(preview);
                }
                Err(e) => {
                    warn!(
                        filename = %e.filename,
                        status = ?e.source.status(),
                        error = %e.source,
                        "Could not load article"
                    );
                }
            }
        }
        Ok(previews)
    }

    /// Fetch and parse the index resource.
    #[instrument(level = "info", skip_all)]
    pub async fn load_index(&self) -> Result<Vec<ArticleMeta>, IndexLoadError> {
        let path = self.config.index_path();
        let body = self
            .fetcher
            .fetch_text(&path)
            .await
            .map_err(IndexLoadError::Fetch)?;

        let index = parse_index(&body).map_err(|e| {
            debug!(%path, body_preview = %truncate_for_log(&body, 200), "Index body did not parse");
            IndexLoadError::Parse(e)
        })?;
        info!(%path, count = index.len(), "Loaded article index");
        Ok(index)
    }

    /// Fetch one article and derive its preview.
    #[instrument(level = "debug", skip_all, fields(filename = %meta.filename))]
    pub async fn load_preview(&self, meta: &ArticleMeta) -> Result<ArticlePreview, ArticleLoadError> {
        let href = self.config.article_path(&meta.filename);
        let body = self
            .fetcher
            .fetch_text(&href)
            .await
            .map_err(|source| ArticleLoadError {
                filename: meta.filename.clone(),
                source,
            })?;

        let excerpt = excerpt(&body, &self.content_selector, self.config.excerpt_chars);
        Ok(ArticlePreview {
            title: meta.title.clone(),
            author: meta.author.clone(),
            publish_date: format_publish_date(&meta.date),
            excerpt,
            filename: meta.filename.clone(),
            href,
        })
    }
}

/// Order the index newest first.
///
/// Stable: equal dates keep their index order. Dates that do not parse sort
/// after every parseable one.
pub fn sort_newest_first(index: &mut [ArticleMeta]) {
    index.sort_by_cached_key(|meta| Reverse(parse_publish_date(&meta.date)));
}
