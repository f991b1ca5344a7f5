//! The host page and the container element the article list renders into.
//!
//! [`HostPage`] finds the container and rewrites its content with
//! `lol_html`, so comments, `<script>` bodies and other raw text are
//! tokenised the way a browser does. Only the container's inner content
//! changes; every other byte of the page is written back untouched.
//!
//! When several elements share the container id, the first one in document
//! order is the container.
//!
//! [`Container`] is the in-memory stand-in for that element while the list
//! is being built.

use crate::error::PageError;
use lol_html::html_content::ContentType;
use lol_html::{RewriteStrSettings, element, rewrite_str};
use maud::{Markup, PreEscaped};
use std::mem;
use tracing::debug;

const START_MARK: &str = "<!--article-previews:container-start-->";
const END_MARK: &str = "<!--article-previews:container-end-->";

fn container_selector(id: &str) -> String {
    format!("[id=\"{}\"]", id)
}

#[derive(Debug, Clone)]
pub struct HostPage {
    source: String,
}

impl HostPage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Whether the page holds an element whose id is `id`.
    pub fn has_container(&self, id: &str) -> Result<bool, PageError> {
        let mut found = false;
        rewrite_str(
            &self.source,
            RewriteStrSettings {
                element_content_handlers: vec![element!(container_selector(id), |_el| {
                    found = true;
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )?;
        Ok(found)
    }

    /// The container element, initialised with its current content.
    pub fn container(&self, id: &str) -> Result<Container, PageError> {
        let mut first = true;
        let marked = rewrite_str(
            &self.source,
            RewriteStrSettings {
                element_content_handlers: vec![element!(container_selector(id), |el| {
                    if mem::take(&mut first) {
                        el.prepend(START_MARK, ContentType::Html);
                        el.append(END_MARK, ContentType::Html);
                    }
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )?;

        let start = marked
            .find(START_MARK)
            .ok_or_else(|| PageError::MissingContainer(id.to_string()))?
            + START_MARK.len();
        // No end mark when the container's end tag is implied by end of input.
        let end = marked[start..]
            .find(END_MARK)
            .map_or(marked.len(), |offset| start + offset);
        debug!(start, end, "Located container");
        Ok(Container::with_existing(&marked[start..end]))
    }

    /// Page source with the container's content replaced by `inner_html`.
    pub fn with_container_html(&self, id: &str, inner_html: &str) -> Result<String, PageError> {
        let mut found = false;
        let out = rewrite_str(
            &self.source,
            RewriteStrSettings {
                element_content_handlers: vec![element!(container_selector(id), |el| {
                    if !found {
                        found = true;
                        el.set_inner_content(inner_html, ContentType::Html);
                    }
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )?;

        if !found {
            return Err(PageError::MissingContainer(id.to_string()));
        }
        Ok(out)
    }
}

/// Children of the container element.
#[derive(Debug, Clone, Default)]
pub struct Container {
    children: Vec<Markup>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Container whose current content is the given (already serialised) HTML.
    pub fn with_existing(inner_html: &str) -> Self {
        let mut container = Self::new();
        if !inner_html.trim().is_empty() {
            container.append(PreEscaped(inner_html.to_string()));
        }
        container
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, child: Markup) {
        self.children.push(child);
    }

    /// Drop every child and make `content` the only one.
    pub fn replace_content(&mut self, content: Markup) {
        self.children.clear();
        self.children.push(content);
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn inner_html(&self) -> String {
        self.children.iter().map(|child| child.0.as_str()).collect()
    }
}
