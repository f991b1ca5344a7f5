//! HTML produced for the article list container.
//!
//! Text values (titles, authors, excerpts) are escaped by `maud`, so the
//! reader sees exactly the characters written in the index and articles.

use crate::models::ArticlePreview;
use maud::{Markup, html};

/// One preview card.
///
/// ```html
/// <div class="article">
///   <h3>Title</h3>
///   <div class="meta">Published: January 5, 2024 | By: Author</div>
///   <div class="content">Excerpt...</div>
///   <a href="articles/file.html" class="read-more">Read more</a>
/// </div>
/// ```
pub fn preview_card(preview: &ArticlePreview) -> Markup {
    html! {
        div.article {
            h3 { (preview.title) }
            div.meta { "Published: " (preview.publish_date) " | By: " (preview.author) }
            div.content { (preview.excerpt) }
            a.read-more href=(preview.href) { "Read more" }
        }
    }
}

/// Shown when the index loaded but nothing could be rendered.
pub fn no_articles(articles_root: &str, index_file: &str) -> Markup {
    html! {
        p {
            "No articles found. Add some articles to the /" (articles_root)
            " folder and update " (index_file) "!"
        }
    }
}

/// Shown when the index itself could not be loaded.
pub fn setup_instructions(articles_root: &str, index_file: &str) -> Markup {
    html! {
        p { "Unable to load articles. Make sure you have:" }
        ul {
            li { "Created an " code { (index_file) } " file in the " (articles_root) " folder" }
            li { "Added your article HTML files to the " (articles_root) " folder" }
            li { "Updated the metadata in " code { (index_file) } }
        }
    }
}
