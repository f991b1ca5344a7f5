//! Data models for the article index and the previews derived from it.
//!
//! - [`ArticleMeta`]: one record of the index resource (`articles.json`)
//! - [`ArticlePreview`]: the condensed card rendered into the list
//!
//! Both are created fresh on every run and never written back to the site.

use serde::{Deserialize, Serialize};

/// One entry of the article index.
///
/// All four fields are required; extra keys in the JSON object are ignored.
/// No uniqueness is enforced on `filename`, duplicates render independently.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ArticleMeta {
    /// Path of the article document relative to the articles root.
    pub filename: String,
    /// Article title, rendered verbatim.
    pub title: String,
    /// Author name, rendered verbatim.
    pub author: String,
    /// Publish date as written by the site operator.
    pub date: String,
}

/// A preview card ready for rendering.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePreview {
    pub title: String,
    pub author: String,
    /// Long-form date such as `January 5, 2024`.
    pub publish_date: String,
    /// Text excerpt, always ending in `...`.
    pub excerpt: String,
    pub filename: String,
    /// Link target of the "Read more" anchor.
    pub href: String,
}

/// Parse the body of the index resource.
pub fn parse_index(body: &str) -> Result<Vec<ArticleMeta>, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        let json = r#"[
            {"filename": "first.html", "title": "First", "author": "Ann", "date": "2024-01-05"},
            {"filename": "second.html", "title": "Second", "author": "Bo", "date": "2024-02-01", "tags": ["x"]}
        ]"#;

        let index = parse_index(json).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index[0].filename, "first.html");
        assert_eq!(index[1].author, "Bo");
    }

    #[test]
    fn test_parse_index_empty() {
        assert!(parse_index("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_index_missing_field_fails() {
        let json = r#"[{"filename": "first.html", "title": "First", "author": "Ann"}]"#;
        assert!(parse_index(json).is_err());
    }

    #[test]
    fn test_parse_index_not_an_array_fails() {
        assert!(parse_index(r#"{"articles": []}"#).is_err());
        assert!(parse_index("<html>404</html>").is_err());
    }

    #[test]
    fn test_preview_serialization_uses_camel_case() {
        let preview = ArticlePreview {
            title: "First".to_string(),
            author: "Ann".to_string(),
            publish_date: "January 5, 2024".to_string(),
            excerpt: "Hello...".to_string(),
            filename: "first.html".to_string(),
            href: "articles/first.html".to_string(),
        };

        let json = serde_json::to_string(&preview).unwrap();
        assert!(json.contains(r#""publishDate":"January 5, 2024""#));
        assert!(json.contains(r#""href":"articles/first.html""#));
    }
}
