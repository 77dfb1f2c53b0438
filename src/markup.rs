//! Minimal meta-tag extraction for markup content.
//!
//! The document handler only needs to find a `<meta>` element by its
//! `name` attribute and return its `content` attribute. A full HTML parser
//! would be overkill for that; a data-driven attribute scan is enough, and
//! the content is never executed.

use std::sync::OnceLock;

use regex::Regex;

fn meta_tag() -> &'static Regex {
    static META_TAG: OnceLock<Regex> = OnceLock::new();
    META_TAG.get_or_init(|| Regex::new(r"(?is)<meta\b[^>]*>").unwrap())
}

fn attribute() -> &'static Regex {
    static ATTRIBUTE: OnceLock<Regex> = OnceLock::new();
    ATTRIBUTE.get_or_init(|| Regex::new(r#"(?is)([a-z-]+)\s*=\s*"([^"]*)""#).unwrap())
}

/// Return the `content` attribute of the first `<meta>` tag whose `name`
/// attribute equals `name`, or `None` if no such tag exists.
pub fn meta_content(markup: &str, name: &str) -> Option<String> {
    for tag in meta_tag().find_iter(markup) {
        let mut tag_name = None;
        let mut content = None;
        for cap in attribute().captures_iter(tag.as_str()) {
            match cap[1].to_ascii_lowercase().as_str() {
                "name" => tag_name = Some(cap[2].to_string()),
                "content" => content = Some(cap[2].to_string()),
                _ => {}
            }
        }
        if tag_name.as_deref() == Some(name) {
            return content;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_named_meta_tag() {
        let markup = r#"<html><head><meta name="examine" content="A rusty key."></head></html>"#;
        assert_eq!(
            meta_content(markup, "examine").as_deref(),
            Some("A rusty key.")
        );
    }

    #[test]
    fn test_attribute_order_does_not_matter() {
        let markup = r#"<meta content="An old door." name="description">"#;
        assert_eq!(
            meta_content(markup, "description").as_deref(),
            Some("An old door.")
        );
    }

    #[test]
    fn test_skips_unrelated_meta_tags() {
        let markup = r#"<meta charset="utf-8"><meta name="examine" content="A lantern.">"#;
        assert_eq!(
            meta_content(markup, "examine").as_deref(),
            Some("A lantern.")
        );
    }

    #[test]
    fn test_missing_tag_is_none() {
        let markup = "<html><body>nothing here</body></html>";
        assert!(meta_content(markup, "examine").is_none());
    }

    #[test]
    fn test_tag_without_content_is_none() {
        let markup = r#"<meta name="examine">"#;
        assert!(meta_content(markup, "examine").is_none());
    }
}
