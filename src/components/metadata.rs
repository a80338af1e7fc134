//! Document head metadata

use maud::{Markup, html};

use super::nav::base_href;

/// Single `<meta name content>` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

impl MetaTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Site wide document metadata.
///
/// Passed explicitly to every render instead of living in global state.
/// Meta tags are emitted in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: String,
    pub meta: Vec<MetaTag>,
}

impl SiteMetadata {
    /// Metadata shipped with the blog.
    pub fn default_starter() -> Self {
        Self {
            title: "Gatsby Default Starter".to_string(),
            meta: vec![
                MetaTag::new("description", "Sample"),
                MetaTag::new("keywords", "sample, something"),
            ],
        }
    }
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self::default_starter()
    }
}

/// Renders document head
///
/// Emits charset and viewport declarations, the `<base>` element anchoring
/// relative links to the site root, the title, every meta pair, and the
/// stylesheet links.
///
/// # Arguments
///
/// * `metadata`: Site metadata record
/// * `depth`: Directory depth of the page below the site root
/// * `stylesheets`: Root-relative CSS paths
///
/// # Returns
///
/// `<head>` element markup
pub fn document_head(metadata: &SiteMetadata, depth: usize, stylesheets: &[&str]) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            base href=(base_href(depth));
            title { (metadata.title) }
            @for tag in &metadata.meta {
                meta name=(tag.name) content=(tag.content);
            }
            @for stylesheet in stylesheets {
                link rel="stylesheet" href=(stylesheet);
            }
        }
    }
}
