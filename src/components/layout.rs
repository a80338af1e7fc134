//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::header::header;
use super::metadata::{SiteMetadata, document_head};
use crate::responsive::{CONTENT_CLASS, LayoutVariant, Viewport};
use crate::style::{Style, row_container};

/// Wraps page content with document head, header and responsive container
///
/// Every page goes through this wrapper once per render. The viewport is
/// classified on each call and the content producer is invoked exactly once,
/// its output placed in the container of the selected variant.
#[derive(Debug, Clone)]
pub struct LayoutWrapper<'a> {
    metadata: &'a SiteMetadata,
    viewport: Viewport,
    depth: usize,
    stylesheets: &'a [&'a str],
}

impl<'a> LayoutWrapper<'a> {
    /// Creates wrapper for a page at the site root.
    ///
    /// # Arguments
    ///
    /// * `metadata`: Document metadata injected into the head
    /// * `viewport`: Viewport the page is rendered for
    pub fn new(metadata: &'a SiteMetadata, viewport: Viewport) -> Self {
        Self {
            metadata,
            viewport,
            depth: 0,
            stylesheets: &[],
        }
    }

    /// Sets directory depth of the page below the site root.
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Sets root-relative stylesheet paths linked from the head.
    pub fn stylesheets(mut self, stylesheets: &'a [&'a str]) -> Self {
        self.stylesheets = stylesheets;
        self
    }

    /// Layout variant this wrapper renders with.
    pub fn variant(&self) -> LayoutVariant {
        self.viewport.layout()
    }

    /// Renders complete HTML document around the produced content.
    ///
    /// # Arguments
    ///
    /// * `content`: Producer of the page body, invoked exactly once
    ///
    /// # Returns
    ///
    /// Complete HTML document
    pub fn render(&self, content: impl FnOnce() -> Markup) -> Markup {
        let variant = self.variant();

        html! {
            (DOCTYPE)
            html lang="en" {
                (document_head(self.metadata, self.depth, self.stylesheets))
                body {
                    div {
                        (header())
                        div style=(row_container().to_string()) {
                            (layout_container(variant, content()))
                        }
                    }
                }
            }
        }
    }
}

/// Inline style of the container wrapping the content column.
pub fn container_style(variant: LayoutVariant) -> Style {
    row_container().px("padding", variant.container_padding())
}

/// Renders the variant container holding a single content column.
///
/// Both variants share one tree; only the inline styles differ.
pub fn layout_container(variant: LayoutVariant, content: Markup) -> Markup {
    html! {
        div class=(format!("layout layout-{}", variant.name())) style=(container_style(variant).to_string()) {
            div class=(CONTENT_CLASS) style=(variant.content_style().to_string()) {
                (content)
            }
        }
    }
}
