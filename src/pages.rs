//! Page generation modules for different view types
//!
//! Each page module builds its body markup and hands it to the layout
//! wrapper as a content producer, so every page shares the same head,
//! header and responsive container.

pub mod index;
pub mod post;

use crate::components::metadata::SiteMetadata;
use crate::responsive::Viewport;

/// Root-relative path of the bundled stylesheet.
pub const STYLESHEET: &str = "assets/site.css";

/// Inputs shared by every page render.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub metadata: &'a SiteMetadata,
    pub viewport: Viewport,
}

impl<'a> PageContext<'a> {
    pub fn new(metadata: &'a SiteMetadata, viewport: Viewport) -> Self {
        Self { metadata, viewport }
    }
}
