//! Whole site generation.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_css_assets;
use crate::components::metadata::SiteMetadata;
use crate::markdown::MarkdownRenderer;
use crate::pages::{self, PageContext};
use crate::posts::load_posts;
use crate::responsive::Viewport;

/// Files written by a generation run.
#[derive(Debug, Clone, Default)]
pub struct GeneratedSite {
    pub index: PathBuf,
    pub posts: Vec<PathBuf>,
}

impl GeneratedSite {
    /// Total number of HTML pages written.
    pub fn page_count(&self) -> usize {
        self.posts.len() + 1
    }
}

/// Generates the blog into an output directory.
///
/// Loads posts from `content`, writes the stylesheet, one page per post
/// and the home page. Every page is rendered for the same viewport.
///
/// # Arguments
///
/// * `content`: Directory with markdown posts
/// * `output`: Output directory, created if missing
/// * `metadata`: Document metadata for every page
/// * `viewport`: Viewport the static pages are laid out for
///
/// # Errors
///
/// Returns error if posts cannot be loaded or rendered, or any file write
/// fails
///
/// # Examples
///
/// ```no_run
/// use devthoughts::{SiteMetadata, Viewport, generate_site};
/// use std::path::Path;
///
/// let site = generate_site(
///     Path::new("content"),
///     Path::new("dist"),
///     &SiteMetadata::default_starter(),
///     Viewport::new(1024),
/// )?;
/// println!("{} pages", site.page_count());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_site(
    content: &Path,
    output: &Path,
    metadata: &SiteMetadata,
    viewport: Viewport,
) -> Result<GeneratedSite> {
    let posts = load_posts(content).context("Failed to load posts")?;
    tracing::debug!(
        "Loaded {} posts, layout {}",
        posts.len(),
        viewport.layout().name()
    );

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    write_css_assets(&output.join("assets")).context("Failed to write CSS assets")?;

    let ctx = PageContext::new(metadata, viewport);
    let renderer = MarkdownRenderer::new();
    let mut site = GeneratedSite::default();

    for post in &posts {
        let html = pages::post::generate(ctx, post, &renderer)?;
        let path = output.join("posts").join(&post.slug).join("index.html");
        write_page(&path, html)?;
        site.posts.push(path);
    }

    let index = output.join("index.html");
    write_page(&index, pages::index::generate(ctx, &posts))?;
    site.index = index;

    Ok(site)
}

fn write_page(path: &Path, html: Markup) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, html.into_string())
        .with_context(|| format!("Failed to write page to {}", path.display()))?;
    tracing::info!("Generated: {}", path.display());
    Ok(())
}
