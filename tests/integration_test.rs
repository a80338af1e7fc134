//! Integration tests for Dev Thoughts.
//!
//! Tests the responsive layout through the public API and full site
//! generation into a temporary output directory.

mod common;

use anyhow::Result;
use devthoughts::{
    LayoutVariant, LayoutWrapper, SiteMetadata, Viewport, generate_site, header, load_posts,
    select_layout,
};
use maud::html;
use std::cell::Cell;
use std::fs;
use tempfile::TempDir;

/// Tests every scenario width resolves to the expected variant.
#[test]
fn test_layout_scenarios() {
    // Arrange
    let cases = [
        (500, LayoutVariant::Narrow),
        (848, LayoutVariant::Narrow),
        (1024, LayoutVariant::Wide),
    ];

    for (width, expected) in cases {
        // Act
        let variant = select_layout(width);

        // Assert
        assert_eq!(variant, expected, "width {}", width);
    }
}

/// Tests the wrapper places content in a single slot and calls it once.
#[test]
fn test_wrapper_single_content_slot() {
    // Arrange
    let metadata = SiteMetadata::default_starter();
    let calls = Cell::new(0);

    // Act
    let html = LayoutWrapper::new(&metadata, Viewport::new(1024))
        .render(|| {
            calls.set(calls.get() + 1);
            html! { span.marker { "content" } }
        })
        .into_string();

    // Assert
    assert_eq!(calls.get(), 1);
    assert_eq!(html.matches(r#"class="marker""#).count(), 1);
    assert_eq!(html.matches(r#"class="layout-content""#).count(), 1);
    assert!(html.contains("flex: 2.5; padding-right: 30px;"));
}

/// Tests header markup is identical across layout variants.
#[test]
fn test_header_same_in_both_variants() {
    // Arrange
    let metadata = SiteMetadata::default_starter();
    let expected = header().into_string();

    for width in [320, 848, 849, 1920] {
        // Act
        let html = LayoutWrapper::new(&metadata, Viewport::new(width))
            .render(|| html! {})
            .into_string();

        // Assert
        assert!(html.contains(&expected), "width {}", width);
    }
}

/// Tests full site generation writes home, post pages and stylesheet.
#[test]
fn test_generate_site_writes_pages() -> Result<()> {
    // Arrange
    let content = common::create_content_dir(&[
        (
            "first-steps.md",
            "---\ntitle: First Steps\ndate: 2018-01-10\ndescription: Getting started\n---\nHello **world**.\n",
        ),
        (
            "closures.md",
            "---\ndate: 2018-02-20\n---\n# Closures\n\n```rust\nlet f = |x| x + 1;\n```\n",
        ),
        ("notes.txt", "not a post"),
    ])?;
    let output = TempDir::new()?;

    // Act
    let site = generate_site(
        content.path(),
        output.path(),
        &SiteMetadata::default_starter(),
        Viewport::new(1024),
    )?;

    // Assert
    assert_eq!(site.page_count(), 3);
    assert!(output.path().join("assets/site.css").exists());

    let index = fs::read_to_string(output.path().join("index.html"))?;
    let closures_pos = index.find("Closures").expect("closures listed");
    let first_pos = index.find("First Steps").expect("first steps listed");
    assert!(closures_pos < first_pos, "Newest post should come first");
    assert!(index.contains("Getting started"));
    assert!(index.contains("<title>Gatsby Default Starter</title>"));

    let post = fs::read_to_string(output.path().join("posts/closures/index.html"))?;
    assert!(post.contains(r#"<base href="../../">"#));
    assert!(post.contains("language-rust"));
    assert!(post.contains("layout-wide"));

    Ok(())
}

/// Tests narrow render width propagates to generated pages.
#[test]
fn test_generate_site_narrow_viewport() -> Result<()> {
    // Arrange
    let content = common::create_content_dir(&[("a.md", "# A\n")])?;
    let output = TempDir::new()?;

    // Act
    generate_site(
        content.path(),
        output.path(),
        &SiteMetadata::default_starter(),
        Viewport::new(848),
    )?;

    // Assert
    let index = fs::read_to_string(output.path().join("index.html"))?;
    let post = fs::read_to_string(output.path().join("posts/a/index.html"))?;
    assert!(index.contains("layout-narrow"));
    assert!(post.contains("layout-narrow"));
    assert!(!post.contains("padding-right"));

    Ok(())
}

/// Tests empty content directory yields only the home page.
#[test]
fn test_generate_site_empty_content() -> Result<()> {
    // Arrange
    let content = TempDir::new()?;
    let output = TempDir::new()?;

    // Act
    let site = generate_site(
        content.path(),
        output.path(),
        &SiteMetadata::default_starter(),
        Viewport::new(1024),
    )?;

    // Assert
    assert_eq!(site.page_count(), 1);
    assert!(site.posts.is_empty());
    let index = fs::read_to_string(&site.index)?;
    assert!(index.contains("No posts yet."));

    Ok(())
}

/// Tests malformed post dates abort generation with the file name.
#[test]
fn test_generate_site_bad_date_fails() -> Result<()> {
    // Arrange
    let content = common::create_content_dir(&[("broken.md", "---\ndate: someday\n---\n")])?;
    let output = TempDir::new()?;

    // Act
    let result = generate_site(
        content.path(),
        output.path(),
        &SiteMetadata::default_starter(),
        Viewport::new(1024),
    );

    // Assert
    let err = result.expect_err("Bad date should fail");
    assert!(format!("{:#}", err).contains("broken.md"));

    Ok(())
}

/// Tests posts that slugify to the same value are rejected.
#[test]
fn test_load_posts_duplicate_slug() -> Result<()> {
    // Arrange
    let content = common::create_content_dir(&[("Hello World.md", "a"), ("hello-world.md", "b")])?;

    // Act
    let result = load_posts(content.path());

    // Assert
    assert!(result.is_err(), "Duplicate slugs should be rejected");

    Ok(())
}

/// Tests subdirectories in the content directory are ignored.
#[test]
fn test_load_posts_ignores_subdirectories() -> Result<()> {
    // Arrange
    let content = common::create_content_dir(&[("top.md", "x"), ("drafts/nested.md", "y")])?;

    // Act
    let posts = load_posts(content.path())?;

    // Assert
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].slug, "top");

    Ok(())
}

/// Tests a narrow build still carries the wide rule for wider browsers.
#[test]
fn test_narrow_build_stylesheet_restores_wide_layout() -> Result<()> {
    // Arrange
    let content = common::create_content_dir(&[("a.md", "# A\n")])?;
    let output = TempDir::new()?;

    // Act
    generate_site(
        content.path(),
        output.path(),
        &SiteMetadata::default_starter(),
        Viewport::new(640),
    )?;

    // Assert
    let page = fs::read_to_string(output.path().join("posts/a/index.html"))?;
    assert!(page.contains(r#"class="layout-content" style="flex: 1;""#));

    let css = fs::read_to_string(output.path().join("assets/site.css"))?;
    let wide = &css[css
        .find("@media (min-width: 849px)")
        .expect("Stylesheet should restore wide layout above breakpoint")..];
    assert!(wide.contains("flex: 2.5 !important;"));
    assert!(wide.contains("padding-right: 30px !important;"));

    Ok(())
}
