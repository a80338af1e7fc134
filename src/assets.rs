//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::responsive::responsive_css;

const BASE: &str = include_str!("../assets/base.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// File name of the bundled stylesheet inside the assets directory.
pub const SITE_CSS: &str = "site.css";

/// Returns the bundled stylesheet contents.
///
/// The responsive rule is generated from the layout media query rather than
/// kept in a static file, so the browser breakpoint always matches the one
/// used when rendering.
pub fn site_css() -> String {
    let responsive = responsive_css();
    [BASE, MARKDOWN, responsive.as_str()].join("\n")
}

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;
    fs::write(assets_dir.join(SITE_CSS), site_css())
        .with_context(|| format!("Failed to write CSS asset: {}", SITE_CSS))?;
    Ok(())
}
