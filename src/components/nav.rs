//! Internal navigation links

use maud::{Markup, html};

/// Navigation target inside the generated site.
///
/// Targets are written as site-absolute paths (`/`, `/posts/slug/`) and
/// resolved to hrefs relative to the site root. Every page declares its root
/// through a `<base>` element (see [`base_href`]), so a resolved href is
/// valid from any page depth and from a `file://` preview alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    path: String,
}

impl NavLink {
    /// Creates link to a site-absolute path.
    pub fn to(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Link to the site home page.
    pub fn home() -> Self {
        Self::to("/")
    }

    /// Site-absolute path this link targets.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Resolves target into a root-relative href.
    ///
    /// Directory targets (trailing slash) resolve to their `index.html`.
    ///
    /// # Examples
    ///
    /// ```
    /// use devthoughts::components::nav::NavLink;
    ///
    /// assert_eq!(NavLink::home().href(), "index.html");
    /// assert_eq!(NavLink::to("/posts/hello/").href(), "posts/hello/index.html");
    /// ```
    pub fn href(&self) -> String {
        let trimmed = self.path.trim_start_matches('/');
        if trimmed.is_empty() {
            "index.html".to_string()
        } else if trimmed.ends_with('/') {
            format!("{}index.html", trimmed)
        } else {
            trimmed.to_string()
        }
    }

    /// Renders anchor wrapping the given markup.
    pub fn render(&self, style: &str, body: Markup) -> Markup {
        html! {
            a href=(self.href()) style=(style) { (body) }
        }
    }
}

/// Returns `<base>` href for a page `depth` directories below the site root.
pub fn base_href(depth: usize) -> String {
    if depth == 0 {
        "./".to_string()
    } else {
        "../".repeat(depth)
    }
}
