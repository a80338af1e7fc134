//! Site header component

use maud::{Markup, html};

use super::nav::NavLink;
use crate::style::{CONTENT_MAX_WIDTH, Style};

/// Blog title shown in the header.
pub const SITE_TITLE: &str = "Dev Thoughts";

/// Subtitle shown below the title.
pub const SITE_SUBTITLE: &str =
    "Snippets and Things from my Software Development Learning Experience";

fn band_style() -> Style {
    Style::new()
        .set("background", "#f5f5f5")
        .set("margin-bottom", "3rem")
        .set("border-bottom", "2px solid #e6e6e6")
}

fn inner_style() -> Style {
    Style::new()
        .set("margin", "0 auto")
        .px("max-width", CONTENT_MAX_WIDTH)
        .set("padding", "1.45rem 1.0875rem")
}

fn heading_style() -> Style {
    Style::new()
        .set("margin", "0")
        .set("text-align", "center")
        .set("font-size", "18px")
}

fn link_style() -> Style {
    Style::new()
        .set("color", "black")
        .set("text-decoration", "none")
}

/// Renders the site header
///
/// Full width band with a centered heading linking back to the home page.
/// Takes no inputs; output is identical on every page.
pub fn header() -> Markup {
    html! {
        div class="site-header" style=(band_style().to_string()) {
            div style=(inner_style().to_string()) {
                h1 style=(heading_style().to_string()) {
                    (NavLink::home().render(&link_style().to_string(), html! {
                        h2 { " " (SITE_TITLE) " " }
                        br;
                        (SITE_SUBTITLE)
                    }))
                }
            }
        }
    }
}
