//! Viewport classification for the page layout.
//!
//! A page is laid out in one of two variants depending on the width of the
//! rendering surface. The decision is a pure function of the width and is
//! recomputed on every render; nothing is cached between passes.

use crate::style::{
    CONTAINER_PADDING, NARROW_BREAKPOINT, NARROW_FLEX, Style, WIDE_FLEX, WIDE_GUTTER, flex, px,
};

/// Class name carried by the content column in both layout variants.
///
/// The responsive stylesheet targets this class so a page rendered for one
/// width still re-flows when the browser viewport crosses the breakpoint.
pub const CONTENT_CLASS: &str = "layout-content";

/// Width-bounded media query.
///
/// Mirrors a `max-width` CSS media feature: a width matches when it is less
/// than or equal to the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaQuery {
    pub max_width: u32,
}

impl MediaQuery {
    /// Query used by the page layout.
    pub const LAYOUT: MediaQuery = MediaQuery {
        max_width: NARROW_BREAKPOINT,
    };

    /// Creates query matching widths up to and including `max_width`.
    pub const fn max_width(max_width: u32) -> Self {
        Self { max_width }
    }

    /// Returns true if the viewport width satisfies the query.
    pub fn matches(&self, width: u32) -> bool {
        width <= self.max_width
    }

    /// CSS media condition equivalent to this query.
    ///
    /// # Examples
    ///
    /// ```
    /// use devthoughts::MediaQuery;
    ///
    /// assert_eq!(MediaQuery::LAYOUT.to_css_condition(), "(max-width: 848px)");
    /// ```
    pub fn to_css_condition(&self) -> String {
        format!("(max-width: {})", px(self.max_width))
    }

    /// CSS media condition matching exactly the widths this query rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use devthoughts::MediaQuery;
    ///
    /// assert_eq!(MediaQuery::LAYOUT.to_css_min_condition(), "(min-width: 849px)");
    /// ```
    pub fn to_css_min_condition(&self) -> String {
        format!("(min-width: {})", px(self.max_width.saturating_add(1)))
    }
}

/// Rendering surface dimensions at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub const fn new(width: u32) -> Self {
        Self { width }
    }

    /// Layout variant for this viewport.
    pub fn layout(&self) -> LayoutVariant {
        select_layout(self.width)
    }
}

/// Layout branch chosen for a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutVariant {
    /// Content spans the full row with no reserved gutter.
    Narrow,
    /// Content takes a weighted share of the row with a trailing gutter.
    Wide,
}

impl LayoutVariant {
    /// Inline style of the content column for this variant.
    pub fn content_style(&self) -> Style {
        match self {
            LayoutVariant::Narrow => Style::new().set("flex", flex(NARROW_FLEX)),
            LayoutVariant::Wide => Style::new()
                .set("flex", flex(WIDE_FLEX))
                .px("padding-right", WIDE_GUTTER),
        }
    }

    /// Padding applied around the content column.
    ///
    /// Identical for both variants.
    pub fn container_padding(&self) -> u32 {
        CONTAINER_PADDING
    }

    /// Lowercase variant name used for CSS class modifiers.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutVariant::Narrow => "narrow",
            LayoutVariant::Wide => "wide",
        }
    }
}

/// Selects layout variant for a viewport width.
///
/// Widths up to and including the breakpoint resolve to
/// [`LayoutVariant::Narrow`]; anything wider resolves to
/// [`LayoutVariant::Wide`].
///
/// # Examples
///
/// ```
/// use devthoughts::{LayoutVariant, select_layout};
///
/// assert_eq!(select_layout(848), LayoutVariant::Narrow);
/// assert_eq!(select_layout(849), LayoutVariant::Wide);
/// ```
pub fn select_layout(width: u32) -> LayoutVariant {
    if MediaQuery::LAYOUT.matches(width) {
        LayoutVariant::Narrow
    } else {
        LayoutVariant::Wide
    }
}

/// Stylesheet rules applying each variant's styles on its side of the query.
///
/// Static pages carry the inline styles of the variant selected at build
/// time, so both directions are emitted: narrow styles under the layout
/// query, wide styles above it. Inline declarations win over stylesheet
/// rules, so every override is marked important.
pub fn responsive_css() -> String {
    let query = MediaQuery::LAYOUT;
    let mut css = variant_rule(&query.to_css_condition(), LayoutVariant::Narrow);
    css.push_str(&variant_rule(
        &query.to_css_min_condition(),
        LayoutVariant::Wide,
    ));
    css
}

fn variant_rule(condition: &str, variant: LayoutVariant) -> String {
    let mut css = format!("@media {} {{\n  .{} {{\n", condition, CONTENT_CLASS);
    let style = variant.content_style();
    for (property, value) in style.iter() {
        css.push_str(&format!("    {}: {} !important;\n", property, value));
    }
    if !style.contains("padding-right") {
        css.push_str("    padding-right: 0 !important;\n");
    }
    css.push_str("  }\n}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_layout_narrow_widths() {
        for width in [0, 1, 320, 500, 847, 848] {
            assert_eq!(
                select_layout(width),
                LayoutVariant::Narrow,
                "width {} should be narrow",
                width
            );
        }
    }

    #[test]
    fn test_select_layout_wide_widths() {
        for width in [849, 1024, 1920, u32::MAX] {
            assert_eq!(
                select_layout(width),
                LayoutVariant::Wide,
                "width {} should be wide",
                width
            );
        }
    }

    #[test]
    fn test_boundary_is_inclusive() {
        // Arrange
        let query = MediaQuery::LAYOUT;

        // Act & Assert
        assert!(query.matches(848));
        assert!(!query.matches(849));
    }

    #[test]
    fn test_custom_query_matches() {
        let query = MediaQuery::max_width(600);

        assert!(query.matches(600));
        assert!(!query.matches(601));
        assert_eq!(query.to_css_condition(), "(max-width: 600px)");
    }

    #[test]
    fn test_narrow_content_style() {
        // Arrange & Act
        let style = LayoutVariant::Narrow.content_style();

        // Assert
        assert_eq!(style.get("flex"), Some("1"));
        assert!(!style.contains("padding-right"), "narrow has no gutter");
        assert_eq!(LayoutVariant::Narrow.container_padding(), 25);
    }

    #[test]
    fn test_wide_content_style() {
        // Arrange & Act
        let style = LayoutVariant::Wide.content_style();

        // Assert
        assert_eq!(style.get("flex"), Some("2.5"));
        assert_eq!(style.get("padding-right"), Some("30px"));
        assert_eq!(LayoutVariant::Wide.container_padding(), 25);
    }

    #[test]
    fn test_viewport_layout_delegates() {
        assert_eq!(Viewport::new(500).layout(), LayoutVariant::Narrow);
        assert_eq!(Viewport::new(1024).layout(), LayoutVariant::Wide);
    }

    #[test]
    fn test_responsive_css_narrow_rule() {
        // Arrange & Act
        let css = responsive_css();

        // Assert
        let narrow = &css[..css.find("(min-width").expect("wide rule present")];
        assert!(narrow.starts_with("@media (max-width: 848px)"));
        assert!(narrow.contains(".layout-content"));
        assert!(narrow.contains("flex: 1 !important;"));
        assert!(narrow.contains("padding-right: 0 !important;"));
    }

    #[test]
    fn test_responsive_css_restores_wide_above_breakpoint() {
        // Arrange & Act
        let css = responsive_css();

        // Assert
        let wide = &css[css.find("@media (min-width: 849px)").expect("wide rule present")..];
        assert!(wide.contains(".layout-content"));
        assert!(wide.contains("flex: 2.5 !important;"));
        assert!(wide.contains("padding-right: 30px !important;"));
        assert!(!wide.contains("padding-right: 0"));
    }

    #[test]
    fn test_min_condition_complements_query() {
        let query = MediaQuery::max_width(600);

        assert_eq!(query.to_css_min_condition(), "(min-width: 601px)");
    }
}
