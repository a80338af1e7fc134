//! Inline style records and shared layout constants.
//!
//! Components describe their inline styles as ordered property lists so the
//! same value can be inspected in tests and rendered into a `style`
//! attribute. Numeric lengths follow the convention of unitless values
//! meaning pixels.

use std::fmt;

/// Maximum width of the centered content column in pixels.
pub const CONTENT_MAX_WIDTH: u32 = 980;

/// Viewport width at or below which the narrow layout applies.
pub const NARROW_BREAKPOINT: u32 = 848;

/// Padding around the page content container in pixels.
pub const CONTAINER_PADDING: u32 = 25;

/// Trailing gutter reserved to the right of content in the wide layout.
pub const WIDE_GUTTER: u32 = 30;

/// Flex weight of the content column in the narrow layout.
pub const NARROW_FLEX: f32 = 1.0;

/// Flex weight of the content column in the wide layout.
pub const WIDE_FLEX: f32 = 2.5;

/// Ordered set of CSS declarations.
///
/// Declaration order is preserved and setting an existing property replaces
/// its value in place, so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    declarations: Vec<(&'static str, String)>,
}

impl Style {
    /// Creates empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a declaration, replacing any previous value for the property.
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Sets a pixel length declaration.
    pub fn px(self, property: &'static str, value: u32) -> Self {
        self.set(property, px(value))
    }

    /// Returns the value for a property, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the property is declared.
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Iterates declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}

/// Formats a pixel length.
pub fn px(value: u32) -> String {
    format!("{}px", value)
}

/// Formats a flex weight without trailing zeros.
pub fn flex(weight: f32) -> String {
    if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}

/// Outer row shared by both layout branches.
///
/// Centers the content column up to [`CONTENT_MAX_WIDTH`] and lays children
/// out horizontally.
pub fn row_container() -> Style {
    Style::new()
        .set("margin", "0 auto")
        .px("max-width", CONTENT_MAX_WIDTH)
        .set("display", "flex")
        .set("flex-direction", "row")
        .set("justify-content", "space-between")
        .set("height", "100%")
}
