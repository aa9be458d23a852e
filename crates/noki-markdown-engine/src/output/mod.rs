//! Presentation of rendered [`Node`](crate::Node) trees.
//!
//! - **`html`**: escaped HTML fragment
//! - **`plain`**: text with every structural marker removed

pub mod html;
pub mod plain;

use crate::parsing::blocks::ListMarker;

/// Display settings shared by the output formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Glyph shown for `-` and `*` list items.
    pub bullet: String,
}

impl RenderOptions {
    pub fn marker_text<'a>(&'a self, marker: &'a ListMarker) -> &'a str {
        match marker {
            ListMarker::Ordered(n) => n,
            ListMarker::Bullet => &self.bullet,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bullet: ListMarker::BULLET_GLYPH.to_string(),
        }
    }
}
