//! Element kinds and their tag names.

use super::PathCursor;

/// The closed set of element kinds.
///
/// The kind is fixed when an element is created and decides the tag it
/// serializes as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementKind {
    /// Root container, `<svg>`
    Svg,
    /// Grouping container, `<g>`
    Group,
    Rect,
    Circle,
    /// Straight segment between `(x1, y1)` and `(x2, y2)`
    Line,
    /// Label rendered with inline content
    Text,
    /// Path built from move/line commands; carries its drawing cursor
    Path(PathCursor),
}

impl ElementKind {
    /// Returns the markup tag name for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Group => "g",
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Line => "line",
            Self::Text => "text",
            Self::Path(_) => "path",
        }
    }
}
