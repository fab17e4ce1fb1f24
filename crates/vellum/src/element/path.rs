//! Path drawing commands.
//!
//! Path elements accumulate SVG path commands in their `d` attribute. The
//! start of the current subpath is kept in a [`PathCursor`] so that
//! [`Element::close_path`] can draw back to it.

use log::debug;

use vellum_core::geometry::Point;

use super::{Element, ElementKind};
use crate::error::VellumError;

/// Drawing state of a path element. Not serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathCursor {
    start: Option<Point>,
}

impl PathCursor {
    /// Start of the current subpath, if one has been started.
    pub fn start(&self) -> Option<Point> {
        self.start
    }
}

impl Element {
    fn path_cursor_mut(&mut self, operation: &'static str) -> Result<&mut PathCursor, VellumError> {
        let tag = self.tag();
        match &mut self.kind {
            ElementKind::Path(cursor) => Ok(cursor),
            _ => Err(VellumError::UnsupportedOperation { operation, tag }),
        }
    }

    /// Starts a new subpath at `(x, y)`.
    ///
    /// Earlier commands are kept; the new start point is what
    /// [`Element::close_path`] returns to.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::UnsupportedOperation`] on non-path elements.
    pub fn move_to(&mut self, x: f32, y: f32) -> Result<&mut Self, VellumError> {
        self.path_cursor_mut("move_to")?.start = Some(Point::new(x, y));

        let data = match self.attribute("d") {
            Some(existing) => format!("{existing} M {x} {y}"),
            None => format!("M {x} {y}"),
        };
        self.set_attribute("d", data);

        Ok(self)
    }

    /// Draws a straight line to `(x, y)`.
    ///
    /// On a path with no commands yet this behaves like [`Element::move_to`].
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::UnsupportedOperation`] on non-path elements.
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::Element;
    ///
    /// let mut triangle = Element::path();
    /// triangle
    ///     .line_to(0.0, 0.0)?
    ///     .line_to(10.0, 0.0)?
    ///     .line_to(5.0, 8.0)?
    ///     .close_path()?;
    ///
    /// assert_eq!(triangle.attribute("d"), Some("M 0 0 L 10 0 L 5 8 L 0 0"));
    /// # Ok::<(), vellum::VellumError>(())
    /// ```
    pub fn line_to(&mut self, x: f32, y: f32) -> Result<&mut Self, VellumError> {
        self.path_cursor_mut("line_to")?;

        let Some(existing) = self.attribute("d") else {
            return self.move_to(x, y);
        };

        let data = format!("{existing} L {x} {y}");
        self.set_attribute("d", data);

        Ok(self)
    }

    pub fn line_to_point(&mut self, point: Point) -> Result<&mut Self, VellumError> {
        self.line_to(point.x(), point.y())
    }

    /// Draws a line back to the start of the current subpath.
    ///
    /// Does nothing on a path that has not been started.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::UnsupportedOperation`] on non-path elements.
    pub fn close_path(&mut self) -> Result<&mut Self, VellumError> {
        let start = self.path_cursor_mut("close_path")?.start;
        let Some(start) = start else {
            debug!("close_path on an empty path, nothing to close");
            return Ok(self);
        };

        self.line_to_point(start)
    }
}
