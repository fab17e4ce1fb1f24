//! Geometric primitives for positioning elements.
//!
//! This module provides the two geometric types the element tree needs:
//!
//! - [`Point`] - A 2D coordinate in document space
//! - [`Segment`] - A straight line between two points, with length, slope,
//!   extents and along-the-segment placement
//!
//! # Coordinate System
//!
//! Vellum uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! A segment whose start has a larger `y` than its end therefore points
//! "up" on screen; [`Segment::along`] only cares about the direction from
//! start to end, not about the screen orientation.

/// A 2D point representing a position in document coordinate space.
///
/// # Examples
///
/// ```
/// # use vellum_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// A straight line segment from a start point to an end point.
///
/// Segments are plain values: every accessor is computed from the two
/// endpoints and nothing is cached.
///
/// # Examples
///
/// ```
/// # use vellum_core::geometry::{Point, Segment};
/// let segment = Segment::new(0.0, 0.0, 10.0, 0.0);
/// assert_eq!(segment.length(), 10.0);
/// assert_eq!(segment.along(0.5), Point::new(5.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    /// Creates a segment from its four endpoint coordinates
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

    /// Creates a segment between two points
    pub fn from_points(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn start(self) -> Point {
        self.start
    }

    pub fn end(self) -> Point {
        self.end
    }

    pub fn x1(self) -> f32 {
        self.start.x
    }

    pub fn y1(self) -> f32 {
        self.start.y
    }

    pub fn x2(self) -> f32 {
        self.end.x
    }

    pub fn y2(self) -> f32 {
        self.end.y
    }

    /// Returns true when both endpoints share the same x-coordinate
    pub fn is_vertical(self) -> bool {
        self.start.x == self.end.x
    }

    /// Returns true when both endpoints coincide
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// Euclidean distance between the endpoints
    pub fn length(self) -> f32 {
        self.width().hypot(self.height())
    }

    /// Rise over run, or `None` for vertical segments.
    pub fn slope(self) -> Option<f32> {
        if self.is_vertical() {
            return None;
        }
        Some((self.end.y - self.start.y) / (self.end.x - self.start.x))
    }

    /// Absolute horizontal extent between the endpoints
    pub fn width(self) -> f32 {
        (self.end.x - self.start.x).abs()
    }

    /// Absolute vertical extent between the endpoints
    pub fn height(self) -> f32 {
        (self.end.y - self.start.y).abs()
    }

    pub fn midpoint(self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Returns the point at `fraction` of the segment's length, measured
    /// from the start point.
    ///
    /// `0.0` is the start, `1.0` the end; values outside `[0, 1]` extrapolate
    /// along the same line before the start or beyond the end.
    ///
    /// For a non-vertical segment the horizontal offset `dx` satisfies
    /// `dx² · (1 + slope²) = (fraction · length)²`, which has two roots `±dx`.
    /// The root on the start-to-end side is taken (the opposite one for
    /// negative fractions) and `y` follows from the line equation. Vertical
    /// segments, including ones so steep that the slope overflows, keep `x`
    /// and move `y` toward the end point. A degenerate segment always yields
    /// its start point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vellum_core::geometry::{Point, Segment};
    /// // Vertical segment pointing toward smaller y
    /// let segment = Segment::new(3.0, 10.0, 3.0, 0.0);
    /// assert_eq!(segment.along(0.25), Point::new(3.0, 7.5));
    ///
    /// // Vertical segment pointing toward larger y
    /// let segment = Segment::new(3.0, 0.0, 3.0, 10.0);
    /// assert_eq!(segment.along(0.25), Point::new(3.0, 2.5));
    /// ```
    pub fn along(self, fraction: f32) -> Point {
        let distance = fraction * self.length();

        // Near-vertical segments can overflow the slope; treat them as vertical
        let Some(slope) = self.slope().filter(|slope| slope.is_finite()) else {
            let y = if self.start.y > self.end.y {
                self.start.y - distance
            } else {
                self.start.y + distance
            };
            return Point::new(self.start.x, y);
        };

        // sqrt(distance² / (1 + slope²)), without overflowing for steep slopes
        let root = distance.abs() / slope.hypot(1.0);

        let end_is_right = self.end.x > self.start.x;
        let offset = match (end_is_right, fraction < 0.0) {
            (true, false) | (false, true) => root,
            (false, false) | (true, true) => -root,
        };

        Point::new(self.start.x + offset, self.start.y + slope * offset)
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn segment_strategy() -> impl Strategy<Value = Segment> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            -500.0f32..500.0,
            -500.0f32..500.0,
        )
            .prop_map(|(x1, y1, x2, y2)| Segment::new(x1, y1, x2, y2))
    }

    fn fraction_strategy() -> impl Strategy<Value = f32> {
        0.0f32..=1.0
    }

    /// Fractions reaching before the start and beyond the end
    fn extrapolating_fraction_strategy() -> impl Strategy<Value = f32> {
        -2.0f32..3.0
    }

    // ===================
    // Property Test Functions
    // ===================

    /// The placed point lies `|fraction| * length` away from the start.
    fn check_along_distance_matches_fraction(
        segment: Segment,
        fraction: f32,
    ) -> Result<(), TestCaseError> {
        let point = segment.along(fraction);
        let expected = fraction.abs() * segment.length();
        let actual = segment.start().distance(point);
        prop_assert!(
            approx_eq!(f32, actual, expected, epsilon = 1e-2),
            "distance {actual} != {expected} for {segment:?} at {fraction}"
        );
        Ok(())
    }

    /// The placed point is `start + fraction * (end - start)`, so it lies on
    /// the segment's line on the side the sign of `fraction` selects.
    fn check_along_follows_direction(segment: Segment, fraction: f32) -> Result<(), TestCaseError> {
        let point = segment.along(fraction);
        let expected = segment
            .start()
            .add_point(segment.end().sub_point(segment.start()).scale(fraction));
        prop_assert!(
            point.distance(expected) < 1e-2,
            "{point:?} != {expected:?} for {segment:?} at {fraction}"
        );
        Ok(())
    }

    /// Points inside `[0, 1]` stay within the segment's bounding box.
    fn check_along_stays_within_extents(
        segment: Segment,
        fraction: f32,
    ) -> Result<(), TestCaseError> {
        let point = segment.along(fraction);
        let tolerance = 1e-2;
        let (min_x, max_x) = (segment.x1().min(segment.x2()), segment.x1().max(segment.x2()));
        let (min_y, max_y) = (segment.y1().min(segment.y2()), segment.y1().max(segment.y2()));
        prop_assert!(point.x() >= min_x - tolerance && point.x() <= max_x + tolerance);
        prop_assert!(point.y() >= min_y - tolerance && point.y() <= max_y + tolerance);
        Ok(())
    }

    /// The end of the segment is reached at fraction one.
    fn check_along_one_is_end(segment: Segment) -> Result<(), TestCaseError> {
        let point = segment.along(1.0);
        prop_assert!(point.distance(segment.end()) < 1e-2);
        Ok(())
    }

    /// Extents never go negative and length dominates each extent.
    fn check_extents_bounded_by_length(segment: Segment) -> Result<(), TestCaseError> {
        prop_assert!(segment.width() >= 0.0);
        prop_assert!(segment.height() >= 0.0);
        prop_assert!(segment.width() <= segment.length() + 1e-3);
        prop_assert!(segment.height() <= segment.length() + 1e-3);
        Ok(())
    }

    // ===================
    // Property Tests
    // ===================

    proptest! {
        #[test]
        fn along_distance_matches_fraction(segment in segment_strategy(), fraction in extrapolating_fraction_strategy()) {
            check_along_distance_matches_fraction(segment, fraction)?;
        }

        #[test]
        fn along_follows_direction(segment in segment_strategy(), fraction in extrapolating_fraction_strategy()) {
            check_along_follows_direction(segment, fraction)?;
        }

        #[test]
        fn along_stays_within_extents(segment in segment_strategy(), fraction in fraction_strategy()) {
            check_along_stays_within_extents(segment, fraction)?;
        }

        #[test]
        fn along_one_is_end(segment in segment_strategy()) {
            check_along_one_is_end(segment)?;
        }

        #[test]
        fn extents_bounded_by_length(segment in segment_strategy()) {
            check_extents_bounded_by_length(segment)?;
        }
    }
}
