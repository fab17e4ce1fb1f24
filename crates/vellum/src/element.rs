//! The element tree.
//!
//! An [`Element`] is a tagged node holding text attributes, an ordered list
//! of owned children and, for text labels, inline content. Each element kind
//! is a variant of [`ElementKind`]; the kind fixes the tag name and selects
//! the few behaviors that differ between kinds (dimension accessors of
//! lines, inline content of text, the cursor of paths).
//!
//! # Ownership
//!
//! A parent owns its children by value. Adding a child moves it into the
//! parent, so an element can never have two parents and the tree can never
//! contain a cycle. Children are only ever appended.
//!
//! # Example
//!
//! ```
//! use vellum::Element;
//!
//! let mut root = Element::svg();
//! root.set_attribute("width", 100).set_attribute("height", 50);
//!
//! let group = root.add_child(Element::group());
//! group.add_child(Element::rect(0.0, 0.0, 100.0, 50.0));
//! group.add_child(Element::text(10.0, 20.0, "Label"));
//!
//! assert_eq!(root.width().unwrap(), Some(100.0));
//! assert_eq!(root.children().len(), 1);
//! assert_eq!(root.children()[0].children().len(), 2);
//! ```

mod kind;
mod path;

pub use kind::ElementKind;
pub use path::PathCursor;

use std::fmt;

use indexmap::IndexMap;
use log::warn;

use vellum_core::{
    color::Color,
    geometry::{Point, Segment},
    stroke::StrokeDefinition,
    value::Value,
};

use crate::{error::VellumError, serialize::Serializer};

/// Namespace declared on root elements created with [`Element::svg`].
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    attributes: IndexMap<String, Value>,
    children: Vec<Element>,
    content: Option<String>,
}

impl Element {
    /// Creates an element of the given kind with no attributes.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: IndexMap::new(),
            children: Vec::new(),
            content: None,
        }
    }

    /// Creates an element of the given kind, pre-populated with attributes.
    pub fn with_attributes<I, K, V>(kind: ElementKind, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut element = Self::new(kind);
        for (name, value) in attributes {
            element.set_attribute(name, value);
        }
        element
    }

    /// Creates a root `<svg>` element declaring the SVG namespace.
    pub fn svg() -> Self {
        Self::with_attributes(ElementKind::Svg, [("xmlns", SVG_NAMESPACE)])
    }

    /// Creates a root `<svg>` element with exactly the given attributes.
    ///
    /// No namespace is added; include `xmlns` yourself if you need it.
    pub fn svg_with<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::with_attributes(ElementKind::Svg, attributes)
    }

    /// Creates an empty `<g>` grouping element.
    pub fn group() -> Self {
        Self::new(ElementKind::Group)
    }

    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::with_attributes(
            ElementKind::Rect,
            [("x", x), ("y", y), ("width", width), ("height", height)],
        )
    }

    pub fn circle(cx: f32, cy: f32, r: f32) -> Self {
        Self::with_attributes(ElementKind::Circle, [("cx", cx), ("cy", cy), ("r", r)])
    }

    pub fn circle_at(center: Point, r: f32) -> Self {
        Self::circle(center.x(), center.y(), r)
    }

    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::with_attributes(
            ElementKind::Line,
            [("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)],
        )
    }

    pub fn line_from(segment: Segment) -> Self {
        Self::line(segment.x1(), segment.y1(), segment.x2(), segment.y2())
    }

    /// Creates a `<text>` label anchored at `(x, y)`.
    pub fn text(x: f32, y: f32, content: impl Into<String>) -> Self {
        let mut element = Self::with_attributes(ElementKind::Text, [("x", x), ("y", y)]);
        element.content = Some(content.into());
        element
    }

    pub fn text_at(position: Point, content: impl Into<String>) -> Self {
        Self::text(position.x(), position.y(), content)
    }

    /// Creates an empty `<path>`; see [`Element::move_to`] and friends.
    pub fn path() -> Self {
        Self::new(ElementKind::Path(PathCursor::default()))
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// The tag name this element serializes as.
    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Stores `value` under `name`, replacing any previous value.
    ///
    /// Numbers are converted to their decimal text here; see
    /// [`Value`] for the accepted input kinds. Replacing a value keeps the
    /// attribute at its original position in the output.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Returns the text stored under `name`, if any.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(Value::as_str)
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Reads an attribute as a number.
    ///
    /// Returns `Ok(None)` when the attribute is absent.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::MalformedNumber`] if the stored text is not a
    /// decimal number.
    pub fn numeric_attribute(&self, name: &str) -> Result<Option<f32>, VellumError> {
        self.attributes
            .get(name)
            .map(|value| {
                value
                    .parse_f32()
                    .map_err(|source| VellumError::MalformedNumber {
                        name: name.to_string(),
                        value: value.to_string(),
                        source,
                    })
            })
            .transpose()
    }

    /// Applies every attribute of `stroke`, dropping optional stroke
    /// attributes left by an earlier stroke.
    pub fn set_stroke(&mut self, stroke: &StrokeDefinition) -> &mut Self {
        self.attributes.shift_remove("stroke-opacity");
        self.attributes.shift_remove("stroke-dasharray");
        for (name, value) in stroke.attributes() {
            self.set_attribute(name, value);
        }
        self
    }

    /// Sets `fill`, and `fill-opacity` for translucent colors.
    ///
    /// A translucent color is written opaque so its alpha is applied once,
    /// through `fill-opacity`.
    pub fn set_fill(&mut self, color: Color) -> &mut Self {
        self.set_attribute("fill", color.opaque());
        if color.is_opaque() {
            self.attributes.shift_remove("fill-opacity");
        } else {
            self.set_attribute("fill-opacity", color.alpha());
        }
        self
    }

    /// Appends `child` and returns it so it can be configured in place.
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::Element;
    ///
    /// let mut root = Element::svg();
    /// root.add_child(Element::circle(5.0, 5.0, 2.0))
    ///     .set_attribute("fill", "red");
    ///
    /// assert_eq!(root.children()[0].attribute("fill"), Some("red"));
    /// ```
    pub fn add_child(&mut self, child: Element) -> &mut Element {
        if matches!(self.kind, ElementKind::Text) {
            warn!(child_tag = child.tag(); "Children of <text> elements are not serialized");
        }

        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Appends several children, left to right.
    pub fn add_children<I>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator<Item = Element>,
    {
        for child in children {
            self.add_child(child);
        }
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Inline text content; only text labels carry any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = Some(content.into());
        self
    }

    /// Returns the element's width.
    ///
    /// For lines this is the horizontal extent between the endpoints; for
    /// every other kind it is the `width` attribute. `Ok(None)` means the
    /// backing attribute(s) are not set.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::MalformedNumber`] if a backing attribute holds
    /// non-numeric text.
    pub fn width(&self) -> Result<Option<f32>, VellumError> {
        match self.kind {
            ElementKind::Line => Ok(self.segment()?.map(Segment::width)),
            _ => self.numeric_attribute("width"),
        }
    }

    /// Returns the element's height; see [`Element::width`].
    pub fn height(&self) -> Result<Option<f32>, VellumError> {
        match self.kind {
            ElementKind::Line => Ok(self.segment()?.map(Segment::height)),
            _ => self.numeric_attribute("height"),
        }
    }

    /// Reads the endpoints of a line element.
    ///
    /// Returns `Ok(None)` if any of `x1`, `y1`, `x2`, `y2` is missing.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::NotASegment`] for non-line elements and
    /// [`VellumError::MalformedNumber`] for non-numeric coordinates.
    pub fn segment(&self) -> Result<Option<Segment>, VellumError> {
        if !matches!(self.kind, ElementKind::Line) {
            return Err(VellumError::NotASegment { tag: self.tag() });
        }

        let x1 = self.numeric_attribute("x1")?;
        let y1 = self.numeric_attribute("y1")?;
        let x2 = self.numeric_attribute("x2")?;
        let y2 = self.numeric_attribute("y2")?;

        let (Some(x1), Some(y1), Some(x2), Some(y2)) = (x1, y1, x2, y2) else {
            return Ok(None);
        };

        Ok(Some(Segment::new(x1, y1, x2, y2)))
    }

    /// Length of a line element; see [`Element::segment`] for errors.
    pub fn length(&self) -> Result<Option<f32>, VellumError> {
        Ok(self.segment()?.map(Segment::length))
    }

    /// Slope of a line element, `None` when unset or vertical.
    pub fn slope(&self) -> Result<Option<f32>, VellumError> {
        Ok(self.segment()?.and_then(Segment::slope))
    }

    /// The point at `fraction` of a line element's length.
    ///
    /// See [`Segment::along`] for the placement rules.
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::{Element, geometry::Point};
    ///
    /// let axis = Element::line(3.0, 10.0, 3.0, 0.0);
    /// assert_eq!(axis.along(0.25).unwrap(), Some(Point::new(3.0, 7.5)));
    /// ```
    pub fn along(&self, fraction: f32) -> Result<Option<Point>, VellumError> {
        Ok(self.segment()?.map(|segment| segment.along(fraction)))
    }

    /// Renders this element and its subtree, indented by `indent_level`
    /// tab characters.
    pub fn serialize(&self, indent_level: usize) -> String {
        Serializer::default().serialize(self, indent_level)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(0))
    }
}
