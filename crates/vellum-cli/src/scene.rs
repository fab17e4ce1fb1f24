//! Scene files.
//!
//! A scene is a TOML description of the shapes to draw. It is turned into an
//! element tree rooted at an `<svg>` element.
//!
//! ```toml
//! [canvas]
//! width = 200
//! height = 100
//!
//! [[shapes]]
//! kind = "line"
//! x1 = 10
//! y1 = 90
//! x2 = 190
//! y2 = 90
//! attributes = { stroke = "black" }
//!
//! [[shapes.markers]]
//! at = 0.5
//! radius = 3
//!
//! [[shapes.labels]]
//! at = 1.0
//! text = "x"
//! dy = 14
//! ```
//!
//! Markers and labels are placed on their line with
//! [`Element::along`], so they follow the line's final endpoints even when
//! `attributes` overrides them.

use std::collections::BTreeMap;

use log::{debug, trace};
use serde::Deserialize;

use vellum::{
    Element, ElementKind,
    config::StyleConfig,
    geometry::Point,
    stroke::StrokeDefinition,
    value::Value,
};

use crate::error::CliError;

/// A parsed scene file.
#[derive(Debug, Default, Deserialize)]
pub struct Scene {
    #[serde(default)]
    canvas: Canvas,

    #[serde(default)]
    shapes: Vec<ShapeSpec>,
}

#[derive(Debug, Default, Deserialize)]
struct Canvas {
    width: Option<f32>,
    height: Option<f32>,
    view_box: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ShapeSpec {
    #[serde(flatten)]
    shape: Shape,

    #[serde(default)]
    attributes: BTreeMap<String, AttributeSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Shape {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        #[serde(default)]
        markers: Vec<Marker>,
        #[serde(default)]
        labels: Vec<Label>,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
    },
    Path {
        points: Vec<[f32; 2]>,
        #[serde(default)]
        closed: bool,
    },
    Group {
        #[serde(default)]
        shapes: Vec<ShapeSpec>,
    },
}

/// A dot drawn at a fraction of a line's length
#[derive(Debug, Deserialize)]
struct Marker {
    at: f32,
    #[serde(default = "default_marker_radius")]
    radius: f32,
}

fn default_marker_radius() -> f32 {
    2.0
}

/// A text label anchored at a fraction of a line's length, shifted by `dy`
#[derive(Debug, Deserialize)]
struct Label {
    at: f32,
    text: String,
    #[serde(default)]
    dy: f32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AttributeSpec {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl From<&AttributeSpec> for Value {
    fn from(spec: &AttributeSpec) -> Self {
        match spec {
            AttributeSpec::Integer(value) => Value::from(*value),
            AttributeSpec::Float(value) => Value::from(*value),
            AttributeSpec::Bool(value) => Value::from(*value),
            AttributeSpec::Text(value) => Value::from(value),
        }
    }
}

impl Scene {
    /// Parses a scene from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Scene`] with the TOML error message.
    pub fn parse(source: &str) -> Result<Self, CliError> {
        let scene: Scene = toml::from_str(source).map_err(|err| CliError::Scene(err.to_string()))?;
        debug!(shapes = scene.shapes.len(); "Scene parsed");
        Ok(scene)
    }

    /// Builds the element tree for this scene.
    ///
    /// The style's background color becomes a full-size rectangle behind
    /// every shape; its stroke is applied to outlined shapes before their
    /// own attributes, so per-shape attributes win.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid style colors or when a line's
    /// coordinates, as overridden by its attributes, are not numeric.
    pub fn build(&self, style: &StyleConfig) -> Result<Element, CliError> {
        let mut root = Element::svg();
        if let Some(width) = self.canvas.width {
            root.set_attribute("width", width);
        }
        if let Some(height) = self.canvas.height {
            root.set_attribute("height", height);
        }
        if let Some(view_box) = &self.canvas.view_box {
            root.set_attribute("viewBox", view_box);
        }

        if let Some(color) = style.background_color().map_err(CliError::InvalidConfig)? {
            root.add_child(Element::with_attributes(
                ElementKind::Rect,
                [("width", "100%"), ("height", "100%")],
            ))
            .set_fill(color);
        }

        let stroke = style.stroke().map_err(CliError::InvalidConfig)?;
        for spec in &self.shapes {
            spec.build_into(&mut root, stroke.as_ref())?;
        }

        Ok(root)
    }
}

impl ShapeSpec {
    fn build_into(&self, parent: &mut Element, stroke: Option<&StrokeDefinition>) -> Result<(), CliError> {
        let mut element = match &self.shape {
            Shape::Rect {
                x,
                y,
                width,
                height,
            } => Element::rect(*x, *y, *width, *height),
            Shape::Circle { cx, cy, r } => Element::circle(*cx, *cy, *r),
            Shape::Line { x1, y1, x2, y2, .. } => Element::line(*x1, *y1, *x2, *y2),
            Shape::Text { x, y, text } => Element::text(*x, *y, text.as_str()),
            Shape::Path { points, closed } => {
                let mut path = Element::path();
                for [x, y] in points {
                    path.line_to(*x, *y)?;
                }
                if *closed {
                    path.close_path()?;
                }
                path
            }
            Shape::Group { shapes } => {
                let mut group = Element::group();
                for spec in shapes {
                    spec.build_into(&mut group, stroke)?;
                }
                group
            }
        };

        let outlined = matches!(
            element.kind(),
            ElementKind::Rect | ElementKind::Circle | ElementKind::Line | ElementKind::Path(_)
        );
        if let (Some(stroke), true) = (stroke, outlined) {
            element.set_stroke(stroke);
        }

        for (name, value) in &self.attributes {
            element.set_attribute(name, value);
        }

        trace!(tag = element.tag(); "Shape built");

        if let Shape::Line {
            markers, labels, ..
        } = &self.shape
        {
            let placed = place_along(&element, markers, labels)?;
            parent.add_child(element);
            parent.add_children(placed);
        } else {
            parent.add_child(element);
        }

        Ok(())
    }
}

/// Creates the marker and label elements positioned along `line`.
fn place_along(line: &Element, markers: &[Marker], labels: &[Label]) -> Result<Vec<Element>, CliError> {
    let point_at = |fraction: f32| -> Result<Point, CliError> {
        line.along(fraction)?
            .ok_or_else(|| CliError::Scene("line is missing an endpoint".to_string()))
    };

    let mut placed = Vec::with_capacity(markers.len() + labels.len());
    for marker in markers {
        placed.push(Element::circle_at(point_at(marker.at)?, marker.radius));
    }
    for label in labels {
        let anchor = point_at(label.at)?;
        placed.push(Element::text(anchor.x(), anchor.y() + label.dy, label.text.as_str()));
    }

    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(source: &str) -> Element {
        Scene::parse(source)
            .expect("scene should parse")
            .build(&StyleConfig::default())
            .expect("scene should build")
    }

    #[test]
    fn test_empty_scene_is_a_bare_root() {
        let root = build("");
        assert_eq!(root.tag(), "svg");
        assert!(root.children().is_empty());
    }

    #[test]
    fn test_canvas_sets_root_attributes() {
        let root = build("[canvas]\nwidth = 200\nheight = 100.5\nview_box = \"0 0 200 100\"\n");
        assert_eq!(root.attribute("width"), Some("200"));
        assert_eq!(root.attribute("height"), Some("100.5"));
        assert_eq!(root.attribute("viewBox"), Some("0 0 200 100"));
    }

    #[test]
    fn test_shapes_with_attributes() {
        let root = build(
            r#"
            [[shapes]]
            kind = "rect"
            x = 1
            y = 2
            width = 3
            height = 4
            attributes = { fill = "red", rx = 2, opacity = 0.5, visible = true }
            "#,
        );

        let rect = &root.children()[0];
        assert_eq!(rect.tag(), "rect");
        assert_eq!(rect.attribute("width"), Some("3"));
        assert_eq!(rect.attribute("fill"), Some("red"));
        assert_eq!(rect.attribute("rx"), Some("2"));
        assert_eq!(rect.attribute("opacity"), Some("0.5"));
        assert_eq!(rect.attribute("visible"), Some("true"));
    }

    #[test]
    fn test_line_markers_and_labels_follow_the_line() {
        let root = build(
            r#"
            [[shapes]]
            kind = "line"
            x1 = 0
            y1 = 0
            x2 = 10
            y2 = 0

            [[shapes.markers]]
            at = 0.5

            [[shapes.labels]]
            at = 1.0
            text = "end"
            dy = 4
            "#,
        );

        let children = root.children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].tag(), "line");

        assert_eq!(children[1].tag(), "circle");
        assert_eq!(children[1].attribute("cx"), Some("5"));
        assert_eq!(children[1].attribute("r"), Some("2"));

        assert_eq!(children[2].content(), Some("end"));
        assert_eq!(children[2].attribute("x"), Some("10"));
        assert_eq!(children[2].attribute("y"), Some("4"));
    }

    #[test]
    fn test_vertical_line_marker() {
        let root = build(
            r#"
            [[shapes]]
            kind = "line"
            x1 = 3
            y1 = 10
            x2 = 3
            y2 = 0
            markers = [{ at = 0.25, radius = 1 }]
            "#,
        );

        let marker = &root.children()[1];
        assert_eq!(marker.attribute("cx"), Some("3"));
        assert_eq!(marker.attribute("cy"), Some("7.5"));
    }

    #[test]
    fn test_overridden_endpoint_moves_markers() {
        let root = build(
            r#"
            [[shapes]]
            kind = "line"
            x1 = 0
            y1 = 0
            x2 = 10
            y2 = 0
            attributes = { x2 = 20 }
            markers = [{ at = 0.5 }]
            "#,
        );

        assert_eq!(root.children()[1].attribute("cx"), Some("10"));
    }

    #[test]
    fn test_non_numeric_endpoint_is_an_error() {
        let scene = Scene::parse(
            r#"
            [[shapes]]
            kind = "line"
            x1 = 0
            y1 = 0
            x2 = 10
            y2 = 0
            attributes = { y2 = "bottom" }
            markers = [{ at = 0.5 }]
            "#,
        )
        .unwrap();

        let err = scene.build(&StyleConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Render(_)));
    }

    #[test]
    fn test_closed_path() {
        let root = build(
            r#"
            [[shapes]]
            kind = "path"
            points = [[0, 0], [10, 0], [10, 10]]
            closed = true
            "#,
        );

        assert_eq!(
            root.children()[0].attribute("d"),
            Some("M 0 0 L 10 0 L 10 10 L 0 0")
        );
    }

    #[test]
    fn test_nested_groups() {
        let root = build(
            r#"
            [[shapes]]
            kind = "group"
            attributes = { id = "outer" }

            [[shapes.shapes]]
            kind = "text"
            x = 1
            y = 1
            text = "inner"
            "#,
        );

        let group = &root.children()[0];
        assert_eq!(group.attribute("id"), Some("outer"));
        assert_eq!(group.children()[0].content(), Some("inner"));
    }

    #[test]
    fn test_style_applies_background_and_default_stroke() {
        let style: StyleConfig = toml::from_str(
            "background_color = \"white\"\nstroke_color = \"gray\"\nstroke_width = 2\n",
        )
        .unwrap();
        let scene = Scene::parse(
            r#"
            [[shapes]]
            kind = "circle"
            cx = 1
            cy = 1
            r = 1

            [[shapes]]
            kind = "text"
            x = 0
            y = 0
            text = "plain"

            [[shapes]]
            kind = "rect"
            x = 0
            y = 0
            width = 1
            height = 1
            attributes = { stroke-width = 5 }
            "#,
        )
        .unwrap();

        let root = scene.build(&style).unwrap();
        let children = root.children();

        assert_eq!(children[0].attribute("width"), Some("100%"));
        assert_eq!(children[0].attribute("fill"), Some("white"));
        assert_eq!(children[1].attribute("stroke"), Some("gray"));
        assert_eq!(children[1].attribute("stroke-width"), Some("2"));
        assert_eq!(children[2].attribute("stroke"), None);
        assert_eq!(children[3].attribute("stroke-width"), Some("5"));
    }

    #[test]
    fn test_unknown_kind_is_a_scene_error() {
        let err = Scene::parse("[[shapes]]\nkind = \"hexagon\"\n").unwrap_err();
        assert!(matches!(err, CliError::Scene(_)));
    }
}
