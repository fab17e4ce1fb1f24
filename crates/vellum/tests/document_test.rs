//! Integration tests for building and rendering documents
//!
//! Rendered markup is read back with the `svg` crate's parser to check that
//! it is well-formed and keeps the order in which children were added.

use std::fs;

use svg::node::element::tag::Type;
use svg::parser::Event;
use tempfile::tempdir;

use vellum::{
    Element, Renderer,
    color::Color,
    config::{AppConfig, Indent, OutputConfig, StyleConfig},
    geometry::Point,
    stroke::StrokeDefinition,
};

/// Walks the markup, checking that every start tag is closed by a matching
/// end tag, and returns the names of root elements and the `id`s seen, in
/// document order.
fn read_back(markup: &str) -> (Vec<String>, Vec<String>) {
    let mut stack: Vec<String> = Vec::new();
    let mut roots = Vec::new();
    let mut ids = Vec::new();

    for event in svg::read(markup).expect("markup should be readable") {
        match event {
            Event::Tag(name, kind, attributes) => {
                if kind != Type::End {
                    if stack.is_empty() {
                        roots.push(name.to_string());
                    }
                    if let Some(id) = attributes.get("id") {
                        ids.push(id.to_string());
                    }
                }
                match kind {
                    Type::Start => stack.push(name.to_string()),
                    Type::End => {
                        let open = stack.pop().expect("end tag without start tag");
                        assert_eq!(open, name, "mismatched end tag");
                    }
                    Type::Empty => {}
                }
            }
            Event::Error(err) => panic!("markup is not well-formed: {err}"),
            _ => {}
        }
    }

    assert!(stack.is_empty(), "unclosed tags: {stack:?}");
    (roots, ids)
}

fn sample_chart() -> Element {
    let mut root = Element::svg();
    root.set_attribute("width", 200).set_attribute("height", 100);

    let mut axis = Element::line(10.0, 90.0, 190.0, 90.0);
    axis.set_stroke(&StrokeDefinition::solid(Color::default(), 1.0));
    let tick_points: Vec<Point> = [0.0, 0.5, 1.0]
        .into_iter()
        .map(|fraction| axis.along(fraction).unwrap().unwrap())
        .collect();
    root.add_child(axis);

    let ticks = root.add_child(Element::group().with_attribute("id", "ticks"));
    for (index, point) in tick_points.into_iter().enumerate() {
        ticks
            .add_child(Element::circle_at(point, 2.0))
            .set_attribute("id", format!("tick-{index}"));
    }

    root.add_child(Element::text(10.0, 20.0, "Q1 & Q2 <draft>"))
        .set_attribute("id", "title");

    let mut bar = Element::path();
    bar.set_attribute("id", "bar");
    bar.move_to(20.0, 90.0)
        .and_then(|path| path.line_to(20.0, 40.0))
        .and_then(|path| path.line_to(40.0, 40.0))
        .and_then(|path| path.line_to(40.0, 90.0))
        .and_then(|path| path.close_path())
        .unwrap();
    root.add_child(bar);

    root
}

#[test]
fn test_rendered_document_is_well_formed() {
    let markup = Renderer::default().render(&sample_chart());
    let (roots, _) = read_back(&markup);
    assert_eq!(roots, ["svg"]);
}

#[test]
fn test_every_kind_has_a_single_matching_root() {
    let elements = [
        Element::svg(),
        Element::group(),
        Element::rect(0.0, 0.0, 1.0, 1.0),
        Element::circle(0.0, 0.0, 1.0),
        Element::line(0.0, 0.0, 1.0, 1.0),
        Element::text(0.0, 0.0, "label"),
        Element::path(),
    ];

    for element in elements {
        let (roots, _) = read_back(&element.serialize(0));
        assert_eq!(roots, [element.tag()]);
    }
}

#[test]
fn test_children_render_in_append_order() {
    let mut root = Element::svg();
    root.add_children([
        Element::group().with_attribute("id", "a"),
        Element::group().with_attribute("id", "b"),
    ]);
    root.add_child(Element::group().with_attribute("id", "c"));

    let (_, ids) = read_back(&root.serialize(0));
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn test_sample_chart_order_and_content() {
    let markup = Renderer::default().render(&sample_chart());
    let (_, ids) = read_back(&markup);
    assert_eq!(ids, ["ticks", "tick-0", "tick-1", "tick-2", "title", "bar"]);

    assert!(markup.contains(r#"<circle cx="100" cy="90" r="2" id="tick-1" />"#));
    assert!(markup.contains("Q1 &amp; Q2 &lt;draft&gt;</text>"));
    assert!(markup.contains(r#"d="M 20 90 L 20 40 L 40 40 L 40 90 L 20 90""#));
}

#[test]
fn test_rendering_is_idempotent() {
    let chart = sample_chart();
    let renderer = Renderer::default();
    assert_eq!(renderer.render(&chart), renderer.render(&chart));
}

#[test]
fn test_renderer_uses_configured_indent() {
    let config = AppConfig::new(OutputConfig::new(Indent::Spaces(2)), StyleConfig::default());
    let mut root = Element::svg_with([("viewBox", "0 0 10 10")]);
    root.add_child(Element::rect(0.0, 0.0, 10.0, 10.0));

    let markup = Renderer::new(config).render(&root);
    assert_eq!(
        markup,
        "<svg viewBox=\"0 0 10 10\">\n  <rect x=\"0\" y=\"0\" width=\"10\" height=\"10\" />\n</svg>"
    );
}

#[test]
fn test_render_to_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("chart.svg");

    let mut root = Element::svg();
    root.add_child(Element::text_at(Point::new(1.0, 2.0), "hi"));
    Renderer::default()
        .render_to_file(&root, &path)
        .expect("Failed to write SVG");

    let written = fs::read_to_string(&path).expect("Failed to read SVG back");
    assert_eq!(written, format!("{}\n", root.serialize(0)));
}
