//! Example: Building a small bar chart
//!
//! This example builds an element tree by hand: a baseline, one bar per
//! value drawn as a closed path, and labels placed along the baseline.

use vellum::{
    Element, Renderer,
    color::Color,
    config::AppConfig,
    stroke::{StrokeCap, StrokeDefinition},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let values = [("north", 40.0), ("south", 65.0), ("east", 25.0), ("west", 50.0)];

    let mut root = Element::svg();
    root.set_attribute("width", 240)
        .set_attribute("height", 120)
        .set_attribute("viewBox", "0 0 240 120");

    // Baseline the bars stand on
    let mut stroke = StrokeDefinition::solid(Color::new("#333333")?, 1.5);
    stroke.set_cap(StrokeCap::Round);
    let mut baseline = Element::line(20.0, 100.0, 220.0, 100.0);
    baseline.set_stroke(&stroke);

    let bars = root.add_child(Element::group().with_attribute("id", "bars"));
    let slot = 1.0 / values.len() as f32;
    let mut labels = Vec::with_capacity(values.len());

    for (index, (name, value)) in values.iter().enumerate() {
        let center = baseline
            .along(slot * (index as f32 + 0.5))?
            .ok_or("baseline has both endpoints")?;
        let (left, right) = (center.x() - 12.0, center.x() + 12.0);

        let mut bar = Element::path();
        bar.set_fill(Color::new("steelblue")?);
        bar.move_to(left, center.y())?
            .line_to(left, center.y() - value)?
            .line_to(right, center.y() - value)?
            .line_to(right, center.y())?
            .close_path()?;
        bars.add_child(bar);

        labels.push(
            Element::text(center.x(), center.y() + 14.0, *name)
                .with_attribute("text-anchor", "middle")
                .with_attribute("font-size", 10),
        );
    }

    root.add_child(baseline);
    root.add_child(Element::group().with_attribute("id", "labels"))
        .add_children(labels);

    println!("{}", Renderer::new(AppConfig::default()).render(&root));

    Ok(())
}
