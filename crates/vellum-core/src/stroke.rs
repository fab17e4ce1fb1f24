//! Stroke styling for outlined elements.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width, dash style and line cap of a stroke
//! - [`StrokeStyle`]: line pattern (solid, dashed, dotted, custom dasharray)
//! - [`StrokeCap`]: how open line ends are drawn
//!
//! A definition is turned into plain attributes with
//! [`StrokeDefinition::attributes`], which the element tree stores like any
//! other attribute.
//!
//! # SVG Attribute Mapping
//!
//! | Property | SVG Attribute | Example Values |
//! |----------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"black"`, `0.5` |
//! | `width` | `stroke-width` | `2` |
//! | `style` | `stroke-dasharray` | `"5,5"` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"`, `"square"` |

use std::str::FromStr;

use crate::{color::Color, value::Value};

/// Line pattern of a stroke, mapped to `stroke-dasharray`.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Continuous line, no dasharray attribute
    #[default]
    Solid,
    /// "5,5"
    Dashed,
    /// "2,3"
    Dotted,
    /// Any other dasharray, passed through as written
    Custom(String),
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<&str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
            Self::Dotted => Some("2,3"),
            Self::Custom(pattern) => Some(pattern.as_str()),
        }
    }
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "" => Err("empty stroke style".to_string()),
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

/// How the open ends of a stroked line are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for StrokeCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid stroke cap `{s}`, valid values: butt, round, square"
            )),
        }
    }
}

/// A complete stroke description.
///
/// # Examples
///
/// ```
/// use vellum_core::{color::Color, stroke::{StrokeCap, StrokeDefinition}};
///
/// let mut stroke = StrokeDefinition::dashed(Color::new("blue").unwrap(), 1.5);
/// stroke.set_cap(StrokeCap::Round);
///
/// let names: Vec<_> = stroke.attributes().into_iter().map(|(name, _)| name).collect();
/// assert_eq!(
///     names,
///     ["stroke", "stroke-width", "stroke-linecap", "stroke-dasharray"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    pub fn dotted(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dotted);
        stroke
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    /// Returns the attributes describing this stroke, in a fixed order.
    ///
    /// Translucent colors are written opaque, with their alpha carried by
    /// `stroke-opacity`. `stroke-dasharray` is only emitted for non-solid
    /// styles.
    pub fn attributes(&self) -> Vec<(&'static str, Value)> {
        let mut attributes = vec![("stroke", Value::from(self.color.opaque()))];

        if !self.color.is_opaque() {
            attributes.push(("stroke-opacity", Value::from(self.color.alpha())));
        }

        attributes.push(("stroke-width", Value::from(self.width)));
        attributes.push(("stroke-linecap", Value::from(self.cap.to_svg_value())));

        if let Some(dasharray) = self.style.to_svg_value() {
            attributes.push(("stroke-dasharray", Value::from(dasharray)));
        }

        attributes
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
            cap: StrokeCap::default(),
        }
    }
}
