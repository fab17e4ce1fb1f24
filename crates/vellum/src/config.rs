//! Configuration types for Vellum rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file. Every field is optional and falls
//! back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining output and style settings.
//! - [`OutputConfig`] - Controls how markup text is laid out.
//! - [`StyleConfig`] - Default paint applied by callers that build scenes.
//!
//! # Example
//!
//! ```
//! # use vellum::config::{AppConfig, Indent};
//! let config = AppConfig::default();
//! assert_eq!(config.output().indent(), Indent::Tab);
//! assert!(config.style().stroke().unwrap().is_none());
//! ```

use serde::Deserialize;

use std::str::FromStr;

use vellum_core::{
    color::Color,
    stroke::{StrokeCap, StrokeDefinition, StrokeStyle},
};

/// Top-level configuration combining output and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    output: OutputConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified output and style configurations.
    pub fn new(output: OutputConfig, style: StyleConfig) -> Self {
        Self { output, style }
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Indentation unit repeated once per nesting depth.
///
/// In TOML this is written either as `indent = "tab"` or as
/// `indent = { spaces = 2 }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// A single tab character (default)
    #[default]
    Tab,
    /// The given number of spaces
    Spaces(usize),
}

impl Indent {
    /// Returns the text of one indentation unit.
    pub fn unit(self) -> String {
        match self {
            Self::Tab => "\t".to_string(),
            Self::Spaces(count) => " ".repeat(count),
        }
    }
}

/// Markup layout options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    indent: Indent,
}

impl OutputConfig {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    /// Returns the indentation unit.
    pub fn indent(&self) -> Indent {
        self.indent
    }
}

/// Default paint for generated shapes.
///
/// Colors are kept as strings so a bad value is reported when it is used,
/// with the offending text in the message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    stroke_color: Option<String>,

    #[serde(default)]
    stroke_width: Option<f32>,

    /// `solid`, `dashed`, `dotted` or a raw dasharray such as `"4,2"`
    #[serde(default)]
    stroke_style: Option<String>,

    /// `butt`, `round` or `square`
    #[serde(default)]
    stroke_cap: Option<String>,

    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the default stroke, or `None` when no stroke setting is
    /// configured. Unset settings fall back to a solid, butt-capped, black
    /// stroke of width 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color, style or cap cannot be
    /// parsed.
    pub fn stroke(&self) -> Result<Option<StrokeDefinition>, String> {
        if self.stroke_color.is_none()
            && self.stroke_width.is_none()
            && self.stroke_style.is_none()
            && self.stroke_cap.is_none()
        {
            return Ok(None);
        }

        let color = self
            .stroke_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid stroke color in config: {err}"))?
            .unwrap_or_default();
        let width = self.stroke_width.unwrap_or(1.0);

        let mut stroke = StrokeDefinition::solid(color, width);
        if let Some(style) = self.stroke_style.as_deref() {
            stroke.set_style(
                StrokeStyle::from_str(style)
                    .map_err(|err| format!("Invalid stroke style in config: {err}"))?,
            );
        }
        if let Some(cap) = self.stroke_cap.as_deref() {
            stroke.set_cap(
                StrokeCap::from_str(cap)
                    .map_err(|err| format!("Invalid stroke cap in config: {err}"))?,
            );
        }

        Ok(Some(stroke))
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}
