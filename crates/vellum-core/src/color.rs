//! Color handling for paint attributes
//!
//! This module provides the [`Color`] type which wraps `DynamicColor` from the
//! color crate. Colors render to CSS color text when used as attribute values
//! (see [`Value`](crate::value::Value)).

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A CSS color usable for `fill` and `stroke` attributes
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha value, between 0.0
    /// (fully transparent) and 1.0 (fully opaque).
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let faded = red.with_alpha(0.5);
    /// assert_eq!(faded.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component of this color
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns true when the color has no transparency
    pub fn is_opaque(&self) -> bool {
        self.alpha() >= 1.0
    }

    /// Returns this color with full alpha.
    ///
    /// Paired with an `*-opacity` attribute so the alpha is applied once.
    pub fn opaque(self) -> Self {
        if self.is_opaque() {
            self
        } else {
            self.with_alpha(1.0)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
