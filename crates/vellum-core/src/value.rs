//! Attribute values.
//!
//! Every attribute is stored as text. [`Value`] is the boundary where other
//! kinds of input (integers, floats, booleans, colors) are coerced into that
//! text, so reading an attribute never has to know what it was set from.
//!
//! Numbers use Rust's standard decimal formatting: `12.5` stays `12.5`, `10.0`
//! becomes `10`, and negative numbers keep their sign.
//!
//! ```
//! use vellum_core::value::Value;
//!
//! assert_eq!(Value::from(12.5f32).as_str(), "12.5");
//! assert_eq!(Value::from(10.0f64).as_str(), "10");
//! assert_eq!(Value::from(-3).as_str(), "-3");
//! assert_eq!(Value::from("round").as_str(), "round");
//! ```

use std::{fmt, num::ParseFloatError};

use crate::color::Color;

/// The text form of a single attribute value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Value(String);

impl Value {
    /// Returns the stored text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the stored text
    pub fn into_string(self) -> String {
        self.0
    }

    /// Parses the stored text as a float.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ParseFloatError`] when the text is not a
    /// decimal number.
    pub fn parse_f32(&self) -> Result<f32, ParseFloatError> {
        self.0.trim().parse()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Self(color.to_string())
    }
}

impl From<&Color> for Value {
    fn from(color: &Color) -> Self {
        Self(color.to_string())
    }
}

macro_rules! value_from_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )+
    };
}

value_from_display!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
