//! Vellum Core Types
//!
//! This crate provides the foundational types shared by the Vellum element
//! tree. It includes:
//!
//! - **Geometry**: Points and line segments with along-the-segment placement ([`geometry`] module)
//! - **Values**: Attribute values with numeric-to-text coercion ([`value::Value`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Strokes**: Stroke styling mapped to SVG attributes ([`stroke`] module)

pub mod color;
pub mod geometry;
pub mod stroke;
pub mod value;
