//! Error types for Vellum operations.
//!
//! This module provides the main error type [`VellumError`]. A missing
//! attribute is never an error: numeric accessors report it as `Ok(None)`.

use std::{io, num::ParseFloatError};

use thiserror::Error;

/// The main error type for Vellum operations.
#[derive(Debug, Error)]
pub enum VellumError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An attribute read through a numeric accessor holds non-numeric text.
    #[error("attribute `{name}` is not a number: `{value}`")]
    MalformedNumber {
        name: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("<{tag}> element is not a line segment")]
    NotASegment { tag: &'static str },

    #[error("`{operation}` is not supported on <{tag}> elements")]
    UnsupportedOperation {
        operation: &'static str,
        tag: &'static str,
    },
}
