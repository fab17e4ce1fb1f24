//! Errors reported by the CLI.
//!
//! [`CliError`] implements [`miette::Diagnostic`] so `main` can render it
//! with miette's graphical report handler.

use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use vellum::VellumError;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(vellum::io))]
    Io(#[from] io::Error),

    #[error("Failed to parse TOML configuration: {0}")]
    #[diagnostic(
        code(vellum::config::parse),
        help("the configuration accepts [output] and [style] tables")
    )]
    ConfigParse(String),

    #[error("Missing configuration file: {}", .0.display())]
    #[diagnostic(code(vellum::config::missing))]
    MissingConfig(PathBuf),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(vellum::config::invalid))]
    InvalidConfig(String),

    #[error("Invalid scene: {0}")]
    #[diagnostic(
        code(vellum::scene),
        help("every [[shapes]] entry needs a `kind`: rect, circle, line, text, path or group")
    )]
    Scene(String),

    #[error(transparent)]
    #[diagnostic(code(vellum::render))]
    Render(#[from] VellumError),
}
