//! CLI logic for the Vellum scene renderer.
//!
//! Reads a TOML scene file, builds its element tree and writes the
//! serialized SVG to the output path.

pub mod error;

mod args;
mod config;
mod scene;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::info;

use vellum::Renderer;

use scene::Scene;

/// Run the Vellum CLI application
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed scenes
/// - Line placement errors, such as non-numeric coordinates
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let root = Scene::parse(&source)?.build(app_config.style())?;

    Renderer::new(app_config).render_to_file(&root, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
