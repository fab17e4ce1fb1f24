//! Vellum - build SVG documents as element trees.
//!
//! Programs that assemble diagrams or charts create [`Element`]s, attach them
//! to a root, optionally place elements along line segments, and serialize
//! the root to markup text.
//!
//! # Example
//!
//! ```
//! use vellum::{Element, Renderer};
//!
//! let mut root = Element::svg();
//! let axis = root.add_child(Element::line(0.0, 50.0, 100.0, 50.0));
//! let tick = axis.along(0.25)?.expect("axis has both endpoints");
//!
//! root.add_child(Element::circle_at(tick, 2.0));
//!
//! let markup = Renderer::default().render(&root);
//! assert!(markup.starts_with("<svg"));
//! assert!(markup.contains(r#"<circle cx="25" cy="50" r="2" />"#));
//! # Ok::<(), vellum::VellumError>(())
//! ```

pub mod config;

mod element;
mod error;
mod serialize;

pub use vellum_core::{color, geometry, stroke, value};

pub use element::{Element, ElementKind, PathCursor, SVG_NAMESPACE};
pub use error::VellumError;
pub use serialize::Serializer;

use std::{fs, path::Path};

use log::{debug, info};

use config::AppConfig;

/// Renders element trees according to an [`AppConfig`].
///
/// # Examples
///
/// ```rust,no_run
/// use vellum::{Element, Renderer, config::AppConfig};
///
/// let renderer = Renderer::new(AppConfig::default());
/// let root = Element::svg();
///
/// renderer.render_to_file(&root, "out.svg")
///     .expect("Failed to write SVG");
/// ```
#[derive(Debug, Default)]
pub struct Renderer {
    config: AppConfig,
}

impl Renderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Serialize `root` and its subtree to markup text.
    pub fn render(&self, root: &Element) -> String {
        let serializer = Serializer::new(self.config.output().indent());
        let markup = serializer.serialize(root, 0);
        debug!(bytes = markup.len(); "Element tree rendered");
        markup
    }

    /// Serialize `root` and write it, followed by a newline, to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::Io`] if the file cannot be written.
    pub fn render_to_file(&self, root: &Element, path: impl AsRef<Path>) -> Result<(), VellumError> {
        let path = path.as_ref();
        let mut markup = self.render(root);
        markup.push('\n');

        fs::write(path, markup)?;

        info!(path = path.display().to_string(); "SVG written");
        Ok(())
    }
}
