//! Markup serialization.
//!
//! The output grammar is:
//!
//! ```text
//! ELEMENT := "<" TAG ATTR* ( " />" | ">" ( "\n" INDENT ELEMENT )* "\n" INDENT "</" TAG ">" )
//! ATTR    := " " NAME "=\"" VALUE "\""
//! ```
//!
//! with one indent unit per nesting depth. Elements without children
//! self-close. Text elements always render as `<text ATTR*>CONTENT</text>`
//! on a single line, whatever children they hold.
//!
//! Attribute values and text content are escaped, so the output stays
//! well-formed whatever text the caller stored.

use log::debug;

use crate::{
    config::Indent,
    element::{Element, ElementKind},
};

/// Renders element trees to markup text.
///
/// # Example
///
/// ```
/// use vellum::{Element, Serializer, config::Indent};
///
/// let mut group = Element::group();
/// group.add_child(Element::circle(1.0, 2.0, 3.0));
///
/// let text = Serializer::new(Indent::Spaces(2)).serialize(&group, 0);
/// assert_eq!(text, "<g>\n  <circle cx=\"1\" cy=\"2\" r=\"3\" />\n</g>");
/// ```
#[derive(Debug, Clone)]
pub struct Serializer {
    indent_unit: String,
}

impl Serializer {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_unit: indent.unit(),
        }
    }

    /// Serializes `element` and its subtree, starting at `indent_level`.
    pub fn serialize(&self, element: &Element, indent_level: usize) -> String {
        debug!(
            tag = element.tag(),
            indent_level = indent_level,
            children = element.children().len();
            "Serializing element tree"
        );

        let mut out = String::new();
        self.write_element(&mut out, element, indent_level);
        out
    }

    fn write_element(&self, out: &mut String, element: &Element, indent_level: usize) {
        let indent = self.indent_unit.repeat(indent_level);
        let tag = element.tag();

        out.push_str(&indent);
        out.push('<');
        out.push_str(tag);
        for (name, value) in element.attributes() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(out, value, true);
            out.push('"');
        }

        if matches!(element.kind(), ElementKind::Text) {
            out.push('>');
            escape_into(out, element.content().unwrap_or_default(), false);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
            return;
        }

        if element.children().is_empty() {
            out.push_str(" />");
            return;
        }

        out.push_str(">\n");
        for child in element.children() {
            self.write_element(out, child, indent_level + 1);
            out.push('\n');
        }
        out.push_str(&indent);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

fn escape_into(out: &mut String, text: &str, in_attribute: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
