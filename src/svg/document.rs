//! Whole SVG documents.

use std::fmt::Write as _;

use crate::types::Colour;

use super::Fragment;

/// Separator placed between body fragments.
pub const FRAGMENT_SEPARATOR: &str = "\n";

/// A linear gradient definition, referenced with `Paint::url(id)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    /// Start and end points as percentages: `(x1, y1)` to `(x2, y2)`.
    pub from: (u8, u8),
    pub to: (u8, u8),
    /// `(offset percent, colour)` pairs.
    pub stops: Vec<(u8, Colour)>,
}

impl LinearGradient {
    /// A two-stop gradient running from the top-left to the bottom-right corner.
    pub fn diagonal(id: impl Into<String>, start: Colour, end: Colour) -> Self {
        Self {
            id: id.into(),
            from: (0, 0),
            to: (100, 100),
            stops: vec![(0, start), (100, end)],
        }
    }

    /// A two-stop gradient running from top to bottom.
    pub fn vertical(id: impl Into<String>, start: Colour, end: Colour) -> Self {
        Self {
            id: id.into(),
            from: (0, 0),
            to: (0, 100),
            stops: vec![(0, start), (100, end)],
        }
    }

    fn write_to(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"<linearGradient id="{}" x1="{}%" x2="{}%" y1="{}%" y2="{}%">"#,
            self.id, self.from.0, self.to.0, self.from.1, self.to.1
        );
        for (offset, colour) in &self.stops {
            let _ = write!(out, r#"<stop offset="{}%" stop-color="{}" />"#, offset, colour);
        }
        out.push_str("</linearGradient>");
    }
}

/// A sized SVG document: definitions plus body fragments in paint order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    width: u32,
    height: u32,
    defs: Vec<LinearGradient>,
    body: Vec<Fragment>,
}

impl Document {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            defs: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a gradient definition.
    pub fn define(&mut self, gradient: LinearGradient) -> &mut Self {
        self.defs.push(gradient);
        self
    }

    /// Append one fragment. Later fragments paint over earlier ones.
    pub fn push(&mut self, fragment: impl Into<Fragment>) -> &mut Self {
        self.body.push(fragment.into());
        self
    }

    /// Append fragments in order.
    pub fn extend(&mut self, fragments: impl IntoIterator<Item = Fragment>) -> &mut Self {
        self.body.extend(fragments);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn body(&self) -> &[Fragment] {
        &self.body
    }

    /// Render the complete document text.
    pub fn render(&self) -> String {
        assemble(self.width, self.height, &self.body, &self.defs)
    }
}

/// Wrap body fragments and definitions into a complete SVG document.
///
/// The viewBox matches the pixel size and edges render crisp.
pub fn assemble(width: u32, height: u32, body: &[Fragment], defs: &[LinearGradient]) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        out,
        r#"<svg width="{w}px" height="{h}px" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" shape-rendering="crispEdges">"#,
        w = width,
        h = height
    );

    out.push_str("<defs>");
    for gradient in defs {
        gradient.write_to(&mut out);
    }
    out.push_str("</defs>\n");

    for (i, fragment) in body.iter().enumerate() {
        if i > 0 {
            out.push_str(FRAGMENT_SEPARATOR);
        }
        out.push_str(fragment.as_str());
    }
    out.push_str("\n</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::{rect, text};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_assemble_empty_document() {
        let svg = assemble(320, 200, &[], &[]);
        assert_eq!(
            svg,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg width=\"320px\" height=\"200px\" viewBox=\"0 0 320 200\" \
             xmlns=\"http://www.w3.org/2000/svg\" shape-rendering=\"crispEdges\">\n\
             <defs></defs>\n\
             \n\
             </svg>\n"
        );
    }

    #[test]
    fn test_body_keeps_paint_order() {
        let mut doc = Document::new(10, 10);
        doc.push(rect(0.0, 0.0, 10.0, 10.0, Colour::hex(0x000000)))
            .push(text(1.0, 8.0, "top"));
        let svg = doc.render();

        let rect_at = svg.find("<rect").unwrap();
        let text_at = svg.find("<text").unwrap();
        assert!(rect_at < text_at);
        assert!(svg.contains("/>\n<text"));
    }

    #[test]
    fn test_gradient_definition() {
        let mut doc = Document::new(4, 4);
        doc.define(LinearGradient::vertical(
            "card",
            Colour::hex(0x101A2F),
            Colour::hex(0x0C1324),
        ));
        let svg = doc.render();
        assert!(svg.contains(
            r##"<defs><linearGradient id="card" x1="0%" x2="0%" y1="0%" y2="100%"><stop offset="0%" stop-color="#101A2F" /><stop offset="100%" stop-color="#0C1324" /></linearGradient></defs>"##
        ));
    }

    #[test]
    fn test_diagonal_gradient_direction() {
        let gradient = LinearGradient::diagonal("bg", Colour::hex(0x0B1220), Colour::hex(0x0F1C3A));
        let mut out = String::new();
        gradient.write_to(&mut out);
        assert!(out.starts_with(r#"<linearGradient id="bg" x1="0%" x2="100%" y1="0%" y2="100%">"#));
    }
}
