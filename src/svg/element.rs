//! Primitive SVG elements: rectangles and text labels.
//!
//! Elements are built with chained setters and turned into [`Fragment`]s,
//! the unit of paint order inside a document body.

use std::fmt;

use crate::types::Colour;

/// Default text colour.
pub const TEXT_FILL: Colour = Colour::hex(0xE5EDFF);

const FONT_FAMILY: &str = "Inter, SF Pro Display, sans-serif";

/// A fill: either a flat colour or a reference to a definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Colour(Colour),
    /// `url(#id)` reference to a gradient in the document's defs.
    Url(String),
}

impl Paint {
    /// Reference a definition by id.
    pub fn url(id: impl Into<String>) -> Self {
        Paint::Url(id.into())
    }
}

impl From<Colour> for Paint {
    fn from(colour: Colour) -> Self {
        Paint::Colour(colour)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Colour(c) => write!(f, "{}", c),
            Paint::Url(id) => write!(f, "url(#{})", id),
        }
    }
}

/// One rendered markup element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A filled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: Paint,
    stroke: Option<(Colour, f64)>,
    radius: f64,
    opacity: f64,
}

/// Start a rectangle with no stroke, square corners and full opacity.
pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: impl Into<Paint>) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
        fill: fill.into(),
        stroke: None,
        radius: 0.0,
        opacity: 1.0,
    }
}

impl Rect {
    /// Outline the rectangle.
    pub fn stroke(mut self, colour: Colour, width: f64) -> Self {
        self.stroke = Some((colour, width));
        self
    }

    /// Round the corners.
    pub fn rounded(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Render to markup. Default-valued attributes are omitted.
    pub fn to_fragment(&self) -> Fragment {
        let mut out = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            self.x, self.y, self.width, self.height, self.fill
        );
        if self.opacity != 1.0 {
            out.push_str(&format!(r#" opacity="{}""#, self.opacity));
        }
        if let Some((colour, width)) = self.stroke {
            out.push_str(&format!(r#" stroke="{}" stroke-width="{}""#, colour, width));
        }
        if self.radius != 0.0 {
            out.push_str(&format!(r#" rx="{}""#, self.radius));
        }
        out.push_str(" />");
        Fragment(out)
    }
}

impl From<Rect> for Fragment {
    fn from(rect: Rect) -> Self {
        rect.to_fragment()
    }
}

/// A single-line text label positioned by its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    x: f64,
    y: f64,
    content: String,
    size: u32,
    fill: Colour,
    weight: u32,
    opacity: f64,
}

/// Start a label at size 28, weight 600, in the default text colour.
pub fn text(x: f64, y: f64, content: impl Into<String>) -> Text {
    Text {
        x,
        y,
        content: content.into(),
        size: 28,
        fill: TEXT_FILL,
        weight: 600,
        opacity: 1.0,
    }
}

impl Text {
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn fill(mut self, fill: Colour) -> Self {
        self.fill = fill;
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Render to markup. The content is XML-escaped.
    pub fn to_fragment(&self) -> Fragment {
        Fragment(format!(
            r#"<text x="{}" y="{}" fill="{}" font-family="{}" font-size="{}" font-weight="{}" opacity="{}">{}</text>"#,
            self.x,
            self.y,
            self.fill,
            FONT_FAMILY,
            self.size,
            self.weight,
            self.opacity,
            escape_xml(&self.content)
        ))
    }
}

impl From<Text> for Fragment {
    fn from(text: Text) -> Self {
        text.to_fragment()
    }
}

/// Escape the five XML-significant characters.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
