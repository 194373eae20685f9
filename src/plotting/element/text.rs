//! Text element for labels and annotations.

use crate::plotting::style::{Color, TextAnchor, TextStyle};

/// Coordinate system a text position is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextCoords {
    /// Data coordinates of the owning axes
    #[default]
    Data,
    /// Fractions of the axes box, (0, 0) bottom-left
    Axes,
    /// Fractions of the figure, (0, 0) bottom-left
    Figure,
}

/// A text element that can be rendered on a plot.
#[derive(Debug, Clone)]
pub struct Text {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub coords: TextCoords,
    pub style: TextStyle,
}

impl Text {
    /// Create a new text element.
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Text {
            content: content.into(),
            x,
            y,
            coords: TextCoords::Data,
            style: TextStyle::default(),
        }
    }

    pub fn coords(mut self, coords: TextCoords) -> Self {
        self.coords = coords;
        self
    }

    /// Set the style for this text.
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.style.font_size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.style = self.style.bold();
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.style.color = color.into();
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.style.anchor = anchor;
        self
    }

    /// Set the rotation angle in degrees.
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.style.rotation = degrees;
        self
    }

    /// Generate SVG for this text placed at the given pixel position.
    pub fn to_svg_at(&self, px: f64, py: f64) -> String {
        let transform = if self.style.rotation != 0.0 {
            format!(" transform=\"rotate({},{:.2},{:.2})\"", self.style.rotation, px, py)
        } else {
            String::new()
        };

        format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" {}{}>{}</text>\n",
            px,
            py,
            self.style.to_svg_attrs(),
            transform,
            escape_xml(&self.content)
        )
    }
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_rotated_text() {
        let svg = Text::new("y", 0.0, 0.0).rotation(-90.0).to_svg_at(10.0, 20.0);
        assert!(svg.contains("rotate(-90,10.00,20.00)"));
        assert!(svg.contains(">y</text>"));
    }
}
