//! Marker styles for line plot points.

use std::str::FromStr;

use super::color::Color;
use crate::plotting::error::PlotError;

/// Marker shapes for data points.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Marker {
    /// No marker
    #[default]
    None,
    /// Circle marker (`o`)
    Circle,
    /// Small filled dot (`.`)
    Point,
    /// Single-pixel dot (`,`)
    Pixel,
    /// Plus sign (`+`)
    Plus,
    /// X/Cross marker (`x`)
    Cross,
    /// Vertical tick (`|`)
    VLine,
    /// Horizontal tick (`-` or `_`)
    HLine,
    /// Upward-pointing triangle (`^`)
    Triangle,
    /// Downward-pointing triangle (`v`)
    TriangleDown,
    /// Square marker (`s`)
    Square,
    /// Diamond marker (`D`)
    Diamond,
}

impl Marker {
    /// Parse a matplotlib-style marker code.
    pub fn from_code(code: &str) -> Option<Self> {
        let marker = match code {
            "" | "None" | "none" => Marker::None,
            "o" => Marker::Circle,
            "." => Marker::Point,
            "," => Marker::Pixel,
            "+" => Marker::Plus,
            "x" | "X" => Marker::Cross,
            "|" => Marker::VLine,
            "-" | "_" => Marker::HLine,
            "^" => Marker::Triangle,
            "v" => Marker::TriangleDown,
            "s" => Marker::Square,
            "D" | "d" => Marker::Diamond,
            _ => return None,
        };
        Some(marker)
    }

    /// Whether the marker encloses an area that takes a face color.
    pub fn is_filled(&self) -> bool {
        matches!(
            self,
            Marker::Circle
                | Marker::Point
                | Marker::Pixel
                | Marker::Triangle
                | Marker::TriangleDown
                | Marker::Square
                | Marker::Diamond
        )
    }

    /// Generate SVG path data for the marker centered at origin.
    /// The size parameter is the radius (half the marker size).
    pub fn to_svg_path(&self, size: f64) -> Option<String> {
        let s = size;
        match self {
            Marker::None | Marker::Circle | Marker::Point | Marker::Pixel => None,
            Marker::Plus => Some(format!("M{},0 L{},0 M0,{} L0,{}", -s, s, -s, s)),
            Marker::Cross => {
                let d = s * std::f64::consts::FRAC_1_SQRT_2;
                Some(format!(
                    "M{:.2},{:.2} L{:.2},{:.2} M{:.2},{:.2} L{:.2},{:.2}",
                    -d, -d, d, d, -d, d, d, -d
                ))
            }
            Marker::VLine => Some(format!("M0,{} L0,{}", -s, s)),
            Marker::HLine => Some(format!("M{},0 L{},0", -s, s)),
            Marker::Triangle => {
                let h = s * 1.1547;
                Some(format!("M0,{:.2} L{:.2},{:.2} L{:.2},{:.2} Z", -h, -s, h * 0.5, s, h * 0.5))
            }
            Marker::TriangleDown => {
                let h = s * 1.1547;
                Some(format!("M0,{:.2} L{:.2},{:.2} L{:.2},{:.2} Z", h, -s, -h * 0.5, s, -h * 0.5))
            }
            Marker::Square => Some(format!(
                "M{},{} L{},{} L{},{} L{},{} Z",
                -s, -s, s, -s, s, s, -s, s
            )),
            Marker::Diamond => {
                let d = s * 1.2;
                Some(format!("M0,{:.2} L{:.2},0 L0,{:.2} L{:.2},0 Z", -d, d, d, -d))
            }
        }
    }

    /// Radius actually drawn for circle-like markers of the given size.
    fn dot_radius(&self, size: f64) -> Option<f64> {
        match self {
            Marker::Circle => Some(size / 2.0),
            Marker::Point => Some(size / 4.0),
            Marker::Pixel => Some(0.5),
            _ => None,
        }
    }
}

impl FromStr for Marker {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Marker::from_code(s.trim())
            .ok_or_else(|| PlotError::InvalidConfig(format!("unknown marker '{}'", s)))
    }
}

/// Style configuration for markers.
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    /// The marker shape
    pub marker: Marker,
    /// Marker size (diameter in points)
    pub size: f64,
    /// Face color
    pub fill: Color,
    /// Edge/stroke color
    pub edge_color: Color,
    /// Edge/stroke width
    pub edge_width: f64,
}

impl MarkerStyle {
    /// Create a new marker style.
    pub fn new(marker: Marker) -> Self {
        MarkerStyle {
            marker,
            ..Default::default()
        }
    }

    /// Set the marker size.
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the face color.
    pub fn fill(mut self, color: impl Into<Color>) -> Self {
        self.fill = color.into();
        self
    }

    /// Set the edge color.
    pub fn edge_color(mut self, color: impl Into<Color>) -> Self {
        self.edge_color = color.into();
        self
    }

    /// Set the edge width.
    pub fn edge_width(mut self, width: f64) -> Self {
        self.edge_width = width;
        self
    }

    /// Generate SVG style attributes. Open markers (`+`, `x`, ticks) are
    /// stroked with the edge color and never filled.
    pub fn to_svg_style(&self) -> String {
        let fill = if self.marker.is_filled() {
            self.fill.to_svg_string()
        } else {
            "none".to_string()
        };
        format!(
            "fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
            fill,
            self.edge_color.to_svg_string(),
            self.edge_width
        )
    }

    /// Render the marker at a specific position, returning SVG elements.
    pub fn render_at(&self, x: f64, y: f64) -> String {
        let style = self.to_svg_style();

        if let Some(radius) = self.marker.dot_radius(self.size) {
            format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>\n",
                x, y, radius, style
            )
        } else if let Some(path) = self.marker.to_svg_path(self.size / 2.0) {
            format!(
                "<path d=\"{}\" transform=\"translate({:.2},{:.2})\" {}/>\n",
                path, x, y, style
            )
        } else {
            String::new()
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            marker: Marker::Circle,
            size: 6.0,
            fill: Color::default(),
            edge_color: Color::default(),
            edge_width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_codes() {
        let codes = ["o", "+", "x", "|", "-", ",", ".", "^", "v"];
        let parsed: Vec<Marker> = codes.iter().map(|c| c.parse().unwrap()).collect();
        assert_eq!(parsed[0], Marker::Circle);
        assert_eq!(parsed[1], Marker::Plus);
        assert_eq!(parsed[4], Marker::HLine);
        assert!("?".parse::<Marker>().is_err());
    }

    #[test]
    fn test_open_markers_are_not_filled() {
        let style = MarkerStyle::new(Marker::Plus).fill("red").edge_color("blue");
        assert!(style.to_svg_style().starts_with("fill=\"none\""));
        let svg = style.render_at(10.0, 10.0);
        assert!(svg.starts_with("<path"));
    }

    #[test]
    fn test_circle_renders_circle_element() {
        let svg = MarkerStyle::new(Marker::Circle).size(8.0).render_at(1.0, 2.0);
        assert!(svg.contains("r=\"4.00\""));
    }

    #[test]
    fn test_none_renders_nothing() {
        assert!(MarkerStyle::new(Marker::None).render_at(0.0, 0.0).is_empty());
    }
}
