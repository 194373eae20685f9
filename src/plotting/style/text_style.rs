//! Text styling options.

use super::color::Color;

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Light,
}

impl FontWeight {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
            FontWeight::Light => "300",
        }
    }
}

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Anchor at the start (left for LTR text)
    #[default]
    Start,
    Middle,
    /// Anchor at the end (right for LTR text)
    End,
}

impl TextAnchor {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Vertical alignment for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DominantBaseline {
    #[default]
    Auto,
    Middle,
    Hanging,
}

impl DominantBaseline {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            DominantBaseline::Auto => "auto",
            DominantBaseline::Middle => "middle",
            DominantBaseline::Hanging => "hanging",
        }
    }
}

/// Style configuration for text elements.
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Font family (e.g., "Arial", "sans-serif")
    pub font_family: String,
    /// Font size in points
    pub font_size: f64,
    pub weight: FontWeight,
    pub color: Color,
    pub anchor: TextAnchor,
    pub baseline: DominantBaseline,
    /// Rotation angle in degrees
    pub rotation: f64,
}

impl TextStyle {
    /// Create a new text style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn baseline(mut self, baseline: DominantBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Generate SVG attributes (excluding position and rotation).
    pub fn to_svg_attrs(&self) -> String {
        let mut attrs = vec![
            format!("font-family=\"{}\"", self.font_family),
            format!("font-size=\"{}\"", self.font_size),
            format!("font-weight=\"{}\"", self.weight.to_svg_string()),
            format!("fill=\"{}\"", self.color.to_svg_string()),
            format!("text-anchor=\"{}\"", self.anchor.to_svg_string()),
        ];
        if self.baseline != DominantBaseline::Auto {
            attrs.push(format!(
                "dominant-baseline=\"{}\"",
                self.baseline.to_svg_string()
            ));
        }
        attrs.join(" ")
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            weight: FontWeight::Normal,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
            baseline: DominantBaseline::Auto,
            rotation: 0.0,
        }
    }
}
