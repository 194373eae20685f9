//! Line styling options.

use std::str::FromStr;

use serde::Deserialize;

use super::color::Color;
use crate::plotting::error::PlotError;

/// Dash pattern for lines.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DashPattern {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line (default dash length)
    Dashed,
    /// Dotted line
    Dotted,
    /// Alternating dash-dot pattern
    DashDot,
    /// Custom dash array [dash_length, gap_length, ...]
    Custom(Vec<f64>),
}

impl DashPattern {
    /// Convert to SVG stroke-dasharray value.
    pub fn to_svg_dasharray(&self) -> Option<String> {
        match self {
            DashPattern::Solid => None,
            DashPattern::Dashed => Some("8,4".to_string()),
            DashPattern::Dotted => Some("2,2".to_string()),
            DashPattern::DashDot => Some("8,4,2,4".to_string()),
            DashPattern::Custom(arr) if arr.is_empty() => None,
            DashPattern::Custom(arr) => Some(
                arr.iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }
}

impl FromStr for DashPattern {
    type Err = PlotError;

    /// Accepts the long names (`solid`, `dashed`, `dashdot`, `dotted`) and
    /// the short format codes (`-`, `--`, `-.`, `:`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "solid" | "-" => Ok(DashPattern::Solid),
            "dashed" | "--" => Ok(DashPattern::Dashed),
            "dashdot" | "-." => Ok(DashPattern::DashDot),
            "dotted" | ":" => Ok(DashPattern::Dotted),
            other => Err(PlotError::InvalidConfig(format!(
                "unknown linestyle '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for DashPattern {
    type Error = PlotError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// How consecutive points of a line are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DrawStyle {
    /// Straight segments between points
    #[default]
    Default,
    /// Step at the start of each interval (`steps` is an alias)
    StepsPre,
    /// Step halfway between points
    StepsMid,
    /// Step at the end of each interval
    StepsPost,
}

impl DrawStyle {
    /// Expand a polyline into the vertices actually drawn for this style.
    pub fn expand(&self, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        if points.len() < 2 || *self == DrawStyle::Default {
            return points.to_vec();
        }
        let mut out = Vec::with_capacity(points.len() * 3);
        out.push(points[0]);
        for pair in points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            match self {
                DrawStyle::StepsPre => out.push((x0, y1)),
                DrawStyle::StepsPost => out.push((x1, y0)),
                DrawStyle::StepsMid => {
                    let xm = (x0 + x1) / 2.0;
                    out.push((xm, y0));
                    out.push((xm, y1));
                }
                DrawStyle::Default => {}
            }
            out.push((x1, y1));
        }
        out
    }
}

impl FromStr for DrawStyle {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "default" => Ok(DrawStyle::Default),
            "steps" | "steps-pre" => Ok(DrawStyle::StepsPre),
            "steps-mid" => Ok(DrawStyle::StepsMid),
            "steps-post" => Ok(DrawStyle::StepsPost),
            other => Err(PlotError::InvalidConfig(format!(
                "unknown drawstyle '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for DrawStyle {
    type Error = PlotError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Style configuration for lines.
#[derive(Debug, Clone)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Line width in points
    pub width: f64,
    /// Dash pattern
    pub dash: DashPattern,
    /// Opacity (0.0 - 1.0)
    pub opacity: f64,
}

impl LineStyle {
    /// Create a new line style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the line width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the dash pattern.
    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    /// Set the opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![
            format!("stroke=\"{}\"", self.color.to_svg_string()),
            format!("stroke-width=\"{}\"", self.width),
            "stroke-linecap=\"round\"".to_string(),
            "stroke-linejoin=\"round\"".to_string(),
            "fill=\"none\"".to_string(),
        ];

        if self.opacity < 1.0 {
            attrs.push(format!("stroke-opacity=\"{}\"", self.opacity));
        }

        if let Some(dasharray) = self.dash.to_svg_dasharray() {
            attrs.push(format!("stroke-dasharray=\"{}\"", dasharray));
        }

        attrs.join(" ")
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::default(),
            width: 1.5,
            dash: DashPattern::Solid,
            opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_linestyles() {
        assert_eq!("dashdot".parse::<DashPattern>().unwrap(), DashPattern::DashDot);
        assert_eq!("--".parse::<DashPattern>().unwrap(), DashPattern::Dashed);
        assert!("wavy".parse::<DashPattern>().is_err());
    }

    #[test]
    fn test_steps_post_expansion() {
        let pts = [(0.0, 1.0), (1.0, 2.0), (2.0, 0.0)];
        let out = DrawStyle::StepsPost.expand(&pts);
        assert_eq!(
            out,
            vec![(0.0, 1.0), (1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 0.0)]
        );
    }

    #[test]
    fn test_steps_alias_is_pre() {
        assert_eq!("steps".parse::<DrawStyle>().unwrap(), DrawStyle::StepsPre);
        let out = DrawStyle::StepsPre.expand(&[(0.0, 0.0), (1.0, 5.0)]);
        assert_eq!(out, vec![(0.0, 0.0), (0.0, 5.0), (1.0, 5.0)]);
    }

    #[test]
    fn test_dasharray() {
        assert_eq!(DashPattern::Solid.to_svg_dasharray(), None);
        assert_eq!(
            DashPattern::Custom(vec![3.0, 1.5]).to_svg_dasharray(),
            Some("3,1.5".to_string())
        );
    }
}
