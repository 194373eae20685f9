//! Reference lines spanning the axes.

use super::{Plot, Projection};
use crate::plotting::element::Bounds;
use crate::plotting::style::{Color, LineStyle};

/// A horizontal line at a data `y`, spanning the `[xmin, xmax]` fraction of
/// the axes width.
#[derive(Debug, Clone)]
pub struct HLine {
    pub y: f64,
    pub xmin: f64,
    pub xmax: f64,
    pub line_style: LineStyle,
    pub label: Option<String>,
}

impl HLine {
    pub fn new(y: f64) -> Self {
        HLine {
            y,
            xmin: 0.0,
            xmax: 1.0,
            line_style: LineStyle::default(),
            label: None,
        }
    }

    pub fn span(mut self, xmin: f64, xmax: f64) -> Self {
        self.xmin = xmin;
        self.xmax = xmax;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.line_style.color = color.into();
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.line_style.width = width;
        self
    }

    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Plot for HLine {
    /// Constrains only the y axis.
    fn bounds(&self) -> Option<Bounds> {
        if !self.y.is_finite() {
            return None;
        }
        let mut bounds = Bounds::empty();
        bounds.y_min = self.y;
        bounds.y_max = self.y;
        Some(bounds)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn line_style(&self) -> Option<LineStyle> {
        Some(self.line_style.clone())
    }

    fn render_svg(&self, projection: &Projection<'_>) -> String {
        let py = projection.py(self.y);
        if !py.is_finite() {
            return String::new();
        }
        let pixel = &projection.pixel;
        let x1 = pixel.x_min + self.xmin * pixel.width();
        let x2 = pixel.x_min + self.xmax * pixel.width();
        format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
            x1,
            py,
            x2,
            py,
            self.line_style.to_svg_style()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::scale::LinearScale;

    #[test]
    fn test_bounds_constrain_only_y() {
        let bounds = HLine::new(3.0).bounds().unwrap();
        assert_eq!((bounds.y_min, bounds.y_max), (3.0, 3.0));
        assert!(!bounds.x_min.is_finite());
    }

    #[test]
    fn test_spans_axes_width() {
        let xs = LinearScale::new(0.0, 1.0).unwrap();
        let ys = LinearScale::new(0.0, 4.0).unwrap();
        let projection = Projection {
            x_scale: &xs,
            y_scale: &ys,
            pixel: Bounds::new(10.0, 110.0, 0.0, 40.0),
        };
        let svg = HLine::new(1.0).render_svg(&projection);
        assert!(svg.contains("x1=\"10.00\" y1=\"30.00\" x2=\"110.00\" y2=\"30.00\""));
    }
}
