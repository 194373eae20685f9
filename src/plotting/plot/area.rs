//! Filled area between two curves.

use super::{path_data, Plot, Projection};
use crate::plotting::element::Bounds;
use crate::plotting::style::{Color, FillStyle, LineStyle};

/// The region between `y1` and `y2` over shared `x`, optionally outlined
/// along `y1`.
#[derive(Debug, Clone)]
pub struct FillBetween {
    pub x: Vec<f64>,
    pub y1: Vec<f64>,
    pub y2: Vec<f64>,
    pub fill_style: FillStyle,
    /// Outline drawn along `y1`
    pub edge: Option<LineStyle>,
    pub label: Option<String>,
}

impl FillBetween {
    pub fn new(x: Vec<f64>, y1: Vec<f64>, y2: Vec<f64>) -> Self {
        FillBetween {
            x,
            y1,
            y2,
            fill_style: FillStyle::default(),
            edge: None,
            label: None,
        }
    }

    /// Fill between `y` and a constant baseline.
    pub fn to_baseline(x: Vec<f64>, y: Vec<f64>, baseline: f64) -> Self {
        let y2 = vec![baseline; y.len()];
        FillBetween::new(x, y, y2)
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.fill_style.color = color.into();
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.fill_style = self.fill_style.opacity(alpha);
        self
    }

    pub fn edge(mut self, style: LineStyle) -> Self {
        self.edge = Some(style);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn finite_triples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.x
            .iter()
            .zip(self.y1.iter())
            .zip(self.y2.iter())
            .map(|((&x, &a), &b)| (x, a, b))
            .filter(|(x, a, b)| x.is_finite() && a.is_finite() && b.is_finite())
    }
}

impl Plot for FillBetween {
    fn bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        for (x, a, b) in self.finite_triples() {
            bounds.include_point(x, a);
            bounds.include_point(x, b);
        }
        if bounds.is_valid() {
            Some(bounds)
        } else {
            None
        }
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn fill_style(&self) -> Option<FillStyle> {
        Some(self.fill_style.clone())
    }

    fn render_svg(&self, projection: &Projection<'_>) -> String {
        let mut upper = Vec::new();
        let mut lower = Vec::new();
        for (x, a, b) in self.finite_triples() {
            if let (Some(p), Some(q)) = (projection.point(x, a), projection.point(x, b)) {
                upper.push(p);
                lower.push(q);
            }
        }
        if upper.len() < 2 {
            return String::new();
        }

        let mut outline = upper.clone();
        outline.extend(lower.iter().rev());
        let mut svg = format!(
            "<path d=\"{} Z\" {}/>\n",
            path_data(&outline),
            self.fill_style.to_svg_style()
        );
        if let Some(ref edge) = self.edge {
            svg.push_str(&format!(
                "<path d=\"{}\" {}/>\n",
                path_data(&upper),
                edge.to_svg_style()
            ));
        }
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::scale::LinearScale;

    #[test]
    fn test_bounds_cover_both_curves() {
        let area = FillBetween::to_baseline(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 2.0], -1.0);
        assert_eq!(area.bounds(), Some(Bounds::new(0.0, 2.0, -1.0, 3.0)));
    }

    #[test]
    fn test_render_closed_polygon_with_edge() {
        let xs = LinearScale::new(0.0, 1.0).unwrap();
        let ys = LinearScale::new(0.0, 1.0).unwrap();
        let projection = Projection {
            x_scale: &xs,
            y_scale: &ys,
            pixel: Bounds::new(0.0, 10.0, 0.0, 10.0),
        };
        let area = FillBetween::to_baseline(vec![0.0, 1.0], vec![1.0, 1.0], 0.0)
            .color("red")
            .edge(LineStyle::new().color(Color::WHITE));
        let svg = area.render_svg(&projection);
        assert!(svg.contains(
            "M0.00,0.00 L10.00,0.00 L10.00,10.00 L0.00,10.00 Z"
        ));
        assert_eq!(svg.matches("<path").count(), 2);
    }
}
