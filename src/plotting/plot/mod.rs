//! Plot types for visualizing data.

mod area;
mod line;
mod reference;

pub use area::FillBetween;
pub use line::LinePlot;
pub use reference::HLine;

use crate::plotting::element::{Bounds, LegendEntry};
use crate::plotting::scale::Scale;
use crate::plotting::style::{FillStyle, LineStyle, MarkerStyle};

/// Maps data coordinates to pixel coordinates through the axis scales.
pub struct Projection<'a> {
    pub x_scale: &'a dyn Scale,
    pub y_scale: &'a dyn Scale,
    /// Plot area in pixels
    pub pixel: Bounds,
}

impl Projection<'_> {
    pub fn px(&self, x: f64) -> f64 {
        self.pixel.x_min + self.x_scale.transform(x) * self.pixel.width()
    }

    // SVG y grows downward
    pub fn py(&self, y: f64) -> f64 {
        self.pixel.y_max - self.y_scale.transform(y) * self.pixel.height()
    }

    /// Project a data point; `None` when either coordinate has no position
    /// on its scale.
    pub fn point(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let (px, py) = (self.px(x), self.py(y));
        if px.is_finite() && py.is_finite() {
            Some((px, py))
        } else {
            None
        }
    }
}

/// Trait for plot types that can be rendered.
pub trait Plot {
    /// Get the data bounds for this plot. Either axis may be left inverted
    /// (see [`Bounds::empty`]) when the plot does not constrain it.
    fn bounds(&self) -> Option<Bounds>;

    /// Get the label for this plot (for legend).
    fn label(&self) -> Option<&str>;

    /// Get the line style for legend display.
    fn line_style(&self) -> Option<LineStyle> {
        None
    }

    /// Get the marker style for legend display.
    fn marker_style(&self) -> Option<MarkerStyle> {
        None
    }

    /// Get the fill style for legend display.
    fn fill_style(&self) -> Option<FillStyle> {
        None
    }

    /// Create a legend entry for this plot.
    fn legend_entry(&self) -> Option<LegendEntry> {
        self.label().map(|label| {
            let mut entry = LegendEntry::new(label);
            if let Some(style) = self.line_style() {
                entry = entry.line_style(style);
            }
            if let Some(style) = self.marker_style() {
                entry = entry.marker_style(style);
            }
            if let Some(style) = self.fill_style() {
                entry = entry.fill_style(style);
            }
            entry
        })
    }

    /// Render this plot to SVG, returning the SVG elements as a string.
    fn render_svg(&self, projection: &Projection<'_>) -> String;
}

/// Split `(x, y)` pairs into runs of finite points; non-finite values break
/// the line.
pub(crate) fn finite_runs(x: &[f64], y: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (&xv, &yv) in x.iter().zip(y.iter()) {
        if xv.is_finite() && yv.is_finite() {
            current.push((xv, yv));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// SVG path data through already projected points.
pub(crate) fn path_data(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            if i == 0 {
                format!("M{:.2},{:.2}", x, y)
            } else {
                format!(" L{:.2},{:.2}", x, y)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_runs_split_on_nan() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [1.0, f64::NAN, 2.0, 3.0, f64::INFINITY];
        let runs = finite_runs(&x, &y);
        assert_eq!(runs, vec![vec![(0.0, 1.0)], vec![(2.0, 2.0), (3.0, 3.0)]]);
    }

    #[test]
    fn test_path_data() {
        assert_eq!(path_data(&[(0.0, 1.0), (2.0, 3.0)]), "M0.00,1.00 L2.00,3.00");
        assert!(path_data(&[]).is_empty());
    }
}
