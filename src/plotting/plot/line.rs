//! Line plot implementation.

use super::{finite_runs, path_data, Plot, Projection};
use crate::plotting::element::Bounds;
use crate::plotting::style::{Color, DashPattern, DrawStyle, LineStyle, Marker, MarkerStyle};

/// A line plot connecting data points.
#[derive(Debug, Clone)]
pub struct LinePlot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub line_style: LineStyle,
    /// Marker style (optional)
    pub marker_style: Option<MarkerStyle>,
    /// How consecutive points are joined
    pub draw_style: DrawStyle,
    /// Label for legend
    pub label: Option<String>,
}

impl LinePlot {
    /// Create a new line plot from x and y data.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        LinePlot {
            x,
            y,
            line_style: LineStyle::default(),
            marker_style: None,
            draw_style: DrawStyle::Default,
            label: None,
        }
    }

    /// Set the line color. Marker edges follow the line color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.line_style.color = color.into();
        if let Some(ref mut marker) = self.marker_style {
            marker.edge_color = self.line_style.color.clone();
        }
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.line_style.width = width;
        self
    }

    /// Set the line style (dash pattern).
    pub fn linestyle(mut self, dash: DashPattern) -> Self {
        self.line_style.dash = dash;
        self
    }

    pub fn drawstyle(mut self, draw_style: DrawStyle) -> Self {
        self.draw_style = draw_style;
        self
    }

    /// Add markers to the line plot, filled and edged with the line color.
    pub fn marker(mut self, marker: Marker) -> Self {
        if marker == Marker::None {
            self.marker_style = None;
            return self;
        }
        let color = self.line_style.color.clone();
        self.marker_style = Some(MarkerStyle {
            marker,
            fill: color.clone(),
            edge_color: color,
            ..Default::default()
        });
        self
    }

    pub fn markersize(mut self, size: f64) -> Self {
        if let Some(ref mut marker) = self.marker_style {
            marker.size = size;
        }
        self
    }

    pub fn markeredgewidth(mut self, width: f64) -> Self {
        if let Some(ref mut marker) = self.marker_style {
            marker.edge_width = width;
        }
        self
    }

    /// Marker face color.
    pub fn markerfacecolor(mut self, color: impl Into<Color>) -> Self {
        if let Some(ref mut marker) = self.marker_style {
            marker.fill = color.into();
        }
        self
    }

    /// Set the label for the legend.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the complete line style.
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }
}

impl Plot for LinePlot {
    fn bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        for (&x, &y) in self.x.iter().zip(self.y.iter()) {
            if x.is_finite() && y.is_finite() {
                bounds.include_point(x, y);
            }
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

    fn line_style(&self) -> Option<LineStyle> {
        Some(self.line_style.clone())
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        self.marker_style.clone()
    }

    fn render_svg(&self, projection: &Projection<'_>) -> String {
        let mut svg = String::new();

        for run in finite_runs(&self.x, &self.y) {
            let stepped = self.draw_style.expand(&run);
            let points: Vec<(f64, f64)> = stepped
                .iter()
                .filter_map(|&(x, y)| projection.point(x, y))
                .collect();

            if points.len() >= 2 {
                svg.push_str(&format!(
                    "<path d=\"{}\" {}/>\n",
                    path_data(&points),
                    self.line_style.to_svg_style()
                ));
            }

            // Markers sit on the data points, not on the step corners
            if let Some(ref marker_style) = self.marker_style {
                for &(x, y) in &run {
                    if let Some((px, py)) = projection.point(x, y) {
                        svg.push_str(&marker_style.render_at(px, py));
                    }
                }
            }
        }

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::scale::{LinearScale, Scale};

    fn unit_projection<'a>(x: &'a dyn Scale, y: &'a dyn Scale) -> Projection<'a> {
        Projection {
            x_scale: x,
            y_scale: y,
            pixel: Bounds::new(0.0, 100.0, 0.0, 100.0),
        }
    }

    #[test]
    fn test_bounds_skip_nan() {
        let plot = LinePlot::new(vec![0.0, 1.0, 2.0], vec![5.0, f64::NAN, -1.0]);
        assert_eq!(plot.bounds(), Some(Bounds::new(0.0, 2.0, -1.0, 5.0)));
        assert!(LinePlot::new(vec![], vec![]).bounds().is_none());
    }

    #[test]
    fn test_marker_follows_color_with_custom_face() {
        let plot = LinePlot::new(vec![0.0], vec![0.0])
            .marker(Marker::Circle)
            .color("red")
            .markerfacecolor(Color::WHITE);
        let marker = plot.marker_style.unwrap();
        assert_eq!(marker.edge_color.to_hex(), "#ff0000");
        assert_eq!(marker.fill, Color::WHITE);
    }

    #[test]
    fn test_render_draws_path_and_markers() {
        let xs = LinearScale::new(0.0, 2.0).unwrap();
        let ys = LinearScale::new(0.0, 2.0).unwrap();
        let plot = LinePlot::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).marker(Marker::Plus);
        let svg = plot.render_svg(&unit_projection(&xs, &ys));
        assert_eq!(svg.matches("<path d=\"M0.00,100.00 L50.00,50.00 L100.00,0.00\"").count(), 1);
        assert_eq!(svg.matches("translate(").count(), 3);
    }

    #[test]
    fn test_steps_add_corners() {
        let xs = LinearScale::new(0.0, 1.0).unwrap();
        let ys = LinearScale::new(0.0, 1.0).unwrap();
        let plot = LinePlot::new(vec![0.0, 1.0], vec![0.0, 1.0]).drawstyle(DrawStyle::StepsPost);
        let svg = plot.render_svg(&unit_projection(&xs, &ys));
        assert!(svg.contains("M0.00,100.00 L100.00,100.00 L100.00,0.00"));
    }
}
