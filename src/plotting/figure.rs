//! Figure (canvas) implementation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::plotting::axes::Axes;
use crate::plotting::backend::SvgBackend;
use crate::plotting::element::{Bounds, Text, TextCoords};
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::style::{Color, Theme, ThemeConfig};

/// Points per inch; figure content is laid out in points.
pub const POINTS_PER_INCH: f64 = 72.0;

/// A figure containing one or more axes (subplots).
pub struct Figure {
    /// Figure width in inches
    pub width: f64,
    /// Figure height in inches
    pub height: f64,
    /// Output resolution in dots per inch
    pub dpi: f64,
    pub background: Color,
    /// Axes (subplots) in this figure
    axes: Vec<Axes>,
    /// Text placed in figure coordinates
    texts: Vec<Text>,
    /// Theme configuration
    pub theme: ThemeConfig,
}

impl Figure {
    /// Create a new figure with the given size in inches.
    pub fn new(width: f64, height: f64) -> Self {
        Figure::with_theme_config(width, height, Theme::Default.config())
    }

    /// Create a figure whose background and future axes follow `theme`.
    pub fn with_theme_config(width: f64, height: f64, theme: ThemeConfig) -> Self {
        Figure {
            width,
            height,
            dpi: POINTS_PER_INCH,
            background: theme.background.clone(),
            axes: Vec::new(),
            texts: Vec::new(),
            theme,
        }
    }

    /// Create a figure with default dimensions (8 x 6 inches).
    pub fn default_size() -> Self {
        Self::new(8.0, 6.0)
    }

    /// Set the output resolution.
    pub fn dpi(mut self, dpi: f64) -> Self {
        if dpi > 0.0 {
            self.dpi = dpi;
        }
        self
    }

    /// Add text positioned in figure fractions, (0, 0) bottom-left.
    pub fn figtext(&mut self, text: Text) -> &mut Self {
        self.texts.push(text.coords(TextCoords::Figure));
        self
    }

    /// Figure-level texts in insertion order.
    pub fn texts(&self) -> &[Text] {
        &self.texts
    }

    /// Add a subplot at the given position.
    /// Uses matplotlib-style indexing: (rows, cols, index) where index is 1-based.
    pub fn add_subplot(&mut self, rows: usize, cols: usize, index: usize) -> &mut Axes {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let index = index.saturating_sub(1);
        let row = index / cols;
        let col = index % cols;

        // Calculate position with margins
        let margin = 0.06;
        let subplot_width = (1.0 - 2.0 * margin) / cols as f64;
        let subplot_height = (1.0 - 2.0 * margin) / rows as f64;

        let left = margin + col as f64 * subplot_width + 0.04;
        let right = margin + (col + 1) as f64 * subplot_width - 0.01;
        let bottom = margin + (rows - 1 - row.min(rows - 1)) as f64 * subplot_height + 0.05;
        let top = margin + (rows - row.min(rows - 1)) as f64 * subplot_height - 0.02;

        let mut axes = Axes::themed(self.theme.clone());
        axes.position = Bounds::new(left, right, bottom, top);

        self.axes.push(axes);
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    /// Get the current (last) axes, creating it if necessary.
    pub fn gca(&mut self) -> &mut Axes {
        if self.axes.is_empty() {
            self.add_subplot(1, 1, 1);
        }
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut [Axes] {
        &mut self.axes
    }

    /// Move the top edge of every axes to `top` (figure fraction), leaving
    /// room above for figure-level text.
    pub fn subplots_adjust_top(&mut self, top: f64) {
        for ax in &mut self.axes {
            if top > ax.position.y_min {
                ax.position.y_max = top;
            }
        }
    }

    /// Drawing size in points.
    pub fn size_points(&self) -> (f64, f64) {
        (self.width * POINTS_PER_INCH, self.height * POINTS_PER_INCH)
    }

    /// Output size in pixels.
    pub fn size_pixels(&self) -> (f64, f64) {
        (self.width * self.dpi, self.height * self.dpi)
    }

    /// Render the figure to an SVG string.
    pub fn render(&self) -> String {
        let (width, height) = self.size_points();
        let (px_width, px_height) = self.size_pixels();
        let mut backend = SvgBackend::new(width, height).pixel_size(px_width, px_height);

        backend.add_content(format!(
            "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            width,
            height,
            self.background.to_svg_string()
        ));

        for axes in &self.axes {
            backend.add_content(axes.render_svg(width, height));
        }

        for text in &self.texts {
            backend.add_content(text.to_svg_at(text.x * width, (1.0 - text.y) * height));
        }

        backend.render()
    }

    /// Save the figure to a file. The format follows the extension; only
    /// `.svg` is supported.
    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        if ext != "svg" {
            return Err(PlotError::UnsupportedFormat(ext));
        }

        let svg = self.render();
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(svg.as_bytes())?;
        writer.flush()?;
        info!("Saved figure to {}", path.display());
        Ok(())
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::default_size()
    }
}

impl std::fmt::Debug for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Figure")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("dpi", &self.dpi)
            .field("background", &self.background)
            .field("axes", &self.axes.len())
            .field("texts", &self.texts.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gca_creates_single_axes() {
        let mut fig = Figure::default();
        fig.gca();
        fig.gca();
        assert_eq!(fig.axes().len(), 1);
    }

    #[test]
    fn test_dpi_scales_pixels_only() {
        let fig = Figure::new(12.0, 6.0).dpi(100.0);
        assert_eq!(fig.size_points(), (864.0, 432.0));
        assert_eq!(fig.size_pixels(), (1200.0, 600.0));
        assert!(fig.render().contains("width=\"1200\" height=\"600\""));
    }

    #[test]
    fn test_figtext_rendered_in_figure_coordinates() {
        let mut fig = Figure::new(10.0, 5.0);
        fig.figtext(Text::new("hello", 0.5, 0.9));
        let svg = fig.render();
        assert!(svg.contains("x=\"360.00\" y=\"36.00\""));
        assert_eq!(fig.texts()[0].coords, TextCoords::Figure);
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let fig = Figure::default();
        let err = fig.save("chart.png").unwrap_err();
        assert!(matches!(err, PlotError::UnsupportedFormat(ref e) if e == "png"));
    }

    #[test]
    fn test_save_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let mut fig = Figure::default();
        fig.gca().plot(vec![0.0, 1.0], vec![1.0, 2.0]).build();
        fig.save(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<?xml"));
    }
}
