//! SVG rendering backend.

/// SVG document builder. Content is laid out in user units (points); the
/// rendered `width`/`height` attributes carry the pixel size, so resolution
/// only scales the output.
#[derive(Debug)]
pub struct SvgBackend {
    /// Drawing width in points
    pub width: f64,
    /// Drawing height in points
    pub height: f64,
    /// Output size in pixels
    pixel_size: (f64, f64),
    /// SVG content accumulated during rendering
    content: Vec<String>,
}

impl SvgBackend {
    /// Create a new SVG backend with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            pixel_size: (width, height),
            content: Vec::new(),
        }
    }

    /// Set the rendered size in pixels.
    pub fn pixel_size(mut self, width: f64, height: f64) -> Self {
        self.pixel_size = (width, height);
        self
    }

    /// Add raw SVG content.
    pub fn add_content(&mut self, content: String) {
        self.content.push(content);
    }

    /// Render the final SVG string.
    pub fn render(self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
{}
</svg>"#,
            self.pixel_size.0.round(),
            self.pixel_size.1.round(),
            self.width,
            self.height,
            self.content.join("\n")
        )
    }
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self::new(576.0, 432.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_box_in_points_size_in_pixels() {
        let mut backend = SvgBackend::new(864.0, 432.0).pixel_size(1200.0, 600.0);
        backend.add_content("<g/>".to_string());
        let svg = backend.render();
        assert!(svg.contains("width=\"1200\" height=\"600\" viewBox=\"0 0 864 432\""));
        assert!(svg.contains("<g/>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
