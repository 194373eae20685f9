//! Legend configuration and rendering.

use crate::plotting::style::{Color, FillStyle, LineStyle, MarkerStyle, TextStyle};

/// Position of the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    #[default]
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
    /// Center top
    Top,
    /// Center bottom
    Bottom,
    /// Center left
    Left,
    /// Center right
    Right,
    /// Center
    Center,
}

impl LegendPosition {
    /// Get the anchor point for this position (in normalized coordinates).
    pub fn anchor(&self) -> (f64, f64) {
        match self {
            LegendPosition::TopLeft => (0.02, 0.98),
            LegendPosition::TopRight => (0.98, 0.98),
            LegendPosition::BottomLeft => (0.02, 0.02),
            LegendPosition::BottomRight => (0.98, 0.02),
            LegendPosition::Top => (0.5, 0.98),
            LegendPosition::Bottom => (0.5, 0.02),
            LegendPosition::Left => (0.02, 0.5),
            LegendPosition::Right => (0.98, 0.5),
            LegendPosition::Center => (0.5, 0.5),
        }
    }

    /// Map a matplotlib `loc` code (0 = best, 1 = upper right, ...) to a
    /// position. "Best" has no placement search here and maps to top right.
    pub fn from_loc(code: u8) -> Self {
        match code {
            2 => LegendPosition::TopLeft,
            3 => LegendPosition::BottomLeft,
            4 => LegendPosition::BottomRight,
            5 | 7 => LegendPosition::Right,
            6 => LegendPosition::Left,
            8 => LegendPosition::Bottom,
            9 => LegendPosition::Top,
            10 => LegendPosition::Center,
            _ => LegendPosition::TopRight,
        }
    }
}

/// A single entry in the legend.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    /// Label text
    pub label: String,
    /// Line style (if applicable)
    pub line_style: Option<LineStyle>,
    /// Marker style (if applicable)
    pub marker_style: Option<MarkerStyle>,
    /// Fill style (for bar charts, etc.)
    pub fill_style: Option<FillStyle>,
}

impl LegendEntry {
    /// Create a new legend entry with just a label.
    pub fn new(label: impl Into<String>) -> Self {
        LegendEntry {
            label: label.into(),
            line_style: None,
            marker_style: None,
            fill_style: None,
        }
    }

    /// Set the line style.
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    /// Set the marker style.
    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = Some(style);
        self
    }

    /// Set the fill style.
    pub fn fill_style(mut self, style: FillStyle) -> Self {
        self.fill_style = Some(style);
        self
    }
}

/// Legend configuration.
#[derive(Debug, Clone)]
pub struct Legend {
    /// Legend entries
    pub entries: Vec<LegendEntry>,
    /// Position of the legend
    pub position: LegendPosition,
    /// Whether the legend is visible
    pub visible: bool,
    /// Background fill style
    pub background: FillStyle,
    /// Text style for labels
    pub text_style: TextStyle,
    /// Padding inside the legend box
    pub padding: f64,
    /// Spacing between entries
    pub entry_spacing: f64,
    /// Length of the line sample in the legend
    pub line_length: f64,
    /// Number of columns entries are laid out in
    pub ncol: usize,
    /// Gap between line/marker and label
    pub label_gap: f64,
}

impl Legend {
    /// Create a new legend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the legend.
    pub fn add_entry(&mut self, entry: LegendEntry) {
        self.entries.push(entry);
    }

    /// Set the position.
    pub fn position(mut self, position: LegendPosition) -> Self {
        self.position = position;
        self
    }

    /// Set visibility.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the background style.
    pub fn background(mut self, style: FillStyle) -> Self {
        self.background = style;
        self
    }

    /// Set the text style.
    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    /// Lay entries out in `ncol` columns (at least one).
    pub fn ncol(mut self, ncol: usize) -> Self {
        self.ncol = ncol.max(1);
        self
    }

    /// Rows needed to hold every entry.
    pub fn rows(&self) -> usize {
        let ncol = self.ncol.max(1);
        (self.entries.len() + ncol - 1) / ncol
    }

    /// Estimated width of one column, sized to the longest label.
    pub fn column_width(&self) -> f64 {
        let longest = self
            .entries
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0);
        self.line_length + self.label_gap + longest as f64 * self.text_style.font_size * 0.6
    }

    /// Total (width, height) of the legend box.
    pub fn size(&self) -> (f64, f64) {
        let cols = self.ncol.min(self.entries.len()).max(1);
        let line_height = self.text_style.font_size * 1.5;
        let width = cols as f64 * self.column_width()
            + (cols - 1) as f64 * self.label_gap
            + self.padding * 2.0;
        let height = self.rows() as f64 * line_height + self.padding * 2.0;
        (width, height)
    }
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            entries: Vec::new(),
            position: LegendPosition::TopRight,
            visible: true,
            background: FillStyle::new(Color::WHITE)
                .opacity(0.9)
                .stroke(Color::GRAY)
                .stroke_width(0.5),
            text_style: TextStyle::new().font_size(10.0),
            padding: 8.0,
            entry_spacing: 4.0,
            line_length: 20.0,
            ncol: 1,
            label_gap: 8.0,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn legend_with(n: usize) -> Legend {
        let mut legend = Legend::new();
        for i in 0..n {
            legend.add_entry(LegendEntry::new(format!("series{}", i)));
        }
        legend
    }

    #[test]
    fn test_loc_codes() {
        assert_eq!(LegendPosition::from_loc(1), LegendPosition::TopRight);
        assert_eq!(LegendPosition::from_loc(3), LegendPosition::BottomLeft);
        assert_eq!(LegendPosition::from_loc(0), LegendPosition::TopRight);
    }

    #[test]
    fn test_rows_follow_ncol() {
        assert_eq!(legend_with(3).rows(), 3);
        assert_eq!(legend_with(3).ncol(3).rows(), 1);
        assert_eq!(legend_with(5).ncol(2).rows(), 3);
        assert_eq!(legend_with(2).ncol(0).ncol, 1);
    }

    #[test]
    fn test_wider_with_more_columns() {
        let narrow = legend_with(4).size();
        let wide = legend_with(4).ncol(4).size();
        assert!(wide.0 > narrow.0);
        assert!(wide.1 < narrow.1);
    }
}
