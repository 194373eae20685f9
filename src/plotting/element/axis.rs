//! Axis configuration and tick formatting.

use chrono::DateTime;
use num_format::{Locale, ToFormattedString};

use crate::plotting::style::{Color, LineStyle, TextStyle, ThemeConfig};

/// How tick values are turned into labels.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TickFormat {
    /// Magnitude-dependent default formatting
    #[default]
    Auto,
    /// Grouping separators for values of magnitude 1000 and above
    Thousands,
    /// Values are seconds since the Unix epoch, formatted with a chrono
    /// format string
    Datetime(String),
}

impl TickFormat {
    /// Format a tick value as a label.
    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormat::Auto => auto_format(value),
            TickFormat::Thousands => {
                if value.abs() >= 1000.0 {
                    thousands(value)
                } else {
                    auto_format(value)
                }
            }
            TickFormat::Datetime(fmt) => DateTime::from_timestamp(value.round() as i64, 0)
                .map(|dt| dt.naive_utc().format(fmt).to_string())
                .unwrap_or_else(|| auto_format(value)),
        }
    }
}

fn auto_format(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1000.0 || value.abs() < 0.01 {
        format!("{:.2e}", value)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn thousands(value: f64) -> String {
    // Round to the two decimals shown before splitting off the fraction
    let cents = (value * 100.0).round();
    if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
        return auto_format(value);
    }
    let cents = cents as i64;
    let mut label = (cents / 100).to_formatted_string(&Locale::en);
    let frac = (cents % 100).unsigned_abs();
    if frac > 0 {
        let digits = format!("{:02}", frac);
        label.push('.');
        label.push_str(digits.trim_end_matches('0'));
    }
    label
}

/// Configuration for an axis.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    /// Whether the axis line (spine) is drawn
    pub visible: bool,
    /// Axis line style
    pub line_style: LineStyle,
    /// Whether to show tick marks and their labels
    pub show_ticks: bool,
    /// Length of tick marks in pixels
    pub tick_length: f64,
    /// Style for tick labels
    pub tick_label_style: TextStyle,
    /// Number of ticks to generate
    pub num_ticks: usize,
    /// Padding between tick marks and labels
    pub tick_padding: f64,
    /// Custom tick positions (overrides automatic generation)
    pub tick_positions: Option<Vec<f64>>,
    /// Custom tick labels (must match tick_positions length)
    pub tick_labels: Option<Vec<String>>,
    pub tick_format: TickFormat,
}

impl AxisConfig {
    /// Create a new axis configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis colors, widths and tick font taken from a theme.
    pub fn themed(theme: &ThemeConfig) -> Self {
        AxisConfig {
            visible: theme.show_spines,
            line_style: LineStyle::new()
                .color(theme.axis_color.clone())
                .width(theme.axis_width),
            tick_label_style: theme.tick_style.clone(),
            ..Default::default()
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn show_ticks(mut self, show: bool) -> Self {
        self.show_ticks = show;
        self
    }

    pub fn num_ticks(mut self, num: usize) -> Self {
        self.num_ticks = num;
        self
    }

    /// Set custom tick positions.
    pub fn tick_positions(mut self, positions: Vec<f64>) -> Self {
        self.tick_positions = Some(positions);
        self
    }

    /// Set custom tick labels.
    pub fn tick_labels(mut self, labels: Vec<String>) -> Self {
        self.tick_labels = Some(labels);
        self
    }

    pub fn tick_format(mut self, format: TickFormat) -> Self {
        self.tick_format = format;
        self
    }

    /// Format a tick value as a label.
    pub fn format_tick(&self, value: f64) -> String {
        self.tick_format.format(value)
    }

    /// Resolve the ticks to draw, given the automatic candidates.
    pub fn resolve_ticks(&self, auto_ticks: Vec<f64>) -> Vec<(f64, String)> {
        match self.tick_positions {
            Some(ref positions) => match self.tick_labels {
                Some(ref labels) => positions
                    .iter()
                    .copied()
                    .zip(labels.iter().cloned())
                    .collect(),
                None => positions
                    .iter()
                    .map(|&t| (t, self.format_tick(t)))
                    .collect(),
            },
            None => auto_ticks
                .into_iter()
                .map(|t| (t, self.format_tick(t)))
                .collect(),
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        AxisConfig {
            visible: true,
            line_style: LineStyle::new().color(Color::BLACK).width(1.0),
            show_ticks: true,
            tick_length: 5.0,
            tick_label_style: TextStyle::new().font_size(10.0),
            num_ticks: 5,
            tick_padding: 3.0,
            tick_positions: None,
            tick_labels: None,
            tick_format: TickFormat::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_format() {
        assert_eq!(TickFormat::Auto.format(0.0), "0");
        assert_eq!(TickFormat::Auto.format(5.0), "5");
        assert_eq!(TickFormat::Auto.format(2.5), "2.50");
        assert_eq!(TickFormat::Auto.format(12500.0), "1.25e4");
    }

    #[test]
    fn test_thousands_format() {
        assert_eq!(TickFormat::Thousands.format(12500.0), "12,500");
        assert_eq!(TickFormat::Thousands.format(-1_000_000.0), "-1,000,000");
        assert_eq!(TickFormat::Thousands.format(1250.5), "1,250.5");
        assert_eq!(TickFormat::Thousands.format(999.0), "999");
    }

    #[test]
    fn test_thousands_rounds_and_keeps_magnitude() {
        assert_eq!(TickFormat::Thousands.format(1234.999), "1,235");
        assert_eq!(TickFormat::Thousands.format(1234.05), "1,234.05");
        assert_eq!(TickFormat::Thousands.format(-2500.25), "-2,500.25");
        assert_eq!(TickFormat::Thousands.format(1.5e19), "1.50e19");
        assert_eq!(TickFormat::Thousands.format(-3e20), "-3.00e20");
        assert_eq!(TickFormat::Thousands.format(1e25), "1.00e25");
    }

    #[test]
    fn test_datetime_format() {
        // 2021-03-04 00:00:00 UTC
        let label = TickFormat::Datetime("%Y-%m-%d".to_string()).format(1_614_816_000.0);
        assert_eq!(label, "2021-03-04");
    }

    #[test]
    fn test_custom_tick_labels_win() {
        let axis = AxisConfig::new()
            .tick_positions(vec![0.0, 1.0])
            .tick_labels(vec!["a".to_string(), "b".to_string()]);
        let ticks = axis.resolve_ticks(vec![0.0, 0.5, 1.0]);
        assert_eq!(ticks, vec![(0.0, "a".to_string()), (1.0, "b".to_string())]);
    }
}
