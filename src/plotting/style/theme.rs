//! Engine-native themes.

use std::str::FromStr;

use super::color::{cycle_color, Color};
use super::text_style::TextStyle;
use crate::plotting::error::PlotError;

/// Predefined plot themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Default theme with white background
    #[default]
    Default,
    /// Dark theme with dark background
    Dark,
    /// Minimal theme with reduced visual elements
    Minimal,
    /// Seaborn-inspired theme
    Seaborn,
    /// High contrast theme for accessibility
    HighContrast,
}

impl Theme {
    /// Get the configuration for this theme.
    pub fn config(&self) -> ThemeConfig {
        match self {
            Theme::Default => ThemeConfig::default_theme(),
            Theme::Dark => ThemeConfig::dark_theme(),
            Theme::Minimal => ThemeConfig::minimal_theme(),
            Theme::Seaborn => ThemeConfig::seaborn_theme(),
            Theme::HighContrast => ThemeConfig::high_contrast_theme(),
        }
    }
}

impl FromStr for Theme {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" | "classic" => Ok(Theme::Default),
            "dark" | "dark_background" => Ok(Theme::Dark),
            "minimal" | "white" => Ok(Theme::Minimal),
            "seaborn" | "darkgrid" => Ok(Theme::Seaborn),
            "high_contrast" | "high-contrast" => Ok(Theme::HighContrast),
            other => Err(PlotError::InvalidConfig(format!("unknown theme '{}'", other))),
        }
    }
}

/// Theme configuration containing all style settings.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Background color for the figure
    pub background: Color,
    /// Background color for the plot area
    pub plot_background: Color,
    /// Color for axis lines
    pub axis_color: Color,
    /// Color for grid lines
    pub grid_color: Color,
    /// Grid line opacity
    pub grid_opacity: f64,
    /// Whether to show grid by default
    pub show_grid: bool,
    /// Whether to draw the axis lines (spines)
    pub show_spines: bool,
    /// Font family used by every text element
    pub font_family: String,
    /// Color for text
    pub text_color: Color,
    /// Default title style
    pub title_style: TextStyle,
    /// Default label style
    pub label_style: TextStyle,
    /// Default tick label style
    pub tick_style: TextStyle,
    /// Color cycle for plot series
    pub color_cycle: Vec<Color>,
    /// Default line width
    pub line_width: f64,
    /// Axis line width
    pub axis_width: f64,
    /// Grid line width
    pub grid_width: f64,
}

impl ThemeConfig {
    /// Build a theme from its essentials; text styles derive from the font
    /// family and text color.
    pub fn with_basics(
        background: Color,
        plot_background: Color,
        grid_color: Color,
        text_color: Color,
        font_family: &str,
    ) -> Self {
        let text = |size: f64| {
            TextStyle::new()
                .font_family(font_family)
                .font_size(size)
                .color(text_color.clone())
        };
        ThemeConfig {
            background,
            plot_background,
            axis_color: text_color.clone(),
            grid_color,
            grid_opacity: 0.8,
            show_grid: true,
            show_spines: true,
            font_family: font_family.to_string(),
            title_style: text(14.0).bold(),
            label_style: text(12.0),
            tick_style: text(10.0),
            text_color,
            color_cycle: (0..10).map(cycle_color).collect(),
            line_width: 1.5,
            axis_width: 1.0,
            grid_width: 0.5,
        }
    }

    fn default_theme() -> Self {
        ThemeConfig::with_basics(
            Color::WHITE,
            Color::WHITE,
            Color::LIGHT_GRAY,
            Color::BLACK,
            "sans-serif",
        )
    }

    fn dark_theme() -> Self {
        let mut theme = ThemeConfig::with_basics(
            Color::rgb(30, 30, 30),
            Color::rgb(40, 40, 40),
            Color::rgb(80, 80, 80),
            Color::rgb(220, 220, 220),
            "sans-serif",
        );
        theme.axis_color = Color::rgb(180, 180, 180);
        theme.grid_opacity = 0.5;
        theme.color_cycle = ["#58a6ff", "#f0883e", "#3fb950", "#f85149", "#a371f7", "#56d4dd"]
            .iter()
            .map(|&hex| Color::from(hex))
            .collect();
        theme
    }

    fn minimal_theme() -> Self {
        let mut theme = ThemeConfig::with_basics(
            Color::WHITE,
            Color::WHITE,
            Color::LIGHT_GRAY,
            Color::DARK_GRAY,
            "sans-serif",
        );
        theme.show_grid = false;
        theme.axis_color = Color::GRAY;
        theme.title_style.weight = Default::default();
        theme.line_width = 1.0;
        theme.axis_width = 0.5;
        theme
    }

    fn seaborn_theme() -> Self {
        let mut theme = ThemeConfig::with_basics(
            Color::WHITE,
            Color::rgb(234, 234, 242),
            Color::WHITE,
            Color::rgb(50, 50, 50),
            "sans-serif",
        );
        theme.grid_opacity = 1.0;
        theme.grid_width = 1.0;
        theme.show_spines = false;
        theme.line_width = 1.75;
        theme
    }

    fn high_contrast_theme() -> Self {
        let mut theme = ThemeConfig::with_basics(
            Color::WHITE,
            Color::WHITE,
            Color::BLACK,
            Color::BLACK,
            "sans-serif",
        );
        theme.grid_opacity = 0.2;
        theme.title_style.font_size = 16.0;
        theme.label_style = theme.label_style.clone().font_size(14.0).bold();
        theme.tick_style.font_size = 12.0;
        theme.line_width = 2.5;
        theme.axis_width = 2.0;
        theme
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names() {
        assert_eq!("dark_background".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("Seaborn".parse::<Theme>().unwrap(), Theme::Seaborn);
        assert!("astetik".parse::<Theme>().is_err());
    }

    #[test]
    fn test_basics_propagate_font() {
        let theme = ThemeConfig::with_basics(
            Color::WHITE,
            Color::WHITE,
            Color::GRAY,
            Color::BLACK,
            "monospace",
        );
        assert_eq!(theme.tick_style.font_family, "monospace");
        assert_eq!(theme.title_style.font_family, "monospace");
    }
}
