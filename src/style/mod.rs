//! Opinionated styling applied around every chart: palettes, the named
//! styles, titles, and the header/footer steps.

pub mod formats;
pub mod palette;
pub mod template;
pub mod titles;

pub use formats::thousand_sep;
pub use palette::{resolve_palette, Palette, PaletteName, PaletteSpec};
pub use template::{apply_footer, apply_header};
pub use titles::apply_titles;

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use crate::plotting::error::PlotError;
use crate::plotting::{Color, Figure, Theme, ThemeConfig};

/// Background, grid, font and line settings for one chart.
pub type StyleConfig = ThemeConfig;

/// The styles this crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoreStyle {
    /// White background with a faint grid
    #[default]
    Astetik,
    /// Grey background, no spines, heavy titles
    FiveThirtyEight,
    /// Sepia background with muted text
    Solarized,
}

impl CoreStyle {
    pub const ALL: [CoreStyle; 3] = [
        CoreStyle::Astetik,
        CoreStyle::FiveThirtyEight,
        CoreStyle::Solarized,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CoreStyle::Astetik => "astetik",
            CoreStyle::FiveThirtyEight => "538",
            CoreStyle::Solarized => "solarized",
        }
    }

    pub fn config(&self) -> StyleConfig {
        match self {
            CoreStyle::Astetik => {
                let mut style = StyleConfig::with_basics(
                    Color::WHITE,
                    Color::WHITE,
                    Color::from("#e6e6e6"),
                    Color::from("#333333"),
                    "sans-serif",
                );
                style.axis_color = Color::from("#888888");
                style.line_width = 2.0;
                style
            }
            CoreStyle::FiveThirtyEight => {
                let mut style = StyleConfig::with_basics(
                    Color::from("#f0f0f0"),
                    Color::from("#f0f0f0"),
                    Color::from("#cbcbcb"),
                    Color::from("#3c3c3c"),
                    "sans-serif",
                );
                style.show_spines = false;
                style.grid_opacity = 1.0;
                style.grid_width = 1.0;
                style.title_style.font_size = 16.0;
                style.line_width = 3.0;
                style
            }
            CoreStyle::Solarized => {
                let mut style = StyleConfig::with_basics(
                    Color::from("#fdf6e3"),
                    Color::from("#fdf6e3"),
                    Color::from("#eee8d5"),
                    Color::from("#657b83"),
                    "sans-serif",
                );
                style.axis_color = Color::from("#93a1a1");
                style.grid_opacity = 1.0;
                style.line_width = 2.0;
                style
            }
        }
    }
}

impl FromStr for CoreStyle {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoreStyle::ALL
            .iter()
            .copied()
            .find(|style| style.name() == s.trim())
            .ok_or_else(|| PlotError::InvalidConfig(format!("unknown style '{}'", s)))
    }
}

/// A style name: one of the core styles, else any engine theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum StyleSpec {
    Core(CoreStyle),
    Engine(Theme),
}

impl StyleSpec {
    pub fn config(&self) -> StyleConfig {
        match self {
            StyleSpec::Core(style) => style.config(),
            StyleSpec::Engine(theme) => theme.config(),
        }
    }
}

impl Default for StyleSpec {
    fn default() -> Self {
        StyleSpec::Core(CoreStyle::default())
    }
}

impl From<&str> for StyleSpec {
    fn from(name: &str) -> Self {
        if let Ok(style) = name.parse::<CoreStyle>() {
            return StyleSpec::Core(style);
        }
        match name.parse::<Theme>() {
            Ok(theme) => StyleSpec::Engine(theme),
            Err(_) => {
                debug!("Unknown style '{}', using astetik", name);
                StyleSpec::default()
            }
        }
    }
}

impl From<String> for StyleSpec {
    fn from(name: String) -> Self {
        StyleSpec::from(name.as_str())
    }
}

impl fmt::Display for StyleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSpec::Core(style) => f.write_str(style.name()),
            StyleSpec::Engine(theme) => write!(f, "{:?}", theme),
        }
    }
}

/// Style state for drawing charts. Every chart call reads its style,
/// resolution and figure size from here rather than from process state, so
/// separate contexts never affect each other.
#[derive(Debug, Clone)]
pub struct StyleContext {
    style: StyleConfig,
    dpi: f64,
    fig_width: f64,
    fig_height: f64,
}

impl StyleContext {
    pub fn new() -> Self {
        StyleContext {
            style: CoreStyle::Astetik.config(),
            dpi: 72.0,
            fig_width: 12.0,
            fig_height: 6.0,
        }
    }

    /// Figure size in inches.
    pub fn with_figure_params(mut self, width: f64, height: f64) -> Self {
        self.set_figure_size(width, height);
        self
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Ignored unless positive.
    pub fn set_dpi(&mut self, dpi: f64) {
        if dpi > 0.0 {
            self.dpi = dpi;
        }
    }

    pub fn figure_size(&self) -> (f64, f64) {
        (self.fig_width, self.fig_height)
    }

    pub fn set_figure_size(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.fig_width = width;
            self.fig_height = height;
        }
    }

    /// A new figure with this context's style, size and resolution.
    pub fn figure(&self) -> Figure {
        Figure::with_theme_config(self.fig_width, self.fig_height, self.style.clone()).dpi(self.dpi)
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_spec_two_tier() {
        assert_eq!(StyleSpec::from("538"), StyleSpec::Core(CoreStyle::FiveThirtyEight));
        assert_eq!(StyleSpec::from("dark"), StyleSpec::Engine(Theme::Dark));
        assert_eq!(StyleSpec::from("fancy"), StyleSpec::Core(CoreStyle::Astetik));
        let spec: StyleSpec = serde_json::from_str("\"solarized\"").unwrap();
        assert_eq!(spec, StyleSpec::Core(CoreStyle::Solarized));
    }

    #[test]
    fn test_core_styles_differ() {
        let grey = CoreStyle::FiveThirtyEight.config();
        assert_eq!(grey.background, Color::from("#f0f0f0"));
        assert!(!grey.show_spines);
        assert_eq!(CoreStyle::Astetik.config().background, Color::WHITE);
    }

    #[test]
    fn test_context_figure() {
        let mut ctx = StyleContext::new().with_figure_params(10.0, 4.0);
        ctx.set_dpi(100.0);
        ctx.set_dpi(-1.0);
        let fig = ctx.figure();
        assert_eq!(fig.size_pixels(), (1000.0, 400.0));
        assert_eq!(fig.background, Color::WHITE);
    }

    #[test]
    fn test_contexts_are_isolated() {
        let mut a = StyleContext::new();
        let b = StyleContext::new();
        a.set_style(CoreStyle::Solarized.config());
        assert_ne!(a.style().background, b.style().background);
    }
}
