//! Palette resolution: a closed catalog of named palettes, with the
//! engine's palette mechanism as a fallback for anything else.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use crate::plotting::error::PlotError;
use crate::plotting::style::colormap::{color_palette, sample_stops};
use crate::plotting::Color;

/// Palettes in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteName {
    #[default]
    Default,
    Colorblind,
    BlueToRed,
    BlueToGreen,
    RedToGreen,
    GreenToRed,
    VioletToBlue,
    BrownToGreen,
    GreenToMarine,
}

impl PaletteName {
    pub const ALL: [PaletteName; 9] = [
        PaletteName::Default,
        PaletteName::Colorblind,
        PaletteName::BlueToRed,
        PaletteName::BlueToGreen,
        PaletteName::RedToGreen,
        PaletteName::GreenToRed,
        PaletteName::VioletToBlue,
        PaletteName::BrownToGreen,
        PaletteName::GreenToMarine,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PaletteName::Default => "default",
            PaletteName::Colorblind => "colorblind",
            PaletteName::BlueToRed => "blue_to_red",
            PaletteName::BlueToGreen => "blue_to_green",
            PaletteName::RedToGreen => "red_to_green",
            PaletteName::GreenToRed => "green_to_red",
            PaletteName::VioletToBlue => "violet_to_blue",
            PaletteName::BrownToGreen => "brown_to_green",
            PaletteName::GreenToMarine => "green_to_marine",
        }
    }

    /// Qualitative palettes hand out distinct colors and wrap; the others
    /// are gradients sampled end to end.
    pub fn is_qualitative(&self) -> bool {
        matches!(self, PaletteName::Default | PaletteName::Colorblind)
    }

    fn hex(&self) -> &'static [&'static str] {
        match self {
            PaletteName::Default => &[
                "#2b6a8f", "#e07b39", "#4f9d69", "#c44e52", "#8172b2", "#937860", "#da8bc3",
                "#8c8c8c", "#ccb974", "#64b5cd",
            ],
            PaletteName::Colorblind => &[
                "#0173b2", "#de8f05", "#029e73", "#d55e00", "#cc78bc", "#ca9161", "#fbafe4",
                "#949494", "#ece133", "#56b4e9",
            ],
            PaletteName::BlueToRed => &["#2166ac", "#92c5de", "#f4a582", "#b2182b"],
            PaletteName::BlueToGreen => &["#253494", "#2c7fb8", "#41b6c4", "#a1dab4"],
            PaletteName::RedToGreen => &["#d7191c", "#fdae61", "#a6d96a", "#1a9641"],
            PaletteName::GreenToRed => &["#1a9641", "#a6d96a", "#fdae61", "#d7191c"],
            PaletteName::VioletToBlue => &["#54278f", "#756bb1", "#6baed6", "#2171b5"],
            PaletteName::BrownToGreen => &["#8c510a", "#d8b365", "#5ab4ac", "#01665e"],
            PaletteName::GreenToMarine => &["#78c679", "#41ab5d", "#1d91c0", "#0c2c84"],
        }
    }

    /// `count` colors from this palette.
    pub fn colors(&self, count: usize) -> Vec<Color> {
        let stops: Vec<Color> = self.hex().iter().map(|&h| Color::from(h)).collect();
        if self.is_qualitative() {
            return (0..count).map(|i| stops[i % stops.len()].clone()).collect();
        }
        match count {
            0 => Vec::new(),
            1 => vec![stops[0].clone()],
            n => (0..n)
                .map(|i| sample_stops(&stops, i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}

impl FromStr for PaletteName {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteName::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s.trim())
            .ok_or_else(|| PlotError::InvalidConfig(format!("unknown palette '{}'", s)))
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A palette request: a catalog name, else a string for the engine's
/// palette mechanism (colormap name or color).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PaletteSpec {
    Catalog(PaletteName),
    Engine(String),
}

impl Default for PaletteSpec {
    fn default() -> Self {
        PaletteSpec::Catalog(PaletteName::Default)
    }
}

impl From<&str> for PaletteSpec {
    fn from(spec: &str) -> Self {
        match spec.parse::<PaletteName>() {
            Ok(name) => PaletteSpec::Catalog(name),
            Err(_) => PaletteSpec::Engine(spec.trim().to_string()),
        }
    }
}

impl From<String> for PaletteSpec {
    fn from(spec: String) -> Self {
        PaletteSpec::from(spec.as_str())
    }
}

impl From<PaletteName> for PaletteSpec {
    fn from(name: PaletteName) -> Self {
        PaletteSpec::Catalog(name)
    }
}

impl From<&PaletteSpec> for PaletteSpec {
    fn from(spec: &PaletteSpec) -> Self {
        spec.clone()
    }
}

/// Ordered series colors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette(Vec<Color>);

impl Palette {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color for series `i`, wrapping past the end.
    pub fn get(&self, i: usize) -> Color {
        if self.0.is_empty() {
            return Color::default();
        }
        self.0[i % self.0.len()].clone()
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.0.iter()
    }
}

/// Exactly `count` colors for `spec`. Specs neither the catalog nor the
/// engine recognizes resolve as the `default` palette.
pub fn resolve_palette(spec: impl Into<PaletteSpec>, count: usize) -> Palette {
    let colors = match spec.into() {
        PaletteSpec::Catalog(name) => name.colors(count),
        PaletteSpec::Engine(raw) => color_palette(&raw, count).unwrap_or_else(|| {
            debug!("Unknown palette '{}', using default", raw);
            PaletteName::Default.colors(count)
        }),
    };
    Palette(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_palette_has_count_colors() {
        for name in PaletteName::ALL {
            for n in [0, 1, 3, 12] {
                assert_eq!(resolve_palette(name, n).len(), n, "{} x {}", name, n);
            }
        }
    }

    #[test]
    fn test_unknown_falls_back_to_default() {
        assert_eq!(resolve_palette("no_such_palette", 5), resolve_palette("default", 5));
    }

    #[test]
    fn test_gradient_colors_distinct() {
        let p = resolve_palette("blue_to_red", 6);
        for (i, a) in p.iter().enumerate() {
            for b in p.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(p.get(0), Color::from("#2166ac"));
        assert_eq!(p.get(5), Color::from("#b2182b"));
    }

    #[test]
    fn test_engine_passthrough() {
        assert_eq!(PaletteSpec::from("viridis"), PaletteSpec::Engine("viridis".to_string()));
        assert_eq!(resolve_palette("viridis", 4).len(), 4);
        let ramp = resolve_palette("#ff0000", 3);
        assert_eq!(ramp.get(2), Color::from("#ff0000"));
    }

    #[test]
    fn test_qualitative_wraps() {
        let p = resolve_palette("default", 12);
        assert_eq!(p.get(10), p.get(0));
        assert_eq!(p.get(12), p.get(0));
    }
}
