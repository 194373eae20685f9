//! Color definitions and utilities.

use std::fmt;

/// Represents a color for plotting elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// RGBA color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// CSS color name passed through to the SVG output unchanged
    Named(String),
}

impl Color {
    /// Create a new RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Create a new RGBA color.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba(r, g, b, a.clamp(0.0, 1.0))
    }

    /// Create a color from a hex string (e.g., "#FF0000", "FF0000" or "#F00").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
                Some(Color::Rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Some(Color::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Some(Color::Rgba(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])? as f64 / 255.0,
            )),
            _ => None,
        }
    }

    /// Parse a color the engine understands: a hex code or a known color name.
    ///
    /// Unlike `From<&str>`, this returns `None` for anything unrecognized
    /// instead of wrapping it in [`Color::Named`].
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        if spec.starts_with('#') {
            return Color::from_hex(spec);
        }
        named_color_hex(spec).and_then(Color::from_hex)
    }

    /// Convert the color to an SVG-compatible string.
    pub fn to_svg_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => named_color_hex(name)
                .map(str::to_string)
                .unwrap_or_else(|| name.clone()),
        }
    }

    /// Lower-case `#rrggbb` form (alpha dropped).
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Get the alpha value (opacity) of the color.
    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgba(_, _, _, a) => *a,
            Color::Rgb(..) | Color::Named(_) => 1.0,
        }
    }

    /// Convert to RGB tuple, resolving named colors.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) | Color::Rgba(r, g, b, _) => (*r, *g, *b),
            Color::Named(name) => named_color_hex(name)
                .and_then(Color::from_hex)
                .map(|c| c.to_rgb())
                .unwrap_or((0, 0, 0)),
        }
    }

    /// Linear interpolation in RGB space; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (r1, g1, b1) = self.to_rgb();
        let (r2, g2, b2) = other.to_rgb();
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
    }

    /// Return a copy with the given opacity.
    pub fn with_alpha(&self, alpha: f64) -> Color {
        let (r, g, b) = self.to_rgb();
        Color::rgba(r, g, b, alpha)
    }

    // Predefined colors
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GREEN: Color = Color::Rgb(0, 128, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);
    pub const DARK_GRAY: Color = Color::Rgb(64, 64, 64);
    pub const TRANSPARENT: Color = Color::Rgba(0, 0, 0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLUE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_string())
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::parse(s).unwrap_or_else(|| Color::Named(s.to_string()))
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, f64)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, f64)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

/// Resolve a color name to its hex value.
fn named_color_hex(name: &str) -> Option<&'static str> {
    let hex = match name.to_lowercase().as_str() {
        "black" | "k" => "#000000",
        "white" | "w" => "#ffffff",
        "red" | "r" => "#ff0000",
        "green" | "g" => "#008000",
        "blue" | "b" => "#0000ff",
        "yellow" | "y" => "#ffff00",
        "cyan" | "aqua" | "c" => "#00ffff",
        "magenta" | "fuchsia" | "m" => "#ff00ff",
        "orange" => "#ffa500",
        "purple" => "#800080",
        "gray" | "grey" => "#808080",
        "lightgray" | "lightgrey" => "#d3d3d3",
        "darkgray" | "darkgrey" => "#404040",
        "pink" => "#ffc0cb",
        "brown" => "#a52a2a",
        "navy" => "#000080",
        "teal" => "#008080",
        "olive" => "#808000",
        "maroon" => "#800000",
        "lime" => "#00ff00",
        "silver" => "#c0c0c0",
        "gold" => "#ffd700",
        "salmon" => "#fa8072",
        "coral" => "#ff7f50",
        "tomato" => "#ff6347",
        "crimson" => "#dc143c",
        "indigo" => "#4b0082",
        "violet" => "#ee82ee",
        "orchid" => "#da70d6",
        "turquoise" => "#40e0d0",
        "steelblue" => "#4682b4",
        "royalblue" => "#4169e1",
        "skyblue" => "#87ceeb",
        "seagreen" => "#2e8b57",
        "forestgreen" => "#228b22",
        "darkgreen" => "#006400",
        "darkblue" => "#00008b",
        "darkred" => "#8b0000",
        "chocolate" => "#d2691e",
        "tan" => "#d2b48c",
        "beige" => "#f5f5dc",
        "ivory" => "#fffff0",
        "khaki" => "#f0e68c",
        // Matplotlib-style cycle colors (C0-C9)
        "c0" => "#1f77b4",
        "c1" => "#ff7f0e",
        "c2" => "#2ca02c",
        "c3" => "#d62728",
        "c4" => "#9467bd",
        "c5" => "#8c564b",
        "c6" => "#e377c2",
        "c7" => "#7f7f7f",
        "c8" => "#bcbd22",
        "c9" => "#17becf",
        _ => return None,
    };
    Some(hex)
}

/// Get a color from the default color cycle by index.
pub fn cycle_color(index: usize) -> Color {
    const CYCLE: [Color; 10] = [
        Color::rgb(0x1f, 0x77, 0xb4),
        Color::rgb(0xff, 0x7f, 0x0e),
        Color::rgb(0x2c, 0xa0, 0x2c),
        Color::rgb(0xd6, 0x27, 0x28),
        Color::rgb(0x94, 0x67, 0xbd),
        Color::rgb(0x8c, 0x56, 0x4b),
        Color::rgb(0xe3, 0x77, 0xc2),
        Color::rgb(0x7f, 0x7f, 0x7f),
        Color::rgb(0xbc, 0xbd, 0x22),
        Color::rgb(0x17, 0xbe, 0xcf),
    ];
    CYCLE[index % CYCLE.len()].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_forms() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("0f0"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(Color::from_hex("#zzzzzz"), None);
        assert_eq!(Color::from_hex("#12345"), None);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(Color::parse("steelblue"), Some(Color::Rgb(70, 130, 180)));
        assert_eq!(Color::parse("not_a_color"), None);
        // Lenient conversion keeps the name for the SVG output
        assert_eq!(
            Color::from("not_a_color"),
            Color::Named("not_a_color".to_string())
        );
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(&b, 0.0), Color::BLACK);
        assert_eq!(a.lerp(&b, 1.0), Color::WHITE);
        assert_eq!(a.lerp(&b, 0.5), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(191, 85, 153).to_hex(), "#bf5599");
    }
}
