//! Named colormaps and the engine's palette mechanism.
//!
//! [`color_palette`] accepts what a user of the engine would type: a colormap
//! name (optionally suffixed with `_r` to reverse it), a hex code, or a color
//! name. Sequential and diverging maps are sampled at evenly spaced interior
//! points; qualitative maps hand out their colors in order and wrap.

use super::color::Color;

/// How a colormap produces a discrete palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColormapKind {
    /// Continuous map, sampled by interpolating between stops
    Continuous,
    /// Fixed list of distinct colors, cycled
    Qualitative,
}

/// A named colormap defined by its color stops.
#[derive(Debug, Clone, Copy)]
pub struct Colormap {
    pub name: &'static str,
    pub kind: ColormapKind,
    stops: &'static [&'static str],
}

impl Colormap {
    /// Look up a colormap by name (case-sensitive, as matplotlib).
    pub fn by_name(name: &str) -> Option<&'static Colormap> {
        COLORMAPS.iter().find(|c| c.name == name)
    }

    fn stop_colors(&self) -> Vec<Color> {
        self.stops.iter().filter_map(|s| Color::from_hex(s)).collect()
    }

    /// Sample the colormap at a position in `[0, 1]`.
    pub fn at(&self, t: f64) -> Color {
        sample_stops(&self.stop_colors(), t)
    }

    /// Produce `n` colors from this map.
    pub fn palette(&self, n: usize) -> Vec<Color> {
        let stops = self.stop_colors();
        match self.kind {
            ColormapKind::Qualitative => (0..n).map(|i| stops[i % stops.len()].clone()).collect(),
            ColormapKind::Continuous => (0..n)
                .map(|i| sample_stops(&stops, (i as f64 + 1.0) / (n as f64 + 1.0)))
                .collect(),
        }
    }
}

/// Interpolate along evenly spaced color stops.
pub fn sample_stops(stops: &[Color], t: f64) -> Color {
    match stops.len() {
        0 => Color::BLACK,
        1 => stops[0].clone(),
        n => {
            let pos = t.clamp(0.0, 1.0) * (n - 1) as f64;
            let i = (pos.floor() as usize).min(n - 2);
            stops[i].lerp(&stops[i + 1], pos - i as f64)
        }
    }
}

/// Resolve a palette spec through the engine: colormap names (with optional
/// `_r` suffix) or a single color, which yields a light-to-full ramp.
///
/// Returns `None` when the spec is not something the engine understands.
pub fn color_palette(spec: &str, n: usize) -> Option<Vec<Color>> {
    let spec = spec.trim();
    if let Some(map) = Colormap::by_name(spec) {
        return Some(map.palette(n));
    }
    if let Some(map) = spec.strip_suffix("_r").and_then(Colormap::by_name) {
        let mut colors = map.palette(n);
        colors.reverse();
        return Some(colors);
    }
    let base = Color::parse(spec)?;
    if n == 1 {
        return Some(vec![base]);
    }
    let light = base.lerp(&Color::WHITE, 0.75);
    Some(
        (0..n)
            .map(|i| light.lerp(&base, i as f64 / (n - 1) as f64))
            .collect(),
    )
}

static COLORMAPS: &[Colormap] = &[
    Colormap {
        name: "viridis",
        kind: ColormapKind::Continuous,
        stops: &["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"],
    },
    Colormap {
        name: "plasma",
        kind: ColormapKind::Continuous,
        stops: &["#0d0887", "#7e03a8", "#cc4778", "#f89540", "#f0f921"],
    },
    Colormap {
        name: "magma",
        kind: ColormapKind::Continuous,
        stops: &["#000004", "#51127c", "#b73779", "#fc8961", "#fcfdbf"],
    },
    Colormap {
        name: "inferno",
        kind: ColormapKind::Continuous,
        stops: &["#000004", "#56106e", "#bb3754", "#f98e09", "#fcffa4"],
    },
    Colormap {
        name: "cividis",
        kind: ColormapKind::Continuous,
        stops: &["#00224e", "#434e6c", "#7d7c78", "#bcaf6f", "#fee838"],
    },
    Colormap {
        name: "Blues",
        kind: ColormapKind::Continuous,
        stops: &["#f7fbff", "#c6dbef", "#6baed6", "#2171b5", "#08306b"],
    },
    Colormap {
        name: "Greens",
        kind: ColormapKind::Continuous,
        stops: &["#f7fcf5", "#c7e9c0", "#74c476", "#238b45", "#00441b"],
    },
    Colormap {
        name: "Reds",
        kind: ColormapKind::Continuous,
        stops: &["#fff5f0", "#fcbba1", "#fb6a4a", "#cb181d", "#67000d"],
    },
    Colormap {
        name: "Oranges",
        kind: ColormapKind::Continuous,
        stops: &["#fff5eb", "#fdd0a2", "#fd8d3c", "#d94801", "#7f2704"],
    },
    Colormap {
        name: "Purples",
        kind: ColormapKind::Continuous,
        stops: &["#fcfbfd", "#dadaeb", "#9e9ac8", "#6a51a3", "#3f007d"],
    },
    Colormap {
        name: "Greys",
        kind: ColormapKind::Continuous,
        stops: &["#ffffff", "#d9d9d9", "#969696", "#525252", "#000000"],
    },
    Colormap {
        name: "coolwarm",
        kind: ColormapKind::Continuous,
        stops: &["#3b4cc0", "#8db0fe", "#dddddd", "#f49a7b", "#b40426"],
    },
    Colormap {
        name: "RdBu",
        kind: ColormapKind::Continuous,
        stops: &["#67001f", "#d6604d", "#f7f7f7", "#4393c3", "#053061"],
    },
    Colormap {
        name: "Spectral",
        kind: ColormapKind::Continuous,
        stops: &["#9e0142", "#f46d43", "#ffffbf", "#66c2a5", "#5e4fa2"],
    },
    Colormap {
        name: "tab10",
        kind: ColormapKind::Qualitative,
        stops: &[
            "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
            "#7f7f7f", "#bcbd22", "#17becf",
        ],
    },
    Colormap {
        name: "Set1",
        kind: ColormapKind::Qualitative,
        stops: &[
            "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628",
            "#f781bf", "#999999",
        ],
    },
    Colormap {
        name: "Set2",
        kind: ColormapKind::Qualitative,
        stops: &[
            "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494",
            "#b3b3b3",
        ],
    },
    Colormap {
        name: "Pastel1",
        kind: ColormapKind::Qualitative,
        stops: &[
            "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd",
            "#fddaec", "#f2f2f2",
        ],
    },
    Colormap {
        name: "Dark2",
        kind: ColormapKind::Qualitative,
        stops: &[
            "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d",
            "#666666",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colormap_sizes() {
        for n in [0, 1, 4, 12] {
            assert_eq!(color_palette("viridis", n).unwrap().len(), n);
            assert_eq!(color_palette("Set1", n).unwrap().len(), n);
        }
    }

    #[test]
    fn test_reversed_colormap() {
        let fwd = color_palette("Blues", 5).unwrap();
        let mut rev = color_palette("Blues_r", 5).unwrap();
        rev.reverse();
        assert_eq!(fwd, rev);
    }

    #[test]
    fn test_qualitative_wraps() {
        let colors = color_palette("Dark2", 10).unwrap();
        assert_eq!(colors[8], colors[0]);
        assert_ne!(colors[1], colors[0]);
    }

    #[test]
    fn test_single_color_ramp_ends_at_base() {
        let colors = color_palette("#bf5599", 3).unwrap();
        assert_eq!(colors[2], Color::rgb(0xbf, 0x55, 0x99));
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn test_unknown_spec() {
        assert!(color_palette("no_such_map", 3).is_none());
    }
}
