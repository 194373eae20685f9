//! The chart catalog. Each chart resolves its style and palette, draws its
//! geometry, then runs the shared scaling, title, legend and footer steps.

pub mod line;
pub mod multikde;

pub use line::{line, LineChart, Summary};
pub use multikde::{multikde, MultiKdeChart};

use std::path::PathBuf;

use serde::Deserialize;

use crate::plotting::error::PlotResult;
use crate::plotting::{Figure, LegendPosition, ScaleKind};
use crate::style::{apply_footer, apply_titles, PaletteSpec, StyleSpec};
use crate::utils::OutlierPolicy;

/// Options every chart accepts.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartOptions {
    #[serde(default)]
    pub palette: PaletteSpec,
    #[serde(default)]
    pub style: StyleSpec,
    /// Output resolution in dots per inch
    #[serde(default = "default_dpi")]
    pub dpi: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sub_title: String,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
    #[serde(default)]
    pub legend: bool,
    #[serde(default)]
    pub x_scale: ScaleKind,
    #[serde(default)]
    pub y_scale: ScaleKind,
    /// Outliers left out of automatic axis limits
    #[serde(default)]
    pub outliers: OutlierPolicy,
    /// Write the figure here; the format follows the extension
    #[serde(default)]
    pub save: Option<PathBuf>,
}

fn default_dpi() -> f64 {
    72.0
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            palette: PaletteSpec::default(),
            style: StyleSpec::default(),
            dpi: default_dpi(),
            title: String::new(),
            sub_title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            legend: false,
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            outliers: OutlierPolicy::None,
            save: None,
        }
    }
}

/// Titles, then the legend when requested, then the footer.
fn finish(figure: &mut Figure, options: &ChartOptions, legend_ncol: usize) -> PlotResult<()> {
    apply_titles(figure, &options.title, &options.sub_title);
    if options.legend {
        figure
            .gca()
            .legend_at(LegendPosition::from_loc(1))
            .legend_ncol(legend_ncol);
    }
    apply_footer(
        figure,
        &options.x_label,
        &options.y_label,
        options.save.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let options: ChartOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.dpi, 72.0);
        assert_eq!(options.palette, PaletteSpec::default());
        assert_eq!(options.x_scale, ScaleKind::Linear);
        assert!(!options.legend);
        assert!(options.save.is_none());
    }

    #[test]
    fn test_options_parse() {
        let options: ChartOptions = serde_json::from_str(
            r#"{"palette": "blue_to_red", "style": "538", "y_scale": "log", "outliers": "zscore"}"#,
        )
        .unwrap();
        assert_eq!(options.y_scale, ScaleKind::Log);
        assert_eq!(options.outliers, OutlierPolicy::ZScore);
        assert!(serde_json::from_str::<ChartOptions>(r#"{"x_scale": "logit"}"#).is_err());
    }
}
