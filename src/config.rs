//! Chart configuration files.
//!
//! A configuration names the chart with a `"chart"` tag and carries that
//! chart's fields alongside the common options:
//!
//! ```json
//! {"chart": "line", "x": ["a", "b"], "title": "Sales", "figure": {"fig_width": 10}}
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::frame::DataFrame;
use crate::plots::{line, multikde, ChartOptions, LineChart, MultiKdeChart};
use crate::plotting::error::PlotResult;
use crate::plotting::Figure;
use crate::style::StyleContext;

/// Figure dimensions in inches
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FigureParams {
    #[serde(default = "default_fig_width")]
    pub fig_width: f64,
    #[serde(default = "default_fig_height")]
    pub fig_height: f64,
}

fn default_fig_width() -> f64 { 12.0 }
fn default_fig_height() -> f64 { 6.0 }

impl Default for FigureParams {
    fn default() -> Self {
        FigureParams {
            fig_width: default_fig_width(),
            fig_height: default_fig_height(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "chart", rename_all = "lowercase")]
pub enum Chart {
    Line(LineChart),
    Multikde(MultiKdeChart),
}

/// One chart to render, as read from a JSON file
#[derive(Deserialize, Debug, Clone)]
pub struct ChartConfig {
    #[serde(default)]
    pub figure: FigureParams,
    #[serde(flatten)]
    pub chart: Chart,
}

impl ChartConfig {
    /// Load a chart configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: ChartConfig = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn options(&self) -> &ChartOptions {
        match self.chart {
            Chart::Line(ref c) => &c.options,
            Chart::Multikde(ref c) => &c.options,
        }
    }

    pub fn options_mut(&mut self) -> &mut ChartOptions {
        match self.chart {
            Chart::Line(ref mut c) => &mut c.options,
            Chart::Multikde(ref mut c) => &mut c.options,
        }
    }

    /// A style context sized from `figure`.
    pub fn context(&self) -> StyleContext {
        StyleContext::new().with_figure_params(self.figure.fig_width, self.figure.fig_height)
    }

    /// Draw the configured chart from `data`.
    pub fn render(&self, ctx: &mut StyleContext, data: &DataFrame) -> PlotResult<Figure> {
        match self.chart {
            Chart::Line(ref chart) => line(ctx, data, chart),
            Chart::Multikde(ref chart) => multikde(ctx, data, chart),
        }
    }
}
