//! Timeseries line chart: one or more value columns against a sequence.

use chrono::Timelike;
use log::debug;
use serde::Deserialize;

use super::{finish, ChartOptions};
use crate::frame::{Column, Columns, DataFrame};
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::{
    Color, DashPattern, DrawStyle, Figure, HLine, LineStyle, Marker, TickFormat,
};
use crate::style::{apply_header, StyleContext};
use crate::utils::{apply_limit_values, apply_scale, stats, AxisLimit};

/// Marker shapes handed to series in order, wrapping past the end.
pub const LINE_MARKERS: [Marker; 9] = [
    Marker::Circle,
    Marker::Plus,
    Marker::Cross,
    Marker::VLine,
    Marker::HLine,
    Marker::Pixel,
    Marker::Point,
    Marker::Triangle,
    Marker::TriangleDown,
];

/// Statistic drawn by the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Summary {
    #[default]
    Median,
    Mean,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineChart {
    /// Value columns, one series each
    pub x: Columns,
    /// Sequence column; a `0..n` index when absent
    #[serde(default)]
    pub y: Option<String>,
    /// Drop rows missing a value in any selected column
    #[serde(default = "default_dropna")]
    pub dropna: bool,
    /// Overlay a horizontal line at the summary of all values
    #[serde(default)]
    pub median_line: bool,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub drawstyle: DrawStyle,
    #[serde(default)]
    pub linestyle: DashPattern,
    #[serde(default)]
    pub x_limit: AxisLimit,
    #[serde(default = "default_y_limit")]
    pub y_limit: AxisLimit,
    #[serde(flatten)]
    pub options: ChartOptions,
}

fn default_dropna() -> bool {
    true
}

fn default_y_limit() -> AxisLimit {
    AxisLimit::Auto
}

impl LineChart {
    pub fn new(x: impl Into<Columns>) -> Self {
        LineChart {
            x: x.into(),
            y: None,
            dropna: default_dropna(),
            median_line: false,
            summary: Summary::default(),
            drawstyle: DrawStyle::default(),
            linestyle: DashPattern::default(),
            x_limit: AxisLimit::None,
            y_limit: default_y_limit(),
            options: ChartOptions::default(),
        }
    }

    pub fn sequence(mut self, column: impl Into<String>) -> Self {
        self.y = Some(column.into());
        self
    }

    pub fn options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }
}

/// The horizontal values, plus the tick format they need.
fn sequence(
    data: &DataFrame,
    column: Option<&str>,
) -> PlotResult<(Vec<f64>, Option<TickFormat>)> {
    let name = match column {
        None => return Ok(((0..data.len()).map(|i| i as f64).collect(), None)),
        Some(name) => name,
    };
    match data.column(name)? {
        Column::Numeric(values) => Ok((values.clone(), None)),
        Column::Datetime(values) => {
            let with_time = values
                .iter()
                .flatten()
                .any(|d| d.num_seconds_from_midnight() != 0);
            let format = if with_time { "%Y-%m-%d %H:%M" } else { "%Y-%m-%d" };
            let seconds = values
                .iter()
                .map(|d| d.map_or(f64::NAN, |d| d.and_utc().timestamp() as f64))
                .collect();
            Ok((seconds, Some(TickFormat::Datetime(format.to_string()))))
        }
        Column::Categorical(_) => Err(PlotError::InvalidData(format!(
            "sequence column '{}' must be numeric or datetime",
            name
        ))),
    }
}

/// Draw `chart.x` as lines against the sequence column (or the row index).
pub fn line(ctx: &mut StyleContext, data: &DataFrame, chart: &LineChart) -> PlotResult<Figure> {
    if chart.x.is_empty() {
        return Err(PlotError::InvalidConfig(
            "line needs at least one value column".to_string(),
        ));
    }
    for name in chart.x.iter() {
        data.numeric(name)?;
    }

    let mut selected = chart.x.names().to_vec();
    selected.extend(chart.y.iter().cloned());
    let shaped;
    let data = if chart.dropna {
        shaped = data.dropna(&Columns::from(selected))?;
        &shaped
    } else {
        data
    };

    let (xs, tick_format) = sequence(data, chart.y.as_deref())?;
    let series = chart.x.len();
    let opts = &chart.options;

    let palette = apply_header(ctx, &opts.palette, &opts.style, series, opts.dpi);
    let mut figure = ctx.figure();
    let ax = figure.gca();

    let mut all_values = Vec::new();
    for (i, name) in chart.x.iter().enumerate() {
        let values = data.numeric(name)?.to_vec();
        ax.plot(xs.clone(), values.clone())
            .color(palette.get(i))
            .linewidth(2.0)
            .linestyle(chart.linestyle.clone())
            .drawstyle(chart.drawstyle)
            .marker(LINE_MARKERS[i % LINE_MARKERS.len()].clone())
            .markersize(7.0)
            .markeredgewidth(2.0)
            .markerfacecolor(Color::WHITE)
            .label(name)
            .build();
        all_values.extend(values);
    }

    if chart.median_line {
        let level = match chart.summary {
            Summary::Median => stats::median(&all_values),
            Summary::Mean => stats::mean(&all_values),
        };
        match level {
            Some(level) => {
                let style = LineStyle::new()
                    .color(ax.theme.text_color.clone())
                    .width(1.5)
                    .dash(DashPattern::Dashed)
                    .opacity(0.7);
                ax.axhline(HLine::new(level).line_style(style));
            }
            None => debug!("No finite values for the summary line"),
        }
    }

    if let Some(format) = tick_format {
        ax.x_axis.tick_format = format;
    }

    apply_scale(ax, opts.x_scale, opts.y_scale);
    apply_limit_values(ax, &xs, &all_values, chart.x_limit, chart.y_limit, opts.outliers);
    finish(&mut figure, opts, series)?;
    Ok(figure)
}
