//! Stacked kernel density ridges, one per label group.

use log::{debug, warn};
use serde::Deserialize;

use super::{finish, ChartOptions};
use crate::frame::DataFrame;
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::style::{DominantBaseline, TextAnchor};
use crate::plotting::{Color, FillBetween, Figure, HLine, LineStyle, Text};
use crate::style::{apply_header, StyleContext};
use crate::utils::{apply_limit_values, apply_scale, stats, AxisLimit};

const GRID_POINTS: usize = 200;
const BANDWIDTH_FACTOR: f64 = 0.2;
/// Ridge spacing as a fraction of the tallest peak; below 1 the ridges
/// overlap.
const RIDGE_STEP: f64 = 0.75;
const LABEL_SIZE: f64 = 14.0;

#[derive(Debug, Clone, Deserialize)]
pub struct MultiKdeChart {
    /// Continuous column the densities are estimated over
    pub x: String,
    /// Column whose distinct values form the groups
    pub label_col: String,
    /// Order groups by ascending median of `x` instead of first appearance
    #[serde(default)]
    pub sort: bool,
    #[serde(default = "default_limit")]
    pub x_limit: AxisLimit,
    #[serde(default = "default_limit")]
    pub y_limit: AxisLimit,
    #[serde(flatten)]
    pub options: ChartOptions,
}

fn default_limit() -> AxisLimit {
    AxisLimit::Auto
}

impl MultiKdeChart {
    pub fn new(x: impl Into<String>, label_col: impl Into<String>) -> Self {
        MultiKdeChart {
            x: x.into(),
            label_col: label_col.into(),
            sort: false,
            x_limit: default_limit(),
            y_limit: default_limit(),
            options: ChartOptions::default(),
        }
    }

    pub fn sorted(mut self) -> Self {
        self.sort = true;
        self
    }

    pub fn options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }
}

/// Kernel width for a group: a fixed share of its sample deviation.
fn bandwidth(values: &[f64]) -> f64 {
    match stats::std_dev(values, 1) {
        Some(sd) if sd > 0.0 => BANDWIDTH_FACTOR * sd,
        _ => 1.0,
    }
}

/// Finite values of `x` per label, groups too small to estimate dropped.
fn grouped_values(
    data: &DataFrame,
    x: &str,
    label_col: &str,
) -> PlotResult<Vec<(String, Vec<f64>)>> {
    let values = data.numeric(x)?;
    let mut groups = Vec::new();
    for (label, rows) in data.groups(label_col)? {
        let group: Vec<f64> = rows
            .iter()
            .map(|&i| values[i])
            .filter(|v| v.is_finite())
            .collect();
        if group.len() < 2 {
            warn!(
                "Skipping group '{}': {} value(s) is too few for a density",
                label,
                group.len()
            );
            continue;
        }
        groups.push((label, group));
    }
    Ok(groups)
}

/// One filled density per distinct `label_col` value, stacked top to bottom.
pub fn multikde(
    ctx: &mut StyleContext,
    data: &DataFrame,
    chart: &MultiKdeChart,
) -> PlotResult<Figure> {
    let mut groups = grouped_values(data, &chart.x, &chart.label_col)?;
    if groups.is_empty() {
        return Err(PlotError::EmptyData);
    }
    if chart.sort {
        groups.sort_by(|a, b| {
            let ma = stats::median(&a.1).unwrap_or(f64::NAN);
            let mb = stats::median(&b.1).unwrap_or(f64::NAN);
            ma.total_cmp(&mb)
        });
    }

    let opts = &chart.options;
    let palette = apply_header(ctx, &opts.palette, &opts.style, groups.len(), opts.dpi);

    let widths: Vec<f64> = groups.iter().map(|(_, v)| bandwidth(v)).collect();
    let max_width = widths.iter().copied().fold(0.0, f64::max);
    let all: Vec<f64> = groups.iter().flat_map(|(_, v)| v.iter().copied()).collect();
    let (lo, hi) = stats::min_max(&all).ok_or(PlotError::EmptyData)?;
    let grid = stats::linspace(lo - 3.0 * max_width, hi + 3.0 * max_width, GRID_POINTS);

    let densities: Vec<Vec<f64>> = groups
        .iter()
        .zip(widths.iter())
        .map(|((_, v), &h)| stats::gaussian_kde(v, &grid, h))
        .collect();
    let peak = densities.iter().flatten().copied().fold(0.0, f64::max);
    let step = if peak > 0.0 { peak * RIDGE_STEP } else { 1.0 };
    debug!("{} ridges, peak density {:.4}", groups.len(), peak);

    let mut figure = ctx.figure();
    let label_style = ctx.style().tick_style.clone();
    let ax = figure.gca();
    let n = groups.len();
    let mut tops = Vec::with_capacity(n * 2);

    for (i, ((label, _), density)) in groups.iter().zip(densities).enumerate() {
        let base = (n - 1 - i) as f64 * step;
        let color = palette.get(i);
        let ridge: Vec<f64> = density.iter().map(|d| d + base).collect();
        tops.push(base);
        if let Some((_, top)) = stats::min_max(&ridge) {
            tops.push(top);
        }

        ax.fill_between(
            FillBetween::new(grid.clone(), vec![base; grid.len()], ridge)
                .color(color.clone())
                .alpha(1.0)
                .edge(LineStyle::new().color(Color::WHITE).width(1.5))
                .label(label.as_str()),
        );
        ax.axhline(HLine::new(base).color(color.clone()).linewidth(2.0));
        let style = label_style
            .clone()
            .font_size(LABEL_SIZE)
            .bold()
            .color(color)
            .anchor(TextAnchor::Start)
            .baseline(DominantBaseline::Middle);
        ax.text(Text::new(label.as_str(), grid[0], base + 0.2 * step).style(style));
    }

    ax.grid(false).hide_yticks().despine(true, true);

    apply_scale(ax, opts.x_scale, opts.y_scale);
    apply_limit_values(ax, &grid, &tops, chart.x_limit, chart.y_limit, opts.outliers);
    finish(&mut figure, opts, 1)?;
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        DataFrame::new()
            .with_column("age", vec![30.0, 32.0, 35.0, 60.0, 62.0, 65.0, 40.0, f64::NAN])
            .unwrap()
            .with_column(
                "plan",
                vec!["gold", "gold", "gold", "basic", "basic", "basic", "solo", "solo"],
            )
            .unwrap()
    }

    #[test]
    fn test_one_ridge_per_group() {
        let mut ctx = StyleContext::new();
        let fig = multikde(&mut ctx, &sample(), &MultiKdeChart::new("age", "plan")).unwrap();
        let ax = &fig.axes()[0];
        // solo has a single finite value and is skipped
        assert_eq!(ax.texts().len(), 2);
        assert_eq!(ax.texts()[0].content, "gold");
        assert_eq!(ax.plots().len(), 4);
        assert!(!ax.y_axis.show_ticks);
        assert!(!ax.x_axis.visible);
        assert!(ax.texts()[0].y > ax.texts()[1].y);
    }

    #[test]
    fn test_sort_by_median() {
        let data = DataFrame::new()
            .with_column("v", vec![9.0, 10.0, 1.0, 2.0])
            .unwrap()
            .with_column("g", vec!["high", "high", "low", "low"])
            .unwrap();
        let mut ctx = StyleContext::new();
        let fig = multikde(&mut ctx, &data, &MultiKdeChart::new("v", "g").sorted()).unwrap();
        assert_eq!(fig.axes()[0].texts()[0].content, "low");
    }

    #[test]
    fn test_no_usable_groups() {
        let data = DataFrame::new()
            .with_column("v", vec![1.0, 2.0])
            .unwrap()
            .with_column("g", vec!["a", "b"])
            .unwrap();
        let mut ctx = StyleContext::new();
        let err = multikde(&mut ctx, &data, &MultiKdeChart::new("v", "g")).unwrap_err();
        assert!(matches!(err, PlotError::EmptyData));
    }

    #[test]
    fn test_bandwidth() {
        assert_eq!(bandwidth(&[3.0, 3.0]), 1.0);
        assert!((bandwidth(&[0.0, 2.0]) - 0.2 * 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
