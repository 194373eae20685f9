//! Axes (subplot) implementation.

use log::debug;

use crate::plotting::data::IntoPlotData;
use crate::plotting::element::{
    AxisConfig, Bounds, GridConfig, Legend, LegendPosition, Text, TextCoords,
};
use crate::plotting::plot::{FillBetween, HLine, LinePlot, Plot, Projection};
use crate::plotting::scale::{Scale, ScaleKind};
use crate::plotting::style::{
    cycle_color, Color, DashPattern, DominantBaseline, DrawStyle, LineStyle, Marker,
    TextAnchor, ThemeConfig,
};

/// Default margin added around autoscaled data, as a fraction of the span.
const DEFAULT_MARGIN: f64 = 0.05;

/// An axes object representing a single plot area.
pub struct Axes {
    /// Position within figure (normalized coordinates)
    pub position: Bounds,
    x_scale: Box<dyn Scale>,
    y_scale: Box<dyn Scale>,
    /// Plots contained in this axes
    plots: Vec<Box<dyn Plot>>,
    /// Free text annotations
    texts: Vec<Text>,
    pub x_label: Option<Text>,
    pub y_label: Option<Text>,
    /// Legend configuration
    pub legend: Option<Legend>,
    pub grid: GridConfig,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    /// Fixed limits, applied as-is
    x_lim: Option<(f64, f64)>,
    y_lim: Option<(f64, f64)>,
    /// Data ranges that replace the plotted extent but still get a margin
    x_autoscale: Option<(f64, f64)>,
    y_autoscale: Option<(f64, f64)>,
    x_margin: f64,
    y_margin: f64,
    /// Current color cycle index
    color_index: usize,
    pub theme: ThemeConfig,
}

impl Axes {
    /// Create a new axes with default settings.
    pub fn new() -> Self {
        Axes::themed(ThemeConfig::default())
    }

    /// Create an axes whose grid, spines, fonts and colors follow `theme`.
    pub fn themed(theme: ThemeConfig) -> Self {
        Axes {
            position: Bounds::new(0.1, 0.9, 0.1, 0.9),
            x_scale: ScaleKind::Linear.build(),
            y_scale: ScaleKind::Linear.build(),
            plots: Vec::new(),
            texts: Vec::new(),
            x_label: None,
            y_label: None,
            legend: None,
            grid: GridConfig::themed(&theme),
            x_axis: AxisConfig::themed(&theme),
            y_axis: AxisConfig::themed(&theme),
            x_lim: None,
            y_lim: None,
            x_autoscale: None,
            y_autoscale: None,
            x_margin: DEFAULT_MARGIN,
            y_margin: DEFAULT_MARGIN,
            color_index: 0,
            theme,
        }
    }

    /// Set the position within the figure.
    pub fn position(mut self, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        self.position = Bounds::new(left, right, bottom, top);
        self
    }

    /// Add a line plot.
    pub fn plot(&mut self, x: impl IntoPlotData, y: impl IntoPlotData) -> LinePlotBuilder<'_> {
        LinePlotBuilder {
            axes: self,
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            color: None,
            linewidth: None,
            linestyle: None,
            drawstyle: None,
            marker: None,
            markersize: None,
            markeredgewidth: None,
            markerfacecolor: None,
            label: None,
        }
    }

    /// Add a horizontal reference line.
    pub fn axhline(&mut self, line: HLine) -> &mut Self {
        self.add_plot(Box::new(line));
        self
    }

    /// Add a filled area.
    pub fn fill_between(&mut self, area: FillBetween) -> &mut Self {
        self.add_plot(Box::new(area));
        self
    }

    /// Add a text annotation.
    pub fn text(&mut self, text: Text) -> &mut Self {
        self.texts.push(text);
        self
    }

    /// Set the x-axis label.
    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(Text::new(label, 0.0, 0.0).style(self.theme.label_style.clone()));
        self
    }

    /// Set the y-axis label.
    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(Text::new(label, 0.0, 0.0).style(self.theme.label_style.clone()));
        self
    }

    pub fn xlabel(&self) -> Option<&str> {
        self.x_label.as_ref().map(|t| t.content.as_str())
    }

    pub fn ylabel(&self) -> Option<&str> {
        self.y_label.as_ref().map(|t| t.content.as_str())
    }

    /// Fix the x-axis limits; no margin is added.
    pub fn set_xlim(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_lim = Some((min, max));
        self
    }

    /// Fix the y-axis limits; no margin is added.
    pub fn set_ylim(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_lim = Some((min, max));
        self
    }

    pub fn xlim(&self) -> Option<(f64, f64)> {
        self.x_lim
    }

    pub fn ylim(&self) -> Option<(f64, f64)> {
        self.y_lim
    }

    /// Autoscale the x axis to `[min, max]` instead of the plotted extent.
    /// The usual margin still applies.
    pub fn autoscale_x(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_autoscale = Some((min, max));
        self
    }

    /// Autoscale the y axis to `[min, max]` instead of the plotted extent.
    pub fn autoscale_y(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_autoscale = Some((min, max));
        self
    }

    pub fn autoscale_xrange(&self) -> Option<(f64, f64)> {
        self.x_autoscale
    }

    pub fn autoscale_yrange(&self) -> Option<(f64, f64)> {
        self.y_autoscale
    }

    /// Set the autoscale margins as fractions of the data span.
    pub fn margins(&mut self, x: f64, y: f64) -> &mut Self {
        self.x_margin = x.max(0.0);
        self.y_margin = y.max(0.0);
        self
    }

    pub fn set_xscale(&mut self, kind: ScaleKind) -> &mut Self {
        self.x_scale = kind.build();
        self
    }

    pub fn set_yscale(&mut self, kind: ScaleKind) -> &mut Self {
        self.y_scale = kind.build();
        self
    }

    pub fn x_scale(&self) -> &dyn Scale {
        self.x_scale.as_ref()
    }

    pub fn y_scale(&self) -> &dyn Scale {
        self.y_scale.as_ref()
    }

    /// Enable or disable the grid.
    pub fn grid(&mut self, visible: bool) -> &mut Self {
        self.grid.visible = visible;
        self
    }

    /// Hide tick marks and tick labels on the y axis.
    pub fn hide_yticks(&mut self) -> &mut Self {
        self.y_axis.show_ticks = false;
        self
    }

    /// Remove the left and/or bottom spines.
    pub fn despine(&mut self, left: bool, bottom: bool) -> &mut Self {
        if left {
            self.y_axis.visible = false;
        }
        if bottom {
            self.x_axis.visible = false;
        }
        self
    }

    /// Show the legend.
    pub fn legend(&mut self) -> &mut Self {
        self.legend_at(LegendPosition::default())
    }

    /// Show the legend at a specific position.
    pub fn legend_at(&mut self, position: LegendPosition) -> &mut Self {
        if let Some(ref mut legend) = self.legend {
            legend.visible = true;
            legend.position = position;
        } else {
            self.legend = Some(self.new_legend().position(position));
        }
        self
    }

    /// Lay legend entries out in `ncol` columns.
    pub fn legend_ncol(&mut self, ncol: usize) -> &mut Self {
        if let Some(ref mut legend) = self.legend {
            legend.ncol = ncol.max(1);
        }
        self
    }

    /// Whether a legend with at least one entry will be drawn.
    pub fn legend_visible(&self) -> bool {
        self.legend
            .as_ref()
            .map(|l| l.visible && !l.entries.is_empty())
            .unwrap_or(false)
    }

    fn new_legend(&self) -> Legend {
        Legend::new().text_style(self.theme.tick_style.clone())
    }

    /// Add a plot to this axes.
    pub fn add_plot(&mut self, plot: Box<dyn Plot>) {
        // Labelled plots register with a hidden legend until one is requested
        if let Some(entry) = plot.legend_entry() {
            if self.legend.is_none() {
                self.legend = Some(self.new_legend().visible(false));
            }
            if let Some(ref mut legend) = self.legend {
                legend.add_entry(entry);
            }
        }

        self.plots.push(plot);
    }

    pub fn plots(&self) -> &[Box<dyn Plot>] {
        &self.plots
    }

    pub fn texts(&self) -> &[Text] {
        &self.texts
    }

    /// Get the next color from the cycle.
    pub fn next_color(&mut self) -> Color {
        let cycle = &self.theme.color_cycle;
        let color = if cycle.is_empty() {
            cycle_color(self.color_index)
        } else {
            cycle[self.color_index % cycle.len()].clone()
        };
        self.color_index += 1;
        color
    }

    /// Extent of all plotted data, per axis.
    pub fn data_bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        let mut any = false;
        for plot in &self.plots {
            if let Some(b) = plot.bounds() {
                bounds.include_bounds(&b);
                any = true;
            }
        }
        if any {
            Some(bounds)
        } else {
            None
        }
    }

    /// The x range that will be drawn.
    pub fn view_xlim(&self) -> (f64, f64) {
        self.fitted_x_scale().range()
    }

    /// The y range that will be drawn.
    pub fn view_ylim(&self) -> (f64, f64) {
        self.fitted_y_scale().range()
    }

    fn fitted_x_scale(&self) -> Box<dyn Scale> {
        let data = self
            .data_bounds()
            .filter(|b| b.x_min.is_finite() && b.x_max.is_finite())
            .map(|b| (b.x_min, b.x_max));
        fit_scale(
            self.x_scale.as_ref(),
            self.x_lim,
            self.x_autoscale.or(data),
            self.x_margin,
        )
    }

    fn fitted_y_scale(&self) -> Box<dyn Scale> {
        let data = self
            .data_bounds()
            .filter(|b| b.y_min.is_finite() && b.y_max.is_finite())
            .map(|b| (b.y_min, b.y_max));
        fit_scale(
            self.y_scale.as_ref(),
            self.y_lim,
            self.y_autoscale.or(data),
            self.y_margin,
        )
    }

    /// Render the axes to SVG. Figure dimensions are in points.
    pub fn render_svg(&self, figure_width: f64, figure_height: f64) -> String {
        let mut svg = String::new();

        // Calculate pixel bounds for the plot area
        let pixel_bounds = Bounds::new(
            self.position.x_min * figure_width,
            self.position.x_max * figure_width,
            (1.0 - self.position.y_max) * figure_height,
            (1.0 - self.position.y_min) * figure_height,
        );

        let x_scale = self.fitted_x_scale();
        let y_scale = self.fitted_y_scale();
        let projection = Projection {
            x_scale: x_scale.as_ref(),
            y_scale: y_scale.as_ref(),
            pixel: pixel_bounds,
        };

        // Background
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height(),
            self.theme.plot_background.to_svg_string()
        ));

        if self.grid.visible {
            svg.push_str(&self.render_grid(&projection));
        }

        // Plots, clipped to the plot area
        let clip_id = format!(
            "plot-clip-{:.0}-{:.0}",
            pixel_bounds.x_min, pixel_bounds.y_min
        );
        svg.push_str(&format!(
            "<defs><clipPath id=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath></defs>\n",
            clip_id,
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height()
        ));
        svg.push_str(&format!("<g clip-path=\"url(#{})\">\n", clip_id));
        for plot in &self.plots {
            svg.push_str(&plot.render_svg(&projection));
        }
        svg.push_str("</g>\n");

        svg.push_str(&self.render_axes(&projection));

        for text in &self.texts {
            let position = match text.coords {
                TextCoords::Data => projection.point(text.x, text.y),
                TextCoords::Axes => Some((
                    pixel_bounds.x_min + text.x * pixel_bounds.width(),
                    pixel_bounds.y_max - text.y * pixel_bounds.height(),
                )),
                TextCoords::Figure => Some((
                    text.x * figure_width,
                    (1.0 - text.y) * figure_height,
                )),
            };
            if let Some((px, py)) = position {
                svg.push_str(&text.to_svg_at(px, py));
            }
        }

        if let Some(ref label) = self.x_label {
            let mut t = label.clone();
            t.style.anchor = TextAnchor::Middle;
            svg.push_str(&t.to_svg_at(
                (pixel_bounds.x_min + pixel_bounds.x_max) / 2.0,
                pixel_bounds.y_max + 40.0,
            ));
        }

        if let Some(ref label) = self.y_label {
            let mut t = label.clone();
            t.style.anchor = TextAnchor::Middle;
            t.style.rotation = -90.0;
            svg.push_str(&t.to_svg_at(
                pixel_bounds.x_min - 45.0,
                (pixel_bounds.y_min + pixel_bounds.y_max) / 2.0,
            ));
        }

        if let Some(ref legend) = self.legend {
            if legend.visible && !legend.entries.is_empty() {
                svg.push_str(&self.render_legend(legend, &pixel_bounds));
            }
        }

        svg
    }

    fn render_grid(&self, projection: &Projection<'_>) -> String {
        let mut svg = String::new();
        let pixel = &projection.pixel;
        let line = |style: &LineStyle, x1: f64, y1: f64, x2: f64, y2: f64| {
            format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {} stroke-opacity=\"{}\"/>\n",
                x1, y1, x2, y2,
                style.to_svg_style(),
                self.grid.grid_opacity
            )
        };

        if self.grid.show_x {
            let ticks = visible_ticks(projection.x_scale, self.x_axis.num_ticks);
            for &tick in &ticks {
                let px = projection.px(tick);
                svg.push_str(&line(&self.grid.major_style, px, pixel.y_min, px, pixel.y_max));
            }
            if self.grid.show_minor {
                for t in minor_positions(projection.x_scale, &ticks, self.grid.minor_divisions) {
                    let px = pixel.x_min + t * pixel.width();
                    svg.push_str(&line(&self.grid.minor_style, px, pixel.y_min, px, pixel.y_max));
                }
            }
        }

        if self.grid.show_y {
            let ticks = visible_ticks(projection.y_scale, self.y_axis.num_ticks);
            for &tick in &ticks {
                let py = projection.py(tick);
                svg.push_str(&line(&self.grid.major_style, pixel.x_min, py, pixel.x_max, py));
            }
            if self.grid.show_minor {
                for t in minor_positions(projection.y_scale, &ticks, self.grid.minor_divisions) {
                    let py = pixel.y_max - t * pixel.height();
                    svg.push_str(&line(&self.grid.minor_style, pixel.x_min, py, pixel.x_max, py));
                }
            }
        }

        svg
    }

    fn render_axes(&self, projection: &Projection<'_>) -> String {
        let mut svg = String::new();
        let pixel = &projection.pixel;

        // X axis
        if self.x_axis.visible {
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                pixel.x_min, pixel.y_max, pixel.x_max, pixel.y_max,
                self.x_axis.line_style.to_svg_style()
            ));
        }
        if self.x_axis.show_ticks {
            let style = self.x_axis.tick_label_style.clone().anchor(TextAnchor::Middle);
            let ticks = self
                .x_axis
                .resolve_ticks(visible_ticks(projection.x_scale, self.x_axis.num_ticks));
            for (tick, label) in ticks {
                let px = projection.px(tick);
                if !px.is_finite() {
                    continue;
                }
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                    px, pixel.y_max,
                    px, pixel.y_max + self.x_axis.tick_length,
                    self.x_axis.line_style.color.to_svg_string()
                ));
                let y = pixel.y_max + self.x_axis.tick_length + self.x_axis.tick_padding + 10.0;
                svg.push_str(&Text::new(label, 0.0, 0.0).style(style.clone()).to_svg_at(px, y));
            }
        }

        // Y axis
        if self.y_axis.visible {
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                pixel.x_min, pixel.y_min, pixel.x_min, pixel.y_max,
                self.y_axis.line_style.to_svg_style()
            ));
        }
        if self.y_axis.show_ticks {
            let style = self
                .y_axis
                .tick_label_style
                .clone()
                .anchor(TextAnchor::End)
                .baseline(DominantBaseline::Middle);
            let ticks = self
                .y_axis
                .resolve_ticks(visible_ticks(projection.y_scale, self.y_axis.num_ticks));
            for (tick, label) in ticks {
                let py = projection.py(tick);
                if !py.is_finite() {
                    continue;
                }
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                    pixel.x_min - self.y_axis.tick_length, py,
                    pixel.x_min, py,
                    self.y_axis.line_style.color.to_svg_string()
                ));
                let x = pixel.x_min - self.y_axis.tick_length - self.y_axis.tick_padding;
                svg.push_str(&Text::new(label, 0.0, 0.0).style(style.clone()).to_svg_at(x, py));
            }
        }

        svg
    }

    fn render_legend(&self, legend: &Legend, pixel_bounds: &Bounds) -> String {
        let mut svg = String::new();

        let (anchor_x, anchor_y) = legend.position.anchor();
        let (legend_width, legend_height) = legend.size();
        let line_height = legend.text_style.font_size * 1.5;
        let column_width = legend.column_width() + legend.label_gap;

        let lx = match legend.position {
            LegendPosition::TopRight | LegendPosition::Right | LegendPosition::BottomRight => {
                pixel_bounds.x_max - legend_width - 5.0
            }
            LegendPosition::TopLeft | LegendPosition::Left | LegendPosition::BottomLeft => {
                pixel_bounds.x_min + 5.0
            }
            _ => pixel_bounds.x_min + anchor_x * pixel_bounds.width() - legend_width / 2.0,
        };
        // Anchor the box edge nearest to the anchor point
        let ly = match legend.position {
            LegendPosition::BottomLeft | LegendPosition::BottomRight | LegendPosition::Bottom => {
                pixel_bounds.y_max - pixel_bounds.height() * anchor_y - legend_height
            }
            LegendPosition::Left | LegendPosition::Right | LegendPosition::Center => {
                pixel_bounds.y_max - pixel_bounds.height() * anchor_y - legend_height / 2.0
            }
            _ => pixel_bounds.y_min + pixel_bounds.height() * (1.0 - anchor_y),
        };

        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
            lx, ly, legend_width, legend_height,
            legend.background.to_svg_style()
        ));

        let ncol = legend.ncol.max(1);
        let label_style = legend.text_style.clone().baseline(DominantBaseline::Middle);
        for (i, entry) in legend.entries.iter().enumerate() {
            let (row, col) = (i / ncol, i % ncol);
            let ex = lx + legend.padding + col as f64 * column_width;
            let ey = ly + legend.padding + (row as f64 + 0.5) * line_height;
            let line_x2 = ex + legend.line_length;
            let line_mid = (ex + line_x2) / 2.0;

            let has_line = entry.line_style.is_some();
            let has_marker = entry.marker_style.is_some();

            if let Some(ref line_style) = entry.line_style {
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                    ex, ey, line_x2, ey,
                    line_style.to_svg_style()
                ));
            }

            if let Some(ref fill_style) = entry.fill_style {
                if !has_line && !has_marker {
                    let rect_size = 10.0;
                    svg.push_str(&format!(
                        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
                        line_mid - rect_size / 2.0,
                        ey - rect_size / 2.0,
                        rect_size,
                        rect_size,
                        fill_style.to_svg_style()
                    ));
                }
            }

            if let Some(ref marker_style) = entry.marker_style {
                svg.push_str(&marker_style.render_at(line_mid, ey));
            }

            svg.push_str(
                &Text::new(entry.label.clone(), 0.0, 0.0)
                    .style(label_style.clone())
                    .to_svg_at(line_x2 + legend.label_gap, ey),
            );
        }

        svg
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

/// Clone `scale` and fit it to fixed limits, or to a data range plus margin.
fn fit_scale(
    scale: &dyn Scale,
    limits: Option<(f64, f64)>,
    data: Option<(f64, f64)>,
    margin: f64,
) -> Box<dyn Scale> {
    let mut fitted = scale.clone_box();
    let result = match (limits, data) {
        (Some((lo, hi)), _) => fitted.set_range(lo, hi),
        (None, Some((lo, hi))) => fitted
            .set_range(lo, hi)
            .and_then(|_| fitted.pad(margin)),
        (None, None) => Ok(()),
    };
    if let Err(e) = result {
        debug!("keeping default {} axis range: {}", fitted.kind(), e);
        fitted = fitted.kind().build();
    }
    fitted
}

/// Scale ticks that fall inside the current range.
fn visible_ticks(scale: &dyn Scale, num_ticks: usize) -> Vec<f64> {
    let (lo, hi) = scale.range();
    let eps = (hi - lo).abs() * 1e-9;
    scale
        .ticks(num_ticks)
        .into_iter()
        .filter(|t| *t >= lo - eps && *t <= hi + eps)
        .collect()
}

/// Normalized positions of minor lines between consecutive major ticks.
fn minor_positions(scale: &dyn Scale, ticks: &[f64], divisions: usize) -> Vec<f64> {
    if divisions < 2 {
        return Vec::new();
    }
    ticks
        .windows(2)
        .flat_map(|w| {
            let a = scale.transform(w[0]);
            let b = scale.transform(w[1]);
            (1..divisions).map(move |k| a + (b - a) * k as f64 / divisions as f64)
        })
        .filter(|t| t.is_finite())
        .collect()
}

/// Builder for line plots.
pub struct LinePlotBuilder<'a> {
    axes: &'a mut Axes,
    x: Vec<f64>,
    y: Vec<f64>,
    color: Option<Color>,
    linewidth: Option<f64>,
    linestyle: Option<DashPattern>,
    drawstyle: Option<DrawStyle>,
    marker: Option<Marker>,
    markersize: Option<f64>,
    markeredgewidth: Option<f64>,
    markerfacecolor: Option<Color>,
    label: Option<String>,
}

impl<'a> LinePlotBuilder<'a> {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.linewidth = Some(width);
        self
    }

    pub fn linestyle(mut self, style: DashPattern) -> Self {
        self.linestyle = Some(style);
        self
    }

    pub fn drawstyle(mut self, style: DrawStyle) -> Self {
        self.drawstyle = Some(style);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn markersize(mut self, size: f64) -> Self {
        self.markersize = Some(size);
        self
    }

    pub fn markeredgewidth(mut self, width: f64) -> Self {
        self.markeredgewidth = Some(width);
        self
    }

    pub fn markerfacecolor(mut self, color: impl Into<Color>) -> Self {
        self.markerfacecolor = Some(color.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let color = self.color.unwrap_or_else(|| self.axes.next_color());
        let linewidth = self.linewidth.unwrap_or(self.axes.theme.line_width);

        let mut plot = LinePlot::new(self.x, self.y).color(color).linewidth(linewidth);

        if let Some(style) = self.linestyle {
            plot = plot.linestyle(style);
        }
        if let Some(style) = self.drawstyle {
            plot = plot.drawstyle(style);
        }
        if let Some(marker) = self.marker {
            plot = plot.marker(marker);
        }
        if let Some(size) = self.markersize {
            plot = plot.markersize(size);
        }
        if let Some(width) = self.markeredgewidth {
            plot = plot.markeredgewidth(width);
        }
        if let Some(face) = self.markerfacecolor {
            plot = plot.markerfacecolor(face);
        }
        if let Some(label) = self.label {
            plot = plot.label(label);
        }

        self.axes.add_plot(Box::new(plot));
        self.axes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autoscale_adds_margin() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 10.0], vec![0.0, 100.0]).build();
        let (lo, hi) = ax.view_ylim();
        assert!((lo + 5.0).abs() < 1e-9);
        assert!((hi - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_limits_have_no_margin() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 10.0], vec![0.0, 100.0]).build();
        ax.set_ylim(0.0, 50.0);
        assert_eq!(ax.view_ylim(), (0.0, 50.0));
    }

    #[test]
    fn test_autoscale_range_replaces_data_extent() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0, 100.0]).build();
        ax.autoscale_y(1.0, 3.0);
        let (lo, hi) = ax.view_ylim();
        assert!((lo - 0.9).abs() < 1e-9);
        assert!((hi - 3.1).abs() < 1e-9);
    }

    #[test]
    fn test_hline_only_constrains_y() {
        let mut ax = Axes::new();
        ax.axhline(HLine::new(2.0));
        let bounds = ax.data_bounds().unwrap();
        assert!(!bounds.x_min.is_finite());
        assert_eq!(ax.view_xlim(), (0.0, 1.0));
    }

    #[test]
    fn test_labelled_plots_register_hidden_legend() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0]).label("a").build();
        assert!(!ax.legend_visible());
        ax.legend().legend_ncol(2);
        assert!(ax.legend_visible());
        assert_eq!(ax.legend.as_ref().map(|l| l.ncol), Some(2));
    }

    #[test]
    fn test_color_cycle_follows_theme() {
        let mut theme = ThemeConfig::default();
        theme.color_cycle = vec![Color::RED, Color::GREEN];
        let mut ax = Axes::themed(theme);
        assert_eq!(ax.next_color(), Color::RED);
        assert_eq!(ax.next_color(), Color::GREEN);
        assert_eq!(ax.next_color(), Color::RED);
    }

    #[test]
    fn test_log_axis_renders_decade_ticks() {
        let mut ax = Axes::new();
        ax.set_yscale(ScaleKind::Log);
        ax.plot(vec![0.0, 1.0, 2.0], vec![1.0, 10.0, 100.0]).build();
        let svg = ax.render_svg(800.0, 600.0);
        assert!(svg.contains(">10</text>"));
        assert!(svg.contains(">100</text>"));
        assert_eq!(ax.y_scale().kind(), ScaleKind::Log);
    }

    #[test]
    fn test_hidden_yticks_and_spines() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0]).build();
        ax.hide_yticks().despine(true, true);
        let svg = ax.render_svg(800.0, 600.0);
        assert!(!svg.contains("text-anchor=\"end\""));
    }
}
