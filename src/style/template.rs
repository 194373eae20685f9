//! The steps every chart runs before and after drawing.

use std::path::Path;

use log::debug;

use super::formats::thousand_sep;
use super::palette::{resolve_palette, Palette, PaletteSpec};
use super::{StyleContext, StyleSpec};
use crate::plotting::error::PlotResult;
use crate::plotting::Figure;

/// Resolve `style` into `ctx`, set the output resolution, and return a
/// palette with one color per series. Run before the figure is created.
pub fn apply_header(
    ctx: &mut StyleContext,
    palette: &PaletteSpec,
    style: &StyleSpec,
    series_count: usize,
    dpi: f64,
) -> Palette {
    let colors = resolve_palette(palette, series_count);
    let mut config = style.config();
    if !colors.is_empty() {
        config.color_cycle = colors.colors().to_vec();
    }
    ctx.set_style(config);
    ctx.set_dpi(dpi);
    debug!(
        "Style {} at {} dpi with {} series colors",
        style,
        ctx.dpi(),
        colors.len()
    );
    colors
}

/// Label the axes, apply thousand separators, and write the figure to
/// `save` when given. The last step of every chart.
pub fn apply_footer(
    figure: &mut Figure,
    x_label: &str,
    y_label: &str,
    save: Option<&Path>,
) -> PlotResult<()> {
    {
        let ax = figure.gca();
        if !x_label.is_empty() {
            ax.set_xlabel(x_label);
        }
        if !y_label.is_empty() {
            ax.set_ylabel(y_label);
        }
    }
    thousand_sep(figure);

    match save {
        Some(path) => figure.save(path),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::{Color, TickFormat};
    use crate::style::CoreStyle;

    #[test]
    fn test_header_updates_context() {
        let mut ctx = StyleContext::new();
        let palette = apply_header(
            &mut ctx,
            &PaletteSpec::from("colorblind"),
            &StyleSpec::Core(CoreStyle::FiveThirtyEight),
            3,
            96.0,
        );
        assert_eq!(palette.len(), 3);
        assert_eq!(ctx.dpi(), 96.0);
        assert_eq!(ctx.style().background, Color::from("#f0f0f0"));
        assert_eq!(ctx.style().color_cycle, palette.colors().to_vec());
    }

    #[test]
    fn test_footer_skips_empty_labels() {
        let mut fig = Figure::default();
        apply_footer(&mut fig, "", "Sales", None).unwrap();
        let ax = &fig.axes()[0];
        assert_eq!(ax.xlabel(), None);
        assert_eq!(ax.ylabel(), Some("Sales"));
        assert_eq!(ax.y_axis.tick_format, TickFormat::Thousands);
    }

    #[test]
    fn test_footer_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let mut fig = Figure::default();
        apply_footer(&mut fig, "x", "y", Some(&path)).unwrap();
        assert!(path.exists());
    }
}
