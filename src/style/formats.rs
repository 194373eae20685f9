//! Tick label formatting shared by every chart.

use crate::plotting::{Figure, TickFormat};

/// Switch automatic tick labels on every axes to thousand-separated ones.
/// Axes with an explicit format such as dates are left alone.
pub fn thousand_sep(figure: &mut Figure) {
    for ax in figure.axes_mut() {
        for axis in [&mut ax.x_axis, &mut ax.y_axis] {
            if axis.tick_format == TickFormat::Auto {
                axis.tick_format = TickFormat::Thousands;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_auto_axes_change() {
        let mut fig = Figure::default();
        fig.gca().x_axis.tick_format = TickFormat::Datetime("%Y".to_string());
        thousand_sep(&mut fig);
        let ax = &fig.axes()[0];
        assert_eq!(ax.x_axis.tick_format, TickFormat::Datetime("%Y".to_string()));
        assert_eq!(ax.y_axis.tick_format, TickFormat::Thousands);
        assert_eq!(ax.y_axis.format_tick(25000.0), "25,000");
    }
}
