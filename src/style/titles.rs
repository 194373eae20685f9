//! Title and subtitle placement above the plot area.

use crate::plotting::style::{FontWeight, TextAnchor};
use crate::plotting::{Figure, Text};

/// Baseline of the title, figure fraction from the bottom.
pub const TITLE_Y: f64 = 0.955;
/// Baseline of the subtitle.
pub const SUBTITLE_Y: f64 = 0.905;
/// Top edge of the axes once a title is present.
pub const AXES_TOP: f64 = 0.86;

const TITLE_SIZE: f64 = 20.0;
const SUBTITLE_SIZE: f64 = 14.0;
const DEFAULT_LEFT: f64 = 0.1;

/// Place `title` and `sub_title` left-aligned with the plot area. Empty
/// strings add nothing.
pub fn apply_titles(figure: &mut Figure, title: &str, sub_title: &str) {
    if title.is_empty() && sub_title.is_empty() {
        return;
    }

    let left = figure
        .axes()
        .first()
        .map(|ax| ax.position.x_min)
        .unwrap_or(DEFAULT_LEFT);
    let base = figure.theme.title_style.clone().anchor(TextAnchor::Start);

    if !title.is_empty() {
        let style = base.clone().font_size(TITLE_SIZE).bold();
        figure.figtext(Text::new(title, left, TITLE_Y).style(style));
    }
    if !sub_title.is_empty() {
        let style = base
            .font_size(SUBTITLE_SIZE)
            .weight(FontWeight::Normal)
            .color(figure.theme.text_color.with_alpha(0.8));
        figure.figtext(Text::new(sub_title, left, SUBTITLE_Y).style(style));
    }
    figure.subplots_adjust_top(AXES_TOP);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_subtitle_adds_one_text() {
        let mut fig = Figure::default();
        fig.gca();
        apply_titles(&mut fig, "Revenue", "");
        assert_eq!(fig.texts().len(), 1);
        assert_eq!(fig.texts()[0].content, "Revenue");
        assert_eq!(fig.axes()[0].position.y_max, AXES_TOP);
    }

    #[test]
    fn test_subtitle_below_title() {
        let mut fig = Figure::default();
        apply_titles(&mut fig, "Revenue", "by quarter");
        let texts = fig.texts();
        assert_eq!(texts.len(), 2);
        assert!(texts[1].y < texts[0].y);
        assert!(texts[1].style.font_size < texts[0].style.font_size);
    }

    #[test]
    fn test_title_rendered_once_as_figure_text() {
        let mut fig = Figure::default();
        fig.gca().plot(vec![0.0, 1.0], vec![1.0, 2.0]).build();
        apply_titles(&mut fig, "Quarterly revenue", "");
        assert_eq!(fig.render().matches("Quarterly revenue").count(), 1);
    }

    #[test]
    fn test_nothing_for_empty_strings() {
        let mut fig = Figure::default();
        fig.gca();
        let top = fig.axes()[0].position.y_max;
        apply_titles(&mut fig, "", "");
        assert!(fig.texts().is_empty());
        assert_eq!(fig.axes()[0].position.y_max, top);
    }
}
