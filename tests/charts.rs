use astetik::plotting::{Marker, TextCoords};
use astetik::style::palette::PaletteName;
use astetik::utils::{apply_limit, apply_scale};
use astetik::{
    line, multikde, resolve_palette, AxisLimit, ChartOptions, Columns, DataFrame, LineChart,
    MultiKdeChart, OutlierPolicy, PlotError, ScaleKind, StyleContext,
};

fn two_series() -> DataFrame {
    DataFrame::new()
        .with_column("a", vec![1.0, 2.0, 3.0])
        .unwrap()
        .with_column("b", vec![4.0, 5.0, 6.0])
        .unwrap()
}

#[test]
fn test_line_two_series_end_to_end() {
    let mut ctx = StyleContext::new();
    let fig = line(&mut ctx, &two_series(), &LineChart::new(vec!["a", "b"])).unwrap();

    let ax = &fig.axes()[0];
    assert_eq!(ax.plots().len(), 2);
    let markers: Vec<_> = ax
        .plots()
        .iter()
        .map(|p| p.marker_style().map(|m| m.marker))
        .collect();
    assert_eq!(markers, vec![Some(Marker::Circle), Some(Marker::Plus)]);
    assert!(!ax.legend_visible());
}

#[test]
fn test_line_legend_keyed_by_series() {
    let mut ctx = StyleContext::new();
    let chart = LineChart::new(vec!["a", "b"]).options(ChartOptions {
        legend: true,
        ..Default::default()
    });
    let fig = line(&mut ctx, &two_series(), &chart).unwrap();
    let ax = &fig.axes()[0];
    assert!(ax.legend_visible());
    let legend = ax.legend.as_ref().unwrap();
    let labels: Vec<_> = legend.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b"]);
    assert_eq!(legend.ncol, 2);
}

#[test]
fn test_subtitle_presence() {
    let mut ctx = StyleContext::new();
    let with_title = |title: &str, sub: &str| LineChart::new("a").options(ChartOptions {
        title: title.to_string(),
        sub_title: sub.to_string(),
        ..Default::default()
    });

    let fig = line(&mut ctx, &two_series(), &with_title("Main", "")).unwrap();
    assert_eq!(fig.texts().len(), 1);

    let fig = line(&mut ctx, &two_series(), &with_title("Main", "Below")).unwrap();
    let texts = fig.texts();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[1].content, "Below");
    assert_eq!(texts[1].coords, TextCoords::Figure);
    assert!(texts[1].y < texts[0].y);

    let fig = line(&mut ctx, &two_series(), &with_title("", "")).unwrap();
    assert!(fig.texts().is_empty());
}

#[test]
fn test_limit_with_and_without_outlier_exclusion() {
    let data = DataFrame::new().with_column("v", vec![1.0, 2.0, 3.0, 100.0]).unwrap();
    let mut fig = StyleContext::new().figure();

    let ax = fig.gca();
    apply_limit(
        ax,
        &data,
        &Columns::default(),
        &Columns::from("v"),
        AxisLimit::None,
        AxisLimit::Auto,
        OutlierPolicy::Iqr,
    )
    .unwrap();
    assert_eq!(ax.autoscale_yrange(), Some((1.0, 3.0)));

    apply_limit(
        ax,
        &data,
        &Columns::default(),
        &Columns::from("v"),
        AxisLimit::None,
        AxisLimit::Auto,
        OutlierPolicy::None,
    )
    .unwrap();
    assert_eq!(ax.autoscale_yrange(), Some((1.0, 100.0)));
    assert_eq!(ax.autoscale_xrange(), None);
}

#[test]
fn test_linear_scale_is_noop() {
    let mut fig = StyleContext::new().figure();
    let ax = fig.gca();
    apply_scale(ax, ScaleKind::Linear, ScaleKind::Linear);
    assert_eq!(ax.x_scale().kind(), ScaleKind::Linear);
    assert_eq!(ax.y_scale().kind(), ScaleKind::Linear);
}

#[test]
fn test_log_scale_from_options() {
    let mut ctx = StyleContext::new();
    let chart = LineChart::new("b").options(ChartOptions {
        y_scale: ScaleKind::Log,
        ..Default::default()
    });
    let fig = line(&mut ctx, &two_series(), &chart).unwrap();
    assert_eq!(fig.axes()[0].y_scale().kind(), ScaleKind::Log);
}

#[test]
fn test_palettes_sized_to_request() {
    for name in PaletteName::ALL {
        for n in 1..=11 {
            assert_eq!(resolve_palette(name, n).len(), n);
        }
    }
    assert_eq!(resolve_palette("not-a-palette", 7), resolve_palette("default", 7));
}

#[test]
fn test_multikde_ridges() {
    let data = DataFrame::new()
        .with_column("age", vec![21.0, 25.0, 29.0, 48.0, 52.0, 57.0])
        .unwrap()
        .with_column("plan", vec!["young", "young", "young", "old", "old", "old"])
        .unwrap();
    let mut ctx = StyleContext::new();
    let fig = multikde(&mut ctx, &data, &MultiKdeChart::new("age", "plan")).unwrap();
    let ax = &fig.axes()[0];
    let labels: Vec<_> = ax.texts().iter().map(|t| t.content.as_str()).collect();
    assert_eq!(labels, vec!["young", "old"]);
    assert!(fig.render().contains("young"));
}

#[test]
fn test_save_writes_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("line.svg");
    let mut ctx = StyleContext::new();
    let chart = LineChart::new("a").options(ChartOptions {
        save: Some(path.clone()),
        dpi: 100.0,
        ..Default::default()
    });
    line(&mut ctx, &two_series(), &chart).unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("width=\"1200\" height=\"600\""));
}

#[test]
fn test_save_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = StyleContext::new();
    let chart = LineChart::new("a").options(ChartOptions {
        save: Some(dir.path().join("line.png")),
        ..Default::default()
    });
    let err = line(&mut ctx, &two_series(), &chart).unwrap_err();
    assert!(matches!(err, PlotError::UnsupportedFormat(_)));
}
