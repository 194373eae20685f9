//! Minimal matplotlib-like plotting engine with SVG output.
//!
//! A [`Figure`] holds [`Axes`](axes::Axes); axes hold plots ([`LinePlot`],
//! [`FillBetween`], [`HLine`]) and map data through a [`Scale`] per axis.

pub mod axes;
pub mod backend;
pub mod data;
pub mod element;
pub mod error;
pub mod figure;
pub mod plot;
pub mod scale;
pub mod style;

pub use axes::Axes;
pub use data::IntoPlotData;
pub use element::{Bounds, Legend, LegendPosition, Text, TextCoords, TickFormat};
pub use error::{PlotError, PlotResult};
pub use figure::Figure;
pub use plot::{FillBetween, HLine, LinePlot, Plot};
pub use scale::{LinearScale, LogScale, Scale, ScaleKind, SymLogScale};
pub use style::{
    Color, DashPattern, DrawStyle, FillStyle, LineStyle, Marker, MarkerStyle, TextStyle, Theme,
    ThemeConfig,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::plotting::axes::Axes;
    pub use crate::plotting::data::IntoPlotData;
    pub use crate::plotting::error::{PlotError, PlotResult};
    pub use crate::plotting::figure::Figure;
    pub use crate::plotting::plot::{FillBetween, HLine, LinePlot};
    pub use crate::plotting::scale::ScaleKind;
    pub use crate::plotting::style::{
        Color, DashPattern, DrawStyle, LineStyle, Marker, MarkerStyle, TextStyle, Theme,
    };
}
