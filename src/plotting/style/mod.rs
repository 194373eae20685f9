//! Styling module for the plotting engine.
//!
//! This module contains all style-related types including colors,
//! colormaps, line styles, markers, text styles, and themes.

pub mod color;
pub mod colormap;
pub mod fill_style;
pub mod line_style;
pub mod marker;
pub mod text_style;
pub mod theme;

pub use color::{cycle_color, Color};
pub use colormap::{color_palette, Colormap};
pub use fill_style::FillStyle;
pub use line_style::{DashPattern, DrawStyle, LineStyle};
pub use marker::{Marker, MarkerStyle};
pub use text_style::{DominantBaseline, FontWeight, TextAnchor, TextStyle};
pub use theme::{Theme, ThemeConfig};
