//! astetik: a catalog of opinionated charts over a small SVG plotting
//! engine.
//!
//! ```no_run
//! use astetik::{line, DataFrame, LineChart, StyleContext};
//!
//! # fn main() -> astetik::PlotResult<()> {
//! let data = DataFrame::new()
//!     .with_column("a", vec![1.0, 2.0, 3.0])?
//!     .with_column("b", vec![4.0, 5.0, 6.0])?;
//! let mut ctx = StyleContext::new();
//! let figure = line(&mut ctx, &data, &LineChart::new(vec!["a", "b"]))?;
//! figure.save("lines.svg")?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod frame;
pub mod plots;
pub mod plotting;
pub mod style;
pub mod utils;

pub use config::{Chart, ChartConfig, FigureParams};
pub use frame::{Column, Columns, DataFrame};
pub use plots::{line, multikde, ChartOptions, LineChart, MultiKdeChart};
pub use plotting::{Figure, PlotError, PlotResult, ScaleKind};
pub use style::{resolve_palette, PaletteSpec, StyleContext, StyleSpec};
pub use utils::{AxisLimit, OutlierPolicy};
