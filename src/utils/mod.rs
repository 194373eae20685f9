//! Axis scaling and limiting, plus the summary statistics they rely on.

pub mod limiter;
pub mod scaler;
pub mod stats;

pub use limiter::{apply_limit, apply_limit_values, AxisLimit, OutlierPolicy};
pub use scaler::apply_scale;
