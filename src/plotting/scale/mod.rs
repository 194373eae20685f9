//! Axis scaling and transformation.

mod linear;
mod log;
mod symlog;

pub use self::linear::LinearScale;
pub use self::log::LogScale;
pub use self::symlog::SymLogScale;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::plotting::error::{PlotError, PlotResult};

/// The transform applied to an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ScaleKind {
    #[default]
    Linear,
    Log,
    SymLog,
}

impl ScaleKind {
    /// Build a fresh scale of this kind.
    pub fn build(&self) -> Box<dyn Scale> {
        match self {
            ScaleKind::Linear => Box::new(LinearScale::auto()),
            ScaleKind::Log => Box::new(LogScale::auto()),
            ScaleKind::SymLog => Box::new(SymLogScale::auto()),
        }
    }
}

impl FromStr for ScaleKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "linear" => Ok(ScaleKind::Linear),
            "log" => Ok(ScaleKind::Log),
            "symlog" => Ok(ScaleKind::SymLog),
            other => Err(PlotError::InvalidConfig(format!(
                "unknown scale '{}' (expected linear, log or symlog)",
                other
            ))),
        }
    }
}

impl TryFrom<String> for ScaleKind {
    type Error = PlotError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScaleKind::Linear => "linear",
            ScaleKind::Log => "log",
            ScaleKind::SymLog => "symlog",
        };
        f.write_str(name)
    }
}

/// Trait for axis scale transformations.
pub trait Scale: fmt::Debug {
    /// Which transform this scale implements.
    fn kind(&self) -> ScaleKind;

    /// Transform a data value to normalized coordinates (0.0 - 1.0).
    /// Values outside the transform's domain map to NaN.
    fn transform(&self, value: f64) -> f64;

    /// Inverse transform from normalized coordinates to data value.
    fn inverse(&self, normalized: f64) -> f64;

    /// Set the data range for this scale.
    fn set_range(&mut self, min: f64, max: f64) -> PlotResult<()>;

    /// Get the current data range.
    fn range(&self) -> (f64, f64);

    /// Generate tick values for this scale.
    fn ticks(&self, num_ticks: usize) -> Vec<f64>;

    /// Clone the scale into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Scale>;

    /// Widen the range by a fraction of its extent, measured in transformed
    /// space so log axes get a multiplicative margin.
    fn pad(&mut self, fraction: f64) -> PlotResult<()> {
        let lo = self.inverse(-fraction);
        let hi = self.inverse(1.0 + fraction);
        if lo.is_finite() && hi.is_finite() && lo < hi {
            self.set_range(lo, hi)
        } else {
            Ok(())
        }
    }
}

impl Clone for Box<dyn Scale> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Compute "nice" numbers for axis ticks.
pub fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Generate nice tick positions for a given range.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if num_ticks < 2 || !(max > min) {
        return vec![(min + max) / 2.0];
    }

    let range = nice_number(max - min, false);
    let tick_spacing = nice_number(range / (num_ticks - 1) as f64, true);
    let nice_min = (min / tick_spacing).floor() * tick_spacing;

    let mut ticks = Vec::new();
    let mut i = 0.0;
    loop {
        let tick = nice_min + i * tick_spacing;
        if tick > max + tick_spacing * 0.001 {
            break;
        }
        if tick >= min - tick_spacing * 0.001 {
            // Snap values like 0.30000000000000004 and -0.0
            let snapped = (tick / tick_spacing).round() * tick_spacing;
            ticks.push(if snapped == 0.0 { 0.0 } else { snapped });
        }
        i += 1.0;
    }

    ticks
}

/// Powers of ten inside `[min, max]` (both positive).
pub(crate) fn decade_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min > 0.0) || !(max > min) {
        return Vec::new();
    }
    let lo = min.log10().ceil() as i32;
    let hi = max.log10().floor() as i32;
    (lo..=hi).map(|k| 10_f64.powi(k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks_cover_range() {
        let ticks = nice_ticks(0.0, 10.0, 5);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&10.0));
        assert!(ticks.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_nice_ticks_degenerate() {
        assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
    }

    #[test]
    fn test_decade_ticks() {
        assert_eq!(decade_ticks(0.5, 1500.0), vec![1.0, 10.0, 100.0, 1000.0]);
        assert!(decade_ticks(-1.0, 10.0).is_empty());
    }

    #[test]
    fn test_scale_kind_parse() {
        assert_eq!("symlog".parse::<ScaleKind>().unwrap(), ScaleKind::SymLog);
        assert!("logit".parse::<ScaleKind>().is_err());
    }

    #[test]
    fn test_log_pad_is_multiplicative() {
        let mut scale = ScaleKind::Log.build();
        scale.set_range(1.0, 100.0).unwrap();
        scale.pad(0.5).unwrap();
        let (lo, hi) = scale.range();
        assert!((lo - 0.1).abs() < 1e-9);
        assert!((hi - 1000.0).abs() < 1e-6);
    }
}
