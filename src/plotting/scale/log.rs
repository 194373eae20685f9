//! Base-10 logarithmic scale.

use super::{decade_ticks, nice_ticks, Scale, ScaleKind};
use crate::plotting::error::{PlotError, PlotResult};

/// A log10 scale. Non-positive values have no position on it.
#[derive(Debug, Clone)]
pub struct LogScale {
    min: f64,
    max: f64,
}

impl LogScale {
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        let mut scale = LogScale::auto();
        scale.set_range(min, max)?;
        Ok(scale)
    }

    pub fn auto() -> Self {
        LogScale { min: 1.0, max: 10.0 }
    }
}

impl Default for LogScale {
    fn default() -> Self {
        LogScale::auto()
    }
}

impl Scale for LogScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Log
    }

    fn transform(&self, value: f64) -> f64 {
        if value <= 0.0 {
            return f64::NAN;
        }
        let lo = self.min.log10();
        let hi = self.max.log10();
        (value.log10() - lo) / (hi - lo)
    }

    fn inverse(&self, normalized: f64) -> f64 {
        let lo = self.min.log10();
        let hi = self.max.log10();
        10_f64.powf(lo + normalized * (hi - lo))
    }

    fn set_range(&mut self, min: f64, max: f64) -> PlotResult<()> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(PlotError::InvalidConfig(format!(
                "invalid axis range [{}, {}]",
                min, max
            )));
        }
        if max <= 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "log axis needs positive values, got range [{}, {}]",
                min, max
            )));
        }
        // Clip the non-positive part of the range
        let min = if min <= 0.0 { max / 1000.0 } else { min };
        if min == max {
            self.min = min / 10.0;
            self.max = max * 10.0;
        } else {
            self.min = min;
            self.max = max;
        }
        Ok(())
    }

    fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn ticks(&self, num_ticks: usize) -> Vec<f64> {
        let decades = decade_ticks(self.min, self.max);
        if decades.len() >= 2 {
            return decades;
        }
        nice_ticks(self.min, self.max, num_ticks)
            .into_iter()
            .filter(|t| *t > 0.0)
            .collect()
    }

    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decades_are_evenly_spaced() {
        let scale = LogScale::new(1.0, 1000.0).unwrap();
        let a = scale.transform(10.0);
        let b = scale.transform(100.0);
        assert!((a - 1.0 / 3.0).abs() < 1e-12);
        assert!((b - 2.0 / 3.0).abs() < 1e-12);
        assert!(scale.transform(0.0).is_nan());
    }

    #[test]
    fn test_ticks_are_powers_of_ten() {
        let scale = LogScale::new(2.0, 5000.0).unwrap();
        assert_eq!(scale.ticks(5), vec![10.0, 100.0, 1000.0]);
    }

    #[test]
    fn test_non_positive_lower_bound_is_clipped() {
        let scale = LogScale::new(-5.0, 100.0).unwrap();
        assert_eq!(scale.range(), (0.1, 100.0));
        assert!(LogScale::new(-5.0, 0.0).is_err());
    }
}
