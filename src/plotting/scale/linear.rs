//! Linear scale transformation.

use super::{nice_ticks, Scale, ScaleKind};
use crate::plotting::error::{PlotError, PlotResult};

/// A linear scale for axis transformation.
#[derive(Debug, Clone)]
pub struct LinearScale {
    min: f64,
    max: f64,
}

impl LinearScale {
    /// Create a new linear scale with the given range.
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        if min >= max {
            return Err(PlotError::InvalidConfig(
                "Scale minimum must be less than maximum".to_string(),
            ));
        }
        Ok(LinearScale { min, max })
    }

    /// Create a linear scale with automatic range (to be set later).
    pub fn auto() -> Self {
        LinearScale { min: 0.0, max: 1.0 }
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        LinearScale::auto()
    }
}

impl Scale for LinearScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Linear
    }

    fn transform(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.5;
        }
        (value - self.min) / range
    }

    fn inverse(&self, normalized: f64) -> f64 {
        self.min + normalized * (self.max - self.min)
    }

    fn set_range(&mut self, min: f64, max: f64) -> PlotResult<()> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(PlotError::InvalidConfig(format!(
                "invalid axis range [{}, {}]",
                min, max
            )));
        }
        if min == max {
            // Widen a single value into a visible band
            let padding = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
            self.min = min - padding;
            self.max = max + padding;
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
        nice_ticks(self.min, self.max, num_ticks)
    }

    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_roundtrip_endpoints() {
        let scale = LinearScale::new(10.0, 20.0).unwrap();
        assert_eq!(scale.transform(10.0), 0.0);
        assert_eq!(scale.transform(20.0), 1.0);
        assert_eq!(scale.inverse(0.5), 15.0);
    }

    #[test]
    fn test_single_value_range_is_widened() {
        let mut scale = LinearScale::auto();
        scale.set_range(5.0, 5.0).unwrap();
        let (lo, hi) = scale.range();
        assert!(lo < 5.0 && hi > 5.0);
    }

    #[test]
    fn test_reversed_range_rejected() {
        let mut scale = LinearScale::auto();
        assert!(scale.set_range(2.0, 1.0).is_err());
    }
}
