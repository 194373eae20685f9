//! Symmetric log scale: linear around zero, logarithmic further out.

use super::{nice_ticks, Scale, ScaleKind};
use crate::plotting::error::{PlotError, PlotResult};

/// Symmetric log scale with a linear band of half-width `linthresh`.
#[derive(Debug, Clone)]
pub struct SymLogScale {
    min: f64,
    max: f64,
    linthresh: f64,
}

impl SymLogScale {
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        let mut scale = SymLogScale::auto();
        scale.set_range(min, max)?;
        Ok(scale)
    }

    pub fn auto() -> Self {
        SymLogScale {
            min: -1.0,
            max: 1.0,
            linthresh: 1.0,
        }
    }

    pub fn linthresh(mut self, linthresh: f64) -> Self {
        if linthresh > 0.0 {
            self.linthresh = linthresh;
        }
        self
    }

    fn forward(&self, v: f64) -> f64 {
        v.signum() * (1.0 + v.abs() / self.linthresh).log10()
    }

    fn backward(&self, t: f64) -> f64 {
        t.signum() * (10_f64.powf(t.abs()) - 1.0) * self.linthresh
    }
}

impl Default for SymLogScale {
    fn default() -> Self {
        SymLogScale::auto()
    }
}

impl Scale for SymLogScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::SymLog
    }

    fn transform(&self, value: f64) -> f64 {
        let lo = self.forward(self.min);
        let hi = self.forward(self.max);
        (self.forward(value) - lo) / (hi - lo)
    }

    fn inverse(&self, normalized: f64) -> f64 {
        let lo = self.forward(self.min);
        let hi = self.forward(self.max);
        self.backward(lo + normalized * (hi - lo))
    }

    fn set_range(&mut self, min: f64, max: f64) -> PlotResult<()> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(PlotError::InvalidConfig(format!(
                "invalid axis range [{}, {}]",
                min, max
            )));
        }
        if min == max {
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
        let mut ticks = Vec::new();
        if self.min <= 0.0 && self.max >= 0.0 {
            ticks.push(0.0);
        }
        let mut k = 0;
        loop {
            let tick = self.linthresh * 10_f64.powi(k);
            if tick > self.max.abs().max(self.min.abs()) {
                break;
            }
            if tick <= self.max && tick >= self.min {
                ticks.push(tick);
            }
            if -tick >= self.min && -tick <= self.max {
                ticks.push(-tick);
            }
            k += 1;
        }
        if ticks.len() < 2 {
            return nice_ticks(self.min, self.max, num_ticks);
        }
        ticks.sort_by(|a, b| a.total_cmp(b));
        ticks
    }

    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_around_zero() {
        let scale = SymLogScale::new(-100.0, 100.0).unwrap();
        assert!((scale.transform(0.0) - 0.5).abs() < 1e-12);
        let up = scale.transform(10.0) - 0.5;
        let down = 0.5 - scale.transform(-10.0);
        assert!((up - down).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_matches_transform() {
        let scale = SymLogScale::new(-50.0, 500.0).unwrap();
        for v in [-50.0, -3.0, 0.0, 0.5, 42.0, 500.0] {
            assert!((scale.inverse(scale.transform(v)) - v).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ticks_include_zero_and_decades() {
        let scale = SymLogScale::new(-10.0, 100.0).unwrap();
        assert_eq!(scale.ticks(5), vec![-10.0, -1.0, 0.0, 1.0, 10.0, 100.0]);
    }
}
