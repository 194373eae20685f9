//! Summary statistics over `f64` samples. NaN and infinities are ignored.

use std::f64::consts::PI;

/// Finite values only.
pub fn finite(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

fn sorted_finite(values: &[f64]) -> Vec<f64> {
    let mut v = finite(values);
    v.sort_by(|a, b| a.total_cmp(b));
    v
}

pub fn mean(values: &[f64]) -> Option<f64> {
    let v = finite(values);
    if v.is_empty() {
        return None;
    }
    Some(v.iter().sum::<f64>() / v.len() as f64)
}

pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}

/// Standard deviation with `ddof` delta degrees of freedom (0 for the
/// population, 1 for the sample estimate).
pub fn std_dev(values: &[f64], ddof: usize) -> Option<f64> {
    let v = finite(values);
    if v.len() <= ddof {
        return None;
    }
    let m = v.iter().sum::<f64>() / v.len() as f64;
    let ss: f64 = v.iter().map(|x| (x - m).powi(2)).sum();
    Some((ss / (v.len() - ddof) as f64).sqrt())
}

/// Quantile with linear interpolation between order statistics.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let v = sorted_finite(values);
    if v.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (v.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Some(v[lo] + (v[hi] - v[lo]) * (pos - lo as f64))
}

/// Smallest and largest finite value.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// `n` evenly spaced points from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Gaussian kernel density of `samples` evaluated at each point of `grid`.
pub fn gaussian_kde(samples: &[f64], grid: &[f64], bandwidth: f64) -> Vec<f64> {
    let samples = finite(samples);
    if samples.is_empty() || !(bandwidth > 0.0) {
        return vec![0.0; grid.len()];
    }
    let norm = 1.0 / (samples.len() as f64 * bandwidth * (2.0 * PI).sqrt());
    grid.iter()
        .map(|&t| {
            let sum: f64 = samples
                .iter()
                .map(|&x| {
                    let z = (t - x) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum();
            sum * norm
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantiles_interpolate() {
        let v = [1.0, 2.0, 3.0, 100.0];
        assert_eq!(quantile(&v, 0.25), Some(1.75));
        assert_eq!(quantile(&v, 0.75), Some(27.25));
        assert_eq!(median(&v), Some(2.5));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_nan_ignored() {
        let v = [f64::NAN, 2.0, 4.0];
        assert_eq!(mean(&v), Some(3.0));
        assert_eq!(min_max(&v), Some((2.0, 4.0)));
        assert_eq!(std_dev(&v, 1), Some(2.0_f64.sqrt()));
        assert_eq!(std_dev(&[1.0], 1), None);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_kde_integrates_to_one() {
        let grid = linspace(-10.0, 12.0, 2001);
        let density = gaussian_kde(&[0.0, 1.0, 2.0], &grid, 0.5);
        let dx = grid[1] - grid[0];
        let area: f64 = density.iter().sum::<f64>() * dx;
        assert!((area - 1.0).abs() < 1e-3);
        let peak = density
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| grid[i]);
        assert!((peak.unwrap() - 1.0).abs() < 0.05);
    }
}
