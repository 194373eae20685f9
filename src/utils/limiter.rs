//! Axis range limiting: fixed bounds, or bounds computed from the data with
//! optional outlier exclusion.

use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use crate::frame::{Columns, DataFrame};
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::Axes;
use crate::utils::stats;

/// How an axis range is decided.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "Option<LimitRepr>")]
pub enum AxisLimit {
    /// Leave the engine's own range
    #[default]
    None,
    /// Computed from the data's spread
    Auto,
    /// Exactly `(lo, hi)`
    Fixed(f64, f64),
}

/// Serialized form of [`AxisLimit`]: a name, a pair, or null.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LimitRepr {
    Name(String),
    Pair([f64; 2]),
}

impl AxisLimit {
    /// A fixed range; `lo` must be below `hi`.
    pub fn fixed(lo: f64, hi: f64) -> PlotResult<AxisLimit> {
        if lo.is_finite() && hi.is_finite() && lo < hi {
            Ok(AxisLimit::Fixed(lo, hi))
        } else {
            Err(PlotError::InvalidConfig(format!(
                "axis limit [{}, {}] is not an increasing pair",
                lo, hi
            )))
        }
    }
}

impl TryFrom<Option<LimitRepr>> for AxisLimit {
    type Error = PlotError;

    fn try_from(repr: Option<LimitRepr>) -> Result<Self, Self::Error> {
        match repr {
            None => Ok(AxisLimit::None),
            Some(LimitRepr::Name(name)) => name.parse(),
            Some(LimitRepr::Pair([lo, hi])) => AxisLimit::fixed(lo, hi),
        }
    }
}

impl FromStr for AxisLimit {
    type Err = PlotError;

    /// Accepts `auto`, `none`, or `lo,hi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "auto" => Ok(AxisLimit::Auto),
            "none" | "None" | "" => Ok(AxisLimit::None),
            other => {
                let parts: Vec<&str> = other.split(',').map(str::trim).collect();
                if let [lo, hi] = parts.as_slice() {
                    if let (Ok(lo), Ok(hi)) = (lo.parse::<f64>(), hi.parse::<f64>()) {
                        return AxisLimit::fixed(lo, hi);
                    }
                }
                Err(PlotError::InvalidConfig(format!(
                    "unknown axis limit '{}' (expected auto, none or lo,hi)",
                    other
                )))
            }
        }
    }
}

/// Which values are left out when computing an automatic range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlierPolicy {
    #[default]
    None,
    /// Drop values more than 3 standard deviations from the mean.
    ///
    /// With the population sd, no point of an `n`-value sample can sit
    /// further than `(n - 1) / sqrt(n)` from the mean, so samples of 10 or
    /// fewer values never lose a point. Use [`OutlierPolicy::Iqr`] there.
    ZScore,
    /// Drop values outside the 1.5 x IQR fences
    Iqr,
}

impl FromStr for OutlierPolicy {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(OutlierPolicy::None),
            "zscore" => Ok(OutlierPolicy::ZScore),
            "iqr" => Ok(OutlierPolicy::Iqr),
            other => Err(PlotError::InvalidConfig(format!(
                "unknown outlier policy '{}' (expected none, zscore or iqr)",
                other
            ))),
        }
    }
}

const Z_CUTOFF: f64 = 3.0;
const IQR_FENCE: f64 = 1.5;

/// The range of `values` once outliers under `policy` are removed. `None`
/// when no finite values remain.
pub fn auto_bounds(values: &[f64], policy: OutlierPolicy) -> Option<(f64, f64)> {
    let finite = stats::finite(values);
    let kept: Vec<f64> = match policy {
        OutlierPolicy::None => finite,
        OutlierPolicy::ZScore => match (stats::mean(&finite), stats::std_dev(&finite, 0)) {
            (Some(m), Some(sd)) if sd > 0.0 => finite
                .into_iter()
                .filter(|v| ((v - m) / sd).abs() <= Z_CUTOFF)
                .collect(),
            _ => finite,
        },
        OutlierPolicy::Iqr => {
            match (stats::quantile(&finite, 0.25), stats::quantile(&finite, 0.75)) {
                (Some(q1), Some(q3)) => {
                    let fence = IQR_FENCE * (q3 - q1);
                    finite
                        .into_iter()
                        .filter(|v| *v >= q1 - fence && *v <= q3 + fence)
                        .collect()
                }
                _ => finite,
            }
        }
    };
    stats::min_max(&kept)
}

/// Limit both axes from the named columns of `data`. Datetime columns are
/// limited in epoch seconds.
pub fn apply_limit(
    axes: &mut Axes,
    data: &DataFrame,
    x_columns: &Columns,
    y_columns: &Columns,
    x_limit: AxisLimit,
    y_limit: AxisLimit,
    outliers: OutlierPolicy,
) -> PlotResult<()> {
    let x_values = column_values(data, x_columns)?;
    let y_values = column_values(data, y_columns)?;
    apply_limit_values(axes, &x_values, &y_values, x_limit, y_limit, outliers);
    Ok(())
}

fn column_values(data: &DataFrame, columns: &Columns) -> PlotResult<Vec<f64>> {
    let mut values = Vec::new();
    for name in columns.iter() {
        let column = data.column(name)?;
        let numeric = column.to_f64().ok_or_else(|| {
            PlotError::InvalidData(format!(
                "column '{}' is {} and cannot bound an axis",
                name,
                column.kind()
            ))
        })?;
        values.extend(numeric);
    }
    Ok(values)
}

/// Limit both axes from already extracted values.
pub fn apply_limit_values(
    axes: &mut Axes,
    x_values: &[f64],
    y_values: &[f64],
    x_limit: AxisLimit,
    y_limit: AxisLimit,
    outliers: OutlierPolicy,
) {
    match x_limit {
        AxisLimit::None => {}
        AxisLimit::Fixed(lo, hi) => {
            axes.set_xlim(lo, hi);
        }
        AxisLimit::Auto => match auto_bounds(x_values, outliers) {
            Some((lo, hi)) => {
                axes.autoscale_x(lo, hi);
            }
            None => debug!("No finite x values, leaving x range to the engine"),
        },
    }
    match y_limit {
        AxisLimit::None => {}
        AxisLimit::Fixed(lo, hi) => {
            axes.set_ylim(lo, hi);
        }
        AxisLimit::Auto => match auto_bounds(y_values, outliers) {
            Some((lo, hi)) => {
                axes.autoscale_y(lo, hi);
            }
            None => debug!("No finite y values, leaving y range to the engine"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iqr_excludes_outlier() {
        let v = [1.0, 2.0, 3.0, 100.0];
        assert_eq!(auto_bounds(&v, OutlierPolicy::Iqr), Some((1.0, 3.0)));
        assert_eq!(auto_bounds(&v, OutlierPolicy::None), Some((1.0, 100.0)));
    }

    #[test]
    fn test_zscore_keeps_constant_data() {
        let v = [5.0, 5.0, 5.0];
        assert_eq!(auto_bounds(&v, OutlierPolicy::ZScore), Some((5.0, 5.0)));
        let mut spread: Vec<f64> = (0..30).map(|i| (i % 3) as f64).collect();
        spread.push(1000.0);
        assert_eq!(auto_bounds(&spread, OutlierPolicy::ZScore), Some((0.0, 2.0)));
    }

    #[test]
    fn test_zscore_cannot_flag_small_samples() {
        // max |z| for 4 points is 1.5
        let v = [1.0, 2.0, 3.0, 100.0];
        assert_eq!(auto_bounds(&v, OutlierPolicy::ZScore), Some((1.0, 100.0)));
        let ten: Vec<f64> = (0..9).map(|_| 0.0).chain([1.0e6]).collect();
        assert_eq!(auto_bounds(&ten, OutlierPolicy::ZScore), Some((0.0, 1.0e6)));
    }

    #[test]
    fn test_empty_leaves_axes_untouched() {
        let mut axes = Axes::new();
        apply_limit_values(
            &mut axes,
            &[],
            &[f64::NAN],
            AxisLimit::Auto,
            AxisLimit::Auto,
            OutlierPolicy::Iqr,
        );
        assert_eq!(axes.autoscale_xrange(), None);
        assert_eq!(axes.autoscale_yrange(), None);
    }

    #[test]
    fn test_fixed_and_none() {
        let mut axes = Axes::new();
        apply_limit_values(
            &mut axes,
            &[1.0, 2.0],
            &[1.0, 2.0],
            AxisLimit::None,
            AxisLimit::Fixed(0.0, 10.0),
            OutlierPolicy::None,
        );
        assert_eq!(axes.xlim(), None);
        assert_eq!(axes.autoscale_xrange(), None);
        assert_eq!(axes.ylim(), Some((0.0, 10.0)));
    }

    #[test]
    fn test_apply_limit_rejects_categorical() {
        let data = DataFrame::new().with_column("g", vec!["a", "b"]).unwrap();
        let mut axes = Axes::new();
        let err = apply_limit(
            &mut axes,
            &data,
            &Columns::from("g"),
            &Columns::default(),
            AxisLimit::Auto,
            AxisLimit::None,
            OutlierPolicy::None,
        )
        .unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));
    }

    #[test]
    fn test_parse_limits() {
        assert_eq!("auto".parse::<AxisLimit>().unwrap(), AxisLimit::Auto);
        assert_eq!("0, 5".parse::<AxisLimit>().unwrap(), AxisLimit::Fixed(0.0, 5.0));
        assert!("5,0".parse::<AxisLimit>().is_err());
        let limit: AxisLimit = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(limit, AxisLimit::Fixed(1.0, 2.0));
        let limit: AxisLimit = serde_json::from_str("null").unwrap();
        assert_eq!(limit, AxisLimit::None);
        let policy: OutlierPolicy = serde_json::from_str("\"iqr\"").unwrap();
        assert_eq!(policy, OutlierPolicy::Iqr);
    }
}
