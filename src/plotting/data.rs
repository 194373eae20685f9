//! Conversions from common numeric containers into plot data.

/// Trait for types that can be converted into plot data.
pub trait IntoPlotData {
    /// Convert into a vector of f64 values.
    fn into_plot_data(self) -> Vec<f64>;
}

impl IntoPlotData for Vec<f64> {
    fn into_plot_data(self) -> Vec<f64> {
        self
    }
}

impl IntoPlotData for &Vec<f64> {
    fn into_plot_data(self) -> Vec<f64> {
        self.clone()
    }
}

impl IntoPlotData for &[f64] {
    fn into_plot_data(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl<const N: usize> IntoPlotData for [f64; N] {
    fn into_plot_data(self) -> Vec<f64> {
        self.to_vec()
    }
}

macro_rules! lossy_numeric {
    ($($t:ty),*) => {
        $(
            impl IntoPlotData for Vec<$t> {
                fn into_plot_data(self) -> Vec<f64> {
                    self.into_iter().map(|v| v as f64).collect()
                }
            }

            impl IntoPlotData for &[$t] {
                fn into_plot_data(self) -> Vec<f64> {
                    self.iter().map(|&v| v as f64).collect()
                }
            }
        )*
    };
}

lossy_numeric!(f32, i32, i64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_sequences_convert() {
        assert_eq!(vec![1usize, 2, 3].into_plot_data(), vec![1.0, 2.0, 3.0]);
        let ints: &[i64] = &[-1, 0];
        assert_eq!(ints.into_plot_data(), vec![-1.0, 0.0]);
        assert_eq!([0.5_f64, 1.5].into_plot_data(), vec![0.5, 1.5]);
    }
}
