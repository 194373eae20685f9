//! Visual elements for plots.

mod axis;
mod grid;
mod legend;
mod text;

pub use axis::{AxisConfig, TickFormat};
pub use grid::GridConfig;
pub use legend::{Legend, LegendEntry, LegendPosition};
pub use text::{escape_xml, Text, TextCoords};

/// Bounding box for elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Create a new bounds with the given values.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// An inverted bounds that any included point replaces.
    pub fn empty() -> Self {
        Bounds::new(
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        )
    }

    /// Whether at least one finite point has been included.
    pub fn is_valid(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }

    /// Create a unit bounds (0 to 1).
    pub fn unit() -> Self {
        Bounds::new(0.0, 1.0, 0.0, 1.0)
    }

    /// Get the width of the bounds.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Get the height of the bounds.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Expand bounds to include a point.
    pub fn include_point(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Expand bounds to include another bounds.
    pub fn include_bounds(&mut self, other: &Bounds) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// Check if a point is inside the bounds.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bounds_grow_from_points() {
        let mut bounds = Bounds::empty();
        assert!(!bounds.is_valid());
        bounds.include_point(1.0, -2.0);
        bounds.include_point(3.0, 4.0);
        assert!(bounds.is_valid());
        assert_eq!(bounds, Bounds::new(1.0, 3.0, -2.0, 4.0));
        assert!(bounds.contains(2.0, 0.0));
    }
}
