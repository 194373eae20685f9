//! Axis transforms.

use log::debug;

use crate::plotting::{Axes, ScaleKind};

/// Set the x and y transforms. Leaves the axes untouched when both are
/// linear.
pub fn apply_scale(axes: &mut Axes, x_scale: ScaleKind, y_scale: ScaleKind) {
    if x_scale == ScaleKind::Linear && y_scale == ScaleKind::Linear {
        return;
    }
    debug!("Scaling axes: x={} y={}", x_scale, y_scale);
    axes.set_xscale(x_scale);
    axes.set_yscale(y_scale);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_pair_is_noop() {
        let mut axes = Axes::new();
        axes.set_yscale(ScaleKind::Log);
        apply_scale(&mut axes, ScaleKind::Linear, ScaleKind::Linear);
        assert_eq!(axes.y_scale().kind(), ScaleKind::Log);
        assert_eq!(axes.x_scale().kind(), ScaleKind::Linear);
    }

    #[test]
    fn test_symlog_applied() {
        let mut axes = Axes::new();
        apply_scale(&mut axes, ScaleKind::Linear, ScaleKind::SymLog);
        assert_eq!(axes.y_scale().kind(), ScaleKind::SymLog);
    }
}
