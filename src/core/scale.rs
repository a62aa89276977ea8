use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::DataPoint;

/// Value range and per-step increment derived from a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub step_size: f64,
}

impl ValueScale {
    pub const ZERO: Self = Self {
        min: 0.0,
        max: 0.0,
        step_size: 0.0,
    };

    /// Derives `(min, max, step_size)` from the `y` values of `points`.
    ///
    /// `step_size` is `ceil((max - min) / steps)` so gridlines always cover the
    /// whole data range. An empty point set yields a zero scale; non-finite
    /// samples are ignored. `steps == 0` yields `step_size == 0`.
    #[must_use]
    pub fn from_points(points: &[DataPoint], steps: usize) -> Self {
        let mut bounds: Option<(f64, f64)> = None;
        for point in points.iter().filter(|point| point.y.is_finite()) {
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(point.y), max.max(point.y)),
                None => (point.y, point.y),
            });
        }

        let Some((min, max)) = bounds else {
            return Self::ZERO;
        };

        if steps == 0 {
            warn!(min, max, "value scale requested with zero steps; using zero step size");
            return Self {
                min,
                max,
                step_size: 0.0,
            };
        }

        Self {
            min,
            max,
            step_size: ((max - min) / steps as f64).ceil(),
        }
    }

    #[must_use]
    pub fn range(self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_keeps_full_range_covered() {
        let points = [DataPoint::new(0.0, 0.5), DataPoint::new(1.0, 10.2)];
        let scale = ValueScale::from_points(&points, 3);
        assert_eq!(scale.step_size, 4.0);
        assert!(scale.step_size * 3.0 >= scale.range());
    }

    #[test]
    fn non_finite_samples_are_skipped() {
        let points = [
            DataPoint::new(0.0, f64::NAN),
            DataPoint::new(1.0, 4.0),
            DataPoint::new(2.0, f64::INFINITY),
            DataPoint::new(3.0, -2.0),
        ];
        let scale = ValueScale::from_points(&points, 2);
        assert_eq!(scale.min, -2.0);
        assert_eq!(scale.max, 4.0);
        assert_eq!(scale.step_size, 3.0);
    }
}
