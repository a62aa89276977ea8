use serde::{Deserialize, Serialize};

/// Vertical extent of the axis and the pixel height of one segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub axis_height_px: f64,
    pub segment_height_px: f64,
}

impl AxisGeometry {
    /// Resolves axis height and segment height for one frame.
    ///
    /// Category axes use the fixed slot width as segment height
    /// (`category_width_px = Some(..)`); continuous axes split the space
    /// between the top padding and the axis bottom into `steps` segments.
    /// A continuous axis with `steps == 0` has zero-height segments.
    #[must_use]
    pub fn resolve(
        canvas_height_px: f64,
        top_padding_px: f64,
        bottom_padding_px: f64,
        steps: usize,
        category_width_px: Option<f64>,
    ) -> Self {
        let axis_height_px = canvas_height_px - bottom_padding_px;
        let segment_height_px = match category_width_px {
            Some(width) => width,
            None if steps == 0 => 0.0,
            None => (axis_height_px - top_padding_px) / steps as f64,
        };
        Self {
            axis_height_px,
            segment_height_px,
        }
    }

    /// Continuous-axis position of tick `index`, measured from the axis bottom.
    #[must_use]
    pub fn continuous_tick_y(self, index: usize) -> f64 {
        self.axis_height_px - self.segment_height_px * index as f64
    }
}
