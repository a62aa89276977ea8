use serde::{Deserialize, Serialize};

/// Layout state that outlives a single frame.
///
/// `axis_width_px` only grows while the configuration and content stay the
/// same; call [`YAxisRenderState::reset`] when either changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YAxisRenderState {
    axis_width_px: f64,
}

impl YAxisRenderState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the state with a width reserved by an earlier layout.
    #[must_use]
    pub fn from_axis_width(axis_width_px: f64) -> Self {
        Self {
            axis_width_px: axis_width_px.max(0.0),
        }
    }

    #[must_use]
    pub fn axis_width_px(self) -> f64 {
        self.axis_width_px
    }

    pub fn reset(&mut self) {
        self.axis_width_px = 0.0;
    }

    #[must_use]
    pub(super) fn grown_to(self, axis_width_px: f64) -> Self {
        Self {
            axis_width_px: self.axis_width_px.max(axis_width_px),
        }
    }
}
