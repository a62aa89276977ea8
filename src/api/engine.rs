use tracing::{debug, trace};

use crate::error::ChartResult;
use crate::render::{Renderer, TextMeasurer};

use super::{YAxisConfig, YAxisFrame, YAxisFrameInput, YAxisRenderState, build_y_axis_frame};

/// Owns the axis configuration, the persisted layout state and the injected
/// rendering/measurement backends.
///
/// The host render loop calls [`YAxisEngine::render`] once per frame and
/// reserves [`YAxisEngine::axis_width_px`] next to the plotting area.
pub struct YAxisEngine<R: Renderer, M: TextMeasurer> {
    renderer: R,
    measurer: M,
    config: YAxisConfig,
    state: YAxisRenderState,
}

impl<R: Renderer, M: TextMeasurer> YAxisEngine<R, M> {
    #[must_use]
    pub fn new(renderer: R, measurer: M, config: YAxisConfig) -> Self {
        Self {
            renderer,
            measurer,
            config,
            state: YAxisRenderState::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &YAxisConfig {
        &self.config
    }

    /// Replaces the configuration and drops the reserved width.
    pub fn set_config(&mut self, config: YAxisConfig) {
        debug!(
            steps = config.steps(),
            previous_width = self.state.axis_width_px(),
            "replace y-axis config"
        );
        self.config = config;
        self.state.reset();
    }

    /// Drops the reserved width, e.g. after the chart content changed.
    pub fn reset_layout(&mut self) {
        debug!(
            previous_width = self.state.axis_width_px(),
            "reset y-axis layout"
        );
        self.state.reset();
    }

    #[must_use]
    pub fn state(&self) -> YAxisRenderState {
        self.state
    }

    #[must_use]
    pub fn axis_width_px(&self) -> f64 {
        self.state.axis_width_px()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Lays out one frame and persists the resulting width without drawing.
    pub fn build_frame(&mut self, input: &YAxisFrameInput<'_>) -> ChartResult<YAxisFrame> {
        let frame = build_y_axis_frame(&self.config, self.state, input, &self.measurer)?;
        self.state = frame.state;
        Ok(frame)
    }

    /// Lays out one frame, hands it to the renderer and returns the column
    /// width the caller should reserve.
    pub fn render(&mut self, input: &YAxisFrameInput<'_>) -> ChartResult<f64> {
        let frame = self.build_frame(input)?;
        trace!(
            commands = frame.frame.commands.len(),
            axis_width_px = frame.axis_width_px,
            "render y-axis frame"
        );
        self.renderer.render(&frame.frame)?;
        Ok(frame.axis_width_px)
    }
}
