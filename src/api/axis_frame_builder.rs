use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    AxisGeometry, CanvasSize, DataPoint, StepPositionParams, StepPositions, TraversalMode,
    ValueScale,
};
use crate::error::ChartResult;
use crate::render::{
    RectPrimitive, RenderFrame, TextHAlign, TextMeasurer, TextPrimitive, TextRotation,
};

use super::axis_label_layout::{
    TickLabel, label_text_primitive, measure_label, measure_tick_label, resolve_axis_width,
};
use super::axis_segment_builder::{AxisSegmentContext, build_tick_segments};
use super::validation::validate_frame_input;
use super::{YAxisConfig, YAxisRenderState};

/// Per-frame inputs supplied by the surrounding container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YAxisFrameInput<'a> {
    pub points: &'a [DataPoint],
    pub canvas: CanvasSize,
    pub scroll_offset_px: f64,
    /// `< 1` zoomed out, `>= 1` normal or zoomed in.
    pub zoom_scale: f64,
    pub data_category_width_px: f64,
    pub y_start_px: f64,
    pub bar_width_px: f64,
}

impl<'a> YAxisFrameInput<'a> {
    #[must_use]
    pub fn new(points: &'a [DataPoint], canvas: CanvasSize) -> Self {
        Self {
            points,
            canvas,
            scroll_offset_px: 0.0,
            zoom_scale: 1.0,
            data_category_width_px: 0.0,
            y_start_px: 0.0,
            bar_width_px: 0.0,
        }
    }

    #[must_use]
    pub fn with_scroll_offset(mut self, scroll_offset_px: f64) -> Self {
        self.scroll_offset_px = scroll_offset_px;
        self
    }

    #[must_use]
    pub fn with_zoom_scale(mut self, zoom_scale: f64) -> Self {
        self.zoom_scale = zoom_scale;
        self
    }

    #[must_use]
    pub fn with_category_width(mut self, data_category_width_px: f64) -> Self {
        self.data_category_width_px = data_category_width_px;
        self
    }

    #[must_use]
    pub fn with_y_start(mut self, y_start_px: f64) -> Self {
        self.y_start_px = y_start_px;
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, bar_width_px: f64) -> Self {
        self.bar_width_px = bar_width_px;
        self
    }
}

/// Result of one axis layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisFrame {
    pub frame: RenderFrame,
    /// State to persist for the next frame.
    pub state: YAxisRenderState,
    pub axis_width_px: f64,
    pub scale: ValueScale,
    pub geometry: AxisGeometry,
    pub mode: TraversalMode,
    pub step_advance_px: f64,
    pub ticks: Vec<TickLabel>,
}

/// Lays out and emits the y-axis for one frame.
///
/// Runs in two phases so the column width is final before any geometry that
/// depends on it is produced:
/// 1. walk all `steps + 1` ticks, format and measure their labels and fold the
///    required width into `state`;
/// 2. walk the ticks again and emit background, labels, axis segments and the
///    units label with that width.
///
/// Identical inputs with the returned state yield an identical width.
pub fn build_y_axis_frame<M: TextMeasurer + ?Sized>(
    config: &YAxisConfig,
    state: YAxisRenderState,
    input: &YAxisFrameInput<'_>,
    measurer: &M,
) -> ChartResult<YAxisFrame> {
    validate_frame_input(input)?;
    let options = config.options();
    let category = config.category();

    let mode = TraversalMode::resolve(
        category.is_category_axis,
        category.starts_from_bottom,
        input.zoom_scale,
    );
    let geometry = AxisGeometry::resolve(
        input.canvas.height,
        options.paddings.top_px,
        options.paddings.bottom_px,
        config.steps(),
        mode.is_category().then_some(input.data_category_width_px),
    );
    let scale = ValueScale::from_points(input.points, config.steps());
    let step_advance_px = options.axis_step_size_px * input.zoom_scale * scale.step_size;
    let positions = StepPositions::new(
        mode,
        StepPositionParams {
            steps: config.steps(),
            geometry,
            y_start_px: input.y_start_px,
            scroll_offset_px: input.scroll_offset_px,
            step_advance_px,
        },
    );

    // Phase 1: measure.
    let ticks = positions
        .map(|tick| measure_tick_label(config, tick, measurer))
        .collect::<ChartResult<Vec<_>>>()?;
    let previous_width = state.axis_width_px();
    let axis_width_px = resolve_axis_width(config, previous_width, &ticks);
    let state = state.grown_to(axis_width_px);
    if axis_width_px > previous_width {
        debug!(
            previous_width,
            axis_width_px,
            tick_count = ticks.len(),
            "y-axis column grew to fit labels"
        );
    }

    // Phase 2: render.
    let mut frame = RenderFrame::new(input.canvas);
    if !options.background_color.is_transparent() {
        frame.push_rect(RectPrimitive::new(
            0.0,
            0.0,
            axis_width_px,
            input.canvas.height,
            options.background_color,
        ));
    }

    let segment_ctx = AxisSegmentContext {
        axis_width_px,
        geometry,
        mode,
        step_advance_px,
        zoom_scale: input.zoom_scale,
        bar_width_px: input.bar_width_px,
    };
    for label in &ticks {
        if let Some(text) = label_text_primitive(config, label, axis_width_px) {
            frame.push_text(text);
        }
        for line in build_tick_segments(config, label.tick, segment_ctx) {
            frame.push_line(line);
        }
    }

    if let Some(units) = units_label_primitive(config, input.canvas, measurer)? {
        frame.push_text(units);
    }

    Ok(YAxisFrame {
        frame,
        state,
        axis_width_px,
        scale,
        geometry,
        mode,
        step_advance_px,
        ticks,
    })
}

fn units_label_primitive<M: TextMeasurer + ?Sized>(
    config: &YAxisConfig,
    canvas: CanvasSize,
    measurer: &M,
) -> ChartResult<Option<TextPrimitive>> {
    let options = config.options();
    let units = options.units_label.trim();
    if units.is_empty() {
        return Ok(None);
    }

    let metrics = measure_label(measurer, units, options.label_font_size_px)?;
    // Rotated text hangs to the left of its baseline, so the baseline sits one
    // text height in from the column's start edge.
    Ok(Some(
        TextPrimitive::new(
            units,
            metrics.height_px,
            canvas.height / 2.0,
            options.label_font_size_px,
            options.label_color,
            TextHAlign::Center,
        )
        .with_rotation(TextRotation::CounterClockwise90),
    ))
}
