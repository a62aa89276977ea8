use smallvec::SmallVec;

use crate::core::{AxisGeometry, TickPosition, TraversalMode};
use crate::render::LinePrimitive;

use super::YAxisConfig;
use super::axis_segment_rules::category_gridline_rule;

/// Lines emitted for a single tick: start padding, gridline, pointer.
pub type TickSegments = SmallVec<[LinePrimitive; 3]>;

#[derive(Debug, Clone, Copy)]
pub(super) struct AxisSegmentContext {
    pub axis_width_px: f64,
    pub geometry: AxisGeometry,
    pub mode: TraversalMode,
    pub step_advance_px: f64,
    pub zoom_scale: f64,
    pub bar_width_px: f64,
}

impl AxisSegmentContext {
    /// Inner edge of the column, where the axis line runs.
    fn edge_x(self, config: &YAxisConfig) -> f64 {
        if config.is_right_aligned() {
            0.0
        } else {
            self.axis_width_px
        }
    }

    fn pointer_x_range(self, config: &YAxisConfig) -> (f64, f64) {
        let indicator = config.options().indicator_line_width_px;
        if config.is_right_aligned() {
            (0.0, indicator)
        } else {
            (self.axis_width_px - indicator, self.axis_width_px)
        }
    }
}

pub(super) fn build_tick_segments(
    config: &YAxisConfig,
    tick: TickPosition,
    ctx: AxisSegmentContext,
) -> TickSegments {
    let mut segments = TickSegments::new();
    let options = config.options();
    if !options.line_draw_required {
        return segments;
    }

    let color = options.axis_line_color;
    let thickness = options.axis_line_thickness_px;
    let edge_x = ctx.edge_x(config);
    let axis_height = ctx.geometry.axis_height_px;
    let scaled_draw_start = options.paddings.draw_start_px * ctx.zoom_scale;

    if tick.index == 0 && options.paddings.draw_start_px != 0.0 && ctx.mode.is_category() {
        segments.push(LinePrimitive::vertical(
            edge_x,
            axis_height - scaled_draw_start,
            axis_height,
            thickness,
            color,
        ));
    }

    if tick.index != config.steps() {
        let (start_y, end_y) = match ctx.mode.category_direction() {
            Some(direction) => category_gridline_rule(direction, options.draw_axis_line_till_end)
                .endpoints(
                    tick.y_px,
                    ctx.step_advance_px,
                    ctx.bar_width_px,
                    scaled_draw_start,
                ),
            None => (
                ctx.geometry.continuous_tick_y(tick.index),
                ctx.geometry.continuous_tick_y(tick.index + 1),
            ),
        };
        segments.push(LinePrimitive::vertical(
            edge_x, start_y, end_y, thickness, color,
        ));
    }

    let (pointer_start_x, pointer_end_x) = ctx.pointer_x_range(config);
    segments.push(LinePrimitive::new(
        pointer_start_x,
        tick.y_px,
        pointer_end_x,
        tick.y_px,
        thickness,
        color,
    ));

    segments
}
