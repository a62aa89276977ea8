mod axis_config;
mod axis_frame_builder;
mod axis_label_layout;
mod axis_segment_builder;
mod axis_segment_rules;
mod engine;
mod json_contract;
mod label_ellipsis;
mod render_state;
mod validation;

pub use axis_config::{
    AxisLabelFormatterFn, AxisPaddings, AxisPosition, CategoryOptions, EllipsisPlacement,
    MAX_AXIS_STEPS, YAxisConfig, YAxisOptions,
};
pub use axis_frame_builder::{YAxisFrame, YAxisFrameInput, build_y_axis_frame};
pub use axis_label_layout::{TickLabel, grow_axis_width};
pub use axis_segment_builder::TickSegments;
pub use axis_segment_rules::{GridlineRule, category_gridline_rule};
pub use engine::YAxisEngine;
pub use json_contract::{Y_AXIS_FRAME_JSON_SCHEMA_V1, YAxisFrameJsonContractV1};
pub use render_state::YAxisRenderState;
