//! chart-yaxis: vertical value-axis layout and render engine.
//!
//! The crate turns a point set and an immutable axis configuration into an
//! ordered list of draw commands (background, tick labels, gridlines, pointer
//! marks, units label) under live zoom/scroll transforms, and tracks the width
//! the axis column needs so labels are never clipped.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{YAxisConfig, YAxisEngine, YAxisFrameInput, YAxisOptions, build_y_axis_frame};
pub use error::{ChartError, ChartResult};
