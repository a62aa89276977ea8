pub mod geometry;
pub mod scale;
pub mod step_positions;
pub mod types;

pub use geometry::AxisGeometry;
pub use scale::ValueScale;
pub use step_positions::{
    CategoryDirection, StepPositionParams, StepPositions, TickPosition, TraversalMode,
};
pub use types::{CanvasSize, DataPoint};
