use serde::{Deserialize, Serialize};

use crate::core::geometry::AxisGeometry;

/// Reading direction of a category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryDirection {
    /// Ticks advance upwards from the axis bottom.
    BottomUp,
    /// Ticks advance downwards from `y_start`.
    TopDown,
}

/// How tick positions are produced for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraversalMode {
    /// Evenly divided numeric axis; every tick is computed independently.
    Continuous,
    /// Category slots walked from a running cursor.
    ///
    /// `reverse_labels` is set when a top-down category axis is zoomed out:
    /// positions still advance bottom-up but labels keep their top-down order.
    Category {
        direction: CategoryDirection,
        reverse_labels: bool,
    },
}

impl TraversalMode {
    #[must_use]
    pub fn resolve(is_category_axis: bool, starts_from_bottom: bool, zoom_scale: f64) -> Self {
        if !is_category_axis {
            return Self::Continuous;
        }
        if starts_from_bottom {
            return Self::Category {
                direction: CategoryDirection::BottomUp,
                reverse_labels: false,
            };
        }
        if zoom_scale < 1.0 {
            Self::Category {
                direction: CategoryDirection::BottomUp,
                reverse_labels: true,
            }
        } else {
            Self::Category {
                direction: CategoryDirection::TopDown,
                reverse_labels: false,
            }
        }
    }

    #[must_use]
    pub fn category_direction(self) -> Option<CategoryDirection> {
        match self {
            Self::Continuous => None,
            Self::Category { direction, .. } => Some(direction),
        }
    }

    #[must_use]
    pub fn is_category(self) -> bool {
        matches!(self, Self::Category { .. })
    }
}

/// Frame inputs that drive tick placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPositionParams {
    pub steps: usize,
    pub geometry: AxisGeometry,
    pub y_start_px: f64,
    pub scroll_offset_px: f64,
    /// Pixel distance between consecutive category ticks
    /// (`axis_step_size * zoom_scale * data_step_size`).
    pub step_advance_px: f64,
}

/// One tick produced by [`StepPositions`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickPosition {
    pub index: usize,
    /// Index handed to the label formatter.
    pub label_index: usize,
    pub y_px: f64,
}

/// Lazy sequence of exactly `steps + 1` tick positions.
///
/// Category positions depend on the previous tick, so the sequence is only
/// restartable from the beginning (`Clone` before iterating, or build a new
/// one).
#[derive(Debug, Clone)]
pub struct StepPositions {
    mode: TraversalMode,
    params: StepPositionParams,
    next_index: usize,
    exhausted: bool,
    cursor_y: f64,
}

impl StepPositions {
    #[must_use]
    pub fn new(mode: TraversalMode, params: StepPositionParams) -> Self {
        let cursor_y = match mode.category_direction() {
            Some(CategoryDirection::BottomUp) => {
                params.geometry.axis_height_px - params.y_start_px + params.scroll_offset_px
            }
            Some(CategoryDirection::TopDown) | None => params.y_start_px - params.scroll_offset_px,
        };
        Self {
            mode,
            params,
            next_index: 0,
            exhausted: false,
            cursor_y,
        }
    }

    #[must_use]
    pub fn mode(&self) -> TraversalMode {
        self.mode
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.params.steps.saturating_add(1)
    }
}

impl Iterator for StepPositions {
    type Item = TickPosition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let index = self.next_index;
        if index == self.params.steps {
            self.exhausted = true;
        } else {
            self.next_index += 1;
        }

        let tick = match self.mode {
            TraversalMode::Continuous => TickPosition {
                index,
                label_index: index,
                y_px: self.params.geometry.continuous_tick_y(index),
            },
            TraversalMode::Category {
                direction,
                reverse_labels,
            } => {
                let y_px = self.cursor_y;
                match direction {
                    CategoryDirection::BottomUp => self.cursor_y -= self.params.step_advance_px,
                    CategoryDirection::TopDown => self.cursor_y += self.params.step_advance_px,
                }
                let label_index = if reverse_labels {
                    self.params.steps - index
                } else {
                    index
                };
                TickPosition {
                    index,
                    label_index,
                    y_px,
                }
            }
        };
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.exhausted {
            0
        } else {
            (self.params.steps - self.next_index).saturating_add(1)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StepPositions {}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(steps: usize, step_advance_px: f64) -> StepPositionParams {
        StepPositionParams {
            steps,
            geometry: AxisGeometry {
                axis_height_px: 200.0,
                segment_height_px: 40.0,
            },
            y_start_px: 10.0,
            scroll_offset_px: 5.0,
            step_advance_px,
        }
    }

    #[test]
    fn zoomed_out_top_down_axis_reads_bottom_up_with_reversed_labels() {
        let mode = TraversalMode::resolve(true, false, 0.5);
        let ticks: Vec<TickPosition> = StepPositions::new(mode, params(2, 20.0)).collect();

        let ys: Vec<f64> = ticks.iter().map(|tick| tick.y_px).collect();
        let labels: Vec<usize> = ticks.iter().map(|tick| tick.label_index).collect();
        assert_eq!(ys, vec![195.0, 175.0, 155.0]);
        assert_eq!(labels, vec![2, 1, 0]);
    }

    #[test]
    fn size_hint_tracks_remaining_ticks() {
        let mut positions = StepPositions::new(TraversalMode::Continuous, params(3, 0.0));
        assert_eq!(positions.len(), 4);
        positions.next();
        assert_eq!(positions.len(), 3);
    }

    #[test]
    fn exhausted_sequence_stays_empty() {
        let mut positions = StepPositions::new(TraversalMode::Continuous, params(1, 0.0));
        assert_eq!(positions.by_ref().count(), 2);
        assert_eq!(positions.len(), 0);
        assert!(positions.next().is_none());
    }

    #[test]
    fn largest_step_count_does_not_overflow_tick_counting() {
        let mut positions = StepPositions::new(TraversalMode::Continuous, params(usize::MAX, 0.0));
        assert_eq!(positions.tick_count(), usize::MAX);
        assert_eq!(positions.len(), usize::MAX);

        let first: Vec<usize> = positions.by_ref().take(3).map(|tick| tick.index).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(positions.len(), usize::MAX - 2);
    }
}
