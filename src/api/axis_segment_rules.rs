use crate::core::CategoryDirection;

/// Endpoint formula for one category gridline segment.
///
/// `start = y + start_shift_steps * step`
/// `end   = y + sign * (step + [bar_width / 2]) + [draw_start * zoom]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridlineRule {
    pub start_shift_steps: f64,
    pub sign: f64,
    pub extend_by_half_bar: bool,
    pub include_draw_start: bool,
}

/// Lookup table keyed by `(direction, extend_to_end)`.
///
/// The direction already folds in `starts_from_bottom` and the zoom regime:
/// bottom-started axes and zoomed-out top-down axes both walk bottom-up.
#[must_use]
pub const fn category_gridline_rule(
    direction: CategoryDirection,
    extend_to_end: bool,
) -> GridlineRule {
    match (direction, extend_to_end) {
        (CategoryDirection::BottomUp, false) => GridlineRule {
            start_shift_steps: 0.0,
            sign: -1.0,
            extend_by_half_bar: false,
            include_draw_start: false,
        },
        (CategoryDirection::BottomUp, true) => GridlineRule {
            start_shift_steps: 0.0,
            sign: -1.0,
            extend_by_half_bar: true,
            include_draw_start: false,
        },
        (CategoryDirection::TopDown, false) => GridlineRule {
            start_shift_steps: 0.0,
            sign: 1.0,
            extend_by_half_bar: false,
            include_draw_start: true,
        },
        (CategoryDirection::TopDown, true) => GridlineRule {
            start_shift_steps: -0.5,
            sign: 1.0,
            extend_by_half_bar: true,
            include_draw_start: true,
        },
    }
}

impl GridlineRule {
    /// Returns `(start_y, end_y)` for a tick at `y_px`.
    #[must_use]
    pub fn endpoints(
        self,
        y_px: f64,
        step_advance_px: f64,
        bar_width_px: f64,
        scaled_draw_start_px: f64,
    ) -> (f64, f64) {
        let start = y_px + self.start_shift_steps * step_advance_px;
        let mut reach = step_advance_px;
        if self.extend_by_half_bar {
            reach += bar_width_px / 2.0;
        }
        let mut end = y_px + self.sign * reach;
        if self.include_draw_start {
            end += scaled_draw_start_px;
        }
        (start, end)
    }
}
