use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Color;

use super::validation::validate_y_axis_options;

/// Upper bound for `YAxisOptions::steps`.
///
/// Every step is measured and drawn each frame, so the count has to stay in
/// the range a single axis column can show.
pub const MAX_AXIS_STEPS: usize = 10_000;

/// Maps a tick's label index to its display text.
pub type AxisLabelFormatterFn = Arc<dyn Fn(usize) -> String + Send + Sync + 'static>;

/// Side of the plot the axis column sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisPosition {
    /// Column left of the plot; ticks hang off its right edge.
    #[default]
    Left,
    /// Column right of the plot; ticks hang off its left edge.
    Right,
}

/// Where the ellipsis goes when a label is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EllipsisPlacement {
    Start,
    Middle,
    #[default]
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CategoryOptions {
    /// Ticks align to discrete category slots instead of numeric divisions.
    pub is_category_axis: bool,
    /// Category slots are laid out from the axis bottom upwards.
    pub starts_from_bottom: bool,
}

/// Pixel paddings around the axis column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPaddings {
    pub top_px: f64,
    pub bottom_px: f64,
    /// Space before the label column.
    pub start_px: f64,
    /// Space between the labels and the plot edge.
    pub axis_offset_px: f64,
    pub label_and_line_gap_px: f64,
    /// Extra axis line below the first category slot.
    pub draw_start_px: f64,
}

impl Default for AxisPaddings {
    fn default() -> Self {
        Self {
            top_px: 0.0,
            bottom_px: 0.0,
            start_px: 10.0,
            axis_offset_px: 20.0,
            label_and_line_gap_px: 4.0,
            draw_start_px: 0.0,
        }
    }
}

/// Named, defaulted inputs for [`YAxisConfig::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct YAxisOptions {
    pub steps: usize,
    pub position: AxisPosition,
    pub paddings: AxisPaddings,
    /// Pixel distance of one data step on category axes, before zoom.
    pub axis_step_size_px: f64,
    pub label_font_size_px: f64,
    pub label_color: Color,
    pub axis_line_color: Color,
    pub axis_line_thickness_px: f64,
    pub indicator_line_width_px: f64,
    pub background_color: Color,
    pub units_label: String,
    /// Room reserved for the rotated units label when it is not blank.
    pub units_label_padding_px: f64,
    pub line_draw_required: bool,
    pub should_ellipsize_label: bool,
    pub min_width_before_ellipsize_px: f64,
    pub ellipsis_placement: EllipsisPlacement,
    pub category: CategoryOptions,
    pub draw_axis_line_till_end: bool,
    /// Upper bound for the reserved column width. `None` leaves growth unbounded.
    pub max_axis_width_px: Option<f64>,
}

impl Default for YAxisOptions {
    fn default() -> Self {
        Self {
            steps: 1,
            position: AxisPosition::Left,
            paddings: AxisPaddings::default(),
            axis_step_size_px: 30.0,
            label_font_size_px: 14.0,
            label_color: Color::BLACK,
            axis_line_color: Color::BLACK,
            axis_line_thickness_px: 2.0,
            indicator_line_width_px: 5.0,
            background_color: Color::TRANSPARENT,
            units_label: String::new(),
            units_label_padding_px: 15.0,
            line_draw_required: true,
            should_ellipsize_label: false,
            min_width_before_ellipsize_px: 50.0,
            ellipsis_placement: EllipsisPlacement::End,
            category: CategoryOptions::default(),
            draw_axis_line_till_end: false,
            max_axis_width_px: None,
        }
    }
}

/// Immutable, validated y-axis configuration.
///
/// Built once per chart definition through [`YAxisConfig::new`]; every field
/// is read through accessors so the invariants checked at construction hold
/// for the value's lifetime.
#[derive(Clone)]
pub struct YAxisConfig {
    options: YAxisOptions,
    formatter: AxisLabelFormatterFn,
}

impl YAxisConfig {
    pub fn new(options: YAxisOptions, formatter: AxisLabelFormatterFn) -> ChartResult<Self> {
        let options = validate_y_axis_options(options)?;
        Ok(Self { options, formatter })
    }

    /// Config whose labels are the decimal tick index.
    pub fn with_default_labels(options: YAxisOptions) -> ChartResult<Self> {
        Self::new(options, Arc::new(|index| index.to_string()))
    }

    #[must_use]
    pub fn options(&self) -> &YAxisOptions {
        &self.options
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.options.steps
    }

    #[must_use]
    pub fn position(&self) -> AxisPosition {
        self.options.position
    }

    #[must_use]
    pub fn paddings(&self) -> AxisPaddings {
        self.options.paddings
    }

    #[must_use]
    pub fn category(&self) -> CategoryOptions {
        self.options.category
    }

    #[must_use]
    pub fn is_right_aligned(&self) -> bool {
        self.options.position == AxisPosition::Right
    }

    #[must_use]
    pub fn format_label(&self, index: usize) -> String {
        (self.formatter)(index)
    }

    /// Horizontal allowance keeping the units label clear of tick labels.
    #[must_use]
    pub fn extra_label_padding_px(&self) -> f64 {
        if self.options.units_label.trim().is_empty() {
            0.0
        } else {
            self.options.units_label_padding_px
        }
    }

    #[must_use]
    pub fn clamp_axis_width(&self, width_px: f64) -> f64 {
        match self.options.max_axis_width_px {
            Some(max) => width_px.min(max),
            None => width_px,
        }
    }
}

impl fmt::Debug for YAxisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YAxisConfig")
            .field("options", &self.options)
            .field("formatter", &"<fn>")
            .finish()
    }
}
