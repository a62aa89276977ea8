use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::TickPosition;
use crate::error::ChartResult;
use crate::render::{TextHAlign, TextMeasurer, TextMetrics, TextPrimitive};

use super::YAxisConfig;
use super::label_ellipsis::ellipsize_label;

/// Label produced for one tick during the measure pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub tick: TickPosition,
    /// Formatter output, before truncation.
    pub text: String,
    /// Text that is actually drawn.
    pub display_text: String,
    pub metrics: TextMetrics,
    pub ellipsized: bool,
}

/// Measures `text`, degrading to a zero-size metric in release builds when
/// the measurer cannot provide font metrics.
pub(super) fn measure_label<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    font_size_px: f64,
) -> ChartResult<TextMetrics> {
    match measurer.measure(text, font_size_px) {
        Ok(metrics) => Ok(metrics),
        Err(err) if cfg!(debug_assertions) => Err(err),
        Err(err) => {
            warn!(error = %err, text, "label measurement failed; using zero-width estimate");
            Ok(TextMetrics::ZERO)
        }
    }
}

/// Formats, measures and (optionally) truncates the label of one tick.
pub(super) fn measure_tick_label<M: TextMeasurer + ?Sized>(
    config: &YAxisConfig,
    tick: TickPosition,
    measurer: &M,
) -> ChartResult<TickLabel> {
    let options = config.options();
    let text = config.format_label(tick.label_index);
    let metrics = measure_label(measurer, &text, options.label_font_size_px)?;

    let ellipsized =
        options.should_ellipsize_label && metrics.width_px > options.min_width_before_ellipsize_px;
    let display_text = if ellipsized {
        ellipsize_label(
            measurer,
            &text,
            options.label_font_size_px,
            options.min_width_before_ellipsize_px,
            options.ellipsis_placement,
        )?
    } else {
        text.clone()
    };

    Ok(TickLabel {
        tick,
        text,
        display_text,
        metrics,
        ellipsized,
    })
}

/// Column width after accounting for one label.
///
/// The width only changes when the measured label overflows it, and never
/// shrinks. With ellipsizing enabled the truncation threshold is reserved
/// instead of the full label width.
#[must_use]
pub fn grow_axis_width(config: &YAxisConfig, current_width_px: f64, measured_width_px: f64) -> f64 {
    if measured_width_px <= current_width_px {
        return current_width_px;
    }

    let options = config.options();
    let paddings = options.paddings;
    let reserved_label_px = if options.should_ellipsize_label {
        options.min_width_before_ellipsize_px
    } else {
        measured_width_px
    };
    let candidate = reserved_label_px
        + paddings.label_and_line_gap_px
        + paddings.axis_offset_px
        + paddings.start_px
        + config.extra_label_padding_px();

    let grown = current_width_px.max(candidate);
    trace!(current_width_px, measured_width_px, grown, "axis label overflow");
    config.clamp_axis_width(grown).max(current_width_px)
}

/// Folds every label of the frame into the persisted column width.
#[must_use]
pub(super) fn resolve_axis_width(
    config: &YAxisConfig,
    current_width_px: f64,
    labels: &[TickLabel],
) -> f64 {
    labels.iter().fold(current_width_px, |width, label| {
        grow_axis_width(config, width, label.metrics.width_px)
    })
}

/// Text command for a measured label, or `None` when nothing is left to draw.
pub(super) fn label_text_primitive(
    config: &YAxisConfig,
    label: &TickLabel,
    axis_width_px: f64,
) -> Option<TextPrimitive> {
    if label.display_text.is_empty() {
        return None;
    }

    let options = config.options();
    let paddings = options.paddings;
    let (x, h_align) = if config.is_right_aligned() {
        (
            axis_width_px - paddings.label_and_line_gap_px,
            TextHAlign::Right,
        )
    } else {
        (
            paddings.start_px + config.extra_label_padding_px(),
            TextHAlign::Left,
        )
    };
    // Continuous ticks sit at `axis_height - segment_height * index`, which is
    // exactly `tick.y_px`, so one baseline formula serves both axis kinds.
    let y = label.tick.y_px + label.metrics.height_px / 2.0;

    Some(TextPrimitive::new(
        label.display_text.clone(),
        x,
        y,
        options.label_font_size_px,
        options.label_color,
        h_align,
    ))
}
