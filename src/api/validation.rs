use crate::core::CanvasSize;
use crate::error::{ChartError, ChartResult};

use super::{MAX_AXIS_STEPS, YAxisFrameInput, YAxisOptions};

pub(super) fn validate_y_axis_options(options: YAxisOptions) -> ChartResult<YAxisOptions> {
    if options.steps > MAX_AXIS_STEPS {
        return Err(ChartError::InvalidConfig(format!(
            "`steps` must be <= {MAX_AXIS_STEPS}, got {}",
            options.steps
        )));
    }

    let paddings = options.paddings;
    for (name, value) in [
        ("paddings.top_px", paddings.top_px),
        ("paddings.bottom_px", paddings.bottom_px),
        ("paddings.start_px", paddings.start_px),
        ("paddings.axis_offset_px", paddings.axis_offset_px),
        ("paddings.label_and_line_gap_px", paddings.label_and_line_gap_px),
        ("paddings.draw_start_px", paddings.draw_start_px),
        ("axis_step_size_px", options.axis_step_size_px),
        ("indicator_line_width_px", options.indicator_line_width_px),
        ("units_label_padding_px", options.units_label_padding_px),
        (
            "min_width_before_ellipsize_px",
            options.min_width_before_ellipsize_px,
        ),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "`{name}` must be finite and >= 0"
            )));
        }
    }

    for (name, value) in [
        ("label_font_size_px", options.label_font_size_px),
        ("axis_line_thickness_px", options.axis_line_thickness_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "`{name}` must be finite and > 0"
            )));
        }
    }

    if let Some(max_width) = options.max_axis_width_px {
        if !max_width.is_finite() || max_width < 0.0 {
            return Err(ChartError::InvalidConfig(
                "`max_axis_width_px` must be finite and >= 0".to_owned(),
            ));
        }
    }

    for color in [
        options.label_color,
        options.axis_line_color,
        options.background_color,
    ] {
        color
            .validate()
            .map_err(|err| ChartError::InvalidConfig(err.to_string()))?;
    }

    Ok(options)
}

pub(super) fn validate_frame_input(input: &YAxisFrameInput<'_>) -> ChartResult<()> {
    validate_canvas(input.canvas)?;

    for (name, value) in [
        ("scroll_offset_px", input.scroll_offset_px),
        ("y_start_px", input.y_start_px),
        ("data_category_width_px", input.data_category_width_px),
        ("bar_width_px", input.bar_width_px),
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!("`{name}` must be finite")));
        }
    }

    if !input.zoom_scale.is_finite() || input.zoom_scale < 0.0 {
        return Err(ChartError::InvalidData(
            "`zoom_scale` must be finite and >= 0".to_owned(),
        ));
    }

    Ok(())
}

fn validate_canvas(canvas: CanvasSize) -> ChartResult<()> {
    if canvas.is_valid() {
        Ok(())
    } else {
        Err(ChartError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        })
    }
}
