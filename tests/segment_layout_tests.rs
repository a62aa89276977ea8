mod support;

use approx::assert_abs_diff_eq;
use chart_yaxis::api::{
    AxisPaddings, AxisPosition, CategoryOptions, YAxisFrame, YAxisFrameInput, YAxisOptions,
    YAxisRenderState, build_y_axis_frame, category_gridline_rule,
};
use chart_yaxis::core::{CanvasSize, CategoryDirection, DataPoint};
use chart_yaxis::render::LinePrimitive;

use support::{MonoMeasurer, default_config};

// One-char labels (10px) + start 10 + offset 20 + gap 4.
const AXIS_WIDTH: f64 = 44.0;
const INDICATOR: f64 = 5.0;

fn points() -> Vec<DataPoint> {
    // steps = 5 -> data step size 2 -> advance 30 * zoom * 2
    vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 10.0)]
}

fn category_options(starts_from_bottom: bool, till_end: bool, draw_start_px: f64) -> YAxisOptions {
    YAxisOptions {
        steps: 5,
        paddings: AxisPaddings {
            bottom_px: 20.0,
            draw_start_px,
            ..AxisPaddings::default()
        },
        category: CategoryOptions {
            is_category_axis: true,
            starts_from_bottom,
        },
        draw_axis_line_till_end: till_end,
        ..YAxisOptions::default()
    }
}

fn build(options: YAxisOptions, zoom_scale: f64) -> YAxisFrame {
    let config = default_config(options);
    let points = points();
    let input = YAxisFrameInput::new(&points, CanvasSize::new(200.0, 300.0))
        .with_scroll_offset(5.0)
        .with_zoom_scale(zoom_scale)
        .with_category_width(40.0)
        .with_y_start(10.0)
        .with_bar_width(20.0);
    build_y_axis_frame(&config, YAxisRenderState::new(), &input, &MonoMeasurer)
        .expect("build frame")
}

fn vertical_lines(frame: &YAxisFrame) -> Vec<LinePrimitive> {
    frame
        .frame
        .lines()
        .filter(|line| line.x1 == line.x2)
        .copied()
        .collect()
}

fn pointer_lines(frame: &YAxisFrame) -> Vec<LinePrimitive> {
    frame
        .frame
        .lines()
        .filter(|line| line.y1 == line.y2 && line.x1 != line.x2)
        .copied()
        .collect()
}

#[test]
fn continuous_gridlines_join_consecutive_ticks_and_skip_the_last() {
    let frame = build(
        YAxisOptions {
            steps: 5,
            paddings: AxisPaddings {
                top_px: 30.0,
                bottom_px: 20.0,
                ..AxisPaddings::default()
            },
            ..YAxisOptions::default()
        },
        1.0,
    );

    let gridlines = vertical_lines(&frame);
    assert_eq!(gridlines.len(), 5);
    let spans: Vec<(f64, f64)> = gridlines.iter().map(|line| (line.y1, line.y2)).collect();
    assert_eq!(
        spans,
        vec![
            (280.0, 230.0),
            (230.0, 180.0),
            (180.0, 130.0),
            (130.0, 80.0),
            (80.0, 30.0)
        ]
    );
    assert!(gridlines.iter().all(|line| line.x1 == AXIS_WIDTH));

    let pointers = pointer_lines(&frame);
    assert_eq!(pointers.len(), 6);
    assert_eq!(pointers[5].y1, 30.0);
}

#[test]
fn left_axis_pointer_hangs_inside_the_column_edge() {
    let frame = build(category_options(true, false, 0.0), 1.0);

    for pointer in pointer_lines(&frame) {
        assert_abs_diff_eq!(pointer.x1, AXIS_WIDTH - INDICATOR);
        assert_abs_diff_eq!(pointer.x2, AXIS_WIDTH);
    }
}

#[test]
fn right_axis_mirrors_lines_to_zero() {
    let frame = build(
        YAxisOptions {
            position: AxisPosition::Right,
            ..category_options(true, false, 6.0)
        },
        1.0,
    );

    assert!(vertical_lines(&frame).iter().all(|line| line.x1 == 0.0));
    for pointer in pointer_lines(&frame) {
        assert_eq!((pointer.x1, pointer.x2), (0.0, INDICATOR));
    }
}

#[test]
fn bottom_started_gridline_reaches_next_tick_downward_in_y() {
    let frame = build(category_options(true, false, 0.0), 1.0);
    let first = vertical_lines(&frame)[0];

    // start = 280 - 10 + 5, advance = 30 * 1 * 2
    assert_eq!((first.y1, first.y2), (275.0, 215.0));
}

#[test]
fn bottom_started_gridline_extends_by_half_bar_when_drawn_till_end() {
    let frame = build(category_options(true, true, 0.0), 1.0);
    let first = vertical_lines(&frame)[0];

    assert_eq!((first.y1, first.y2), (275.0, 205.0));
}

#[test]
fn top_down_gridline_adds_draw_start_padding() {
    let frame = build(category_options(false, false, 8.0), 1.0);
    let gridlines = vertical_lines(&frame);

    // gridlines[0] is the start padding line.
    assert_eq!((gridlines[0].y1, gridlines[0].y2), (272.0, 280.0));
    // start = 10 - 5, end = 5 + 60 + 8
    assert_eq!((gridlines[1].y1, gridlines[1].y2), (5.0, 73.0));
}

#[test]
fn top_down_gridline_till_end_starts_half_a_step_early() {
    let frame = build(category_options(false, true, 8.0), 1.0);
    let gridlines = vertical_lines(&frame);

    assert_eq!((gridlines[1].y1, gridlines[1].y2), (-25.0, 83.0));
}

#[test]
fn zoomed_out_top_down_axis_uses_bottom_up_rule_without_draw_start() {
    let frame = build(category_options(false, false, 8.0), 0.5);
    let gridlines = vertical_lines(&frame);

    // start padding scaled by zoom: 8 * 0.5
    assert_eq!((gridlines[0].y1, gridlines[0].y2), (276.0, 280.0));
    // advance = 30 * 0.5 * 2
    assert_eq!((gridlines[1].y1, gridlines[1].y2), (275.0, 245.0));
}

#[test]
fn start_padding_line_is_emitted_once() {
    let frame = build(category_options(true, false, 8.0), 1.0);
    let padding_lines = vertical_lines(&frame)
        .into_iter()
        .filter(|line| line.y1 == 272.0 && line.y2 == 280.0)
        .count();

    assert_eq!(padding_lines, 1);
    // 1 padding line + 5 gridlines
    assert_eq!(vertical_lines(&frame).len(), 6);
}

#[test]
fn start_padding_line_is_skipped_on_continuous_axes() {
    let frame = build(
        YAxisOptions {
            category: CategoryOptions::default(),
            ..category_options(false, false, 8.0)
        },
        1.0,
    );

    assert_eq!(vertical_lines(&frame).len(), 5);
}

#[test]
fn no_lines_when_line_drawing_is_disabled() {
    let frame = build(
        YAxisOptions {
            line_draw_required: false,
            ..category_options(true, true, 8.0)
        },
        1.0,
    );

    assert_eq!(frame.frame.lines().count(), 0);
    assert_eq!(frame.frame.texts().count(), 6);
}

#[test]
fn gridline_rule_table_covers_all_eight_flag_combinations() {
    let y = 100.0;
    let step = 20.0;
    let bar = 10.0;
    let draw_start = 4.0;

    for starts_from_bottom in [false, true] {
        for zoomed_out in [false, true] {
            for till_end in [false, true] {
                let direction = if starts_from_bottom || zoomed_out {
                    CategoryDirection::BottomUp
                } else {
                    CategoryDirection::TopDown
                };
                let (start, end) =
                    category_gridline_rule(direction, till_end).endpoints(y, step, bar, draw_start);

                let (expected_start, expected_end) = match (direction, till_end) {
                    (CategoryDirection::BottomUp, false) => (100.0, 80.0),
                    (CategoryDirection::BottomUp, true) => (100.0, 75.0),
                    (CategoryDirection::TopDown, false) => (100.0, 124.0),
                    (CategoryDirection::TopDown, true) => (90.0, 129.0),
                };
                assert_eq!(
                    (start, end),
                    (expected_start, expected_end),
                    "starts_from_bottom={starts_from_bottom} zoomed_out={zoomed_out} till_end={till_end}"
                );
            }
        }
    }
}

#[test]
fn zero_steps_emit_a_single_pointer_and_no_gridline() {
    let frame = build(
        YAxisOptions {
            steps: 0,
            ..YAxisOptions::default()
        },
        1.0,
    );

    assert_eq!(frame.ticks.len(), 1);
    assert_eq!(vertical_lines(&frame).len(), 0);
    assert_eq!(pointer_lines(&frame).len(), 1);
    frame.frame.validate().expect("valid frame");
}
