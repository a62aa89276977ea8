use crate::error::ChartResult;
use crate::render::TextMeasurer;

use super::EllipsisPlacement;
use super::axis_label_layout::measure_label;

pub(super) const ELLIPSIS: char = '…';

/// Truncates `text` so that it fits into `available_px`, inserting `…` at
/// `placement`. Returns the text unchanged when it already fits and an empty
/// string when not even the ellipsis fits.
pub(super) fn ellipsize_label<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    font_size_px: f64,
    available_px: f64,
    placement: EllipsisPlacement,
) -> ChartResult<String> {
    if measure_label(measurer, text, font_size_px)?.width_px <= available_px {
        return Ok(text.to_owned());
    }

    let chars: Vec<char> = text.chars().collect();
    // Widest kept-char count whose truncated form still fits.
    let mut fitting: Option<String> = None;
    let (mut low, mut high) = (0usize, chars.len().saturating_sub(1));
    while low <= high {
        let keep = low + (high - low) / 2;
        let candidate = truncated(&chars, keep, placement);
        if measure_label(measurer, &candidate, font_size_px)?.width_px <= available_px {
            fitting = Some(candidate);
            low = keep + 1;
        } else if keep == 0 {
            break;
        } else {
            high = keep - 1;
        }
    }

    Ok(fitting.unwrap_or_default())
}

fn truncated(chars: &[char], keep: usize, placement: EllipsisPlacement) -> String {
    let mut out = String::with_capacity(keep + ELLIPSIS.len_utf8());
    match placement {
        EllipsisPlacement::End => {
            out.extend(&chars[..keep]);
            out.push(ELLIPSIS);
        }
        EllipsisPlacement::Start => {
            out.push(ELLIPSIS);
            out.extend(&chars[chars.len() - keep..]);
        }
        EllipsisPlacement::Middle => {
            let head = keep.div_ceil(2);
            let tail = keep - head;
            out.extend(&chars[..head]);
            out.push(ELLIPSIS);
            out.extend(&chars[chars.len() - tail..]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextMetrics;

    /// Every char is 10px wide.
    struct MonoMeasurer;

    impl TextMeasurer for MonoMeasurer {
        fn measure(&self, text: &str, _font_size_px: f64) -> ChartResult<TextMetrics> {
            Ok(TextMetrics::new(text.chars().count() as f64 * 10.0, 12.0))
        }
    }

    #[test]
    fn fitting_label_is_unchanged() {
        let out = ellipsize_label(&MonoMeasurer, "1234", 12.0, 40.0, EllipsisPlacement::End)
            .expect("ellipsize");
        assert_eq!(out, "1234");
    }

    #[test]
    fn placements_keep_the_expected_chars() {
        let end = ellipsize_label(&MonoMeasurer, "abcdefgh", 12.0, 50.0, EllipsisPlacement::End)
            .expect("end");
        let start =
            ellipsize_label(&MonoMeasurer, "abcdefgh", 12.0, 50.0, EllipsisPlacement::Start)
                .expect("start");
        let middle =
            ellipsize_label(&MonoMeasurer, "abcdefgh", 12.0, 50.0, EllipsisPlacement::Middle)
                .expect("middle");
        assert_eq!(end, "abcd…");
        assert_eq!(start, "…efgh");
        assert_eq!(middle, "ab…gh");
    }

    #[test]
    fn too_narrow_for_ellipsis_yields_empty_label() {
        let out = ellipsize_label(&MonoMeasurer, "abc", 12.0, 5.0, EllipsisPlacement::End)
            .expect("ellipsize");
        assert!(out.is_empty());
    }

    #[test]
    fn only_ellipsis_fits() {
        let out = ellipsize_label(&MonoMeasurer, "abc", 12.0, 12.0, EllipsisPlacement::Middle)
            .expect("ellipsize");
        assert_eq!(out, "…");
    }
}
