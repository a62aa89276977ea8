use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

/// Measured extent of a single line of text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width_px: f64,
    pub height_px: f64,
}

impl TextMetrics {
    pub const ZERO: Self = Self {
        width_px: 0.0,
        height_px: 0.0,
    };

    #[must_use]
    pub const fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}

/// Text measurement hook used by axis label layout.
///
/// Implementations can be heuristic or backed by a shaping engine; the axis
/// only needs the advance width and the glyph height of one line.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> ChartResult<TextMetrics>;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, font_size_px: f64) -> ChartResult<TextMetrics> {
        (**self).measure(text, font_size_px)
    }
}

/// Deterministic, backend-independent width estimate.
///
/// Digits and separators get narrower advances than letters so numeric axis
/// labels are not over-reserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> ChartResult<TextMetrics> {
        Ok(TextMetrics::new(
            estimate_text_width_px(text, font_size_px),
            font_size_px,
        ))
    }
}

pub(crate) fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            '…' => 0.9,
            _ => 0.58,
        }
    });
    units * font_size_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width_grows_with_label_length() {
        let measurer = HeuristicTextMeasurer;
        let short = measurer.measure("9", 10.0).expect("measure short");
        let long = measurer.measure("99999", 10.0).expect("measure long");
        assert!(long.width_px > short.width_px);
        assert_eq!(short.height_px, 10.0);
    }

    #[test]
    fn empty_text_has_zero_width() {
        let metrics = HeuristicTextMeasurer.measure("", 12.0).expect("measure");
        assert_eq!(metrics.width_px, 0.0);
    }
}
