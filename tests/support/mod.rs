#![allow(dead_code)]

use chart_yaxis::api::{YAxisConfig, YAxisOptions};
use chart_yaxis::error::{ChartError, ChartResult};
use chart_yaxis::render::{TextMeasurer, TextMetrics};
use std::sync::Arc;

pub const CHAR_WIDTH_PX: f64 = 10.0;
pub const TEXT_HEIGHT_PX: f64 = 12.0;

/// Every char is `CHAR_WIDTH_PX` wide and `TEXT_HEIGHT_PX` high.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonoMeasurer;

impl TextMeasurer for MonoMeasurer {
    fn measure(&self, text: &str, _font_size_px: f64) -> ChartResult<TextMetrics> {
        Ok(TextMetrics::new(
            text.chars().count() as f64 * CHAR_WIDTH_PX,
            TEXT_HEIGHT_PX,
        ))
    }
}

/// Always fails, like a backend without font metrics.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingMeasurer;

impl TextMeasurer for FailingMeasurer {
    fn measure(&self, text: &str, _font_size_px: f64) -> ChartResult<TextMetrics> {
        Err(ChartError::TextMeasurement {
            text: text.to_owned(),
            reason: "font metrics unavailable".to_owned(),
        })
    }
}

pub fn config_with_labels(options: YAxisOptions, labels: &'static [&'static str]) -> YAxisConfig {
    YAxisConfig::new(
        options,
        Arc::new(move |index| labels.get(index).copied().unwrap_or_default().to_owned()),
    )
    .expect("valid axis config")
}

pub fn default_config(options: YAxisOptions) -> YAxisConfig {
    YAxisConfig::with_default_labels(options).expect("valid axis config")
}
