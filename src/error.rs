use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid axis config: {0}")]
    InvalidConfig(String),

    #[error("text measurement failed for `{text}`: {reason}")]
    TextMeasurement { text: String, reason: String },
}
