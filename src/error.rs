use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("insufficient data: {required} points required, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("invalid animation: {0}")]
    InvalidAnimation(String),
}
