use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(
        "series {series_index} has {actual} values but the category axis has {expected} labels"
    )]
    DataShapeMismatch {
        series_index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("appended category has {actual} values but the chart has {expected} series")]
    AppendShapeMismatch { expected: usize, actual: usize },

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
