use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid field `{field}` on record {index}: {reason}")]
    InvalidField {
        index: usize,
        field: String,
        reason: String,
    },

    #[error("invalid bin count: {0} (must be >= 1)")]
    InvalidBinCount(usize),

    #[error("no values to plot")]
    EmptyInput,
}
