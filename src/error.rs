use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid layout: at least two columns are required, got {columns}")]
    InvalidLayout { columns: usize },

    #[error("unknown column `{0}`")]
    UnknownColumn(String),
}
