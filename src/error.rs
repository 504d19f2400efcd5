use thiserror::Error;

pub type FilmscopeResult<T> = Result<T, FilmscopeError>;

#[derive(Debug, Error)]
pub enum FilmscopeError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("load failed: {0}")]
    Load(String),
}
