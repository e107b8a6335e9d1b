use tagsphere::CloudError;
use thiserror::Error;

/// Failures of the terminal demo
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cloud(#[from] CloudError),
}

pub type Result<T> = std::result::Result<T, AppError>;
