use thiserror::Error;

#[derive(Debug, Error)]
pub enum CloudError {
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CloudError>;
