use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Store error: {0}")]
    StoreError(String),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
