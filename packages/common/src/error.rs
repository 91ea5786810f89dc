use thiserror::Error;

/// Errors from a key-value store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<String> for StoreError {
    fn from(s: String) -> Self {
        StoreError::Unavailable(s)
    }
}

impl From<&str> for StoreError {
    fn from(s: &str) -> Self {
        StoreError::Unavailable(s.to_string())
    }
}
