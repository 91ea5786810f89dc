//! Error types for the editor

use thiserror::Error;
use webbuilder_common::StoreError;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Drag payload is empty")]
    EmptyPayload,

    #[error("Invalid drag payload: {0}")]
    InvalidPayload(String),
}
