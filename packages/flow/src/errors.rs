use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Drop payload is empty")]
    EmptyPayload,

    #[error("Invalid drop payload: {0}")]
    InvalidPayload(String),
}
