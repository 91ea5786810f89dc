use thiserror::Error;
use webbuilder_flow::FlowError;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Graph error: {0}")]
    Flow(#[from] FlowError),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ShareLinkError {
    #[error("Share token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Compression error: {0}")]
    Codec(#[from] std::io::Error),

    #[error("Shared document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid query string: {0}")]
    Query(String),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl From<serde_urlencoded::de::Error> for ShareLinkError {
    fn from(e: serde_urlencoded::de::Error) -> Self {
        ShareLinkError::Query(e.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for ShareLinkError {
    fn from(e: serde_urlencoded::ser::Error) -> Self {
        ShareLinkError::Query(e.to_string())
    }
}
