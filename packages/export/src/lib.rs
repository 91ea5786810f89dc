//! # Webbuilder Export
//!
//! Packaging of finished documents: canonical JSON, a zip archive with a
//! ready-to-open page, and compressed share links.

mod archive;
mod errors;
mod share;
mod source;

pub use archive::{
    build_archive, ARCHIVE_FILE_NAME, ARCHIVE_HTML, ARCHIVE_JSON, ARCHIVE_README, README,
};
pub use errors::{ExportError, ShareLinkError};
pub use share::{
    build_share_link, decode_share_link, decode_share_token, encode_share_token,
    parse_share_link, share_token, SHARE_PARAM,
};
pub use source::{serialize_document, ExportSource};
