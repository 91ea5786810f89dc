//! # Share Links
//!
//! A graph document travels inside a URL as the `data` query parameter:
//!
//! ```text
//! JSON ──zlib──▶ bytes ──base64url (no padding)──▶ token
//! https://host/flow?data=<token>
//! ```
//!
//! The token alphabet is `A-Z a-z 0-9 - _`, so it needs no further
//! percent-encoding. Reading also accepts a `#data=<token>` fragment.
//! A link without a token opens an empty document.

use crate::errors::ShareLinkError;
use crate::source::ExportSource;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};
use tracing::{debug, warn};
use webbuilder_flow::GraphDocument;

/// Query parameter and fragment key carrying the token
pub const SHARE_PARAM: &str = "data";

/// Compress JSON into a URL-safe token
pub fn encode_share_token(json: &str) -> Result<String, ShareLinkError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(json.as_bytes())?;
    let compressed = encoder.finish()?;
    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

/// Inverse of [`encode_share_token`]
pub fn decode_share_token(token: &str) -> Result<String, ShareLinkError> {
    let compressed = URL_SAFE_NO_PAD.decode(token.trim())?;
    let mut json = String::new();
    ZlibDecoder::new(compressed.as_slice()).read_to_string(&mut json)?;
    Ok(json)
}

/// `base_url` with the document's token as its `data` parameter.
///
/// Other query parameters are kept; an existing `data` is replaced and any
/// fragment is dropped.
pub fn build_share_link<S: ExportSource + ?Sized>(
    source: &S,
    base_url: &str,
) -> Result<String, ShareLinkError> {
    let token = encode_share_token(&source.serialize()?)?;

    let without_fragment = base_url.split('#').next().unwrap_or_default();
    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    };

    let mut params: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
    params.retain(|(key, _)| key != SHARE_PARAM);
    params.push((SHARE_PARAM.to_string(), token));

    let link = format!("{}?{}", path, serde_urlencoded::to_string(&params)?);
    debug!(bytes = link.len(), "Built share link");
    Ok(link)
}

/// Token carried by a link, from the query first, then the fragment
pub fn share_token(url: &str) -> Result<Option<String>, ShareLinkError> {
    let (before_fragment, fragment) = match url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (url, None),
    };

    if let Some((_, query)) = before_fragment.split_once('?') {
        let params: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        if let Some((_, token)) = params
            .into_iter()
            .find(|(key, value)| key == SHARE_PARAM && !value.is_empty())
        {
            return Ok(Some(token));
        }
    }

    Ok(fragment
        .and_then(|f| f.strip_prefix("data="))
        .filter(|token| !token.is_empty())
        .map(str::to_string))
}

/// Read the graph document a link carries; no token gives an empty document
pub fn decode_share_link(url: &str) -> Result<GraphDocument, ShareLinkError> {
    match share_token(url)? {
        Some(token) => {
            let json = decode_share_token(&token)?;
            Ok(serde_json::from_str(&json)?)
        }
        None => Ok(GraphDocument::new()),
    }
}

/// Like [`decode_share_link`], but any failure also gives an empty document
pub fn parse_share_link(url: &str) -> GraphDocument {
    decode_share_link(url).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unreadable share link");
        GraphDocument::new()
    })
}
