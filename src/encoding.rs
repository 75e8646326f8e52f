//! Data URI encoding for SVG masters.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::svg::SvgDocument;

pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("Not an SVG data URI")]
    MissingPrefix,

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode raw markup. UTF-8 bytes go straight into base64.
pub fn markup_to_data_uri(markup: &str) -> String {
    format!("{}{}", SVG_DATA_URI_PREFIX, STANDARD.encode(markup.as_bytes()))
}

pub fn to_data_uri(doc: &SvgDocument) -> String {
    markup_to_data_uri(&doc.markup())
}

/// Recover the markup from an SVG data URI.
pub fn decode_data_uri(uri: &str) -> Result<String, EncodingError> {
    let payload = uri
        .strip_prefix(SVG_DATA_URI_PREFIX)
        .ok_or(EncodingError::MissingPrefix)?;
    let bytes = STANDARD.decode(payload)?;
    Ok(String::from_utf8(bytes)?)
}
