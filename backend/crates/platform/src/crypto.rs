//! Encoding Utilities

use base64::{Engine, engine::general_purpose};

/// Encode bytes as standard (padded) base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode standard (padded) base64 to bytes
///
/// Padding is mandatory; a token with missing or excess padding is an error.
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}
