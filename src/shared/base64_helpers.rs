//! Base64 helpers
//!
//! Thin wrappers around the standard (RFC 4648, padded) engine so that every
//! caller decodes with the same strictness: canonical padding is required and
//! non-zero trailing bits are rejected. That strictness is what guarantees an
//! accepted decode re-encodes to exactly the original text.

use base64::{engine::general_purpose::STANDARD, DecodeError, Engine};

/// Decode standard base64 text strictly
///
/// # Example
/// ```
/// use ferret_finder::shared::base64_helpers::decode_standard;
///
/// assert_eq!(decode_standard("SGVsbG8=").unwrap(), b"Hello");
/// assert!(decode_standard("SGVsbG8").is_err());
/// ```
pub fn decode_standard(input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode(input)
}

/// Encode bytes as standard base64 with padding
pub fn encode_standard(input: impl AsRef<[u8]>) -> String {
    STANDARD.encode(input)
}

/// Decode base64 that may be wrapped across lines
///
/// Carriage returns and newlines are dropped before decoding, so encoded files
/// and request bodies with trailing or wrapping line breaks still decode.
pub fn decode_ignoring_line_breaks(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let compact: Vec<u8> = input
        .iter()
        .copied()
        .filter(|&b| b != b'\r' && b != b'\n')
        .collect();
    STANDARD.decode(compact)
}
