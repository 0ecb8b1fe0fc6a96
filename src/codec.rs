//! Base64 file encode/decode helpers used by the `encode` and `decode` commands

use crate::shared::base64_helpers::{decode_ignoring_line_breaks, encode_standard};
use anyhow::{Context, Result};
use std::path::Path;

/// Standard padded base64 of a file's contents
pub fn encode_file(path: &Path) -> Result<String> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    Ok(encode_standard(data))
}

/// Decode a base64 file; line breaks in the file are ignored
pub fn decode_file(path: &Path) -> Result<Vec<u8>> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    let decoded = decode_ignoring_line_breaks(&data)
        .with_context(|| format!("Failed to decode base64 data in {}", path.display()))?;
    Ok(decoded)
}
