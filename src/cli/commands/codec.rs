use crate::codec::{decode_file, encode_file};
use crate::errors::{AppError, AppResult};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Print the base64 encoding of a file
#[derive(Args)]
pub struct EncodeCommand {
    /// File to base64 encode
    pub path: PathBuf,
}

impl EncodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let encoded = encode_file(&self.path)
            .map_err(|e| AppError::InvalidInput(format!("{:#}", e)))?;
        write_line(encoded.as_bytes())
    }
}

/// Decode a base64 file and print the result
#[derive(Args)]
pub struct DecodeCommand {
    /// File to base64 decode
    pub path: PathBuf,
}

impl DecodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let decoded = decode_file(&self.path)
            .map_err(|e| AppError::InvalidInput(format!("{:#}", e)))?;
        write_line(&decoded)
    }
}

/// Raw bytes plus a newline on stdout; decoded data need not be UTF-8
fn write_line(data: &[u8]) -> AppResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(data)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
