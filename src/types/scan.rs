use crate::config::{ScanSettings, DEFAULT_READ_BUFFER_BYTES};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::Utf8Error;

/// Configuration for a single scan run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Minimum length of the leading run in the default pattern
    pub min_chars: usize,
    /// Custom pattern replacing the default entirely
    pub pattern: Option<String>,
    pub read_buffer_bytes: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_chars: 4,
            pattern: None,
            read_buffer_bytes: DEFAULT_READ_BUFFER_BYTES,
        }
    }
}

impl From<&ScanSettings> for ScanConfig {
    fn from(settings: &ScanSettings) -> Self {
        Self {
            min_chars: settings.min_chars,
            pattern: settings.pattern.clone(),
            read_buffer_bytes: settings.read_buffer_bytes,
        }
    }
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::new()
    }

    /// Validate the current configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.read_buffer_bytes == 0 {
            return Err("Read buffer size cannot be zero".to_string());
        }
        if matches!(self.pattern.as_deref(), Some("")) {
            return Err("Custom pattern cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Builder for ScanConfig with validation
#[derive(Debug, Default)]
pub struct ScanConfigBuilder {
    min_chars: Option<usize>,
    pattern: Option<String>,
    read_buffer_bytes: Option<usize>,
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = Some(min_chars);
        self
    }

    pub fn pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn read_buffer_bytes(mut self, bytes: usize) -> Self {
        self.read_buffer_bytes = Some(bytes);
        self
    }

    /// Build the configuration with validation
    pub fn build(self) -> Result<ScanConfig, String> {
        let defaults = ScanConfig::default();
        let config = ScanConfig {
            min_chars: self.min_chars.unwrap_or(defaults.min_chars),
            pattern: self.pattern,
            read_buffer_bytes: self.read_buffer_bytes.unwrap_or(defaults.read_buffer_bytes),
        };
        config.validate()?;
        Ok(config)
    }
}

/// A substring matched by the scan pattern, before any decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub text: &'a str,
    pub source: &'a Path,
    /// 1-based line number within `source`
    pub line: usize,
}

/// Outcome of decoding and validating a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Decoded to printable text
    Printable,
    DecodeFailed(base64::DecodeError),
    InvalidUtf8(Utf8Error),
    /// First disqualifying character and its byte offset in the decoded text
    NonPrintable { offset: usize, character: char },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Printable)
    }

    /// Short label used in debug logs
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Printable => "printable",
            Verdict::DecodeFailed(_) => "decode_failed",
            Verdict::InvalidUtf8(_) => "invalid_utf8",
            Verdict::NonPrintable { .. } => "non_printable",
        }
    }
}

/// A candidate together with its decoded bytes and verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedResult<'a> {
    pub candidate: Candidate<'a>,
    /// Empty when decoding failed
    pub decoded: Vec<u8>,
    pub verdict: Verdict,
}

impl<'a> DecodedResult<'a> {
    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }

    /// Decoded text, only for accepted results
    pub fn decoded_text(&self) -> Option<&str> {
        if self.is_valid() {
            std::str::from_utf8(&self.decoded).ok()
        } else {
            None
        }
    }

    /// Owned, reportable form of an accepted result
    pub fn to_finding(&self) -> Option<Finding> {
        self.decoded_text().map(|decoded| Finding {
            file: self.candidate.source.display().to_string(),
            line: self.candidate.line,
            encoded: self.candidate.text.to_string(),
            decoded: decoded.to_string(),
        })
    }
}

/// An accepted result, as emitted by reporters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Source path, lossily converted so any file name can be reported
    pub file: String,
    pub line: usize,
    pub encoded: String,
    pub decoded: String,
}
