//! Stage 4: reporting accepted results
//!
//! Reporters are constructed by the caller and handed to the scan, so the
//! output channel is explicit rather than a process-wide logger.

use crate::errors::AppResult;
use crate::types::{DecodedResult, Finding};
use std::io::Write;
use tracing::info;

/// Sink for accepted results
pub trait FindingReporter {
    /// Called once per accepted result, in scan order
    fn report(&mut self, result: &DecodedResult<'_>) -> AppResult<()>;
}

/// Emits one structured INFO event per finding
#[derive(Debug, Default)]
pub struct LogReporter;

impl FindingReporter for LogReporter {
    fn report(&mut self, result: &DecodedResult<'_>) -> AppResult<()> {
        if let Some(decoded) = result.decoded_text() {
            info!(
                file = %result.candidate.source.display(),
                line = result.candidate.line,
                encoded = result.candidate.text,
                decoded = decoded,
                "Valid base64 string found"
            );
        }
        Ok(())
    }
}

/// Writes one JSON object per finding, newline separated
pub struct JsonLinesReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FindingReporter for JsonLinesReporter<W> {
    fn report(&mut self, result: &DecodedResult<'_>) -> AppResult<()> {
        if let Some(finding) = result.to_finding() {
            // Serialize the whole line before writing so output never holds a partial object
            let mut line = serde_json::to_vec(&finding)?;
            line.push(b'\n');
            self.writer.write_all(&line)?;
            self.writer.flush()?;
        }
        Ok(())
    }
}

/// Collects findings in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    findings: Vec<Finding>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

impl FindingReporter for MemoryReporter {
    fn report(&mut self, result: &DecodedResult<'_>) -> AppResult<()> {
        if let Some(finding) = result.to_finding() {
            self.findings.push(finding);
        }
        Ok(())
    }
}
