//! Candidate extraction and validation pipeline
//!
//! Each line goes through four stages:
//! 1. `pattern`: regex match produces candidate substrings
//! 2. `validator`: strict standard base64 decode
//! 3. `validator`: UTF-8 and printable-text checks
//! 4. `reporter`: accepted results are handed to the injected reporter
//!
//! Rejections never abort a scan; they are logged at DEBUG and counted.

pub mod pattern;
pub mod reporter;
pub mod validator;

pub use pattern::{default_pattern, PatternMatcher};
pub use reporter::{FindingReporter, JsonLinesReporter, LogReporter, MemoryReporter};
pub use validator::{evaluate, first_non_printable, is_printable};

use crate::errors::AppResult;
use crate::types::{DecodedResult, ScanConfig, ScanStats, Verdict};
use std::path::Path;
use tracing::debug;

/// Line-level pipeline: match, decode, validate, report
#[derive(Debug, Clone)]
pub struct CandidatePipeline {
    matcher: PatternMatcher,
}

impl CandidatePipeline {
    pub fn new(matcher: PatternMatcher) -> Self {
        Self { matcher }
    }

    /// Compile the configured pattern; a bad custom pattern is an error
    pub fn from_config(config: &ScanConfig) -> AppResult<Self> {
        Ok(Self::new(PatternMatcher::from_config(config)?))
    }

    pub fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    /// Decoded results for every candidate in `line`, accepted or not
    pub fn evaluate_line<'a>(
        &'a self,
        line: &'a str,
        source: &'a Path,
        line_number: usize,
    ) -> impl Iterator<Item = DecodedResult<'a>> + 'a {
        self.matcher
            .find_candidates(line, source, line_number)
            .map(evaluate)
    }

    /// Run all four stages over one line, returning the number of findings
    pub fn process_line(
        &self,
        line: &str,
        source: &Path,
        line_number: usize,
        stats: &mut ScanStats,
        reporter: &mut dyn FindingReporter,
    ) -> AppResult<usize> {
        let mut found = 0;
        for result in self.evaluate_line(line, source, line_number) {
            stats.record(&result.verdict);
            match &result.verdict {
                Verdict::Printable => {
                    reporter.report(&result)?;
                    found += 1;
                }
                Verdict::DecodeFailed(e) => {
                    debug!(
                        encoded = result.candidate.text,
                        verdict = result.verdict.label(),
                        error = %e,
                        "Failed to decode base64"
                    );
                }
                Verdict::InvalidUtf8(e) => {
                    debug!(
                        encoded = result.candidate.text,
                        verdict = result.verdict.label(),
                        decoded = %String::from_utf8_lossy(&result.decoded),
                        error = %e,
                        "Invalid UTF-8 decoded string"
                    );
                }
                Verdict::NonPrintable { offset, character } => {
                    debug!(
                        encoded = result.candidate.text,
                        verdict = result.verdict.label(),
                        decoded = %String::from_utf8_lossy(&result.decoded),
                        offset = *offset,
                        character = ?character,
                        "Decoded string contains non-printable characters"
                    );
                }
            }
        }
        Ok(found)
    }
}
