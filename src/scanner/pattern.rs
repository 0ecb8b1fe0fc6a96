//! Stage 1: candidate pattern matching

use crate::errors::{AppError, AppResult};
use crate::types::{Candidate, ScanConfig};
use regex::Regex;
use std::path::Path;

/// Characters of the standard base64 alphabet, as a regex class
pub const BASE64_CLASS: &str = "[A-Za-z0-9+/]";

/// Build the default candidate pattern
///
/// A run of at least `min_chars` alphabet characters followed by one
/// correctly padded final quantum (`xxxx`, `xxx=` or `xx==`), so the
/// shortest match is `min_chars + 4` characters long.
pub fn default_pattern(min_chars: usize) -> String {
    format!(
        "(({c}{{{min},}})({c}{{4}}|{c}{{3}}=|{c}{{2}}==))",
        c = BASE64_CLASS,
        min = min_chars
    )
}

/// Compiled scan pattern
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
    custom: bool,
}

impl PatternMatcher {
    /// Compile a custom pattern, replacing the default entirely
    pub fn new(pattern: &str) -> AppResult<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            custom: true,
        })
    }

    /// Compile the default pattern for the given minimum length
    ///
    /// The built-in pattern only fails to compile when `min_chars` is too
    /// large for the regex engine, which is a configuration problem.
    pub fn with_min_chars(min_chars: usize) -> AppResult<Self> {
        let regex = Regex::new(&default_pattern(min_chars)).map_err(|e| {
            AppError::Config(format!(
                "min_chars {} is too large for the default pattern: {}",
                min_chars, e
            ))
        })?;
        Ok(Self {
            regex,
            custom: false,
        })
    }

    /// Custom pattern when configured, default pattern otherwise
    pub fn from_config(config: &ScanConfig) -> AppResult<Self> {
        match config.pattern.as_deref() {
            Some(pattern) => Self::new(pattern),
            None => Self::with_min_chars(config.min_chars),
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_custom(&self) -> bool {
        self.custom
    }

    /// All non-empty, non-overlapping matches in left-to-right order
    pub fn find_matches<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex
            .find_iter(line)
            .map(|m| m.as_str())
            .filter(|m| !m.is_empty())
    }

    /// Matches of `line` tagged with their file/line context
    pub fn find_candidates<'a>(
        &'a self,
        line: &'a str,
        source: &'a Path,
        line_number: usize,
    ) -> impl Iterator<Item = Candidate<'a>> + 'a {
        self.find_matches(line).map(move |text| Candidate {
            text,
            source,
            line: line_number,
        })
    }
}
