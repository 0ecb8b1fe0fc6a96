//! Stages 2 and 3: decode a candidate and decide whether it is printable text

use crate::shared::base64_helpers::decode_standard;
use crate::types::{Candidate, DecodedResult, Verdict};

/// Space through tilde, plus newline and tab
pub fn is_printable(c: char) -> bool {
    matches!(c, ' '..='~' | '\n' | '\t')
}

/// Byte offset and value of the first character that is not printable
pub fn first_non_printable(text: &str) -> Option<(usize, char)> {
    text.char_indices().find(|&(_, c)| !is_printable(c))
}

/// Decode a candidate and classify the result
///
/// No partial acceptance: one disqualifying character rejects the whole
/// candidate.
pub fn evaluate(candidate: Candidate<'_>) -> DecodedResult<'_> {
    let decoded = match decode_standard(candidate.text) {
        Ok(bytes) => bytes,
        Err(e) => {
            return DecodedResult {
                candidate,
                decoded: Vec::new(),
                verdict: Verdict::DecodeFailed(e),
            }
        }
    };

    let verdict = match std::str::from_utf8(&decoded) {
        Err(e) => Verdict::InvalidUtf8(e),
        Ok(text) => match first_non_printable(text) {
            Some((offset, character)) => Verdict::NonPrintable { offset, character },
            None => Verdict::Printable,
        },
    };

    DecodedResult {
        candidate,
        decoded,
        verdict,
    }
}
