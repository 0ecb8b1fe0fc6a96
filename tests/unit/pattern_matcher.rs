//! Stage 1: pattern matching

use crate::common::samples::*;
use ferret_finder::errors::AppError;
use ferret_finder::scanner::{default_pattern, PatternMatcher};
use ferret_finder::types::ScanConfig;
use std::path::Path;

fn matches(matcher: &PatternMatcher, line: &str) -> Vec<String> {
    matcher.find_matches(line).map(str::to_string).collect()
}

#[test]
fn test_extracts_padded_token_from_line() {
    let matcher = PatternMatcher::with_min_chars(4).unwrap();
    assert_eq!(
        matches(&matcher, "token=SGVsbG8sIFdvcmxkIQ== done"),
        vec![HELLO_ENCODED.to_string()]
    );
}

#[test]
fn test_no_candidates_in_plain_text() {
    let matcher = PatternMatcher::with_min_chars(4).unwrap();
    assert!(matches(&matcher, "hello world, nothing to see here").is_empty());
    assert!(matches(&matcher, "").is_empty());
}

#[test]
fn test_unpadded_short_run_does_not_match() {
    let matcher = PatternMatcher::with_min_chars(4).unwrap();
    assert!(matches(&matcher, "QUFBQQ").is_empty());
}

#[test]
fn test_shortest_default_match_is_min_plus_quantum() {
    let matcher = PatternMatcher::with_min_chars(4).unwrap();
    assert_eq!(matches(&matcher, "QUFBQUFB"), vec!["QUFBQUFB".to_string()]);
    assert!(matches(&matcher, "QUFBQUE").is_empty());
}

#[test]
fn test_min_chars_excludes_shorter_runs() {
    let matcher = PatternMatcher::with_min_chars(12).unwrap();
    let line = format!("x {} y {}", SECRET_ENCODED, HELLO_ENCODED);
    assert_eq!(matches(&matcher, &line), vec![HELLO_ENCODED.to_string()]);
}

#[test]
fn test_matches_are_ordered_and_non_overlapping() {
    let matcher = PatternMatcher::with_min_chars(4).unwrap();
    let line = format!("a={} b={}", HELLO_ENCODED, FERRET_ENCODED);
    assert_eq!(
        matches(&matcher, &line),
        vec![HELLO_ENCODED.to_string(), FERRET_ENCODED.to_string()]
    );
}

#[test]
fn test_custom_pattern_replaces_default() {
    let config = ScanConfig::builder()
        .min_chars(100)
        .pattern("[A-Za-z0-9+/=]+")
        .build()
        .unwrap();
    let matcher = PatternMatcher::from_config(&config).unwrap();

    assert!(matcher.is_custom());
    assert_eq!(matcher.as_str(), "[A-Za-z0-9+/=]+");
    // min_chars is ignored once a custom pattern is set
    assert_eq!(matches(&matcher, "QUFBQQ"), vec!["QUFBQQ".to_string()]);
}

#[test]
fn test_default_pattern_from_config() {
    let config = ScanConfig::builder().min_chars(6).build().unwrap();
    let matcher = PatternMatcher::from_config(&config).unwrap();
    assert!(!matcher.is_custom());
    assert_eq!(matcher.as_str(), default_pattern(6));
}

#[test]
fn test_empty_matches_are_dropped() {
    let matcher = PatternMatcher::new("x*").unwrap();
    assert_eq!(matches(&matcher, "abxxc"), vec!["xx".to_string()]);
}

#[test]
fn test_invalid_pattern_is_a_pattern_error() {
    let err = PatternMatcher::new("(unclosed").unwrap_err();
    assert!(matches!(err, AppError::Pattern(_)));
    assert!(err.to_string().starts_with("Invalid regex pattern"));
}

#[test]
fn test_candidates_carry_context() {
    let matcher = PatternMatcher::with_min_chars(4).unwrap();
    let source = Path::new("notes.txt");
    let candidates: Vec<_> = matcher
        .find_candidates("k: c2VjcmV0", source, 7)
        .collect();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].text, SECRET_ENCODED);
    assert_eq!(candidates[0].source, source);
    assert_eq!(candidates[0].line, 7);
}
