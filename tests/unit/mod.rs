//! Unit Tests Module

pub mod pattern_matcher;
