//! Integration Tests Module
//!
//! End-to-end tests that verify complete scan runs and the two companion
//! utilities.

pub mod cli_smoke_test;
pub mod codec;
pub mod echo_server;
