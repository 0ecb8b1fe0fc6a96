//! Ferret Finder
//!
//! Scans text files for base64-encoded substrings that decode to printable
//! text, and ships two small companions: an HTTP echo/decode server and
//! base64 file encode/decode helpers.

pub mod cli;
pub mod codec;
pub mod config;
pub mod errors;
pub mod processor;
pub mod scanner;
pub mod server;
pub mod shared;
pub mod types;
