//! Shared helpers used by the scanner, the echo server and the file codec.

pub mod base64_helpers;
