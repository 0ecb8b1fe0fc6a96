pub mod base;
pub mod file_scanner;

pub use base::*;
pub use file_scanner::*;
