pub mod codec;
pub mod scan;
pub mod serve;
