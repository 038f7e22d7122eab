pub mod config;
pub mod diagnostics;
pub mod stdio_writer;
