//! Subcommand handlers.
//!
//! Each handler takes its parsed arguments plus explicit reader/writer
//! handles, so tests drive them with in-memory buffers.

pub mod check;
pub mod config;
pub mod generate;
