//! Command implementations for glerbl CLI
//!
//! Each command lives in its own module with its clap arguments.

pub mod config;
pub mod list;
pub mod run;
