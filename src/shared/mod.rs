//! Helpers shared between checks and configuration

pub mod glob;
