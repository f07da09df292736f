//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, SEO thresholds, sentinel values)
//! - Logging option types
//! - The library `Config` struct
//! - The command-line surface of the binary

pub mod cli;
mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
