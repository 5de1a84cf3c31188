//! Command-line interface for essayforge.
//!
//! Provides commands for assignment prompt generation, sample essay
//! generation, and full runs with optional JSON export.

mod commands;

pub use commands::{parse_cli, run, run_with_cli};
