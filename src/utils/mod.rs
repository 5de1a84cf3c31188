//! Utility functions shared across essayforge.

pub mod text;

pub use text::{clean_prompt_lines, strip_enumeration};
