//! Error types for essayforge operations.
//!
//! Defines error types for the major subsystems:
//! - LLM API interactions
//! - Roster parsing
//! - Result export

use thiserror::Error;

/// Errors that can occur during LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing API key: OPENROUTER_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("Missing API base URL: LITELLM_API_BASE environment variable not set")]
    MissingApiBase,

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse LLM response: {0}")]
    ParseError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while parsing roster pair specs.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Invalid pair spec '{0}': expected 'grade:subject'")]
    InvalidSpec(String),

    #[error("Empty grade level in pair spec '{0}'")]
    EmptyGrade(String),

    #[error("Empty subject in pair spec '{0}'")]
    EmptySubject(String),
}

/// Errors that can occur while exporting run results.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: run produced no prompt sets")]
    NoResults,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
