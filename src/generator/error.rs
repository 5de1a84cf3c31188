//! Error types for the generation stages.

use thiserror::Error;

/// Errors that can occur while generating assignments or essays.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Error from the LLM provider.
    #[error("LLM error: {0}")]
    LlmError(String),

    /// The LLM returned a response with no usable content.
    #[error("Empty LLM response for {context}")]
    EmptyResponse { context: String },

    /// No prompt set exists for the requested pair.
    #[error("No prompt set for pair '{0}'")]
    MissingPromptSet(String),

    /// The configured prompt index does not exist in the pair's prompt set.
    #[error("Prompt index {index} out of range for pair '{pair}' ({len} prompts)")]
    PromptIndexOutOfRange {
        pair: String,
        index: usize,
        len: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::error::LlmError> for GeneratorError {
    fn from(err: crate::error::LlmError) -> Self {
        GeneratorError::LlmError(err.to_string())
    }
}

/// Result type alias for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
