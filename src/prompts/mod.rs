//! LLM prompts for classroom content generation.
//!
//! This module contains the prompt templates and builders for the two
//! generation stages:
//!
//! - [`assignment`] - Prompts asking for a numbered list of assignment topics
//! - [`essay`] - Prompts asking for a sample student essay at a quality level
//!
//! # Usage
//!
//! ```
//! use essayforge::prompts::{build_assignment_prompt, build_essay_prompt};
//! use essayforge::quality::QualityLevel;
//! use essayforge::roster::GradeSubjectPair;
//!
//! let pair = GradeSubjectPair::new("7th grade", "Biology");
//! let assignment = build_assignment_prompt(&pair, 10);
//! let essay = build_essay_prompt(&pair, "Explain photosynthesis.", QualityLevel::B);
//! assert!(!assignment.user.is_empty());
//! assert!(!essay.system.is_empty());
//! ```

pub mod assignment;
pub mod essay;

pub use assignment::{build_assignment_prompt, ASSIGNMENT_SYSTEM_PROMPT};
pub use essay::{build_essay_prompt, ESSAY_SYSTEM_PROMPT};

/// A system/user prompt pair ready to send to an LLM.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// System prompt establishing the AI's role and constraints.
    pub system: String,
    /// User prompt with the specific generation request.
    pub user: String,
}

impl Prompt {
    /// Creates a new prompt with the given system and user messages.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}
