//! Sample essay prompt builder.
//!
//! Builds the instruction sent to the completion endpoint when asking for
//! one sample student essay at an assigned quality level.

use crate::quality::QualityLevel;
use crate::roster::GradeSubjectPair;

use super::Prompt;

/// System prompt for sample essay generation.
pub const ESSAY_SYSTEM_PROMPT: &str = r#"You are simulating student writing for teacher training material.

You write essays exactly as a real student of the stated grade level would, including the flaws implied by the assigned quality level. Do not break character, do not add commentary about the quality level, and do not include a title unless a student at that level plausibly would."#;

/// User prompt template for sample essay generation.
const ESSAY_USER_TEMPLATE: &str = r#"Write a sample essay as a {grade} student responding to this {subject} assignment:

{assignment}

The essay should read as {quality_label}-grade work: {quality_description}.

Write only the essay text."#;

/// Builds the essay-generation prompt for a pair, assignment, and
/// quality level.
pub fn build_essay_prompt(
    pair: &GradeSubjectPair,
    assignment: &str,
    quality: QualityLevel,
) -> Prompt {
    let user = ESSAY_USER_TEMPLATE
        .replace("{grade}", &pair.grade)
        .replace("{subject}", &pair.subject)
        .replace("{assignment}", assignment)
        .replace("{quality_label}", quality.label())
        .replace("{quality_description}", quality.description());

    Prompt::new(ESSAY_SYSTEM_PROMPT, user)
}
