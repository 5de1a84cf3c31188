//! Assignment prompt builder.
//!
//! Builds the instruction sent to the completion endpoint when asking for
//! a numbered list of assignment topics for one grade/subject pair.

use crate::roster::GradeSubjectPair;

use super::Prompt;

/// System prompt for assignment topic generation.
pub const ASSIGNMENT_SYSTEM_PROMPT: &str = r#"You are an experienced curriculum designer writing essay assignments for school students.

Requirements for generated assignments:
1. Each assignment must be a single self-contained writing prompt
2. Assignments must be age-appropriate for the stated grade level
3. Assignments must stay within the stated subject
4. Vary the angle across the list: analysis, argument, reflection, comparison
5. Do not include grading criteria or meta commentary

Output one assignment per line as a numbered list, with no additional text before or after the list."#;

/// User prompt template for assignment topic generation.
const ASSIGNMENT_USER_TEMPLATE: &str = r#"Generate {count} essay assignment prompts for {grade} students in {subject}.

Each prompt should:
- Be one or two sentences long
- Ask for a written essay, not a project or presentation
- Be specific enough that two students would not write identical essays

Output ONLY the numbered list, one assignment per line."#;

/// Builds the assignment-generation prompt for a pair.
///
/// `count` is the number of assignments requested from the model. The
/// caller still truncates the parsed response independently, since the
/// model is free to ignore the requested count.
pub fn build_assignment_prompt(pair: &GradeSubjectPair, count: usize) -> Prompt {
    let user = ASSIGNMENT_USER_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{grade}", &pair.grade)
        .replace("{subject}", &pair.subject);

    Prompt::new(ASSIGNMENT_SYSTEM_PROMPT, user)
}
