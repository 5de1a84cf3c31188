//! Grade/subject roster for generation runs.
//!
//! A run iterates over a fixed roster of (grade level, subject) pairs.
//! The default roster is defined in-source; the CLI accepts an override
//! in `"grade:subject,grade:subject"` form.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RosterError;

/// A (grade level, subject) pair identifying a request context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradeSubjectPair {
    /// Grade level, e.g. "7th grade".
    pub grade: String,
    /// Subject, e.g. "Biology".
    pub subject: String,
}

impl GradeSubjectPair {
    /// Creates a new pair from non-empty grade and subject strings.
    pub fn new(grade: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            grade: grade.into(),
            subject: subject.into(),
        }
    }

    /// Stable key used for result maps and export filenames.
    pub fn key(&self) -> String {
        format!("{}/{}", self.grade, self.subject)
    }
}

impl fmt::Display for GradeSubjectPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.grade, self.subject)
    }
}

/// Returns the default in-source roster used when no `--pairs` override
/// is given.
pub fn default_roster() -> Vec<GradeSubjectPair> {
    vec![
        GradeSubjectPair::new("5th grade", "Science"),
        GradeSubjectPair::new("7th grade", "English"),
        GradeSubjectPair::new("8th grade", "History"),
        GradeSubjectPair::new("10th grade", "Biology"),
        GradeSubjectPair::new("12th grade", "Literature"),
    ]
}

/// Parses a comma-separated list of `grade:subject` specs.
///
/// # Errors
///
/// Returns `RosterError` when a spec has no colon or either side is
/// empty after trimming.
pub fn parse_pair_specs(specs: &str) -> Result<Vec<GradeSubjectPair>, RosterError> {
    let mut pairs = Vec::new();

    for spec in specs.split(',') {
        let spec = spec.trim();
        if spec.is_empty() {
            continue;
        }

        let (grade, subject) = spec
            .split_once(':')
            .ok_or_else(|| RosterError::InvalidSpec(spec.to_string()))?;

        let grade = grade.trim();
        let subject = subject.trim();

        if grade.is_empty() {
            return Err(RosterError::EmptyGrade(spec.to_string()));
        }
        if subject.is_empty() {
            return Err(RosterError::EmptySubject(spec.to_string()));
        }

        pairs.push(GradeSubjectPair::new(grade, subject));
    }

    Ok(pairs)
}
