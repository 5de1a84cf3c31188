//! Record types produced by the generation stages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::quality::QualityLevel;
use crate::roster::GradeSubjectPair;

/// The assignment prompts generated for one grade/subject pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSet {
    /// Unique identifier for this set.
    pub id: String,
    /// The pair these prompts were generated for.
    pub pair: GradeSubjectPair,
    /// Cleaned prompt lines, at most ten. Fewer is accepted silently.
    pub prompts: Vec<String>,
    /// Timestamp when this set was generated.
    pub created_at: DateTime<Utc>,
}

impl PromptSet {
    /// Creates a new prompt set for a pair.
    pub fn new(pair: GradeSubjectPair, prompts: Vec<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            pair,
            prompts,
            created_at: Utc::now(),
        }
    }
}

/// A sample essay generated for one grade/subject pair.
///
/// `essay` is `None` when the remote call failed; the assigned quality
/// level and the assignment used are still recorded so the failure is
/// visible in exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EssayRecord {
    /// Unique identifier for this record.
    pub id: String,
    /// The pair this essay was generated for.
    pub pair: GradeSubjectPair,
    /// Quality level assigned at generation time.
    pub quality: QualityLevel,
    /// The assignment prompt the essay responds to.
    pub assignment: String,
    /// Generated essay text, absent when the remote call failed.
    pub essay: Option<String>,
    /// Timestamp when this record was created.
    pub created_at: DateTime<Utc>,
}

impl EssayRecord {
    /// Creates a new essay record.
    pub fn new(
        pair: GradeSubjectPair,
        quality: QualityLevel,
        assignment: impl Into<String>,
        essay: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            pair,
            quality,
            assignment: assignment.into(),
            essay,
            created_at: Utc::now(),
        }
    }

    /// Returns true when the remote call produced essay text.
    pub fn has_essay(&self) -> bool {
        self.essay.is_some()
    }
}

/// Prompt sets keyed by pair, accumulated over one run.
pub type PromptMap = HashMap<GradeSubjectPair, PromptSet>;

/// Essay records keyed by pair, accumulated over one run.
pub type EssayMap = HashMap<GradeSubjectPair, EssayRecord>;
