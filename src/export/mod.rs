//! JSON export of run results.
//!
//! A run's prompt sets and essay records can be written to a single
//! pretty-printed JSON file for downstream reuse. Entries are ordered by
//! the roster order of the run so exports are stable across runs with
//! the same roster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ExportError;
use crate::generator::{EssayMap, EssayRecord, PromptMap, PromptSet};
use crate::roster::GradeSubjectPair;

/// Serializable snapshot of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunExport {
    /// Timestamp when the export was assembled.
    pub generated_at: DateTime<Utc>,
    /// Model identifier used for the run.
    pub model: String,
    /// Prompt sets in roster order.
    pub prompt_sets: Vec<PromptSet>,
    /// Essay records in roster order.
    pub essays: Vec<EssayRecord>,
}

impl RunExport {
    /// Assembles an export from the run's result maps, ordered by the
    /// roster the run iterated over.
    pub fn new(
        model: impl Into<String>,
        roster: &[GradeSubjectPair],
        prompt_map: &PromptMap,
        essay_map: &EssayMap,
    ) -> Self {
        let prompt_sets = roster
            .iter()
            .filter_map(|pair| prompt_map.get(pair).cloned())
            .collect();
        let essays = roster
            .iter()
            .filter_map(|pair| essay_map.get(pair).cloned())
            .collect();

        Self {
            generated_at: Utc::now(),
            model: model.into(),
            prompt_sets,
            essays,
        }
    }

    /// Writes the export as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::NoResults` when the run produced no prompt
    /// sets at all, and IO/JSON errors otherwise.
    pub fn write_json(&self, path: &Path) -> Result<(), ExportError> {
        if self.prompt_sets.is_empty() {
            return Err(ExportError::NoResults);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;

        tracing::info!(
            path = %path.display(),
            prompt_sets = self.prompt_sets.len(),
            essays = self.essays.len(),
            "Wrote run export"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::QualityLevel;

    fn sample_run() -> (Vec<GradeSubjectPair>, PromptMap, EssayMap) {
        let pair = GradeSubjectPair::new("7th grade", "Biology");
        let roster = vec![pair.clone()];

        let mut prompt_map = PromptMap::new();
        prompt_map.insert(
            pair.clone(),
            PromptSet::new(pair.clone(), vec!["Explain photosynthesis.".to_string()]),
        );

        let mut essay_map = EssayMap::new();
        essay_map.insert(
            pair.clone(),
            EssayRecord::new(
                pair,
                QualityLevel::B,
                "Explain photosynthesis.",
                Some("Plants make food.".to_string()),
            ),
        );

        (roster, prompt_map, essay_map)
    }

    #[test]
    fn test_run_export_orders_by_roster() {
        let first = GradeSubjectPair::new("5th grade", "Science");
        let second = GradeSubjectPair::new("8th grade", "History");
        let roster = vec![first.clone(), second.clone()];

        let mut prompt_map = PromptMap::new();
        // Inserted in reverse of roster order.
        prompt_map.insert(
            second.clone(),
            PromptSet::new(second.clone(), vec!["b".to_string()]),
        );
        prompt_map.insert(
            first.clone(),
            PromptSet::new(first.clone(), vec!["a".to_string()]),
        );

        let export = RunExport::new("test-model", &roster, &prompt_map, &EssayMap::new());
        assert_eq!(export.prompt_sets[0].pair, first);
        assert_eq!(export.prompt_sets[1].pair, second);
        assert!(export.essays.is_empty());
    }

    #[test]
    fn test_write_json_round_trips() {
        let (roster, prompt_map, essay_map) = sample_run();
        let export = RunExport::new("test-model", &roster, &prompt_map, &essay_map);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        export.write_json(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: RunExport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.model, "test-model");
        assert_eq!(parsed.prompt_sets.len(), 1);
        assert_eq!(parsed.essays.len(), 1);
    }

    #[test]
    fn test_write_json_rejects_empty_run() {
        let export = RunExport::new(
            "test-model",
            &[],
            &PromptMap::new(),
            &EssayMap::new(),
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        let err = export.write_json(&path).unwrap_err();
        assert!(matches!(err, ExportError::NoResults));
        assert!(!path.exists());
    }
}
