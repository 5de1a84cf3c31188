//! Quality levels for sample essay generation.
//!
//! A quality level simulates a student performance tier. It is assigned
//! uniformly at random at generation time and is independent of any
//! evaluation of the produced essay.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// The quality level assigned to a generated sample essay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityLevel {
    A,
    B,
    C,
    D,
    F,
}

impl QualityLevel {
    /// Returns all five quality levels in grade order.
    pub fn all() -> [QualityLevel; 5] {
        [
            QualityLevel::A,
            QualityLevel::B,
            QualityLevel::C,
            QualityLevel::D,
            QualityLevel::F,
        ]
    }

    /// Samples a quality level uniformly from the five labels.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> QualityLevel {
        let levels = Self::all();
        levels[rng.random_range(0..levels.len())]
    }

    /// Returns the single-letter label for this quality level.
    pub fn label(&self) -> &'static str {
        match self {
            QualityLevel::A => "A",
            QualityLevel::B => "B",
            QualityLevel::C => "C",
            QualityLevel::D => "D",
            QualityLevel::F => "F",
        }
    }

    /// Describes the writing characteristics expected at this level,
    /// used to steer essay generation.
    pub fn description(&self) -> &'static str {
        match self {
            QualityLevel::A => {
                "excellent work: clear thesis, well-organized paragraphs, strong evidence, varied vocabulary, virtually no errors"
            }
            QualityLevel::B => {
                "good work: solid structure and mostly clear arguments, with occasional awkward phrasing or minor errors"
            }
            QualityLevel::C => {
                "average work: a recognizable structure but underdeveloped ideas, repetitive wording, and several grammar mistakes"
            }
            QualityLevel::D => {
                "below-average work: weak organization, vague or off-topic passages, frequent grammar and spelling errors"
            }
            QualityLevel::F => {
                "failing work: little discernible structure, very short or incoherent passages, pervasive errors"
            }
        }
    }
}

impl std::fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
