//! Generation stages for classroom content.
//!
//! Two sequential one-shot generators built on the [`crate::llm`]
//! provider trait:
//!
//! - [`AssignmentGenerator`] produces up to ten assignment prompts per
//!   grade/subject pair.
//! - [`EssayGenerator`] produces one sample essay per pair at a randomly
//!   assigned quality level, seeded by a prompt from the first stage.
//!
//! Both process pairs strictly sequentially and never retry a failed
//! remote call.

pub mod assignments;
pub mod error;
pub mod essays;
pub mod types;

pub use assignments::{AssignmentGenerator, AssignmentGeneratorConfig, MAX_PROMPTS};
pub use error::{GeneratorError, GeneratorResult};
pub use essays::{EssayGenerator, EssayGeneratorConfig};
pub use types::{EssayMap, EssayRecord, PromptMap, PromptSet};
