//! Assignment prompt generator.
//!
//! For each grade/subject pair this generator issues one completion call,
//! splits the response on line breaks, strips leading enumeration, and
//! keeps the first ten non-empty lines. There is no retry and no padding
//! when the model returns fewer lines than requested.

use std::sync::Arc;

use crate::llm::{GenerationRequest, LlmProvider, Message};
use crate::prompts::build_assignment_prompt;
use crate::roster::GradeSubjectPair;
use crate::utils::clean_prompt_lines;

use super::error::{GeneratorError, GeneratorResult};
use super::types::{PromptMap, PromptSet};

/// Maximum number of prompts retained per pair.
pub const MAX_PROMPTS: usize = 10;

/// Configuration for the assignment generator.
#[derive(Debug, Clone)]
pub struct AssignmentGeneratorConfig {
    /// Temperature for LLM generation.
    pub temperature: f64,
    /// Nucleus sampling parameter.
    pub top_p: f64,
    /// Maximum tokens for the LLM response.
    pub max_tokens: u32,
}

impl Default for AssignmentGeneratorConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_p: 0.95,
            max_tokens: 1000,
        }
    }
}

impl AssignmentGeneratorConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the top_p parameter.
    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p.clamp(0.0, 1.0);
        self
    }

    /// Sets the maximum tokens for responses.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Generates assignment prompt sets, one completion call per pair.
pub struct AssignmentGenerator {
    llm_client: Arc<dyn LlmProvider>,
    config: AssignmentGeneratorConfig,
}

impl std::fmt::Debug for AssignmentGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssignmentGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AssignmentGenerator {
    /// Creates a new assignment generator with the given LLM client and
    /// configuration.
    pub fn new(llm_client: Arc<dyn LlmProvider>, config: AssignmentGeneratorConfig) -> Self {
        Self { llm_client, config }
    }

    /// Creates a new assignment generator with default configuration.
    pub fn with_defaults(llm_client: Arc<dyn LlmProvider>) -> Self {
        Self::new(llm_client, AssignmentGeneratorConfig::default())
    }

    /// Generates a prompt set for a single pair.
    ///
    /// Issues exactly one completion call. The response is split on line
    /// breaks, enumeration is stripped, and at most [`MAX_PROMPTS`]
    /// non-empty lines are kept.
    pub async fn generate_for_pair(&self, pair: &GradeSubjectPair) -> GeneratorResult<PromptSet> {
        let prompt = build_assignment_prompt(pair, MAX_PROMPTS);

        let request = GenerationRequest::new(
            "",
            vec![Message::system(prompt.system), Message::user(prompt.user)],
        )
        .with_temperature(self.config.temperature)
        .with_max_tokens(self.config.max_tokens)
        .with_top_p(self.config.top_p);

        let response = self.llm_client.generate(request).await?;

        let content = response
            .first_content()
            .ok_or_else(|| GeneratorError::EmptyResponse {
                context: format!("assignment prompts for '{}'", pair),
            })?;

        let prompts = clean_prompt_lines(content, MAX_PROMPTS);
        if prompts.is_empty() {
            return Err(GeneratorError::EmptyResponse {
                context: format!("assignment prompts for '{}'", pair),
            });
        }

        tracing::info!(
            pair = %pair,
            prompts = prompts.len(),
            "Generated assignment prompts"
        );

        Ok(PromptSet::new(pair.clone(), prompts))
    }

    /// Generates prompt sets for every pair, sequentially.
    ///
    /// A failed pair is logged and omitted from the result map;
    /// processing continues with the remaining pairs.
    pub async fn generate_all(&self, pairs: &[GradeSubjectPair]) -> PromptMap {
        let mut sets = PromptMap::new();

        for pair in pairs {
            match self.generate_for_pair(pair).await {
                Ok(set) => {
                    sets.insert(pair.clone(), set);
                }
                Err(e) => {
                    tracing::warn!(pair = %pair, error = %e, "Skipping pair after prompt generation failure");
                }
            }
        }

        sets
    }
}
