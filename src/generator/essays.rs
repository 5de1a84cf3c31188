//! Sample essay generator.
//!
//! For each grade/subject pair this generator looks up a previously
//! generated assignment by index, assigns a random quality level, and
//! issues one completion call. Pairs with no prompt set or an
//! out-of-range index are skipped; a failed remote call is recorded as
//! an essay-less record and processing continues.

use std::sync::Arc;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::llm::{GenerationRequest, LlmProvider, Message};
use crate::prompts::build_essay_prompt;
use crate::quality::QualityLevel;
use crate::roster::GradeSubjectPair;

use super::error::{GeneratorError, GeneratorResult};
use super::types::{EssayMap, EssayRecord, PromptMap};

/// Configuration for the essay generator.
#[derive(Debug, Clone)]
pub struct EssayGeneratorConfig {
    /// Temperature for LLM generation.
    pub temperature: f64,
    /// Nucleus sampling parameter.
    pub top_p: f64,
    /// Maximum tokens for the LLM response.
    pub max_tokens: u32,
    /// Optional seed for deterministic quality sampling.
    pub seed: Option<u64>,
}

impl Default for EssayGeneratorConfig {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            top_p: 0.95,
            max_tokens: 2000,
            seed: None,
        }
    }
}

impl EssayGeneratorConfig {
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

    /// Sets a fixed seed for quality sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generates sample essays, one completion call per pair.
pub struct EssayGenerator {
    llm_client: Arc<dyn LlmProvider>,
    config: EssayGeneratorConfig,
}

impl std::fmt::Debug for EssayGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EssayGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl EssayGenerator {
    /// Creates a new essay generator with the given LLM client and
    /// configuration.
    pub fn new(llm_client: Arc<dyn LlmProvider>, config: EssayGeneratorConfig) -> Self {
        Self { llm_client, config }
    }

    /// Creates a new essay generator with default configuration.
    pub fn with_defaults(llm_client: Arc<dyn LlmProvider>) -> Self {
        Self::new(llm_client, EssayGeneratorConfig::default())
    }

    /// Generates one sample essay per pair, sequentially.
    ///
    /// For each pair the assignment at `prompt_index` within the pair's
    /// prompt set seeds the essay. Pairs absent from `prompt_map` and
    /// pairs whose set is shorter than `prompt_index + 1` are logged and
    /// skipped without a record. A remote-call failure is logged and
    /// recorded with an absent essay body; remaining pairs are still
    /// processed.
    pub async fn generate_all(
        &self,
        pairs: &[GradeSubjectPair],
        prompt_map: &PromptMap,
        prompt_index: usize,
    ) -> EssayMap {
        let mut rng = match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };

        let mut essays = EssayMap::new();

        for pair in pairs {
            let Some(set) = prompt_map.get(pair) else {
                tracing::warn!(pair = %pair, "No prompts generated for pair, skipping essay");
                continue;
            };

            let Some(assignment) = set.prompts.get(prompt_index) else {
                tracing::warn!(
                    pair = %pair,
                    index = prompt_index,
                    available = set.prompts.len(),
                    "Prompt index out of range for pair, skipping essay"
                );
                continue;
            };

            let quality = QualityLevel::sample(&mut rng);

            let record = match self.request_essay(pair, assignment, quality).await {
                Ok(text) => {
                    tracing::info!(pair = %pair, quality = %quality, "Generated sample essay");
                    EssayRecord::new(pair.clone(), quality, assignment.clone(), Some(text))
                }
                Err(e) => {
                    tracing::warn!(pair = %pair, quality = %quality, error = %e, "Essay generation failed, recording absent essay");
                    EssayRecord::new(pair.clone(), quality, assignment.clone(), None)
                }
            };

            essays.insert(pair.clone(), record);
        }

        essays
    }

    /// Issues the single completion call for one essay.
    async fn request_essay(
        &self,
        pair: &GradeSubjectPair,
        assignment: &str,
        quality: QualityLevel,
    ) -> GeneratorResult<String> {
        let prompt = build_essay_prompt(pair, assignment, quality);

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
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GeneratorError::EmptyResponse {
                context: format!("sample essay for '{}'", pair),
            })?;

        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::generator::types::PromptSet;
    use crate::llm::{Choice, GenerationResponse, Usage};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedProvider {
        responses: Mutex<Vec<Result<String, LlmError>>>,
        calls: Mutex<usize>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<Result<String, LlmError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                calls: Mutex::new(0),
            }
        }

        fn call_count(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn generate(
            &self,
            request: GenerationRequest,
        ) -> Result<GenerationResponse, LlmError> {
            *self.calls.lock().unwrap() += 1;
            let mut responses = self.responses.lock().unwrap();
            let next = responses.remove(0)?;
            Ok(GenerationResponse {
                id: "scripted".to_string(),
                model: request.model,
                choices: vec![Choice {
                    index: 0,
                    message: Message::assistant(next),
                    finish_reason: "stop".to_string(),
                }],
                usage: Usage {
                    prompt_tokens: 0,
                    completion_tokens: 0,
                    total_tokens: 0,
                },
            })
        }
    }

    fn prompt_map_with(pair: &GradeSubjectPair, prompts: Vec<&str>) -> PromptMap {
        let mut map = PromptMap::new();
        map.insert(
            pair.clone(),
            PromptSet::new(pair.clone(), prompts.into_iter().map(String::from).collect()),
        );
        map
    }

    #[tokio::test]
    async fn test_skips_pair_missing_from_prompt_map() {
        let pair = GradeSubjectPair::new("7th grade", "Biology");
        let provider = Arc::new(ScriptedProvider::new(vec![]));
        let generator = EssayGenerator::with_defaults(provider.clone());

        let essays = generator
            .generate_all(&[pair], &PromptMap::new(), 0)
            .await;

        assert!(essays.is_empty());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_skips_out_of_range_index() {
        let pair = GradeSubjectPair::new("7th grade", "Biology");
        let prompt_map = prompt_map_with(&pair, vec!["Explain photosynthesis."]);
        let provider = Arc::new(ScriptedProvider::new(vec![]));
        let generator = EssayGenerator::with_defaults(provider.clone());

        let essays = generator.generate_all(&[pair], &prompt_map, 1).await;

        assert!(essays.is_empty());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_records_essay_on_success() {
        let pair = GradeSubjectPair::new("7th grade", "Biology");
        let prompt_map = prompt_map_with(&pair, vec!["Explain photosynthesis."]);
        let provider = Arc::new(ScriptedProvider::new(vec![Ok(
            "Plants make food from sunlight.".to_string(),
        )]));
        let generator = EssayGenerator::new(
            provider,
            EssayGeneratorConfig::default().with_seed(11),
        );

        let essays = generator.generate_all(&[pair.clone()], &prompt_map, 0).await;

        let record = essays.get(&pair).expect("record for pair");
        assert_eq!(
            record.essay.as_deref(),
            Some("Plants make food from sunlight.")
        );
        assert_eq!(record.assignment, "Explain photosynthesis.");
        assert!(QualityLevel::all().contains(&record.quality));
    }

    #[tokio::test]
    async fn test_failure_records_absent_essay_and_continues() {
        let first = GradeSubjectPair::new("5th grade", "Science");
        let second = GradeSubjectPair::new("8th grade", "History");

        let mut prompt_map = prompt_map_with(&first, vec!["Describe the water cycle."]);
        prompt_map.extend(prompt_map_with(&second, vec!["Explain the causes of WWI."]));

        let provider = Arc::new(ScriptedProvider::new(vec![
            Err(LlmError::ApiError {
                code: 500,
                message: "upstream error".to_string(),
            }),
            Ok("The war started for many reasons.".to_string()),
        ]));
        let generator = EssayGenerator::with_defaults(provider);

        let essays = generator
            .generate_all(&[first.clone(), second.clone()], &prompt_map, 0)
            .await;

        assert_eq!(essays.len(), 2);
        assert!(essays.get(&first).unwrap().essay.is_none());
        assert!(essays.get(&second).unwrap().essay.is_some());
    }

    #[tokio::test]
    async fn test_blank_essay_response_recorded_as_absent() {
        let pair = GradeSubjectPair::new("7th grade", "Biology");
        let prompt_map = prompt_map_with(&pair, vec!["Explain photosynthesis."]);
        let provider = Arc::new(ScriptedProvider::new(vec![Ok("   ".to_string())]));
        let generator = EssayGenerator::with_defaults(provider);

        let essays = generator.generate_all(&[pair.clone()], &prompt_map, 0).await;

        assert!(essays.get(&pair).unwrap().essay.is_none());
    }

    #[tokio::test]
    async fn test_seeded_quality_is_reproducible() {
        let pair = GradeSubjectPair::new("7th grade", "Biology");
        let prompt_map = prompt_map_with(&pair, vec!["Explain photosynthesis."]);

        let mut qualities = Vec::new();
        for _ in 0..2 {
            let provider = Arc::new(ScriptedProvider::new(vec![Ok("Essay.".to_string())]));
            let generator =
                EssayGenerator::new(provider, EssayGeneratorConfig::default().with_seed(42));
            let essays = generator.generate_all(&[pair.clone()], &prompt_map, 0).await;
            qualities.push(essays.get(&pair).unwrap().quality);
        }

        assert_eq!(qualities[0], qualities[1]);
    }
}
