//! CLI command definitions for essayforge.
//!
//! Three commands cover the two generation stages:
//! - `prompts`: generate assignment prompts for each roster pair
//! - `essays`: generate sample essays from a previously exported run
//! - `run`: both stages in sequence

use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use crate::export::RunExport;
use crate::generator::{
    AssignmentGenerator, EssayGenerator, EssayGeneratorConfig, EssayMap, PromptMap,
};
use crate::llm::{ChatClient, LlmProvider};
use crate::roster::{self, GradeSubjectPair};

/// Default model to use for generation.
const DEFAULT_MODEL: &str = "anthropic/claude-opus-4.5";

/// Classroom content generator for teacher training material.
#[derive(Parser)]
#[command(name = "essayforge")]
#[command(about = "Generate assignment prompts and graded sample essays with LLMs")]
#[command(version)]
#[command(
    long_about = "essayforge generates essay assignment prompts and sample student essays per grade/subject pair.\n\nEach sample essay is written at a quality level (A-F) drawn at random, simulating student performance tiers.\n\nExample usage:\n  essayforge run --pairs \"7th grade:Biology,10th grade:History\" --output run.json"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate assignment prompts for each roster pair.
    Prompts(PromptsArgs),

    /// Generate sample essays from a previously exported run.
    Essays(EssaysArgs),

    /// Run both stages: prompts, then one sample essay per pair.
    #[command(alias = "gen")]
    Run(RunArgs),
}

/// Arguments shared by all generation commands.
#[derive(Parser, Debug)]
pub struct GenerationArgs {
    /// LLM model to use for generation.
    #[arg(short = 'm', long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// OpenRouter API key (can also be set via OPENROUTER_API_KEY or
    /// LITELLM_API_KEY env var).
    #[arg(long, env = "OPENROUTER_API_KEY")]
    pub api_key: Option<String>,

    /// Roster override as comma-separated "grade:subject" pairs.
    /// Defaults to the in-source roster.
    #[arg(short = 'p', long)]
    pub pairs: Option<String>,

    /// Write the run results to this JSON file.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Print the run results as JSON instead of the text report.
    #[arg(short = 'j', long)]
    pub json: bool,
}

/// Arguments for `essayforge prompts`.
#[derive(Parser, Debug)]
pub struct PromptsArgs {
    #[command(flatten)]
    pub generation: GenerationArgs,
}

/// Arguments for `essayforge essays`.
#[derive(Parser, Debug)]
pub struct EssaysArgs {
    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Previously exported run JSON to read prompt sets from.
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Index of the prompt within each pair's set to seed the essay.
    #[arg(long, default_value = "0")]
    pub prompt_index: usize,

    /// Seed for deterministic quality-level sampling.
    #[arg(short = 's', long)]
    pub seed: Option<u64>,
}

/// Arguments for `essayforge run`.
#[derive(Parser, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Index of the prompt within each pair's set to seed the essay.
    #[arg(long, default_value = "0")]
    pub prompt_index: usize,

    /// Seed for deterministic quality-level sampling.
    #[arg(short = 's', long)]
    pub seed: Option<u64>,
}

/// Parse CLI arguments from the process environment.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI by parsing arguments from the process environment.
pub async fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli()).await
}

/// Run the CLI with the parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Prompts(args) => run_prompts_command(args).await,
        Commands::Essays(args) => run_essays_command(args).await,
        Commands::Run(args) => run_full_command(args).await,
    }
}

async fn run_prompts_command(args: PromptsArgs) -> anyhow::Result<()> {
    let roster = resolve_roster(args.generation.pairs.as_deref())?;
    let client = build_llm_client(args.generation.api_key.clone(), args.generation.model.clone())?;

    let generator = AssignmentGenerator::with_defaults(client);
    let prompt_map = generator.generate_all(&roster).await;

    let export = RunExport::new(
        args.generation.model,
        &roster,
        &prompt_map,
        &EssayMap::new(),
    );
    finish_run(&args.generation.output, args.generation.json, &roster, &export, &prompt_map, None)
}

async fn run_essays_command(args: EssaysArgs) -> anyhow::Result<()> {
    let input = load_run_export(&args.input)?;

    // Without a --pairs override, iterate the pairs the input run covered.
    let roster: Vec<GradeSubjectPair> = match args.generation.pairs.as_deref() {
        Some(specs) => resolve_roster(Some(specs))?,
        None => input.prompt_sets.iter().map(|s| s.pair.clone()).collect(),
    };

    let mut prompt_map = PromptMap::new();
    for set in &input.prompt_sets {
        prompt_map.insert(set.pair.clone(), set.clone());
    }

    let client = build_llm_client(args.generation.api_key.clone(), args.generation.model.clone())?;

    let mut config = EssayGeneratorConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let generator = EssayGenerator::new(client, config);
    let essay_map = generator
        .generate_all(&roster, &prompt_map, args.prompt_index)
        .await;

    let export = RunExport::new(args.generation.model, &roster, &prompt_map, &essay_map);
    finish_run(
        &args.generation.output,
        args.generation.json,
        &roster,
        &export,
        &prompt_map,
        Some(&essay_map),
    )
}

async fn run_full_command(args: RunArgs) -> anyhow::Result<()> {
    let roster = resolve_roster(args.generation.pairs.as_deref())?;
    let client = build_llm_client(args.generation.api_key.clone(), args.generation.model.clone())?;

    let assignment_generator = AssignmentGenerator::with_defaults(client.clone());
    let prompt_map = assignment_generator.generate_all(&roster).await;

    let mut config = EssayGeneratorConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let essay_generator = EssayGenerator::new(client, config);
    let essay_map = essay_generator
        .generate_all(&roster, &prompt_map, args.prompt_index)
        .await;

    let export = RunExport::new(args.generation.model, &roster, &prompt_map, &essay_map);
    finish_run(
        &args.generation.output,
        args.generation.json,
        &roster,
        &export,
        &prompt_map,
        Some(&essay_map),
    )
}

/// Writes the optional export file and prints the report.
fn finish_run(
    output: &Option<PathBuf>,
    as_json: bool,
    roster: &[GradeSubjectPair],
    export: &RunExport,
    prompt_map: &PromptMap,
    essay_map: Option<&EssayMap>,
) -> anyhow::Result<()> {
    if let Some(path) = output {
        export.write_json(path)?;
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(export)?);
        return Ok(());
    }

    print_report(roster, prompt_map, essay_map);
    Ok(())
}

/// Prints the human-readable run report.
fn print_report(
    roster: &[GradeSubjectPair],
    prompt_map: &PromptMap,
    essay_map: Option<&EssayMap>,
) {
    for pair in roster {
        println!("=== {} ===", pair);

        match prompt_map.get(pair) {
            Some(set) => {
                for (i, prompt) in set.prompts.iter().enumerate() {
                    println!("{:2}. {}", i + 1, prompt);
                }
            }
            None => println!("(no prompts generated)"),
        }

        if let Some(essays) = essay_map {
            match essays.get(pair) {
                Some(record) => {
                    println!();
                    println!("--- Sample essay (quality {}) ---", record.quality);
                    println!("Assignment: {}", record.assignment);
                    match &record.essay {
                        Some(text) => println!("\n{}", text),
                        None => println!("\n(essay generation failed)"),
                    }
                }
                None => println!("\n(no essay generated)"),
            }
        }

        println!();
    }
}

/// Resolves the roster from a `--pairs` override or the in-source default.
fn resolve_roster(pairs: Option<&str>) -> anyhow::Result<Vec<GradeSubjectPair>> {
    let roster = match pairs {
        Some(specs) => {
            let parsed = roster::parse_pair_specs(specs)?;
            if parsed.is_empty() {
                return Err(anyhow::anyhow!("--pairs produced an empty roster"));
            }
            parsed
        }
        None => roster::default_roster(),
    };
    Ok(roster)
}

/// Loads a previously exported run from disk.
fn load_run_export(path: &Path) -> anyhow::Result<RunExport> {
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "Input file does not exist: {}",
            path.display()
        ));
    }
    let content = std::fs::read_to_string(path)?;
    let export: RunExport = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse run export {}: {}", path.display(), e))?;
    Ok(export)
}

/// Builds the LLM client from CLI/env configuration.
fn build_llm_client(
    api_key: Option<String>,
    model: String,
) -> anyhow::Result<Arc<dyn LlmProvider>> {
    let resolved_api_key = api_key
        .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
        .or_else(|| std::env::var("LITELLM_API_KEY").ok());

    if let Some(key) = resolved_api_key {
        info!(model = %model, "Using OpenRouter with specified API key");
        Ok(Arc::new(ChatClient::with_openrouter_model(key, model)))
    } else {
        info!("Using LiteLLM-compatible client from environment");
        Ok(Arc::new(ChatClient::from_env().map_err(|e| {
            anyhow::anyhow!(
                "Failed to initialize LLM client: {}. Please provide --api-key or set OPENROUTER_API_KEY/LITELLM_API_KEY env var.",
                e
            )
        })?))
    }
}
