//! CLI command execution.

use std::io::Read;

use log::info;

use crate::cli::args::{AnalyzeArgs, Command, KotoriArgs, TokenizerArg};
use crate::cli::output;
use crate::error::{KotoriError, Result};
use crate::pipeline::{AnalysisPipeline, PipelineConfig, TokenizerKind};
use crate::samples::samples;

/// Execute the parsed CLI command.
pub fn execute_command(args: KotoriArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => execute_analyze(&args, analyze_args),
        Command::Samples(samples_args) => {
            if samples_args.analyze {
                let pipeline = AnalysisPipeline::new()?;
                for sample in samples() {
                    let result = pipeline.analyze(sample)?;
                    output::print_result(&args, sample, &result)?;
                    println!();
                }
                Ok(())
            } else {
                output::print_samples(&args, samples())
            }
        }
    }
}

fn execute_analyze(args: &KotoriArgs, analyze_args: &AnalyzeArgs) -> Result<()> {
    let config = PipelineConfig {
        tokenizer: match analyze_args.tokenizer {
            TokenizerArg::ScriptWord => TokenizerKind::ScriptWord,
            TokenizerArg::Whitespace => TokenizerKind::Whitespace,
        },
        include_punctuation: analyze_args.punctuation,
        parallel: analyze_args.parallel,
        lexicon_path: analyze_args.lexicon.clone(),
        gazetteer_path: analyze_args.gazetteer.clone(),
    };

    let pipeline = AnalysisPipeline::with_config(config)?;
    let text = resolve_input(analyze_args)?;

    info!("analyzing {} bytes of input", text.len());
    let result = pipeline.analyze(&text)?;
    output::print_result(args, &text, &result)
}

/// Pick the input text: positional argument, sample index, or stdin.
fn resolve_input(analyze_args: &AnalyzeArgs) -> Result<String> {
    if let Some(text) = &analyze_args.text {
        return Ok(text.clone());
    }
    if let Some(index) = analyze_args.sample {
        return samples()
            .get(index)
            .map(|s| s.to_string())
            .ok_or_else(|| {
                KotoriError::invalid_argument(format!(
                    "sample index {index} out of range (0..{})",
                    samples().len()
                ))
            });
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim_end_matches('\n').to_string())
}
