//! Output formatting for CLI commands.

use crate::cli::args::{KotoriArgs, OutputFormat};
use crate::error::Result;
use crate::pipeline::AnalysisResult;

/// Print one analysis result in the selected format.
pub fn print_result(args: &KotoriArgs, text: &str, result: &AnalysisResult) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(args, result),
        OutputFormat::Human => {
            print_human(text, result);
            Ok(())
        }
    }
}

fn print_json(args: &KotoriArgs, result: &AnalysisResult) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

fn print_human(text: &str, result: &AnalysisResult) {
    println!("Text:      {text}");
    println!("Sentiment: {}", result.sentiment);
    println!("Language:  {}", result.language);
    println!("Category:  {}", result.category);

    println!("Tokens:    {}", result.token_texts().join(" | "));

    if result.entities.is_empty() {
        println!("Entities:  (none)");
    } else {
        println!("Entities:");
        for entity in &result.entities {
            println!("  {:<14} {}", entity.entity_type.to_string(), entity.text);
        }
    }

    println!("POS tags:");
    for tagged in &result.pos_tags {
        println!("  {:<14} {}", tagged.tag.to_string(), tagged.token.text);
    }
}

/// Print the built-in sample texts.
pub fn print_samples(args: &KotoriArgs, samples: &[&str]) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(samples)?
            } else {
                serde_json::to_string(samples)?
            };
            println!("{json}");
        }
        OutputFormat::Human => {
            for (i, sample) in samples.iter().enumerate() {
                println!("[{i}] {sample}");
            }
        }
    }
    Ok(())
}
