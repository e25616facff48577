//! Integration tests for end-to-end analysis scenarios.

use kotori::analysis::token::TokenType;
use kotori::classify::Category;
use kotori::error::Result;
use kotori::language::Language;
use kotori::pipeline::{AnalysisPipeline, PipelineConfig};
use kotori::samples::samples;
use kotori::sentiment::Sentiment;
use kotori::tagger::{EntityType, PosTag};

#[test]
fn test_analyze_is_total_over_awkward_inputs() -> Result<()> {
    let pipeline = AnalysisPipeline::new()?;

    let inputs = [
        "",
        " ",
        "\t\n\r",
        "....!!??",
        "12345",
        "a",
        "天",
        "🎉🎉🎉",
        "mixed 中文 and English かな 한글 text",
    ];
    for input in inputs {
        let result = pipeline.analyze(input)?;
        // Every field is populated, however degenerate the input.
        assert_eq!(result.pos_tags.len(), result.tokens.len(), "input: {input:?}");
    }

    Ok(())
}

#[test]
fn test_empty_string_scenario() -> Result<()> {
    let pipeline = AnalysisPipeline::new()?;
    let result = pipeline.analyze("")?;

    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.language, Language::Unknown);
    assert!(result.tokens.is_empty());
    assert!(result.entities.is_empty());
    assert!(result.pos_tags.is_empty());
    assert_eq!(result.category, Category::Other);

    Ok(())
}

#[test]
fn test_weather_sentence_scenario() -> Result<()> {
    let pipeline = AnalysisPipeline::new()?;
    let result = pipeline.analyze("The weather is beautiful today")?;

    assert_eq!(result.category, Category::Weather);
    assert!(result.token_texts().contains(&"weather"));

    let beautiful = result
        .pos_tags
        .iter()
        .find(|t| t.token.text == "beautiful")
        .expect("token 'beautiful' is tagged");
    assert_eq!(beautiful.tag, PosTag::Adjective);

    Ok(())
}

#[test]
fn test_mixed_script_scenario() -> Result<()> {
    let pipeline = AnalysisPipeline::new()?;
    let text = "苹果公司CEO今天访问了Beijing";
    let result = pipeline.analyze(text)?;

    // CJK ideographs arrive as single-character tokens, Latin words whole.
    let texts = result.token_texts();
    assert!(texts.contains(&"苹"));
    assert!(texts.contains(&"司"));
    assert!(texts.contains(&"Beijing"));
    assert!(texts.contains(&"CEO"));

    // No character loss across the covered ranges.
    let covered: String = result
        .tokens
        .iter()
        .map(|t| &text[t.start_offset..t.end_offset])
        .collect();
    assert_eq!(covered, text);

    // The organization and the place both surface as entities.
    let org = result
        .entities
        .iter()
        .find(|e| e.entity_type == EntityType::Organization)
        .expect("organization entity");
    assert_eq!(org.text, "苹果公司");
    let place = result
        .entities
        .iter()
        .find(|e| e.entity_type == EntityType::Place)
        .expect("place entity");
    assert_eq!(place.text, "Beijing");

    Ok(())
}

#[test]
fn test_token_ranges_partition_covered_text() -> Result<()> {
    let pipeline = AnalysisPipeline::new()?;
    let text = "Hello, 世界! This is 42% of the story.";
    let result = pipeline.analyze(text)?;

    // Ordered, non-overlapping ranges; gaps contain only separators.
    let mut previous_end = 0usize;
    for token in &result.tokens {
        assert!(token.start_offset >= previous_end);
        assert!(token.end_offset > token.start_offset);
        let gap = &text[previous_end..token.start_offset];
        assert!(
            gap.chars()
                .all(|c| c.is_whitespace() || !c.is_alphanumeric()),
            "unexpected word characters in gap {gap:?}"
        );
        assert_eq!(&text[token.start_offset..token.end_offset], token.text);
        previous_end = token.end_offset;
    }

    Ok(())
}

#[test]
fn test_entity_spans_align_with_token_runs() -> Result<()> {
    let pipeline = AnalysisPipeline::new()?;
    let result = pipeline.analyze("Tim Cook flew from New York to Beijing")?;

    for entity in &result.entities {
        let run = &result.tokens[entity.start_position..entity.end_position];
        assert!(!run.is_empty());
        assert_eq!(entity.start_offset, run[0].start_offset);
        assert_eq!(entity.end_offset, run[run.len() - 1].end_offset);
    }
    // No two entities overlap.
    for pair in result.entities.windows(2) {
        assert!(pair[0].end_position <= pair[1].start_position);
    }

    Ok(())
}

#[test]
fn test_classifier_priority_end_to_end() -> Result<()> {
    let pipeline = AnalysisPipeline::new()?;
    // Both weather and movie keywords present: weather wins.
    let result = pipeline.analyze("a movie about terrible weather")?;
    assert_eq!(result.category, Category::Weather);

    Ok(())
}

#[test]
fn test_idempotent_analysis() -> Result<()> {
    let pipeline = AnalysisPipeline::new()?;
    for sample in samples() {
        assert_eq!(pipeline.analyze(sample)?, pipeline.analyze(sample)?);
    }

    Ok(())
}

#[test]
fn test_sample_texts_analyze_as_expected() -> Result<()> {
    let pipeline = AnalysisPipeline::new()?;

    // Chinese weather sample: positive, Chinese, weather.
    let result = pipeline.analyze(samples()[0])?;
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.language, Language::Chinese);
    assert_eq!(result.category, Category::Weather);
    assert!(result.tokens.iter().all(|t| t.token_type == TokenType::Cjk));

    // Chinese movie sample: negative, movie.
    let result = pipeline.analyze(samples()[1])?;
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.category, Category::Movie);

    // English weather sample: positive, English, weather.
    let result = pipeline.analyze(samples()[2])?;
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.language, Language::English);
    assert_eq!(result.category, Category::Weather);

    // English product sample: positive, product.
    let result = pipeline.analyze(samples()[3])?;
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.category, Category::Product);

    Ok(())
}

#[test]
fn test_parallel_pipeline_agrees_with_sequential() -> Result<()> {
    let sequential = AnalysisPipeline::new()?;
    let parallel = AnalysisPipeline::with_config(PipelineConfig {
        parallel: true,
        ..PipelineConfig::default()
    })?;

    for sample in samples() {
        assert_eq!(sequential.analyze(sample)?, parallel.analyze(sample)?);
    }

    Ok(())
}

#[test]
fn test_result_json_round_trip() -> Result<()> {
    let pipeline = AnalysisPipeline::new()?;
    let result = pipeline.analyze("Tim Cook visited Beijing")?;

    let json = serde_json::to_string(&result)?;
    let parsed: kotori::pipeline::AnalysisResult = serde_json::from_str(&json)?;
    assert_eq!(parsed, result);

    Ok(())
}
