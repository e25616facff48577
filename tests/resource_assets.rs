//! Integration tests for loading lexicon and gazetteer assets from disk.

use std::io::Write;

use kotori::classify::Category;
use kotori::error::Result;
use kotori::pipeline::{AnalysisPipeline, PipelineConfig};
use kotori::sentiment::Sentiment;
use kotori::tagger::EntityType;

#[test]
fn test_custom_lexicon_changes_scoring() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    // "chair" carries no weight in the default lexicon.
    write!(
        file,
        r#"{{"version": 1, "entries": {{"chair": 0.9}}}}"#
    )
    .unwrap();

    let pipeline = AnalysisPipeline::with_config(PipelineConfig {
        lexicon_path: Some(file.path().to_path_buf()),
        ..PipelineConfig::default()
    })?;

    let result = pipeline.analyze("what a chair")?;
    assert_eq!(result.sentiment, Sentiment::Positive);

    // The default entries are gone entirely.
    let result = pipeline.analyze("a wonderful day")?;
    assert_eq!(result.sentiment, Sentiment::Neutral);

    Ok(())
}

#[test]
fn test_custom_gazetteer_changes_entities() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"version": 1, "person": ["Ada Lovelace"], "place": ["Atlantis"]}}"#
    )
    .unwrap();

    let pipeline = AnalysisPipeline::with_config(PipelineConfig {
        gazetteer_path: Some(file.path().to_path_buf()),
        ..PipelineConfig::default()
    })?;

    let result = pipeline.analyze("Ada Lovelace sailed to Atlantis, not Beijing")?;
    let texts: Vec<&str> = result.entities.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Ada Lovelace", "Atlantis"]);
    assert_eq!(result.entities[0].entity_type, EntityType::Person);

    // Category classification is untouched by the gazetteer swap.
    assert_eq!(result.category, Category::Other);

    Ok(())
}

#[test]
fn test_malformed_asset_fails_construction() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json at all").unwrap();

    let result = AnalysisPipeline::with_config(PipelineConfig {
        lexicon_path: Some(file.path().to_path_buf()),
        ..PipelineConfig::default()
    });
    assert!(result.is_err());
}

#[test]
fn test_empty_asset_fails_construction() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"version": 1, "entries": {{}}}}"#).unwrap();

    let result = AnalysisPipeline::with_config(PipelineConfig {
        lexicon_path: Some(file.path().to_path_buf()),
        ..PipelineConfig::default()
    });
    assert!(result.is_err());
}
