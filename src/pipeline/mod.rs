//! The analysis pipeline: five stages over one immutable document.
//!
//! Stage ordering: tokenization must precede tagging, since the taggers
//! consume tokenizer output. Language detection, sentiment scoring, and
//! classification are mutually independent and can run concurrently over
//! the same immutable text. The pipeline joins all stage outputs into one
//! [`AnalysisResult`].
//!
//! # Examples
//!
//! ```
//! use kotori::pipeline::AnalysisPipeline;
//!
//! let pipeline = AnalysisPipeline::new().unwrap();
//! let result = pipeline.analyze("The weather is beautiful today").unwrap();
//!
//! assert_eq!(result.language.code(), "en");
//! assert_eq!(result.tokens.len(), 5);
//! ```

pub mod config;
pub mod result;

pub use config::{PipelineConfig, TokenizerKind};
pub use result::AnalysisResult;

use std::sync::Arc;

use log::debug;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{ScriptWordTokenizer, Tokenizer, WhitespaceTokenizer};
use crate::classify::{Category, CategoryClassifier};
use crate::document::Document;
use crate::error::Result;
use crate::language::{Language, LanguageDetector};
use crate::sentiment::{Sentiment, SentimentLexicon, SentimentScorer};
use crate::tagger::{Entity, EntityRecognizer, Gazetteer, PosTagger, TaggedToken};

/// The assembled analysis pipeline.
///
/// Construction validates configuration and loads resource assets; it is
/// the only place errors can originate. After construction, `analyze` is a
/// total function: every UTF-8 input, including the empty string, produces
/// a well-defined result.
///
/// The pipeline is `Send + Sync` and can be shared across threads behind an
/// `Arc`; stages hold read-only state only.
pub struct AnalysisPipeline {
    tokenizer: Arc<dyn Tokenizer>,
    detector: LanguageDetector,
    scorer: SentimentScorer,
    pos_tagger: PosTagger,
    recognizer: EntityRecognizer,
    classifier: CategoryClassifier,
    parallel: bool,
}

impl AnalysisPipeline {
    /// Create a pipeline with the default configuration and embedded
    /// resources.
    pub fn new() -> Result<Self> {
        Self::with_config(PipelineConfig::default())
    }

    /// Create a pipeline from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when a configured resource file is missing,
    /// malformed, or empty. No `analyze` call is accepted before
    /// construction succeeds.
    pub fn with_config(config: PipelineConfig) -> Result<Self> {
        let tokenizer: Arc<dyn Tokenizer> = match config.tokenizer {
            TokenizerKind::ScriptWord => {
                let tokenizer = if config.include_punctuation {
                    ScriptWordTokenizer::new().with_punctuation()
                } else {
                    ScriptWordTokenizer::new()
                };
                Arc::new(tokenizer)
            }
            TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer::new()),
        };

        let lexicon = match &config.lexicon_path {
            Some(path) => Arc::new(SentimentLexicon::from_json_file(path)?),
            None => Arc::new(SentimentLexicon::default_lexicon()),
        };
        let gazetteer = match &config.gazetteer_path {
            Some(path) => Arc::new(Gazetteer::from_json_file(path)?),
            None => Arc::new(Gazetteer::default_gazetteer()),
        };

        debug!(
            "pipeline ready: tokenizer={} lexicon={} entries, gazetteer={} names, parallel={}",
            tokenizer.name(),
            lexicon.len(),
            gazetteer.len(),
            config.parallel
        );

        Ok(AnalysisPipeline {
            tokenizer,
            detector: LanguageDetector::new(),
            scorer: SentimentScorer::with_lexicon(lexicon)?,
            pos_tagger: PosTagger::new(),
            recognizer: EntityRecognizer::with_gazetteer(gazetteer)?,
            classifier: CategoryClassifier::new()?,
            parallel: config.parallel,
        })
    }

    /// Analyze a text, producing one immutable result record.
    ///
    /// Wraps the text in a [`Document`] and runs all five stages. Succeeds
    /// for every input; degenerate inputs (empty, whitespace-only) yield
    /// neutral/empty/unknown fields.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let document = Document::new(text);
        self.analyze_document(&document)
    }

    /// Analyze an already-constructed document.
    pub fn analyze_document(&self, document: &Document) -> Result<AnalysisResult> {
        let text = document.text();

        let (language, sentiment, category, (tokens, pos_tags, entities)) = if self.parallel {
            self.run_parallel(text)?
        } else {
            self.run_sequential(text)?
        };

        Ok(AnalysisResult {
            sentiment,
            language,
            tokens,
            entities,
            pos_tags,
            category,
        })
    }

    /// Tokenize, then tag. The only inter-stage ordering dependency.
    fn tokenize_and_tag(&self, text: &str) -> Result<(Vec<Token>, Vec<TaggedToken>, Vec<Entity>)> {
        let tokens: Vec<Token> = self.tokenizer.tokenize(text)?.collect();
        let pos_tags = self.pos_tagger.tag_pos(&tokens);
        let entities = self.recognizer.tag_entities(&tokens);
        Ok((tokens, pos_tags, entities))
    }

    #[allow(clippy::type_complexity)]
    fn run_sequential(
        &self,
        text: &str,
    ) -> Result<(
        Language,
        Sentiment,
        Category,
        (Vec<Token>, Vec<TaggedToken>, Vec<Entity>),
    )> {
        let language = self.detector.detect(text);
        let sentiment = self.scorer.score(text);
        let category = self.classifier.classify(text);
        let tagged = self.tokenize_and_tag(text)?;
        Ok((language, sentiment, category, tagged))
    }

    /// Run the independent stages on rayon workers and join.
    ///
    /// Every closure reads the same immutable `text` and writes its own
    /// output slot; the joins are the synchronization points.
    #[allow(clippy::type_complexity)]
    fn run_parallel(
        &self,
        text: &str,
    ) -> Result<(
        Language,
        Sentiment,
        Category,
        (Vec<Token>, Vec<TaggedToken>, Vec<Entity>),
    )> {
        let ((language, sentiment), (category, tagged)) = rayon::join(
            || {
                rayon::join(
                    || self.detector.detect(text),
                    || self.scorer.score(text),
                )
            },
            || {
                rayon::join(
                    || self.classifier.classify(text),
                    || self.tokenize_and_tag(text),
                )
            },
        );
        Ok((language, sentiment, category, tagged?))
    }
}
