// Straight-line document pipeline: normalize, track sections, classify, render.
// Holds only read-only data, so one instance can serve many documents at once.

use anyhow::Result;
use tracing::debug;

use crate::classifier::{ClassificationReport, ClassifierConfig, LexicalClassifier, Lexicon};
use crate::normalizer::Document;
use crate::report;
use crate::section::SectionTracker;

/// Outcome of processing one document
#[derive(Debug, Clone)]
pub struct DocumentOutcome {
    pub report: ClassificationReport,
    pub rendered: String,
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    tracker: SectionTracker,
    lexicon: Lexicon,
    config: ClassifierConfig,
}

impl Pipeline {
    /// Build a pipeline; invalid thresholds are rejected here
    pub fn new(lexicon: Lexicon, config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tracker: SectionTracker::new()?,
            lexicon,
            config,
        })
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Result<Self> {
        Self::new(lexicon, ClassifierConfig::default())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify an already normalized document
    pub fn classify_document(&self, document: &Document) -> Result<ClassificationReport> {
        let classifier = LexicalClassifier::new(&self.tracker, &self.lexicon, self.config.clone())?;
        let paragraphs = document.paragraphs();
        debug!("Classifying {} paragraphs", paragraphs.len());
        Ok(classifier.classify(paragraphs))
    }

    /// Process raw text that has already been page-concatenated
    pub fn process_text(&self, raw_text: &str) -> Result<DocumentOutcome> {
        self.process_document(&Document::from_raw(raw_text))
    }

    /// Process per-page raw text
    pub fn process_pages<'a, I>(&self, pages: I) -> Result<DocumentOutcome>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.process_document(&Document::from_pages(pages))
    }

    fn process_document(&self, document: &Document) -> Result<DocumentOutcome> {
        let report = self.classify_document(document)?;
        let rendered = report::render(&report);
        Ok(DocumentOutcome { report, rendered })
    }
}
