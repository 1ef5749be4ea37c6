// Tokenizes paragraphs and sorts words into the four vocabulary categories:
// unfamiliar, infrequent known, long, and rarest known.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::normalizer::{is_doubled_pairs, is_stylized_duplicate};
use crate::section::{SectionState, SectionTracker};

pub mod config;
pub mod lexicon;

pub use config::{ClassifierConfig, FrequencyOrder};
pub use lexicon::{Dictionary, FrequencyTable, Lexicon, PronunciationTable};

/// Maximal runs of ASCII letters, lowercased. Digits and symbols split words.
pub fn extract_words(paragraph: &str) -> impl Iterator<Item = String> + '_ {
    paragraph
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_ascii_lowercase())
}

/// Whole word is two-character repeats, e.g. an unrepaired `"ddoouubbllee"`
pub fn is_all_doubled(word: &str) -> bool {
    is_doubled_pairs(word)
}

/// Word not in the dictionary and seen in the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnfamiliarWord {
    pub word: String,
    /// Section active at the first sighting
    pub section: SectionState,
    pub pronunciation: Option<String>,
}

impl UnfamiliarWord {
    pub fn is_pkg(&self) -> bool {
        self.section == SectionState::Pkg
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfrequentWord {
    pub word: String,
    pub count: u32,
    pub pronunciation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongWord {
    pub word: String,
    pub pronunciation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub rank: u64,
    pub pronunciation: Option<String>,
}

/// Final, ordered result of one classification run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub unfamiliar: Vec<UnfamiliarWord>,
    pub infrequent: Vec<InfrequentWord>,
    pub long_words: Vec<LongWord>,
    pub rarest: Vec<RankedWord>,
    pub infrequent_threshold: u32,
    pub rarest_limit: usize,
    pub paragraphs: usize,
    pub tokens: u64,
    pub distinct_words: usize,
}

impl ClassificationReport {
    /// No paragraphs and nothing unfamiliar: the extractor most likely produced no text
    pub fn suggests_extraction_failure(&self) -> bool {
        self.paragraphs == 0 && self.unfamiliar.is_empty()
    }
}

/// Mutable aggregate for one run; never shared between documents
#[derive(Debug, Default)]
pub struct ClassificationState {
    section: SectionState,
    paragraphs: usize,
    tokens: u64,
    counts: HashMap<String, u32>,
    unfamiliar: HashMap<String, SectionState>,
    long_words: HashSet<String>,
}

impl ClassificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> SectionState {
        self.section
    }

    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn unfamiliar_section(&self, word: &str) -> Option<SectionState> {
        self.unfamiliar.get(word).copied()
    }

    pub fn is_long_word(&self, word: &str) -> bool {
        self.long_words.contains(word)
    }

    /// Update the section from the paragraph's marker, then scan its words
    pub fn observe_paragraph(
        &mut self,
        paragraph: &str,
        tracker: &SectionTracker,
        lexicon: &Lexicon,
        config: &ClassifierConfig,
    ) {
        let (section, _label) = tracker.advance(paragraph, self.section);
        self.section = section;
        self.paragraphs += 1;

        for word in extract_words(paragraph) {
            self.observe_word(word, lexicon, config);
        }
    }

    fn observe_word(&mut self, word: String, lexicon: &Lexicon, config: &ClassifierConfig) {
        self.tokens += 1;
        *self.counts.entry(word.clone()).or_insert(0) += 1;

        if word.len() >= config.long_word_min_len {
            self.long_words.insert(word.clone());
        }

        if lexicon.is_known(&word)
            || self.unfamiliar.contains_key(&word)
            || is_all_doubled(&word)
            || is_stylized_duplicate(&word)
        {
            return;
        }

        debug!(word = %word, section = ?self.section, "Unfamiliar word");
        self.unfamiliar.insert(word, self.section);
    }

    /// Derive the ordered report collections
    pub fn into_report(self, lexicon: &Lexicon, config: &ClassifierConfig) -> ClassificationReport {
        let pron = |word: &str| lexicon.pronunciation(word).map(str::to_string);

        let mut unfamiliar: Vec<UnfamiliarWord> = self
            .unfamiliar
            .iter()
            .map(|(word, section)| UnfamiliarWord {
                word: word.clone(),
                section: *section,
                pronunciation: pron(word),
            })
            .collect();
        unfamiliar.sort_by(|a, b| a.word.cmp(&b.word));

        let mut infrequent: Vec<InfrequentWord> = self
            .counts
            .iter()
            .filter(|(word, count)| lexicon.is_known(word) && **count < config.infrequent_threshold)
            .map(|(word, count)| InfrequentWord {
                word: word.clone(),
                count: *count,
                pronunciation: pron(word),
            })
            .collect();
        infrequent.sort_by(|a, b| a.count.cmp(&b.count).then_with(|| a.word.cmp(&b.word)));

        let mut long_words: Vec<LongWord> = self
            .long_words
            .iter()
            .map(|word| LongWord {
                word: word.clone(),
                pronunciation: pron(word),
            })
            .collect();
        long_words.sort_by(|a, b| a.word.cmp(&b.word));

        let mut rarest: Vec<RankedWord> = self
            .counts
            .keys()
            .filter(|word| lexicon.is_known(word))
            .filter_map(|word| {
                lexicon.rank(word).map(|rank| RankedWord {
                    word: word.clone(),
                    rank,
                    pronunciation: pron(word),
                })
            })
            .collect();
        match config.frequency_order {
            FrequencyOrder::RankAscending => {
                rarest.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.word.cmp(&b.word)))
            }
            FrequencyOrder::CountDescending => {
                rarest.sort_by(|a, b| b.rank.cmp(&a.rank).then_with(|| a.word.cmp(&b.word)))
            }
        }
        rarest.truncate(config.rarest_limit);

        ClassificationReport {
            unfamiliar,
            infrequent,
            long_words,
            rarest,
            infrequent_threshold: config.infrequent_threshold,
            rarest_limit: config.rarest_limit,
            paragraphs: self.paragraphs,
            tokens: self.tokens,
            distinct_words: self.counts.len(),
        }
    }
}

/// Classifies a document's paragraphs against a lexicon
pub struct LexicalClassifier<'a> {
    tracker: &'a SectionTracker,
    lexicon: &'a Lexicon,
    config: ClassifierConfig,
}

impl<'a> LexicalClassifier<'a> {
    pub fn new(
        tracker: &'a SectionTracker,
        lexicon: &'a Lexicon,
        config: ClassifierConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            tracker,
            lexicon,
            config,
        })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify paragraphs in document order
    pub fn classify<'p, I>(&self, paragraphs: I) -> ClassificationReport
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut state = ClassificationState::new();
        for paragraph in paragraphs {
            state.observe_paragraph(paragraph, self.tracker, self.lexicon, &self.config);
        }
        state.into_report(self.lexicon, &self.config)
    }
}

/// Classify with the default thresholds
pub fn classify<'p, I>(paragraphs: I, tracker: &SectionTracker, lexicon: &Lexicon) -> ClassificationReport
where
    I: IntoIterator<Item = &'p str>,
{
    LexicalClassifier {
        tracker,
        lexicon,
        config: ClassifierConfig::default(),
    }
    .classify(paragraphs)
}
