// Read-only reference data consulted during classification.

use std::collections::{HashMap, HashSet};

/// Known lowercase words
pub type Dictionary = HashSet<String>;

/// Lowercase word to external frequency number
pub type FrequencyTable = HashMap<String, u64>;

/// Delimiter between pronunciation variants of one word
pub const VARIANT_DELIMITER: &str = " | ";

/// Lowercase word to phonetic transcription
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PronunciationTable {
    entries: HashMap<String, String>,
}

impl PronunciationTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(word, pron)| (word.trim().to_lowercase(), pron))
            .collect();
        Self { entries }
    }

    /// Merge a primary table with caller-supplied overrides.
    ///
    /// Override keys are lowercased; on collision the override entry wins.
    pub fn merged(primary: HashMap<String, String>, overrides: HashMap<String, String>) -> Self {
        let mut table = Self::new(primary);
        for (word, pron) in overrides {
            table.entries.insert(word.trim().to_lowercase(), pron);
        }
        table
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Dictionary, frequency table, and pronunciations bundled for one or more runs
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    dictionary: Dictionary,
    frequencies: FrequencyTable,
    pronunciations: PronunciationTable,
}

impl Lexicon {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            ..Default::default()
        }
    }

    pub fn with_frequencies(mut self, frequencies: FrequencyTable) -> Self {
        self.frequencies = frequencies;
        self
    }

    pub fn with_pronunciations(mut self, pronunciations: PronunciationTable) -> Self {
        self.pronunciations = pronunciations;
        self
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    pub fn rank(&self, word: &str) -> Option<u64> {
        self.frequencies.get(word).copied()
    }

    pub fn pronunciation(&self, word: &str) -> Option<&str> {
        self.pronunciations.get(word)
    }

    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn frequency_len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn pronunciation_len(&self) -> usize {
        self.pronunciations.len()
    }
}
