// Loaders for the reference data: word list, frequency list, CMU-style
// pronouncing dictionary, and the spreadsheet export of pronunciation overrides.
// A missing or unreadable source degrades to an empty table with a warning.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{info, warn};

use crate::classifier::lexicon::VARIANT_DELIMITER;
use crate::classifier::{Dictionary, FrequencyTable, Lexicon, PronunciationTable};

/// Loaded data plus the warning raised if the source was unavailable
#[derive(Debug, Clone, Default)]
pub struct LoadedResource<T> {
    pub value: T,
    pub warning: Option<String>,
}

impl<T: Default> LoadedResource<T> {
    fn loaded(value: T) -> Self {
        Self { value, warning: None }
    }

    fn missing(warning: String) -> Self {
        warn!("{}", warning);
        Self {
            value: T::default(),
            warning: Some(warning),
        }
    }
}

/// Where each reference source lives; optional sources may be left unset
#[derive(Debug, Clone, Default)]
pub struct ResourcePaths {
    pub dictionary: PathBuf,
    pub frequencies: Option<PathBuf>,
    pub pronunciations: Option<PathBuf>,
    pub overrides: Option<PathBuf>,
}

/// One word per line, trimmed and lowercased; blank lines skipped
pub fn parse_dictionary(content: &str) -> Dictionary {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Lines of `word number`; lines without an all-digit second field are skipped
pub fn parse_frequency_table(content: &str) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for line in content.lines() {
        let mut fields = line.split_whitespace();
        let (Some(word), Some(value)) = (fields.next(), fields.next()) else {
            continue;
        };
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        if let Ok(rank) = value.parse::<u64>() {
            table.insert(word.to_lowercase(), rank);
        }
    }
    table
}

/// Strip a trailing variant index such as `(2)` from a headword
fn strip_variant_index(headword: &str) -> &str {
    if let Some(open) = headword.rfind('(') {
        let inner = &headword[open + 1..];
        if let Some(digits) = inner.strip_suffix(')') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return &headword[..open];
            }
        }
    }
    headword
}

/// CMU Pronouncing Dictionary format.
///
/// `;;;` lines are comments; `WORD(2)` variants fold into `word`; all variants of
/// a word are joined with `" | "` in file order.
pub fn parse_cmudict(content: &str) -> HashMap<String, String> {
    let mut variants: HashMap<String, Vec<String>> = HashMap::new();

    for line in content.lines() {
        if line.starts_with(";;;") || line.trim().is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let Some(headword) = parts.next() else {
            continue;
        };
        let word = strip_variant_index(&headword.to_lowercase()).to_string();
        let phones = parts.collect::<Vec<_>>().join(" ");
        variants.entry(word).or_default().push(phones);
    }

    variants
        .into_iter()
        .map(|(word, prons)| (word, prons.join(VARIANT_DELIMITER)))
        .collect()
}

/// Tab-separated export of the override sheet (columns A to D).
///
/// The first row is a header. Column C holds the word, column D the
/// pronunciation. Short rows and rows with an empty word are skipped.
pub fn parse_overrides(content: &str) -> HashMap<String, String> {
    let mut overrides = HashMap::new();
    for row in content.lines().skip(1) {
        let columns: Vec<&str> = row.split('\t').collect();
        if columns.len() < 4 {
            continue;
        }
        let word = columns[2].trim().to_lowercase();
        if word.is_empty() {
            continue;
        }
        overrides.insert(word, columns[3].trim().to_string());
    }
    overrides
}

async fn load_with<T, F>(path: &Path, kind: &str, parse: F) -> LoadedResource<T>
where
    T: Default,
    F: FnOnce(&str) -> T,
{
    match fs::read_to_string(path).await {
        Ok(content) => LoadedResource::loaded(parse(&content)),
        Err(e) => LoadedResource::missing(format!(
            "{} not available at {}: {}",
            kind,
            path.display(),
            e
        )),
    }
}

pub async fn load_dictionary(path: &Path) -> LoadedResource<Dictionary> {
    load_with(path, "Dictionary", parse_dictionary).await
}

pub async fn load_frequency_table(path: &Path) -> LoadedResource<FrequencyTable> {
    load_with(path, "Frequency list", parse_frequency_table).await
}

pub async fn load_pronunciations(path: &Path) -> LoadedResource<HashMap<String, String>> {
    load_with(path, "Pronouncing dictionary", parse_cmudict).await
}

pub async fn load_overrides(path: &Path) -> LoadedResource<HashMap<String, String>> {
    load_with(path, "Pronunciation overrides", parse_overrides).await
}

/// Load every configured source into one lexicon; returns the collected warnings
pub async fn load_lexicon(paths: &ResourcePaths) -> (Lexicon, Vec<String>) {
    let dictionary = load_dictionary(&paths.dictionary).await;
    let frequencies = match paths.frequencies.as_deref() {
        Some(path) => load_frequency_table(path).await,
        None => LoadedResource::default(),
    };
    let pronunciations = match paths.pronunciations.as_deref() {
        Some(path) => load_pronunciations(path).await,
        None => LoadedResource::default(),
    };
    let overrides = match paths.overrides.as_deref() {
        Some(path) => load_overrides(path).await,
        None => LoadedResource::default(),
    };

    let warnings: Vec<String> = [
        dictionary.warning,
        frequencies.warning,
        pronunciations.warning,
        overrides.warning,
    ]
    .into_iter()
    .flatten()
    .collect();

    let pronunciation_table = PronunciationTable::merged(pronunciations.value, overrides.value);
    let lexicon = Lexicon::new(dictionary.value)
        .with_frequencies(frequencies.value)
        .with_pronunciations(pronunciation_table);

    info!(
        dictionary = lexicon.dictionary_len(),
        frequencies = lexicon.frequency_len(),
        pronunciations = lexicon.pronunciation_len(),
        warnings = warnings.len(),
        "Lexicon loaded"
    );

    (lexicon, warnings)
}
