// Renders a classification report as the plain-text vocabulary listing.

use crate::classifier::ClassificationReport;

pub const UNFAMILIAR_HEADER: &str = "non-dictionary words";
pub const LONG_WORDS_HEADER: &str = "long words";

/// Separator between a word and its pronunciation
pub const PRONUNCIATION_SEPARATOR: &str = "  —  ";

/// Suffix for unfamiliar words first seen in a package section
pub const PKG_TAG: &str = " (pkg?)";

pub fn infrequent_header(threshold: u32) -> String {
    format!("infrequent words (<{threshold} occurrences)")
}

pub fn rarest_header(limit: usize) -> String {
    format!("least frequent {limit} known words")
}

/// Word followed by its pronunciation when one is known
pub fn annotate(word: &str, pronunciation: Option<&str>) -> String {
    match pronunciation {
        Some(pron) => format!("{word}{PRONUNCIATION_SEPARATOR}{pron}"),
        None => word.to_string(),
    }
}

fn section(header: &str, lines: impl IntoIterator<Item = String>) -> String {
    let mut block = String::from(header);
    block.push('\n');
    for line in lines {
        block.push_str(&line);
        block.push('\n');
    }
    block
}

/// Render the four sections in fixed order, one blank line between sections
pub fn render(report: &ClassificationReport) -> String {
    let unfamiliar = report.unfamiliar.iter().map(|entry| {
        let tag = if entry.is_pkg() { PKG_TAG } else { "" };
        format!("{}{tag}", annotate(&entry.word, entry.pronunciation.as_deref()))
    });

    let infrequent = report.infrequent.iter().map(|entry| {
        format!(
            "{}, {}",
            annotate(&entry.word, entry.pronunciation.as_deref()),
            entry.count
        )
    });

    let long_words = report
        .long_words
        .iter()
        .map(|entry| annotate(&entry.word, entry.pronunciation.as_deref()));

    let rarest = report.rarest.iter().map(|entry| {
        format!(
            "{} (rank {})",
            annotate(&entry.word, entry.pronunciation.as_deref()),
            entry.rank
        )
    });

    let sections = [
        section(UNFAMILIAR_HEADER, unfamiliar),
        section(&infrequent_header(report.infrequent_threshold), infrequent),
        section(LONG_WORDS_HEADER, long_words),
        section(&rarest_header(report.rarest_limit), rarest),
    ];

    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{InfrequentWord, LongWord, RankedWord, UnfamiliarWord};
    use crate::section::SectionState;

    fn sample_report() -> ClassificationReport {
        ClassificationReport {
            unfamiliar: vec![
                UnfamiliarWord {
                    word: "blorp".to_string(),
                    section: SectionState::Pkg,
                    pronunciation: None,
                },
                UnfamiliarWord {
                    word: "zyx".to_string(),
                    section: SectionState::Anchor,
                    pronunciation: Some("Z IH1 K S".to_string()),
                },
            ],
            infrequent: vec![InfrequentWord {
                word: "tomato".to_string(),
                count: 3,
                pronunciation: Some("T AH0 M EY1 T OW2".to_string()),
            }],
            long_words: vec![LongWord {
                word: "extraordinary".to_string(),
                pronunciation: None,
            }],
            rarest: vec![RankedWord {
                word: "tomato".to_string(),
                rank: 5120,
                pronunciation: Some("T AH0 M EY1 T OW2".to_string()),
            }],
            infrequent_threshold: 4,
            rarest_limit: 150,
            paragraphs: 2,
            tokens: 6,
            distinct_words: 4,
        }
    }

    #[test]
    fn test_render_layout() {
        let expected = "non-dictionary words\n\
blorp (pkg?)\n\
zyx  —  Z IH1 K S\n\
\n\
infrequent words (<4 occurrences)\n\
tomato  —  T AH0 M EY1 T OW2, 3\n\
\n\
long words\n\
extraordinary\n\
\n\
least frequent 150 known words\n\
tomato  —  T AH0 M EY1 T OW2 (rank 5120)\n";
        assert_eq!(render(&sample_report()), expected);
    }

    #[test]
    fn test_render_empty_report() {
        let report = ClassificationReport {
            infrequent_threshold: 4,
            rarest_limit: 150,
            ..Default::default()
        };
        assert_eq!(
            render(&report),
            "non-dictionary words\n\ninfrequent words (<4 occurrences)\n\nlong words\n\nleast frequent 150 known words\n"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let report = sample_report();
        assert_eq!(render(&report), render(&report));
    }

    #[test]
    fn test_headers_follow_config() {
        assert_eq!(infrequent_header(2), "infrequent words (<2 occurrences)");
        assert_eq!(rarest_header(10), "least frequent 10 known words");
    }

    #[test]
    fn test_annotate() {
        assert_eq!(annotate("word", None), "word");
        assert_eq!(annotate("word", Some("W ER1 D")), "word  —  W ER1 D");
    }
}
