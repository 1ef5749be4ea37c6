use std::sync::Arc;

use vocab_sift::discovery::{collect_discovered_files, DiscoveryConfig};
use vocab_sift::reader::{DocumentReader, ReaderConfig};
use vocab_sift::resources::{self, ResourcePaths};
use vocab_sift::{process_files_parallel, BatchConfig, ClassifierConfig, ConfigError, Lexicon, Pipeline};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::TestFixture;

fn pipeline(words: &[&str]) -> Arc<Pipeline> {
    let lexicon = Lexicon::new(words.iter().map(|w| w.to_string()).collect());
    Arc::new(Pipeline::with_lexicon(lexicon).expect("Pipeline creation should succeed"))
}

/// A missing word list degrades to an empty dictionary plus a warning
#[tokio::test]
async fn test_missing_dictionary_marks_everything_unfamiliar() {
    let fixture = TestFixture::new();
    let paths = ResourcePaths {
        dictionary: fixture.root_path.join("no_such_words.txt"),
        frequencies: Some(fixture.root_path.join("no_such_frequencies.txt")),
        ..Default::default()
    };

    let (lexicon, warnings) = resources::load_lexicon(&paths).await;
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("Dictionary not available"));
    assert!(warnings[1].contains("Frequency list not available"));

    let pipeline = Pipeline::with_lexicon(lexicon).unwrap();
    let outcome = pipeline.process_text("the ship sailed").unwrap();

    assert_eq!(outcome.report.unfamiliar.len(), 3);
    assert!(outcome.report.infrequent.is_empty());
    assert!(outcome.report.rarest.is_empty());
}

/// Empty extracted text still yields a report and is flagged as suspect
#[tokio::test]
async fn test_empty_document_flagged() {
    let fixture = TestFixture::new();
    let doc = fixture.create_file("blank.txt", "\u{0C}  \n\u{0C}");

    let stats = process_files_parallel(vec![doc.clone()], pipeline(&["word"]), &BatchConfig::default(), None)
        .await
        .unwrap();

    assert_eq!(stats[0].status, "success");
    assert!(stats[0].extraction_suspect);
    assert_eq!(stats[0].paragraphs, 0);

    let report = fixture.read_report(&doc).unwrap();
    assert_eq!(
        report,
        "non-dictionary words\n\ninfrequent words (<4 occurrences)\n\nlong words\n\nleast frequent 150 known words\n"
    );
}

/// An unreadable document becomes an empty document when not failing fast
#[tokio::test]
async fn test_unreadable_document_becomes_empty() {
    let fixture = TestFixture::new();
    let missing = fixture.root_path.join("vanished.txt");

    let reader = DocumentReader::new(ReaderConfig::default());
    let (pages, stats) = reader.read_pages(&missing).await.unwrap();
    assert!(pages.is_empty());
    assert!(stats.read_error.is_some());

    let strict = DocumentReader::new(ReaderConfig {
        fail_fast: true,
        ..Default::default()
    });
    assert!(strict.read_pages(&missing).await.is_err());
}

/// Invalid UTF-8 surfaces as a read error on the file's stats, not a batch failure
#[tokio::test]
async fn test_undecodable_document_reported() {
    let fixture = TestFixture::new();
    let doc = fixture.root_path.join("binary.txt");
    std::fs::write(&doc, [0xffu8, 0xfe, 0x00, 0xc3]).unwrap();

    let stats = process_files_parallel(vec![doc.clone()], pipeline(&[]), &BatchConfig::default(), None)
        .await
        .unwrap();

    assert_eq!(stats[0].status, "extraction_failed");
    assert!(stats[0].extraction_suspect);
    assert!(stats[0].error.as_deref().unwrap_or_default().contains("Failed to decode"));
    assert!(!fixture.report_exists(&doc));
}

/// A document whose extraction failed is picked up again once it becomes readable
#[tokio::test]
async fn test_failed_extraction_not_skipped_on_rerun() {
    let fixture = TestFixture::new();
    let doc = fixture.root_path.join("scan.txt");
    std::fs::write(&doc, [0xffu8, 0xfe]).unwrap();
    let config = BatchConfig::default();

    let first = process_files_parallel(vec![doc.clone()], pipeline(&["known"]), &config, None)
        .await
        .unwrap();
    assert_eq!(first[0].status, "extraction_failed");

    std::fs::write(&doc, "known zorblax").unwrap();
    let second = process_files_parallel(vec![doc.clone()], pipeline(&["known"]), &config, None)
        .await
        .unwrap();

    assert_eq!(second[0].status, "success");
    assert_eq!(second[0].unfamiliar_words, 1);
    assert!(fixture.read_report(&doc).unwrap().starts_with("non-dictionary words\nzorblax\n"));
}

#[tokio::test]
async fn test_missing_input_fail_fast() {
    let fixture = TestFixture::new();
    let inputs = vec![fixture.root_path.join("absent.txt")];

    let lenient = collect_discovered_files(&inputs, DiscoveryConfig::default()).await.unwrap();
    assert_eq!(lenient.len(), 1);
    assert!(lenient[0].error.is_some());

    let strict = collect_discovered_files(&inputs, DiscoveryConfig { fail_fast: true }).await;
    assert!(strict.is_err());
}

/// Malformed markers are tolerated; unrecognized labels keep the current section
#[test]
fn test_malformed_markers_tolerated() {
    let pipeline = pipeline(&[]);
    let text = "[pkg] alpha\n[[anchor] beta\n[[notes]] gamma\n[[]] delta";
    let outcome = pipeline.process_text(text).unwrap();

    let sections: Vec<(&str, bool)> = outcome
        .report
        .unfamiliar
        .iter()
        .map(|u| (u.word.as_str(), u.is_pkg()))
        .collect();

    // "[[notes]]" and the empty "[[]]" leave the anchor section in place
    assert!(sections.contains(&("alpha", true)));
    assert!(sections.contains(&("beta", false)));
    assert!(sections.contains(&("gamma", false)));
    assert!(sections.contains(&("delta", false)));
}

#[test]
fn test_invalid_config_rejected() {
    let lexicon = Lexicon::default();

    let zero_threshold = ClassifierConfig {
        infrequent_threshold: 0,
        ..Default::default()
    };
    let err = Pipeline::new(lexicon.clone(), zero_threshold).unwrap_err();
    assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::InfrequentThreshold(0)));

    let zero_limit = ClassifierConfig {
        rarest_limit: 0,
        ..Default::default()
    };
    assert!(Pipeline::new(lexicon, zero_limit).is_err());
}
