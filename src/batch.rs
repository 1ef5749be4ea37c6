// Processes many documents concurrently against one shared pipeline and
// collects per-file statistics for the run summary.

use anyhow::Result;
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::incremental::{report_exists, write_report_async};
use crate::pipeline::Pipeline;
use crate::reader::{DocumentReader, ReaderConfig};

/// Per-file processing statistics
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FileStats {
    pub path: String,
    pub report_path: Option<String>,
    pub pages: u64,
    pub paragraphs: usize,
    pub tokens: u64,
    pub distinct_words: usize,
    pub unfamiliar_words: usize,
    pub infrequent_words: usize,
    pub long_words: usize,
    pub rarest_words: usize,
    pub processing_time_ms: u64,
    /// Processing status: success, skipped, failed, or extraction_failed (no report written)
    pub status: String,
    pub error: Option<String>,
    /// Empty document with nothing unfamiliar; the extractor likely failed
    pub extraction_suspect: bool,
}

/// Summary written to the stats file
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RunStats {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub resource_warnings: Vec<String>,
    pub files: Vec<FileStats>,
}

impl RunStats {
    pub fn new(files: Vec<FileStats>, resource_warnings: Vec<String>) -> Self {
        let count = |status: &str| files.iter().filter(|f| f.status == status).count();
        Self {
            files_processed: count("success"),
            files_skipped: count("skipped"),
            files_failed: count("failed") + count("extraction_failed"),
            resource_warnings,
            files,
        }
    }

    pub async fn write_json(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub fail_fast: bool,
    pub overwrite_all: bool,
    /// Documents processed at once
    pub concurrency: usize,
    pub reader: ReaderConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            overwrite_all: false,
            concurrency: num_cpus::get().max(1),
            reader: ReaderConfig::default(),
        }
    }
}

/// Skip documents that already have a report unless overwriting
pub fn should_process_file(path: &Path, overwrite_all: bool) -> bool {
    overwrite_all || !report_exists(path)
}

async fn process_file(path: PathBuf, pipeline: Arc<Pipeline>, config: BatchConfig) -> Result<FileStats> {
    let start_time = std::time::Instant::now();
    let display_path = path.display().to_string();

    if !should_process_file(&path, config.overwrite_all) {
        info!("Skipping {}: report already exists", display_path);
        return Ok(FileStats {
            path: display_path,
            status: "skipped".to_string(),
            ..Default::default()
        });
    }

    let reader = DocumentReader::new(config.reader.clone());
    let (pages, read_stats) = reader.read_pages(&path).await?;

    // No report is written, so the next run retries this document
    if let Some(read_error) = read_stats.read_error {
        return Ok(FileStats {
            path: display_path,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
            status: "extraction_failed".to_string(),
            error: Some(read_error),
            extraction_suspect: true,
            ..Default::default()
        });
    }

    // Classification is CPU-bound; keep it off the async workers
    let outcome = tokio::task::spawn_blocking(move || {
        pipeline.process_pages(pages.iter().map(String::as_str))
    })
    .await??;

    let report_path = write_report_async(&path, &outcome.rendered).await?;
    let report = &outcome.report;

    if report.suggests_extraction_failure() {
        warn!("No text extracted from {}", display_path);
    }

    Ok(FileStats {
        path: display_path,
        report_path: Some(report_path.display().to_string()),
        pages: read_stats.pages_read,
        paragraphs: report.paragraphs,
        tokens: report.tokens,
        distinct_words: report.distinct_words,
        unfamiliar_words: report.unfamiliar.len(),
        infrequent_words: report.infrequent.len(),
        long_words: report.long_words.len(),
        rarest_words: report.rarest.len(),
        processing_time_ms: start_time.elapsed().as_millis() as u64,
        status: "success".to_string(),
        error: None,
        extraction_suspect: report.suggests_extraction_failure(),
    })
}

/// Process documents concurrently; results are sorted by path
pub async fn process_files_parallel(
    files: Vec<PathBuf>,
    pipeline: Arc<Pipeline>,
    config: &BatchConfig,
    progress: Option<ProgressBar>,
) -> Result<Vec<FileStats>> {
    info!("Processing {} documents with concurrency {}", files.len(), config.concurrency);

    let mut results = stream::iter(files)
        .map(|path| {
            let pipeline = Arc::clone(&pipeline);
            let config = config.clone();
            async move {
                let display_path = path.display().to_string();
                (display_path, process_file(path, pipeline, config).await)
            }
        })
        .buffer_unordered(config.concurrency.max(1));

    let mut stats = Vec::new();
    while let Some((display_path, result)) = results.next().await {
        if let Some(ref bar) = progress {
            bar.inc(1);
        }
        match result {
            Ok(file_stats) => stats.push(file_stats),
            Err(e) if config.fail_fast => return Err(e),
            Err(e) => {
                warn!("Failed to process {}: {}", display_path, e);
                stats.push(FileStats {
                    path: display_path,
                    status: "failed".to_string(),
                    error: Some(e.to_string()),
                    ..Default::default()
                });
            }
        }
    }

    stats.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(stats)
}
