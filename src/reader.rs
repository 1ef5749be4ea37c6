use anyhow::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// Page separator emitted by text extractors such as `pdftotext`
pub const PAGE_BREAK: char = '\u{0C}';

/// Configuration for document reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether an unreadable document is an error or an empty document
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for one document read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub pages_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Split extracted text into pages on form feeds.
/// A trailing empty page after the final form feed is dropped.
pub fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split(PAGE_BREAK).map(str::to_string).collect();
    if pages.len() > 1 && pages.last().is_some_and(|page| page.trim().is_empty()) {
        pages.pop();
    }
    pages
}

/// Async reader for extracted document text
pub struct DocumentReader {
    config: ReaderConfig,
}

impl DocumentReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    fn failure(&self, path: &Path, error_msg: String, start_time: std::time::Instant) -> Result<(Vec<String>, ReadStats)> {
        warn!("{}", error_msg);

        if self.config.fail_fast {
            return Err(anyhow::anyhow!(error_msg));
        }

        // Extraction failure surfaces as an empty document
        let stats = ReadStats {
            file_path: path.display().to_string(),
            pages_read: 0,
            bytes_read: 0,
            duration_ms: start_time.elapsed().as_millis() as u64,
            read_error: Some(error_msg),
        };
        Ok((Vec::new(), stats))
    }

    /// Read a document and split it into pages
    pub async fn read_pages<P: AsRef<Path>>(&self, file_path: P) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of document: {}", path.display());

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open document {}: {}", path.display(), e);
                return self.failure(path, error_msg, start_time);
            }
        };

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut text = String::new();
        if let Err(e) = reader.read_to_string(&mut text).await {
            let error_msg = format!("Failed to decode document {}: {}", path.display(), e);
            return self.failure(path, error_msg, start_time);
        }

        let pages = split_pages(&text);
        let stats = ReadStats {
            file_path: path.display().to_string(),
            pages_read: pages.len() as u64,
            bytes_read: text.len() as u64,
            duration_ms: start_time.elapsed().as_millis() as u64,
            read_error: None,
        };

        info!(
            "Read {}: {} pages, {} bytes in {}ms",
            path.display(),
            stats.pages_read,
            stats.bytes_read,
            stats.duration_ms
        );

        Ok((pages, stats))
    }
}

/// Read a single document with default configuration, pages joined by form feeds
pub async fn read_document_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let reader = DocumentReader::new(ReaderConfig::default());
    let (pages, _stats) = reader.read_pages(file_path).await?;
    Ok(pages.join(&PAGE_BREAK.to_string()))
}
