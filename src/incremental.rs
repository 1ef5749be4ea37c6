// Report file naming and persistence next to each source document.
// An existing report marks a document as done for incremental runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix appended to the source file stem for its report
pub const REPORT_SUFFIX: &str = "_vocab.txt";

/// Generate report file path from source file path
pub fn generate_report_path(source_path: &Path) -> PathBuf {
    let mut report_path = source_path.to_path_buf();
    let file_stem = report_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    report_path.set_file_name(format!("{file_stem}{REPORT_SUFFIX}"));
    report_path
}

/// True for files this tool wrote itself
pub fn is_report_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(REPORT_SUFFIX))
}

pub fn report_exists<P: AsRef<Path>>(source_path: P) -> bool {
    generate_report_path(source_path.as_ref()).exists()
}

/// Read a previously written report
///
/// # Example
/// ```no_run
/// use vocab_sift::incremental::read_report;
/// let report = read_report("path/to/book.txt").expect("Failed to read report");
/// ```
pub fn read_report<P: AsRef<Path>>(source_path: P) -> Result<String, io::Error> {
    fs::read_to_string(generate_report_path(source_path.as_ref()))
}

/// Write the report for a source, ensuring a trailing newline
pub fn write_report<P: AsRef<Path>>(source_path: P, content: &str) -> Result<PathBuf, io::Error> {
    let report_path = generate_report_path(source_path.as_ref());
    let content_with_newline = if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{content}\n")
    };
    fs::write(&report_path, content_with_newline)?;
    Ok(report_path)
}

/// Async variant of [`write_report`]
pub async fn write_report_async<P: AsRef<Path>>(source_path: P, content: &str) -> Result<PathBuf, io::Error> {
    let report_path = generate_report_path(source_path.as_ref());
    let content_with_newline = if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{content}\n")
    };
    tokio::fs::write(&report_path, content_with_newline).await?;
    Ok(report_path)
}
