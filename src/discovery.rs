use anyhow::Result;
use glob::glob;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::incremental::is_report_file;

/// Configuration for input discovery behavior
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
}

/// Result of input validation
#[derive(Debug, Clone)]
pub struct FileValidation {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Expand one input: files are taken as-is, directories are searched for `**/*.txt`.
/// Reports written by this tool are never treated as inputs.
fn expand_input(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let pattern = format!("{}/**/*.txt", input.display());
    debug!("Searching for documents with pattern: {}", pattern);

    let mut found = Vec::new();
    for entry in glob(&pattern).map_err(|e| anyhow::anyhow!("Failed to create glob pattern: {}", e))? {
        match entry {
            Ok(path) if !is_report_file(&path) => found.push(path),
            Ok(path) => debug!("Skipping report file: {}", path.display()),
            Err(e) => warn!("Glob iteration error: {}", e),
        }
    }
    Ok(found)
}

async fn validate_file(path: PathBuf, config: &DiscoveryConfig) -> Result<FileValidation> {
    match fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => Ok(FileValidation { path, error: None }),
        Ok(_) => {
            let error = format!("Path is not a file: {}", path.display());
            warn!("{}", error);
            Ok(FileValidation { path, error: Some(error) })
        }
        Err(e) => {
            let error = format!("Cannot access file {}: {}", path.display(), e);
            warn!("{}", error);

            if config.fail_fast {
                Err(anyhow::anyhow!(error))
            } else {
                Ok(FileValidation { path, error: Some(error) })
            }
        }
    }
}

/// Collect and validate every document named by `inputs`, sorted and deduplicated
pub async fn collect_discovered_files(inputs: &[PathBuf], config: DiscoveryConfig) -> Result<Vec<FileValidation>> {
    let mut paths = Vec::new();
    for input in inputs {
        paths.extend(expand_input(input)?);
    }
    paths.sort();
    paths.dedup();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(validate_file(path, &config).await?);
    }

    let valid_count = files.iter().filter(|f| f.error.is_none()).count();
    info!(
        "Input discovery summary: {} valid, {} invalid",
        valid_count,
        files.len() - valid_count
    );

    Ok(files)
}

/// Convenience function returning only the valid document paths
pub async fn find_input_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let inputs = vec![root.as_ref().to_path_buf()];
    let validations = collect_discovered_files(&inputs, DiscoveryConfig::default()).await?;

    Ok(validations
        .into_iter()
        .filter(|v| v.error.is_none())
        .map(|v| v.path)
        .collect())
}
