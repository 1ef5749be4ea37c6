use anyhow::Result;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use vocab_sift::classifier::{ClassifierConfig, FrequencyOrder};
use vocab_sift::discovery::{self, DiscoveryConfig};
use vocab_sift::reader::ReaderConfig;
use vocab_sift::resources::{self, ResourcePaths};
use vocab_sift::{process_files_parallel, BatchConfig, Pipeline, RunStats};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RankOrder {
    /// Smaller frequency numbers are rarer
    Ascending,
    /// Larger frequency numbers are more common
    Descending,
}

impl From<RankOrder> for FrequencyOrder {
    fn from(order: RankOrder) -> Self {
        match order {
            RankOrder::Ascending => FrequencyOrder::RankAscending,
            RankOrder::Descending => FrequencyOrder::CountDescending,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "vocab-sift")]
#[command(about = "Vocabulary report for extracted document text with doubled-character repair")]
#[command(version)]
struct Args {
    /// Extracted text files, or directories searched for *.txt
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Word list, one word per line
    #[arg(long, default_value = "words.txt")]
    dictionary: PathBuf,

    /// Frequency list of `word number` lines
    #[arg(long)]
    frequencies: Option<PathBuf>,

    /// CMU-format pronouncing dictionary
    #[arg(long)]
    pronunciations: Option<PathBuf>,

    /// Tab-separated pronunciation overrides (word in column C, pronunciation in column D)
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Known words seen fewer times than this are listed as infrequent
    #[arg(long, default_value_t = 4)]
    infrequent_threshold: u32,

    /// Minimum length of a long word
    #[arg(long, default_value_t = 12)]
    long_word_min_len: usize,

    /// Number of rarest known words to list
    #[arg(long, default_value_t = 150)]
    rarest_limit: usize,

    /// How to sort the frequency numbers when picking the rarest words
    #[arg(long, value_enum, default_value = "ascending")]
    rank_order: RankOrder,

    /// Overwrite existing reports
    #[arg(long)]
    overwrite_all: bool,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Suppress console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Stats output file path
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting vocab-sift");
    info!(?args, "Parsed CLI arguments");

    let classifier_config = ClassifierConfig {
        infrequent_threshold: args.infrequent_threshold,
        long_word_min_len: args.long_word_min_len,
        rarest_limit: args.rarest_limit,
        frequency_order: args.rank_order.into(),
    };
    classifier_config.validate()?;

    let resource_paths = ResourcePaths {
        dictionary: args.dictionary.clone(),
        frequencies: args.frequencies.clone(),
        pronunciations: args.pronunciations.clone(),
        overrides: args.overrides.clone(),
    };
    let (lexicon, warnings) = resources::load_lexicon(&resource_paths).await;

    let pipeline = Arc::new(Pipeline::new(lexicon, classifier_config)?);

    let discovery_config = DiscoveryConfig {
        fail_fast: args.fail_fast,
    };
    let discovered = discovery::collect_discovered_files(&args.inputs, discovery_config).await?;
    let (valid, invalid): (Vec<_>, Vec<_>) = discovered.into_iter().partition(|f| f.error.is_none());

    for file in &invalid {
        if let Some(ref error) = file.error {
            info!("Issue with {}: {}", file.path.display(), error);
        }
    }

    if valid.is_empty() {
        anyhow::bail!("No readable input documents found");
    }

    let files: Vec<PathBuf> = valid.into_iter().map(|f| f.path).collect();

    let progress = if args.no_progress {
        None
    } else {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} documents ({elapsed})")?);
        Some(bar)
    };

    let batch_config = BatchConfig {
        fail_fast: args.fail_fast,
        overwrite_all: args.overwrite_all,
        reader: ReaderConfig {
            fail_fast: args.fail_fast,
            ..Default::default()
        },
        ..Default::default()
    };

    let file_stats = process_files_parallel(files, pipeline, &batch_config, progress.clone()).await?;
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    let run_stats = RunStats::new(file_stats, warnings);
    run_stats.write_json(&args.stats_out).await?;

    println!("vocab-sift v{}", env!("CARGO_PKG_VERSION"));
    println!("  Reports written: {}", run_stats.files_processed);
    if run_stats.files_skipped > 0 {
        println!("  Skipped (report exists): {}", run_stats.files_skipped);
    }
    if !run_stats.resource_warnings.is_empty() {
        println!("  Reference data unavailable: {}", run_stats.resource_warnings.len());
    }
    if run_stats.files_failed > 0 {
        println!("  Failed: {}", run_stats.files_failed);
    }
    for file in run_stats.files.iter().filter(|f| f.extraction_suspect) {
        println!("  No text extracted: {}", file.path);
    }
    println!("  Stats: {}", args.stats_out.display());

    info!(
        "Run completed: {} processed, {} skipped, {} failed",
        run_stats.files_processed, run_stats.files_skipped, run_stats.files_failed
    );

    Ok(())
}
