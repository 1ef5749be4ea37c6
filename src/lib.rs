pub mod batch;
pub mod classifier;
pub mod discovery;
pub mod error;
pub mod incremental;
pub mod normalizer;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod resources;
pub mod section;

// Re-export the core pipeline types
pub use classifier::{
    classify, ClassificationReport, ClassificationState, ClassifierConfig, FrequencyOrder,
    LexicalClassifier, Lexicon, PronunciationTable,
};
pub use error::ConfigError;
pub use normalizer::{normalize, Document};
pub use pipeline::{DocumentOutcome, Pipeline};
pub use report::render;
pub use section::{SectionState, SectionTracker};

// Re-export batch processing for the CLI and benchmarks
pub use batch::{process_files_parallel, BatchConfig, FileStats, RunStats};
