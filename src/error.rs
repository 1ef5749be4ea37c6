use thiserror::Error;

/// Configuration rejected at construction time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("infrequent-word threshold must be at least 1, got {0}")]
    InfrequentThreshold(u32),

    #[error("long-word minimum length must be at least 1, got {0}")]
    LongWordLength(usize),

    #[error("rarest-word limit must be at least 1, got {0}")]
    RarestLimit(usize),
}
