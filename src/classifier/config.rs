use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Known words seen fewer times than this are reported as infrequent
pub const DEFAULT_INFREQUENT_THRESHOLD: u32 = 4;
/// Words at least this long are reported as long words
pub const DEFAULT_LONG_WORD_MIN_LEN: usize = 12;
/// Size of the rarest-known-words slice
pub const DEFAULT_RAREST_LIMIT: usize = 150;

/// How the external frequency number is interpreted when picking the rarest words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrequencyOrder {
    /// Smaller numbers are rarer; sort ascending
    #[default]
    RankAscending,
    /// Larger numbers are more common (raw counts); sort descending
    CountDescending,
}

/// Thresholds for the classification report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub infrequent_threshold: u32,
    pub long_word_min_len: usize,
    pub rarest_limit: usize,
    pub frequency_order: FrequencyOrder,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            infrequent_threshold: DEFAULT_INFREQUENT_THRESHOLD,
            long_word_min_len: DEFAULT_LONG_WORD_MIN_LEN,
            rarest_limit: DEFAULT_RAREST_LIMIT,
            frequency_order: FrequencyOrder::default(),
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.infrequent_threshold == 0 {
            return Err(ConfigError::InfrequentThreshold(self.infrequent_threshold));
        }
        if self.long_word_min_len == 0 {
            return Err(ConfigError::LongWordLength(self.long_word_min_len));
        }
        if self.rarest_limit == 0 {
            return Err(ConfigError::RarestLimit(self.rarest_limit));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ClassifierConfig::default();
        assert_eq!(config.infrequent_threshold, 4);
        assert_eq!(config.long_word_min_len, 12);
        assert_eq!(config.rarest_limit, 150);
        assert_eq!(config.frequency_order, FrequencyOrder::RankAscending);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_values_rejected() {
        let config = ClassifierConfig { infrequent_threshold: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::InfrequentThreshold(0)));

        let config = ClassifierConfig { long_word_min_len: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::LongWordLength(0)));

        let config = ClassifierConfig { rarest_limit: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::RarestLimit(0)));
    }
}
