// Sticky section-context tracking over bracket-delimited markers such as `[[pkg]]`.
// The state is threaded through the paragraph traversal by the caller.

use anyhow::Result;
use regex_automata::meta::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One or two `[`, a bracket-free label, then up to two `]`.
/// Mismatched bracket counts are accepted.
const MARKER_PATTERN: &str = r"\[\[?\s*([^\[\]]+)\]{0,2}";

/// Section context active while classifying words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionState {
    #[default]
    None,
    Pkg,
    Anchor,
}

impl SectionState {
    /// Map a marker label onto a state; `None` for unrecognized labels
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.to_lowercase();
        if label.contains("pkg") {
            Some(SectionState::Pkg)
        } else if label.contains("anchor") {
            Some(SectionState::Anchor)
        } else {
            None
        }
    }
}

/// Detects section markers in paragraph text
#[derive(Debug, Clone)]
pub struct SectionTracker {
    marker: Regex,
}

impl SectionTracker {
    pub fn new() -> Result<Self> {
        let marker = Regex::new(MARKER_PATTERN)?;
        Ok(Self { marker })
    }

    /// Find the first marker label in the paragraph, lowercased and trimmed
    pub fn find_label(&self, paragraph: &str) -> Option<String> {
        let lowered = paragraph.to_lowercase();
        let mut caps = self.marker.create_captures();
        self.marker.captures(lowered.as_str(), &mut caps);

        let span = caps.get_group(1)?;
        Some(lowered[span.start..span.end].trim().to_string())
    }

    /// Compute the state after reading `paragraph`.
    ///
    /// Returns the new state together with the matched label, if any. A marker
    /// with an unrecognized label, or no marker at all, leaves the state as is.
    pub fn advance(&self, paragraph: &str, current: SectionState) -> (SectionState, Option<String>) {
        let Some(label) = self.find_label(paragraph) else {
            return (current, None);
        };

        let next = SectionState::from_label(&label).unwrap_or(current);
        if next != current {
            debug!(label = %label, from = ?current, to = ?next, "Section changed");
        }
        (next, Some(label))
    }
}
