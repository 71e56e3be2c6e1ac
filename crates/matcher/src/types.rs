use canonical::{NormalizeConfig, TextBlock};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pairing strategy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Pair block `i` of A with block `i` of B, padding the shorter side.
    Positional,
    /// Exact fingerprint matches first, then first-fit similarity matches.
    #[default]
    Content,
}

impl MatchMode {
    /// Stable lowercase name, used in logs and metrics labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Positional => "positional",
            MatchMode::Content => "content",
        }
    }
}

/// Configuration for the block matcher.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded
/// in a higher-level comparison config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Pairing strategy.
    #[serde(default)]
    pub mode: MatchMode,
    /// Minimum similarity ratio for a fallback pairing. Must lie in `(0, 1]`.
    #[serde(default = "MatchConfig::default_similarity_threshold")]
    pub similarity_threshold: f64,
    /// Score candidate pairs on the rayon pool during the similarity pass.
    #[serde(default)]
    pub use_parallel: bool,
    /// Normalization applied before fingerprinting.
    #[serde(default)]
    pub normalization: NormalizeConfig,
}

impl MatchConfig {
    pub(crate) fn default_similarity_threshold() -> f64 {
        0.8
    }

    /// Content-mode config with the given threshold.
    pub fn content(similarity_threshold: f64) -> Self {
        Self {
            mode: MatchMode::Content,
            similarity_threshold,
            ..Self::default()
        }
    }

    /// Positional-mode config.
    pub fn positional() -> Self {
        Self {
            mode: MatchMode::Positional,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_similarity_threshold(mut self, similarity_threshold: f64) -> Self {
        self.similarity_threshold = similarity_threshold;
        self
    }

    /// Enable or disable the parallel similarity pass. Output is identical
    /// either way.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn with_normalization(mut self, normalization: NormalizeConfig) -> Self {
        self.normalization = normalization;
        self
    }

    /// Validate the configuration.
    ///
    /// The threshold is checked even in positional mode so a config never
    /// becomes invalid by switching modes.
    pub fn validate(&self) -> Result<(), MatchError> {
        let threshold = self.similarity_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(MatchError::InvalidThreshold { threshold });
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::default(),
            similarity_threshold: Self::default_similarity_threshold(),
            use_parallel: false,
            normalization: NormalizeConfig::default(),
        }
    }
}

/// How a matched pair was found.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MatchKind {
    /// Fingerprints of the normalized texts are equal.
    Exact,
    /// Similarity ratio of the raw texts reached the threshold.
    Similar { ratio: f64 },
}

/// Relationship between at most one block of A and at most one block of B.
///
/// Records borrow the blocks from the caller's lists. Across the records of a
/// single pairing run, every block of A and B appears exactly once.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PairingRecord<'a> {
    Matched {
        a: &'a TextBlock,
        b: &'a TextBlock,
        kind: MatchKind,
    },
    RemovedOnly {
        a: &'a TextBlock,
    },
    AddedOnly {
        b: &'a TextBlock,
    },
    /// Positional pairing; at least one side is present.
    Aligned {
        a: Option<&'a TextBlock>,
        b: Option<&'a TextBlock>,
    },
}

impl<'a> PairingRecord<'a> {
    /// Block from A, if any.
    pub fn a_side(&self) -> Option<&'a TextBlock> {
        match *self {
            PairingRecord::Matched { a, .. } | PairingRecord::RemovedOnly { a } => Some(a),
            PairingRecord::AddedOnly { .. } => None,
            PairingRecord::Aligned { a, .. } => a,
        }
    }

    /// Block from B, if any.
    pub fn b_side(&self) -> Option<&'a TextBlock> {
        match *self {
            PairingRecord::Matched { b, .. } | PairingRecord::AddedOnly { b } => Some(b),
            PairingRecord::RemovedOnly { .. } => None,
            PairingRecord::Aligned { b, .. } => b,
        }
    }

    /// Both sides, when both are present.
    pub fn both_sides(&self) -> Option<(&'a TextBlock, &'a TextBlock)> {
        self.a_side().zip(self.b_side())
    }

    /// Index used to restore document order: A index when present, else B index.
    pub fn anchor_index(&self) -> usize {
        self.a_side()
            .or_else(|| self.b_side())
            .map(TextBlock::index)
            .unwrap_or(0)
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, PairingRecord::Matched { .. })
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("invalid match config: similarity_threshold must be in (0, 1] (got {threshold})")]
    InvalidThreshold { threshold: f64 },
}
