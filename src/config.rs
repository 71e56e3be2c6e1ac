//! YAML configuration for a comparison run.
//!
//! Every section is optional; omitted fields take their defaults.
//!
//! ```yaml
//! version: "1.0"
//!
//! matcher:
//!   mode: "content"          # or "positional"
//!   similarity_threshold: 0.8
//!   use_parallel: false
//!   normalization:
//!     lowercase: true
//!     normalize_unicode: false
//!
//! markers:
//!   removed: "REMOVED"
//!   added: "ADDED"
//!
//! labels:
//!   no_difference: "No differences."
//!   empty_placeholder: "[EMPTY]"
//! ```

use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use tokendiff::DiffMarkers;

use crate::error::ComparisonError;
use crate::report::ReportLabels;

/// Top-level comparison configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Configuration format version
    #[serde(default = "ComparisonConfig::default_version")]
    pub version: String,

    /// Pairing strategy and threshold
    #[serde(default)]
    pub matcher: MatchConfig,

    /// Labels inside the rendered change markers
    #[serde(default)]
    pub markers: DiffMarkers,

    /// Fixed report strings
    #[serde(default)]
    pub labels: ReportLabels,
}

impl ComparisonConfig {
    fn default_version() -> String {
        "1.0".to_string()
    }

    /// Config with the given matcher settings and default presentation.
    pub fn with_matcher(matcher: MatchConfig) -> Self {
        Self {
            matcher,
            ..Self::default()
        }
    }

    /// Parse and validate a YAML configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self, ComparisonError> {
        let config: ComparisonConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ComparisonError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ComparisonError::UnsupportedVersion(v.to_string())),
        }?;
        self.matcher.validate()?;
        Ok(())
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            matcher: MatchConfig::default(),
            markers: DiffMarkers::default(),
            labels: ReportLabels::default(),
        }
    }
}
