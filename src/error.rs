use matcher::MatchError;
use thiserror::Error;

/// Errors raised while building a comparator or loading its configuration.
///
/// Comparison itself never fails.
#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}
