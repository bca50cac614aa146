// Error types for dictionary loading and option validation.

use std::path::PathBuf;

/// Error type for dictionary construction and loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The dictionary file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A word was empty after trimming. `line` is 1-based.
    #[error("empty word at line {line}")]
    EmptyWord { line: usize },

    /// The count header disagrees with the number of words that follow.
    #[error("count header declares {expected} words, found {found}")]
    CountMismatch { expected: usize, found: usize },
}

/// Error type for invalid ranking options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Thresholds are edit counts and cannot be negative.
    #[error("invalid threshold: {0} (must be >= 0)")]
    InvalidThreshold(i64),

    /// A suggestion limit could not be parsed.
    #[error("invalid suggestion limit: {0}")]
    InvalidMaxSuggestions(String),
}
