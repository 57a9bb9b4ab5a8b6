//! Error types for quiz construction, test sessions and settings.

use thiserror::Error;

/// Errors raised by the quiz core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// A session or setting was requested with values the core does not support.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An answer was submitted after the last question.
    #[error("test session already finished")]
    SessionAlreadyFinished,

    /// Distractor sampling needs at least four elements.
    #[error("catalog has {available} elements, at least 4 are required")]
    InsufficientCatalogSize { available: usize },
}

/// Errors raised while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] QuizError),
}
