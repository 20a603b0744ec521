//! Error types for trivia-quiz.

use thiserror::Error;

/// Main error type for trivia-quiz operations.
#[derive(Error, Debug)]
pub enum TriviaError {
    /// Transport-level failure talking to the trivia provider.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Trivia provider answered with a non-2xx status.
    #[error("trivia provider returned HTTP {0}")]
    HttpStatus(reqwest::StatusCode),

    /// Response body did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The provider returned no questions.
    #[error("failed to fetch questions")]
    EmptyPool,

    /// Every question in the session has already been answered.
    #[error("session already complete")]
    SessionComplete,

    /// Answer index outside the current question's choices.
    #[error("invalid choice {index}: question has {available} answers")]
    InvalidChoice { index: usize, available: usize },

    /// Invalid state transition attempted.
    #[error("invalid state transition from {from:?} to {to:?}")]
    InvalidStateTransition {
        from: crate::session::SessionState,
        to: crate::session::SessionState,
    },

    /// I/O error from the shell.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for trivia-quiz operations.
pub type Result<T> = std::result::Result<T, TriviaError>;
