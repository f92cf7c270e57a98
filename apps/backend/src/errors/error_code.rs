//! Error codes for the word game API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code maps 1:1 to the SCREAMING_SNAKE_CASE string that appears in
//! HTTP responses.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Round lifecycle
    /// No word has been drawn yet
    NoActiveRound,
    /// Submission arrived after the submission deadline
    SubmissionClosed,
    /// Submitted word is not the current round's word
    WordMismatch,
    /// Scores requested before the ready time
    ScoresNotReady,

    // Request Validation
    /// General bad request error
    BadRequest,
    /// Request body exceeds the accepted size
    PayloadTooLarge,

    // System Errors
    /// Word list could not be loaded or is empty
    WordListUnavailable,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoActiveRound => "NO_ACTIVE_ROUND",
            Self::SubmissionClosed => "SUBMISSION_CLOSED",
            Self::WordMismatch => "WORD_MISMATCH",
            Self::ScoresNotReady => "SCORES_NOT_READY",

            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            Self::WordListUnavailable => "WORD_LIST_UNAVAILABLE",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
