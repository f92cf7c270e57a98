//! Domain-level error type for the round lifecycle.
//!
//! HTTP-agnostic. Handlers return `Result<T, crate::error::AppError>` and
//! convert through `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rejections produced by round operations. All are user-facing and never
/// fatal to the process, except `EmptyWordList` which only occurs while
/// building state at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// No word has been drawn yet.
    NoActiveRound,
    /// The submission deadline has passed.
    SubmissionClosed,
    /// The submitted word is not the current word.
    WordMismatch,
    /// The scores-ready time has not been reached.
    ScoresNotReady,
    /// The word source has nothing to choose from.
    EmptyWordList,
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let msg = match self {
            DomainError::NoActiveRound => "No round is currently active.",
            DomainError::SubmissionClosed => "Score submission period has ended.",
            DomainError::WordMismatch => "Submitted word does not match the current round's word.",
            DomainError::ScoresNotReady => "Scores are not ready yet.",
            DomainError::EmptyWordList => "Word list is empty.",
        };
        f.write_str(msg)
    }
}

impl Error for DomainError {}
