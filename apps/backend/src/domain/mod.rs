//! Domain layer: pure round lifecycle types and helpers.

pub mod round;
pub mod words;


// Re-exports for ergonomics
pub use round::{RoundSettings, RoundState, RoundStatus, RoundView, ScoreEntry};
pub use words::{scramble, WordList};
