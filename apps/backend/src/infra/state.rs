use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::clock::{Clock, SystemClock};
use crate::config::game::GameConfig;
use crate::domain::words::WordList;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::rounds::GameRounds;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: GameConfig,
    words: Option<WordList>,
    clock: Option<Arc<dyn Clock>>,
    seed: Option<u64>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            words: None,
            clock: None,
            seed: None,
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use these words instead of `config.word_list_path` or the built-in list.
    pub fn with_words(mut self, words: WordList) -> Self {
        self.words = Some(words);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resolve the word source and assemble the round service.
    ///
    /// Fails when a configured word list cannot be read or has no words.
    pub fn build(self) -> Result<AppState, AppError> {
        let words = match (self.words, &self.config.word_list_path) {
            (Some(words), _) => words,
            (None, Some(path)) => load_word_list(path)?,
            (None, None) => WordList::builtin(),
        };
        info!(words = words.len(), "Word list ready");

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock::new()));
        let mut rounds = GameRounds::new(
            words,
            self.config.settings,
            self.config.scramble_words,
            clock,
        );
        if let Some(seed) = self.seed {
            rounds = rounds.with_seed(seed);
        }

        Ok(AppState::new(Arc::new(rounds), self.config))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

/// Read a line-delimited word list file.
pub fn load_word_list(path: &Path) -> Result<WordList, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to read word list");
        AppError::internal(
            ErrorCode::WordListUnavailable,
            format!("Failed to read word list {}: {e}", path.display()),
        )
    })?;

    let words = WordList::parse(&contents).map_err(|e| {
        AppError::internal(
            ErrorCode::WordListUnavailable,
            format!("Word list {} has no usable words: {e}", path.display()),
        )
    })?;

    debug!(path = %path.display(), words = words.len(), "Loaded word list");
    Ok(words)
}
