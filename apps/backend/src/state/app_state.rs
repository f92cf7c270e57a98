use std::sync::Arc;

use crate::config::game::GameConfig;
use crate::services::rounds::GameRounds;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single live round, shared with the scheduler
    pub rounds: Arc<GameRounds>,
    /// Configuration the state was built from
    pub config: Arc<GameConfig>,
}

impl AppState {
    pub fn new(rounds: Arc<GameRounds>, config: GameConfig) -> Self {
        Self {
            rounds,
            config: Arc::new(config),
        }
    }
}
