//! Background round rotation.
//!
//! A tokio task starts a new round on every tick of a fixed interval. The
//! first tick fires immediately, so a round exists as soon as the scheduler
//! starts. The task runs until [`RoundScheduler::shutdown`] is called.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::services::rounds::GameRounds;

/// Shortest rotation period; `tokio::time::interval` rejects zero.
pub const MIN_PERIOD: Duration = Duration::from_secs(1);

pub struct RoundScheduler {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl RoundScheduler {
    /// Spawn the rotation task. Must be called from within a tokio runtime.
    /// Periods below [`MIN_PERIOD`] are raised to it.
    pub fn start(rounds: Arc<GameRounds>, period: Duration) -> Self {
        let period = if period < MIN_PERIOD {
            warn!(
                requested_ms = period.as_millis() as u64,
                "Round period too short, using minimum"
            );
            MIN_PERIOD
        } else {
            period
        };
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_rotation(rounds, period, cancel.clone()));
        info!(period_secs = period.as_secs(), "Round scheduler started");
        Self { cancel, handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop rotating and wait for the task to exit.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(err) = self.handle.await {
            warn!(error = %err, "Round scheduler task ended abnormally");
        }
    }
}

async fn run_rotation(rounds: Arc<GameRounds>, period: Duration, cancel: CancellationToken) {
    let mut ticker = interval(period);
    // A stalled tick shifts the cadence instead of firing rounds back to back.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                let now = rounds.now();
                rounds.start_new_round(now);
            }
        }
    }

    info!(
        rounds_started = rounds.rounds_started(),
        "Round scheduler stopped"
    );
}
