//! Shared round service used by the scheduler and the HTTP handlers.
//!
//! The whole `RoundState` sits behind one mutex. Each operation takes the
//! lock once and never holds it across an `.await`, so a rotation and a
//! submission are always serialized.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::domain::round::{RoundSettings, RoundState, RoundStatus, RoundView, ScoreEntry};
use crate::domain::words::{scramble, WordList};
use crate::errors::domain::DomainError;

#[derive(Debug)]
pub struct GameRounds {
    round: Mutex<RoundState>,
    words: WordList,
    settings: RoundSettings,
    scramble_words: bool,
    rng: Mutex<StdRng>,
    clock: Arc<dyn Clock>,
}

impl GameRounds {
    pub fn new(
        words: WordList,
        settings: RoundSettings,
        scramble_words: bool,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            round: Mutex::new(RoundState::empty()),
            words,
            settings,
            scramble_words,
            rng: Mutex::new(StdRng::from_os_rng()),
            clock,
        }
    }

    /// Replace the RNG with a seeded one for reproducible word draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    pub fn settings(&self) -> &RoundSettings {
        &self.settings
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn rounds_started(&self) -> u64 {
        self.round.lock().round_number
    }

    /// Draw a word and replace the current round with a fresh one.
    pub fn start_new_round(&self, now: OffsetDateTime) {
        let word = self.draw_word();
        let mut round = self.round.lock();
        *round = round.next(word, now, &self.settings);
        log_round_started(&round);
    }

    pub fn submit_score(
        &self,
        now: OffsetDateTime,
        player_name: String,
        score: i64,
        word: &str,
    ) -> Result<(), DomainError> {
        let mut round = self.round.lock();
        let result = round.submit_score(now, player_name, score, word);
        match &result {
            Ok(()) => debug!(
                round_number = round.round_number,
                submissions = round.scores.len(),
                "Score accepted"
            ),
            Err(err) => debug!(round_number = round.round_number, error = %err, "Score rejected"),
        }
        result
    }

    /// Current round status. Before any round exists this starts one and
    /// reports a full round duration as the wait.
    pub fn query_state(&self, now: OffsetDateTime) -> RoundStatus {
        let mut round = self.round.lock();
        if !round.has_started() {
            let word = self.draw_word();
            *round = round.next(word, now, &self.settings);
            log_round_started(&round);
            return RoundStatus::Inactive {
                seconds_until_next_round: self.settings.round_duration.as_seconds_f64(),
            };
        }
        round.status(now)
    }

    pub fn get_scores(&self, now: OffsetDateTime) -> Result<Vec<ScoreEntry>, DomainError> {
        self.round.lock().ranked_scores(now)
    }

    /// Current word and deadlines, whether or not the round has ended.
    pub fn fetch_word(&self, _now: OffsetDateTime) -> Result<RoundView, DomainError> {
        self.round.lock().word_view()
    }

    fn draw_word(&self) -> String {
        let mut rng = self.rng.lock();
        let word = self.words.choose(&mut *rng);
        if self.scramble_words {
            scramble(word, &mut *rng)
        } else {
            word.to_string()
        }
    }
}

fn log_round_started(round: &RoundState) {
    info!(
        round_number = round.round_number,
        word = %round.current_word,
        round_end_time = %round.round_end_time,
        "Started new round"
    );
}
