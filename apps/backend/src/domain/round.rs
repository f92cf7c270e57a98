//! Round lifecycle state.
//!
//! Pure domain logic: every operation takes `now` explicitly so callers
//! decide where time comes from.

use serde::Serialize;
use time::{Duration, OffsetDateTime};

use crate::errors::domain::DomainError;

/// Timing policy for every round, each offset measured from round start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettings {
    pub round_duration: Duration,
    pub submission_window: Duration,
    pub scores_ready_offset: Duration,
}

impl RoundSettings {
    pub fn from_secs(round_duration: u32, submission_window: u32, scores_ready_offset: u32) -> Self {
        Self {
            round_duration: Duration::seconds(i64::from(round_duration)),
            submission_window: Duration::seconds(i64::from(submission_window)),
            scores_ready_offset: Duration::seconds(i64::from(scores_ready_offset)),
        }
    }

    /// Round duration as a tokio-friendly period.
    pub fn round_period(&self) -> std::time::Duration {
        self.round_duration.unsigned_abs()
    }
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self::from_secs(120, 92, 95)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub player_name: String,
    pub score: i64,
}

/// The live word and its deadlines, as served to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub word: String,
    pub end_time: OffsetDateTime,
    pub submission_deadline: OffsetDateTime,
    pub ready_time: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoundStatus {
    Active(RoundView),
    Inactive { seconds_until_next_round: f64 },
}

/// Snapshot of the current round. Replaced wholesale on rotation.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub current_word: String,
    pub round_end_time: OffsetDateTime,
    pub score_submission_deadline: OffsetDateTime,
    pub scores_ready_time: OffsetDateTime,
    pub scores: Vec<ScoreEntry>,
    /// Rounds started so far; 0 until the first round.
    pub round_number: u64,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            current_word: String::new(),
            round_end_time: OffsetDateTime::UNIX_EPOCH,
            score_submission_deadline: OffsetDateTime::UNIX_EPOCH,
            scores_ready_time: OffsetDateTime::UNIX_EPOCH,
            scores: Vec::new(),
            round_number: 0,
        }
    }

    /// Build the round that follows `self`, started at `started_at`.
    pub fn next(&self, word: String, started_at: OffsetDateTime, settings: &RoundSettings) -> Self {
        Self {
            current_word: word,
            round_end_time: started_at + settings.round_duration,
            score_submission_deadline: started_at + settings.submission_window,
            scores_ready_time: started_at + settings.scores_ready_offset,
            scores: Vec::new(),
            round_number: self.round_number + 1,
        }
    }

    pub fn has_started(&self) -> bool {
        self.round_number > 0
    }

    pub fn is_active(&self, now: OffsetDateTime) -> bool {
        !self.current_word.is_empty() && now < self.round_end_time
    }

    /// Record a score. The deadline is checked before the word, and a
    /// submission exactly at the deadline is still accepted.
    pub fn submit_score(
        &mut self,
        now: OffsetDateTime,
        player_name: String,
        score: i64,
        word: &str,
    ) -> Result<(), DomainError> {
        if now > self.score_submission_deadline {
            return Err(DomainError::SubmissionClosed);
        }
        if word != self.current_word {
            return Err(DomainError::WordMismatch);
        }
        self.scores.push(ScoreEntry { player_name, score });
        Ok(())
    }

    pub fn status(&self, now: OffsetDateTime) -> RoundStatus {
        if self.is_active(now) {
            return RoundStatus::Active(self.view());
        }
        let remaining = (self.round_end_time - now).as_seconds_f64();
        RoundStatus::Inactive {
            seconds_until_next_round: remaining.max(0.0),
        }
    }

    /// Scores ordered by score descending; ties keep submission order.
    pub fn ranked_scores(&self, now: OffsetDateTime) -> Result<Vec<ScoreEntry>, DomainError> {
        if now < self.scores_ready_time {
            return Err(DomainError::ScoresNotReady);
        }
        let mut ranked = self.scores.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(ranked)
    }

    /// The current word and deadlines. Unlike [`RoundState::status`], this
    /// does not look at `round_end_time`.
    pub fn word_view(&self) -> Result<RoundView, DomainError> {
        if self.current_word.is_empty() {
            return Err(DomainError::NoActiveRound);
        }
        Ok(self.view())
    }

    fn view(&self) -> RoundView {
        RoundView {
            word: self.current_word.clone(),
            end_time: self.round_end_time,
            submission_deadline: self.score_submission_deadline,
            ready_time: self.scores_ready_time,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::empty()
    }
}
