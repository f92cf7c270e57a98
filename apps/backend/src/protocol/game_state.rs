use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::domain::round::{RoundStatus, RoundView, ScoreEntry};

/// ISO-8601 UTC with a trailing `Z`. Sub-second parts are truncated, not
/// rounded, so a deadline at `:32.7` renders as `:32`.
pub fn utc_timestamp(ts: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");
    ts.to_offset(time::UtcOffset::UTC)
        .format(&format)
        .unwrap_or_else(|_| "unknown".to_string())
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of `GET /game-state`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "round_status", rename_all = "snake_case")]
pub enum GameStateResponse {
    Active {
        current_word: String,
        current_time_utc: String,
        game_end_time_utc: String,
        score_submission_deadline_utc: String,
        scores_ready_time_utc: String,
    },
    Inactive {
        time_until_next_round: f64,
    },
}

impl GameStateResponse {
    pub fn from_status(status: RoundStatus, now: OffsetDateTime) -> Self {
        match status {
            RoundStatus::Active(view) => Self::Active {
                current_word: view.word,
                current_time_utc: utc_timestamp(now),
                game_end_time_utc: utc_timestamp(view.end_time),
                score_submission_deadline_utc: utc_timestamp(view.submission_deadline),
                scores_ready_time_utc: utc_timestamp(view.ready_time),
            },
            RoundStatus::Inactive {
                seconds_until_next_round,
            } => Self::Inactive {
                time_until_next_round: seconds_until_next_round,
            },
        }
    }
}

/// Body of `GET /fetch-word`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchWordResponse {
    pub word: String,
    pub current_time_utc: String,
    pub game_end_time_utc: String,
    pub score_submission_deadline_utc: String,
    pub scores_ready_time_utc: String,
}

impl FetchWordResponse {
    pub fn new(view: RoundView, now: OffsetDateTime) -> Self {
        Self {
            word: view.word,
            current_time_utc: utc_timestamp(now),
            game_end_time_utc: utc_timestamp(view.end_time),
            score_submission_deadline_utc: utc_timestamp(view.submission_deadline),
            scores_ready_time_utc: utc_timestamp(view.ready_time),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerScore {
    pub player: String,
    pub score: i64,
}

impl From<ScoreEntry> for PlayerScore {
    fn from(entry: ScoreEntry) -> Self {
        Self {
            player: entry.player_name,
            score: entry.score,
        }
    }
}

/// Body of `GET /get_scores`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoresResponse {
    pub scores: Vec<PlayerScore>,
}

/// Body of `POST /submit-score`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitScoreRequest {
    pub player_name: String,
    pub score: i64,
    pub word: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitScoreResponse {
    pub status: String,
}
