//! Game configuration loaded from environment variables.
//!
//! | Variable                   | Default     |
//! |----------------------------|-------------|
//! | `BACKEND_HOST`             | `0.0.0.0`   |
//! | `BACKEND_PORT`             | `8080`      |
//! | `ROUND_DURATION_SECS`      | `120`       |
//! | `SUBMISSION_WINDOW_SECS`   | `92`        |
//! | `SCORES_READY_OFFSET_SECS` | `95`        |
//! | `WORD_LIST_PATH`           | built-in    |
//! | `SCRAMBLE_WORDS`           | `true`      |
//! | `ROTATION_MODE`            | `scheduled` |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::domain::round::RoundSettings;
use crate::error::AppError;

/// How rounds advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// A background task starts a new round every round duration.
    #[default]
    Scheduled,
    /// No background task. Only the first `/game-state` query starts a
    /// round, and nothing rotates it afterwards.
    Lazy,
}

impl FromStr for RotationMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "lazy" => Ok(Self::Lazy),
            other => Err(AppError::config(format!(
                "ROTATION_MODE must be 'scheduled' or 'lazy', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub host: String,
    pub port: u16,
    pub settings: RoundSettings,
    pub word_list_path: Option<PathBuf>,
    pub scramble_words: bool,
    pub rotation_mode: RotationMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            settings: RoundSettings::default(),
            word_list_path: None,
            scramble_words: true,
            rotation_mode: RotationMode::Scheduled,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("BACKEND_HOST").unwrap_or(defaults.host);
        let port = parse_or("BACKEND_PORT", var("BACKEND_PORT"), defaults.port)?;

        let round_duration = positive_secs("ROUND_DURATION_SECS", var("ROUND_DURATION_SECS"), 120)?;
        let submission_window =
            positive_secs("SUBMISSION_WINDOW_SECS", var("SUBMISSION_WINDOW_SECS"), 92)?;
        let scores_ready_offset =
            positive_secs("SCORES_READY_OFFSET_SECS", var("SCORES_READY_OFFSET_SECS"), 95)?;

        if submission_window > scores_ready_offset {
            return Err(AppError::config(format!(
                "SUBMISSION_WINDOW_SECS ({submission_window}) must not exceed SCORES_READY_OFFSET_SECS ({scores_ready_offset})"
            )));
        }
        if submission_window < round_duration {
            warn!(
                round_duration,
                submission_window,
                "Submission window closes before the round ends"
            );
        }

        let word_list_path = var("WORD_LIST_PATH").map(PathBuf::from);
        let scramble_words = match var("SCRAMBLE_WORDS") {
            Some(raw) => parse_bool("SCRAMBLE_WORDS", &raw)?,
            None => defaults.scramble_words,
        };
        let rotation_mode = match var("ROTATION_MODE") {
            Some(raw) => raw.parse()?,
            None => defaults.rotation_mode,
        };

        Ok(Self {
            host,
            port,
            settings: RoundSettings::from_secs(round_duration, submission_window, scores_ready_offset),
            word_list_path,
            scramble_words,
            rotation_mode,
        })
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, AppError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{key} has invalid value '{raw}'"))),
    }
}

fn positive_secs(key: &str, raw: Option<String>, default: u32) -> Result<u32, AppError> {
    let secs = parse_or(key, raw, default)?;
    if secs == 0 {
        return Err(AppError::config(format!("{key} must be greater than zero")));
    }
    Ok(secs)
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(format!("{key} must be a boolean, got '{raw}'"))),
    }
}
