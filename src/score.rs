use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::game::SessionSummary;

const APP_DIR_NAME: &str = "snake-classic";
const SCORE_FILE_NAME: &str = "highscore.json";
const SESSION_FILE_NAME: &str = "sessions.jsonl";

/// Failures of the score/session store.
///
/// These never reach the game state; callers report them and keep going.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("score store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score store contains invalid data: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: i32,
}

/// One finished session as persisted in the session log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub player: String,
    pub score: i32,
    /// Unix timestamp (seconds) of the game-over transition.
    pub timestamp: u64,
}

impl From<&SessionSummary> for SessionRecord {
    fn from(summary: &SessionSummary) -> Self {
        Self {
            player: summary.player.clone(),
            score: summary.score,
            timestamp: unix_seconds(summary.timestamp),
        }
    }
}

fn unix_seconds(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}

/// Returns the platform-correct high-score file path.
#[must_use]
pub fn high_score_path() -> PathBuf {
    data_file(SCORE_FILE_NAME)
}

/// Returns the platform-correct session-log path.
#[must_use]
pub fn session_log_path() -> PathBuf {
    data_file(SESSION_FILE_NAME)
}

fn data_file(name: &str) -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(name);
    base
}

/// Loads the high score from disk.
///
/// Returns `Ok(0)` when the file does not yet exist (first run). Returns
/// `Err` when the file exists but cannot be read or parsed, so the caller
/// can surface a warning before entering raw terminal mode.
pub fn load_high_score() -> Result<i32, StoreError> {
    load_high_score_from_path(&high_score_path())
}

/// Saves the high score, creating parent directories when needed.
pub fn save_high_score(score: i32) -> Result<(), StoreError> {
    save_high_score_to_path(&high_score_path(), score)
}

/// Appends one finished session to the rolling session log.
pub fn append_session(summary: &SessionSummary) -> Result<(), StoreError> {
    append_session_to_path(&session_log_path(), summary)
}

/// Loads all past sessions, oldest first.
///
/// A missing log is first-run and yields an empty list.
pub fn load_sessions() -> Result<Vec<SessionRecord>, StoreError> {
    load_sessions_from_path(&session_log_path())
}

fn load_high_score_from_path(path: &Path) -> Result<i32, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let file: ScoreFile = serde_json::from_str(&raw)?;
    Ok(file.high_score)
}

fn save_high_score_to_path(path: &Path, score: i32) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload)?;
    fs::write(path, json)?;
    Ok(())
}

fn append_session_to_path(path: &Path, summary: &SessionSummary) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let record = SessionRecord::from(summary);
    let line = serde_json::to_string(&record)?;

    let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")?;
    Ok(())
}

fn load_sessions_from_path(path: &Path) -> Result<Vec<SessionRecord>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(StoreError::from))
        .collect()
}
