use thiserror::Error;

/// Failure to load a configuration or word bank.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("word tier `{0}` has no words")]
    EmptyTier(&'static str),
    #[error("word tier `{0}` contains an empty word")]
    EmptyWord(&'static str),
    #[error("at least one lane is required")]
    NoLanes,
    #[error("max_lives must be at least 1, got {0}")]
    InvalidLives(i32),
    #[error("defeats_per_level must be at least 1")]
    InvalidDefeatsPerLevel,
    #[error("cannot reconfigure while a run is in progress")]
    RunInProgress,
}
