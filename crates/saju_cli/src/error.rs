use saju_engine::{EngineError, SajuError, UnsupportedDateError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Saju(#[from] SajuError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    UnsupportedDate(#[from] UnsupportedDateError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
