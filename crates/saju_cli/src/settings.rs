//! Layered engine settings.
//!
//! # Precedence (lowest to highest)
//! 1. Compiled defaults of [`SajuConfig`]
//! 2. TOML file passed with `--config`
//! 3. Environment variables: `SAJU__*`, `__` separating nested keys
//!    (`SAJU__ZI_HOUR=advance_day`, `SAJU__CALENDAR__UTC_OFFSET_MINUTES=480`)
//!
//! `current_year` left unset by every layer is filled from the local clock.

use std::path::Path;

use chrono::{Datelike, Local};
use config::{Config, Environment, File};
use saju_engine::SajuConfig;

use crate::error::CliError;

const ENV_PREFIX: &str = "SAJU";
const ENV_SEPARATOR: &str = "__";

pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

/// Load settings from the optional file and the process environment.
pub fn load(path: Option<&Path>) -> Result<SajuConfig, CliError> {
    let mut settings = load_with(path, environment())?;
    if settings.current_year.is_none() {
        settings.current_year = Some(Local::now().year());
    }
    Ok(settings)
}

/// Layer defaults, `path` and `env`, without consulting the clock.
pub fn load_with(path: Option<&Path>, env: Environment) -> Result<SajuConfig, CliError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }
    let settings: SajuConfig = builder.add_source(env).build()?.try_deserialize()?;
    tracing::debug!(?settings, "settings loaded");
    Ok(settings)
}
