//! Shared setup for engine integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Once, OnceLock};

use saju_calendar::{CalendarConfig, ReferenceTables};
use saju_engine::{SajuConfig, SajuEngine, ZiHourRule};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();
static TABLES: OnceLock<Arc<ReferenceTables>> = OnceLock::new();

/// Route engine logs to the test harness; `RUST_LOG` overrides the level.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Full-range tables, built once per test binary.
pub fn tables() -> Arc<ReferenceTables> {
    TABLES
        .get_or_init(|| Arc::new(ReferenceTables::build(&CalendarConfig::default()).unwrap()))
        .clone()
}

/// Default configuration pinned to 2025 as the current year.
pub fn config() -> SajuConfig {
    SajuConfig {
        current_year: Some(2025),
        ..SajuConfig::default()
    }
}

pub fn engine() -> SajuEngine {
    engine_with(config())
}

pub fn engine_with(config: SajuConfig) -> SajuEngine {
    init_tracing();
    SajuEngine::with_tables(config, tables()).unwrap()
}

pub fn advance_day_engine() -> SajuEngine {
    engine_with(SajuConfig {
        zi_hour: ZiHourRule::AdvanceDay,
        ..config()
    })
}
