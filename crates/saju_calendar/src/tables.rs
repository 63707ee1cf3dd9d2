//! Immutable reference tables built once at startup.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::TableError;
use crate::lunar_table::{LUNAR_DATA_FIRST_YEAR, LUNAR_DATA_LAST_YEAR, LunarTable};
use crate::solar_term::SolarTermTable;

/// Korea Standard Time, minutes east of UTC. `480` gives China Standard
/// Time boundaries instead.
pub const KST_OFFSET_MINUTES: i32 = 540;

/// Year range and civil time zone the tables are built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// First Gregorian year served.
    pub first_year: i32,
    /// Last Gregorian year served.
    pub last_year: i32,
    /// Civil offset east of UTC for solar-term instants.
    pub utc_offset_minutes: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_year: LUNAR_DATA_FIRST_YEAR,
            last_year: LUNAR_DATA_LAST_YEAR,
            utc_offset_minutes: KST_OFFSET_MINUTES,
        }
    }
}

impl CalendarConfig {
    /// Validate the year range and offset.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.first_year > self.last_year {
            return Err(TableError::InvalidConfig("first_year must be <= last_year"));
        }
        if self.first_year < LUNAR_DATA_FIRST_YEAR || self.last_year > LUNAR_DATA_LAST_YEAR {
            return Err(TableError::InvalidConfig(
                "year range must lie within 1900..=2049",
            ));
        }
        if !(-720..=840).contains(&self.utc_offset_minutes) {
            return Err(TableError::InvalidConfig(
                "utc_offset_minutes must be within -720..=840",
            ));
        }
        Ok(())
    }
}

/// Lunar table and solar-term table for a configured year range.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTables {
    config: CalendarConfig,
    lunar: LunarTable,
    terms: SolarTermTable,
}

impl ReferenceTables {
    /// Decode and generate every table for `config`.
    ///
    /// Solar terms cover cycle years `first_year - 1 ..= last_year + 1` so
    /// that every moment inside the range has a governing term and a
    /// following month-opening term.
    pub fn build(config: &CalendarConfig) -> Result<Self, TableError> {
        config.validate()?;
        let started = Instant::now();
        let lunar = LunarTable::standard()?.truncated(config.first_year, config.last_year)?;
        let terms = SolarTermTable::generate(
            config.first_year - 1,
            config.last_year + 1,
            config.utc_offset_minutes,
        )?;
        info!(
            first_year = config.first_year,
            last_year = config.last_year,
            utc_offset_minutes = config.utc_offset_minutes,
            lunar_years = lunar.years().len(),
            solar_terms = terms.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "reference tables built"
        );
        Ok(Self {
            config: config.clone(),
            lunar,
            terms,
        })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn lunar(&self) -> &LunarTable {
        &self.lunar
    }

    pub fn terms(&self) -> &SolarTermTable {
        &self.terms
    }
}
