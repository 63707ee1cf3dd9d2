//! Solar ↔ lunar conversion and solar-term lookups over [`ReferenceTables`].

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::error::UnsupportedDateError;
use crate::lunar_table::LunarYearInfo;
use crate::solar_term::SolarTermInstant;
use crate::tables::ReferenceTables;

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    /// Day lies in the intercalary repeat of `month`.
    pub leap: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u8, day: u8, leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            leap,
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.leap {
            f.write_str(" (leap)")?;
        }
        Ok(())
    }
}

/// Calendar conversions backed by shared, immutable reference tables.
#[derive(Debug, Clone)]
pub struct LunisolarCalendar {
    tables: Arc<ReferenceTables>,
}

impl LunisolarCalendar {
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }

    /// Underlying tables.
    pub fn tables(&self) -> &Arc<ReferenceTables> {
        &self.tables
    }

    /// Fail unless `year` lies inside the configured range.
    pub fn check_year(&self, year: i32) -> Result<(), UnsupportedDateError> {
        let config = self.tables.config();
        if (config.first_year..=config.last_year).contains(&year) {
            Ok(())
        } else {
            Err(UnsupportedDateError::YearOutOfRange {
                year,
                first: config.first_year,
                last: config.last_year,
            })
        }
    }

    /// Decoded lunar year, if inside the table.
    pub fn lunar_year_info(&self, year: i32) -> Option<&LunarYearInfo> {
        self.tables.lunar().year(year)
    }

    /// Leap month of a lunar year (`None` when the year has none or is
    /// outside the table).
    pub fn leap_month(&self, year: i32) -> Option<u8> {
        self.lunar_year_info(year).and_then(|y| y.leap_month)
    }

    /// Length (29 or 30) of a lunar month, if that month exists.
    pub fn month_length(&self, year: i32, month: u8, leap: bool) -> Option<u8> {
        self.lunar_year_info(year)
            .and_then(|y| y.month(month, leap))
            .map(|m| m.days)
    }

    /// Gregorian date of a lunar date.
    ///
    /// A leap month that did not occur in `year` is an error, never a
    /// fallback to the regular month.
    pub fn to_solar(&self, date: &LunarDate) -> Result<NaiveDate, UnsupportedDateError> {
        self.check_year(date.year)?;
        let info = self
            .lunar_year_info(date.year)
            .ok_or(UnsupportedDateError::YearOutOfRange {
                year: date.year,
                first: self.tables.config().first_year,
                last: self.tables.config().last_year,
            })?;
        let month = info
            .month(date.month, date.leap)
            .ok_or(UnsupportedDateError::MissingMonth {
                year: date.year,
                month: date.month,
                leap: date.leap,
            })?;
        if date.day == 0 || date.day > month.days {
            return Err(UnsupportedDateError::DayOutOfMonth {
                year: date.year,
                month: date.month,
                leap: date.leap,
                day: date.day,
                days: month.days,
            });
        }
        let solar = month
            .start
            .checked_add_days(Days::new(u64::from(date.day - 1)))
            .ok_or(UnsupportedDateError::DateOutOfTable { date: month.start })?;
        debug!(lunar = %date, %solar, "lunar to solar");
        Ok(solar)
    }

    /// Lunar date of a Gregorian date.
    pub fn to_lunar(&self, date: NaiveDate) -> Result<LunarDate, UnsupportedDateError> {
        let out = || UnsupportedDateError::DateOutOfTable { date };
        let info = self.tables.lunar().year_containing(date).ok_or_else(out)?;
        let idx = info.months.partition_point(|m| m.start <= date);
        let month = idx
            .checked_sub(1)
            .and_then(|i| info.months.get(i))
            .ok_or_else(out)?;
        let day = (date - month.start).num_days() + 1;
        Ok(LunarDate {
            year: info.year,
            month: month.month,
            day: day as u8,
            leap: month.leap,
        })
    }

    /// Governing solar term: latest term instant ≤ `at` (local time).
    pub fn solar_term_at(&self, at: NaiveDateTime) -> Result<SolarTermInstant, UnsupportedDateError> {
        self.check_year(at.year())?;
        self.tables
            .terms()
            .governing(at)
            .copied()
            .ok_or(UnsupportedDateError::MomentOutOfTable { at })
    }

    /// Index 0..=23 of the governing term (0 = Start of Spring).
    pub fn solar_term_index(&self, at: NaiveDateTime) -> Result<u8, UnsupportedDateError> {
        self.solar_term_at(at).map(|t| t.term.index())
    }

    /// Earliest month-opening term strictly after `at`.
    pub fn next_jie(&self, at: NaiveDateTime) -> Result<SolarTermInstant, UnsupportedDateError> {
        self.tables
            .terms()
            .next_jie(at)
            .copied()
            .ok_or(UnsupportedDateError::MomentOutOfTable { at })
    }

    /// Latest month-opening term at or before `at`.
    pub fn prev_jie(&self, at: NaiveDateTime) -> Result<SolarTermInstant, UnsupportedDateError> {
        self.tables
            .terms()
            .prev_jie(at)
            .copied()
            .ok_or(UnsupportedDateError::MomentOutOfTable { at })
    }
}
