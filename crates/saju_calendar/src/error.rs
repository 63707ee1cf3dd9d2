//! Error types for calendar conversion and reference-table construction.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// A well-formed date that the reference tables cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UnsupportedDateError {
    /// Year lies outside the configured table range.
    #[error("year {year} is outside the supported range {first}..={last}")]
    YearOutOfRange { year: i32, first: i32, last: i32 },
    /// Solar date lies outside the lunar table.
    #[error("{date} is outside the lunar table")]
    DateOutOfTable { date: NaiveDate },
    /// Moment precedes or follows every solar term in the table.
    #[error("{at} is not covered by the solar term table")]
    MomentOutOfTable { at: NaiveDateTime },
    /// Requested lunar month does not exist in that year.
    #[error("lunar year {year} has no{} month {month}", leap_word(.leap))]
    MissingMonth { year: i32, month: u8, leap: bool },
    /// Day exceeds the length of the lunar month.
    #[error("lunar {year}-{month:02}{} has {days} days, got day {day}", leap_suffix(.leap))]
    DayOutOfMonth {
        year: i32,
        month: u8,
        leap: bool,
        day: u8,
        days: u8,
    },
}

fn leap_word(leap: &bool) -> &'static str {
    if *leap { " leap" } else { "" }
}

fn leap_suffix(leap: &bool) -> &'static str {
    if *leap { " (leap)" } else { "" }
}

/// Startup failure: the reference tables are corrupt or inconsistent.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TableError {
    /// Calendar configuration rejected before any table was built.
    #[error("invalid calendar config: {0}")]
    InvalidConfig(&'static str),
    /// A packed lunar-year word failed decoding.
    #[error("corrupt lunar table entry for {year}: {reason}")]
    CorruptLunarEntry { year: i32, reason: &'static str },
    /// Requested year range is not covered by the packed lunar data.
    #[error("lunar table covers {first}..={last}, cannot serve {year}")]
    LunarRangeNotCovered { year: i32, first: i32, last: i32 },
    /// Solar longitude search failed to settle.
    #[error("solar term {term} of {year} did not converge")]
    NoConvergence { year: i32, term: &'static str },
    /// Computed instant could not be represented as a civil date-time.
    #[error("julian day {0} is not representable")]
    UnrepresentableInstant(f64),
    /// Generated terms are not in strict cyclic order.
    #[error("solar term table out of order at {at}")]
    TermsOutOfOrder { at: NaiveDateTime },
}
