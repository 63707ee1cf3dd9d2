//! Lunisolar calendar reference data for the sexagenary engine.
//!
//! This crate provides:
//! - Julian Date ↔ civil date-time conversions and ΔT
//! - Apparent geocentric solar longitude (truncated VSOP87)
//! - The 24 solar terms and a precomputed term table
//! - A packed Korean/Chinese lunar calendar table (1900–2049)
//! - Solar ↔ lunar date conversion with leap-month resolution
//!
//! All tables are built once into an immutable [`ReferenceTables`] value and
//! shared behind `Arc` by [`LunisolarCalendar`].

pub mod error;
pub mod julian;
pub mod lunar_table;
pub mod lunisolar;
pub mod solar_term;
pub mod sun;
pub mod tables;

pub use error::{TableError, UnsupportedDateError};
pub use julian::{J2000_JD, SECONDS_PER_DAY, delta_t_seconds, jd_to_naive, naive_to_jd};
pub use lunar_table::{LunarMonthInfo, LunarTable, LunarYearInfo};
pub use lunisolar::{LunarDate, LunisolarCalendar};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm, SolarTermInstant, SolarTermTable};
pub use sun::sun_apparent_longitude_deg;
pub use tables::{CalendarConfig, ReferenceTables};
