//! Sexagenary (干支) primitives for Four Pillars charts.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches, five elements and yin-yang
//! - 60-cycle pillars with the stem/branch parity invariant
//! - Year, day and hour pillar formulas
//! - Five-element vote distribution
//! - Ten gods, Na Yin and zodiac lookups
//! - Annual (流年) and decade (大運) luck sequences
//!
//! Everything here is pure table math over closed enumerations; calendar
//! conversion lives in `saju_calendar`.

pub mod branch;
pub mod decade;
pub mod distribution;
pub mod element;
pub mod luck;
pub mod nayin;
pub mod pillar;
pub mod stem;
pub mod ten_gods;
pub mod zodiac;

pub use branch::{ALL_BRANCHES, Branch};
pub use decade::{
    ChildhoodSpan, DecadeLuck, Gender, LuckDirection, StartOffset, childhood_span,
    decade_luck_periods,
};
pub use distribution::{ElementDistribution, ElementShares, ElementVotes, analyze_elements};
pub use element::{ALL_ELEMENTS, Element, YinYang};
pub use luck::{AgeReckoning, AnnualPillar, LuckCycle, annual_pillar};
pub use nayin::{NaYin, na_yin};
pub use pillar::{Bazi, Pillar, day_pillar, hour_branch, hour_pillar, month_pillar, year_pillar};
pub use stem::{ALL_STEMS, Stem};
pub use ten_gods::{ALL_TEN_GODS, ShiShen, TenGod, ten_god};
pub use zodiac::{ALL_ZODIAC, Zodiac, ZodiacInfo};
