//! Decade luck (大運 / 대운) period math.
//!
//! Direction runs forward for a yang year stem with a male chart or a yin
//! year stem with a female chart, backward otherwise. The start offset
//! counts the time from birth to the next (forward) or previous (backward)
//! month-opening solar term: 3 days = 1 year, 1 day = 4 months,
//! 2 hours = 10 days. Each period lasts ten years and steps the month
//! pillar one place along the cycle in the chosen direction.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::element::YinYang;
use crate::luck::AgeReckoning;
use crate::pillar::Pillar;
use crate::stem::Stem;

const MINUTES_PER_YEAR: i64 = 3 * 24 * 60;
const MINUTES_PER_MONTH: i64 = 6 * 60;
const MINUTES_PER_DAY: i64 = 12;

/// Years covered by one decade period.
pub const YEARS_PER_DECADE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse `male` / `female` (ASCII case-insensitive, surrounding
    /// whitespace ignored).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("male") {
            Some(Self::Male)
        } else if s.eq_ignore_ascii_case("female") {
            Some(Self::Female)
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Male => "남",
            Self::Female => "여",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    pub const fn for_birth(year_stem: Stem, gender: Gender) -> Self {
        match (year_stem.yin_yang(), gender) {
            (YinYang::Yang, Gender::Male) | (YinYang::Yin, Gender::Female) => Self::Forward,
            _ => Self::Backward,
        }
    }

    const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Time from birth until the first decade period begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StartOffset {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl StartOffset {
    /// Convert the birth-to-term span (sign ignored) into an offset.
    pub const fn from_span_minutes(minutes: i64) -> Self {
        let m = minutes.abs();
        Self {
            years: (m / MINUTES_PER_YEAR) as u32,
            months: (m % MINUTES_PER_YEAR / MINUTES_PER_MONTH) as u32,
            days: (m % MINUTES_PER_MONTH / MINUTES_PER_DAY) as u32,
        }
    }

    /// Calendar date the offset lands on when counted from `birth`.
    pub fn apply(self, birth: NaiveDate) -> Option<NaiveDate> {
        birth
            .checked_add_months(Months::new(self.years.checked_mul(12)?.checked_add(self.months)?))?
            .checked_add_days(Days::new(u64::from(self.days)))
    }
}

/// One ten-year period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeLuck {
    /// 1-based order.
    pub order: u8,
    pub pillar: Pillar,
    pub start_year: i32,
    pub end_year: i32,
    pub start_age: i32,
    pub end_age: i32,
}

/// Years between birth and the first decade period (童限), which carry no
/// luck pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildhoodSpan {
    pub start_year: i32,
    pub end_year: i32,
    pub start_age: i32,
    pub end_age: i32,
}

/// Childhood span before a first period starting in `first_year`.
///
/// `None` when the first period starts in the birth year.
pub fn childhood_span(
    birth: NaiveDate,
    first_year: i32,
    reckoning: AgeReckoning,
) -> Option<ChildhoodSpan> {
    let birth_year = birth.year();
    if first_year <= birth_year {
        return None;
    }
    let end_year = first_year - 1;
    Some(ChildhoodSpan {
        start_year: birth_year,
        end_year,
        start_age: reckoning.age(birth_year, birth_year),
        end_age: reckoning.age(birth_year, end_year),
    })
}

/// Lay out `count` decade periods.
///
/// Returns `None` only when the start date overflows the calendar.
pub fn decade_luck_periods(
    month_pillar: Pillar,
    direction: LuckDirection,
    birth: NaiveDate,
    offset: StartOffset,
    reckoning: AgeReckoning,
    count: u8,
) -> Option<Vec<DecadeLuck>> {
    let first_year = offset.apply(birth)?.year();
    let birth_year = birth.year();
    let periods = (0..count)
        .map(|k| {
            let start_year = first_year + i32::from(k) * YEARS_PER_DECADE;
            let end_year = start_year + YEARS_PER_DECADE - 1;
            DecadeLuck {
                order: k + 1,
                pillar: month_pillar.offset(direction.sign() * (i64::from(k) + 1)),
                start_year,
                end_year,
                start_age: reckoning.age(birth_year, start_year),
                end_age: reckoning.age(birth_year, end_year),
            }
        })
        .collect();
    Some(periods)
}
