//! Sexagenary pillars (干支) and the four-pillar chart.
//!
//! A pillar pairs a stem and a branch of equal parity; the 60 valid pairs
//! form the sexagenary cycle, index 0 = 甲子. Pillars are only built from a
//! cycle index or a parity-checked pair, so every value is a real pillar.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::stem::Stem;

/// Cycle year of 甲子 (1984, 1924, ...) modulo 60.
const YEAR_EPOCH: i64 = 4;

/// `num_days_from_ce` of 1900-01-01.
const DAY_EPOCH_ORDINAL: i64 = 693_596;

/// Cycle index of 1900-01-01 (甲戌).
const DAY_EPOCH_INDEX: i64 = 10;

/// One stem-branch pair of the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pillar at a position of the 60-cycle; wraps in both directions.
    pub const fn from_cycle_index(n: i64) -> Self {
        Self {
            stem: Stem::from_cycle(n),
            branch: Branch::from_cycle(n),
        }
    }

    /// Pair a stem and branch; `None` when their parities differ.
    pub const fn try_new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Position in the 60-cycle (甲子 = 0).
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i16;
        let b = self.branch.index() as i16;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Pillar `n` steps later in the cycle (earlier when negative).
    pub const fn offset(self, n: i64) -> Self {
        Self::from_cycle_index(self.cycle_index() as i64 + n)
    }

    /// Two-character hanja form, e.g. `庚午`.
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// Two-syllable Korean form, e.g. `경오`.
    pub fn korean(self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hanja())
    }
}

/// Year pillar of a sexagenary cycle year (1984 = 甲子).
pub const fn year_pillar(cycle_year: i32) -> Pillar {
    Pillar::from_cycle_index(cycle_year as i64 - YEAR_EPOCH)
}

/// Month pillar from the year stem and the governing solar-term index
/// (0 = Start of Spring).
///
/// The 寅 month opens at Start of Spring; its stem follows the
/// five-tiger rule (甲/己 years start at 丙寅).
pub const fn month_pillar(year_stem: Stem, term_index: u8) -> Pillar {
    let month = (term_index % 24) / 2;
    Pillar {
        stem: Stem::from_index((year_stem.index() % 5) * 2 + 2 + month),
        branch: Branch::from_index(month + 2),
    }
}

/// Day pillar of a civil date (1900-01-01 = 甲戌).
pub fn day_pillar(date: NaiveDate) -> Pillar {
    let days = i64::from(date.num_days_from_ce()) - DAY_EPOCH_ORDINAL;
    Pillar::from_cycle_index(days + DAY_EPOCH_INDEX)
}

/// Branch of a clock hour; 子 spans 23:00–00:59.
pub const fn hour_branch(hour: u32) -> Branch {
    Branch::from_index((((hour % 24) + 1) / 2 % 12) as u8)
}

/// Hour pillar from the stem of the day that owns the 子 hour and the
/// clock hour (five-rat rule: 甲/己 days start at 甲子).
pub const fn hour_pillar(owning_day_stem: Stem, hour: u32) -> Pillar {
    let branch = hour_branch(hour);
    Pillar {
        stem: Stem::from_index((owning_day_stem.index() % 5) * 2 + branch.index()),
        branch,
    }
}

/// The four pillars of a birth moment; hour is absent when unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bazi {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

impl Bazi {
    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> impl Iterator<Item = Pillar> {
        [Some(self.year), Some(self.month), Some(self.day), self.hour]
            .into_iter()
            .flatten()
    }

    /// Day stem (日主).
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// Korean reading, e.g. `경오년 신사월 경진일`.
    pub fn korean_ganji(&self) -> String {
        let mut s = format!(
            "{}년 {}월 {}일",
            self.year.korean(),
            self.month.korean(),
            self.day.korean()
        );
        if let Some(hour) = self.hour {
            s.push_str(&format!(" {}시", hour.korean()));
        }
        s
    }

    /// Colored animal name of the day pillar, e.g. `백룡` for 庚辰.
    pub fn day_animal_alias(&self) -> String {
        format!(
            "{}{}",
            self.day.stem.element().color_korean(),
            self.day.branch.animal().alias_word()
        )
    }
}

impl std::fmt::Display for Bazi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.year, self.month, self.day)?;
        if let Some(hour) = self.hour {
            write!(f, " {hour}")?;
        }
        Ok(())
    }
}
