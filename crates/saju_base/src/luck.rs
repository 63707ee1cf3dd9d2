//! Annual luck pillars (流年 / 세운).
//!
//! The pillar of a calendar year is the year pillar of the cycle year that
//! begins at that year's Start of Spring, so each entry is a pure function
//! of the year index and the birth year.

use serde::{Deserialize, Serialize};

use crate::pillar::{Pillar, year_pillar};

/// How ages are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeReckoning {
    /// Completed years: `year - birth_year`.
    #[default]
    Elapsed,
    /// Korean count (세는나이): `year - birth_year + 1`.
    EastAsian,
}

impl AgeReckoning {
    pub const fn age(self, birth_year: i32, year: i32) -> i32 {
        match self {
            Self::Elapsed => year.saturating_sub(birth_year),
            Self::EastAsian => year.saturating_sub(birth_year).saturating_add(1),
        }
    }
}

/// One year of the annual luck sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualPillar {
    pub year: i32,
    pub age: i32,
    pub pillar: Pillar,
}

/// Annual pillar of `year` for someone born in `birth_year`.
pub const fn annual_pillar(birth_year: i32, year: i32, reckoning: AgeReckoning) -> AnnualPillar {
    AnnualPillar {
        year,
        age: reckoning.age(birth_year, year),
        pillar: year_pillar(year),
    }
}

/// The annual luck sequence starting at the birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckCycle {
    birth_year: i32,
    reckoning: AgeReckoning,
}

impl LuckCycle {
    pub const fn new(birth_year: i32, reckoning: AgeReckoning) -> Self {
        Self {
            birth_year,
            reckoning,
        }
    }

    pub const fn birth_year(&self) -> i32 {
        self.birth_year
    }

    pub const fn reckoning(&self) -> AgeReckoning {
        self.reckoning
    }

    /// Entry for a calendar year; `None` before the birth year.
    pub const fn at(&self, year: i32) -> Option<AnnualPillar> {
        if year < self.birth_year {
            None
        } else {
            Some(annual_pillar(self.birth_year, year, self.reckoning))
        }
    }

    /// The `n`-th entry (0 = birth year).
    pub const fn nth(&self, n: u32) -> AnnualPillar {
        annual_pillar(
            self.birth_year,
            self.birth_year.saturating_add_unsigned(n),
            self.reckoning,
        )
    }

    /// Entries for `from..=to`, clamped to start at the birth year.
    pub fn span(&self, from: i32, to: i32) -> impl Iterator<Item = AnnualPillar> + use<> {
        let cycle = *self;
        (from.max(self.birth_year)..=to)
            .map(move |y| annual_pillar(cycle.birth_year, y, cycle.reckoning))
    }

    /// Unbounded sequence from the birth year onward.
    pub const fn years(&self) -> Years {
        Years {
            cycle: *self,
            next: 0,
        }
    }
}

/// Unbounded iterator over a [`LuckCycle`]; clone it to restart.
#[derive(Debug, Clone)]
pub struct Years {
    cycle: LuckCycle,
    next: u32,
}

impl Iterator for Years {
    type Item = AnnualPillar;

    fn next(&mut self) -> Option<AnnualPillar> {
        let item = self.cycle.nth(self.next);
        self.next = self.next.checked_add(1)?;
        Some(item)
    }
}
