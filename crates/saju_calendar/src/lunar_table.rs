//! Packed lunisolar year table, 1900–2049.
//!
//! One 17-bit word per lunar year:
//! - bits 0–3: leap month number (0 = no leap month)
//! - bits 4–15: month lengths, bit `0x10000 >> m` set ⇒ month `m` has 30 days
//! - bit 16: leap month has 30 days (else 29)
//!
//! Lunar 1900-01-01 fell on Gregorian 1900-01-31. Months follow in order,
//! with the leap month immediately after the regular month of the same
//! number. Month boundaries follow the conventional (UTC+8) almanac
//! reckoning.

use chrono::{Days, NaiveDate};

use crate::error::TableError;

/// First lunar year covered by [`LUNAR_YEAR_DATA`].
pub const LUNAR_DATA_FIRST_YEAR: i32 = 1900;

/// Last lunar year covered by [`LUNAR_YEAR_DATA`].
pub const LUNAR_DATA_LAST_YEAR: i32 = 2049;

/// Gregorian date of lunar 1900-01-01.
const LUNAR_EPOCH_YMD: (i32, u32, u32) = (1900, 1, 31);

const LEAP_MONTH_MASK: u32 = 0xf;
const LEAP_LONG_BIT: u32 = 0x1_0000;
const VALID_BITS: u32 = 0x1_ffff;

/// Packed year words, index 0 = lunar year 1900.
#[rustfmt::skip]
pub static LUNAR_YEAR_DATA: [u32; 150] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
];

/// One lunar month as laid out in a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonthInfo {
    /// Month number 1..=12.
    pub month: u8,
    /// Intercalary (윤달) month.
    pub leap: bool,
    /// 29 or 30.
    pub days: u8,
    /// Gregorian date of day 1.
    pub start: NaiveDate,
}

impl LunarMonthInfo {
    /// Gregorian date of the day after the last day of the month.
    pub fn end_exclusive(&self) -> Option<NaiveDate> {
        self.start.checked_add_days(Days::new(u64::from(self.days)))
    }
}

/// A decoded lunar year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarYearInfo {
    pub year: i32,
    /// Gregorian date of lunar new year (month 1, day 1).
    pub new_year: NaiveDate,
    pub leap_month: Option<u8>,
    /// Months in calendar order, leap month included.
    pub months: Vec<LunarMonthInfo>,
}

impl LunarYearInfo {
    /// Total days in the lunar year (353–385).
    pub fn total_days(&self) -> u32 {
        self.months.iter().map(|m| u32::from(m.days)).sum()
    }

    /// Look up a month by number and leap flag.
    pub fn month(&self, month: u8, leap: bool) -> Option<&LunarMonthInfo> {
        self.months
            .iter()
            .find(|m| m.month == month && m.leap == leap)
    }

    /// Gregorian date of the next lunar new year.
    pub fn end_exclusive(&self) -> Option<NaiveDate> {
        self.new_year
            .checked_add_days(Days::new(u64::from(self.total_days())))
    }
}

/// Decode one packed year word starting at `new_year`.
pub fn decode_year(year: i32, word: u32, new_year: NaiveDate) -> Result<LunarYearInfo, TableError> {
    if word & !VALID_BITS != 0 {
        return Err(TableError::CorruptLunarEntry {
            year,
            reason: "bits set above bit 16",
        });
    }
    let leap = (word & LEAP_MONTH_MASK) as u8;
    if leap > 12 {
        return Err(TableError::CorruptLunarEntry {
            year,
            reason: "leap month number above 12",
        });
    }
    if leap == 0 && word & LEAP_LONG_BIT != 0 {
        return Err(TableError::CorruptLunarEntry {
            year,
            reason: "leap length flag without a leap month",
        });
    }

    let overflow = TableError::CorruptLunarEntry {
        year,
        reason: "date overflow",
    };
    let mut months = Vec::with_capacity(13);
    let mut start = new_year;
    let mut push = |month: u8, leap_flag: bool, days: u8| -> Result<(), TableError> {
        months.push(LunarMonthInfo {
            month,
            leap: leap_flag,
            days,
            start,
        });
        start = start
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or_else(|| overflow.clone())?;
        Ok(())
    };
    for m in 1..=12u8 {
        let days = if word & (LEAP_LONG_BIT >> m) != 0 { 30 } else { 29 };
        push(m, false, days)?;
        if leap == m {
            let leap_days = if word & LEAP_LONG_BIT != 0 { 30 } else { 29 };
            push(m, true, leap_days)?;
        }
    }

    Ok(LunarYearInfo {
        year,
        new_year,
        leap_month: (leap != 0).then_some(leap),
        months,
    })
}

/// Decoded lunar years in ascending order, contiguous in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarTable {
    years: Vec<LunarYearInfo>,
}

impl LunarTable {
    /// Decode the built-in 1900–2049 data.
    pub fn standard() -> Result<Self, TableError> {
        let (y, m, d) = LUNAR_EPOCH_YMD;
        let epoch = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or(TableError::InvalidConfig("lunar epoch not representable"))?;
        Self::from_packed(LUNAR_DATA_FIRST_YEAR, &LUNAR_YEAR_DATA, epoch)
    }

    /// Decode consecutive packed words; `first_new_year` is the Gregorian
    /// date of lunar new year of `first_year`.
    pub fn from_packed(
        first_year: i32,
        words: &[u32],
        first_new_year: NaiveDate,
    ) -> Result<Self, TableError> {
        let mut years = Vec::with_capacity(words.len());
        let mut new_year = first_new_year;
        for (offset, &word) in words.iter().enumerate() {
            let year = first_year + offset as i32;
            let info = decode_year(year, word, new_year)?;
            new_year = info.end_exclusive().ok_or(TableError::CorruptLunarEntry {
                year,
                reason: "date overflow",
            })?;
            years.push(info);
        }
        Ok(Self { years })
    }

    /// Restrict to lunar years `first..=last`.
    pub fn truncated(&self, first: i32, last: i32) -> Result<Self, TableError> {
        let (have_first, have_last) = (self.first_year(), self.last_year());
        let out_of_range = |year| TableError::LunarRangeNotCovered {
            year,
            first: have_first.unwrap_or(0),
            last: have_last.unwrap_or(-1),
        };
        let (Some(lo), Some(hi)) = (self.index_of(first), self.index_of(last)) else {
            let year = if self.index_of(first).is_none() { first } else { last };
            return Err(out_of_range(year));
        };
        if lo > hi {
            return Err(TableError::InvalidConfig("first year after last year"));
        }
        Ok(Self {
            years: self.years[lo..=hi].to_vec(),
        })
    }

    fn index_of(&self, year: i32) -> Option<usize> {
        let first = self.first_year()?;
        usize::try_from(year - first)
            .ok()
            .filter(|&i| i < self.years.len())
    }

    /// First lunar year held.
    pub fn first_year(&self) -> Option<i32> {
        self.years.first().map(|y| y.year)
    }

    /// Last lunar year held.
    pub fn last_year(&self) -> Option<i32> {
        self.years.last().map(|y| y.year)
    }

    /// Decoded info for one lunar year.
    pub fn year(&self, year: i32) -> Option<&LunarYearInfo> {
        self.index_of(year).map(|i| &self.years[i])
    }

    /// All decoded years.
    pub fn years(&self) -> &[LunarYearInfo] {
        &self.years
    }

    /// Lunar year whose span contains the Gregorian `date`.
    pub fn year_containing(&self, date: NaiveDate) -> Option<&LunarYearInfo> {
        let idx = self.years.partition_point(|y| y.new_year <= date);
        let info = self.years.get(idx.checked_sub(1)?)?;
        (date < info.end_exclusive()?).then_some(info)
    }
}
