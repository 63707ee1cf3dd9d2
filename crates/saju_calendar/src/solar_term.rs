//! The 24 solar terms (節氣 / 절기) and a precomputed term table.
//!
//! Terms are 15° steps of apparent solar longitude. Index 0 is Start of
//! Spring (立春, 315°); the cycle runs to Major Cold (大寒, 300°). Even
//! indices are the month-opening "jie" terms, odd indices the mid-month
//! "qi" terms.
//!
//! A term belongs to the cycle year in which its Start of Spring falls:
//! Start of Spring of Y through Major Cold of Y+1 is cycle year Y.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::TableError;
use crate::julian::{decimal_year, jd_to_naive, jde_to_jd_ut, naive_to_jd};
use crate::sun::{longitude_gap_deg, sun_apparent_longitude_deg};

/// Mean tropical year in days.
const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Longitude convergence threshold in degrees (≈ 1 ms of time).
const CONVERGENCE_DEG: f64 = 1e-8;

/// Iteration cap for the longitude search.
const MAX_ITERATIONS: usize = 50;

/// Allowed spacing between consecutive terms, in days.
const MIN_TERM_GAP_DAYS: f64 = 14.0;
const MAX_TERM_GAP_DAYS: f64 = 16.5;

/// The 24 solar terms, in cycle order starting at Start of Spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SolarTerm {
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
    Xiaohan,
    Dahan,
}

/// All 24 solar terms in order (index 0 = Lichun).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
];

const TERM_HANJA: [&str; 24] = [
    "立春", "雨水", "驚蟄", "春分", "清明", "穀雨", "立夏", "小滿", "芒種", "夏至", "小暑", "大暑",
    "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

const TERM_KOREAN: [&str; 24] = [
    "입춘", "우수", "경칩", "춘분", "청명", "곡우", "입하", "소만", "망종", "하지", "소서", "대서",
    "입추", "처서", "백로", "추분", "한로", "상강", "입동", "소설", "대설", "동지", "소한", "대한",
];

const TERM_ENGLISH: [&str; 24] = [
    "Start of Spring",
    "Rain Water",
    "Awakening of Insects",
    "Spring Equinox",
    "Pure Brightness",
    "Grain Rain",
    "Start of Summer",
    "Grain Full",
    "Grain in Ear",
    "Summer Solstice",
    "Minor Heat",
    "Major Heat",
    "Start of Autumn",
    "End of Heat",
    "White Dew",
    "Autumn Equinox",
    "Cold Dew",
    "Frost's Descent",
    "Start of Winter",
    "Minor Snow",
    "Major Snow",
    "Winter Solstice",
    "Minor Cold",
    "Major Cold",
];

impl SolarTerm {
    /// 0-based index (Lichun=0 .. Dahan=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term for a 0-based index; wraps modulo 24.
    pub const fn from_index(index: u8) -> Self {
        ALL_SOLAR_TERMS[(index % 24) as usize]
    }

    /// Traditional name in hanja.
    pub fn hanja(self) -> &'static str {
        TERM_HANJA[self.index() as usize]
    }

    /// Korean name in hangul.
    pub fn korean(self) -> &'static str {
        TERM_KOREAN[self.index() as usize]
    }

    /// English name.
    pub fn english(self) -> &'static str {
        TERM_ENGLISH[self.index() as usize]
    }

    /// Apparent solar longitude at which the term begins, in degrees.
    pub fn longitude_deg(self) -> f64 {
        f64::from((315 + 15 * u32::from(self.index())) % 360)
    }

    /// Month-opening term (節, jie): even index.
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Next term in the cycle.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english())
    }
}

/// One solar-term instant in local civil time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTermInstant {
    pub term: SolarTerm,
    /// Cycle year the term belongs to (year of its Start of Spring).
    pub cycle_year: i32,
    /// Local civil date-time at which the term begins.
    pub at: NaiveDateTime,
}

/// Find the Julian Ephemeris Day at which the Sun reaches `target_deg`,
/// starting from `guess_jde`.
///
/// Returns `None` if the iteration does not settle.
pub fn find_longitude_jde(target_deg: f64, guess_jde: f64) -> Option<f64> {
    let mut jde = guess_jde;
    for _ in 0..MAX_ITERATIONS {
        let gap = longitude_gap_deg(target_deg, sun_apparent_longitude_deg(jde));
        jde += gap * TROPICAL_YEAR_DAYS / 360.0;
        if gap.abs() < CONVERGENCE_DEG {
            return Some(jde);
        }
    }
    None
}

/// Compute one term instant in local civil time.
///
/// `utc_offset_minutes` is the fixed civil offset east of UTC.
pub fn compute_term(
    term: SolarTerm,
    cycle_year: i32,
    utc_offset_minutes: i32,
) -> Result<SolarTermInstant, TableError> {
    let lichun_guess = NaiveDate::from_ymd_opt(cycle_year, 2, 4)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(TableError::InvalidConfig("cycle year outside chrono range"))?;
    let guess = naive_to_jd(lichun_guess) + f64::from(term.index()) * TROPICAL_YEAR_DAYS / 24.0;
    let jde = find_longitude_jde(term.longitude_deg(), guess).ok_or(TableError::NoConvergence {
        year: cycle_year,
        term: term.english(),
    })?;
    let approx = jd_to_naive(jde).ok_or(TableError::UnrepresentableInstant(jde))?;
    let jd_local = jde_to_jd_ut(jde, decimal_year(approx)) + f64::from(utc_offset_minutes) / 1440.0;
    let at = jd_to_naive(jd_local).ok_or(TableError::UnrepresentableInstant(jd_local))?;
    Ok(SolarTermInstant {
        term,
        cycle_year,
        at,
    })
}

/// Read-only table of consecutive solar-term instants.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarTermTable {
    instants: Vec<SolarTermInstant>,
}

impl SolarTermTable {
    /// Generate all terms of cycle years `first..=last` in local civil time.
    pub fn generate(first: i32, last: i32, utc_offset_minutes: i32) -> Result<Self, TableError> {
        if first > last {
            return Err(TableError::InvalidConfig("first cycle year after last"));
        }
        let mut instants = Vec::with_capacity(((last - first + 1) * 24) as usize);
        for year in first..=last {
            for term in ALL_SOLAR_TERMS {
                instants.push(compute_term(term, year, utc_offset_minutes)?);
            }
        }
        Self::from_instants(instants)
    }

    /// Build from precomputed instants, checking cyclic order and spacing.
    pub fn from_instants(instants: Vec<SolarTermInstant>) -> Result<Self, TableError> {
        for pair in instants.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let expected_year = if b.term == SolarTerm::Lichun {
                a.cycle_year + 1
            } else {
                a.cycle_year
            };
            let gap_days = (b.at - a.at).num_seconds() as f64 / 86_400.0;
            if b.term != a.term.next()
                || b.cycle_year != expected_year
                || !(MIN_TERM_GAP_DAYS..=MAX_TERM_GAP_DAYS).contains(&gap_days)
            {
                return Err(TableError::TermsOutOfOrder { at: b.at });
            }
        }
        Ok(Self { instants })
    }

    /// All instants in chronological order.
    pub fn instants(&self) -> &[SolarTermInstant] {
        &self.instants
    }

    /// Number of instants held.
    pub fn len(&self) -> usize {
        self.instants.len()
    }

    /// True when the table holds no instants.
    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    /// The governing term: latest instant ≤ `at`.
    ///
    /// `None` before the first instant, and at or after the last one (its
    /// end is not known).
    pub fn governing(&self, at: NaiveDateTime) -> Option<&SolarTermInstant> {
        let idx = self.instants.partition_point(|t| t.at <= at);
        if idx == 0 || idx == self.instants.len() {
            return None;
        }
        self.instants.get(idx - 1)
    }

    /// Earliest month-opening term strictly after `at`.
    pub fn next_jie(&self, at: NaiveDateTime) -> Option<&SolarTermInstant> {
        let idx = self.instants.partition_point(|t| t.at <= at);
        self.instants[idx..].iter().find(|t| t.term.is_jie())
    }

    /// Latest month-opening term at or before `at`.
    pub fn prev_jie(&self, at: NaiveDateTime) -> Option<&SolarTermInstant> {
        let idx = self.instants.partition_point(|t| t.at <= at);
        self.instants[..idx].iter().rev().find(|t| t.term.is_jie())
    }

    /// A specific term of a cycle year.
    pub fn find(&self, term: SolarTerm, cycle_year: i32) -> Option<&SolarTermInstant> {
        let first = self.instants.first()?;
        let offset = (cycle_year - first.cycle_year) * 24 + i32::from(term.index())
            - i32::from(first.term.index());
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.instants.get(i))
            .filter(|t| t.term == term && t.cycle_year == cycle_year)
    }
}
