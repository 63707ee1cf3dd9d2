//! Birth-moment request types.

use saju_base::Gender;
use serde::{Deserialize, Serialize};

/// Unvalidated birth request as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBirthRequest {
    pub birth_year: i32,
    pub birth_month: i32,
    pub birth_day: i32,
    /// Absent when the birth hour is unknown.
    #[serde(default)]
    pub birth_hour: Option<i32>,
    #[serde(default)]
    pub birth_minute: Option<i32>,
    #[serde(default)]
    pub is_lunar: bool,
    #[serde(default)]
    pub is_leap_month: bool,
    pub gender: String,
}

impl RawBirthRequest {
    /// Solar-calendar request without an hour.
    pub fn solar(year: i32, month: i32, day: i32, gender: &str) -> Self {
        Self {
            birth_year: year,
            birth_month: month,
            birth_day: day,
            birth_hour: None,
            birth_minute: None,
            is_lunar: false,
            is_leap_month: false,
            gender: gender.to_owned(),
        }
    }

    /// Lunar-calendar request without an hour.
    pub fn lunar(year: i32, month: i32, day: i32, leap: bool, gender: &str) -> Self {
        Self {
            is_lunar: true,
            is_leap_month: leap,
            ..Self::solar(year, month, day, gender)
        }
    }

    /// Same request with a known clock time.
    pub fn at(mut self, hour: i32, minute: i32) -> Self {
        self.birth_hour = Some(hour);
        self.birth_minute = Some(minute);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    Solar,
    Lunar,
}

/// A validated birth moment.
///
/// Only [`crate::InputValidator`] builds these, so every value has in-range
/// fields and a day that fits its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthMoment {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: Option<u8>,
    pub(crate) minute: u8,
    pub(crate) calendar: CalendarKind,
    pub(crate) leap_month: bool,
    pub(crate) gender: Gender,
}

impl BirthMoment {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> Option<u8> {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn calendar(&self) -> CalendarKind {
        self.calendar
    }

    /// Always `false` for solar moments.
    pub fn leap_month(&self) -> bool {
        self.leap_month
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }
}
