//! Birth request validation.
//!
//! Rules run in a fixed order and the first violation is reported:
//! year, month, day, hour and minute, gender.

use chrono::NaiveDate;
use saju_base::Gender;
use saju_calendar::LunisolarCalendar;

use crate::config::MIN_BIRTH_YEAR;
use crate::error::{Field, ValidationError};
use crate::request::{BirthMoment, CalendarKind, RawBirthRequest};

/// Length assumed for a lunar month the table does not hold; conversion
/// then rejects the date.
const FALLBACK_LUNAR_MONTH_DAYS: u8 = 30;

#[derive(Debug, Clone)]
pub struct InputValidator {
    calendar: LunisolarCalendar,
    max_year: i32,
}

impl InputValidator {
    /// `max_year` is the caller-supplied current year.
    pub fn new(calendar: LunisolarCalendar, max_year: i32) -> Self {
        Self { calendar, max_year }
    }

    /// Birth year rule on its own.
    pub fn validate_year(&self, year: i32) -> Result<i32, ValidationError> {
        if (MIN_BIRTH_YEAR..=self.max_year).contains(&year) {
            Ok(year)
        } else {
            Err(ValidationError::new(
                Field::Year,
                format!("must be within {MIN_BIRTH_YEAR}..={}, got {year}", self.max_year),
            ))
        }
    }

    pub fn validate(&self, raw: &RawBirthRequest) -> Result<BirthMoment, ValidationError> {
        let year = self.validate_year(raw.birth_year)?;

        let month = u8::try_from(raw.birth_month)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(|| {
                ValidationError::new(
                    Field::Month,
                    format!("must be within 1..=12, got {}", raw.birth_month),
                )
            })?;

        let calendar = if raw.is_lunar {
            CalendarKind::Lunar
        } else {
            CalendarKind::Solar
        };
        let leap_month = raw.is_leap_month && calendar == CalendarKind::Lunar;
        let max_day = match calendar {
            CalendarKind::Solar => solar_month_days(year, month),
            CalendarKind::Lunar => self
                .calendar
                .month_length(year, month, leap_month)
                .unwrap_or(FALLBACK_LUNAR_MONTH_DAYS),
        };
        let day = u8::try_from(raw.birth_day)
            .ok()
            .filter(|d| (1..=max_day).contains(d))
            .ok_or_else(|| {
                ValidationError::new(
                    Field::Day,
                    format!("must be within 1..={max_day}, got {}", raw.birth_day),
                )
            })?;

        let hour = match raw.birth_hour {
            None => None,
            Some(h) => Some(
                u8::try_from(h)
                    .ok()
                    .filter(|h| *h <= 23)
                    .ok_or_else(|| {
                        ValidationError::new(Field::Hour, format!("must be within 0..=23, got {h}"))
                    })?,
            ),
        };
        // A minute without an hour is dropped unchecked.
        let minute = match (hour, raw.birth_minute) {
            (Some(_), Some(m)) => u8::try_from(m)
                .ok()
                .filter(|m| *m <= 59)
                .ok_or_else(|| {
                    ValidationError::new(Field::Minute, format!("must be within 0..=59, got {m}"))
                })?,
            _ => 0,
        };

        let gender = Gender::parse(&raw.gender).ok_or_else(|| {
            ValidationError::new(
                Field::Gender,
                format!("must be \"male\" or \"female\", got {:?}", raw.gender),
            )
        })?;

        Ok(BirthMoment {
            year,
            month,
            day,
            hour,
            minute,
            calendar,
            leap_month,
            gender,
        })
    }
}

/// Days in a Gregorian month.
fn solar_month_days(year: i32, month: u8) -> u8 {
    let first = NaiveDate::from_ymd_opt(year, u32::from(month), 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, u32::from(month) + 1, 1)
    };
    match (first, next) {
        (Some(a), Some(b)) => (b - a).num_days() as u8,
        _ => 31,
    }
}
