//! Birth moment → solar moment → four pillars.
//!
//! Year and month follow the governing solar term (the year turns at Start
//! of Spring, months at each month-opening term). The day pillar counts
//! civil days. The hour pillar takes its stem from the day that owns the
//! 子 hour, which for 23:00–23:59 is the next day; [`ZiHourRule`] decides
//! whether the day pillar moves with it.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use saju_base::{Bazi, Pillar, day_pillar, hour_pillar, month_pillar, year_pillar};
use saju_calendar::{LunarDate, LunisolarCalendar, SolarTermInstant, UnsupportedDateError};
use serde::Serialize;
use tracing::debug;

use crate::config::ZiHourRule;
use crate::request::{BirthMoment, CalendarKind};

/// First clock hour of the late 子 hour.
const LATE_ZI_HOUR: u8 = 23;

/// A birth moment pinned to one Gregorian local date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSolarMoment {
    pub date: NaiveDate,
    /// Clock time when the hour is known.
    pub time: Option<NaiveTime>,
    /// Moment used for solar-term lookups (00:00 when the hour is unknown).
    pub reference: NaiveDateTime,
    /// Governing solar term at `reference`.
    pub term: SolarTermInstant,
    /// Lunar date of `date`, when inside the lunar table.
    pub lunar: Option<LunarDate>,
}

impl ResolvedSolarMoment {
    pub fn hour_known(&self) -> bool {
        self.time.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct SexagenaryResolver {
    calendar: LunisolarCalendar,
    zi_rule: ZiHourRule,
}

impl SexagenaryResolver {
    pub fn new(calendar: LunisolarCalendar, zi_rule: ZiHourRule) -> Self {
        Self { calendar, zi_rule }
    }

    pub fn zi_rule(&self) -> ZiHourRule {
        self.zi_rule
    }

    /// Convert a validated moment to a solar moment.
    ///
    /// Fails only when the date lies outside the tables or names a lunar
    /// month that did not occur.
    pub fn resolve_moment(
        &self,
        moment: &BirthMoment,
    ) -> Result<ResolvedSolarMoment, UnsupportedDateError> {
        let (date, lunar) = match moment.calendar {
            CalendarKind::Lunar => {
                let lunar = LunarDate::new(moment.year, moment.month, moment.day, moment.leap_month);
                (self.calendar.to_solar(&lunar)?, Some(lunar))
            }
            CalendarKind::Solar => {
                self.calendar.check_year(moment.year)?;
                let date = NaiveDate::from_ymd_opt(
                    moment.year,
                    u32::from(moment.month),
                    u32::from(moment.day),
                )
                .ok_or(UnsupportedDateError::YearOutOfRange {
                    year: moment.year,
                    first: self.calendar.tables().config().first_year,
                    last: self.calendar.tables().config().last_year,
                })?;
                (date, self.calendar.to_lunar(date).ok())
            }
        };

        let time = moment
            .hour
            .and_then(|h| NaiveTime::from_hms_opt(u32::from(h), u32::from(moment.minute), 0));
        // An unknown hour reads the chart at the start of the civil day.
        let reference = date.and_time(time.unwrap_or(NaiveTime::MIN));
        let term = self.calendar.solar_term_at(reference)?;
        debug!(%date, %reference, term = %term.term, cycle_year = term.cycle_year, "moment resolved");

        Ok(ResolvedSolarMoment {
            date,
            time,
            reference,
            term,
            lunar,
        })
    }

    /// Four pillars of a resolved moment.
    pub fn resolve(&self, moment: &ResolvedSolarMoment) -> Bazi {
        let year = year_pillar(moment.term.cycle_year);
        let month = month_pillar(year.stem(), moment.term.term.index());
        let civil_day = day_pillar(moment.date);

        let (day, hour) = match moment.time {
            None => (civil_day, None),
            Some(t) => {
                let h = t.hour() as u8;
                let (day, owner) = self.day_and_hour_owner(civil_day, h);
                (day, Some(hour_pillar(owner.stem(), u32::from(h))))
            }
        };

        Bazi {
            year,
            month,
            day,
            hour,
        }
    }

    /// Day pillar to report and the day pillar owning the hour.
    fn day_and_hour_owner(&self, civil_day: Pillar, hour: u8) -> (Pillar, Pillar) {
        if hour < LATE_ZI_HOUR {
            return (civil_day, civil_day);
        }
        let next = civil_day.offset(1);
        match self.zi_rule {
            ZiHourRule::SplitZi => (civil_day, next),
            ZiHourRule::AdvanceDay => (next, next),
        }
    }
}
