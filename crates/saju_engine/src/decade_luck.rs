//! Decade luck anchored on the birth moment's neighbouring month-opening term.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use saju_base::{
    AgeReckoning, Bazi, ChildhoodSpan, DecadeLuck, Gender, LuckDirection, StartOffset,
    childhood_span, decade_luck_periods,
};
use saju_calendar::{LunisolarCalendar, SolarTerm, UnsupportedDateError};
use serde::Serialize;
use tracing::debug;

use crate::resolve::ResolvedSolarMoment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeLuckChart {
    pub direction: LuckDirection,
    pub start_offset: StartOffset,
    /// Month-opening term the offset is measured to.
    pub anchor_term: SolarTerm,
    pub anchor_at: NaiveDateTime,
    /// Date the first period begins.
    pub start_date: NaiveDate,
    /// Years before the first period, absent when it starts in the birth year.
    pub childhood: Option<ChildhoodSpan>,
    pub periods: Vec<DecadeLuck>,
}

/// Lay out `count` decade periods for a resolved birth moment.
///
/// Forward charts measure to the next month-opening term, backward charts
/// to the previous one. With an unknown hour the span starts at 00:00 of the
/// birth date.
pub fn decade_luck_for(
    calendar: &LunisolarCalendar,
    moment: &ResolvedSolarMoment,
    bazi: &Bazi,
    gender: Gender,
    reckoning: AgeReckoning,
    count: u8,
) -> Result<DecadeLuckChart, UnsupportedDateError> {
    let direction = LuckDirection::for_birth(bazi.year.stem(), gender);
    let anchor = match direction {
        LuckDirection::Forward => calendar.next_jie(moment.reference)?,
        LuckDirection::Backward => calendar.prev_jie(moment.reference)?,
    };
    let span = (anchor.at - moment.reference).num_minutes();
    let start_offset = StartOffset::from_span_minutes(span);
    let out_of_table = UnsupportedDateError::DateOutOfTable { date: moment.date };
    let start_date = start_offset.apply(moment.date).ok_or_else(|| out_of_table.clone())?;
    let periods = decade_luck_periods(
        bazi.month,
        direction,
        moment.date,
        start_offset,
        reckoning,
        count,
    )
    .ok_or(out_of_table)?;
    debug!(?direction, span_minutes = span, anchor = %anchor.term, "decade luck laid out");

    Ok(DecadeLuckChart {
        direction,
        start_offset,
        anchor_term: anchor.term,
        anchor_at: anchor.at,
        start_date,
        childhood: childhood_span(moment.date, start_date.year(), reckoning),
        periods,
    })
}
