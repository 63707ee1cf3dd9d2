//! Serializable chart returned by [`crate::SajuEngine::calculate`].

use chrono::NaiveDate;
use saju_base::{
    AnnualPillar, Bazi, Element, ElementDistribution, Gender, NaYin, ShiShen, Stem, YinYang,
    ZodiacInfo,
};
use saju_calendar::{LunarDate, SolarTermInstant};
use serde::Serialize;

use crate::decade_luck::DecadeLuckChart;

/// Day stem (日主) with its presentation labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMaster {
    pub stem: Stem,
    pub hanja: &'static str,
    /// Korean reading with element, e.g. `경금`.
    pub label: String,
    pub element: Element,
    pub yin_yang: YinYang,
    pub emoji: &'static str,
}

impl DayMaster {
    pub fn of(stem: Stem) -> Self {
        Self {
            stem,
            hanja: stem.hanja(),
            label: stem.day_master_label(),
            element: stem.element(),
            yin_yang: stem.yin_yang(),
            emoji: stem.emoji(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SajuResult {
    pub solar_date: NaiveDate,
    /// `HH:MM`, absent when the hour is unknown.
    pub birth_time: Option<String>,
    pub time_unknown: bool,
    pub lunar_date: Option<LunarDate>,
    pub is_leap_month: bool,
    pub gender: Gender,
    pub bazi: Bazi,
    pub ganji_korean: String,
    pub day_master: DayMaster,
    /// Colored animal of the day pillar, e.g. `백룡`.
    pub day_animal: String,
    pub zodiac: ZodiacInfo,
    pub elements: ElementDistribution,
    pub ten_gods: ShiShen,
    pub day_na_yin: NaYin,
    pub year_na_yin: NaYin,
    pub solar_term: SolarTermInstant,
    pub decade_luck: DecadeLuckChart,
    /// Annual pillar of the configured current year, when one is set.
    pub this_year: Option<AnnualPillar>,
}
