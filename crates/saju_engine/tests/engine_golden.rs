//! Golden charts computed through the full engine pipeline.

mod common;

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal::Decimal;
use saju_base::{Element, LuckDirection, StartOffset, TenGod, Zodiac};
use saju_calendar::{CalendarConfig, SolarTerm, UnsupportedDateError};
use saju_engine::{AgeReckoning, Field, RawBirthRequest, SajuConfig, SajuEngine, SajuError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn pct(units: i64, scale: u32) -> Decimal {
    Decimal::new(units, scale)
}

/// 1990-05-15, hour unknown, male: the reference chart.
#[test]
fn reference_chart_without_hour() {
    let r = common::engine()
        .calculate(&RawBirthRequest::solar(1990, 5, 15, "male"))
        .unwrap();

    assert_eq!(r.bazi.to_string(), "庚午 辛巳 庚辰");
    assert!(r.bazi.hour.is_none());
    assert!(r.time_unknown);
    assert_eq!(r.birth_time, None);
    assert_eq!(r.ganji_korean, "경오년 신사월 경진일");
    assert_eq!(r.day_animal, "백룡");
    assert_eq!(r.day_master.label, "경금");
    assert_eq!(r.zodiac.animal, Zodiac::Horse);
    assert_eq!(r.zodiac.korean_label, "말띠");

    assert_eq!(r.elements.votes.total(), 6);
    assert_eq!(r.elements.shares.get(Element::Metal), pct(500, 1));
    assert_eq!(r.elements.shares.get(Element::Fire), pct(333, 1));
    assert_eq!(r.elements.shares.get(Element::Earth), pct(167, 1));
    assert_eq!(r.elements.shares.total(), Decimal::ONE_HUNDRED);
    assert_eq!(r.elements.dominant, Element::Metal);
    assert_eq!(r.elements.weak, Element::Wood);

    assert_eq!(r.ten_gods.year_gan, TenGod::Friend);
    assert_eq!(r.ten_gods.month_gan, TenGod::RobWealth);
    assert_eq!(r.ten_gods.hour_gan, None);
    assert_eq!(r.day_na_yin.hanja(), "白蠟金");
    assert_eq!(r.year_na_yin.korean(), "노방토");

    let lunar = r.lunar_date.unwrap();
    assert_eq!((lunar.year, lunar.month, lunar.day), (1990, 4, 21));
    assert!(!r.is_leap_month);
    assert_eq!(r.solar_term.term, SolarTerm::Lixia);
    assert_eq!(r.solar_term.cycle_year, 1990);
}

/// Forward decade luck measured from 00:00 to Grain in Ear (06-06 07:46).
#[test]
fn reference_chart_decade_luck() {
    let r = common::engine()
        .calculate(&RawBirthRequest::solar(1990, 5, 15, "male"))
        .unwrap();
    let luck = &r.decade_luck;

    assert_eq!(luck.direction, LuckDirection::Forward);
    assert_eq!(luck.anchor_term, SolarTerm::Mangzhong);
    assert_eq!(
        luck.start_offset,
        StartOffset {
            years: 7,
            months: 5,
            days: 8
        }
    );
    assert_eq!(luck.start_date, date(1997, 10, 23));
    let childhood = luck.childhood.unwrap();
    assert_eq!((childhood.start_year, childhood.end_year), (1990, 1996));
    assert_eq!((childhood.start_age, childhood.end_age), (0, 6));
    assert_eq!(luck.periods.len(), 10);

    let first = luck.periods[0];
    assert_eq!(first.pillar.hanja(), "壬午");
    assert_eq!((first.start_year, first.end_year), (1997, 2006));
    assert_eq!(first.start_age, 7);
    assert_eq!(luck.periods[1].pillar.hanja(), "癸未");
    assert_eq!(luck.periods[9].start_year, 2087);
}

/// A female chart with the same yang year stem runs backward from 辛巳.
#[test]
fn female_chart_runs_backward() {
    let r = common::engine()
        .calculate(&RawBirthRequest::solar(1990, 5, 15, "female"))
        .unwrap();
    let luck = &r.decade_luck;
    assert_eq!(luck.direction, LuckDirection::Backward);
    assert_eq!(luck.anchor_term, SolarTerm::Lixia);
    assert_eq!(luck.periods[0].pillar.hanja(), "庚辰");
    assert_eq!(luck.anchor_at, r.solar_term.at);
}

#[test]
fn this_year_follows_configured_current_year() {
    let r = common::engine()
        .calculate(&RawBirthRequest::solar(1990, 5, 15, "male"))
        .unwrap();
    let this_year = r.this_year.unwrap();
    assert_eq!(this_year.year, 2025);
    assert_eq!(this_year.age, 35);
    assert_eq!(this_year.pillar.hanja(), "乙巳");

    let unset = common::engine_with(SajuConfig::default())
        .calculate(&RawBirthRequest::solar(1990, 5, 15, "male"))
        .unwrap();
    assert!(unset.this_year.is_none());
}

/// Known hour adds the hour pillar and two more element votes.
#[test]
fn reference_chart_with_hour() {
    let r = common::engine()
        .calculate(&RawBirthRequest::solar(1990, 5, 15, "male").at(7, 30))
        .unwrap();
    assert_eq!(r.bazi.to_string(), "庚午 辛巳 庚辰 庚辰");
    assert_eq!(r.birth_time.as_deref(), Some("07:30"));
    assert!(!r.time_unknown);
    assert_eq!(r.ganji_korean, "경오년 신사월 경진일 경진시");
    assert_eq!(r.elements.votes.total(), 8);
    assert_eq!(r.elements.shares.get(Element::Metal), pct(500, 1));
    assert_eq!(r.elements.shares.get(Element::Fire), pct(250, 1));
    assert_eq!(r.elements.shares.get(Element::Earth), pct(250, 1));
    assert_eq!(r.ten_gods.hour_gan, Some(TenGod::Friend));
}

/// Start of Spring 2024 falls at 17:27 KST on 02-04.
#[rstest]
#[case::before_lichun(17, 0, "癸卯 乙丑 戊戌 辛酉")]
#[case::after_lichun(18, 0, "甲辰 丙寅 戊戌 辛酉")]
fn lichun_2024_same_day(#[case] hour: i32, #[case] minute: i32, #[case] expected: &str) {
    let r = common::engine()
        .calculate(&RawBirthRequest::solar(2024, 2, 4, "female").at(hour, minute))
        .unwrap();
    assert_eq!(r.bazi.to_string(), expected);
}

/// Start of Spring 1990 falls at 11:14 KST; an unknown hour reads the day
/// from midnight, still inside 己巳.
#[test]
fn unknown_hour_on_lichun_day_reads_from_midnight() {
    let engine = common::engine();
    let unknown = engine
        .calculate(&RawBirthRequest::solar(1990, 2, 4, "male"))
        .unwrap();
    let midnight = engine
        .calculate(&RawBirthRequest::solar(1990, 2, 4, "male").at(0, 0))
        .unwrap();
    assert_eq!(unknown.bazi.year.hanja(), "己巳");
    assert_eq!(unknown.bazi.month.hanja(), "丁丑");
    assert_eq!(unknown.bazi.year, midnight.bazi.year);
    assert_eq!(unknown.bazi.month, midnight.bazi.month);
    assert_eq!(unknown.bazi.day, midnight.bazi.day);
    assert_eq!(unknown.solar_term, midnight.solar_term);
    assert_eq!(unknown.decade_luck, midnight.decade_luck);
}

/// UTC+8 tables put Start of Spring 2024 at 16:27, an hour before KST.
#[test]
fn utc_plus_eight_moves_term_boundaries() {
    let engine = SajuEngine::new(SajuConfig {
        calendar: CalendarConfig {
            first_year: 2023,
            last_year: 2025,
            utc_offset_minutes: 480,
        },
        ..common::config()
    })
    .unwrap();
    let lichun = engine
        .calendar()
        .solar_term_at(date(2024, 2, 4).and_hms_opt(17, 0, 0).unwrap())
        .unwrap();
    assert_eq!(lichun.term, SolarTerm::Lichun);
    assert_eq!(lichun.at.format("%H:%M").to_string(), "16:27");

    let r = engine
        .calculate(&RawBirthRequest::solar(2024, 2, 4, "female").at(17, 0))
        .unwrap();
    assert_eq!(r.bazi.to_string(), "甲辰 丙寅 戊戌 辛酉");
}

/// Dates three days apart on either side of Start of Spring.
#[test]
fn year_pillar_steps_across_lichun() {
    let engine = common::engine();
    let before = engine
        .calculate(&RawBirthRequest::solar(2024, 2, 2, "male"))
        .unwrap();
    let after = engine
        .calculate(&RawBirthRequest::solar(2024, 2, 5, "male"))
        .unwrap();
    assert_eq!(before.bazi.year.hanja(), "癸卯");
    assert_eq!(after.bazi.year.hanja(), "甲辰");
    assert_eq!(after.bazi.year, before.bazi.year.offset(1));
}

/// Hours around midnight on 2000-01-01 (day 戊午, next day 己未).
#[rstest]
#[case::hai_hour(22, "戊午", "癸亥")]
#[case::early_zi(0, "戊午", "壬子")]
#[case::late_zi_split(23, "戊午", "甲子")]
fn midnight_split_zi(#[case] hour: i32, #[case] day: &str, #[case] hour_pillar: &str) {
    let r = common::engine()
        .calculate(&RawBirthRequest::solar(2000, 1, 1, "male").at(hour, 0))
        .unwrap();
    assert_eq!(r.bazi.year.hanja(), "己卯");
    assert_eq!(r.bazi.month.hanja(), "丙子");
    assert_eq!(r.bazi.day.hanja(), day);
    assert_eq!(r.bazi.hour.unwrap().hanja(), hour_pillar);
}

#[test]
fn midnight_advance_day() {
    let engine = common::advance_day_engine();
    let late = engine
        .calculate(&RawBirthRequest::solar(2000, 1, 1, "male").at(23, 0))
        .unwrap();
    assert_eq!(late.bazi.day.hanja(), "己未");
    assert_eq!(late.bazi.hour.unwrap().hanja(), "甲子");

    let earlier = engine
        .calculate(&RawBirthRequest::solar(2000, 1, 1, "male").at(22, 59))
        .unwrap();
    assert_eq!(earlier.bazi.day.hanja(), "戊午");
}

/// 23:00 and 00:00 of one civil day share the 子 branch but not the pillar.
#[test]
fn zi_hours_of_one_day_differ() {
    let engine = common::engine();
    let early = engine
        .calculate(&RawBirthRequest::solar(2000, 1, 1, "male").at(0, 0))
        .unwrap()
        .bazi
        .hour
        .unwrap();
    let late = engine
        .calculate(&RawBirthRequest::solar(2000, 1, 1, "male").at(23, 0))
        .unwrap()
        .bazi
        .hour
        .unwrap();
    assert_eq!(early.branch(), late.branch());
    assert_ne!(early, late);
}

#[test]
fn lunar_leap_month_birth() {
    let r = common::engine()
        .calculate(&RawBirthRequest::lunar(2020, 4, 1, true, "female"))
        .unwrap();
    assert_eq!(r.solar_date, date(2020, 5, 23));
    assert!(r.is_leap_month);
    assert_eq!(r.bazi.to_string(), "庚子 辛巳 丙寅");
    assert_eq!(r.zodiac.animal, Zodiac::Rat);
}

#[test]
fn missing_leap_month_is_unsupported() {
    let err = common::engine()
        .calculate(&RawBirthRequest::lunar(2024, 3, 1, true, "male"))
        .unwrap_err();
    assert_eq!(
        err,
        SajuError::UnsupportedDate(UnsupportedDateError::MissingMonth {
            year: 2024,
            month: 3,
            leap: true
        })
    );
}

/// First broken rule wins, in field order.
#[rstest]
#[case::year_too_early(RawBirthRequest::solar(1899, 12, 31, "male"), Field::Year)]
#[case::year_after_current(RawBirthRequest::solar(2026, 1, 1, "male"), Field::Year)]
#[case::month_13(RawBirthRequest::solar(1990, 13, 1, "nobody"), Field::Month)]
#[case::feb_30(RawBirthRequest::solar(2024, 2, 30, "male"), Field::Day)]
#[case::feb_29_common_year(RawBirthRequest::solar(2023, 2, 29, "male"), Field::Day)]
#[case::short_leap_month(RawBirthRequest::lunar(2020, 4, 30, true, "male"), Field::Day)]
#[case::hour_24(RawBirthRequest::solar(1990, 5, 15, "male").at(24, 0), Field::Hour)]
#[case::minute_60(RawBirthRequest::solar(1990, 5, 15, "male").at(7, 60), Field::Minute)]
#[case::bad_gender(RawBirthRequest::solar(1990, 5, 15, "other"), Field::Gender)]
fn validation_failures(#[case] raw: RawBirthRequest, #[case] field: Field) {
    match common::engine().calculate(&raw) {
        Err(SajuError::Validation(e)) => assert_eq!(e.field, field, "{e}"),
        other => panic!("expected {field} validation error, got {other:?}"),
    }
}

#[test]
fn solar_leap_flag_is_ignored() {
    let mut raw = RawBirthRequest::solar(1990, 5, 15, "MALE");
    raw.is_leap_month = true;
    let moment = common::engine().validate(&raw).unwrap();
    assert!(!moment.leap_month());
    assert_eq!(moment.minute(), 0);
}

#[test]
fn minute_without_hour_is_dropped() {
    let mut raw = RawBirthRequest::solar(1990, 5, 15, "male");
    raw.birth_minute = Some(99);
    let moment = common::engine().validate(&raw).unwrap();
    assert_eq!(moment.hour(), None);
    assert_eq!(moment.minute(), 0);
}

#[test]
fn calculation_is_deterministic() {
    let engine = common::engine();
    let raw = RawBirthRequest::solar(1984, 2, 4, "female").at(23, 45);
    assert_eq!(engine.calculate(&raw).unwrap(), engine.calculate(&raw).unwrap());
    assert_eq!(engine.clone().calculate(&raw).unwrap(), engine.calculate(&raw).unwrap());
}

#[test]
fn annual_pillars_start_at_birth_year() {
    let engine = common::engine();
    let moment = engine
        .validate(&RawBirthRequest::solar(1990, 5, 15, "male"))
        .unwrap();
    let years = engine.annual_pillars(&moment, 1988, 1992).unwrap();
    let labels: Vec<_> = years.iter().map(|a| (a.year, a.age, a.pillar.hanja())).collect();
    assert_eq!(
        labels,
        vec![
            (1990, 0, "庚午".to_owned()),
            (1991, 1, "辛未".to_owned()),
            (1992, 2, "壬申".to_owned()),
        ]
    );
}

#[test]
fn annual_pillars_for_bare_birth_year() {
    let engine = common::engine();
    let moment = engine
        .validate(&RawBirthRequest::solar(1990, 5, 15, "male"))
        .unwrap();
    assert_eq!(
        engine.annual_pillars_for_year(1990, 2024, 2026).unwrap(),
        engine.annual_pillars(&moment, 2024, 2026).unwrap()
    );
}

#[rstest]
#[case::before_tables(1899)]
#[case::after_current_year(2026)]
#[case::extreme_low(i32::MIN)]
#[case::extreme_high(i32::MAX)]
fn annual_birth_year_is_range_checked(#[case] birth_year: i32) {
    let err = common::engine()
        .annual_pillars_for_year(birth_year, i32::MIN, i32::MIN)
        .unwrap_err();
    assert_eq!(err.field, Field::Year);
}

#[test]
fn east_asian_age_reckoning() {
    let engine = common::engine_with(SajuConfig {
        age_reckoning: AgeReckoning::EastAsian,
        ..common::config()
    });
    let r = engine
        .calculate(&RawBirthRequest::solar(1990, 5, 15, "male"))
        .unwrap();
    assert_eq!(r.this_year.unwrap().age, 36);
    assert_eq!(r.decade_luck.periods[0].start_age, 8);
    let childhood = r.decade_luck.childhood.unwrap();
    assert_eq!((childhood.start_age, childhood.end_age), (1, 7));
}

#[test]
fn serializes_camel_case_contract() {
    let r = common::engine()
        .calculate(&RawBirthRequest::solar(1990, 5, 15, "male"))
        .unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["solarDate"], "1990-05-15");
    assert_eq!(json["timeUnknown"], true);
    assert_eq!(json["bazi"]["year"], "庚午");
    assert_eq!(json["bazi"]["hour"], serde_json::Value::Null);
    assert_eq!(json["ganjiKorean"], "경오년 신사월 경진일");
    assert_eq!(json["dayNaYin"], "白蠟金");
    assert_eq!(json["elements"]["dominant"], "metal");
    assert_eq!(json["gender"], "male");
    assert_eq!(json["lunarDate"]["month"], 4);
}

#[test]
fn engine_is_shareable() {
    fn assert_shareable<T: Send + Sync + Clone>() {}
    assert_shareable::<saju_engine::SajuEngine>();
}
