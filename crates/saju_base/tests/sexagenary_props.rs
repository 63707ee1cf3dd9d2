//! Cycle properties of the pillar formulas.

use chrono::{Days, NaiveDate};
use rstest::rstest;
use saju_base::{
    ALL_BRANCHES, ALL_STEMS, Bazi, Pillar, analyze_elements, day_pillar, hour_pillar,
    month_pillar, year_pillar,
};
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Day pillar steps by exactly one across month, year and leap-day
/// boundaries, and repeats every 60 days.
#[rstest]
#[case(date(1900, 1, 1))]
#[case(date(1999, 12, 1))]
#[case(date(2000, 2, 1))]
#[case(date(2024, 2, 1))]
#[case(date(2049, 11, 15))]
fn day_pillar_steps_by_one(#[case] start: NaiveDate) {
    let mut prev = day_pillar(start);
    for n in 1..=120u64 {
        let d = start.checked_add_days(Days::new(n)).unwrap();
        let p = day_pillar(d);
        assert_eq!(p, prev.offset(1), "{d}");
        if n >= 60 {
            let back = d.checked_sub_days(Days::new(60)).unwrap();
            assert_eq!(p, day_pillar(back), "{d} vs {back}");
        }
        prev = p;
    }
}

/// Every constructor keeps stem and branch parity equal.
#[test]
fn parity_invariant_holds_everywhere() {
    let check = |p: Pillar| assert_eq!(p.stem().index() % 2, p.branch().index() % 2, "{p}");
    for i in -120..120 {
        check(Pillar::from_cycle_index(i));
    }
    for y in 1890..2060 {
        check(year_pillar(y));
    }
    for s in ALL_STEMS {
        for t in 0..24 {
            check(month_pillar(s, t));
        }
        for h in 0..24 {
            check(hour_pillar(s, h));
        }
    }
    let mut d = date(1900, 1, 1);
    while d < date(1902, 1, 1) {
        check(day_pillar(d));
        d = d.succ_opt().unwrap();
    }
}

/// Exactly 60 of the 120 stem/branch pairs are valid pillars.
#[test]
fn sixty_valid_pairs() {
    let mut n = 0;
    for s in ALL_STEMS {
        for b in ALL_BRANCHES {
            if let Some(p) = Pillar::try_new(s, b) {
                assert_eq!(Pillar::from_cycle_index(i64::from(p.cycle_index())), p);
                n += 1;
            }
        }
    }
    assert_eq!(n, 60);
}

/// Shares sum to exactly 100 for every 6- and 8-vote chart over a span
/// of days and hours.
#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn shares_always_sum_to_hundred(#[case] decimals: u32) {
    let year = year_pillar(2024);
    for m in 0..24u8 {
        let month = month_pillar(year.stem(), m);
        for offset in 0..60 {
            let day = Pillar::from_cycle_index(offset);
            let without = Bazi { year, month, day, hour: None };
            let d = analyze_elements(&without, decimals);
            assert_eq!(d.shares.total(), Decimal::ONE_HUNDRED);
            assert_eq!(d.votes.total(), 6);
            for h in (0..24).step_by(2) {
                let with = Bazi { hour: Some(hour_pillar(day.stem(), h)), ..without };
                let d = analyze_elements(&with, decimals);
                assert_eq!(d.shares.total(), Decimal::ONE_HUNDRED);
                assert_eq!(d.votes.total(), 8);
            }
        }
    }
}
