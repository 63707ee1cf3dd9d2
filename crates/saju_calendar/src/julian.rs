//! Julian Date ↔ civil date-time conversions and ΔT.
//!
//! Civil date-times are `chrono::NaiveDateTime` values in a fixed offset
//! chosen by the caller (UTC unless stated otherwise). Conversions round to
//! the nearest whole second.

use chrono::{DateTime, Datelike, NaiveDateTime};

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of 1970-01-01T00:00:00.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of a naive date-time interpreted on the same time scale.
pub fn naive_to_jd(dt: NaiveDateTime) -> f64 {
    let utc = dt.and_utc();
    let seconds = utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Naive date-time for a Julian Date, rounded to the nearest second.
///
/// Returns `None` when the value is not finite or lies outside chrono's range.
pub fn jd_to_naive(jd: f64) -> Option<NaiveDateTime> {
    if !jd.is_finite() {
        return None;
    }
    let seconds = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY).round();
    if seconds.abs() > 1e13 {
        return None;
    }
    DateTime::from_timestamp(seconds as i64, 0).map(|dt| dt.naive_utc())
}

/// Decimal year of a date-time, used as the ΔT argument.
pub fn decimal_year(dt: NaiveDateTime) -> f64 {
    f64::from(dt.year()) + (f64::from(dt.month()) - 0.5) / 12.0
}

/// ΔT = TT − UT in seconds for a decimal year.
///
/// Polynomial fits of Espenak & Meeus (NASA eclipse canon), valid for the
/// 19th–21st centuries; the long-term parabola is used beyond 2150.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1900.0 {
        let t = year - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if year < 2150.0 {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Convert a Julian Ephemeris Day (TT) to a Julian Day on the UT scale.
pub fn jde_to_jd_ut(jde: f64, year: f64) -> f64 {
    jde - delta_t_seconds(year) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn j2000_epoch() {
        let jd = naive_to_jd(dt(2000, 1, 1, 12, 0));
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7a() {
        // 1957-10-04.81 = JD 2436116.31
        let jd = naive_to_jd(dt(1957, 10, 4, 19, 26) + chrono::Duration::seconds(24));
        assert!((jd - 2_436_116.31).abs() < 1e-6, "got {jd}");
    }

    #[test]
    fn jd_roundtrip_to_second() {
        let t = dt(1990, 5, 15, 7, 41);
        let back = jd_to_naive(naive_to_jd(t)).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn jd_nan_rejected() {
        assert!(jd_to_naive(f64::NAN).is_none());
    }

    #[test]
    fn delta_t_year_2000() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.01, "got {dt}");
    }

    #[test]
    fn delta_t_monotone_in_modern_era() {
        let a = delta_t_seconds(1960.0);
        let b = delta_t_seconds(1990.0);
        let c = delta_t_seconds(2020.0);
        assert!(a < b && b < c, "{a} {b} {c}");
    }

    #[test]
    fn delta_t_continuity_at_2005() {
        let before = delta_t_seconds(2004.999);
        let after = delta_t_seconds(2005.0);
        assert!((before - after).abs() < 0.5, "{before} vs {after}");
    }
}
