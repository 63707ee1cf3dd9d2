//! Apparent geocentric longitude of the Sun.
//!
//! Earth's heliocentric longitude from the truncated VSOP87 series,
//! converted to the FK5 frame and corrected for nutation in longitude and
//! annual aberration. Accuracy is about one arcsecond over 1900–2100, well
//! under a minute of time for solar-term instants.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 25 and App. III.
//! Public domain.

use crate::julian::J2000_JD;

/// Days per Julian millennium.
const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Arcseconds to degrees.
const AS2DEG: f64 = 1.0 / 3600.0;

/// One VSOP87 periodic term: `A · cos(B + C·τ)`.
type Term = (f64, f64, f64);

#[rustfmt::skip]
static L0: [Term; 64] = [
    (175_347_046.0, 0.0, 0.0),
    (3_341_656.0, 4.669_256_8, 6_283.075_850_0),
    (34_894.0, 4.6261, 12_566.1517),
    (3_497.0, 2.7441, 5_753.3849),
    (3_418.0, 2.8289, 3.5231),
    (3_136.0, 3.6277, 77_713.7715),
    (2_676.0, 4.4181, 7_860.4194),
    (2_343.0, 6.1352, 3_930.2097),
    (1_324.0, 0.7425, 11_506.7698),
    (1_273.0, 2.0371, 529.6910),
    (1_199.0, 1.1096, 1_577.3435),
    (990.0, 5.233, 5_884.927),
    (902.0, 2.045, 26.298),
    (857.0, 3.508, 398.149),
    (780.0, 1.179, 5_223.694),
    (753.0, 2.533, 5_507.553),
    (505.0, 4.583, 18_849.228),
    (492.0, 4.205, 775.523),
    (357.0, 2.920, 0.067),
    (317.0, 5.849, 11_790.629),
    (284.0, 1.899, 796.298),
    (271.0, 0.315, 10_977.079),
    (243.0, 0.345, 5_486.778),
    (206.0, 4.806, 2_544.314),
    (205.0, 1.869, 5_573.143),
    (202.0, 2.458, 6_069.777),
    (156.0, 0.833, 213.299),
    (132.0, 3.411, 2_942.463),
    (126.0, 1.083, 20.775),
    (115.0, 0.645, 0.980),
    (103.0, 0.636, 4_694.003),
    (102.0, 0.976, 15_720.839),
    (102.0, 4.267, 7.114),
    (99.0, 6.21, 2_146.17),
    (98.0, 0.68, 155.42),
    (86.0, 5.98, 161_000.69),
    (85.0, 1.30, 6_275.96),
    (85.0, 3.67, 71_430.70),
    (80.0, 1.81, 17_260.15),
    (79.0, 3.04, 12_036.46),
    (75.0, 1.76, 5_088.63),
    (74.0, 3.50, 3_154.69),
    (74.0, 4.68, 801.82),
    (70.0, 0.83, 9_437.76),
    (62.0, 3.98, 8_827.39),
    (61.0, 1.82, 7_084.90),
    (57.0, 2.78, 6_286.60),
    (56.0, 4.39, 14_143.50),
    (56.0, 3.47, 6_279.55),
    (52.0, 0.19, 12_139.55),
    (52.0, 1.33, 1_748.02),
    (51.0, 0.28, 5_856.48),
    (49.0, 0.49, 1_194.45),
    (41.0, 5.37, 8_429.24),
    (41.0, 2.40, 19_651.05),
    (39.0, 6.17, 10_447.39),
    (37.0, 6.04, 10_213.29),
    (37.0, 2.57, 1_059.38),
    (36.0, 1.71, 2_352.87),
    (36.0, 1.78, 6_812.77),
    (33.0, 0.59, 17_789.85),
    (30.0, 0.44, 83_996.85),
    (30.0, 2.74, 1_349.87),
    (25.0, 3.16, 4_690.48),
];

#[rustfmt::skip]
static L1: [Term; 34] = [
    (628_331_966_747.0, 0.0, 0.0),
    (206_059.0, 2.678_235, 6_283.075_85),
    (4_303.0, 2.6351, 12_566.1517),
    (425.0, 1.590, 3.523),
    (119.0, 5.796, 26.298),
    (109.0, 2.966, 1_577.344),
    (93.0, 2.59, 18_849.23),
    (72.0, 1.14, 529.69),
    (68.0, 1.87, 398.15),
    (67.0, 4.41, 5_507.55),
    (59.0, 2.89, 5_223.69),
    (56.0, 2.17, 155.42),
    (45.0, 0.40, 796.30),
    (36.0, 0.47, 775.52),
    (29.0, 2.65, 7.11),
    (21.0, 5.34, 0.98),
    (19.0, 1.85, 5_486.78),
    (19.0, 4.97, 213.30),
    (17.0, 2.99, 6_275.96),
    (16.0, 0.03, 2_544.31),
    (16.0, 1.43, 2_146.17),
    (15.0, 1.21, 10_977.08),
    (12.0, 2.83, 1_748.02),
    (12.0, 3.26, 5_088.63),
    (12.0, 5.27, 1_194.45),
    (12.0, 2.08, 4_694.00),
    (11.0, 0.77, 553.57),
    (10.0, 1.30, 6_286.60),
    (10.0, 4.24, 1_349.87),
    (9.0, 2.70, 242.73),
    (9.0, 5.64, 951.72),
    (8.0, 5.30, 2_352.87),
    (6.0, 2.65, 9_437.76),
    (6.0, 4.67, 4_690.48),
];

#[rustfmt::skip]
static L2: [Term; 20] = [
    (52_919.0, 0.0, 0.0),
    (8_720.0, 1.0721, 6_283.0758),
    (309.0, 0.867, 12_566.152),
    (27.0, 0.05, 3.52),
    (16.0, 5.19, 26.30),
    (16.0, 3.68, 155.42),
    (10.0, 0.76, 18_849.23),
    (9.0, 2.06, 77_713.77),
    (7.0, 0.83, 775.52),
    (5.0, 4.66, 1_577.34),
    (4.0, 1.03, 7.11),
    (4.0, 3.44, 5_573.14),
    (3.0, 5.14, 796.30),
    (3.0, 6.05, 5_507.55),
    (3.0, 1.19, 242.73),
    (3.0, 6.12, 529.69),
    (3.0, 0.31, 398.15),
    (3.0, 2.28, 553.57),
    (2.0, 4.38, 5_223.69),
    (2.0, 3.75, 0.98),
];

#[rustfmt::skip]
static L3: [Term; 7] = [
    (289.0, 5.844, 6_283.076),
    (35.0, 0.0, 0.0),
    (17.0, 5.49, 12_566.15),
    (3.0, 5.20, 155.42),
    (1.0, 4.72, 3.52),
    (1.0, 5.30, 18_849.23),
    (1.0, 5.97, 242.73),
];

#[rustfmt::skip]
static L4: [Term; 3] = [
    (114.0, 3.142, 0.0),
    (8.0, 4.13, 6_283.08),
    (1.0, 3.84, 12_566.15),
];

#[rustfmt::skip]
static L5: [Term; 1] = [(1.0, 3.14, 0.0)];

fn series(terms: &[Term], tau: f64) -> f64 {
    terms.iter().map(|&(a, b, c)| a * (b + c * tau).cos()).sum()
}

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Heliocentric ecliptic longitude of the Earth (radians, VSOP87 dynamical
/// ecliptic of date) at `tau` Julian millennia from J2000.0 TT.
pub fn earth_heliocentric_longitude(tau: f64) -> f64 {
    let coeffs = [
        series(&L0, tau),
        series(&L1, tau),
        series(&L2, tau),
        series(&L3, tau),
        series(&L4, tau),
        series(&L5, tau),
    ];
    // Horner in tau
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * tau + c) / 1e8
}

/// Nutation in longitude Δψ in arcseconds (Meeus ch. 22 low-precision form).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let omega = (125.044_52 - 1_934.136_261 * t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();
    -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin()
}

/// Sun–Earth distance in AU from the Keplerian ellipse (aberration only).
fn sun_distance_au(t: f64) -> f64 {
    let e = 0.016_708_634 - 0.000_042_037 * t;
    let m = (357.529_11 + 35_999.050_29 * t).to_radians();
    let c = (1.914_602_f64).to_radians() * m.sin();
    1.000_001_018 * (1.0 - e * e) / (1.0 + e * (m + c).cos())
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees [0, 360).
///
/// `jde` is the Julian Ephemeris Day (TT).
pub fn sun_apparent_longitude_deg(jde: f64) -> f64 {
    let tau = (jde - J2000_JD) / DAYS_PER_MILLENNIUM;
    let t = tau * 10.0;
    let geometric = earth_heliocentric_longitude(tau).to_degrees() + 180.0;
    // FK5 frame correction
    let fk5 = -0.090_33 * AS2DEG;
    let nutation = nutation_longitude_arcsec(t) * AS2DEG;
    let aberration = -20.4898 / sun_distance_au(t) * AS2DEG;
    normalize_deg(geometric + fk5 + nutation + aberration)
}

/// Signed smallest difference `target − lon` in degrees, in (−180, 180].
pub fn longitude_gap_deg(target: f64, lon: f64) -> f64 {
    let d = (target - lon).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps() {
        assert!((normalize_deg(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_deg(725.0) - 5.0).abs() < 1e-12);
        assert_eq!(normalize_deg(0.0), 0.0);
    }

    #[test]
    fn meeus_example_25b() {
        // 1992-10-13.0 TD: apparent longitude 199°54'21.818" (full VSOP87).
        let lon = sun_apparent_longitude_deg(2_448_908.5);
        let expected = 199.0 + 54.0 / 60.0 + 21.818 / 3600.0;
        assert!(
            (lon - expected).abs() < 2.0 / 3600.0,
            "expected {expected:.6}, got {lon:.6}"
        );
    }

    #[test]
    fn gap_is_signed_and_short() {
        assert!((longitude_gap_deg(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((longitude_gap_deg(350.0, 10.0) + 20.0).abs() < 1e-12);
    }

    #[test]
    fn distance_near_one_au() {
        let r = sun_distance_au(0.0);
        assert!(r > 0.98 && r < 1.02, "got {r}");
    }

    #[test]
    fn longitude_advances_about_one_degree_per_day() {
        let a = sun_apparent_longitude_deg(J2000_JD);
        let b = sun_apparent_longitude_deg(J2000_JD + 1.0);
        let step = longitude_gap_deg(b, a);
        assert!(step > 0.95 && step < 1.03, "got {step}");
    }
}
