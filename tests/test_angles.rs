use chrono::{FixedOffset, TimeZone};

use solar_ascii::angles::*;
use solar_ascii::types::{ObserverState, TwilightPhase};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── DegRad ──

#[test]
fn test_deg_rad_roundtrip() {
    for &deg in &[0.0, 45.0, 90.0, 180.0, 270.0, 360.0, -45.0, -180.0, 123.456] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-10);
    }
}

#[test]
fn test_known_conversions() {
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-10);
    assert_approx!(deg_to_rad(90.0), std::f64::consts::FRAC_PI_2, 1e-10);
    assert_approx!(rad_to_deg(std::f64::consts::PI), 180.0, 1e-10);
}

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (720.0, 0.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_normalize_angle_tiny_negative_stays_below_360() {
    let a = normalize_angle(-1e-15);
    assert!(a >= 0.0 && a < 360.0, "a={}", a);
}

// ── EquationOfTime ──

#[test]
fn test_equation_of_time_reference_day() {
    // B = 0 on day 81, leaving only the cosine term
    assert_approx!(equation_of_time(81), -7.53, 1e-12);
}

#[test]
fn test_equation_of_time_bounded() {
    for n in 1..=365 {
        let eot = equation_of_time(n);
        assert!(eot >= -15.0 && eot <= 17.0, "Day {}: {}", n, eot);
    }
}

// ── SolarDeclination ──

#[test]
fn test_solar_declination_zero_on_first_day() {
    assert_approx!(solar_declination(1), 0.0, 1e-12);
}

#[test]
fn test_solar_declination_bounded_by_obliquity() {
    let limit = deg_to_rad(OBLIQUITY) + 1e-12;
    for n in 1..=365 {
        let decl = solar_declination(n);
        assert!(decl.abs() <= limit, "Day {}: {}", n, decl);
    }
}

#[test]
fn test_solar_declination_sign_by_half_year() {
    assert!(solar_declination(92) > 0.0);
    assert!(solar_declination(172) > 0.0);
    assert!(solar_declination(275) < 0.0);
    assert!(solar_declination(355) < 0.0);
}

// ── HourAngle ──

#[test]
fn test_hour_angle_solar_noon() {
    assert_approx!(hour_angle(12.0), 0.0, 1e-12);
}

#[test]
fn test_hour_angle_known_values() {
    assert_approx!(rad_to_deg(hour_angle(13.0)), 15.0, 1e-9);
    assert_approx!(rad_to_deg(hour_angle(11.0)), -15.0, 1e-9);
    assert_approx!(rad_to_deg(hour_angle(18.0)), 90.0, 1e-9);
}

#[test]
fn test_solar_time_applies_equation_of_time() {
    assert_approx!(solar_time(12.0, -7.53), 12.0 - 7.53 / 60.0, 1e-12);
}

// ── SolarPosition ranges ──

#[test]
fn test_altitude_and_azimuth_always_in_range() {
    let mut lat = -90.0;
    while lat <= 90.0 {
        for day in (1..=365).step_by(7) {
            let mut hour = 0.0;
            while hour < 24.0 {
                let pos = solar_position(hour, lat, day);
                assert!(
                    pos.altitude >= -90.0 && pos.altitude <= 90.0,
                    "altitude={} for ({}, {}, {})",
                    pos.altitude, lat, day, hour
                );
                assert!(
                    pos.azimuth >= 0.0 && pos.azimuth < 360.0,
                    "azimuth={} for ({}, {}, {})",
                    pos.azimuth, lat, day, hour
                );
                assert!(pos.daylight_hours >= 0.0 && pos.daylight_hours <= 24.0);
                hour += 0.5;
            }
        }
        lat += 10.0;
    }
}

#[test]
fn test_hour_wraps_at_24() {
    assert_eq!(solar_position(25.0, 52.0, 175), solar_position(1.0, 52.0, 175));
    assert_eq!(solar_position(-1.0, 52.0, 175), solar_position(23.0, 52.0, 175));
}

#[test]
fn test_deterministic() {
    assert_eq!(solar_position(13.7, 41.0, 200), solar_position(13.7, 41.0, 200));
}

// ── Known positions ──

#[test]
fn test_midsummer_noon_at_52n() {
    let pos = solar_position(12.0, 52.0, 175);
    assert_approx!(pos.altitude, 41.32, 0.05);
    assert_approx!(pos.azimuth, 179.31, 0.05);
}

#[test]
fn test_morning_afternoon_symmetry() {
    let morning = solar_position(9.0, 52.0, 175);
    let afternoon = solar_position(15.0, 52.0, 175);
    assert_approx!(morning.altitude, afternoon.altitude, 1.0);
    assert!(morning.azimuth < 180.0, "azimuth={}", morning.azimuth);
    assert!(afternoon.azimuth > 180.0, "azimuth={}", afternoon.azimuth);
}

#[test]
fn test_midnight_below_horizon() {
    let pos = solar_position(0.0, 52.0, 175);
    assert!(pos.altitude < -18.0, "altitude={}", pos.altitude);
    assert!(!pos.twilight.astronomical);
}

// ── Azimuth degenerate cases ──

#[test]
fn test_pole_azimuth_is_zero() {
    for &lat in &[90.0, -90.0] {
        for &hour in &[0.0, 6.0, 12.0, 18.0] {
            let pos = solar_position(hour, lat, 172);
            assert_eq!(pos.azimuth, 0.0, "lat={} hour={}", lat, hour);
            assert!(pos.altitude.is_finite());
        }
    }
}

#[test]
fn test_sun_at_zenith_azimuth_is_zero() {
    let decl = deg_to_rad(20.0);
    assert_eq!(solar_azimuth(20.0, decl, 90.0, 12.0), 0.0);
    assert_eq!(solar_azimuth(20.0, decl, 90.0, 15.0), 0.0);
}

#[test]
fn test_azimuth_afternoon_mirror() {
    let decl = 0.0;
    let am = solar_azimuth(45.0, decl, 30.0, 10.0);
    let pm = solar_azimuth(45.0, decl, 30.0, 14.0);
    assert_approx!(am + pm, 360.0, 1e-9);
}

// ── Daylight ──

#[test]
fn test_equator_equinox_12h_daylight() {
    for &day in &[81, 264] {
        let pos = solar_position(12.0, 0.0, day);
        assert_approx!(pos.daylight_hours, 12.0, 0.1);
    }
}

#[test]
fn test_daylight_equals_sunset_minus_sunrise() {
    for &(lat, day) in &[(52.0, 175), (52.0, 355), (-33.9, 40), (10.0, 300)] {
        let pos = solar_position(12.0, lat, day);
        assert_approx!(pos.sunset - pos.sunrise, pos.daylight_hours, 1e-9);
    }
}

#[test]
fn test_midsummer_at_52n() {
    let pos = solar_position(12.0, 52.0, 175);
    assert_approx!(pos.daylight_hours, 12.57, 0.05);
    assert_approx!(pos.sunrise, 5.42, 0.05);
    assert_approx!(pos.sunset, 17.99, 0.05);
}

#[test]
fn test_sunrise_sunset_shifted_by_reference_longitude() {
    let times = sun_times(0.0, 0.0, 0.0);
    let offset = REF_LONGITUDE / DEGREES_PER_HOUR;
    assert_approx!(times.sunrise, 6.0 - offset, 1e-9);
    assert_approx!(times.sunset, 18.0 - offset, 1e-9);
}

#[test]
fn test_polar_day_and_night() {
    for day in 10..=170 {
        let summer = solar_position(12.0, 90.0, day);
        assert_eq!(summer.daylight_hours, 24.0, "Day {}", day);
        assert_eq!(summer.sunrise, 0.0, "Day {}", day);
        assert_eq!(summer.sunset, 24.0, "Day {}", day);
    }

    for day in 200..=350 {
        let winter = solar_position(12.0, 90.0, day);
        assert_eq!(winter.daylight_hours, 0.0, "Day {}", day);
        assert_eq!(winter.sunrise, 12.0, "Day {}", day);
        assert_eq!(winter.sunset, 12.0, "Day {}", day);
    }
}

#[test]
fn test_south_pole_reversed() {
    for day in 10..=170 {
        assert_eq!(solar_position(12.0, -90.0, day).daylight_hours, 0.0, "Day {}", day);
    }
    for day in 200..=350 {
        assert_eq!(solar_position(12.0, -90.0, day).daylight_hours, 24.0, "Day {}", day);
    }
}

#[test]
fn test_summer_longer_than_winter() {
    let summer = solar_position(12.0, 52.0, 120);
    let winter = solar_position(12.0, 52.0, 300);
    assert!(summer.daylight_hours > winter.daylight_hours);
}

// ── Twilight ──

#[test]
fn test_twilight_thresholds_are_strict() {
    let t = twilight_flags(-6.0);
    assert!(!t.civil);
    assert!(t.nautical);
    assert!(t.astronomical);

    let t = twilight_flags(-5.9);
    assert!(t.civil);

    let t = twilight_flags(-18.0);
    assert!(!t.astronomical);
}

#[test]
fn test_twilight_phase() {
    let cases: &[(f64, TwilightPhase)] = &[
        (10.0, TwilightPhase::Day),
        (0.0, TwilightPhase::Civil),
        (-7.0, TwilightPhase::Nautical),
        (-13.0, TwilightPhase::Astronomical),
        (-18.0, TwilightPhase::Night),
    ];
    for &(altitude, expected) in cases {
        let mut pos = solar_position(12.0, 52.0, 175);
        pos.altitude = altitude;
        pos.twilight = twilight_flags(altitude);
        assert_eq!(pos.phase(), expected, "altitude={}", altitude);
    }
}

// ── Observer ──

#[test]
fn test_observe_matches_solar_position() {
    let observer = ObserverState::new(52.0, 175, 12.0).unwrap();
    assert_eq!(observe(&observer), solar_position(12.0, 52.0, 175));
}

#[test]
fn test_observer_at_datetime() {
    let tz = FixedOffset::east_opt(3600).unwrap();
    let dt = tz.with_ymd_and_hms(2026, 3, 22, 13, 30, 0).unwrap();
    let observer = observer_at(52.0, &dt).unwrap();
    assert_eq!(observer.day_of_year, 81);
    assert_approx!(observer.hour, 13.5, 1e-12);
}

#[test]
fn test_observer_at_leap_day_end() {
    let tz = FixedOffset::east_opt(0).unwrap();
    let dt = tz.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    let observer = observer_at(-10.0, &dt).unwrap();
    assert_eq!(observer.day_of_year, 366);
}

#[test]
fn test_observer_validation() {
    assert!(ObserverState::new(91.0, 100, 12.0).is_err());
    assert!(ObserverState::new(45.0, 0, 12.0).is_err());
    assert!(ObserverState::new(45.0, 100, f64::NAN).is_err());
    assert_eq!(ObserverState::new(45.0, 100, 30.0).unwrap().hour, 6.0);
}

#[test]
fn test_observer_advance_wraps() {
    let observer = ObserverState::new(52.0, 175, 23.5).unwrap();
    assert_approx!(observer.advance(1.0).hour, 0.5, 1e-12);
    assert_approx!(observer.advance(-24.0).hour, 23.5, 1e-12);
    assert_eq!(observer.advance(1.0).day_of_year, 175);
}
