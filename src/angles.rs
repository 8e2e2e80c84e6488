use chrono::{DateTime, Datelike, TimeZone, Timelike};
use log::{debug, trace};

use crate::error::Result;
use crate::types::{ObserverState, SolarPosition, SunTimes, Twilight};

pub const OBLIQUITY: f64 = 23.439281;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const SOLAR_NOON: f64 = 12.0;
/// Fixed reference longitude (Amsterdam), degrees east.
pub const REF_LONGITUDE: f64 = 4.9;

pub const HORIZON_VISIBLE: f64 = 0.0;
pub const HORIZON_CIVIL: f64 = -6.0;
pub const HORIZON_NAUTICAL: f64 = -12.0;
pub const HORIZON_ASTRONOMICAL: f64 = -18.0;

/// Below this magnitude of `cos(lat)·cos(alt)` the azimuth is reported as 0.
pub const AZIMUTH_EPSILON: f64 = 1e-12;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Equation of time in minutes.
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let b = 2.0 * std::f64::consts::PI * (day_of_year as f64 - 81.0) / 365.0;
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Solar declination in radians.
pub fn solar_declination(day_of_year: u32) -> f64 {
    let d = 2.0 * std::f64::consts::PI * (day_of_year as f64 - 1.0) / 365.0;
    (deg_to_rad(OBLIQUITY).sin() * d.sin()).asin()
}

pub fn solar_time(hour: f64, equation_of_time: f64) -> f64 {
    hour + equation_of_time / 60.0
}

/// Hour angle in radians, zero at solar noon.
pub fn hour_angle(solar_time: f64) -> f64 {
    deg_to_rad((solar_time - SOLAR_NOON) * DEGREES_PER_HOUR)
}

/// Altitude in degrees. `declination` and `hour_angle` are radians.
pub fn solar_altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let sin_alt =
        lat_rad.sin() * declination.sin() + lat_rad.cos() * declination.cos() * hour_angle.cos();
    rad_to_deg(sin_alt.clamp(-1.0, 1.0).asin())
}

/// Azimuth in degrees within [0, 360).
///
/// The arccos only yields [0, 180], so afternoon hours are mirrored. When
/// `cos(lat)·cos(alt)` vanishes (poles, sun at zenith or nadir) the direction
/// is undefined and 0 is returned.
pub fn solar_azimuth(latitude: f64, declination: f64, altitude: f64, hour: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let alt_rad = deg_to_rad(altitude);
    let denominator = lat_rad.cos() * alt_rad.cos();
    if denominator.is_nan() || denominator.abs() < AZIMUTH_EPSILON {
        debug!("azimuth undefined at latitude {latitude}, altitude {altitude}; using 0");
        return 0.0;
    }

    let ratio = (declination.sin() - lat_rad.sin() * alt_rad.sin()) / denominator;
    let azimuth = rad_to_deg(ratio.clamp(-1.0, 1.0).acos());
    if !azimuth.is_finite() {
        debug!("azimuth not finite for declination {declination}; using 0");
        return 0.0;
    }

    if hour > SOLAR_NOON {
        normalize_angle(360.0 - azimuth)
    } else {
        azimuth
    }
}

/// Daylight length and sunrise/sunset clock hours at the reference longitude.
///
/// `h` is the half-day hour angle, so daylight spans `2h` and always equals
/// `sunset - sunrise`.
pub fn sun_times(latitude: f64, declination: f64, equation_of_time: f64) -> SunTimes {
    let lat_rad = deg_to_rad(latitude);
    let cos_h = -lat_rad.tan() * declination.tan();

    if cos_h < -1.0 {
        SunTimes {
            daylight_hours: 24.0,
            sunrise: 0.0,
            sunset: 24.0,
        }
    } else if cos_h > 1.0 {
        SunTimes {
            daylight_hours: 0.0,
            sunrise: SOLAR_NOON,
            sunset: SOLAR_NOON,
        }
    } else {
        let h = cos_h.acos();
        let half_day = rad_to_deg(h) / DEGREES_PER_HOUR;
        let zone_offset = -REF_LONGITUDE / DEGREES_PER_HOUR;
        let noon = SOLAR_NOON - equation_of_time / 60.0 + zone_offset;
        SunTimes {
            daylight_hours: 2.0 * half_day,
            sunrise: noon - half_day,
            sunset: noon + half_day,
        }
    }
}

pub fn twilight_flags(altitude: f64) -> Twilight {
    Twilight {
        civil: altitude > HORIZON_CIVIL,
        nautical: altitude > HORIZON_NAUTICAL,
        astronomical: altitude > HORIZON_ASTRONOMICAL,
    }
}

/// Sun state for a clock hour, latitude in degrees and day of year.
///
/// The hour wraps at 24. The day of year is taken as given.
pub fn solar_position(hour: f64, latitude: f64, day_of_year: u32) -> SolarPosition {
    let hour = hour.rem_euclid(24.0);
    let declination = solar_declination(day_of_year);
    let eot = equation_of_time(day_of_year);
    let ha = hour_angle(solar_time(hour, eot));
    let altitude = solar_altitude(latitude, declination, ha);
    let azimuth = solar_azimuth(latitude, declination, altitude, hour);
    let times = sun_times(latitude, declination, eot);

    trace!(
        "solar position lat={latitude} day={day_of_year} hour={hour:.3}: alt={altitude:.3} az={azimuth:.3}"
    );

    SolarPosition {
        altitude,
        azimuth,
        daylight_hours: times.daylight_hours,
        sunrise: times.sunrise,
        sunset: times.sunset,
        twilight: twilight_flags(altitude),
        declination,
        equation_of_time: eot,
        hour_angle: ha,
    }
}

pub fn observe(observer: &ObserverState) -> SolarPosition {
    solar_position(observer.hour, observer.latitude, observer.day_of_year)
}

/// Observer for the calendar day and wall-clock time of `dt`.
///
/// The offset of `dt` is not converted; the model already assumes the
/// reference longitude's zone.
pub fn observer_at<Tz: TimeZone>(latitude: f64, dt: &DateTime<Tz>) -> Result<ObserverState> {
    let hour = dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
    ObserverState::new(latitude, dt.ordinal() as i64, hour)
}
