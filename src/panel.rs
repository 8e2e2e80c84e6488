//! Text caption shown next to a frame.

use std::fmt;

use crate::types::{ObserverState, SolarPosition};

/// `HH:MM` on a 24 h dial. Exactly 24 stays `24:00` so an all-day sunset
/// reads as the end of the day rather than midnight.
pub fn format_clock(hours: f64) -> String {
    if !hours.is_finite() {
        return "--:--".to_string();
    }
    if hours == 24.0 {
        return "24:00".to_string();
    }
    let total_minutes = (hours.rem_euclid(24.0) * 60.0).floor() as u32;
    format!("{:02}:{:02}", total_minutes / 60 % 24, total_minutes % 60)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub latitude: f64,
    pub day_of_year: u32,
    pub time: String,
    pub sunrise: String,
    pub sunset: String,
    pub daylight_hours: f64,
    pub altitude: f64,
    pub azimuth: f64,
    pub phase: String,
}

impl Caption {
    pub fn new(observer: &ObserverState, position: &SolarPosition) -> Self {
        Self {
            latitude: observer.latitude,
            day_of_year: observer.day_of_year,
            time: format_clock(observer.hour),
            sunrise: format_clock(position.sunrise),
            sunset: format_clock(position.sunset),
            daylight_hours: position.daylight_hours,
            altitude: position.altitude,
            azimuth: position.azimuth,
            phase: position.phase().to_string(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Latitude: {:.1}°", self.latitude),
            format!(
                "Day: {} ({:.1}h daylight)",
                self.day_of_year, self.daylight_hours
            ),
            format!("Time: {}", self.time),
            format!("Sunrise: {}", self.sunrise),
            format!("Sunset: {}", self.sunset),
            format!(
                "Sun: altitude {:.1}°, azimuth {:.1}° ({})",
                self.altitude, self.azimuth, self.phase
            ),
        ]
    }
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
