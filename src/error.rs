//! Error types for observer validation and configuration loading.
//!
//! The solar model and the grid renderer never fail; errors only come from
//! checking caller input up front or from reading a configuration file.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid day of year {value} (must be between 1 and 366)")]
    InvalidDayOfYear { value: i64 },

    #[error("invalid hour {value} (must be finite)")]
    InvalidHour { value: f64 },

    #[error("invalid canvas geometry: {message}")]
    InvalidGeometry { message: String },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }
}

pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::InvalidLatitude { value: latitude });
    }
    Ok(())
}

pub fn check_day_of_year(day: i64) -> Result<u32> {
    if !(1..=366).contains(&day) {
        return Err(Error::InvalidDayOfYear { value: day });
    }
    Ok(day as u32)
}

/// Wraps a finite hour into [0, 24).
pub fn check_hour(hour: f64) -> Result<f64> {
    if !hour.is_finite() {
        return Err(Error::InvalidHour { value: hour });
    }
    Ok(hour.rem_euclid(24.0))
}
