use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{self, Error, Result};

/// Latitude, calendar day and clock hour for one evaluation of the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverState {
    pub latitude: f64,
    pub day_of_year: u32,
    pub hour: f64,
}

impl ObserverState {
    /// Validated constructor. The hour is wrapped into [0, 24).
    pub fn new(latitude: f64, day_of_year: i64, hour: f64) -> Result<Self> {
        error::check_latitude(latitude)?;
        let day_of_year = error::check_day_of_year(day_of_year)?;
        let hour = error::check_hour(hour)?;
        Ok(Self {
            latitude,
            day_of_year,
            hour,
        })
    }

    pub fn unchecked(latitude: f64, day_of_year: u32, hour: f64) -> Self {
        Self {
            latitude,
            day_of_year,
            hour,
        }
    }

    /// Same latitude and day, hour moved forward by `step_hours` on a 24 h dial.
    pub fn advance(&self, step_hours: f64) -> Self {
        Self {
            hour: (self.hour + step_hours).rem_euclid(24.0),
            ..*self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Twilight {
    pub civil: bool,
    pub nautical: bool,
    pub astronomical: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwilightPhase {
    Day,
    Civil,
    Nautical,
    Astronomical,
    Night,
}

impl fmt::Display for TwilightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Day => "day",
            Self::Civil => "civil twilight",
            Self::Nautical => "nautical twilight",
            Self::Astronomical => "astronomical twilight",
            Self::Night => "night",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub daylight_hours: f64,
    pub sunrise: f64,
    pub sunset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    pub altitude: f64,
    pub azimuth: f64,
    pub daylight_hours: f64,
    pub sunrise: f64,
    pub sunset: f64,
    pub twilight: Twilight,
    /// Radians.
    pub declination: f64,
    /// Minutes.
    pub equation_of_time: f64,
    /// Radians, negative before solar noon.
    pub hour_angle: f64,
}

impl SolarPosition {
    pub fn is_visible(&self) -> bool {
        self.altitude > crate::angles::HORIZON_VISIBLE
    }

    pub fn phase(&self) -> TwilightPhase {
        if self.is_visible() {
            TwilightPhase::Day
        } else if self.twilight.civil {
            TwilightPhase::Civil
        } else if self.twilight.nautical {
            TwilightPhase::Nautical
        } else if self.twilight.astronomical {
            TwilightPhase::Astronomical
        } else {
            TwilightPhase::Night
        }
    }
}

/// Largest accepted width or height.
pub const MAX_CANVAS_DIMENSION: usize = 4096;

/// Fixed layout of the rendered sky.
///
/// Rows `0..horizon_row - 2` are sky, `horizon_row` and `horizon_row + 1`
/// hold the time axis. Everything in between stays blank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasGeometry {
    pub width: usize,
    pub height: usize,
    pub horizon_row: usize,
    pub hour_width: f64,
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self {
            width: 80,
            height: 40,
            horizon_row: 38,
            hour_width: 80.0 / 24.0,
        }
    }
}

impl CanvasGeometry {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::invalid_geometry("width must be positive"));
        }
        if self.width > MAX_CANVAS_DIMENSION || self.height > MAX_CANVAS_DIMENSION {
            return Err(Error::invalid_geometry(format!(
                "canvas {}x{} exceeds {MAX_CANVAS_DIMENSION} cells per side",
                self.width, self.height
            )));
        }
        if self.horizon_row < 4 {
            return Err(Error::invalid_geometry(format!(
                "horizon row {} leaves no room for the sky",
                self.horizon_row
            )));
        }
        if self
            .horizon_row
            .checked_add(2)
            .map_or(true, |end| end > self.height)
        {
            return Err(Error::invalid_geometry(format!(
                "time axis rows starting at {} do not fit in height {}",
                self.horizon_row, self.height
            )));
        }
        if !self.hour_width.is_finite()
            || self.hour_width <= 0.0
            || self.hour_width > self.width as f64
        {
            return Err(Error::invalid_geometry(format!(
                "hour width {} must be positive and at most the width {}",
                self.hour_width, self.width
            )));
        }
        Ok(())
    }

    /// Rows available to the altitude transform.
    pub fn usable_height(&self) -> usize {
        self.horizon_row.saturating_sub(4)
    }

    /// Rows the sky gradient may paint, exclusive upper bound.
    pub fn sky_rows(&self) -> usize {
        self.horizon_row.saturating_sub(2).min(self.height)
    }
}

/// A `height × width` block of single-character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharMatrix {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl CharMatrix {
    pub fn filled(height: usize, width: usize, c: char) -> Self {
        Self {
            rows: vec![vec![c; width]; height],
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[char]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.get(col).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, c: char) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = c;
        }
    }

    pub(crate) fn fill_row(&mut self, row: usize, c: char) {
        if let Some(r) = self.rows.get_mut(row) {
            r.fill(c);
        }
    }

    /// Replaces a row, padding or truncating `cells` to the matrix width.
    pub(crate) fn replace_row(&mut self, row: usize, cells: &[char], pad: char) {
        let width = self.width;
        if let Some(r) = self.rows.get_mut(row) {
            for (col, cell) in r.iter_mut().enumerate().take(width) {
                *cell = cells.get(col).copied().unwrap_or(pad);
            }
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.iter().collect()).collect()
    }
}

impl fmt::Display for CharMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
