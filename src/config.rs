//! JSON configuration for the canvas layout and the starting observer.
//!
//! Every field has a default, so a partial file (or `{}`) is valid:
//!
//! ```json
//! { "canvas": { "width": 120 }, "observer": { "latitude": -33.9 } }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{CanvasGeometry, ObserverState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverDefaults {
    pub latitude: f64,
    pub day_of_year: i64,
    pub hour: f64,
}

impl Default for ObserverDefaults {
    fn default() -> Self {
        Self {
            latitude: 52.0,
            day_of_year: 175,
            hour: 12.0,
        }
    }
}

impl ObserverDefaults {
    pub fn to_observer(&self) -> Result<ObserverState> {
        ObserverState::new(self.latitude, self.day_of_year, self.hour)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasGeometry,
    pub observer: ObserverDefaults,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading config from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.canvas.validate()?;
        self.observer.to_observer()?;
        Ok(())
    }
}
