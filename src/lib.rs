pub mod angles;
pub mod config;
pub mod error;
pub mod glyphs;
pub mod grid;
pub mod panel;
pub mod types;

pub use angles::{
    deg_to_rad, equation_of_time, hour_angle, normalize_angle, observe, observer_at,
    rad_to_deg, solar_altitude, solar_azimuth, solar_declination, solar_position, solar_time,
    sun_times, twilight_flags, AZIMUTH_EPSILON, DEGREES_PER_HOUR, HORIZON_ASTRONOMICAL,
    HORIZON_CIVIL, HORIZON_NAUTICAL, HORIZON_VISIBLE, OBLIQUITY, REF_LONGITUDE, SOLAR_NOON,
};

pub use config::{Config, ObserverDefaults};

pub use error::{Error, Result};

pub use grid::{
    altitude_to_row, horizon_rows, render, render_observer, render_sequence, sky_glyph,
    sun_column, sun_glyph, time_axis, Frame, HorizonRows,
};

pub use panel::{format_clock, Caption};

pub use types::{
    CanvasGeometry, CharMatrix, ObserverState, SolarPosition, SunTimes, Twilight, TwilightPhase,
};
