//! Character-grid rendering of a solar position.
//!
//! Altitude is placed on rows by a linear map of the whole −90°..90° range
//! onto the rows above the time axis. This is not a sky projection, it
//! reproduces the established look of the display.

use log::trace;

use crate::angles::{self, HORIZON_ASTRONOMICAL, HORIZON_CIVIL, HORIZON_NAUTICAL, HORIZON_VISIBLE};
use crate::glyphs;
use crate::types::{CanvasGeometry, CharMatrix, ObserverState, SolarPosition};

/// Rows reserved beneath the altitude range.
const FOOTER_ROWS: i64 = 4;

/// Row for an altitude in degrees. May fall outside the canvas.
pub fn altitude_to_row(altitude: f64, geometry: &CanvasGeometry) -> i64 {
    let usable = geometry.usable_height() as f64;
    let top = i64::try_from(geometry.horizon_row)
        .unwrap_or(i64::MAX)
        .saturating_sub(FOOTER_ROWS);
    top.saturating_sub((((altitude + 90.0) / 180.0) * usable).floor() as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizonRows {
    pub visible: i64,
    pub civil: i64,
    pub nautical: i64,
    pub astronomical: i64,
}

impl HorizonRows {
    /// Rows paired with their line glyph, in drawing order.
    pub fn bands(&self) -> [(i64, char); 4] {
        [
            (self.visible, glyphs::HORIZON_VISIBLE),
            (self.civil, glyphs::HORIZON_CIVIL),
            (self.nautical, glyphs::HORIZON_NAUTICAL),
            (self.astronomical, glyphs::HORIZON_ASTRONOMICAL),
        ]
    }

    pub fn contains(&self, row: i64) -> bool {
        self.bands().iter().any(|&(r, _)| r == row)
    }
}

pub fn horizon_rows(geometry: &CanvasGeometry) -> HorizonRows {
    HorizonRows {
        visible: altitude_to_row(HORIZON_VISIBLE, geometry),
        civil: altitude_to_row(HORIZON_CIVIL, geometry),
        nautical: altitude_to_row(HORIZON_NAUTICAL, geometry),
        astronomical: altitude_to_row(HORIZON_ASTRONOMICAL, geometry),
    }
}

pub fn sun_column(azimuth: f64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let col = ((azimuth / 360.0) * width as f64).floor();
    // negative and NaN saturate to 0
    (col as usize).min(width - 1)
}

pub fn sun_glyph(altitude: f64) -> char {
    if altitude > HORIZON_VISIBLE {
        let index = ((altitude / 15.0).floor() as usize).min(glyphs::SUN_ABOVE.len() - 1);
        glyphs::SUN_ABOVE[index]
    } else if altitude > HORIZON_CIVIL {
        let index =
            (((altitude - HORIZON_CIVIL) / 2.0).floor() as usize).min(glyphs::SUN_HORIZON.len() - 1);
        glyphs::SUN_HORIZON[index]
    } else if altitude > HORIZON_NAUTICAL {
        glyphs::SUN_CIVIL
    } else if altitude > HORIZON_ASTRONOMICAL {
        glyphs::SUN_NAUTICAL
    } else {
        glyphs::SUN_ASTRONOMICAL
    }
}

/// Sky glyph at `distance` cells from the sun. The gradient is wider while
/// civil twilight is active.
pub fn sky_glyph(distance: f64, civil: bool) -> char {
    let spread = if civil { 3.0 } else { 2.0 };
    let index = ((distance / spread).floor() as usize).min(glyphs::SKY.len() - 1);
    glyphs::SKY[index]
}

/// Hour labels and tick marks for the two rows under the sky.
pub fn time_axis(geometry: &CanvasGeometry) -> [Vec<char>; 2] {
    let width = geometry.width;
    let mut labels = vec![glyphs::BLANK; width];
    let mut marks = vec![glyphs::AXIS_RULE; width];

    for hour in 0..24u32 {
        let pos = (hour as f64 * geometry.hour_width).floor() as usize;
        if pos.checked_add(1).is_some_and(|next| next < width) {
            let digits: Vec<char> = format!("{hour:02}").chars().collect();
            labels[pos] = digits[0];
            labels[pos + 1] = digits[1];
            marks[pos] = glyphs::AXIS_TICK;
        }
    }

    if let Some(last) = marks.last_mut() {
        *last = glyphs::AXIS_END;
    }
    [labels, marks]
}

fn sky_row(row: i64, geometry: &CanvasGeometry) -> Option<usize> {
    usize::try_from(row).ok().filter(|&r| r < geometry.sky_rows())
}

/// Draws a full frame. The matrix is always `height × width`.
pub fn render(position: &SolarPosition, geometry: &CanvasGeometry) -> CharMatrix {
    let mut matrix = CharMatrix::filled(geometry.height, geometry.width, glyphs::BLANK);

    let horizons = horizon_rows(geometry);
    for (row, glyph) in horizons.bands() {
        if let Some(r) = sky_row(row, geometry) {
            matrix.fill_row(r, glyph);
        }
    }

    let sun_x = sun_column(position.azimuth, geometry.width) as i64;
    let sun_y = altitude_to_row(position.altitude, geometry);
    let sun = sun_glyph(position.altitude);

    for y in 0..geometry.sky_rows() {
        let row = y as i64;
        if horizons.contains(row) {
            continue;
        }
        for x in 0..geometry.width {
            let col = x as i64;
            let glyph = if col == sun_x && row == sun_y {
                sun
            } else {
                let dx = col as f64 - sun_x as f64;
                let dy = row as f64 - sun_y as f64;
                sky_glyph(dx.hypot(dy), position.twilight.civil)
            };
            matrix.set(y, x, glyph);
        }
    }

    let [labels, marks] = time_axis(geometry);
    matrix.replace_row(geometry.horizon_row, &labels, glyphs::BLANK);
    if let Some(tick_row) = geometry.horizon_row.checked_add(1) {
        matrix.replace_row(tick_row, &marks, glyphs::AXIS_RULE);
    }

    trace!("rendered sun at row {sun_y}, col {sun_x} as {sun:?}");
    matrix
}

/// One rendered moment: the input, the derived sun state and its picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub observer: ObserverState,
    pub position: SolarPosition,
    pub matrix: CharMatrix,
}

pub fn render_observer(observer: &ObserverState, geometry: &CanvasGeometry) -> Frame {
    let position = angles::observe(observer);
    let matrix = render(&position, geometry);
    Frame {
        observer: *observer,
        position,
        matrix,
    }
}

/// `count` frames starting at `start`, each `step_hours` later than the last.
pub fn render_sequence(
    start: &ObserverState,
    step_hours: f64,
    count: usize,
    geometry: &CanvasGeometry,
) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(count);
    let mut observer = *start;
    for _ in 0..count {
        frames.push(render_observer(&observer, geometry));
        observer = observer.advance(step_hours);
    }
    frames
}
