//! Characters used to draw the sky, the horizon bands, the sun and the time axis.

/// Sky gradient, indexed by distance from the sun.
pub const SKY: &[char] = &[
    ' ', '.', '·', ':', '+', '*', '✧', '✦', '★', '✵', '✸', '✹', '✺', '✷',
];

pub const HORIZON_VISIBLE: char = '═';
pub const HORIZON_CIVIL: char = '─';
pub const HORIZON_NAUTICAL: char = '·';
pub const HORIZON_ASTRONOMICAL: char = '.';

/// Sun above the horizon, one step per 15° of altitude.
pub const SUN_ABOVE: &[char] = &['◉', '☀', '●', '◕'];
/// Sun within 6° below the horizon, one step per 2°.
pub const SUN_HORIZON: &[char] = &['◐', '○', '◑'];
pub const SUN_CIVIL: char = '◔';
pub const SUN_NAUTICAL: char = '·';
pub const SUN_ASTRONOMICAL: char = '.';

pub const BLANK: char = ' ';
pub const AXIS_RULE: char = '─';
pub const AXIS_TICK: char = '┴';
pub const AXIS_END: char = '┘';
