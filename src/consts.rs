use std::ops::RangeInclusive;

/// Number of physical key slots in a layout string.
pub const LAYOUT_LEN: usize = 45;

/// Slot order of every layout string, and the default base template.
pub const QWERTY_BASE: &str = "1234567890-=qwertyuiop[]asdfghjkl;'zxcvbnm,./";

/// Columns per row of the grid used for finger-travel distance.
/// Slots are laid out row-major, so row = slot / 13 and col = slot % 13.
pub const GRID_COLUMNS: usize = 13;

/// Slots treated as the home row (`asdfghjkl;'` in QWERTY order).
pub const HOME_ROW_SLOTS: RangeInclusive<usize> = 24..=34;

/// Value used in position maps for "character not on this layout".
pub const POS_NOT_FOUND: u8 = 255;

/// Standard word length used by every WPM figure.
pub const CHARS_PER_WORD: f64 = 5.0;

/// Individuals sampled per tournament.
pub const TOURNAMENT_SIZE: usize = 3;

/// Generations between progress reports.
pub const PROGRESS_INTERVAL: usize = 5;
