//! Compile-time tuning for the cue engine.

/// Lowest frequency the piezo reproduces usefully.
pub const MIN_FREQUENCY_HZ: u32 = 200;

/// Highest frequency the PWM timer can be retuned to.
pub const MAX_FREQUENCY_HZ: u32 = 20_000;

/// Maximum number of named cues in a catalog (must be a power of two).
pub const CATALOG_CAPACITY: usize = 32;

/// Number of playbacks kept in a player's history ring.
pub const HISTORY_CAPACITY: usize = 16;

/// Maximum length of a cue name kept in the history ring.
pub const CUE_NAME_MAX_LEN: usize = 24;

/// Extra wait after the last step of every cue.
pub const DEFAULT_POST_ROLL_MS: u32 = 0;
