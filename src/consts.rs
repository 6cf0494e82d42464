/// Standard date format used throughout the codebase: "2025-01-15"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format for completion timestamps
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Inclusive lower bound used by length checks when the caller gives none
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Inclusive upper bound used by length checks when the caller gives none
pub const DEFAULT_MAX_LENGTH: usize = 200;
