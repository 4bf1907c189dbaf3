/// Smallest radius (inclusive) a spot can be drawn with.
pub const MIN_RADIUS: u32 = 40;

/// The exclusive radius bound is `floor(min(width, height) / RADIUS_DIVISOR)`.
pub const RADIUS_DIVISOR: f64 = 1.5;

/// Darkening strength range, in intensity units: `[MIN, MAX)`.
pub const MIN_STRENGTH: u32 = 90;
pub const MAX_STRENGTH: u32 = 120;

/// Attempts per image before it is reported as failed.
pub const DEFAULT_MAX_RETRIES: u32 = 5;
