//! Duration rounding shared by catalog durations and event lengths.

/// Round a fractional-second measurement up to whole seconds.
///
/// Durations are always ceiled, never truncated, so a play can never be
/// reported shorter than it was. Catalog durations and event lengths must go
/// through the same rounding or the songplay lookup would never match.
pub fn ceil_seconds(seconds: f64) -> i64 {
    seconds.ceil() as i64
}
