//! Crate error type.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FootprintError {
    /// `acos(R / (R + alt))` leaves its domain for altitudes below the
    /// surface; callers must feed `alt >= 0`.
    #[error("altitude {0} m is below the surface; no visibility cone exists")]
    AltitudeBelowSurface(f64),

    #[error("footprint ring needs at least 3 samples, got {0}")]
    RingTooSmall(usize),

    /// A convex visibility circle can meet the dateline at most twice
    /// (or once when it wraps a pole); more disconnects mean the ring is
    /// not a footprint ring.
    #[error("{0} dateline disconnects in one ring; a convex footprint produces at most 2")]
    TooManyDisconnects(usize),
}
