//! Detection of antimeridian jumps in lat/lon sequences.

use std::f64::consts::{PI, TAU};

/// Jump threshold between consecutive longitudes, in radians.
///
/// A genuine dateline crossing shows up as a jump near 2*pi; anything at
/// or past this constant is treated as one. This is a coarse heuristic
/// rather than a wrap test: angular motion faster than the threshold per
/// sample would trigger it too. The constant is kept as-is for parity
/// with the tool this engine replicates.
pub const DISCONTINUITY_THRESHOLD: f64 = 4.0;

/// True when the step from `lon_prev` to `lon_cur` (radians) spans the
/// map disconnect.
pub fn is_discontinuity(lon_prev: f64, lon_cur: f64) -> bool {
    (lon_cur - lon_prev).abs() >= DISCONTINUITY_THRESHOLD
}

/// Latitude (radians) where the segment between two samples meets
/// lon = +/-180 deg, by linear interpolation after moving both longitudes
/// onto the same positive branch. Close enough over one sample step; not
/// a great-circle intersection.
pub fn boundary_latitude(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (mut lon1, mut lon2) = (lon1, lon2);
    if lon1 > lon2 {
        lon2 += TAU;
    } else {
        lon1 += TAU;
    }
    lat1 + (PI - lon1) * (lat2 - lat1) / (lon2 - lon1)
}
