//! Visibility-footprint ring generation around a sub-satellite point.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::body::BodyShape;
use crate::error::FootprintError;
use crate::geo::{GeoPoint, SubSatellitePoint};
use crate::math::{cone_point, ecef_to_geo, footprint_rotation};

/// Boundary of the region visible from a satellite at `sub`, as `num_pts`
/// lat/lon samples swept counter-clockwise starting left of center. The
/// first and last samples coincide up to rounding (`dt = 2*pi/(num_pts-1)`).
///
/// The circle is built around the pole with half-cone angle
/// `acos(R/(R+alt))` and rotated onto the sub-satellite point, so the
/// visible area is treated as a perfect circle on a locally spherical
/// body. `alt_m = 0` degenerates to a zero-radius ring at the sub-point.
pub fn generate_ring(
    shape: &BodyShape,
    sub: SubSatellitePoint,
    num_pts: usize,
) -> Result<Vec<GeoPoint>, FootprintError> {
    if num_pts < 3 {
        return Err(FootprintError::RingTooSmall(num_pts));
    }
    // also rejects NaN altitudes
    if !(sub.alt_m >= 0.0) {
        return Err(FootprintError::AltitudeBelowSurface(sub.alt_m));
    }

    // the cone is built and rotated about the body center, so work in
    // geocentric latitude
    let lat = shape.geocentric_latitude(sub.lat);

    // half-cone angle of the visibility circle; R/(R+alt) <= 1 for
    // alt >= 0, so acos stays in domain
    let radius_at_lat = shape.radius_at_latitude(lat);
    let lambda0 = (radius_at_lat / (radius_at_lat + sub.alt_m)).acos();

    let m = footprint_rotation(lat, sub.lon);
    let dt = 2.0 * PI / (num_pts as f64 - 1.0);
    let r = shape.equatorial_radius_m;

    let mut ring = Vec::with_capacity(num_pts);
    for j in 0..num_pts {
        // pi/2 offset so the ring starts left of center
        let theta = j as f64 * dt + FRAC_PI_2;
        let pos = m * cone_point(theta, lambda0, r);
        ring.push(ecef_to_geo(&pos));
    }
    Ok(ring)
}
