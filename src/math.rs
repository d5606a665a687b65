//! Rotation and ECEF coordinate transformations for footprint rings.

use nalgebra::{Matrix3, Vector3};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::geo::GeoPoint;

/// Rotation that carries a circle built around the north pole onto the
/// sub-satellite point: pitch `beta = 90deg - lat`, yaw `gamma = 180deg - lon`.
pub fn footprint_rotation(lat: f64, lon: f64) -> Matrix3<f64> {
    let beta = FRAC_PI_2 - lat;
    let gamma = PI - lon;
    let (sb, cb) = beta.sin_cos();
    let (sg, cg) = gamma.sin_cos();
    Matrix3::new(
        cb * cg, sg, -sb * cg,
        -cb * sg, cg, sb * sg,
        sb, 0.0, cb,
    )
}

/// Point on the visibility cone before rotation: parametric sphere point
/// at azimuth `theta` around the polar axis, half-cone angle `phi`,
/// radius `r`.
pub fn cone_point(theta: f64, phi: f64, r: f64) -> Vector3<f64> {
    Vector3::new(
        r * theta.cos() * phi.sin(),
        r * theta.sin() * phi.sin(),
        r * phi.cos(),
    )
}

/// Fast spherical ECEF -> lat/lon inverse. Ignores flattening, matching
/// the spherical cone construction that feeds it.
pub fn ecef_to_geo(pos: &Vector3<f64>) -> GeoPoint {
    let lat = pos.z.atan2((pos.x * pos.x + pos.y * pos.y).sqrt());
    let lon = pos.y.atan2(pos.x);
    GeoPoint::new(lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rotation_moves_pole_to_sub_point() {
        let lat = 0.61;
        let lon = -1.3;
        let m = footprint_rotation(lat, lon);
        // circle center = pole direction before rotation
        let center = m * Vector3::new(0.0, 0.0, 1.0);
        let geo = ecef_to_geo(&center);
        assert_relative_eq!(geo.lat, lat, epsilon = 1e-12);
        assert_relative_eq!(geo.lon, lon, epsilon = 1e-12);
    }

    #[test]
    fn rotation_is_orthonormal() {
        let m = footprint_rotation(0.3, 2.0);
        let id = m * m.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(id[(i, j)], expect, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn ecef_inverse_recovers_known_directions() {
        let geo = ecef_to_geo(&Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(geo.lat, 0.0);
        assert_relative_eq!(geo.lon, 0.0);

        let geo = ecef_to_geo(&Vector3::new(0.0, 0.0, 5.0));
        assert_relative_eq!(geo.lat, FRAC_PI_2);
    }
}
