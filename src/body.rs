//! Ellipsoid shape parameters for the body the footprint is cast on.
//!
//! Injected into the footprint math rather than hardcoded so the same
//! code runs against alternate bodies.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyShape {
    pub equatorial_radius_m: f64,
    pub polar_radius_m: f64,
}

impl BodyShape {
    pub const EARTH: BodyShape = BodyShape {
        equatorial_radius_m: 6_378_137.0,
        polar_radius_m: 6_356_752.3,
    };

    pub const MOON: BodyShape = BodyShape {
        equatorial_radius_m: 1_738_100.0,
        polar_radius_m: 1_736_000.0,
    };

    pub const MARS: BodyShape = BodyShape {
        equatorial_radius_m: 3_396_200.0,
        polar_radius_m: 3_376_200.0,
    };

    pub fn flattening(&self) -> f64 {
        (self.equatorial_radius_m - self.polar_radius_m) / self.equatorial_radius_m
    }

    /// Geocentric latitude for a geographic latitude. The footprint cone
    /// is built and rotated about the body center, which calls for
    /// geocentric angles.
    pub fn geocentric_latitude(&self, lat: f64) -> f64 {
        let ratio = self.polar_radius_m / self.equatorial_radius_m;
        (ratio * ratio * lat.tan()).atan()
    }

    /// Local radius by linear interpolation in sin(lat) between the
    /// equatorial and polar radii. An approximation, not the geodetic
    /// formula; kept for numerical parity with the tool this engine
    /// replicates.
    pub fn radius_at_latitude(&self, lat: f64) -> f64 {
        self.equatorial_radius_m - (self.equatorial_radius_m - self.polar_radius_m) * lat.sin()
    }
}
