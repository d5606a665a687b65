//! Core geographic types shared across the crate.

/// A point on the body surface. Latitude and longitude in radians;
/// longitude normalized to (-pi, pi].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            lat: lat_deg.to_radians(),
            lon: lon_deg.to_radians(),
        }
    }

    pub fn lat_deg(&self) -> f64 {
        self.lat.to_degrees()
    }

    pub fn lon_deg(&self) -> f64 {
        self.lon.to_degrees()
    }
}

/// Point directly beneath a satellite, plus its altitude above the
/// surface in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubSatellitePoint {
    pub lat: f64,
    pub lon: f64,
    pub alt_m: f64,
}

impl SubSatellitePoint {
    pub fn new(lat: f64, lon: f64, alt_m: f64) -> Self {
        Self { lat, lon, alt_m }
    }
}
