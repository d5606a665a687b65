//! Satellite ground-track and footprint projection for 2D world maps.
//!
//! Turns streams of sub-satellite (lat, lon, alt) samples into pixel-space
//! polylines and fill polygons under a pannable, zoomable equirectangular
//! projection: visibility-circle rings around the sub-satellite point,
//! ground-track segmentation at the antimeridian, and polygon repair for
//! footprints that span the dateline or wrap a pole.
//!
//! The crate draws nothing itself and owns no event loop; callers feed it
//! position samples plus a [`MapView`] snapshot per draw pass and hand the
//! emitted polylines and polygons to whatever renders them. Every
//! transform is a pure function of its inputs, so independent satellites
//! can be processed concurrently without coordination.

pub mod body;
pub mod dateline;
pub mod error;
pub mod footprint;
pub mod geo;
pub mod math;
pub mod polygon;
pub mod projection;
pub mod track;

pub use body::BodyShape;
pub use error::FootprintError;
pub use footprint::generate_ring;
pub use geo::{GeoPoint, SubSatellitePoint};
pub use polygon::repair;
pub use projection::{MapView, PixelPoint};
pub use track::{assemble, TrackAssembler};
