//! Splitting footprint rings into correctly wound fill polygons.
//!
//! A projected footprint ring is a single closed loop until it meets the
//! map edges: one dateline disconnect means the circle wraps a pole, two
//! mean it spans the dateline. Both cases need synthesized edge vertices
//! to keep the fill on the right side of the map.

use crate::dateline::{boundary_latitude, is_discontinuity};
use crate::error::FootprintError;
use crate::geo::GeoPoint;
use crate::projection::{MapView, PixelPoint};

struct Disconnect {
    /// Ring index of the first sample past the jump.
    index: usize,
    /// Corrected boundary point on the +180 deg side.
    at_pos: PixelPoint,
    /// Corrected boundary point on the -180 deg side.
    at_neg: PixelPoint,
}

/// Projects a footprint ring and mends its dateline/pole discontinuities,
/// returning one or two closed fill polygons (closure back to the first
/// vertex is implicit).
///
/// `sub_lat` is the sub-satellite latitude in radians; its sign picks the
/// hemisphere for the pole-wrapping case. More than two disconnects
/// cannot happen for a convex visibility circle and is reported as an
/// invariant violation rather than dropped.
pub fn repair(
    ring: &[GeoPoint],
    sub_lat: f64,
    view: &MapView,
) -> Result<Vec<Vec<PixelPoint>>, FootprintError> {
    let mut pts: Vec<PixelPoint> = Vec::with_capacity(ring.len());
    let mut disconnects: Vec<Disconnect> = Vec::new();

    for (j, p) in ring.iter().enumerate() {
        if j > 0 {
            let prev = ring[j - 1];
            if is_discontinuity(prev.lon, p.lon) {
                let lat_deg = boundary_latitude(prev.lat, prev.lon, p.lat, p.lon).to_degrees();
                log::trace!("footprint disconnect {} at ring index {}", disconnects.len() + 1, j);
                disconnects.push(Disconnect {
                    index: j,
                    at_pos: view.project(lat_deg, 180.0),
                    at_neg: view.project(lat_deg, -180.0),
                });
            }
        }
        pts.push(view.project(p.lat_deg(), p.lon_deg()));
    }

    match disconnects.as_slice() {
        [] => Ok(vec![pts]),
        [d] => Ok(vec![wrap_pole(&pts, d, sub_lat > 0.0, view)]),
        [d1, d2] => Ok(split_at_dateline(&pts, d1, d2)),
        more => Err(FootprintError::TooManyDisconnects(more.len())),
    }
}

/// The circle encloses a pole: one polygon that walks the ring up to the
/// disconnect, detours along the top (or bottom) map edge through the two
/// polar corner points, and continues the ring.
fn wrap_pole(pts: &[PixelPoint], d: &Disconnect, north: bool, view: &MapView) -> Vec<PixelPoint> {
    let pole_lat = if north { 90.0 } else { -90.0 };
    let corner_pos = view.project(pole_lat, 180.0);
    let corner_neg = view.project(pole_lat, -180.0);

    let mut out = Vec::with_capacity(pts.len() + 4);
    out.extend_from_slice(&pts[..d.index]);
    if north {
        out.push(d.at_pos);
        out.push(corner_pos);
        out.push(corner_neg);
        out.push(d.at_neg);
    } else {
        out.push(d.at_neg);
        out.push(corner_neg);
        out.push(corner_pos);
        out.push(d.at_pos);
    }
    out.extend_from_slice(&pts[d.index..]);
    out
}

/// The circle spans the dateline without enclosing a pole: split the ring
/// into a west (-180 edge) and an east (+180 edge) polygon at the two
/// disconnects.
fn split_at_dateline(
    pts: &[PixelPoint],
    d1: &Disconnect,
    d2: &Disconnect,
) -> Vec<Vec<PixelPoint>> {
    // pixel y grows downward; the vertical order of the two corrected
    // west-edge points decides which walk keeps the winding correct
    if d1.at_neg.y >= d2.at_neg.y {
        let mut west = Vec::with_capacity(d2.index - d1.index + 2);
        west.push(d1.at_neg);
        west.extend_from_slice(&pts[d1.index..d2.index]);
        west.push(d2.at_neg);

        let mut east = Vec::with_capacity(pts.len() - (d2.index - d1.index) + 2);
        east.extend_from_slice(&pts[..d1.index]);
        east.push(d1.at_pos);
        east.push(d2.at_pos);
        east.extend_from_slice(&pts[d2.index..]);

        vec![west, east]
    } else {
        // first disconnect sits above the second: the ring starts on the
        // west side, so the outer walk belongs to the west polygon
        let mut west = Vec::with_capacity(pts.len() - (d2.index - d1.index) + 2);
        west.extend_from_slice(&pts[..d1.index]);
        west.push(d1.at_neg);
        west.push(d2.at_neg);
        west.extend_from_slice(&pts[d2.index..]);

        let mut east = Vec::with_capacity(d2.index - d1.index + 2);
        east.push(d1.at_pos);
        east.extend_from_slice(&pts[d1.index..d2.index]);
        east.push(d2.at_pos);

        vec![west, east]
    }
}
