//! Ground-track polyline assembly across dateline jumps and data gaps.

use crate::dateline::{boundary_latitude, is_discontinuity};
use crate::geo::GeoPoint;
use crate::projection::{MapView, PixelPoint};

/// Accumulates projected ground-track samples (lead or lag) into drawable
/// polylines, splitting at each dateline jump. A NaN latitude marks a
/// "not in time range" sample; it suppresses the append on both sides of
/// the gap without flushing the current polyline, so the sample right
/// after a gap only reseeds the comparison point.
pub struct TrackAssembler<'a> {
    view: &'a MapView,
    prev: Option<GeoPoint>,
    buffer: Vec<PixelPoint>,
    segments: Vec<Vec<PixelPoint>>,
}

impl<'a> TrackAssembler<'a> {
    pub fn new(view: &'a MapView) -> Self {
        Self {
            view,
            prev: None,
            buffer: Vec::new(),
            segments: Vec::new(),
        }
    }

    pub fn push(&mut self, point: GeoPoint) {
        let xy = self.view.project(point.lat_deg(), point.lon_deg());

        match self.prev {
            None => {
                if !point.lat.is_nan() {
                    self.buffer.push(xy);
                }
            }
            // a NaN on either side of the pair suppresses both the
            // append and the discontinuity test; the gap only reseeds
            // the comparison point
            Some(prev) if point.lat.is_nan() || prev.lat.is_nan() => {}
            Some(prev) => {
                if !is_discontinuity(prev.lon, point.lon) {
                    self.buffer.push(xy);
                } else {
                    let lat_deg =
                        boundary_latitude(prev.lat, prev.lon, point.lat, point.lon).to_degrees();
                    let at_pos = self.view.project(lat_deg, 180.0);
                    let at_neg = self.view.project(lat_deg, -180.0);

                    // close out the current side, restart on the other
                    if prev.lon > 0.0 {
                        self.buffer.push(at_pos);
                        self.flush();
                        self.buffer.push(at_neg);
                    } else {
                        self.buffer.push(at_neg);
                        self.flush();
                        self.buffer.push(at_pos);
                    }
                    self.buffer.push(xy);
                }
            }
        }

        self.prev = Some(point);
    }

    fn flush(&mut self) {
        if self.buffer.len() >= 2 {
            self.segments.push(std::mem::take(&mut self.buffer));
        } else {
            self.buffer.clear();
        }
    }

    pub fn finish(mut self) -> Vec<Vec<PixelPoint>> {
        self.flush();
        self.segments
    }
}

/// One-shot assembly of a whole lead/lag slice.
pub fn assemble(points: &[GeoPoint], view: &MapView) -> Vec<Vec<PixelPoint>> {
    let mut assembler = TrackAssembler::new(view);
    for &p in points {
        assembler.push(p);
    }
    assembler.finish()
}
