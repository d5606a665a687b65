//! Equirectangular lat/lon <-> pixel transform with pan and zoom.

use serde::{Deserialize, Serialize};

/// Screen-space point. y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

/// View parameters for one draw pass: the map image centered inside a
/// total canvas, panned to (`center_lat`, `center_lon`) and zoomed so the
/// canvas spans `360/zoom_factor` degrees of longitude. Degrees and
/// pixels throughout. The core never mutates a view; treat it as a
/// read-only snapshot while drawing.
///
/// Precondition: `zoom_factor >= 1.0`. Not validated here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom_factor: f64,
    pub total_width: i32,
    pub total_height: i32,
    pub image_width: i32,
    pub image_height: i32,
}

impl MapView {
    pub fn new(total_width: i32, total_height: i32, image_width: i32, image_height: i32) -> Self {
        Self {
            center_lat: 0.0,
            center_lon: 0.0,
            zoom_factor: 1.0,
            total_width,
            total_height,
            image_width,
            image_height,
        }
    }

    /// Copy of this view recentered on the given point, e.g. after a map
    /// click resolved through [`MapView::unproject`].
    pub fn centered_on(mut self, lat_deg: f64, lon_deg: f64) -> Self {
        self.center_lat = lat_deg;
        self.center_lon = lon_deg;
        self
    }

    /// Copy of this view with the zoom multiplied by `factor`, floored at
    /// the unzoomed whole-map view.
    pub fn zoomed(mut self, factor: f64) -> Self {
        self.zoom_factor = (self.zoom_factor * factor).max(1.0);
        self
    }

    // image frame inside the canvas: (left_x, right_x, top_y, bot_y)
    fn frame(&self) -> (i32, i32, i32, i32) {
        let mid_x = self.total_width / 2;
        let mid_y = self.total_height / 2;
        (
            mid_x - self.image_width / 2,
            mid_x + self.image_width / 2,
            mid_y - self.image_height / 2,
            mid_y + self.image_height / 2,
        )
    }

    /// Pixel position of a lat/lon point under the current pan/zoom.
    /// Higher latitudes map to smaller y.
    pub fn project(&self, lat_deg: f64, lon_deg: f64) -> PixelPoint {
        let long_span = 360.0 / self.zoom_factor;
        let lat_span = 180.0 / self.zoom_factor;
        let (left_x, right_x, top_y, bot_y) = self.frame();

        let x = ((right_x - left_x) as f64 / long_span) * (lon_deg - self.center_lon)
            + (right_x + left_x) as f64 / 2.0;
        let y = ((top_y - bot_y) as f64 / lat_span) * (lat_deg - self.center_lat)
            + (top_y + bot_y) as f64 / 2.0;

        PixelPoint {
            x: x as i32,
            y: y as i32,
        }
    }

    /// Inverse of [`MapView::project`], for resolving clicks back to
    /// geography. Returns `(lat_deg, lon_deg)` clamped to the valid
    /// ranges.
    pub fn unproject(&self, x: i32, y: i32) -> (f64, f64) {
        let long_span = 360.0 / self.zoom_factor;
        let lat_span = 180.0 / self.zoom_factor;
        let (left_x, right_x, top_y, bot_y) = self.frame();

        let lon = (x as f64 - (right_x + left_x) as f64 / 2.0)
            / ((right_x - left_x) as f64 / long_span)
            + self.center_lon;
        let lat = (y as f64 - (top_y + bot_y) as f64 / 2.0)
            / ((top_y - bot_y) as f64 / lat_span)
            + self.center_lat;

        (lat.clamp(-90.0, 90.0), lon.clamp(-180.0, 180.0))
    }

    /// Projected endpoints of the lat/lon grid lines at `step_deg`
    /// spacing, for drawing a graticule over the map.
    ///
    /// Panics if `step_deg` is not positive.
    pub fn graticule(&self, step_deg: i32) -> Vec<[PixelPoint; 2]> {
        assert!(step_deg > 0, "graticule step must be positive");
        let mut lines = Vec::new();
        let mut lat = -90;
        while lat <= 90 {
            lines.push([
                self.project(lat as f64, -180.0),
                self.project(lat as f64, 180.0),
            ]);
            lat += step_deg;
        }
        let mut lon = -180;
        while lon <= 180 {
            lines.push([
                self.project(90.0, lon as f64),
                self.project(-90.0, lon as f64),
            ]);
            lon += step_deg;
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whole_map() -> MapView {
        MapView::new(1440, 720, 1440, 720)
    }

    #[test]
    fn project_centers_origin() {
        let view = whole_map();
        let p = view.project(0.0, 0.0);
        assert_eq!(p, PixelPoint { x: 720, y: 360 });
    }

    #[test]
    fn y_axis_is_inverted() {
        let view = whole_map();
        let north = view.project(60.0, 0.0);
        let south = view.project(-60.0, 0.0);
        assert!(north.y < south.y);
    }

    #[test]
    fn roundtrip_within_pixel_quantization() {
        let view = whole_map();
        // 4 px per degree, so truncation costs at most 0.25 deg
        let mut lat = -89.0;
        while lat <= 89.0 {
            let mut lon = -179.0;
            while lon < 180.0 {
                let p = view.project(lat, lon);
                let (lat2, lon2) = view.unproject(p.x, p.y);
                assert!((lat2 - lat).abs() < 0.5, "lat {} -> {}", lat, lat2);
                assert!((lon2 - lon).abs() < 0.5, "lon {} -> {}", lon, lon2);
                lon += 17.0;
            }
            lat += 11.0;
        }
    }

    #[test]
    fn zoom_increases_pixel_density() {
        let base = whole_map();
        let zoomed = base.zoomed(2.0);
        let dx_base = (base.project(0.0, 10.0).x - base.project(0.0, 0.0).x).abs();
        let dx_zoom = (zoomed.project(0.0, 10.0).x - zoomed.project(0.0, 0.0).x).abs();
        assert!(dx_zoom > dx_base);

        let dy_base = (base.project(10.0, 0.0).y - base.project(0.0, 0.0).y).abs();
        let dy_zoom = (zoomed.project(10.0, 0.0).y - zoomed.project(0.0, 0.0).y).abs();
        assert!(dy_zoom > dy_base);
    }

    #[test]
    fn zoom_floors_at_one() {
        let view = whole_map().zoomed(0.25);
        assert_eq!(view.zoom_factor, 1.0);
    }

    #[test]
    fn unproject_clamps_out_of_range() {
        let view = whole_map();
        let (lat, lon) = view.unproject(-10_000, -10_000);
        assert_eq!(lat, 90.0);
        assert_eq!(lon, -180.0);
    }

    #[test]
    fn graticule_line_count_and_alignment() {
        let view = whole_map();
        let lines = view.graticule(30);
        // 7 latitude lines + 13 longitude lines
        assert_eq!(lines.len(), 20);
        // latitude lines run horizontally
        for line in &lines[..7] {
            assert_eq!(line[0].y, line[1].y);
        }
    }

    #[test]
    #[should_panic(expected = "graticule step must be positive")]
    fn graticule_rejects_a_zero_step() {
        whole_map().graticule(0);
    }

    #[test]
    fn view_roundtrips_through_json() {
        let view = whole_map().centered_on(10.0, -45.0).zoomed(4.0);
        let json = serde_json::to_string(&view).unwrap();
        let back: MapView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
