use crate::core::constants::{DEFAULT_CENTER, DEFAULT_ZOOM, MIN_ZOOM};
use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// The visible part of the map: a center coordinate and a zoom level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawViewport")]
pub struct Viewport {
    /// The center of the view in map coordinates
    pub center: Point,
    /// The current zoom level, never below `MIN_ZOOM`
    zoom: f64,
}

impl Viewport {
    /// Creates a new viewport, clamping the zoom to the world framing
    pub fn new(center: Point, zoom: f64) -> Self {
        Self {
            center,
            zoom: Self::clamp_zoom(zoom),
        }
    }

    /// The world framing shown when no region is selected
    pub fn world() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_ZOOM)
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the center of the viewport
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Sets the zoom level, clamping to the valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = Self::clamp_zoom(zoom);
    }

    /// True when both center and zoom are within `epsilon` of `other`
    pub fn approx_eq(&self, other: &Viewport, epsilon: f64) -> bool {
        self.center.distance_to(&other.center) <= epsilon && (self.zoom - other.zoom).abs() <= epsilon
    }

    fn clamp_zoom(zoom: f64) -> f64 {
        if zoom.is_nan() {
            MIN_ZOOM
        } else {
            zoom.max(MIN_ZOOM)
        }
    }
}

#[derive(Deserialize)]
struct RawViewport {
    center: Point,
    zoom: f64,
}

impl From<RawViewport> for Viewport {
    fn from(raw: RawViewport) -> Self {
        Viewport::new(raw.center, raw.zoom)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::world()
    }
}
