//! Region → viewport lookup used by the map card.

use crate::core::{
    constants::REGION_FOCUS_ZOOM, geo::Point, region::Region, viewport::Viewport,
};

/// Where the map should look next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTarget<'a> {
    /// Focus a region by its display name
    Region(&'a str),
    /// Return to the world framing
    Reset,
}

/// Maps region names to target viewports. Pure and deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoProjector {
    home: Viewport,
    focus_zoom: f64,
}

impl GeoProjector {
    pub fn new(home: Viewport, focus_zoom: f64) -> Self {
        Self { home, focus_zoom }
    }

    /// Target viewport for `target`; `None` for a region outside the enumeration,
    /// in which case the map must stay where it is.
    pub fn project(&self, target: ViewTarget<'_>) -> Option<Viewport> {
        match target {
            ViewTarget::Reset => Some(self.home),
            ViewTarget::Region(name) => self
                .coordinate(name)
                .map(|center| Viewport::new(center, self.focus_zoom)),
        }
    }

    /// Canonical coordinate of a region name
    pub fn coordinate(&self, region: &str) -> Option<Point> {
        Region::from_name(region).map(|r| r.coordinate())
    }

    pub fn home(&self) -> Viewport {
        self.home
    }

    pub fn focus_zoom(&self) -> f64 {
        self.focus_zoom
    }
}

impl Default for GeoProjector {
    fn default() -> Self {
        Self::new(Viewport::world(), REGION_FOCUS_ZOOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_known_region() {
        let projector = GeoProjector::default();
        let viewport = projector.project(ViewTarget::Region("Europe")).unwrap();
        assert_eq!(viewport.center, Point::new(10.0, 50.0));
        assert_eq!(viewport.zoom(), 3.0);
    }

    #[test]
    fn test_project_reset() {
        let projector = GeoProjector::default();
        let viewport = projector.project(ViewTarget::Reset).unwrap();
        assert_eq!(viewport, Viewport::new(Point::new(10.0, 10.0), 1.0));
    }

    #[test]
    fn test_project_unknown_region() {
        let projector = GeoProjector::default();
        assert!(projector.project(ViewTarget::Region("Atlantis")).is_none());
        assert!(projector.coordinate("Atlantis").is_none());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let projector = GeoProjector::default();
        let a = projector.project(ViewTarget::Region("Middle East"));
        let b = projector.project(ViewTarget::Region("Middle East"));
        assert_eq!(a, b);
    }
}
