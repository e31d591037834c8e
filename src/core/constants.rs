//! Dashboard-wide defaults. Keeping them in one place makes the magic numbers
//! of the map card and the list panels easy to tweak.

use crate::core::geo::Point;

/// Center of the world framing shown when no region is selected.
pub const DEFAULT_CENTER: Point = Point::new(10.0, 10.0);

/// Zoom of the world framing. Nothing zooms out past this.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Lower bound for every viewport zoom.
pub const MIN_ZOOM: f64 = DEFAULT_ZOOM;

/// Zoom used when the map focuses a single region.
pub const REGION_FOCUS_ZOOM: f64 = 3.0;

/// Duration of a pan/zoom transition between regions.
pub const VIEWPORT_ANIMATION_MS: u64 = 1000;

/// Sampling interval of the animation frame sequence (~60 fps).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Floor for the visible loading state of the roster fetch.
pub const MIN_LOADING_MS: u64 = 1000;

/// Deals shown per page on a rep profile.
pub const PROFILE_DEALS_PER_PAGE: usize = 10;

/// Deals shown per page on the deal board.
pub const BOARD_DEALS_PER_PAGE: usize = 8;

/// Base URL of the sales API when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
