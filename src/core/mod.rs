pub mod config;
pub mod constants;
pub mod geo;
pub mod projector;
pub mod region;
pub mod viewport;

pub use config::{DashboardConfig, DashboardProfile};
pub use geo::Point;
pub use projector::{GeoProjector, ViewTarget};
pub use region::Region;
pub use viewport::Viewport;
