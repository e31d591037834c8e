//! # repmap
//!
//! Region-navigation and view-synchronization engine for a sales-rep map
//! dashboard.
//!
//! The crate keeps an animated map viewport, the region markers, the
//! grouped/carousel rep list and the search filter consistent with a single
//! selection state, and gates remote fetches so that loading, error and empty
//! states never race each other.

pub mod animation;
pub mod background;
pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod selection;
pub mod session;
pub mod views;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{DashboardConfig, DashboardProfile},
    geo::Point,
    projector::{GeoProjector, ViewTarget},
    region::Region,
    viewport::Viewport,
};

pub use animation::animator::{Animation, Frames, ViewportAnimator};

pub use layers::marker::{Marker, MarkerAggregator};

pub use selection::{
    controller::{Selection, SelectionChange, SelectionController, SelectionState},
    navigator::{Carousel, ListNavigator, ListView, RegionGroup},
};

pub use background::load_gate::{AsyncLoadGate, LoadOutcome, LoadState};

pub use data::{
    api::{HttpSalesApi, SalesApi},
    identity::{decode_rep_id, encode_rep_id},
    model::{Client, Deal, DealStatus, SalesRep},
};

pub use session::SessionStore;

pub use views::{
    chat::ChatSession, clients::ClientDirectory, dashboard::Dashboard, deals::DealBoard,
    profile::RepProfile,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum RepmapError {
    /// The request never produced a usable HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// The server reported `success: false`
    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Malformed identity token: {0}")]
    MalformedIdentity(String),

    #[error("Sales rep {0} not found")]
    RepNotFound(u64),

    #[error("Question is required")]
    EmptyQuestion,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for RepmapError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RepmapError::Status {
                status: status.as_u16(),
            },
            None => RepmapError::Network(err.to_string()),
        }
    }
}

impl RepmapError {
    /// Remote failures that should surface as the "could not load" banner
    pub fn is_network_failure(&self) -> bool {
        matches!(
            self,
            RepmapError::Network(_) | RepmapError::Status { .. } | RepmapError::Rejected(_)
        )
    }
}

/// Error type alias for convenience
pub type Error = RepmapError;

/// Initializes `env_logger` from `RUST_LOG`; later calls are ignored.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
