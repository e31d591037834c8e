//! Prelude module for common repmap types and traits
//!
//! `use repmap::prelude::*;` brings in the dashboard, its building blocks and
//! the hash collections used across the crate.

pub use crate::core::{
    config::{AnimationConfig, DashboardConfig, DashboardProfile, LoadingConfig, PaginationConfig},
    geo::Point,
    projector::{GeoProjector, ViewTarget},
    region::Region,
    viewport::Viewport,
};

pub use crate::animation::{
    animator::{Animation, Frames, ViewportAnimator},
    interpolation::{Interpolatable, Interpolation},
};

pub use crate::layers::marker::{Marker, MarkerAggregator};

pub use crate::selection::{
    controller::{Selection, SelectionChange, SelectionController, SelectionState},
    navigator::{Carousel, ListNavigator, ListView, RegionGroup, Step},
    pager::Pager,
};

pub use crate::background::load_gate::{AsyncLoadGate, LoadOutcome, LoadState};

pub use crate::data::{
    api::{HttpSalesApi, SalesApi},
    identity::{decode_rep_id, encode_rep_id},
    model::{Client, Deal, DealStatus, SalesRep, StatusTotals},
};

pub use crate::session::SessionStore;

pub use crate::views::{
    chat::{ChatMessage, ChatSession, Speaker},
    clients::{ClientDirectory, ClientEntry},
    dashboard::{Dashboard, DashboardEvent},
    deals::{DealBoard, DealRow, DealSortKey, SortDirection, StatusFilter},
    notices::{AssetKind, AssetNotices},
    profile::{ProfileLookup, ProfileSort, ProfileTab, RepProfile},
};

pub use crate::{Error as RepmapError, Result};

pub use std::{sync::Arc, time::Duration};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

pub use futures::Future;
