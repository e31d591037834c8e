pub mod controller;
pub mod navigator;
pub mod pager;

pub use controller::{Selection, SelectionChange, SelectionController, SelectionState};
pub use navigator::{Carousel, ListNavigator, ListView, RegionGroup, Step};
pub use pager::Pager;
