pub mod chat;
pub mod clients;
pub mod dashboard;
pub mod deals;
pub mod notices;
pub mod profile;

pub use chat::{ChatMessage, ChatSession, Speaker};
pub use clients::{ClientDirectory, ClientEntry};
pub use dashboard::{Dashboard, DashboardEvent};
pub use deals::{DealBoard, DealRow, DealSortKey, SortDirection, StatusFilter};
pub use notices::{AssetKind, AssetNotices};
pub use profile::{ProfileLookup, ProfileSort, ProfileTab, RepProfile};
