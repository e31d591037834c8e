pub mod api;
pub mod identity;
pub mod model;

pub use api::{HttpSalesApi, SalesApi};
pub use identity::{decode_rep_id, encode_rep_id};
pub use model::{Client, Deal, DealStatus, SalesRep, StatusTotals};
