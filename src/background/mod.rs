pub mod load_gate;

pub use load_gate::{AsyncLoadGate, LoadOutcome, LoadState};
