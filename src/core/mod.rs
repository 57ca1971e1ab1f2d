pub mod errors;
mod gates;
mod state;
pub mod utils;

pub use gates::{Axis, Gate};
pub use state::{BlochVector, QuantumState};
