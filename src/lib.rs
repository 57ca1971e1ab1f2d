//! Single-qubit states on the Bloch sphere.
//!
//! A [`QuantumState`] keeps its amplitude pair and its Bloch angles in step
//! while [`Gate`]s are applied, and reports Cartesian [`BlochVector`]s for a
//! renderer to draw. [`RotationPath`] samples the trajectory of a single-axis
//! rotation.

mod core;
mod path;

pub use crate::core::{Axis, BlochVector, Gate, QuantumState, errors, utils};
pub use crate::path::RotationPath;
