use crate::{Axis, BlochVector, QuantumState, errors::StateError};
use std::f64::consts::PI;

/// Samples the trajectory of a state under a single-axis rotation.
///
/// The `RotationPath` produces the sequence of Bloch points a renderer draws
/// between a start state and its fully rotated image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationPath {
    /// Axis to rotate about.
    pub axis: Axis,
    /// Final rotation angle in radians.
    pub total_angle: f64,
    /// Number of samples, both endpoints included.
    pub steps: usize,
}

impl Default for RotationPath {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            total_angle: PI,
            steps: 100,
        }
    }
}

impl RotationPath {
    /// Creates a half turn about the x axis sampled at 100 points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rotation axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the final rotation angle in radians.
    pub fn with_total_angle(mut self, total_angle: f64) -> Self {
        self.total_angle = total_angle;
        self
    }

    /// Sets the number of samples.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Rotation angles evenly spaced over `[0, total_angle]`.
    pub fn angles(&self) -> Vec<f64> {
        match self.steps {
            0 => Vec::new(),
            1 => vec![0.0],
            n => {
                let step = self.total_angle / (n - 1) as f64;
                (0..n).map(|i| step * i as f64).collect()
            }
        }
    }

    /// Samples the path starting at `state`.
    ///
    /// Every sample rotates its own copy of `state` by the sample angle, so
    /// rotations never accumulate and `state` itself is left untouched.
    ///
    /// # Returns
    ///
    /// `steps` Bloch points, the first one at `state` and the last one at
    /// [`RotationPath::endpoint`], or `StateError::InvalidArgument` if
    /// `total_angle` is not finite.
    pub fn sample(&self, state: &QuantumState) -> Result<Vec<BlochVector>, StateError> {
        tracing::debug!(
            axis = %self.axis,
            total_angle = self.total_angle,
            steps = self.steps,
            "sampling rotation path"
        );

        self.angles()
            .into_iter()
            .map(|angle| state.clone().rotate(self.axis, angle))
            .collect()
    }

    /// Bloch point reached after the full rotation.
    pub fn endpoint(&self, state: &QuantumState) -> Result<BlochVector, StateError> {
        state.clone().rotate(self.axis, self.total_angle)
    }
}
