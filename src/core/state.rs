use crate::core::errors::StateError;
use crate::core::gates::{Axis, Gate};
use crate::core::utils;
use ndarray::Array1;
use num_complex::Complex64;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

/// Cartesian point on (or, for out-of-contract gates, near) the Bloch sphere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Point for polar angle `theta` and azimuth `phi`.
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        Self {
            x: theta.sin() * phi.cos(),
            y: theta.sin() * phi.sin(),
            z: theta.cos(),
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Largest per-component difference to `other`.
    pub fn max_abs_diff(&self, other: &BlochVector) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }
}

impl From<BlochVector> for [f64; 3] {
    fn from(v: BlochVector) -> Self {
        v.to_array()
    }
}

/// A pure single-qubit state.
///
/// Holds the amplitude pair `(α, β)` together with the Bloch angles `(θ, φ)`
/// describing the same point. Both are updated together by
/// [`QuantumState::apply_gate`], the only mutating operation.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantumState {
    vector: Array1<Complex64>,
    theta: f64,
    phi: f64,
}

impl QuantumState {
    /// Creates a state from Bloch angles in radians.
    ///
    /// # Errors
    ///
    /// Returns `StateError::InvalidArgument` if either angle is NaN or infinite.
    pub fn new(theta: f64, phi: f64) -> Result<Self, StateError> {
        check_angle("theta", theta)?;
        check_angle("phi", phi)?;

        let mut vector = utils::angles_to_vector(theta, phi);
        utils::normalize(&mut vector)?;

        Ok(Self { vector, theta, phi })
    }

    /// Creates a state from Bloch angles in degrees.
    pub fn from_degrees(theta: f64, phi: f64) -> Result<Self, StateError> {
        Self::new(theta.to_radians(), phi.to_radians())
    }

    /// Builds a state from angles known to be finite.
    fn basis(theta: f64, phi: f64) -> Self {
        Self {
            vector: utils::angles_to_vector(theta, phi),
            theta,
            phi,
        }
    }

    /// |0⟩, the north pole.
    pub fn zero() -> Self {
        Self::basis(0.0, 0.0)
    }

    /// |1⟩, the south pole.
    pub fn one() -> Self {
        Self::basis(PI, 0.0)
    }

    /// |+⟩, on the +x axis.
    pub fn plus() -> Self {
        Self::basis(FRAC_PI_2, 0.0)
    }

    /// |−⟩, on the −x axis.
    pub fn minus() -> Self {
        Self::basis(FRAC_PI_2, PI)
    }

    /// |+i⟩, on the +y axis.
    pub fn plus_i() -> Self {
        Self::basis(FRAC_PI_2, FRAC_PI_2)
    }

    /// |−i⟩, on the −y axis.
    pub fn minus_i() -> Self {
        Self::basis(FRAC_PI_2, 3.0 * FRAC_PI_2)
    }

    /// Stored polar angle.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Stored azimuthal angle.
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// The amplitude pair `(α, β)`.
    pub fn vector(&self) -> &Array1<Complex64> {
        &self.vector
    }

    pub fn norm(&self) -> f64 {
        utils::norm(&self.vector)
    }

    /// Recomputes `(θ, φ)` from the amplitude pair.
    ///
    /// `φ` is reported as 0 at either pole.
    pub fn angles(&self) -> (f64, f64) {
        utils::vector_to_angles(&self.vector)
    }

    /// Rescales the amplitude pair to unit norm and refreshes the stored angles.
    ///
    /// Only needed after applying a gate built with [`Gate::new_unchecked`].
    ///
    /// # Errors
    ///
    /// Returns `StateError::DegenerateState` if the vector is zero.
    pub fn normalize(&mut self) -> Result<(), StateError> {
        utils::normalize(&mut self.vector)?;
        (self.theta, self.phi) = utils::vector_to_angles(&self.vector);
        Ok(())
    }

    /// Left-multiplies the state by `gate` and refreshes the stored angles.
    ///
    /// No renormalization happens here; gates built by [`Gate::new`] and the
    /// standard constructors preserve the norm.
    pub fn apply_gate(&mut self, gate: &Gate) {
        // Gate constructors guarantee a 2x2 matrix
        self.vector = gate.matrix().dot(&self.vector);
        (self.theta, self.phi) = utils::vector_to_angles(&self.vector);

        tracing::trace!(theta = self.theta, phi = self.phi, "applied gate");
    }

    /// Rotates by `angle` radians about `axis` and returns the new Bloch point.
    ///
    /// # Errors
    ///
    /// Returns `StateError::InvalidArgument` if `angle` is NaN or infinite; the
    /// state is left unchanged.
    pub fn rotate(&mut self, axis: Axis, angle: f64) -> Result<BlochVector, StateError> {
        check_angle("angle", angle)?;
        self.apply_gate(&Gate::rotation(axis, angle));
        Ok(self.bloch_coordinates())
    }

    pub fn rotate_x(&mut self, angle: f64) -> Result<BlochVector, StateError> {
        self.rotate(Axis::X, angle)
    }

    pub fn rotate_y(&mut self, angle: f64) -> Result<BlochVector, StateError> {
        self.rotate(Axis::Y, angle)
    }

    pub fn rotate_z(&mut self, angle: f64) -> Result<BlochVector, StateError> {
        self.rotate(Axis::Z, angle)
    }

    /// Cartesian Bloch coordinates taken from the stored angles.
    pub fn bloch_coordinates(&self) -> BlochVector {
        BlochVector::from_angles(self.theta, self.phi)
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuantumState(vector=[{}, {}], theta={}, phi={})",
            self.vector[0], self.vector[1], self.theta, self.phi
        )
    }
}

fn check_angle(name: &'static str, value: f64) -> Result<(), StateError> {
    if !value.is_finite() {
        return Err(StateError::InvalidArgument { name, value });
    }
    Ok(())
}
