//! Numeric helpers shared by the state and gate code.
//!
//! This module contains:
//! - Conversions between Bloch angles and the amplitude pair.
//! - Vector normalization.
//! - Phase wrapping into `[0, 2π)`.

use crate::core::errors::StateError;
use ndarray::{Array1, array};
use num_complex::Complex64;
use std::f64::consts::TAU;

/// Below this magnitude `sin(θ/2)` or `cos(θ/2)` is treated as zero and the
/// state as a pole.
pub const POLE_TOLERANCE: f64 = 1e-12;

/// Builds the amplitude pair for Bloch angles.
///
/// $\alpha = \cos(\theta/2)$, $\beta = \sin(\theta/2) e^{i\phi}$.
pub fn angles_to_vector(theta: f64, phi: f64) -> Array1<Complex64> {
    let a = (theta / 2.0).cos();
    let b = (theta / 2.0).sin() * Complex64::new(phi.cos(), phi.sin());
    array![Complex64::new(a, 0.0), b]
}

/// Recovers `(θ, φ)` from an amplitude pair.
///
/// The relative phase is unobservable at either pole, so `φ` is pinned to 0
/// there. The arccos argument is clamped to absorb rounding overshoot.
pub fn vector_to_angles(vector: &Array1<Complex64>) -> (f64, f64) {
    let (alpha, beta) = (vector[0], vector[1]);

    let a_abs = alpha.norm();
    let theta = 2.0 * a_abs.clamp(-1.0, 1.0).acos();

    let sin_half = (theta / 2.0).sin();
    if sin_half.abs() < POLE_TOLERANCE || a_abs < POLE_TOLERANCE {
        return (theta, 0.0);
    }

    (theta, wrap_phase(beta.arg() - alpha.arg()))
}

/// Euclidean norm of a complex vector, $\sqrt{\sum |c_i|^2}$.
pub fn norm(vector: &Array1<Complex64>) -> f64 {
    vector.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
}

/// Scales `vector` to unit norm in place.
///
/// # Errors
///
/// Returns `StateError::DegenerateState` if the norm is exactly zero.
pub fn normalize(vector: &mut Array1<Complex64>) -> Result<(), StateError> {
    let n = norm(vector);
    if n == 0.0 {
        return Err(StateError::DegenerateState);
    }
    vector.mapv_inplace(|c| c / n);
    Ok(())
}

/// Wraps an angle into `[0, 2π)`.
pub fn wrap_phase(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round a tiny negative input up to exactly TAU
    if wrapped >= TAU { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn wrap_phase_stays_in_range() {
        assert_abs_diff_eq!(wrap_phase(-FRAC_PI_2), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_phase(TAU + 1.0), 1.0, epsilon = 1e-12);
        assert_eq!(wrap_phase(-1e-18), 0.0);
        assert_eq!(wrap_phase(TAU), 0.0);
    }

    #[test]
    fn normalize_rescales_to_unit_norm() {
        let mut v = array![Complex64::new(3.0, 0.0), Complex64::new(0.0, 4.0)];
        normalize(&mut v).unwrap();
        assert_abs_diff_eq!(norm(&v), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[0].re, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(v[1].im, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        let mut v = Array1::<Complex64>::zeros(2);
        assert_eq!(normalize(&mut v), Err(StateError::DegenerateState));
    }

    #[test]
    fn global_phase_does_not_change_angles() {
        let v = angles_to_vector(1.1, 2.3);
        let shifted = v.mapv(|c| c * Complex64::from_polar(1.0, 0.7));
        let (t0, p0) = vector_to_angles(&v);
        let (t1, p1) = vector_to_angles(&shifted);
        assert_abs_diff_eq!(t0, t1, epsilon = 1e-12);
        assert_abs_diff_eq!(p0, p1, epsilon = 1e-12);
    }

    #[test]
    fn poles_pin_phi_to_zero() {
        assert_eq!(vector_to_angles(&angles_to_vector(0.0, 1.3)).1, 0.0);
        let (theta, phi) = vector_to_angles(&angles_to_vector(PI, 1.3));
        assert_abs_diff_eq!(theta, PI, epsilon = 1e-12);
        assert_eq!(phi, 0.0);
    }
}
