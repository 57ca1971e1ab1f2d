use crate::core::errors::GateError;
use ndarray::{Array2, arr2};
use num_complex::Complex64;
use std::fmt;

/// Cartesian axis of the Bloch sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Represents a single-qubit quantum gate.
///
/// The wrapped matrix is always 2x2: every constructor checks or fixes the
/// shape and the matrix cannot be replaced afterwards. Unitarity is only
/// guaranteed for gates built through [`Gate::new`] or the standard
/// constructors.
#[derive(Clone, Debug, PartialEq)]
pub struct Gate {
    matrix: Array2<Complex64>,
}

impl Gate {
    /// Creates a new `Gate` from a unitary matrix.
    ///
    /// # Arguments
    ///
    /// * `matrix` - A 2x2, unitary `Array2<Complex64>`.
    ///
    /// # Errors
    ///
    /// Returns a `GateError` if:
    /// - The matrix is not square.
    /// - The matrix is not 2x2.
    /// - The matrix is not unitary.
    pub fn new(matrix: Array2<Complex64>) -> Result<Self, GateError> {
        let gate = Self::new_unchecked(matrix)?;

        if !gate.is_unitary() {
            return Err(GateError::NonUnitary);
        }

        Ok(gate)
    }

    /// Creates a `Gate` checking only its shape.
    ///
    /// Applying a non-unitary matrix leaves the state unnormalized and its
    /// stored angles no longer describe the vector.
    pub fn new_unchecked(matrix: Array2<Complex64>) -> Result<Self, GateError> {
        let (rows, cols) = matrix.dim();

        if rows != cols {
            return Err(GateError::NotSquareMatrix);
        }

        if rows != 2 {
            return Err(GateError::InvalidDimensions { rows, cols });
        }

        Ok(Self { matrix })
    }

    /// The 2x2 matrix of the gate.
    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.matrix
    }

    /// Checks U U† = I within `1e-6`.
    pub fn is_unitary(&self) -> bool {
        let eye = Array2::<Complex64>::eye(2);

        let u_dagger = self.matrix.t().mapv(|x| x.conj());
        let product = self.matrix.dot(&u_dagger);

        product
            .iter()
            .zip(eye.iter())
            .all(|(a, b)| (*a - *b).norm() < 1e-6)
    }

    // --- Rotations ---

    /// Rotation by `angle` radians about the x axis.
    ///
    /// $R_x(\gamma) = \cos(\gamma/2) I - i \sin(\gamma/2) X$
    pub fn rx(angle: f64) -> Gate {
        let c = Complex64::new((angle / 2.0).cos(), 0.0);
        let s = Complex64::new(0.0, -(angle / 2.0).sin());
        Gate {
            matrix: arr2(&[[c, s], [s, c]]),
        }
    }

    /// Rotation by `angle` radians about the y axis.
    ///
    /// $R_y(\gamma) = \cos(\gamma/2) I - i \sin(\gamma/2) Y$
    pub fn ry(angle: f64) -> Gate {
        let c = Complex64::new((angle / 2.0).cos(), 0.0);
        let s = Complex64::new((angle / 2.0).sin(), 0.0);
        Gate {
            matrix: arr2(&[[c, -s], [s, c]]),
        }
    }

    /// Rotation by `angle` radians about the z axis.
    ///
    /// $R_z(\gamma) = \mathrm{diag}(e^{-i\gamma/2}, e^{i\gamma/2})$
    pub fn rz(angle: f64) -> Gate {
        Gate {
            matrix: arr2(&[
                [Complex64::from_polar(1.0, -angle / 2.0), Complex64::new(0.0, 0.0)],
                [Complex64::new(0.0, 0.0), Complex64::from_polar(1.0, angle / 2.0)],
            ]),
        }
    }

    /// Rotation by `angle` radians about `axis`.
    pub fn rotation(axis: Axis, angle: f64) -> Gate {
        match axis {
            Axis::X => Self::rx(angle),
            Axis::Y => Self::ry(angle),
            Axis::Z => Self::rz(angle),
        }
    }

    // --- Standard Gates ---

    /// Creates an Identity gate.
    pub fn i() -> Gate {
        Gate {
            matrix: Array2::<Complex64>::eye(2),
        }
    }

    /// Creates a Pauli-X gate (NOT gate).
    pub fn x() -> Gate {
        Gate {
            matrix: arr2(&[
                [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
                [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
            ]),
        }
    }

    /// Creates a Pauli-Y gate.
    pub fn y() -> Gate {
        Gate {
            matrix: arr2(&[
                [Complex64::new(0.0, 0.0), Complex64::new(0.0, -1.0)],
                [Complex64::new(0.0, 1.0), Complex64::new(0.0, 0.0)],
            ]),
        }
    }

    /// Creates a Pauli-Z gate.
    pub fn z() -> Gate {
        Gate {
            matrix: arr2(&[
                [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                [Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)],
            ]),
        }
    }

    /// Creates a Hadamard gate.
    pub fn h() -> Gate {
        let factor = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        Gate {
            matrix: arr2(&[[factor, factor], [factor, -factor]]),
        }
    }

    /// Creates an S gate (Phase gate, Z^1/2).
    pub fn s() -> Gate {
        Gate {
            matrix: arr2(&[
                [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                [Complex64::new(0.0, 0.0), Complex64::new(0.0, 1.0)],
            ]),
        }
    }
}
