/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic lattice and fractional/Cartesian coordinate conversion
//!
//! The matrix is stored row-wise: each row is one lattice vector, so a
//! Cartesian position is `frac · M` and a fractional one is `cart · M⁻¹`.

use super::errors::{Result, StructureError};
use super::vector::Vector3D;
use serde::{Deserialize, Serialize};

/// Determinant below which a lattice is treated as singular
const SINGULAR_TOLERANCE: f64 = 1e-10;

/// A 3×3 lattice given by three row vectors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lattice {
    matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// Create a lattice from row vectors `[a, b, c]`
    pub fn new(matrix: [[f64; 3]; 3]) -> Self {
        Self { matrix }
    }

    /// Cubic lattice with edge `a`
    pub fn cubic(a: f64) -> Self {
        Self::orthorhombic(a, a, a)
    }

    /// Orthorhombic lattice with edges along x, y and z
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        Self::new([[a, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, c]])
    }

    pub fn matrix(&self) -> &[[f64; 3]; 3] {
        &self.matrix
    }

    /// Lattice vector `i` (0 = a, 1 = b, 2 = c)
    pub fn vector(&self, i: usize) -> Vector3D {
        Vector3D::from(self.matrix[i])
    }

    /// Lengths of the three lattice vectors
    pub fn abc(&self) -> [f64; 3] {
        [0, 1, 2].map(|i| self.vector(i).length())
    }

    pub fn determinant(&self) -> f64 {
        self.vector(0).dot(&self.vector(1).cross(&self.vector(2)))
    }

    /// Cell volume in Å³
    pub fn volume(&self) -> f64 {
        self.determinant().abs()
    }

    /// True when every matrix element is zero
    pub fn is_zero(&self) -> bool {
        self.matrix.iter().flatten().all(|&v| v == 0.0)
    }

    /// Convert fractional coordinates to Cartesian
    pub fn cartesian_coords(&self, frac: [f64; 3]) -> Vector3D {
        let m = &self.matrix;
        Vector3D::new(
            frac[0] * m[0][0] + frac[1] * m[1][0] + frac[2] * m[2][0],
            frac[0] * m[0][1] + frac[1] * m[1][1] + frac[2] * m[2][1],
            frac[0] * m[0][2] + frac[1] * m[1][2] + frac[2] * m[2][2],
        )
    }

    /// Convert Cartesian coordinates to fractional
    pub fn fractional_coords(&self, cart: &Vector3D) -> Result<[f64; 3]> {
        let inv = self.inverse()?;
        let c = cart.to_array();
        Ok([0, 1, 2].map(|j| c[0] * inv[0][j] + c[1] * inv[1][j] + c[2] * inv[2][j]))
    }

    fn inverse(&self) -> Result<[[f64; 3]; 3]> {
        let det = self.determinant();
        if det.abs() < SINGULAR_TOLERANCE {
            return Err(StructureError::SingularLattice(det));
        }

        let m = &self.matrix;
        let cofactor = |r0: usize, r1: usize, c0: usize, c1: usize| {
            m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
        };

        // Adjugate (transposed cofactor matrix) over the determinant
        let adj = [
            [cofactor(1, 2, 1, 2), -cofactor(0, 2, 1, 2), cofactor(0, 1, 1, 2)],
            [-cofactor(1, 2, 0, 2), cofactor(0, 2, 0, 2), -cofactor(0, 1, 0, 2)],
            [cofactor(1, 2, 0, 1), -cofactor(0, 2, 0, 1), cofactor(0, 1, 0, 1)],
        ];

        Ok(adj.map(|row| row.map(|v| v / det)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic_lattice() {
        let lattice = Lattice::cubic(4.0);
        assert_relative_eq!(lattice.volume(), 64.0, epsilon = 1e-12);
        assert_eq!(lattice.abc(), [4.0, 4.0, 4.0]);

        let cart = lattice.cartesian_coords([0.5, 0.25, 0.0]);
        assert_eq!(cart.to_array(), [2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_fractional_coords_triclinic() {
        let lattice = Lattice::new([[3.0, 0.0, 0.0], [1.0, 2.5, 0.0], [0.5, 0.7, 4.2]]);
        let frac = [0.1, 0.6, 0.35];

        let cart = lattice.cartesian_coords(frac);
        let back = lattice.fractional_coords(&cart).unwrap();

        for i in 0..3 {
            assert_relative_eq!(back[i], frac[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_singular_lattice() {
        let flat = Lattice::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]]);
        let result = flat.fractional_coords(&Vector3D::origin());
        assert!(matches!(result, Err(StructureError::SingularLattice(_))));
    }
}
