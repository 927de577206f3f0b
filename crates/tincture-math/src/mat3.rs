//! Row-major 3x3 matrix for tristimulus transforms.
//!
//! [`Mat3`] holds RGB-to-XYZ matrices, their inverses, cone-response
//! transforms and composed chromatic adaptation matrices. Storage is
//! row-major so the constants read the way colorimetry references print
//! them; arithmetic is delegated to `glam`, which is column-major.
//!
//! ```text
//! | X |   | m00 m01 m02 |   | R |
//! | Y | = | m10 m11 m12 | * | G |
//! | Z |   | m20 m21 m22 |   | B |
//! ```

use crate::Vec3;
use std::ops::Mul;

/// Determinant magnitude below which a matrix is treated as singular.
const SINGULAR_EPSILON: f32 = 1e-10;

/// A 3x3 matrix applied to column vectors.
///
/// ```rust
/// use tincture_math::{Mat3, Vec3};
///
/// let srgb_to_xyz = Mat3::from_rows([
///     [0.4124564, 0.3575761, 0.1804375],
///     [0.2126729, 0.7151522, 0.0721750],
///     [0.0193339, 0.1191920, 0.9503041],
/// ]);
/// let red = srgb_to_xyz * Vec3::new(1.0, 0.0, 0.0);
/// assert!((red.y - 0.2126729).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Rows, top to bottom.
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0);

    /// Creates a matrix from its rows.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a diagonal (per-channel scaling) matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.to_glam().determinant()
    }

    /// Inverse, or `None` for a singular matrix.
    ///
    /// Primaries that collapse onto a line in xy produce a singular matrix.
    ///
    /// ```rust
    /// use tincture_math::Mat3;
    ///
    /// let m = Mat3::diagonal(2.0, 4.0, 8.0);
    /// assert_eq!(m.inverse(), Some(Mat3::diagonal(0.5, 0.25, 0.125)));
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let g = self.to_glam();
        if g.determinant().abs() < SINGULAR_EPSILON {
            return None;
        }
        let inv = Self::from_glam(g.inverse());
        inv.is_finite().then_some(inv)
    }

    /// True when no element is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }

    /// Widens to a double precision glam matrix.
    #[inline]
    pub fn to_dmat3(&self) -> glam::DMat3 {
        self.to_glam().as_dmat3()
    }

    #[inline]
    fn to_glam(self) -> glam::Mat3 {
        glam::Mat3::from_cols_array_2d(&self.m).transpose()
    }

    #[inline]
    fn from_glam(g: glam::Mat3) -> Self {
        Self::from_rows(g.transpose().to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        let [r0, r1, r2] = self.m;
        let v = rhs.to_array();
        let dot = |row: [f32; 3]| row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
        Vec3::new(dot(r0), dot(r1), dot(r2))
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() * rhs.to_glam())
    }
}
