//! Tristimulus triplet.
//!
//! [`Vec3`] carries XYZ, linear RGB, LMS and white point values through
//! matrix transforms.
//!
//! ```rust
//! use tincture_math::Vec3;
//!
//! let xyz = Vec3::new(0.4124, 0.2126, 0.0193);
//! let x = xyz.x / xyz.sum();
//! assert!((x - 0.64).abs() < 1e-3);
//! ```

use std::ops::{Div, Mul};

/// Three components: (R, G, B), (X, Y, Z) or (L, M, S).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// R, X or L.
    pub x: f32,
    /// G, Y or M.
    pub y: f32,
    /// B, Z or S.
    pub z: f32,
}

impl Vec3 {
    /// Black.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// (1, 1, 1): RGB white, or the equal-energy white in XYZ.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a triplet.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// `X + Y + Z`, the chromaticity denominator.
    #[inline]
    pub fn sum(self) -> f32 {
        self.x + self.y + self.z
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// True if every component is within `tolerance` of `other`.
    ///
    /// ```rust
    /// use tincture_math::{Vec3, D65};
    ///
    /// assert!(D65.approx_eq(Vec3::new(0.95047, 1.0, 1.08883), 1e-6));
    /// ```
    #[inline]
    pub fn approx_eq(self, other: Self, tolerance: f32) -> bool {
        let d = self.to_glam() - other.to_glam();
        d.abs().max_element() <= tolerance
    }

    /// True when no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_glam().is_finite()
    }

    /// Widens to double precision for the matrix legs of a conversion.
    #[inline]
    pub fn to_dvec3(self) -> glam::DVec3 {
        self.to_glam().as_dvec3()
    }

    /// Narrows a double precision triplet.
    #[inline]
    pub fn from_dvec3(v: glam::DVec3) -> Self {
        Self::from_array(v.as_vec3().to_array())
    }

    #[inline]
    fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::from_array(self.to_array())
    }
}

/// Component-wise product, used for von Kries style cone scaling.
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|v| v * rhs)
    }
}

/// Component-wise quotient, used to normalize by a white point.
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        self.map(|v| v / rhs)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}
