//! # tincture-math
//!
//! Math primitives for color space conversion.
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ and cone-response transforms
//! - [`Vec3`] - tristimulus triplets (XYZ, linear RGB, LMS)
//! - Standard illuminants as XYZ white points ([`D65`], [`D50`], ...)
//! - Chromatic adaptation ([`adapt_matrix`], [`BRADFORD`], [`CAT02`], ...)
//!
//! # Convention
//!
//! All matrices are stored **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! White points are normalized so that `Y = 1`. Constants are `f32`;
//! adaptation matrices come back as `glam::DMat3` so the XYZ leg of a
//! conversion can stay in double precision.
//!
//! # Usage
//!
//! ```rust
//! use tincture_math::{adapt_matrix, BRADFORD, D50, D65, Vec3};
//!
//! let d65_to_d50 = adapt_matrix(BRADFORD, D65, D50);
//! let white = Vec3::from_dvec3(d65_to_d50 * D65.to_dvec3());
//! assert!(white.approx_eq(D50, 1e-6));
//! ```
//!
//! # Used By
//!
//! - `tincture-primaries` - RGB/XYZ matrix derivation
//! - `tincture-color` - every conversion that crosses white points

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
