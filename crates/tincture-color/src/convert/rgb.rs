//! RGB family: companding and the working-space matrices.

use tincture_math::Vec3;
use tincture_primaries::{RgbMatrices, WorkingSpace};

use crate::{CieXyz, LinearRgb, Rgb};

/// Decodes companded RGB to linear light in the same working space.
#[inline]
pub fn linearize(rgb: Rgb) -> LinearRgb {
    let ws = rgb.working_space();
    let v = ws.companding.linearize_rgb(rgb.to_vec3().to_array());
    LinearRgb::with_working_space(v[0], v[1], v[2], ws)
}

/// Encodes linear light with the working space's companding.
#[inline]
pub fn delinearize(linear: LinearRgb) -> Rgb {
    let ws = linear.working_space();
    let v = ws.companding.delinearize_rgb(linear.to_vec3().to_array());
    Rgb::with_working_space(v[0], v[1], v[2], ws)
}

/// Linear RGB to XYZ relative to the working space white.
///
/// The product is taken in f64 and kept there in the returned XYZ.
#[inline]
pub fn linear_to_xyz(linear: LinearRgb, matrices: &RgbMatrices) -> CieXyz {
    CieXyz::from_dvec3(matrices.to_xyz * linear.to_vec3().to_dvec3())
}

/// XYZ (relative to the working space white) to linear RGB.
///
/// Out-of-gamut results are clamped to [0, 1].
#[inline]
pub fn xyz_to_linear(xyz: CieXyz, space: WorkingSpace, matrices: &RgbMatrices) -> LinearRgb {
    LinearRgb::from_vec3(Vec3::from_dvec3(matrices.from_xyz * xyz.to_dvec3()), space)
}
