//! Hunter 1948 Lab.
//!
//! ```text
//! Ka = 100 (175 / 198.04) (Xw + Yw)
//! Kb = 100 (70 / 218.11) (Yw + Zw)
//! L  = 100 √(Y/Yw)
//! a  = Ka (X/Xw - Y/Yw) / √(Y/Yw)
//! b  = Kb (Y/Yw - Z/Zw) / √(Y/Yw)
//! ```

use tincture_math::Vec3;

use crate::{CieXyz, HunterLab};

/// Chromaticity coefficients (Ka, Kb) of a white.
#[inline]
pub fn coefficients(white: Vec3) -> (f32, f32) {
    let ka = 100.0 * (175.0 / 198.04) * (white.x + white.y);
    let kb = 100.0 * (70.0 / 218.11) * (white.y + white.z);
    (ka, kb)
}

/// XYZ to Hunter Lab relative to `white`. `Y <= 0` gives black.
pub fn from_xyz(xyz: CieXyz, white: Vec3) -> HunterLab {
    let (ka, kb) = coefficients(white);
    let yr = xyz.y() / white.y;
    if yr <= 0.0 {
        return HunterLab::new(0.0, 0.0, 0.0);
    }
    let sqrt_yr = yr.sqrt();
    let l = 100.0 * sqrt_yr;

    let a = ka * (xyz.x() / white.x - yr) / sqrt_yr;
    let b = kb * (yr - xyz.z() / white.z) / sqrt_yr;
    HunterLab::new(l, a, b)
}

/// Hunter Lab to XYZ relative to `white`.
pub fn to_xyz(lab: HunterLab, white: Vec3) -> CieXyz {
    let (ka, kb) = coefficients(white);
    let sqrt_yr = lab.l() / 100.0;
    let yr = sqrt_yr * sqrt_yr;

    let x = white.x * (lab.a() * sqrt_yr / ka + yr);
    let z = white.z * (yr - lab.b() * sqrt_yr / kb);
    CieXyz::new(x, yr * white.y, z)
}
