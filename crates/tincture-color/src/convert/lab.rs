//! CIE 1976 L*a*b*.
//!
//! ```text
//! f(t) = t > ε ? ∛t : (κt + 16) / 116
//! L = 116 f(Y/Yw) - 16
//! a = 500 (f(X/Xw) - f(Y/Yw))
//! b = 200 (f(Y/Yw) - f(Z/Zw))
//! ```

use tincture_math::Vec3;
use tincture_transfer::lstar::{EPSILON, KAPPA};

use crate::{CieLab, CieXyz};

#[inline]
fn f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn f_inv(ft: f32) -> f32 {
    let t3 = ft * ft * ft;
    if t3 > EPSILON {
        t3
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

/// XYZ to Lab relative to `white`.
pub fn from_xyz(xyz: CieXyz, white: Vec3) -> CieLab {
    let fx = f(xyz.x() / white.x);
    let fy = f(xyz.y() / white.y);
    let fz = f(xyz.z() / white.z);
    CieLab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Lab to XYZ relative to `white`.
pub fn to_xyz(lab: CieLab, white: Vec3) -> CieXyz {
    let l = lab.l();
    let fy = (l + 16.0) / 116.0;
    let fx = lab.a() / 500.0 + fy;
    let fz = fy - lab.b() / 200.0;

    let yr = if l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        l / KAPPA
    };

    CieXyz::new(f_inv(fx) * white.x, yr * white.y, f_inv(fz) * white.z)
}
