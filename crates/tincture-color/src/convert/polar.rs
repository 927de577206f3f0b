//! Cylindrical forms of Lab and Luv.
//!
//! `C = √(a² + b²)`, `h = atan2(b, a)` in degrees; inverse
//! `a = C cos h`, `b = C sin h`.

use crate::{CieLab, CieLch, CieLchuv, CieLuv};

#[inline]
fn to_polar(a: f32, b: f32) -> (f32, f32) {
    (a.hypot(b), b.atan2(a).to_degrees())
}

#[inline]
fn from_polar(c: f32, h: f32) -> (f32, f32) {
    let (sin, cos) = h.to_radians().sin_cos();
    (c * cos, c * sin)
}

/// Lab to LCh(ab).
pub fn lab_to_lch(lab: CieLab) -> CieLch {
    let (c, h) = to_polar(lab.a(), lab.b());
    CieLch::new(lab.l(), c, h)
}

/// LCh(ab) to Lab.
pub fn lch_to_lab(lch: CieLch) -> CieLab {
    let (a, b) = from_polar(lch.c(), lch.h());
    CieLab::new(lch.l(), a, b)
}

/// Luv to LCh(uv).
pub fn luv_to_lchuv(luv: CieLuv) -> CieLchuv {
    let (c, h) = to_polar(luv.u(), luv.v());
    CieLchuv::new(luv.l(), c, h)
}

/// LCh(uv) to Luv.
pub fn lchuv_to_luv(lchuv: CieLchuv) -> CieLuv {
    let (u, v) = from_polar(lchuv.c(), lchuv.h());
    CieLuv::new(lchuv.l(), u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_negative_angles_wrap() {
        let lch = lab_to_lch(CieLab::new(50.0, 0.0, -20.0));
        assert_abs_diff_eq!(lch.c(), 20.0, epsilon = 1e-4);
        assert_abs_diff_eq!(lch.h(), 270.0, epsilon = 1e-3);
    }

    #[test]
    fn test_roundtrip() {
        let lab = CieLab::new(53.24, 80.09, 67.20);
        let back = lch_to_lab(lab_to_lch(lab));
        assert_abs_diff_eq!(back.a(), lab.a(), epsilon = 1e-3);
        assert_abs_diff_eq!(back.b(), lab.b(), epsilon = 1e-3);

        let luv = CieLuv::new(40.0, -30.0, 12.0);
        let back = lchuv_to_luv(luv_to_lchuv(luv));
        assert_abs_diff_eq!(back.u(), luv.u(), epsilon = 1e-3);
        assert_abs_diff_eq!(back.v(), luv.v(), epsilon = 1e-3);
    }

    #[test]
    fn test_neutral_has_zero_hue() {
        let lch = lab_to_lch(CieLab::new(70.0, 0.0, 0.0));
        assert_eq!((lch.c(), lch.h()), (0.0, 0.0));
    }
}
