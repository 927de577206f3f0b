//! CIE 1976 L*u*v*.

use tincture_math::Vec3;
use tincture_transfer::lstar::{EPSILON, KAPPA};

use crate::{CieLuv, CieXyz};

/// u'v' chromaticity of an XYZ triple; `(0, 0)` when the denominator vanishes.
#[inline]
fn uv_prime(v: Vec3) -> (f32, f32) {
    let den = v.x + 15.0 * v.y + 3.0 * v.z;
    if den == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * v.x / den, 9.0 * v.y / den)
    }
}

/// XYZ to Luv relative to `white`.
pub fn from_xyz(xyz: CieXyz, white: Vec3) -> CieLuv {
    let yr = xyz.y() / white.y;
    let (up, vp) = uv_prime(xyz.to_vec3());
    let (uw, vw) = uv_prime(white);

    let l = if yr > EPSILON {
        116.0 * yr.cbrt() - 16.0
    } else {
        KAPPA * yr
    };

    // Black has no chromaticity; u' and v' are both zero there.
    if up == 0.0 && vp == 0.0 {
        return CieLuv::new(l, 0.0, 0.0);
    }
    CieLuv::new(l, 13.0 * l * (up - uw), 13.0 * l * (vp - vw))
}

/// Luv to XYZ relative to `white`. `L = 0` yields black.
pub fn to_xyz(luv: CieLuv, white: Vec3) -> CieXyz {
    let l = luv.l();
    if l <= 0.0 {
        return CieXyz::new(0.0, 0.0, 0.0);
    }

    let yr = if l > KAPPA * EPSILON {
        let t = (l + 16.0) / 116.0;
        t * t * t
    } else {
        l / KAPPA
    };
    let y = yr * white.y;

    let (uw, vw) = uv_prime(white);
    let up = luv.u() / (13.0 * l) + uw;
    let vp = luv.v() / (13.0 * l) + vw;
    if vp == 0.0 {
        return CieXyz::new(0.0, y, 0.0);
    }

    let x = y * 9.0 * up / (4.0 * vp);
    let z = y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp);
    CieXyz::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tincture_math::{D50, D65};

    #[test]
    fn test_white_is_l100() {
        let luv = from_xyz(CieXyz::from_vec3(D65), D65);
        assert_abs_diff_eq!(luv.l(), 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(luv.u(), 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(luv.v(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_black_is_zero() {
        let luv = from_xyz(CieXyz::new(0.0, 0.0, 0.0), D65);
        assert_eq!(luv, CieLuv::new(0.0, 0.0, 0.0));
        assert_eq!(to_xyz(luv, D65), CieXyz::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_srgb_red_reference() {
        let luv = from_xyz(CieXyz::new(0.4124564, 0.2126729, 0.0193339), D65);
        assert_abs_diff_eq!(luv.l(), 53.24, epsilon = 0.01);
        assert_abs_diff_eq!(luv.u(), 175.01, epsilon = 0.05);
        assert_abs_diff_eq!(luv.v(), 37.76, epsilon = 0.05);
    }

    #[test]
    fn test_roundtrip() {
        for xyz in [
            CieXyz::new(0.5, 0.4, 0.3),
            CieXyz::new(0.004, 0.005, 0.006),
            CieXyz::new(0.2, 0.7, 0.1),
        ] {
            let back = to_xyz(from_xyz(xyz, D50), D50);
            assert!(back.to_vec3().approx_eq(xyz.to_vec3(), 1e-5), "{:?}", back);
        }
    }
}
