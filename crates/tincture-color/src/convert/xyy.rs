//! CIE xyY.

use tincture_math::Vec3;

use crate::{CieXyy, CieXyz};

/// xyY to XYZ. A zero `y` yields black.
pub fn to_xyz(xyy: CieXyy) -> CieXyz {
    let (x, y, lum) = (xyy.x(), xyy.y(), xyy.luminance());
    if y == 0.0 {
        return CieXyz::new(0.0, 0.0, 0.0);
    }
    CieXyz::new(x * lum / y, lum, (1.0 - x - y) * lum / y)
}

/// XYZ to xyY. A zero sum (black) takes the chromaticity of `white`.
pub fn from_xyz(xyz: CieXyz, white: Vec3) -> CieXyy {
    let sum = xyz.to_vec3().sum();
    if sum == 0.0 {
        let wsum = white.sum();
        return CieXyy::new(white.x / wsum, white.y / wsum, xyz.y());
    }
    CieXyy::new(xyz.x() / sum, xyz.y() / sum, xyz.y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tincture_math::D65;

    #[test]
    fn test_white_chromaticity() {
        let xyy = from_xyz(CieXyz::from_vec3(D65), D65);
        assert_abs_diff_eq!(xyy.x(), 0.3127, epsilon = 1e-4);
        assert_abs_diff_eq!(xyy.y(), 0.3290, epsilon = 1e-4);
        assert_abs_diff_eq!(xyy.luminance(), 1.0);
    }

    #[test]
    fn test_black_uses_white() {
        let xyy = from_xyz(CieXyz::new(0.0, 0.0, 0.0), D65);
        assert_abs_diff_eq!(xyy.x(), 0.3127, epsilon = 1e-4);
        assert_eq!(xyy.luminance(), 0.0);
    }

    #[test]
    fn test_zero_y_is_black() {
        assert_eq!(to_xyz(CieXyy::new(0.3, 0.0, 0.5)), CieXyz::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_roundtrip() {
        let xyz = CieXyz::new(0.2, 0.3, 0.4);
        let back = to_xyz(from_xyz(xyz, D65));
        assert!(back.to_vec3().approx_eq(xyz.to_vec3(), 1e-6));
    }
}
