//! Linear RGB <-> XYZ matrix derivation.

use glam::{DMat3, DVec3};

use crate::WorkingSpace;

/// Determinant magnitude below which the primaries are treated as degenerate.
const SINGULAR_EPSILON: f64 = 1e-12;

/// The pair of matrices relating a working space's linear RGB to XYZ.
///
/// Both are kept in f64: gamma curves amplify any residue left on a zero
/// channel after an RGB -> XYZ -> RGB trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbMatrices {
    /// Linear RGB -> XYZ (relative to the working space white).
    pub to_xyz: DMat3,
    /// XYZ -> linear RGB.
    pub from_xyz: DMat3,
}

impl RgbMatrices {
    /// Derives both matrices for a working space.
    pub fn derive(space: &WorkingSpace) -> Self {
        let to_xyz = rgb_to_xyz_matrix(space);
        Self {
            to_xyz,
            from_xyz: invert_or_identity(to_xyz),
        }
    }
}

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(xy: (f32, f32)) -> DVec3 {
    let (x, y) = (xy.0 as f64, xy.1 as f64);
    if y.abs() < 1e-10 {
        DVec3::ZERO
    } else {
        DVec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

fn invert_or_identity(m: DMat3) -> DMat3 {
    if m.determinant().abs() < SINGULAR_EPSILON {
        DMat3::IDENTITY
    } else {
        m.inverse()
    }
}

/// Computes the linear RGB to XYZ matrix for a working space.
///
/// # Algorithm
///
/// 1. Convert the primaries' xy chromaticities to XYZ (with Y=1)
/// 2. Solve for per-channel scale factors `S = P^-1 * W` so that RGB
///    (1, 1, 1) lands on the white point
/// 3. Scale each primary column by its factor
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tincture_primaries::{SRGB, rgb_to_xyz_matrix};
/// use tincture_math::{Vec3, D65};
///
/// let m = rgb_to_xyz_matrix(&SRGB);
/// let white = Vec3::from_dvec3(m * DVec3::ONE);
/// assert!(white.approx_eq(D65, 1e-6));
/// ```
pub fn rgb_to_xyz_matrix(space: &WorkingSpace) -> DMat3 {
    // ProPhoto blue sits near y = 0, so the primaries matrix is badly
    // conditioned in anything narrower than f64.
    let p = DMat3::from_cols(xy_to_xyz(space.red), xy_to_xyz(space.green), xy_to_xyz(space.blue));

    let s = if p.determinant().abs() < SINGULAR_EPSILON {
        DVec3::ONE
    } else {
        p.inverse() * space.white.to_dvec3()
    };

    p * DMat3::from_diagonal(s)
}

/// Computes the XYZ to linear RGB matrix for a working space.
///
/// This is the inverse of [`rgb_to_xyz_matrix`]. Degenerate primaries
/// yield the identity.
pub fn xyz_to_rgb_matrix(space: &WorkingSpace) -> DMat3 {
    invert_or_identity(rgb_to_xyz_matrix(space))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;
    use tincture_math::Vec3;

    #[test]
    fn test_srgb_matrix() {
        let m = rgb_to_xyz_matrix(&SRGB);

        // IEC 61966-2-1 / Lindbloom reference values
        let expected = [
            [0.4124564, 0.3575761, 0.1804375],
            [0.2126729, 0.7151522, 0.0721750],
            [0.0193339, 0.1191920, 0.9503041],
        ];
        for (i, row) in expected.iter().enumerate() {
            let got = m.row(i);
            for (j, e) in row.iter().enumerate() {
                assert!((got[j] - e).abs() < 1e-4, "m[{}][{}] = {}", i, j, got[j]);
            }
        }
    }

    #[test]
    fn test_adobe_matrix() {
        let m = rgb_to_xyz_matrix(&ADOBE_RGB_1998);
        assert!((m.row(0).x - 0.5767309).abs() < 1e-4);
        assert!((m.row(1).y - 0.6273491).abs() < 1e-4);
        assert!((m.row(2).z - 0.9911085).abs() < 1e-4);
    }

    #[test]
    fn test_white_maps_to_white_for_every_space() {
        for space in WorkingSpace::ALL {
            let white = Vec3::from_dvec3(rgb_to_xyz_matrix(&space) * DVec3::ONE);
            assert!(white.approx_eq(space.white, 1e-6), "{}: {:?}", space.name, white);
        }
    }

    #[test]
    fn test_roundtrip() {
        for space in WorkingSpace::ALL {
            let m = RgbMatrices::derive(&space);
            let product = m.from_xyz * m.to_xyz;
            assert!(product.abs_diff_eq(DMat3::IDENTITY, 1e-12), "{}: {:?}", space.name, product);
        }
    }

    #[test]
    fn test_zero_channel_stays_zero() {
        // Pure primaries must come back with their other channels at
        // f64 rounding, far below what a 2.2 gamma would make visible.
        for space in WorkingSpace::ALL {
            let m = RgbMatrices::derive(&space);
            for primary in [DVec3::X, DVec3::Y, DVec3::Z] {
                let back = m.from_xyz * (m.to_xyz * primary);
                let residue = (back - primary).abs().max_element();
                assert!(residue < 1e-12, "{}: {:?}", space.name, back);
            }
        }
    }

    #[test]
    fn test_inverse_matches_xyz_to_rgb() {
        let m = RgbMatrices::derive(&PROPHOTO_RGB);
        assert_eq!(m.from_xyz, xyz_to_rgb_matrix(&PROPHOTO_RGB));
        assert_eq!(m.from_xyz, m.to_xyz.inverse());
    }

    #[test]
    fn test_degenerate_primaries_fall_back_to_identity() {
        let flat = WorkingSpace {
            red: (0.3, 0.3),
            green: (0.4, 0.4),
            blue: (0.5, 0.5),
            ..SRGB
        };
        assert_eq!(xyz_to_rgb_matrix(&flat), DMat3::IDENTITY);
    }
}
