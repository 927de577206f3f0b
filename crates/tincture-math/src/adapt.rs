//! Standard illuminants and chromatic adaptation transforms (CAT).
//!
//! A chromatic adaptation matrix re-expresses XYZ measured under one
//! reference white as the corresponding XYZ under another. Both whites are
//! taken into a cone-response space by a fixed 3x3 transform, scaled
//! per channel, and taken back:
//!
//! ```text
//! A = M^-1 * diag(dst_cone / src_cone) * M
//! ```
//!
//! # Supported Methods
//!
//! - [`BRADFORD`] - sharpened cone response, the default everywhere
//! - [`VON_KRIES`] - Hunt-Pointer-Estevez cone response
//! - [`CAT02`] - CIECAM02 transform
//! - [`XYZ_SCALING`] - plain XYZ scaling
//!
//! # Usage
//!
//! ```rust
//! use tincture_math::{adapt_matrix, BRADFORD, D65, D50};
//!
//! let d65_to_d50 = adapt_matrix(BRADFORD, D65, D50);
//! let white = d65_to_d50 * D65.to_dvec3();
//! assert!((white.z - D50.z as f64).abs() < 1e-6);
//! ```

use crate::{Mat3, Vec3};
use glam::DMat3;

// ============================================================================
// Standard Illuminants (XYZ white points, Y = 1)
// ============================================================================

/// CIE Standard Illuminant A (tungsten, ~2856K).
pub const A: Vec3 = Vec3::new(1.09850, 1.0, 0.35585);

/// CIE Illuminant B (direct sunlight, obsolete).
pub const B: Vec3 = Vec3::new(0.99072, 1.0, 0.85223);

/// CIE Illuminant C (average daylight, obsolete). White of NTSC RGB.
pub const C: Vec3 = Vec3::new(0.98074, 1.0, 1.18232);

/// CIE Standard Illuminant D50 (horizon light, ~5000K).
///
/// Reference white of ProPhoto, Wide Gamut and ECI RGB.
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D55 (~5500K).
pub const D55: Vec3 = Vec3::new(0.95682, 1.0, 0.92149);

/// CIE Standard Illuminant D65 (daylight, ~6500K).
///
/// Reference white of sRGB, Rec.709, Rec.2020 and Adobe RGB, and the
/// default reference white for all CIE conversions.
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D75 (north sky daylight, ~7500K).
pub const D75: Vec3 = Vec3::new(0.94972, 1.0, 1.22638);

/// CIE Standard Illuminant E (equal energy).
pub const E: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// CIE F2 (cool white fluorescent).
pub const F2: Vec3 = Vec3::new(0.99186, 1.0, 0.67393);

/// CIE F7 (broad-band daylight fluorescent).
pub const F7: Vec3 = Vec3::new(0.95041, 1.0, 1.08747);

/// CIE F11 (narrow-band white fluorescent).
pub const F11: Vec3 = Vec3::new(1.00962, 1.0, 0.64350);

/// Named illuminants accepted by [`illuminant_by_name`].
pub const ILLUMINANTS: [(&str, Vec3); 11] = [
    ("A", A),
    ("B", B),
    ("C", C),
    ("D50", D50),
    ("D55", D55),
    ("D65", D65),
    ("D75", D75),
    ("E", E),
    ("F2", F2),
    ("F7", F7),
    ("F11", F11),
];

/// Looks up a standard illuminant by name, ignoring case.
///
/// ```rust
/// use tincture_math::{illuminant_by_name, D50};
///
/// assert_eq!(illuminant_by_name("d50"), Some(D50));
/// assert_eq!(illuminant_by_name("D93"), None);
/// ```
pub fn illuminant_by_name(name: &str) -> Option<Vec3> {
    let name = name.trim();
    ILLUMINANTS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, w)| *w)
}

/// Per-component tolerance under which two white points count as equal.
pub const WHITE_POINT_EPSILON: f32 = 1e-6;

/// Returns true if two white points are equal within [`WHITE_POINT_EPSILON`].
///
/// Conversions skip chromatic adaptation entirely when this holds, so that
/// rounding in a computed matrix never perturbs same-white conversions.
#[inline]
pub fn same_white(a: Vec3, b: Vec3) -> bool {
    a.approx_eq(b, WHITE_POINT_EPSILON)
}

// ============================================================================
// Cone Response Matrices
// ============================================================================

/// Bradford cone response matrix.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Inverse Bradford matrix.
pub const BRADFORD_INV: Mat3 = Mat3::from_rows([
    [0.9869929, -0.1470543, 0.1599627],
    [0.4323053, 0.5183603, 0.0492912],
    [-0.0085287, 0.0400428, 0.9684867],
]);

/// Von Kries (Hunt-Pointer-Estevez, D65 normalized) cone response matrix.
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// Inverse Von Kries matrix.
pub const VON_KRIES_INV: Mat3 = Mat3::from_rows([
    [1.8599364, -1.1293816, 0.2198974],
    [0.3611914, 0.6388125, -0.0000064],
    [0.0000000, 0.0000000, 1.0890636],
]);

/// CAT02 matrix from the CIECAM02 color appearance model.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Inverse CAT02 matrix.
pub const CAT02_INV: Mat3 = Mat3::from_rows([
    [1.0961238, -0.2788690, 0.1827452],
    [0.4543690, 0.4735332, 0.0720978],
    [-0.0096276, -0.0056980, 1.0153256],
]);

/// XYZ scaling: adaptation directly on XYZ.
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

/// Inverse XYZ scaling matrix.
pub const XYZ_SCALING_INV: Mat3 = Mat3::IDENTITY;

// ============================================================================
// Adaptation Functions
// ============================================================================

/// Computes a chromatic adaptation matrix between two white points.
///
/// `method` is the cone response matrix ([`BRADFORD`], [`CAT02`], ...).
/// The result maps XYZ relative to `src_white` onto XYZ relative to
/// `dst_white`. When the whites are the same (see [`same_white`]) the exact
/// identity is returned.
///
/// The product is formed in double precision so that adapting there and
/// back again lands within f64 rounding of the starting XYZ.
///
/// ```rust
/// use glam::DMat3;
/// use tincture_math::{adapt_matrix, BRADFORD, D65};
///
/// assert_eq!(adapt_matrix(BRADFORD, D65, D65), DMat3::IDENTITY);
/// ```
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> DMat3 {
    if same_white(src_white, dst_white) {
        return DMat3::IDENTITY;
    }

    let cone = method.to_dmat3();
    let gain = (cone * dst_white.to_dvec3()) / (cone * src_white.to_dvec3());
    cone.inverse() * DMat3::from_diagonal(gain) * cone
}
