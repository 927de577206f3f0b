//! sRGB companding (IEC 61966-2-1).
//!
//! A linear toe near black joined to a 2.4 power segment, close to an
//! overall gamma of 2.2. Used by the sRGB working space.

/// Offset of the power segment.
const A: f32 = 0.055;

/// Slope of the linear toe.
const TOE_SLOPE: f32 = 12.92;

/// Encoded value where the toe ends.
const ENCODED_BREAK: f32 = 0.04045;

/// Linear value where the toe ends (`ENCODED_BREAK / TOE_SLOPE`).
const LINEAR_BREAK: f32 = 0.0031308;

/// Decodes an sRGB value to linear light.
///
/// ```text
/// V <= 0.04045:  L = V / 12.92
/// otherwise:     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// ```rust
/// use tincture_transfer::srgb::eotf;
///
/// assert!((eotf(0.5) - 0.2140).abs() < 1e-4);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v > ENCODED_BREAK {
        ((v + A) / (1.0 + A)).powf(2.4)
    } else {
        v / TOE_SLOPE
    }
}

/// Encodes linear light as sRGB.
///
/// ```text
/// L <= 0.0031308:  V = 12.92 L
/// otherwise:       V = 1.055 L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l > LINEAR_BREAK {
        (1.0 + A) * l.powf(1.0 / 2.4) - A
    } else {
        l * TOE_SLOPE
    }
}
