//! CIE L* companding.
//!
//! Encodes linear light the way CIE lightness does, so that equal steps of
//! the stored value are perceptually equal. Used by ECI RGB v2.
//!
//! # Reference
//!
//! Bruce Lindbloom, "Companding" (L* companding)

/// CIE κ = 24389 / 27.
pub const KAPPA: f32 = 24389.0 / 27.0;

/// CIE ε = 216 / 24389.
pub const EPSILON: f32 = 216.0 / 24389.0;

/// Decodes an L*-companded value to linear.
///
/// ```text
/// if V <= 0.08:
///     L = 100 * V / κ
/// else:
///     L = ((V + 0.16) / 1.16)^3
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= 0.08 {
        100.0 * v / KAPPA
    } else {
        let t = (v + 0.16) / 1.16;
        t * t * t
    }
}

/// Encodes linear light with L* companding.
///
/// ```text
/// if L <= ε:
///     V = L * κ / 100
/// else:
///     V = 1.16 * cbrt(L) - 0.16
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= EPSILON {
        l * KAPPA / 100.0
    } else {
        1.16 * l.cbrt() - 0.16
    }
}
