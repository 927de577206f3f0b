//! Rec.2020 (BT.2020) companding.
//!
//! Same shape as Rec.709 with the higher precision constants BT.2020
//! specifies for 12-bit systems.
//!
//! # Reference
//!
//! ITU-R BT.2020-2

/// Curve scale (`α`).
pub const ALPHA: f32 = 1.099_296_8;

/// Linear segment break point (`β`).
pub const BETA: f32 = 0.018_053_97;

/// Rec.2020 OETF: encodes linear to Rec.2020.
///
/// ```text
/// if L < β:
///     V = 4.5 * L
/// else:
///     V = α * L^0.45 - (α - 1)
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l < BETA {
        4.5 * l
    } else {
        ALPHA * l.powf(0.45) - (ALPHA - 1.0)
    }
}

/// Rec.2020 inverse OETF: decodes Rec.2020 to linear.
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v < BETA * 4.5 {
        v / 4.5
    } else {
        ((v + ALPHA - 1.0) / ALPHA).powf(1.0 / 0.45)
    }
}
