//! Pure power-law companding.
//!
//! Most legacy working spaces (Adobe RGB, Apple RGB, ProPhoto, Wide Gamut,
//! ...) store values with a plain exponent:
//!
//! - 1.8: Apple RGB, ColorMatch RGB, ProPhoto RGB
//! - 2.2: Adobe RGB (1998) and most others
//!
//! # Range
//!
//! - Input/Output: [0, 1]; negative inputs map to 0

/// Decodes a gamma-encoded value to linear: `v^gamma`.
///
/// # Example
///
/// ```rust
/// use tincture_transfer::gamma::gamma_eotf;
///
/// let linear = gamma_eotf(0.5, 2.2);
/// assert!((linear - 0.2176).abs() < 1e-4);
/// ```
#[inline]
pub fn gamma_eotf(v: f32, gamma: f32) -> f32 {
    if v <= 0.0 {
        0.0
    } else {
        v.powf(gamma)
    }
}

/// Encodes a linear value with a gamma curve: `l^(1/gamma)`.
///
/// # Example
///
/// ```rust
/// use tincture_transfer::gamma::gamma_oetf;
///
/// let encoded = gamma_oetf(0.218, 2.2);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn gamma_oetf(l: f32, gamma: f32) -> f32 {
    if l <= 0.0 {
        0.0
    } else {
        l.powf(1.0 / gamma)
    }
}
