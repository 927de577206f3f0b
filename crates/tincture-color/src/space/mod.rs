//! Color value types.
//!
//! Every type is an immutable `Copy` record. Constructors clamp components
//! into their valid range and never fail:
//!
//! | Type | Components | Enforced at construction |
//! |------|------------|--------------------------|
//! | [`Rgb`], [`LinearRgb`] | R, G, B + working space | [0, 1] |
//! | [`CieXyz`], [`CieXyy`], [`Lms`] | | none |
//! | [`CieLab`], [`CieLuv`], [`HunterLab`] | | none |
//! | [`CieLch`], [`CieLchuv`] | L, C, h | C >= 0, h in [0, 360) |
//! | [`Hsl`], [`Hsv`] | H, S, L/V | H in [0, 360), S and L/V in [0, 1] |
//! | [`Cmyk`] | C, M, Y, K | [0, 1] |
//! | [`YCbCr`] | Y, Cb, Cr | [0, 255] |
//!
//! Clamped components and hues map NaN to 0. Equality and hashing are
//! structural over the stored components (and the working space for the RGB
//! family), with `-0.0` and `0.0` treated alike.

use std::hash::Hasher;

/// Clamps to [min, max], mapping NaN to 0.
#[inline]
pub(crate) fn clamp(v: f32, min: f32, max: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(min, max) }
}

/// Clamps to [0, 1], mapping NaN to 0.
#[inline]
pub(crate) fn clamp01(v: f32) -> f32 {
    clamp(v, 0.0, 1.0)
}

/// Wraps a hue in degrees into [0, 360), mapping NaN and infinities to 0.
#[inline]
pub(crate) fn wrap_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return 0.0;
    }
    let w = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if w >= 360.0 { 0.0 } else { w }
}

#[inline]
pub(crate) fn hash_f32<H: Hasher>(v: f32, state: &mut H) {
    state.write_u32((v + 0.0).to_bits());
}

/// Implements component accessors, `Hash` and `Display` for a value type.
macro_rules! color_components {
    ($ty:ident, $label:literal, [$($field:ident => $name:literal),+ $(,)?] $(, $extra:ident)?) => {
        impl $ty {
            $(
                #[doc = concat!("The ", $name, " component.")]
                #[inline]
                pub fn $field(&self) -> f32 {
                    self.$field
                }
            )+
        }

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $( crate::space::hash_f32(self.$field, state); )+
                $( std::hash::Hash::hash(&self.$extra, state); )?
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                if *self == Self::default() {
                    return write!(f, "{} [ Empty ]", $label);
                }
                let parts = [$( format!("{}={:.2}", $name, self.$field) ),+];
                write!(f, "{} [ {} ]", $label, parts.join(", "))
            }
        }
    };
}

pub(crate) use color_components;

mod cie;
mod device;
mod kind;
mod rgb;

pub use cie::*;
pub use device::*;
pub use kind::*;
pub use rgb::*;
