//! # tincture-primaries
//!
//! RGB working spaces, and the matrices relating them to CIE XYZ.
//!
//! A [`WorkingSpace`] is defined by the chromaticities of its three
//! primaries, its reference white (as XYZ) and its [`Companding`] curve.
//! This crate holds the fixed registry of named working spaces and derives
//! the linear RGB <-> XYZ matrices from primaries, in double precision.
//!
//! # Included Working Spaces
//!
//! | Working Space | White | Companding |
//! |---------------|-------|------------|
//! | sRGB | D65 | sRGB |
//! | sRGB (simplified) | D65 | gamma 2.2 |
//! | Rec.709 | D65 | Rec.709 |
//! | Rec.2020 | D65 | Rec.2020 |
//! | ECI RGB v2 | D50 | L* |
//! | Adobe RGB (1998) | D65 | gamma 2.2 |
//! | Apple sRGB | D65 | gamma 1.8 |
//! | Best RGB | D50 | gamma 2.2 |
//! | Beta RGB | D50 | gamma 2.2 |
//! | Bruce RGB | D65 | gamma 2.2 |
//! | CIE RGB | E | gamma 2.2 |
//! | ColorMatch RGB | D50 | gamma 1.8 |
//! | Don RGB 4 | D50 | gamma 2.2 |
//! | Ekta Space PS5 | D50 | gamma 2.2 |
//! | NTSC RGB | C | gamma 2.2 |
//! | PAL/SECAM RGB | D65 | gamma 2.2 |
//! | ProPhoto RGB | D50 | gamma 1.8 |
//! | SMPTE-C RGB | D65 | gamma 2.2 |
//! | Wide Gamut RGB | D50 | gamma 2.2 |
//!
//! # Usage
//!
//! ```rust
//! use glam::DVec3;
//! use tincture_primaries::{SRGB, rgb_to_xyz_matrix};
//!
//! let m = rgb_to_xyz_matrix(&SRGB);
//! let red = m * DVec3::X;
//! assert!((red.x - 0.4124).abs() < 1e-3);
//! ```
//!
//! # Used By
//!
//! - `tincture-color` - RGB-family conversions and the matrix cache

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod matrix;
mod space;

pub use matrix::*;
pub use space::*;

pub use tincture_transfer::Companding;
