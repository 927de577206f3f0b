//! # tincture-color
//!
//! Conversion between fourteen color representations through a hub.
//!
//! Every value type converts to and from one [`Hub`] value: companded RGB
//! for the device-oriented spaces (HSL, HSV, CMYK, YCbCr), XYZ for the
//! colorimetric ones. Any ordered pair is then reachable through
//! [`ColorConverter::convert`], and whole buffers through
//! [`ColorConverter::convert_bulk`].
//!
//! # Architecture
//!
//! ```text
//!                tincture-color
//!                      |
//!         +------------+------------+
//!         |                         |
//!  tincture-primaries        tincture-transfer
//!         |                         |
//!         +------------+------------+
//!                      |
//!               tincture-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tincture_color::{CieLab, ColorConverter, ConverterOptions, Rgb};
//! use tincture_math::D50;
//! use tincture_primaries::ADOBE_RGB_1998;
//!
//! let conv = ColorConverter::with_options(
//!     ConverterOptions::default()
//!         .with_lab_white_point(D50)
//!         .with_working_space(ADOBE_RGB_1998),
//! );
//!
//! let lab: CieLab = conv.convert(Rgb::new(0.8, 0.2, 0.1));
//! let adobe = conv.to_rgb(lab);
//! assert_eq!(adobe.working_space(), ADOBE_RGB_1998);
//! ```
//!
//! # Color Spaces
//!
//! | Type | Components | Reference white | Hub |
//! |------|------------|-----------------|-----|
//! | [`Rgb`] | R, G, B | working space | RGB |
//! | [`LinearRgb`] | R, G, B | working space | linear RGB |
//! | [`CieXyz`] | X, Y, Z | `white_point` | XYZ |
//! | [`CieXyy`] | x, y, Y | `white_point` | XYZ |
//! | [`CieLab`], [`CieLch`] | L, a, b / L, C, h | `lab_white_point` | XYZ |
//! | [`CieLuv`], [`CieLchuv`] | L, u, v / L, C, h | `luv_white_point` | XYZ |
//! | [`HunterLab`] | L, a, b | `hunter_lab_white_point` | XYZ |
//! | [`Lms`] | L, M, S | `white_point` | XYZ |
//! | [`Hsl`], [`Hsv`], [`Cmyk`], [`YCbCr`] | | target working space | RGB |
//!
//! # Features
//!
//! - `parallel` (default) - rayon-backed bulk conversion
//! - `serde` - `Serialize`/`Deserialize` for [`ConverterOptions`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod bulk;
mod cache;
pub mod convert;
mod converter;
mod dynamic;
mod error;
mod options;
mod space;

pub use bulk::PARALLEL_THRESHOLD;
pub use cache::MatrixCache;
pub use convert::{ColorSpace, Hub};
pub use converter::ColorConverter;
pub use dynamic::AnyColor;
pub use error::{BufferRole, ColorError, ColorResult};
pub use options::{AdaptationMethod, ConverterOptions};
pub use space::*;

/// Re-export of the working space registry.
pub use tincture_primaries as primaries;
