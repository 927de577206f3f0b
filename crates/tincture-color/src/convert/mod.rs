//! Conversion math and hub dispatch.
//!
//! Each submodule holds the direct formulas between one family of value
//! types and its hub: XYZ for the colorimetric spaces, RGB for HSL, HSV,
//! CMYK and YCbCr. [`ColorSpace`] ties every type to a [`Hub`] value with two
//! total functions, so any ordered pair converts as
//! `D::from_hub(S::to_hub(s))`.
//!
//! # Routing
//!
//! ```text
//!  Hsl  Hsv  Cmyk  YCbCr          xyY  Lab  LCh  Luv  LChuv  Hunter  LMS
//!    \    \    |    /                \    |    |    |    /      |     /
//!     +---- Rgb ----+-- LinearRgb -------------- XYZ ------------+----+
//!            companding       working-space matrix + adaptation
//! ```

pub mod cmyk;
pub mod hexcone;
pub mod hunter;
pub mod lab;
pub mod luv;
pub mod polar;
pub mod rgb;
pub mod xyy;
pub mod ycbcr;

use tincture_math::Vec3;
use tincture_primaries::WorkingSpace;

use crate::{
    CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, ColorConverter, Hsl, Hsv, HunterLab,
    LinearRgb, Lms, Rgb, SpaceKind, YCbCr,
};

/// Intermediate value every conversion passes through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hub {
    /// Companded RGB; device types and RGB itself.
    Rgb(Rgb),
    /// Linear RGB.
    LinearRgb(LinearRgb),
    /// XYZ relative to the converter's `white_point`, held in f64.
    Xyz(CieXyz),
}

impl Hub {
    /// Resolves to XYZ relative to the converter's `white_point`.
    pub fn into_xyz(self, conv: &ColorConverter) -> CieXyz {
        match self {
            Hub::Rgb(c) => Hub::LinearRgb(rgb::linearize(c)).into_xyz(conv),
            Hub::LinearRgb(c) => {
                let space = c.working_space();
                let xyz = rgb::linear_to_xyz(c, &conv.rgb_matrices(&space));
                conv.adapt(xyz, space.white, conv.options().white_point)
            }
            Hub::Xyz(xyz) => xyz,
        }
    }

    /// Resolves to linear RGB in `space`.
    ///
    /// RGB input in another working space is adapted directly from its white
    /// to the white of `space`.
    pub fn into_linear_rgb(self, conv: &ColorConverter, space: WorkingSpace) -> LinearRgb {
        match self {
            Hub::Rgb(c) => Hub::LinearRgb(rgb::linearize(c)).into_linear_rgb(conv, space),
            Hub::LinearRgb(c) if c.working_space() == space => c,
            Hub::LinearRgb(c) => {
                let src = c.working_space();
                let xyz = rgb::linear_to_xyz(c, &conv.rgb_matrices(&src));
                let xyz = conv.adapt(xyz, src.white, space.white);
                rgb::xyz_to_linear(xyz, space, &conv.rgb_matrices(&space))
            }
            Hub::Xyz(xyz) => {
                let xyz = conv.adapt(xyz, conv.options().white_point, space.white);
                rgb::xyz_to_linear(xyz, space, &conv.rgb_matrices(&space))
            }
        }
    }

    /// Resolves to companded RGB in `space`. RGB already in `space` is
    /// returned unchanged.
    pub fn into_rgb(self, conv: &ColorConverter, space: WorkingSpace) -> Rgb {
        match self {
            Hub::Rgb(c) if c.working_space() == space => c,
            other => rgb::delinearize(other.into_linear_rgb(conv, space)),
        }
    }
}

/// A color value type reachable through the hub.
pub trait ColorSpace: Copy + Send + Sync + 'static {
    /// Runtime identifier of the type.
    const KIND: SpaceKind;

    /// Converts to the hub.
    fn to_hub(self, conv: &ColorConverter) -> Hub;

    /// Converts from the hub.
    fn from_hub(hub: Hub, conv: &ColorConverter) -> Self;
}

impl ColorSpace for Rgb {
    const KIND: SpaceKind = SpaceKind::Rgb;

    fn to_hub(self, _: &ColorConverter) -> Hub {
        Hub::Rgb(self)
    }

    fn from_hub(hub: Hub, conv: &ColorConverter) -> Self {
        hub.into_rgb(conv, conv.options().working_space)
    }
}

impl ColorSpace for LinearRgb {
    const KIND: SpaceKind = SpaceKind::LinearRgb;

    fn to_hub(self, _: &ColorConverter) -> Hub {
        Hub::LinearRgb(self)
    }

    fn from_hub(hub: Hub, conv: &ColorConverter) -> Self {
        hub.into_linear_rgb(conv, conv.options().working_space)
    }
}

impl ColorSpace for CieXyz {
    const KIND: SpaceKind = SpaceKind::CieXyz;

    fn to_hub(self, _: &ColorConverter) -> Hub {
        Hub::Xyz(self)
    }

    fn from_hub(hub: Hub, conv: &ColorConverter) -> Self {
        hub.into_xyz(conv)
    }
}

impl ColorSpace for CieXyy {
    const KIND: SpaceKind = SpaceKind::CieXyy;

    fn to_hub(self, _: &ColorConverter) -> Hub {
        Hub::Xyz(xyy::to_xyz(self))
    }

    fn from_hub(hub: Hub, conv: &ColorConverter) -> Self {
        xyy::from_xyz(hub.into_xyz(conv), conv.options().white_point)
    }
}

impl ColorSpace for CieLab {
    const KIND: SpaceKind = SpaceKind::CieLab;

    fn to_hub(self, conv: &ColorConverter) -> Hub {
        let white = conv.options().lab_white_point;
        Hub::Xyz(conv.adapt(lab::to_xyz(self, white), white, conv.options().white_point))
    }

    fn from_hub(hub: Hub, conv: &ColorConverter) -> Self {
        let white = conv.options().lab_white_point;
        let xyz = conv.adapt(hub.into_xyz(conv), conv.options().white_point, white);
        lab::from_xyz(xyz, white)
    }
}

impl ColorSpace for CieLch {
    const KIND: SpaceKind = SpaceKind::CieLch;

    fn to_hub(self, conv: &ColorConverter) -> Hub {
        polar::lch_to_lab(self).to_hub(conv)
    }

    fn from_hub(hub: Hub, conv: &ColorConverter) -> Self {
        polar::lab_to_lch(CieLab::from_hub(hub, conv))
    }
}

impl ColorSpace for CieLuv {
    const KIND: SpaceKind = SpaceKind::CieLuv;

    fn to_hub(self, conv: &ColorConverter) -> Hub {
        let white = conv.options().luv_white_point;
        Hub::Xyz(conv.adapt(luv::to_xyz(self, white), white, conv.options().white_point))
    }

    fn from_hub(hub: Hub, conv: &ColorConverter) -> Self {
        let white = conv.options().luv_white_point;
        let xyz = conv.adapt(hub.into_xyz(conv), conv.options().white_point, white);
        luv::from_xyz(xyz, white)
    }
}

impl ColorSpace for CieLchuv {
    const KIND: SpaceKind = SpaceKind::CieLchuv;

    fn to_hub(self, conv: &ColorConverter) -> Hub {
        polar::lchuv_to_luv(self).to_hub(conv)
    }

    fn from_hub(hub: Hub, conv: &ColorConverter) -> Self {
        polar::luv_to_lchuv(CieLuv::from_hub(hub, conv))
    }
}

impl ColorSpace for HunterLab {
    const KIND: SpaceKind = SpaceKind::HunterLab;

    fn to_hub(self, conv: &ColorConverter) -> Hub {
        let white = conv.options().hunter_lab_white_point;
        Hub::Xyz(conv.adapt(hunter::to_xyz(self, white), white, conv.options().white_point))
    }

    fn from_hub(hub: Hub, conv: &ColorConverter) -> Self {
        let white = conv.options().hunter_lab_white_point;
        let xyz = conv.adapt(hub.into_xyz(conv), conv.options().white_point, white);
        hunter::from_xyz(xyz, white)
    }
}

impl ColorSpace for Lms {
    const KIND: SpaceKind = SpaceKind::Lms;

    fn to_hub(self, conv: &ColorConverter) -> Hub {
        let m = conv.options().lms_transform.inverse_matrix().to_dmat3();
        Hub::Xyz(CieXyz::from_dvec3(m * self.to_vec3().to_dvec3()))
    }

    fn from_hub(hub: Hub, conv: &ColorConverter) -> Self {
        let m = conv.options().lms_transform.matrix().to_dmat3();
        Lms::from_vec3(Vec3::from_dvec3(m * hub.into_xyz(conv).to_dvec3()))
    }
}

macro_rules! rgb_based {
    ($ty:ident, $kind:ident, $to_rgb:path, $from_rgb:path) => {
        impl ColorSpace for $ty {
            const KIND: SpaceKind = SpaceKind::$kind;

            fn to_hub(self, conv: &ColorConverter) -> Hub {
                Hub::Rgb($to_rgb(self, conv.options().working_space))
            }

            fn from_hub(hub: Hub, conv: &ColorConverter) -> Self {
                $from_rgb(hub.into_rgb(conv, conv.options().working_space))
            }
        }
    };
}

rgb_based!(Hsl, Hsl, hexcone::hsl_to_rgb, hexcone::rgb_to_hsl);
rgb_based!(Hsv, Hsv, hexcone::hsv_to_rgb, hexcone::rgb_to_hsv);
rgb_based!(Cmyk, Cmyk, cmyk::cmyk_to_rgb, cmyk::rgb_to_cmyk);
rgb_based!(YCbCr, YCbCr, ycbcr::ycbcr_to_rgb, ycbcr::rgb_to_ycbcr);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConverterOptions;
    use tincture_math::{D50, D65};
    use tincture_primaries::{ADOBE_RGB_1998, PROPHOTO_RGB, SRGB};

    #[test]
    fn test_same_space_rgb_is_untouched() {
        let conv = ColorConverter::new();
        let c = Rgb::new(0.123, 0.456, 0.789);
        assert_eq!(Hub::Rgb(c).into_rgb(&conv, SRGB), c);
    }

    #[test]
    fn test_xyz_into_rgb_adapts_to_space_white() {
        let conv = ColorConverter::new();
        // D65 white lands on ProPhoto (D50) white
        let rgb = Hub::Xyz(CieXyz::from_vec3(D65)).into_linear_rgb(&conv, PROPHOTO_RGB);
        assert!(rgb.to_vec3().approx_eq(tincture_math::Vec3::ONE, 1e-3), "{:?}", rgb);
    }

    #[test]
    fn test_cross_space_rgb_keeps_white() {
        let conv = ColorConverter::new();
        let white = Rgb::with_working_space(1.0, 1.0, 1.0, ADOBE_RGB_1998);
        let out = Hub::Rgb(white).into_rgb(&conv, PROPHOTO_RGB);
        assert_eq!(out.working_space(), PROPHOTO_RGB);
        assert!(out.to_vec3().approx_eq(tincture_math::Vec3::ONE, 1e-3), "{:?}", out);
    }

    #[test]
    fn test_lab_white_differs_from_xyz_white() {
        let conv = ColorConverter::with_options(ConverterOptions::default().with_lab_white_point(D50));
        let lab: CieLab = conv.convert(CieXyz::from_vec3(D65));
        assert!((lab.l() - 100.0).abs() < 1e-2);
        assert!(lab.a().abs() < 1e-2 && lab.b().abs() < 1e-2, "{}", lab);
    }
}
