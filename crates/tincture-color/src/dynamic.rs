//! Runtime-typed colors.
//!
//! [`AnyColor`] holds a value of any of the fourteen types, for callers that
//! only learn the source and destination spaces at run time (command-line
//! tools, config files).
//!
//! ```rust
//! use tincture_color::{AnyColor, ColorConverter, SpaceKind};
//! use tincture_primaries::SRGB;
//!
//! let red = AnyColor::from_components(SpaceKind::Rgb, &[1.0, 0.0, 0.0], SRGB).unwrap();
//! let hsl = ColorConverter::new().convert_any(red, SpaceKind::Hsl);
//! assert_eq!(hsl.components(), vec![0.0, 1.0, 0.5]);
//! ```

use std::fmt;

use tincture_math::Vec3;
use tincture_primaries::WorkingSpace;

use crate::{
    CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, ColorConverter, ColorError,
    ColorResult, ColorSpace, Hsl, Hsv, Hub, HunterLab, LinearRgb, Lms, Rgb, SpaceKind, YCbCr,
};

macro_rules! any_color {
    ($($variant:ident($ty:ident)),+ $(,)?) => {
        /// A color of any supported type.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum AnyColor {
            $(
                #[doc = concat!("A [`", stringify!($ty), "`].")]
                $variant($ty),
            )+
        }

        impl AnyColor {
            /// The space of the held value.
            pub fn kind(&self) -> SpaceKind {
                match self {
                    $( Self::$variant(_) => <$ty as ColorSpace>::KIND, )+
                }
            }

            fn to_hub(self, conv: &ColorConverter) -> Hub {
                match self {
                    $( Self::$variant(c) => c.to_hub(conv), )+
                }
            }

            fn from_hub(kind: SpaceKind, hub: Hub, conv: &ColorConverter) -> Self {
                match kind {
                    $( SpaceKind::$variant => Self::$variant(<$ty as ColorSpace>::from_hub(hub, conv)), )+
                }
            }
        }

        impl fmt::Display for AnyColor {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Self::$variant(c) => fmt::Display::fmt(c, f), )+
                }
            }
        }

        $(
            impl From<$ty> for AnyColor {
                fn from(c: $ty) -> Self {
                    Self::$variant(c)
                }
            }
        )+
    };
}

any_color!(
    Rgb(Rgb),
    LinearRgb(LinearRgb),
    CieXyz(CieXyz),
    CieXyy(CieXyy),
    CieLab(CieLab),
    CieLch(CieLch),
    CieLuv(CieLuv),
    CieLchuv(CieLchuv),
    HunterLab(HunterLab),
    Lms(Lms),
    Hsl(Hsl),
    Hsv(Hsv),
    Cmyk(Cmyk),
    YCbCr(YCbCr),
);

impl AnyColor {
    /// Builds a color from raw components.
    ///
    /// `working_space` applies to RGB and linear RGB only. Components are
    /// clamped as the typed constructors do.
    pub fn from_components(
        kind: SpaceKind,
        components: &[f32],
        working_space: WorkingSpace,
    ) -> ColorResult<Self> {
        let expected = kind.component_count();
        if components.len() != expected {
            return Err(ColorError::ComponentCount {
                kind,
                expected,
                got: components.len(),
            });
        }

        let c = components;
        let v = || Vec3::new(c[0], c[1], c[2]);
        let color = match kind {
            SpaceKind::Rgb => Self::Rgb(Rgb::from_vec3(v(), working_space)),
            SpaceKind::LinearRgb => Self::LinearRgb(LinearRgb::from_vec3(v(), working_space)),
            SpaceKind::CieXyz => Self::CieXyz(CieXyz::from_vec3(v())),
            SpaceKind::CieXyy => Self::CieXyy(CieXyy::from_vec3(v())),
            SpaceKind::CieLab => Self::CieLab(CieLab::from_vec3(v())),
            SpaceKind::CieLch => Self::CieLch(CieLch::from_vec3(v())),
            SpaceKind::CieLuv => Self::CieLuv(CieLuv::from_vec3(v())),
            SpaceKind::CieLchuv => Self::CieLchuv(CieLchuv::from_vec3(v())),
            SpaceKind::HunterLab => Self::HunterLab(HunterLab::from_vec3(v())),
            SpaceKind::Lms => Self::Lms(Lms::from_vec3(v())),
            SpaceKind::Hsl => Self::Hsl(Hsl::from_vec3(v())),
            SpaceKind::Hsv => Self::Hsv(Hsv::from_vec3(v())),
            SpaceKind::Cmyk => Self::Cmyk(Cmyk::new(c[0], c[1], c[2], c[3])),
            SpaceKind::YCbCr => Self::YCbCr(YCbCr::from_vec3(v())),
        };
        Ok(color)
    }

    /// Components in storage order.
    pub fn components(&self) -> Vec<f32> {
        match self {
            Self::Cmyk(c) => c.to_array().to_vec(),
            Self::Rgb(c) => c.to_vec3().to_array().to_vec(),
            Self::LinearRgb(c) => c.to_vec3().to_array().to_vec(),
            Self::CieXyz(c) => c.to_vec3().to_array().to_vec(),
            Self::CieXyy(c) => c.to_vec3().to_array().to_vec(),
            Self::CieLab(c) => c.to_vec3().to_array().to_vec(),
            Self::CieLch(c) => c.to_vec3().to_array().to_vec(),
            Self::CieLuv(c) => c.to_vec3().to_array().to_vec(),
            Self::CieLchuv(c) => c.to_vec3().to_array().to_vec(),
            Self::HunterLab(c) => c.to_vec3().to_array().to_vec(),
            Self::Lms(c) => c.to_vec3().to_array().to_vec(),
            Self::Hsl(c) => c.to_vec3().to_array().to_vec(),
            Self::Hsv(c) => c.to_vec3().to_array().to_vec(),
            Self::YCbCr(c) => c.to_vec3().to_array().to_vec(),
        }
    }
}

impl ColorConverter {
    /// Converts a runtime-typed color to the given space.
    pub fn convert_any(&self, color: AnyColor, kind: SpaceKind) -> AnyColor {
        AnyColor::from_hub(kind, color.to_hub(self), self)
    }
}
