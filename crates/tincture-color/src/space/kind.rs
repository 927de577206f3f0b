//! Runtime identifiers for the supported color spaces.

use std::fmt;
use std::str::FromStr;

use crate::{ColorError, ColorResult};

/// One of the fourteen color representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpaceKind {
    /// Companded RGB in a working space.
    Rgb,
    /// Linear RGB in a working space.
    LinearRgb,
    /// CIE 1931 XYZ.
    CieXyz,
    /// CIE xyY.
    CieXyy,
    /// CIE 1976 L*a*b*.
    CieLab,
    /// Polar form of L*a*b*.
    CieLch,
    /// CIE 1976 L*u*v*.
    CieLuv,
    /// Polar form of L*u*v*.
    CieLchuv,
    /// Hunter 1948 Lab.
    HunterLab,
    /// Cone response space.
    Lms,
    /// Hue, saturation, lightness.
    Hsl,
    /// Hue, saturation, value.
    Hsv,
    /// Subtractive cyan, magenta, yellow, key.
    Cmyk,
    /// BT.601 full range luma/chroma.
    YCbCr,
}

impl SpaceKind {
    /// Every kind, in declaration order.
    pub const ALL: [SpaceKind; 14] = [
        Self::Rgb,
        Self::LinearRgb,
        Self::CieXyz,
        Self::CieXyy,
        Self::CieLab,
        Self::CieLch,
        Self::CieLuv,
        Self::CieLchuv,
        Self::HunterLab,
        Self::Lms,
        Self::Hsl,
        Self::Hsv,
        Self::Cmyk,
        Self::YCbCr,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::LinearRgb => "Linear RGB",
            Self::CieXyz => "XYZ",
            Self::CieXyy => "xyY",
            Self::CieLab => "Lab",
            Self::CieLch => "LCh",
            Self::CieLuv => "Luv",
            Self::CieLchuv => "LChuv",
            Self::HunterLab => "Hunter Lab",
            Self::Lms => "LMS",
            Self::Hsl => "HSL",
            Self::Hsv => "HSV",
            Self::Cmyk => "CMYK",
            Self::YCbCr => "YCbCr",
        }
    }

    /// Names of the components, in storage order.
    pub fn component_names(self) -> &'static [&'static str] {
        match self {
            Self::Rgb | Self::LinearRgb => &["R", "G", "B"],
            Self::CieXyz => &["X", "Y", "Z"],
            Self::CieXyy => &["x", "y", "Y"],
            Self::CieLab | Self::HunterLab => &["L", "a", "b"],
            Self::CieLch | Self::CieLchuv => &["L", "C", "h"],
            Self::CieLuv => &["L", "u", "v"],
            Self::Lms => &["L", "M", "S"],
            Self::Hsl => &["H", "S", "L"],
            Self::Hsv => &["H", "S", "V"],
            Self::Cmyk => &["C", "M", "Y", "K"],
            Self::YCbCr => &["Y", "Cb", "Cr"],
        }
    }

    /// Number of components.
    pub fn component_count(self) -> usize {
        self.component_names().len()
    }

    /// True for RGB and linear RGB, the kinds that carry a working space.
    pub fn is_rgb_family(self) -> bool {
        matches!(self, Self::Rgb | Self::LinearRgb)
    }
}

impl fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpaceKind {
    type Err = ColorError;

    /// Parses a kind, ignoring case and punctuation.
    ///
    /// ```rust
    /// use tincture_color::SpaceKind;
    ///
    /// assert_eq!("linear-rgb".parse::<SpaceKind>().unwrap(), SpaceKind::LinearRgb);
    /// assert_eq!("L*a*b*".parse::<SpaceKind>().unwrap(), SpaceKind::CieLab);
    /// ```
    fn from_str(s: &str) -> ColorResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let kind = match key.as_str() {
            "rgb" | "srgb" => Self::Rgb,
            "linearrgb" | "linear" | "linrgb" => Self::LinearRgb,
            "xyz" | "ciexyz" => Self::CieXyz,
            "xyy" | "ciexyy" => Self::CieXyy,
            "lab" | "cielab" => Self::CieLab,
            "lch" | "lchab" | "cielch" | "cielchab" => Self::CieLch,
            "luv" | "cieluv" => Self::CieLuv,
            "lchuv" | "cielchuv" => Self::CieLchuv,
            "hunterlab" | "hlab" => Self::HunterLab,
            "lms" => Self::Lms,
            "hsl" => Self::Hsl,
            "hsv" | "hsb" => Self::Hsv,
            "cmyk" => Self::Cmyk,
            "ycbcr" | "ycc" => Self::YCbCr,
            _ => return Err(ColorError::UnknownSpace(s.to_string())),
        };
        Ok(kind)
    }
}
