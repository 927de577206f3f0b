//! Converter configuration.
//!
//! [`ConverterOptions`] fixes the reference whites of the CIE spaces, the
//! target working space of RGB output and the chromatic adaptation method.
//!
//! ```rust
//! use tincture_color::{AdaptationMethod, ConverterOptions};
//! use tincture_math::D50;
//! use tincture_primaries::PROPHOTO_RGB;
//!
//! let options = ConverterOptions::default()
//!     .with_working_space(PROPHOTO_RGB)
//!     .with_lab_white_point(D50)
//!     .with_adaptation(AdaptationMethod::Cat02);
//! assert_eq!(options.adaptation, Some(AdaptationMethod::Cat02));
//! ```

use std::fmt;
use std::str::FromStr;

use tincture_math::{
    BRADFORD, BRADFORD_INV, CAT02, CAT02_INV, D65, Mat3, VON_KRIES, VON_KRIES_INV, Vec3,
    XYZ_SCALING, XYZ_SCALING_INV,
};
use tincture_primaries::{SRGB, WorkingSpace};

use crate::{ColorError, ColorResult};

/// Cone response model used for chromatic adaptation and LMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AdaptationMethod {
    /// Bradford (Lam 1985).
    #[default]
    Bradford,
    /// Von Kries with Hunt-Pointer-Estevez cones.
    VonKries,
    /// CIECAM02 CAT02.
    Cat02,
    /// Plain XYZ scaling.
    XyzScaling,
}

impl AdaptationMethod {
    /// All methods.
    pub const ALL: [AdaptationMethod; 4] =
        [Self::Bradford, Self::VonKries, Self::Cat02, Self::XyzScaling];

    /// XYZ -> cone response matrix.
    pub fn matrix(self) -> Mat3 {
        match self {
            Self::Bradford => BRADFORD,
            Self::VonKries => VON_KRIES,
            Self::Cat02 => CAT02,
            Self::XyzScaling => XYZ_SCALING,
        }
    }

    /// Cone response -> XYZ matrix.
    pub fn inverse_matrix(self) -> Mat3 {
        match self {
            Self::Bradford => BRADFORD_INV,
            Self::VonKries => VON_KRIES_INV,
            Self::Cat02 => CAT02_INV,
            Self::XyzScaling => XYZ_SCALING_INV,
        }
    }
}

impl fmt::Display for AdaptationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bradford => "Bradford",
            Self::VonKries => "Von Kries",
            Self::Cat02 => "CAT02",
            Self::XyzScaling => "XYZ scaling",
        })
    }
}

impl FromStr for AdaptationMethod {
    type Err = ColorError;

    /// Parses a method name, ignoring case and punctuation.
    ///
    /// ```rust
    /// use tincture_color::AdaptationMethod;
    ///
    /// assert_eq!("von-kries".parse::<AdaptationMethod>().unwrap(), AdaptationMethod::VonKries);
    /// assert_eq!("CAT02".parse::<AdaptationMethod>().unwrap(), AdaptationMethod::Cat02);
    /// ```
    fn from_str(s: &str) -> ColorResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let method = match key.as_str() {
            "bradford" => Self::Bradford,
            "vonkries" | "hpe" => Self::VonKries,
            "cat02" => Self::Cat02,
            "xyzscaling" | "xyz" | "scaling" => Self::XyzScaling,
            _ => return Err(ColorError::UnknownAdaptation(s.to_string())),
        };
        Ok(method)
    }
}

/// Settings shared by every conversion a [`ColorConverter`](crate::ColorConverter)
/// performs.
///
/// White points are XYZ with Y = 1. All default to D65.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterOptions {
    /// Reference white of XYZ, xyY and LMS values.
    pub white_point: Vec3,
    /// Reference white of Lab and LCh(ab).
    pub lab_white_point: Vec3,
    /// Reference white of Luv and LCh(uv).
    pub luv_white_point: Vec3,
    /// Reference white of Hunter Lab.
    pub hunter_lab_white_point: Vec3,
    /// Working space of RGB and linear RGB output, and of the RGB that
    /// HSL, HSV, CMYK and YCbCr are defined over.
    #[cfg_attr(feature = "serde", serde(with = "working_space_name"))]
    pub working_space: WorkingSpace,
    /// Adaptation between differing whites; `None` passes XYZ through
    /// unchanged.
    pub adaptation: Option<AdaptationMethod>,
    /// Cone model of the LMS space.
    pub lms_transform: AdaptationMethod,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            white_point: D65,
            lab_white_point: D65,
            luv_white_point: D65,
            hunter_lab_white_point: D65,
            working_space: SRGB,
            adaptation: Some(AdaptationMethod::Bradford),
            lms_transform: AdaptationMethod::Bradford,
        }
    }
}

impl ConverterOptions {
    /// Sets the XYZ reference white.
    pub fn with_white_point(mut self, white: Vec3) -> Self {
        self.white_point = white;
        self
    }

    /// Sets the Lab / LCh(ab) reference white.
    pub fn with_lab_white_point(mut self, white: Vec3) -> Self {
        self.lab_white_point = white;
        self
    }

    /// Sets the Luv / LCh(uv) reference white.
    pub fn with_luv_white_point(mut self, white: Vec3) -> Self {
        self.luv_white_point = white;
        self
    }

    /// Sets the Hunter Lab reference white.
    pub fn with_hunter_lab_white_point(mut self, white: Vec3) -> Self {
        self.hunter_lab_white_point = white;
        self
    }

    /// Sets every reference white at once.
    pub fn with_all_white_points(self, white: Vec3) -> Self {
        self.with_white_point(white)
            .with_lab_white_point(white)
            .with_luv_white_point(white)
            .with_hunter_lab_white_point(white)
    }

    /// Sets the target working space.
    pub fn with_working_space(mut self, working_space: WorkingSpace) -> Self {
        self.working_space = working_space;
        self
    }

    /// Enables adaptation with the given method.
    pub fn with_adaptation(mut self, method: AdaptationMethod) -> Self {
        self.adaptation = Some(method);
        self
    }

    /// Disables chromatic adaptation.
    pub fn without_adaptation(mut self) -> Self {
        self.adaptation = None;
        self
    }

    /// Sets the LMS cone model.
    pub fn with_lms_transform(mut self, method: AdaptationMethod) -> Self {
        self.lms_transform = method;
        self
    }
}

/// Serializes working spaces by their registry name.
#[cfg(feature = "serde")]
mod working_space_name {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use tincture_primaries::WorkingSpace;

    pub fn serialize<S: Serializer>(ws: &WorkingSpace, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(ws.name)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<WorkingSpace, D::Error> {
        let name = String::deserialize(d)?;
        WorkingSpace::by_name(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown working space: {}", name)))
    }
}
