//! The conversion facade.

use std::sync::Arc;

use tincture_math::{Vec3, same_white};
use tincture_primaries::{RgbMatrices, WorkingSpace};

use crate::{
    CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, ColorSpace, ConverterOptions, Hsl,
    Hsv, HunterLab, LinearRgb, Lms, MatrixCache, Rgb, YCbCr,
};

/// Converts colors between any two supported spaces.
///
/// Cheap to clone: options are copied and the [`MatrixCache`] is shared.
///
/// # Example
///
/// ```rust
/// use tincture_color::{ColorConverter, Hsl, Rgb};
///
/// let conv = ColorConverter::new();
/// let xyz = conv.to_cie_xyz(Rgb::new(1.0, 0.0, 0.0));
/// assert!((xyz.x() - 0.4124).abs() < 1e-3);
///
/// let hsl: Hsl = conv.convert(Rgb::new(1.0, 0.0, 0.0));
/// assert_eq!((hsl.h(), hsl.s(), hsl.l()), (0.0, 1.0, 0.5));
/// ```
#[derive(Debug, Clone)]
pub struct ColorConverter {
    options: ConverterOptions,
    cache: Arc<MatrixCache>,
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter {
    /// Creates a converter with default options and the global cache.
    pub fn new() -> Self {
        Self::with_options(ConverterOptions::default())
    }

    /// Creates a converter with the given options and the global cache.
    pub fn with_options(options: ConverterOptions) -> Self {
        Self::with_cache(options, MatrixCache::global())
    }

    /// Creates a converter backed by a caller-owned cache.
    pub fn with_cache(options: ConverterOptions, cache: Arc<MatrixCache>) -> Self {
        Self { options, cache }
    }

    /// The options in effect.
    #[inline]
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// The backing matrix cache.
    #[inline]
    pub fn cache(&self) -> &Arc<MatrixCache> {
        &self.cache
    }

    /// Converts a color to another space.
    #[inline]
    pub fn convert<S: ColorSpace, D: ColorSpace>(&self, color: S) -> D {
        D::from_hub(color.to_hub(self), self)
    }

    /// RGB <-> XYZ matrices of a working space, from the cache.
    #[inline]
    pub fn rgb_matrices(&self, space: &WorkingSpace) -> RgbMatrices {
        self.cache.rgb_matrices(space)
    }

    /// Adapts XYZ from one reference white to another.
    ///
    /// Returns the input untouched when the whites are equal within
    /// [`tincture_math::WHITE_POINT_EPSILON`] or adaptation is disabled.
    pub fn adapt(&self, xyz: CieXyz, from: Vec3, to: Vec3) -> CieXyz {
        let Some(method) = self.options.adaptation else {
            return xyz;
        };
        if same_white(from, to) {
            return xyz;
        }
        let m = self.cache.adaptation_matrix(method, from, to);
        CieXyz::from_dvec3(m * xyz.to_dvec3())
    }

    /// Converts to RGB in the target working space.
    pub fn to_rgb<S: ColorSpace>(&self, color: S) -> Rgb {
        self.convert(color)
    }

    /// Converts to linear RGB in the target working space.
    pub fn to_linear_rgb<S: ColorSpace>(&self, color: S) -> LinearRgb {
        self.convert(color)
    }

    /// Converts to XYZ relative to `white_point`.
    pub fn to_cie_xyz<S: ColorSpace>(&self, color: S) -> CieXyz {
        self.convert(color)
    }

    /// Converts to xyY.
    pub fn to_cie_xyy<S: ColorSpace>(&self, color: S) -> CieXyy {
        self.convert(color)
    }

    /// Converts to Lab relative to `lab_white_point`.
    pub fn to_cie_lab<S: ColorSpace>(&self, color: S) -> CieLab {
        self.convert(color)
    }

    /// Converts to LCh(ab).
    pub fn to_cie_lch<S: ColorSpace>(&self, color: S) -> CieLch {
        self.convert(color)
    }

    /// Converts to Luv relative to `luv_white_point`.
    pub fn to_cie_luv<S: ColorSpace>(&self, color: S) -> CieLuv {
        self.convert(color)
    }

    /// Converts to LCh(uv).
    pub fn to_cie_lchuv<S: ColorSpace>(&self, color: S) -> CieLchuv {
        self.convert(color)
    }

    /// Converts to Hunter Lab relative to `hunter_lab_white_point`.
    pub fn to_hunter_lab<S: ColorSpace>(&self, color: S) -> HunterLab {
        self.convert(color)
    }

    /// Converts to LMS.
    pub fn to_lms<S: ColorSpace>(&self, color: S) -> Lms {
        self.convert(color)
    }

    /// Converts to HSL.
    pub fn to_hsl<S: ColorSpace>(&self, color: S) -> Hsl {
        self.convert(color)
    }

    /// Converts to HSV.
    pub fn to_hsv<S: ColorSpace>(&self, color: S) -> Hsv {
        self.convert(color)
    }

    /// Converts to CMYK.
    pub fn to_cmyk<S: ColorSpace>(&self, color: S) -> Cmyk {
        self.convert(color)
    }

    /// Converts to YCbCr.
    pub fn to_ycbcr<S: ColorSpace>(&self, color: S) -> YCbCr {
        self.convert(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdaptationMethod;
    use approx::assert_abs_diff_eq;
    use tincture_math::{D50, D65};
    use tincture_primaries::{ADOBE_RGB_1998, PROPHOTO_RGB, SRGB, SRGB_SIMPLIFIED};

    #[test]
    fn test_srgb_red_to_xyz_and_back() {
        let conv = ColorConverter::new();
        let xyz = conv.to_cie_xyz(Rgb::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(xyz.x(), 0.4124, epsilon = 1e-3);
        assert_abs_diff_eq!(xyz.y(), 0.2126, epsilon = 1e-3);
        assert_abs_diff_eq!(xyz.z(), 0.0193, epsilon = 1e-3);

        let back = conv.to_rgb(xyz);
        assert_abs_diff_eq!(back.r(), 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(back.g(), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(back.b(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_rgb_roundtrip_every_space() {
        // Gamut corners and edge midpoints: zero channels are where a
        // lossy XYZ leg shows up after re-encoding.
        const LEVELS: [f32; 3] = [0.0, 0.5, 1.0];
        for space in WorkingSpace::ALL {
            let conv = ColorConverter::with_options(
                ConverterOptions::default().with_working_space(space),
            );
            for r in LEVELS {
                for g in LEVELS {
                    for b in LEVELS {
                        let rgb = Rgb::with_working_space(r, g, b, space);
                        let back = conv.to_rgb(conv.to_cie_xyz(rgb));
                        assert!(
                            back.to_vec3().approx_eq(rgb.to_vec3(), 1e-4),
                            "{}: {} -> {}",
                            space,
                            rgb,
                            back
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_d50_space_survives_double_adaptation() {
        // ProPhoto is D50 and the hub is D65: XYZ is adapted out and back.
        let conv = ColorConverter::with_options(
            ConverterOptions::default().with_working_space(PROPHOTO_RGB),
        );
        let rgb = Rgb::with_working_space(0.0, 0.0, 1.0, PROPHOTO_RGB);
        let back = conv.to_rgb(conv.to_cie_xyz(rgb));
        assert_abs_diff_eq!(back.r(), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(back.g(), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(back.b(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_adaptation_fast_path_is_bit_identical() {
        // sRGB and Adobe RGB share D65
        let on = ColorConverter::with_options(
            ConverterOptions::default().with_working_space(ADOBE_RGB_1998),
        );
        let off = ColorConverter::with_options(
            ConverterOptions::default()
                .with_working_space(ADOBE_RGB_1998)
                .without_adaptation(),
        );
        let rgb = Rgb::new(0.3, 0.6, 0.2);
        let a = on.to_rgb(rgb);
        let b = off.to_rgb(rgb);
        assert_eq!(a.to_vec3().to_array().map(f32::to_bits), b.to_vec3().to_array().map(f32::to_bits));
    }

    #[test]
    fn test_same_white_adapt_returns_input() {
        let conv = ColorConverter::new();
        let xyz = CieXyz::new(0.1, 0.2, 0.3);
        assert_eq!(conv.adapt(xyz, D65, D65), xyz);
    }

    #[test]
    fn test_disabled_adaptation_passes_xyz() {
        let conv = ColorConverter::with_options(ConverterOptions::default().without_adaptation());
        let xyz = CieXyz::new(0.1, 0.2, 0.3);
        assert_eq!(conv.adapt(xyz, D65, D50), xyz);
    }

    #[test]
    fn test_d65_white_adapts_to_d50() {
        for method in AdaptationMethod::ALL {
            let conv = ColorConverter::with_options(ConverterOptions::default().with_adaptation(method));
            let out = conv.adapt(CieXyz::from_vec3(D65), D65, D50);
            assert!(out.to_vec3().approx_eq(D50, 1e-4), "{}: {}", method, out);
        }
    }

    #[test]
    fn test_white_across_working_spaces() {
        let conv = ColorConverter::with_options(
            ConverterOptions::default().with_working_space(PROPHOTO_RGB),
        );
        let white = conv.to_rgb(Rgb::new(1.0, 1.0, 1.0));
        assert_eq!(white.working_space(), PROPHOTO_RGB);
        assert!(white.to_vec3().approx_eq(Vec3::ONE, 1e-3), "{}", white);
    }

    #[test]
    fn test_rgb_to_hsl_concrete() {
        let conv = ColorConverter::new();
        let hsl = conv.to_hsl(Rgb::new(1.0, 0.0, 0.0));
        assert_eq!((hsl.h(), hsl.s(), hsl.l()), (0.0, 1.0, 0.5));
    }

    #[test]
    fn test_device_types_stay_off_xyz_in_target_space() {
        // HSL -> RGB in the target space is pure hexcone math
        let conv = ColorConverter::with_options(
            ConverterOptions::default().with_working_space(SRGB_SIMPLIFIED),
        );
        let rgb = conv.to_rgb(Hsl::new(120.0, 1.0, 0.5));
        assert_eq!(rgb, Rgb::with_working_space(0.0, 1.0, 0.0, SRGB_SIMPLIFIED));
    }

    #[test]
    fn test_lab_white_maps_to_l100() {
        let conv = ColorConverter::new();
        let lab = conv.to_cie_lab(Rgb::new(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(lab.l(), 100.0, epsilon = 1e-2);
        let hunter = conv.to_hunter_lab(Rgb::new(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(hunter.l(), 100.0, epsilon = 1e-2);
        let luv = conv.to_cie_luv(Rgb::new(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(luv.l(), 100.0, epsilon = 1e-2);
    }

    #[test]
    fn test_lms_roundtrip() {
        let conv = ColorConverter::new();
        let xyz = CieXyz::new(0.3, 0.4, 0.5);
        let back = conv.to_cie_xyz(conv.to_lms(xyz));
        assert!(back.to_vec3().approx_eq(xyz.to_vec3(), 1e-4), "{}", back);
    }

    #[test]
    fn test_lch_via_lab() {
        let conv = ColorConverter::new();
        let lch = conv.to_cie_lch(Rgb::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(lch.l(), 53.24, epsilon = 0.05);
        assert_abs_diff_eq!(lch.c(), 104.55, epsilon = 0.1);
        assert_abs_diff_eq!(lch.h(), 40.0, epsilon = 0.1);
    }

    #[test]
    fn test_private_cache() {
        let cache = Arc::new(MatrixCache::new());
        let conv = ColorConverter::with_cache(ConverterOptions::default(), Arc::clone(&cache));
        conv.to_cie_xyz(Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(cache.rgb_len(), 1);
        assert!(conv.cache().rgb_len() >= 1);
        assert_eq!(conv.options().working_space, SRGB);
    }
}
