//! RGB family: companded and linear RGB tied to a working space.

use tincture_math::Vec3;
use tincture_primaries::{SRGB, WorkingSpace};

use super::{clamp01, color_components};

/// Companded RGB in a working space, channels in [0, 1].
///
/// ```rust
/// use tincture_color::Rgb;
///
/// let c = Rgb::new(1.5, 0.5, -0.3);
/// assert_eq!((c.r(), c.g(), c.b()), (1.0, 0.5, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    r: f32,
    g: f32,
    b: f32,
    working_space: WorkingSpace,
}

color_components!(Rgb, "Rgb", [r => "R", g => "G", b => "B"], working_space);

impl Rgb {
    /// Creates an sRGB color.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self::with_working_space(r, g, b, SRGB)
    }

    /// Creates a color in the given working space.
    pub fn with_working_space(r: f32, g: f32, b: f32, working_space: WorkingSpace) -> Self {
        Self {
            r: clamp01(r),
            g: clamp01(g),
            b: clamp01(b),
            working_space,
        }
    }

    /// Creates an sRGB color from 8-bit channels.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Creates from a vector (x=R, y=G, z=B).
    pub fn from_vec3(v: Vec3, working_space: WorkingSpace) -> Self {
        Self::with_working_space(v.x, v.y, v.z, working_space)
    }

    /// Quantizes to 8-bit channels, rounding to nearest.
    pub fn to_u8(&self) -> [u8; 3] {
        let q = |v: f32| (v * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Components as a vector.
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// The working space the channels are expressed in.
    pub fn working_space(&self) -> WorkingSpace {
        self.working_space
    }
}

/// Linear-light RGB in a working space, channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    r: f32,
    g: f32,
    b: f32,
    working_space: WorkingSpace,
}

color_components!(LinearRgb, "LinearRgb", [r => "R", g => "G", b => "B"], working_space);

impl LinearRgb {
    /// Creates a linear sRGB color.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self::with_working_space(r, g, b, SRGB)
    }

    /// Creates a color in the given working space.
    pub fn with_working_space(r: f32, g: f32, b: f32, working_space: WorkingSpace) -> Self {
        Self {
            r: clamp01(r),
            g: clamp01(g),
            b: clamp01(b),
            working_space,
        }
    }

    /// Creates from a vector (x=R, y=G, z=B).
    pub fn from_vec3(v: Vec3, working_space: WorkingSpace) -> Self {
        Self::with_working_space(v.x, v.y, v.z, working_space)
    }

    /// Components as a vector.
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// The working space the channels are expressed in.
    pub fn working_space(&self) -> WorkingSpace {
        self.working_space
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use tincture_primaries::{ADOBE_RGB_1998, REC709};

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_clamping() {
        let c = Rgb::new(1.5, -0.3, 0.25);
        assert_eq!(c.r(), 1.0);
        assert_eq!(c.g(), 0.0);
        assert_eq!(c.b(), 0.25);

        let l = LinearRgb::new(f32::NAN, 2.0, -1.0);
        assert_eq!(l.to_vec3(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_u8() {
        let c = Rgb::from_u8(255, 128, 0);
        assert_eq!(c.to_u8(), [255, 128, 0]);
        assert_eq!(c.working_space(), SRGB);
    }

    #[test]
    fn test_equality_includes_working_space() {
        let a = Rgb::new(0.2, 0.4, 0.6);
        let b = Rgb::with_working_space(0.2, 0.4, 0.6, ADOBE_RGB_1998);
        assert_ne!(a, b);
        assert_eq!(a, Rgb::with_working_space(0.2, 0.4, 0.6, SRGB));

        // Same primaries and white, different companding
        assert_ne!(a, Rgb::with_working_space(0.2, 0.4, 0.6, REC709));
    }

    #[test]
    fn test_hash_folds_negative_zero() {
        let a = Rgb::new(0.0, 0.5, 0.5);
        let b = Rgb::new(-0.0, 0.5, 0.5);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::default().to_string(), "Rgb [ Empty ]");
        assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_string(), "Rgb [ R=1.00, G=0.50, B=0.00 ]");
        assert_eq!(
            LinearRgb::new(0.25, 0.0, 1.0).to_string(),
            "LinearRgb [ R=0.25, G=0.00, B=1.00 ]"
        );
    }
}
