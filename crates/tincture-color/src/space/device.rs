//! Device-oriented value types, defined relative to RGB.

use tincture_math::Vec3;

use super::{clamp, clamp01, color_components, wrap_hue};

/// Hue, saturation, lightness.
///
/// Hue is in degrees, wrapped into [0, 360); saturation and lightness are
/// clamped to [0, 1].
///
/// ```rust
/// use tincture_color::Hsl;
///
/// assert_eq!(Hsl::new(370.0, 0.5, 0.5).h(), 10.0);
/// assert_eq!(Hsl::new(-10.0, 0.5, 0.5).h(), 350.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    h: f32,
    s: f32,
    l: f32,
}

color_components!(Hsl, "Hsl", [h => "H", s => "S", l => "L"]);

impl Hsl {
    /// Creates a value, wrapping the hue and clamping the rest.
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp01(s),
            l: clamp01(l),
        }
    }

    /// Creates from a vector (x=H, y=S, z=L).
    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Components as a vector.
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.h, self.s, self.l)
    }
}

/// Hue, saturation, value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    h: f32,
    s: f32,
    v: f32,
}

color_components!(Hsv, "Hsv", [h => "H", s => "S", v => "V"]);

impl Hsv {
    /// Creates a value, wrapping the hue and clamping the rest.
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp01(s),
            v: clamp01(v),
        }
    }

    /// Creates from a vector (x=H, y=S, z=V).
    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Components as a vector.
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.h, self.s, self.v)
    }
}

/// Cyan, magenta, yellow, key; each clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    c: f32,
    m: f32,
    y: f32,
    k: f32,
}

color_components!(Cmyk, "Cmyk", [c => "C", m => "M", y => "Y", k => "K"]);

impl Cmyk {
    /// Creates a value, clamping every channel.
    pub fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self {
            c: clamp01(c),
            m: clamp01(m),
            y: clamp01(y),
            k: clamp01(k),
        }
    }

    /// Creates from `[c, m, y, k]`.
    pub fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Components as `[c, m, y, k]`.
    pub fn to_array(&self) -> [f32; 4] {
        [self.c, self.m, self.y, self.k]
    }
}

/// BT.601 full range luma and chroma, each clamped to [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YCbCr {
    y: f32,
    cb: f32,
    cr: f32,
}

color_components!(YCbCr, "YCbCr", [y => "Y", cb => "Cb", cr => "Cr"]);

impl YCbCr {
    /// Upper bound of every channel.
    pub const MAX: f32 = 255.0;

    /// Creates a value, clamping every channel.
    pub fn new(y: f32, cb: f32, cr: f32) -> Self {
        Self {
            y: clamp(y, 0.0, Self::MAX),
            cb: clamp(cb, 0.0, Self::MAX),
            cr: clamp(cr, 0.0, Self::MAX),
        }
    }

    /// Creates from a vector (x=Y, y=Cb, z=Cr).
    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Components as a vector.
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.y, self.cb, self.cr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_clamping() {
        let c = Hsv::new(720.5, 1.5, -0.3);
        assert!((c.h() - 0.5).abs() < 1e-4);
        assert_eq!(c.s(), 1.0);
        assert_eq!(c.v(), 0.0);
    }

    #[test]
    fn test_hsl_clamping() {
        let c = Hsl::new(0.0, -0.3, 1.5);
        assert_eq!((c.s(), c.l()), (0.0, 1.0));
    }

    #[test]
    fn test_cmyk_clamping() {
        let c = Cmyk::new(1.5, -0.3, 0.5, f32::NAN);
        assert_eq!(c.to_array(), [1.0, 0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_ycbcr_range() {
        let c = YCbCr::new(300.0, -5.0, 128.0);
        assert_eq!(c.to_vec3(), Vec3::new(255.0, 0.0, 128.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cmyk::default().to_string(), "Cmyk [ Empty ]");
        assert_eq!(
            Cmyk::new(0.0, 1.0, 1.0, 0.0).to_string(),
            "Cmyk [ C=0.00, M=1.00, Y=1.00, K=0.00 ]"
        );
    }
}
