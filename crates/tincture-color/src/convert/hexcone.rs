//! HSL and HSV, the hexcone models over RGB.
//!
//! Both operate on the companded channels of an [`Rgb`] and keep its working
//! space on the way back.

use tincture_primaries::WorkingSpace;

use crate::{Hsl, Hsv, Rgb};

/// Hue in degrees, plus the max and min channel.
#[inline]
fn hue_max_min(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let h = if d == 0.0 {
        0.0
    } else if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, max, min)
}

/// RGB from hue, chroma and the amount added to every channel.
#[inline]
fn from_hue_chroma(h: f32, c: f32, m: f32, space: WorkingSpace) -> Rgb {
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Rgb::with_working_space(r + m, g + m, b + m, space)
}

/// RGB to HSL.
///
/// ```rust
/// use tincture_color::{Rgb, convert::hexcone};
///
/// let hsl = hexcone::rgb_to_hsl(Rgb::new(1.0, 0.0, 0.0));
/// assert_eq!((hsl.h(), hsl.s(), hsl.l()), (0.0, 1.0, 0.5));
/// ```
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (h, max, min) = hue_max_min(rgb.r(), rgb.g(), rgb.b());
    let l = (max + min) / 2.0;
    let d = max - min;

    let s = if d == 0.0 {
        0.0
    } else if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    Hsl::new(h, s, l)
}

/// HSL to RGB in `space`.
pub fn hsl_to_rgb(hsl: Hsl, space: WorkingSpace) -> Rgb {
    let l = hsl.l();
    let c = (1.0 - (2.0 * l - 1.0).abs()) * hsl.s();
    from_hue_chroma(hsl.h(), c, l - c / 2.0, space)
}

/// RGB to HSV.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (h, max, min) = hue_max_min(rgb.r(), rgb.g(), rgb.b());
    let s = if max == 0.0 { 0.0 } else { (max - min) / max };
    Hsv::new(h, s, max)
}

/// HSV to RGB in `space`.
pub fn hsv_to_rgb(hsv: Hsv, space: WorkingSpace) -> Rgb {
    let c = hsv.v() * hsv.s();
    from_hue_chroma(hsv.h(), c, hsv.v() - c, space)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tincture_primaries::SRGB;

    fn assert_rgb(actual: Rgb, expected: [f32; 3]) {
        assert_abs_diff_eq!(actual.r(), expected[0], epsilon = 1e-5);
        assert_abs_diff_eq!(actual.g(), expected[1], epsilon = 1e-5);
        assert_abs_diff_eq!(actual.b(), expected[2], epsilon = 1e-5);
    }

    #[test]
    fn test_primaries_hsl() {
        let cases = [
            ([1.0, 0.0, 0.0], 0.0),
            ([1.0, 1.0, 0.0], 60.0),
            ([0.0, 1.0, 0.0], 120.0),
            ([0.0, 1.0, 1.0], 180.0),
            ([0.0, 0.0, 1.0], 240.0),
            ([1.0, 0.0, 1.0], 300.0),
        ];
        for (rgb, hue) in cases {
            let hsl = rgb_to_hsl(Rgb::new(rgb[0], rgb[1], rgb[2]));
            assert_abs_diff_eq!(hsl.h(), hue, epsilon = 1e-4);
            assert_abs_diff_eq!(hsl.s(), 1.0, epsilon = 1e-6);
            assert_abs_diff_eq!(hsl.l(), 0.5, epsilon = 1e-6);
            assert_rgb(hsl_to_rgb(hsl, SRGB), rgb);
        }
    }

    #[test]
    fn test_gray_has_no_saturation() {
        let hsl = rgb_to_hsl(Rgb::new(0.4, 0.4, 0.4));
        assert_eq!((hsl.h(), hsl.s()), (0.0, 0.0));
        let hsv = rgb_to_hsv(Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(hsv, Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsv_roundtrip() {
        for rgb in [[0.2, 0.4, 0.6], [0.9, 0.1, 0.3], [0.5, 0.5, 0.1]] {
            let hsv = rgb_to_hsv(Rgb::new(rgb[0], rgb[1], rgb[2]));
            assert_rgb(hsv_to_rgb(hsv, SRGB), rgb);
        }
    }

    #[test]
    fn test_hsl_roundtrip() {
        for rgb in [[0.2, 0.4, 0.6], [0.9, 0.1, 0.3], [0.75, 0.7, 0.72]] {
            let hsl = rgb_to_hsl(Rgb::new(rgb[0], rgb[1], rgb[2]));
            assert_rgb(hsl_to_rgb(hsl, SRGB), rgb);
        }
    }
}
