//! CMYK over RGB.

use tincture_primaries::WorkingSpace;

use crate::{Cmyk, Rgb};

/// RGB to CMYK. Black gives `(0, 0, 0, 1)`.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
    let k = (1.0 - r).min(1.0 - g).min(1.0 - b);
    if k >= 1.0 {
        return Cmyk::new(0.0, 0.0, 0.0, 1.0);
    }
    let d = 1.0 - k;
    Cmyk::new((1.0 - r - k) / d, (1.0 - g - k) / d, (1.0 - b - k) / d, k)
}

/// CMYK to RGB in `space`.
pub fn cmyk_to_rgb(cmyk: Cmyk, space: WorkingSpace) -> Rgb {
    let k = 1.0 - cmyk.k();
    Rgb::with_working_space(
        (1.0 - cmyk.c()) * k,
        (1.0 - cmyk.m()) * k,
        (1.0 - cmyk.y()) * k,
        space,
    )
}
