//! YCbCr over RGB: ITU-R BT.601 coefficients, JPEG full range (0..255).

use tincture_primaries::WorkingSpace;

use crate::{Rgb, YCbCr};

/// RGB to YCbCr.
pub fn rgb_to_ycbcr(rgb: Rgb) -> YCbCr {
    let (r, g, b) = (rgb.r() * 255.0, rgb.g() * 255.0, rgb.b() * 255.0);
    YCbCr::new(
        0.299 * r + 0.587 * g + 0.114 * b,
        128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b,
        128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b,
    )
}

/// YCbCr to RGB in `space`.
pub fn ycbcr_to_rgb(ycc: YCbCr, space: WorkingSpace) -> Rgb {
    let (y, cb, cr) = (ycc.y(), ycc.cb() - 128.0, ycc.cr() - 128.0);
    let r = y + 1.402 * cr;
    let g = y - 0.344136 * cb - 0.714136 * cr;
    let b = y + 1.772 * cb;
    Rgb::with_working_space(r / 255.0, g / 255.0, b / 255.0, space)
}
