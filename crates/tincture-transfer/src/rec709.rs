//! ITU-R BT.709 companding.
//!
//! The Rec.709 working space stores values with the BT.709 camera OETF and
//! decodes with its exact inverse, not the BT.1886 display curve.

/// Power segment scale.
const ALPHA: f32 = 1.099;

/// Slope of the linear toe.
const TOE_SLOPE: f32 = 4.5;

/// Linear value where the toe ends.
const LINEAR_BREAK: f32 = 0.018;

/// Encoded value where the toe ends.
const ENCODED_BREAK: f32 = 0.081;

/// Encodes linear light as Rec.709.
///
/// ```text
/// L < 0.018:  V = 4.5 L
/// otherwise:  V = 1.099 L^0.45 - 0.099
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l >= LINEAR_BREAK {
        ALPHA * l.powf(0.45) - (ALPHA - 1.0)
    } else {
        TOE_SLOPE * l
    }
}

/// Decodes a Rec.709 value to linear light.
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v >= ENCODED_BREAK {
        ((v + ALPHA - 1.0) / ALPHA).powf(1.0 / 0.45)
    } else {
        v / TOE_SLOPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_is_stable() {
        for i in 0..=255 {
            let v = i as f32 / 255.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-4, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_black_and_white_are_fixed() {
        assert_eq!(oetf(0.0), 0.0);
        assert_eq!(eotf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-6);
        assert!((eotf(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_decodes_brighter_than_srgb_at_mid_grey() {
        assert!(eotf(0.5) > crate::srgb::eotf(0.5));
    }
}
