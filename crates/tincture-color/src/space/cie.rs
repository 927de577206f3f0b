//! CIE and cone-response value types.

use std::fmt;
use std::hash::{Hash, Hasher};

use glam::DVec3;
use tincture_math::Vec3;

use super::{clamp, color_components, wrap_hue};

macro_rules! triplet {
    ($(#[$meta:meta])* $ty:ident, $label:literal, $a:ident => $na:literal, $b:ident => $nb:literal, $c:ident => $nc:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $ty {
            $a: f32,
            $b: f32,
            $c: f32,
        }

        color_components!($ty, $label, [$a => $na, $b => $nb, $c => $nc]);

        impl $ty {
            /// Creates a value. Components are stored as given.
            #[inline]
            pub const fn new($a: f32, $b: f32, $c: f32) -> Self {
                Self { $a, $b, $c }
            }

            /// Creates from a vector, in component order.
            #[inline]
            pub const fn from_vec3(v: Vec3) -> Self {
                Self::new(v.x, v.y, v.z)
            }

            /// Components as a vector, in component order.
            #[inline]
            pub const fn to_vec3(&self) -> Vec3 {
                Vec3::new(self.$a, self.$b, self.$c)
            }
        }
    };
}

/// CIE 1931 XYZ tristimulus values, relative to a white with Y = 1.
///
/// XYZ is the hub every RGB and CIE conversion passes through, so the
/// components are stored in f64. Constructors and accessors speak `f32`
/// like every other value type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CieXyz {
    x: f64,
    y: f64,
    z: f64,
}

impl CieXyz {
    /// Creates a value. Components are stored as given.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: x as f64,
            y: y as f64,
            z: z as f64,
        }
    }

    /// Creates from a vector, in component order.
    #[inline]
    pub const fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Components as a vector, in component order.
    #[inline]
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::from_dvec3(self.to_dvec3())
    }

    #[inline]
    pub(crate) fn from_dvec3(v: DVec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }

    #[inline]
    pub(crate) fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// The X component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.x as f32
    }

    /// The Y component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.y as f32
    }

    /// The Z component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.z as f32
    }
}

impl Hash for CieXyz {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in [self.x, self.y, self.z] {
            state.write_u64((v + 0.0).to_bits());
        }
    }
}

impl fmt::Display for CieXyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::default() {
            return write!(f, "CieXyz [ Empty ]");
        }
        write!(f, "CieXyz [ X={:.2}, Y={:.2}, Z={:.2} ]", self.x, self.y, self.z)
    }
}

triplet!(
    /// CIE xyY: chromaticity plus luminance.
    CieXyy, "CieXyy", x => "x", y => "y", luminance => "Y"
);

triplet!(
    /// CIE 1976 L*a*b*.
    CieLab, "CieLab", l => "L", a => "a", b => "b"
);

triplet!(
    /// CIE 1976 L*u*v*.
    CieLuv, "CieLuv", l => "L", u => "u", v => "v"
);

triplet!(
    /// Hunter 1948 L, a, b.
    HunterLab, "HunterLab", l => "L", a => "a", b => "b"
);

triplet!(
    /// Long, medium and short cone responses.
    Lms, "Lms", l => "L", m => "M", s => "S"
);

macro_rules! polar {
    ($(#[$meta:meta])* $ty:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $ty {
            l: f32,
            c: f32,
            h: f32,
        }

        color_components!($ty, $label, [l => "L", c => "C", h => "h"]);

        impl $ty {
            /// Creates a value. Chroma is clamped to >= 0 and hue wrapped
            /// into [0, 360).
            #[inline]
            pub fn new(l: f32, c: f32, h: f32) -> Self {
                Self {
                    l,
                    c: clamp(c, 0.0, f32::INFINITY),
                    h: wrap_hue(h),
                }
            }

            /// Creates from a vector (x=L, y=C, z=h).
            #[inline]
            pub fn from_vec3(v: Vec3) -> Self {
                Self::new(v.x, v.y, v.z)
            }

            /// Components as a vector.
            #[inline]
            pub const fn to_vec3(&self) -> Vec3 {
                Vec3::new(self.l, self.c, self.h)
            }
        }
    };
}

polar!(
    /// Cylindrical L*a*b*: lightness, chroma, hue angle in degrees.
    CieLch, "CieLch"
);

polar!(
    /// Cylindrical L*u*v*: lightness, chroma, hue angle in degrees.
    CieLchuv, "CieLchuv"
);
