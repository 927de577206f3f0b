//! Working space definitions and the fixed registry.

use std::fmt;
use std::hash::{Hash, Hasher};

use tincture_math::{self as math, Vec3};
use tincture_transfer::Companding;

/// CIE xy chromaticity coordinates.
pub type Chromaticity = (f32, f32);

/// An RGB working space: primaries, reference white and companding.
///
/// Identity is the value of the primaries, white point and companding
/// curve. The name is descriptive only and takes no part in equality or
/// hashing, so two independently built spaces with identical parameters
/// are interchangeable (and share cached matrices).
///
/// # Example
///
/// ```rust
/// use tincture_primaries::{WorkingSpace, Companding, SRGB};
/// use tincture_math::D65;
///
/// let custom = WorkingSpace::new(
///     "My sRGB",
///     (0.64, 0.33),
///     (0.30, 0.60),
///     (0.15, 0.06),
///     D65,
///     Companding::Srgb,
/// );
/// assert_eq!(custom, SRGB);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WorkingSpace {
    /// Display name.
    pub name: &'static str,
    /// Red primary (x, y) chromaticity.
    pub red: Chromaticity,
    /// Green primary (x, y) chromaticity.
    pub green: Chromaticity,
    /// Blue primary (x, y) chromaticity.
    pub blue: Chromaticity,
    /// Reference white as XYZ (Y = 1).
    pub white: Vec3,
    /// Companding curve.
    pub companding: Companding,
}

impl WorkingSpace {
    /// Creates a working space from its parameters.
    pub const fn new(
        name: &'static str,
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        white: Vec3,
        companding: Companding,
    ) -> Self {
        Self {
            name,
            red,
            green,
            blue,
            white,
            companding,
        }
    }

    /// Every working space in the registry, sRGB first.
    pub const ALL: [WorkingSpace; 19] = [
        SRGB,
        SRGB_SIMPLIFIED,
        REC709,
        REC2020,
        ECI_RGB_V2,
        ADOBE_RGB_1998,
        APPLE_SRGB,
        BEST_RGB,
        BETA_RGB,
        BRUCE_RGB,
        CIE_RGB,
        COLOR_MATCH_RGB,
        DON_RGB_4,
        EKTA_SPACE_PS5,
        NTSC_RGB,
        PAL_SECAM_RGB,
        PROPHOTO_RGB,
        SMPTE_C_RGB,
        WIDE_GAMUT_RGB,
    ];

    /// Looks up a registry working space by name.
    ///
    /// Case, spaces and punctuation are ignored, and the word "RGB" may be
    /// left out: `"adobe-rgb-1998"`, `"Adobe 1998"` and `"prophoto"` all
    /// resolve.
    ///
    /// ```rust
    /// use tincture_primaries::{WorkingSpace, PROPHOTO_RGB};
    ///
    /// assert_eq!(WorkingSpace::by_name("prophoto"), Some(PROPHOTO_RGB));
    /// assert!(WorkingSpace::by_name("no such space").is_none());
    /// ```
    pub fn by_name(name: &str) -> Option<Self> {
        let query = normalize(name);
        if query.is_empty() {
            return None;
        }
        let short = strip_rgb(&query);
        Self::ALL.iter().copied().find(|ws| {
            let full = normalize(ws.name);
            full == query || (!short.is_empty() && strip_rgb(&full) == short)
        })
    }

    /// The (x, y) chromaticity of the reference white.
    pub fn white_chromaticity(&self) -> Chromaticity {
        let sum = self.white.sum();
        (self.white.x / sum, self.white.y / sum)
    }

    fn key(&self) -> [u32; 9] {
        let bits = |v: f32| (v + 0.0).to_bits();
        [
            bits(self.red.0),
            bits(self.red.1),
            bits(self.green.0),
            bits(self.green.1),
            bits(self.blue.0),
            bits(self.blue.1),
            bits(self.white.x),
            bits(self.white.y),
            bits(self.white.z),
        ]
    }
}

impl Default for WorkingSpace {
    fn default() -> Self {
        SRGB
    }
}

impl PartialEq for WorkingSpace {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.companding == other.companding
    }
}

impl Eq for WorkingSpace {}

impl Hash for WorkingSpace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.companding.hash(state);
    }
}

impl fmt::Display for WorkingSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn strip_rgb(name: &str) -> String {
    name.replace("rgb", "")
}

// ============================================================================
// Registry
// ============================================================================

/// sRGB (IEC 61966-2-1). The default working space.
pub const SRGB: WorkingSpace = WorkingSpace::new(
    "sRGB",
    (0.6400, 0.3300),
    (0.3000, 0.6000),
    (0.1500, 0.0600),
    math::D65,
    Companding::Srgb,
);

/// sRGB primaries with a plain gamma 2.2 curve.
pub const SRGB_SIMPLIFIED: WorkingSpace = WorkingSpace::new(
    "sRGB (simplified)",
    (0.6400, 0.3300),
    (0.3000, 0.6000),
    (0.1500, 0.0600),
    math::D65,
    Companding::Gamma(2.2),
);

/// ITU-R BT.709.
pub const REC709: WorkingSpace = WorkingSpace::new(
    "Rec.709",
    (0.6400, 0.3300),
    (0.3000, 0.6000),
    (0.1500, 0.0600),
    math::D65,
    Companding::Rec709,
);

/// ITU-R BT.2020.
pub const REC2020: WorkingSpace = WorkingSpace::new(
    "Rec.2020",
    (0.7080, 0.2920),
    (0.1700, 0.7970),
    (0.1310, 0.0460),
    math::D65,
    Companding::Rec2020,
);

/// ECI RGB v2 (European Color Initiative).
pub const ECI_RGB_V2: WorkingSpace = WorkingSpace::new(
    "ECI RGB v2",
    (0.6700, 0.3300),
    (0.2100, 0.7100),
    (0.1400, 0.0800),
    math::D50,
    Companding::LStar,
);

/// Adobe RGB (1998).
pub const ADOBE_RGB_1998: WorkingSpace = WorkingSpace::new(
    "Adobe RGB (1998)",
    (0.6400, 0.3300),
    (0.2100, 0.7100),
    (0.1500, 0.0600),
    math::D65,
    Companding::Gamma(2.2),
);

/// Apple sRGB (classic Macintosh displays).
pub const APPLE_SRGB: WorkingSpace = WorkingSpace::new(
    "Apple sRGB",
    (0.6250, 0.3400),
    (0.2800, 0.5950),
    (0.1550, 0.0700),
    math::D65,
    Companding::Gamma(1.8),
);

/// Best RGB.
pub const BEST_RGB: WorkingSpace = WorkingSpace::new(
    "Best RGB",
    (0.7347, 0.2653),
    (0.2150, 0.7750),
    (0.1300, 0.0350),
    math::D50,
    Companding::Gamma(2.2),
);

/// Beta RGB.
pub const BETA_RGB: WorkingSpace = WorkingSpace::new(
    "Beta RGB",
    (0.6888, 0.3112),
    (0.1986, 0.7551),
    (0.1265, 0.0352),
    math::D50,
    Companding::Gamma(2.2),
);

/// Bruce RGB.
pub const BRUCE_RGB: WorkingSpace = WorkingSpace::new(
    "Bruce RGB",
    (0.6400, 0.3300),
    (0.2800, 0.6500),
    (0.1500, 0.0600),
    math::D65,
    Companding::Gamma(2.2),
);

/// CIE RGB (1931 matching functions, equal energy white).
pub const CIE_RGB: WorkingSpace = WorkingSpace::new(
    "CIE RGB",
    (0.7350, 0.2650),
    (0.2740, 0.7170),
    (0.1670, 0.0090),
    math::E,
    Companding::Gamma(2.2),
);

/// ColorMatch RGB.
pub const COLOR_MATCH_RGB: WorkingSpace = WorkingSpace::new(
    "ColorMatch RGB",
    (0.6300, 0.3400),
    (0.2950, 0.6050),
    (0.1500, 0.0750),
    math::D50,
    Companding::Gamma(1.8),
);

/// Don RGB 4.
pub const DON_RGB_4: WorkingSpace = WorkingSpace::new(
    "Don RGB 4",
    (0.6960, 0.3000),
    (0.2150, 0.7650),
    (0.1300, 0.0350),
    math::D50,
    Companding::Gamma(2.2),
);

/// Ekta Space PS5.
pub const EKTA_SPACE_PS5: WorkingSpace = WorkingSpace::new(
    "Ekta Space PS5",
    (0.6950, 0.3050),
    (0.2600, 0.7000),
    (0.1100, 0.0050),
    math::D50,
    Companding::Gamma(2.2),
);

/// NTSC RGB (1953).
pub const NTSC_RGB: WorkingSpace = WorkingSpace::new(
    "NTSC RGB",
    (0.6700, 0.3300),
    (0.2100, 0.7100),
    (0.1400, 0.0800),
    math::C,
    Companding::Gamma(2.2),
);

/// PAL/SECAM RGB.
pub const PAL_SECAM_RGB: WorkingSpace = WorkingSpace::new(
    "PAL/SECAM RGB",
    (0.6400, 0.3300),
    (0.2900, 0.6000),
    (0.1500, 0.0600),
    math::D65,
    Companding::Gamma(2.2),
);

/// ProPhoto RGB (ROMM RGB).
pub const PROPHOTO_RGB: WorkingSpace = WorkingSpace::new(
    "ProPhoto RGB",
    (0.7347, 0.2653),
    (0.1596, 0.8404),
    (0.0366, 0.0001),
    math::D50,
    Companding::Gamma(1.8),
);

/// SMPTE-C RGB.
pub const SMPTE_C_RGB: WorkingSpace = WorkingSpace::new(
    "SMPTE-C RGB",
    (0.6300, 0.3400),
    (0.3100, 0.5950),
    (0.1550, 0.0700),
    math::D65,
    Companding::Gamma(2.2),
);

/// Wide Gamut RGB (Adobe Wide Gamut).
pub const WIDE_GAMUT_RGB: WorkingSpace = WorkingSpace::new(
    "Wide Gamut RGB",
    (0.7350, 0.2650),
    (0.1150, 0.8260),
    (0.1570, 0.0180),
    math::D50,
    Companding::Gamma(2.2),
);
