//! Memoized conversion matrices.
//!
//! Deriving a working space's RGB <-> XYZ matrices or an adaptation matrix
//! costs a 3x3 solve. [`MatrixCache`] computes each one the first time it is
//! asked for and hands out copies afterwards. Entries are never evicted or
//! replaced.
//!
//! ```rust
//! use tincture_color::MatrixCache;
//! use tincture_primaries::SRGB;
//!
//! let cache = MatrixCache::new();
//! let first = cache.rgb_matrices(&SRGB);
//! let second = cache.rgb_matrices(&SRGB);
//! assert_eq!(first, second);
//! assert_eq!(cache.rgb_len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use glam::DMat3;
use tincture_math::{Vec3, adapt_matrix};
use tincture_primaries::{RgbMatrices, WorkingSpace};
use tracing::{debug, trace};

use crate::AdaptationMethod;

type WhiteKey = [u32; 3];

fn white_key(white: Vec3) -> WhiteKey {
    let bits = |v: f32| (v + 0.0).to_bits();
    [bits(white.x), bits(white.y), bits(white.z)]
}

/// Thread-safe, append-only store of derived matrices.
#[derive(Debug, Default)]
pub struct MatrixCache {
    rgb: RwLock<HashMap<WorkingSpace, RgbMatrices>>,
    adaptation: RwLock<HashMap<(AdaptationMethod, WhiteKey, WhiteKey), DMat3>>,
}

static GLOBAL: OnceLock<Arc<MatrixCache>> = OnceLock::new();

impl MatrixCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache shared by default converters.
    pub fn global() -> Arc<Self> {
        GLOBAL.get_or_init(|| Arc::new(Self::new())).clone()
    }

    /// RGB <-> XYZ matrices of a working space.
    pub fn rgb_matrices(&self, space: &WorkingSpace) -> RgbMatrices {
        {
            let map = self.rgb.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(m) = map.get(space) {
                return *m;
            }
        }

        // Derived outside the lock; concurrent misses compute equal values.
        let derived = RgbMatrices::derive(space);
        debug!(space = space.name, "derived working space matrices");

        let mut map = self.rgb.write().unwrap_or_else(PoisonError::into_inner);
        *map.entry(*space).or_insert(derived)
    }

    /// Adaptation matrix from `src` white to `dst` white.
    pub fn adaptation_matrix(&self, method: AdaptationMethod, src: Vec3, dst: Vec3) -> DMat3 {
        let key = (method, white_key(src), white_key(dst));
        {
            let map = self.adaptation.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(m) = map.get(&key) {
                return *m;
            }
        }

        let derived = adapt_matrix(method.matrix(), src, dst);
        trace!(
            %method,
            src = ?src.to_array(),
            dst = ?dst.to_array(),
            "derived adaptation matrix"
        );

        let mut map = self.adaptation.write().unwrap_or_else(PoisonError::into_inner);
        *map.entry(key).or_insert(derived)
    }

    /// Number of cached working spaces.
    pub fn rgb_len(&self) -> usize {
        self.rgb.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Number of cached adaptation matrices.
    pub fn adaptation_len(&self) -> usize {
        self.adaptation
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
