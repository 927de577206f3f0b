//! Buffer-to-buffer conversion.
//!
//! [`ColorConverter::convert_bulk`] maps `count` elements of a source slice
//! into a destination slice without allocating. With the `parallel` feature
//! (on by default) buffers of at least [`PARALLEL_THRESHOLD`] elements are
//! split into chunks and converted on the rayon pool. Every element goes
//! through the same scalar conversion either way, so the output does not
//! depend on the path taken.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::{BufferRole, ColorConverter, ColorError, ColorResult, ColorSpace};

/// Element count from which bulk conversion runs in parallel.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Elements per parallel work item.
#[cfg(feature = "parallel")]
const CHUNK_SIZE: usize = 1024;

fn check_len(buffer: BufferRole, required: usize, actual: usize) -> ColorResult<()> {
    if actual < required {
        return Err(ColorError::BufferTooShort {
            buffer,
            required,
            actual,
        });
    }
    Ok(())
}

impl ColorConverter {
    /// Converts the first `count` elements of `source` into `destination`.
    ///
    /// Both buffers must hold at least `count` elements; otherwise
    /// [`ColorError::BufferTooShort`] is returned and nothing is written.
    /// Elements of `destination` past `count` are left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tincture_color::{CieLab, ColorConverter, Rgb};
    ///
    /// let conv = ColorConverter::new();
    /// let src = vec![Rgb::new(1.0, 1.0, 1.0); 16];
    /// let mut dst = vec![CieLab::default(); 16];
    /// conv.convert_bulk(&src, &mut dst, 16).unwrap();
    /// assert!((dst[0].l() - 100.0).abs() < 1e-2);
    ///
    /// assert!(conv.convert_bulk(&src, &mut dst, 17).is_err());
    /// ```
    pub fn convert_bulk<S: ColorSpace, D: ColorSpace>(
        &self,
        source: &[S],
        destination: &mut [D],
        count: usize,
    ) -> ColorResult<()> {
        check_len(BufferRole::Source, count, source.len())?;
        check_len(BufferRole::Destination, count, destination.len())?;

        let src = &source[..count];
        let dst = &mut destination[..count];

        debug!(
            count,
            from = %S::KIND,
            to = %D::KIND,
            parallel = cfg!(feature = "parallel") && count >= PARALLEL_THRESHOLD,
            "bulk conversion"
        );
        self.convert_slice(src, dst);
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn convert_slice<S: ColorSpace, D: ColorSpace>(&self, src: &[S], dst: &mut [D]) {
        if src.len() < PARALLEL_THRESHOLD {
            self.convert_serial(src, dst);
            return;
        }
        dst.par_chunks_mut(CHUNK_SIZE)
            .zip(src.par_chunks(CHUNK_SIZE))
            .for_each(|(d, s)| self.convert_serial(s, d));
    }

    #[cfg(not(feature = "parallel"))]
    fn convert_slice<S: ColorSpace, D: ColorSpace>(&self, src: &[S], dst: &mut [D]) {
        self.convert_serial(src, dst);
    }

    #[inline]
    fn convert_serial<S: ColorSpace, D: ColorSpace>(&self, src: &[S], dst: &mut [D]) {
        for (d, s) in dst.iter_mut().zip(src) {
            *d = self.convert(*s);
        }
    }
}
