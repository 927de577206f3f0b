//! Error types for color conversion.
//!
//! Scalar conversions never fail: out-of-range components are clamped when a
//! value is built. Errors only come from bulk precondition checks and from the
//! runtime-dispatch layer used by tools that read colors as text.

use std::fmt;

use thiserror::Error;

use crate::SpaceKind;

/// Which buffer of a bulk conversion failed its length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferRole {
    /// The input buffer.
    Source,
    /// The output buffer.
    Destination,
}

impl fmt::Display for BufferRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// Color conversion error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A bulk buffer holds fewer elements than requested.
    ///
    /// Reported before any element is written.
    #[error("{buffer} buffer too short: {required} elements required, {actual} available")]
    BufferTooShort {
        /// The offending buffer.
        buffer: BufferRole,
        /// Elements the call asked for.
        required: usize,
        /// Elements the buffer holds.
        actual: usize,
    },

    /// Wrong number of components for a color space.
    #[error("{kind} takes {expected} components, got {got}")]
    ComponentCount {
        /// Target space.
        kind: SpaceKind,
        /// Components the space has.
        expected: usize,
        /// Components supplied.
        got: usize,
    },

    /// Color space name not recognized.
    #[error("unknown color space: {0}")]
    UnknownSpace(String),

    /// Working space name not in the registry.
    #[error("unknown working space: {0}")]
    UnknownWorkingSpace(String),

    /// Illuminant name not recognized.
    #[error("unknown illuminant: {0}")]
    UnknownIlluminant(String),

    /// Chromatic adaptation method not recognized.
    #[error("unknown adaptation method: {0}")]
    UnknownAdaptation(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
