//! Cross-crate property tests for tincture.
//!
//! These exercise the converter end to end: every ordered pair of color
//! spaces, every registry working space, and the bulk and cache paths.
