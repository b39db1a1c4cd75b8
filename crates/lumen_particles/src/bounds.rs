//! # Viewport Bounds
//!
//! The visible extent particles scatter across and wrap against.
//!
//! The host viewport may change size over time; every pool operation takes
//! the bounds for *this* tick as an argument rather than caching them.

use serde::{Deserialize, Serialize};

/// A viewport extent in simulation units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Width of the visible area.
    pub width: f32,
    /// Height of the visible area.
    pub height: f32,
}

impl Bounds {
    /// Fallback extent used when no viewport is available.
    pub const DEFAULT: Self = Self {
        width: 1920.0,
        height: 1080.0,
    };

    /// Creates bounds from a width and height.
    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns true if this extent has no area.
    ///
    /// Pool behavior over a zero-area viewport is undefined (everything
    /// would wrap immediately), so callers should fall back to
    /// [`Bounds::DEFAULT`] instead of passing one in.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extent() {
        let bounds = Bounds::default();
        assert_eq!(bounds, Bounds::new(1920.0, 1080.0));
        assert!(!bounds.is_degenerate());
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(Bounds::new(0.0, 1080.0).is_degenerate());
        assert!(Bounds::new(1920.0, 0.0).is_degenerate());
        assert!(Bounds::new(-1.0, -1.0).is_degenerate());
    }
}
