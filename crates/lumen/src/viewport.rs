//! # Viewport Seam
//!
//! The host supplies the visible extent, and it may change between ticks.
//! When the host has nothing to report (headless runs, detached windows),
//! the loop falls back to [`Bounds::DEFAULT`] rather than failing.

use lumen_particles::Bounds;

/// Source of the current viewport extent.
pub trait ViewportProvider {
    /// The viewport as of this tick, or `None` when unavailable.
    fn bounds(&self) -> Option<Bounds>;
}

/// A provider with a fixed extent.
#[derive(Clone, Copy, Debug)]
pub struct FixedViewport {
    /// The extent to report.
    bounds: Bounds,
}

impl FixedViewport {
    /// Creates a provider that always reports `bounds`.
    #[must_use]
    pub const fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

impl ViewportProvider for FixedViewport {
    fn bounds(&self) -> Option<Bounds> {
        Some(self.bounds)
    }
}

/// A provider for hosts without a viewport. Always `None`, which makes
/// the loop fall back to the default extent.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessViewport;

impl ViewportProvider for HeadlessViewport {
    fn bounds(&self) -> Option<Bounds> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_viewport() {
        let provider = FixedViewport::new(Bounds::new(800.0, 600.0));
        assert_eq!(provider.bounds(), Some(Bounds::new(800.0, 600.0)));
    }

    #[test]
    fn test_headless_viewport() {
        assert_eq!(HeadlessViewport.bounds(), None);
    }
}
