//! # Animation Configuration
//!
//! Immutable per scheduling session; loaded once at startup.

use serde::{Deserialize, Serialize};

/// Configuration for a scheduling session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Master gate. When false, `enable()` is a no-op and the scheduler
    /// stays idle.
    pub enabled: bool,
    /// Frame-time cap in milliseconds. A tick whose measured delta meets
    /// or exceeds this is skipped instead of invoked - the spiral-of-death
    /// guard.
    pub max_frame_time_ms: f64,
}

impl AnimationConfig {
    /// Two missed 60 Hz frames. An occasional vsync miss still animates;
    /// only genuine stalls are skipped.
    pub const DEFAULT_MAX_FRAME_TIME_MS: f64 = 33.33;
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_frame_time_ms: Self::DEFAULT_MAX_FRAME_TIME_MS,
        }
    }
}
