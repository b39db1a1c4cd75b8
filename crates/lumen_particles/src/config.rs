//! # Pool Configuration
//!
//! Loaded once at startup from external TOML; validated before any pool is
//! built. Invalid configuration is a hard rejection, never a clamp.

use serde::{Deserialize, Serialize};

use crate::error::ParticleError;

/// Configuration for a particle pool.
///
/// `pool_size` is signed because it arrives from an external config file:
/// a negative value must be representable so validation can reject it
/// explicitly rather than wrapping or clamping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of particle slots to pre-allocate.
    pub pool_size: i64,
    /// Life assigned at spawn, in reference frames.
    pub max_life: f32,
    /// Velocity range applied independently to each axis.
    pub speed_range: (f32, f32),
    /// Render size range.
    pub size_range: (f32, f32),
    /// Render opacity range.
    pub opacity_range: (f32, f32),
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            pool_size: 100,
            max_life: 300.0,
            speed_range: (-0.5, 0.5),
            size_range: (1.0, 4.0),
            opacity_range: (0.2, 0.8),
        }
    }
}

impl PoolConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool size is negative, `max_life` is not
    /// positive, or any randomization range is inverted.
    pub fn validate(&self) -> Result<(), ParticleError> {
        if self.pool_size < 0 {
            return Err(ParticleError::NegativePoolSize {
                pool_size: self.pool_size,
            });
        }

        if self.max_life <= 0.0 {
            return Err(ParticleError::InvalidMaxLife {
                max_life: self.max_life,
            });
        }

        for (name, range) in [
            ("speed", self.speed_range),
            ("size", self.size_range),
            ("opacity", self.opacity_range),
        ] {
            if range.0 > range.1 {
                return Err(ParticleError::InvalidRange {
                    name,
                    min: range.0,
                    max: range.1,
                });
            }
        }

        Ok(())
    }
}
