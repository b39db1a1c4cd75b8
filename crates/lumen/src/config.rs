//! # Effects Configuration
//!
//! Top-level TOML configuration for the effects core, loaded once at
//! startup and validated before anything is built.
//!
//! ```toml
//! seed = 7
//!
//! [pool]
//! pool_size = 500
//! max_life = 300.0
//!
//! [animation]
//! enabled = true
//! max_frame_time_ms = 16.67
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lumen_frame::AnimationConfig;
use lumen_particles::{ParticleError, PoolConfig};

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file was not valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config parsed but failed validation.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ParticleError),
}

/// Top-level configuration for the effects core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// RNG seed for the particle pool; identical seeds reproduce runs.
    pub seed: u64,
    /// Particle pool settings.
    pub pool: PoolConfig,
    /// Scheduling session settings.
    pub animation: AnimationConfig,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            pool: PoolConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl EffectsConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails
    /// validation.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.pool.validate()?;
        tracing::debug!(
            "effects config loaded: {} particles, frame cap {:.2}ms",
            config.pool.pool_size,
            config.animation.max_frame_time_ms
        );
        Ok(config)
    }
}
