//! # Particle Error Types
//!
//! All errors that can occur when constructing a pool.
//!
//! The per-tick operations never fail - bad configuration is rejected up
//! front at construction, never clamped silently.

use thiserror::Error;

/// Errors that can occur in the particle system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParticleError {
    /// Pool size from configuration was negative.
    #[error("pool size must be non-negative, got {pool_size}")]
    NegativePoolSize {
        /// The rejected value.
        pool_size: i64,
    },

    /// Maximum particle life must be positive.
    #[error("max life must be positive, got {max_life}")]
    InvalidMaxLife {
        /// The rejected value.
        max_life: f32,
    },

    /// A randomization range had its minimum above its maximum.
    #[error("invalid {name} range: min {min} exceeds max {max}")]
    InvalidRange {
        /// Which range was malformed.
        name: &'static str,
        /// Lower bound supplied.
        min: f32,
        /// Upper bound supplied.
        max: f32,
    },
}
