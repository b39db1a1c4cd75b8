//! # LUMEN Particles
//!
//! Fixed-capacity particle pool designed for:
//! - Zero heap allocations per tick
//! - Stable frame cost at large pool sizes (O(N) in-place update)
//! - Deterministic, seed-reproducible randomness
//!
//! ## Architecture Rules
//!
//! 1. **The pool length is fixed for its lifetime** - particles are recycled
//!    in place, never allocated or freed after construction
//! 2. **The pool exclusively owns its slots** - renderers read a shared
//!    slice between ticks, nothing external mutates a particle
//! 3. **Recycle, don't reallocate** - exhausted particles flip to inactive
//!    and are re-scattered by `respawn`
//!
//! ## Example
//!
//! ```rust
//! use lumen_particles::{Bounds, ParticlePool, PoolConfig};
//!
//! let config = PoolConfig::default();
//! let mut pool = ParticlePool::new(&config, Bounds::DEFAULT, 42).unwrap();
//!
//! // One 60 FPS tick: advance, then recycle anything that expired.
//! pool.update(16.67, Bounds::DEFAULT);
//! pool.respawn(Bounds::DEFAULT);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bounds;
pub mod config;
pub mod error;
pub mod particle;
pub mod pool;

pub use bounds::Bounds;
pub use config::PoolConfig;
pub use error::ParticleError;
pub use particle::Particle;
pub use pool::{ParticlePool, FRAME_NORMALIZATION, WRAP_MARGIN};
