//! # Particle Pool
//!
//! Pre-allocated arena of particle slots, recycled in place.
//!
//! ## Design
//!
//! The per-tick hot path must:
//! - Never allocate memory
//! - Touch every slot at most once (O(N) per tick)
//! - Leave inactive slots untouched until `respawn`
//!
//! Velocities are expressed in units per *reference frame* (one 60 FPS
//! step). The scheduler hands us a millisecond delta; multiplying by
//! [`FRAME_NORMALIZATION`] converts it onto that reference step so particle
//! speed is independent of the actual frame rate.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::bounds::Bounds;
use crate::config::PoolConfig;
use crate::error::ParticleError;
use crate::particle::Particle;

/// Converts a millisecond delta onto a reference 60 FPS step.
pub const FRAME_NORMALIZATION: f32 = 0.016;

/// How far past an edge a particle may travel before wrapping.
pub const WRAP_MARGIN: f32 = 50.0;

/// Samples a uniform value in `[min, max)`, degrading to `min` when the
/// range is empty.
#[inline]
fn uniform(rng: &mut ChaCha8Rng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// A fixed-capacity pool of particles.
///
/// The slot count is fixed at construction; slots are recycled in place,
/// never allocated or freed afterwards. The pool exclusively owns its
/// slots - external readers get a shared slice via [`ParticlePool::particles`].
pub struct ParticlePool {
    /// The slot storage. Length never changes.
    slots: Box<[Particle]>,
    /// Deterministic RNG driving spawn/respawn scatter.
    rng: ChaCha8Rng,
    /// Life assigned at respawn and on boundary wrap.
    max_life: f32,
}

impl ParticlePool {
    /// Creates a pool of `config.pool_size` particles scattered across
    /// `bounds`.
    ///
    /// Each particle starts active with a uniformly random position,
    /// per-axis velocity in `speed_range`, and `life` in `[0, max_life)` -
    /// the staggered life keeps the pool from expiring all at once.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated pool configuration
    /// * `bounds` - Viewport to scatter across (use [`Bounds::DEFAULT`]
    ///   when no viewport is available)
    /// * `seed` - RNG seed; identical seeds produce identical pools
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid (negative pool
    /// size, inverted range, non-positive max life).
    pub fn new(config: &PoolConfig, bounds: Bounds, seed: u64) -> Result<Self, ParticleError> {
        config.validate()?;

        // Validation guarantees pool_size >= 0.
        let count = usize::try_from(config.pool_size).map_err(|_| {
            ParticleError::NegativePoolSize {
                pool_size: config.pool_size,
            }
        })?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (speed_min, speed_max) = config.speed_range;
        let (size_min, size_max) = config.size_range;
        let (opacity_min, opacity_max) = config.opacity_range;

        let slots: Vec<Particle> = (0..count)
            .map(|index| Particle {
                id: index as u32,
                x: uniform(&mut rng, 0.0, bounds.width),
                y: uniform(&mut rng, 0.0, bounds.height),
                vx: uniform(&mut rng, speed_min, speed_max),
                vy: uniform(&mut rng, speed_min, speed_max),
                life: uniform(&mut rng, 0.0, config.max_life),
                max_life: config.max_life,
                size: uniform(&mut rng, size_min, size_max),
                opacity: uniform(&mut rng, opacity_min, opacity_max),
                active: true,
            })
            .collect();

        tracing::debug!("particle pool created: {} slots (seed {})", count, seed);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            rng,
            max_life: config.max_life,
        })
    }

    /// Advances every active particle by one tick.
    ///
    /// This is the hot path: an in-place, per-slot transform with **zero
    /// heap allocations**. Inactive slots pass through unchanged.
    ///
    /// Per active slot:
    /// 1. `position += velocity * delta_ms * FRAME_NORMALIZATION`
    /// 2. `life -= delta_ms * FRAME_NORMALIZATION`
    /// 3. Crossing an edge by more than [`WRAP_MARGIN`] teleports the
    ///    particle to the opposite edge (± margin) and resets `life` to
    ///    `max_life` - a wrapped particle is treated as reborn
    /// 4. Expiry (`life <= 0` → inactive) is checked *after* the wrap
    ///    reset, so a particle wrapped this tick cannot expire this tick
    pub fn update(&mut self, delta_ms: f32, bounds: Bounds) {
        let step = delta_ms * FRAME_NORMALIZATION;
        let max_life = self.max_life;

        for particle in self.slots.iter_mut() {
            if !particle.active {
                continue;
            }

            particle.x += particle.vx * step;
            particle.y += particle.vy * step;
            particle.life -= step;

            let mut wrapped = false;
            if particle.x < -WRAP_MARGIN {
                particle.x = bounds.width + WRAP_MARGIN;
                wrapped = true;
            } else if particle.x > bounds.width + WRAP_MARGIN {
                particle.x = -WRAP_MARGIN;
                wrapped = true;
            }
            if particle.y < -WRAP_MARGIN {
                particle.y = bounds.height + WRAP_MARGIN;
                wrapped = true;
            } else if particle.y > bounds.height + WRAP_MARGIN {
                particle.y = -WRAP_MARGIN;
                wrapped = true;
            }
            if wrapped {
                particle.life = max_life;
            }

            if particle.life <= 0.0 {
                particle.active = false;
            }
        }
    }

    /// Re-scatters every inactive particle across `bounds`.
    ///
    /// Reinitializes position uniformly, resets `life` to `max_life`, and
    /// reactivates the slot. Already-active particles are untouched, so
    /// calling this when nothing is inactive is a no-op.
    pub fn respawn(&mut self, bounds: Bounds) {
        let max_life = self.max_life;
        let rng = &mut self.rng;

        for particle in self.slots.iter_mut() {
            if particle.active {
                continue;
            }

            particle.x = uniform(rng, 0.0, bounds.width);
            particle.y = uniform(rng, 0.0, bounds.height);
            particle.life = max_life;
            particle.active = true;
        }
    }

    /// Read-only view of every slot, for rendering between ticks.
    #[inline]
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.slots
    }

    /// Returns the fixed slot count.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the pool was built with zero slots.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Counts the currently active particles.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    /// Returns the life assigned at respawn.
    #[inline]
    #[must_use]
    pub const fn max_life(&self) -> f32 {
        self.max_life
    }
}
