//! # Particle Record
//!
//! A single simulated point with position, velocity, and finite life.
//!
//! Particles are plain mutable records owned by the pool. `size` and
//! `opacity` are visual-only attributes consumed by a renderer - the
//! simulation never touches them after spawn.

/// A single particle slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Stable identity within the pool. Assigned once at construction and
    /// never reused for a different slot.
    pub id: u32,
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Horizontal velocity, in units per reference frame.
    pub vx: f32,
    /// Vertical velocity, in units per reference frame.
    pub vy: f32,
    /// Remaining life, counted down every active tick.
    pub life: f32,
    /// Life assigned at spawn and on boundary wrap.
    pub max_life: f32,
    /// Render size. Fixed between respawns.
    pub size: f32,
    /// Render opacity. Fixed between respawns.
    pub opacity: f32,
    /// False means the slot is dead and awaiting respawn.
    pub active: bool,
}

impl Particle {
    /// Is this particle alive?
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Remaining life as a fraction of `max_life`, clamped to `[0, 1]`.
    ///
    /// Convenience for renderers that fade particles out near death.
    #[inline]
    #[must_use]
    pub fn life_fraction(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Particle {
        Particle {
            id: 7,
            x: 10.0,
            y: 20.0,
            vx: 0.5,
            vy: -0.5,
            life: 75.0,
            max_life: 300.0,
            size: 2.0,
            opacity: 0.6,
            active: true,
        }
    }

    #[test]
    fn test_life_fraction() {
        let particle = sample();
        assert!((particle.life_fraction() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_life_fraction_clamps() {
        let mut particle = sample();
        particle.life = -10.0;
        assert_eq!(particle.life_fraction(), 0.0);

        particle.life = 900.0;
        assert_eq!(particle.life_fraction(), 1.0);
    }
}
