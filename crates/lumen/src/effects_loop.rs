//! # Effects Loop
//!
//! Orchestrates one tick of the effects core:
//!
//! 1. The scheduler gates the tick (baseline / run / skip / dropped)
//! 2. The callback advances the pool and recycles exhausted particles,
//!    measuring its own duration
//! 3. The monitor records duration + rolling FPS + particle count for
//!    that same tick
//!
//! Ordering guarantee: metrics recorded for tick *k* always reflect pool
//! and FPS state as of tick *k* - the monitor never reorders or batches
//! across ticks. Skipped and baseline ticks record nothing, because no
//! update ran.

use lumen_frame::{Clock, FrameRequest, FrameScheduler, MonotonicClock, TickOutcome};
use lumen_particles::{Bounds, ParticleError, ParticlePool};
use lumen_telemetry::{MetricsSummary, PerformanceMonitor};

use crate::config::EffectsConfig;
use crate::viewport::{HeadlessViewport, ViewportProvider};

/// The effects-core orchestrator.
///
/// Owns the pool, the scheduler, the monitor, and the viewport seam.
/// Single-threaded by contract: ticks never overlap, and nothing external
/// mutates the pool.
pub struct EffectsLoop<C: Clock> {
    /// The particle arena. Exclusively owned and mutated here.
    pool: ParticlePool,
    /// Tick gate and FPS source.
    scheduler: FrameScheduler,
    /// Passive metric sink.
    monitor: PerformanceMonitor,
    /// Host viewport seam.
    viewport: Box<dyn ViewportProvider>,
    /// Timestamp source for ticks and render-time measurement.
    clock: C,
}

impl EffectsLoop<MonotonicClock> {
    /// Creates a loop from configuration with the production clock and no
    /// viewport (headless).
    ///
    /// # Errors
    ///
    /// Returns an error if the pool configuration is invalid.
    pub fn new(config: &EffectsConfig) -> Result<Self, ParticleError> {
        Self::with_parts(config, MonotonicClock::new(), Box::new(HeadlessViewport))
    }
}

impl<C: Clock> EffectsLoop<C> {
    /// Creates a loop with an explicit clock and viewport provider.
    ///
    /// Tests inject a synthetic clock here to drive the loop
    /// deterministically.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool configuration is invalid.
    pub fn with_parts(
        config: &EffectsConfig,
        clock: C,
        viewport: Box<dyn ViewportProvider>,
    ) -> Result<Self, ParticleError> {
        let bounds = viewport
            .bounds()
            .filter(|b| !b.is_degenerate())
            .unwrap_or(Bounds::DEFAULT);
        let pool = ParticlePool::new(&config.pool, bounds, config.seed)?;
        let scheduler = FrameScheduler::new(config.animation);

        Ok(Self {
            pool,
            scheduler,
            monitor: PerformanceMonitor::new(),
            viewport,
            clock,
        })
    }

    /// Arms the scheduler. No-op when the config gate is off.
    pub fn enable(&mut self) {
        let _ = self.scheduler.enable();
    }

    /// Disables the scheduler, cancelling the outstanding frame request.
    ///
    /// After this returns, the pool is guaranteed never to be mutated
    /// again until re-enabled - even if an already-fired frame is
    /// delivered late.
    pub fn disable(&mut self) {
        self.scheduler.disable();
    }

    /// Is the loop armed?
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.scheduler.is_enabled()
    }

    /// Runs one frame at the clock's current time.
    ///
    /// Returns what the tick amounted to. [`TickOutcome::Disabled`] when
    /// no frame request is outstanding.
    pub fn run_frame(&mut self) -> TickOutcome {
        match self.scheduler.pending_request() {
            Some(request) => {
                let now_ms = self.clock.now_ms();
                self.tick_at(request, now_ms)
            }
            None => TickOutcome::Disabled,
        }
    }

    /// Processes one delivered frame at an explicit timestamp.
    ///
    /// This is the deterministic entry point: hosts with their own frame
    /// primitive (and tests) deliver `(request, timestamp)` pairs here.
    pub fn tick_at(&mut self, request: FrameRequest, now_ms: f64) -> TickOutcome {
        let bounds = self
            .viewport
            .bounds()
            .filter(|b| !b.is_degenerate())
            .unwrap_or(Bounds::DEFAULT);

        let pool = &mut self.pool;
        let clock = &self.clock;
        let mut render_time_ms = 0.0_f32;

        let outcome = self.scheduler.tick(request, now_ms, |delta_ms| {
            let start = clock.now_ms();
            pool.update(delta_ms as f32, bounds);
            pool.respawn(bounds);
            render_time_ms = (clock.now_ms() - start) as f32;
        });

        // Record only ticks whose update actually ran, so every sample
        // reflects the state of exactly one tick.
        if matches!(outcome, TickOutcome::Ran { .. }) {
            let fps = self.scheduler.fps() as f32;
            let count = pool.active_count() as u32;
            self.monitor.record(fps, render_time_ms, count);
        }

        outcome
    }

    /// Read-only view of the particle pool, for rendering between ticks.
    #[must_use]
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// The scheduler, for host re-arming and FPS queries.
    #[must_use]
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// The metric sink.
    #[must_use]
    pub fn monitor(&self) -> &PerformanceMonitor {
        &self.monitor
    }

    /// Point-in-time aggregate snapshot.
    #[must_use]
    pub fn summary(&self) -> MetricsSummary {
        self.monitor.summary()
    }

    /// Starts a fresh measurement epoch, e.g. after reconfiguration.
    pub fn clear_metrics(&mut self) {
        self.monitor.clear();
    }
}
