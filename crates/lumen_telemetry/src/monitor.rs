//! # Performance Monitor
//!
//! Accumulates recent per-tick metrics and exposes rolling aggregates
//! without unbounded growth.
//!
//! One explicitly constructed instance lives for the process's duration.
//! There is no teardown - state is abandoned at process end. Single
//! writer by contract: every sample is recorded from the tick-processing
//! context, so no locking is needed.

use std::time::Instant;

use serde::Serialize;

use crate::memory::{MemoryProbe, ResidentMemoryProbe};
use crate::ring::RingBuffer;

/// Fixed sample-buffer capacity.
pub const METRIC_CAPACITY: usize = 100;

/// How many of the newest samples the rolling averages cover.
pub const RECENT_WINDOW: usize = 10;

/// FPS reported while the buffer is empty.
pub const DEFAULT_FPS: f32 = 60.0;

/// Render time reported while the buffer is empty, in milliseconds.
pub const DEFAULT_RENDER_TIME_MS: f32 = 16.67;

/// One tick's worth of metrics. Immutable once recorded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricSample {
    /// Frames per second reported by the scheduler at this tick.
    pub fps: f32,
    /// How long this tick's update took, in milliseconds.
    pub render_time_ms: f32,
    /// Active particles as of this tick.
    pub particle_count: u32,
    /// Resident memory in MiB, when the host could report it.
    pub memory_mb: Option<f32>,
    /// Milliseconds since the monitor's epoch (construction or last clear).
    pub timestamp_ms: f64,
}

/// Point-in-time aggregate snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricsSummary {
    /// Rolling average FPS over the recent window.
    pub average_fps: f32,
    /// Rolling average render time over the recent window, milliseconds.
    pub average_render_time_ms: f32,
    /// Current resident memory in MiB, when available.
    pub memory_mb: Option<f32>,
    /// Number of samples currently buffered.
    pub sample_count: usize,
    /// Particle count from the newest sample, 0 when empty.
    pub last_particle_count: u32,
}

/// Bounded recorder of per-tick performance metrics.
pub struct PerformanceMonitor {
    /// The bounded sample store. Oldest-first eviction once full.
    samples: RingBuffer<MetricSample>,
    /// Baseline for sample timestamps.
    epoch: Instant,
    /// Host memory introspection, queried at record time.
    probe: Box<dyn MemoryProbe>,
}

impl PerformanceMonitor {
    /// Creates a monitor with the default capacity and the host memory
    /// probe.
    #[must_use]
    pub fn new() -> Self {
        Self::with_probe(Box::new(ResidentMemoryProbe))
    }

    /// Creates a monitor with a custom memory probe.
    #[must_use]
    pub fn with_probe(probe: Box<dyn MemoryProbe>) -> Self {
        Self {
            samples: RingBuffer::new(METRIC_CAPACITY),
            epoch: Instant::now(),
            probe,
        }
    }

    /// Records one tick's metrics.
    ///
    /// Stamps the sample with elapsed time since the epoch, attaches a
    /// memory reading when the probe has one, and appends. Once the
    /// buffer exceeds its capacity the oldest sample is evicted (FIFO),
    /// so memory stays O(capacity) regardless of run length.
    pub fn record(&mut self, fps: f32, render_time_ms: f32, particle_count: u32) {
        let sample = MetricSample {
            fps,
            render_time_ms,
            particle_count,
            memory_mb: self.memory_usage_mb(),
            timestamp_ms: self.epoch.elapsed().as_secs_f64() * 1000.0,
        };
        let _ = self.samples.push(sample);
    }

    /// Mean FPS over the newest [`RECENT_WINDOW`] samples.
    ///
    /// Returns [`DEFAULT_FPS`] while the buffer is empty.
    #[must_use]
    pub fn average_fps(&self) -> f32 {
        if self.samples.is_empty() {
            return DEFAULT_FPS;
        }

        let window: Vec<f32> = self.samples.recent(RECENT_WINDOW).map(|s| s.fps).collect();
        window.iter().sum::<f32>() / window.len() as f32
    }

    /// Mean render time over the newest [`RECENT_WINDOW`] samples,
    /// rounded to two decimal places.
    ///
    /// Returns [`DEFAULT_RENDER_TIME_MS`] while the buffer is empty.
    #[must_use]
    pub fn average_render_time_ms(&self) -> f32 {
        if self.samples.is_empty() {
            return DEFAULT_RENDER_TIME_MS;
        }

        let window: Vec<f32> = self
            .samples
            .recent(RECENT_WINDOW)
            .map(|s| s.render_time_ms)
            .collect();
        let mean = window.iter().sum::<f32>() / window.len() as f32;
        (mean * 100.0).round() / 100.0
    }

    /// Current resident memory in MiB, or `None` when the host cannot
    /// report it. Never synthesized.
    #[must_use]
    pub fn memory_usage_mb(&self) -> Option<f32> {
        self.probe
            .resident_bytes()
            .map(|bytes| bytes as f32 / (1024.0 * 1024.0))
    }

    /// Point-in-time snapshot of the rolling aggregates.
    #[must_use]
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            average_fps: self.average_fps(),
            average_render_time_ms: self.average_render_time_ms(),
            memory_mb: self.memory_usage_mb(),
            sample_count: self.samples.len(),
            last_particle_count: self.samples.back().map_or(0, |s| s.particle_count),
        }
    }

    /// Empties the buffer and resets the timestamp epoch to now.
    ///
    /// Starts a fresh measurement epoch, e.g. after a configuration
    /// change.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.epoch = Instant::now();
        tracing::debug!("performance monitor cleared, new measurement epoch");
    }

    /// Number of buffered samples.
    #[inline]
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Iterates the buffered samples, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &MetricSample> {
        self.samples.iter()
    }
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}
