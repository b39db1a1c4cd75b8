//! # LUMEN Telemetry
//!
//! Bounded recorder of per-tick performance metrics.
//!
//! ## Architecture Rules
//!
//! 1. **Bounded by construction** - the sample buffer is a fixed-capacity
//!    ring; eviction is structural, not ad hoc trimming
//! 2. **Passive sink** - the monitor holds no reference to the pool or the
//!    scheduler; callers push samples in
//! 3. **Degrade, don't fail** - an empty buffer yields defaults, a missing
//!    memory probe yields `None`, never an error
//!
//! ## Example
//!
//! ```rust
//! use lumen_telemetry::PerformanceMonitor;
//!
//! let mut monitor = PerformanceMonitor::new();
//! monitor.record(60.0, 4.2, 500);
//!
//! let summary = monitor.summary();
//! assert_eq!(summary.last_particle_count, 500);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod memory;
pub mod monitor;
pub mod ring;

pub use memory::{MemoryProbe, NullProbe, ResidentMemoryProbe};
pub use monitor::{
    MetricSample, MetricsSummary, PerformanceMonitor, DEFAULT_FPS, DEFAULT_RENDER_TIME_MS,
    METRIC_CAPACITY, RECENT_WINDOW,
};
pub use ring::RingBuffer;
