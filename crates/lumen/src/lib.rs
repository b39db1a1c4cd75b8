//! # LUMEN
//!
//! Real-time visual-effects core: a fixed-capacity particle pool, a
//! frame-rate-aware scheduler, and a bounded performance recorder.
//!
//! ## Architecture (the three leaves)
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        EFFECTS LOOP                              │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  ┌───────────────┐    delta    ┌───────────────┐                 │
//! │  │ FrameScheduler│────────────>│ ParticlePool  │                 │
//! │  │               │             │               │                 │
//! │  │ • idle/sched  │             │ • update      │                 │
//! │  │ • frame cap   │             │ • respawn     │                 │
//! │  │ • rolling FPS │             │ • zero alloc  │                 │
//! │  └───────┬───────┘             └───────┬───────┘                 │
//! │          │ fps                         │ count, render time      │
//! │          v                             v                         │
//! │  ┌──────────────────────────────────────────────┐                │
//! │  │ PerformanceMonitor (passive sink, bounded)   │                │
//! │  └──────────────────────────────────────────────┘                │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flow: the scheduler computes delta-time and gates the tick; the
//! callback advances the pool and measures its own duration; the loop
//! records duration + current FPS + particle count into the monitor; the
//! monitor exposes aggregated summaries to any external observer.
//!
//! ## Modules
//!
//! - `config`: TOML configuration, loaded once at startup
//! - `viewport`: host viewport seam with a fixed-extent fallback
//! - `effects_loop`: frame orchestration tying the leaves together

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod effects_loop;
pub mod viewport;

// Re-export the leaves
pub use lumen_frame as frame;
pub use lumen_particles as particles;
pub use lumen_telemetry as telemetry;

// Re-export commonly used types
pub use config::{ConfigError, EffectsConfig};
pub use effects_loop::EffectsLoop;
pub use viewport::{FixedViewport, HeadlessViewport, ViewportProvider};
