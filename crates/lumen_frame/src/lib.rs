//! # LUMEN Frame
//!
//! Frame-rate-aware scheduler driving a per-tick callback at the host's
//! refresh cadence with a well-formed, bounded delta-time.
//!
//! ## State machine
//!
//! ```text
//! idle ──enable()──> scheduled ──frame fires──> run-or-skip ──re-arm──> scheduled
//!   ^                                                                      │
//!   └────────────────────────── disable() ────────────────────────────────┘
//! ```
//!
//! There are no other states. Disabling cancels the outstanding frame
//! request; a cancelled request that fires anyway is dropped, so a disabled
//! scheduler guarantees zero further callback invocations.
//!
//! ## Determinism
//!
//! The scheduler never reads a clock on its own: the host hands it a
//! timestamp per tick. Tests inject synthetic timestamps instead of a real
//! frame-request primitive. [`MonotonicClock`] supplies real timestamps in
//! production.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod clock;
pub mod config;
pub mod scheduler;

pub use clock::{Clock, MonotonicClock};
pub use config::AnimationConfig;
pub use scheduler::{FrameRequest, FrameScheduler, SchedulerState, TickOutcome};
