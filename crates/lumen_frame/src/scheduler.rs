//! # Frame Scheduler
//!
//! Invokes a caller-supplied callback once per display refresh with a
//! bounded delta-time, and reports a rolling FPS figure.
//!
//! ## Design
//!
//! The scheduler is an explicit state value plus a cancellation token, not
//! event-loop magic. The host owns the frame-request primitive: it calls
//! [`FrameScheduler::enable`] to arm the loop, delivers each fired frame to
//! [`FrameScheduler::tick`] with the request handle and a timestamp, and
//! re-arms from [`FrameScheduler::pending_request`]. A request invalidated
//! by [`FrameScheduler::disable`] is dropped on delivery, which is what
//! makes cancellation airtight: zero callback invocations after disable.

use crate::config::AnimationConfig;

/// The two scheduler states. There are no others.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    /// Not running; no frame request is outstanding.
    Idle,
    /// A frame request is outstanding and will be processed on delivery.
    Scheduled,
}

/// Handle to an outstanding frame request.
///
/// Acts as the cancellation token: a tick delivered with a handle that no
/// longer matches the scheduler's outstanding request is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest {
    /// Monotonically increasing request id.
    id: u64,
}

/// What a delivered tick amounted to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Scheduler is idle. Nothing ran, nothing re-armed.
    Disabled,
    /// The request was cancelled before delivery; tick dropped.
    Stale,
    /// First tick of a session: established the time baseline, no callback.
    Baseline,
    /// Delta met or exceeded the frame-time cap; callback skipped.
    Skipped {
        /// The over-budget delta, in milliseconds.
        delta_ms: f64,
    },
    /// Callback ran.
    Ran {
        /// Elapsed time since the previous tick, in milliseconds.
        delta_ms: f64,
    },
}

/// Frame-rate-aware animation scheduler.
///
/// Single-threaded and cooperative: the callback is synchronous and must
/// return before the next tick is considered. There is no overlap between
/// ticks.
pub struct FrameScheduler {
    /// Session configuration. Immutable once scheduling starts.
    config: AnimationConfig,
    /// Explicit state value.
    state: SchedulerState,
    /// Id of the outstanding frame request, if any.
    pending: Option<u64>,
    /// Next request id to hand out.
    next_request_id: u64,
    /// Timestamp of the previous processed tick.
    previous_time_ms: Option<f64>,
    /// Most recent whole-second FPS sample.
    reported_fps: u32,
    /// Ticks counted toward the current FPS window.
    frame_counter: u32,
    /// When the current FPS window opened.
    fps_window_start_ms: Option<f64>,
    /// Total ticks processed (baseline, run, and skipped).
    ticks_processed: u64,
    /// Ticks whose callback ran.
    frames_run: u64,
    /// Ticks skipped for exceeding the frame-time cap.
    frames_skipped: u64,
}

impl FrameScheduler {
    /// Creates an idle scheduler.
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            state: SchedulerState::Idle,
            pending: None,
            next_request_id: 0,
            previous_time_ms: None,
            // Assume the target rate until the first whole-second sample.
            reported_fps: 60,
            frame_counter: 0,
            fps_window_start_ms: None,
            ticks_processed: 0,
            frames_run: 0,
            frames_skipped: 0,
        }
    }

    /// Arms the scheduler: idle → scheduled.
    ///
    /// Returns the outstanding request handle, or `None` when the config
    /// gate is off. Calling while already scheduled returns the existing
    /// request unchanged.
    pub fn enable(&mut self) -> Option<FrameRequest> {
        if !self.config.enabled {
            tracing::debug!("enable ignored: animation disabled by config");
            return None;
        }

        if self.state == SchedulerState::Idle {
            self.state = SchedulerState::Scheduled;
            self.arm();
            tracing::info!("frame scheduler enabled");
        }

        self.pending_request()
    }

    /// Disables the scheduler: scheduled → idle.
    ///
    /// Synchronously cancels the outstanding frame request - a cancelled
    /// request that fires anyway is dropped by [`FrameScheduler::tick`],
    /// so the callback is never invoked again until re-enabled. The time
    /// baseline is cleared too: the stale delta spanning the disabled
    /// period can never reach the callback.
    pub fn disable(&mut self) {
        if self.state == SchedulerState::Scheduled {
            tracing::info!("frame scheduler disabled, outstanding request cancelled");
        }
        self.state = SchedulerState::Idle;
        self.pending = None;
        self.previous_time_ms = None;
        self.fps_window_start_ms = None;
        self.frame_counter = 0;
    }

    /// Processes one delivered frame.
    ///
    /// Behavior per tick at time `now_ms`:
    /// 1. Idle scheduler: nothing runs, nothing re-arms.
    /// 2. Cancelled request: dropped.
    /// 3. First tick of a session establishes the time baseline only.
    /// 4. Otherwise the callback runs with `delta = now - previous`, unless
    ///    the delta meets or exceeds the frame-time cap, in which case the
    ///    tick is silently skipped (no catch-up burst).
    /// 5. Re-arms unconditionally while enabled; the host fetches the new
    ///    handle from [`FrameScheduler::pending_request`].
    ///
    /// The rolling FPS figure is a whole-second, whole-frame-count sample:
    /// every processed tick increments a counter, and once a full second
    /// has elapsed since the window opened, the counter becomes the
    /// reported FPS and resets.
    pub fn tick<F>(&mut self, request: FrameRequest, now_ms: f64, mut callback: F) -> TickOutcome
    where
        F: FnMut(f64),
    {
        if self.state == SchedulerState::Idle {
            return TickOutcome::Disabled;
        }
        if self.pending != Some(request.id) {
            return TickOutcome::Stale;
        }

        self.pending = None;
        self.ticks_processed += 1;

        self.frame_counter += 1;
        match self.fps_window_start_ms {
            None => self.fps_window_start_ms = Some(now_ms),
            Some(start) if now_ms - start >= 1000.0 => {
                self.reported_fps = self.frame_counter;
                self.frame_counter = 0;
                self.fps_window_start_ms = Some(now_ms);
            }
            Some(_) => {}
        }

        let outcome = match self.previous_time_ms {
            None => {
                self.previous_time_ms = Some(now_ms);
                TickOutcome::Baseline
            }
            Some(previous) => {
                let delta_ms = now_ms - previous;
                self.previous_time_ms = Some(now_ms);

                if delta_ms < self.config.max_frame_time_ms {
                    callback(delta_ms);
                    self.frames_run += 1;
                    TickOutcome::Ran { delta_ms }
                } else {
                    self.frames_skipped += 1;
                    tracing::debug!(
                        "frame skipped: delta {:.2}ms exceeds cap {:.2}ms",
                        delta_ms,
                        self.config.max_frame_time_ms
                    );
                    TickOutcome::Skipped { delta_ms }
                }
            }
        };

        self.arm();
        outcome
    }

    /// Issues a fresh request id.
    fn arm(&mut self) {
        self.next_request_id += 1;
        self.pending = Some(self.next_request_id);
    }

    /// Returns the current state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    /// Is a frame request outstanding?
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state == SchedulerState::Scheduled
    }

    /// The outstanding request handle, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<FrameRequest> {
        self.pending.map(|id| FrameRequest { id })
    }

    /// Most recent whole-second FPS sample.
    #[inline]
    #[must_use]
    pub const fn fps(&self) -> u32 {
        self.reported_fps
    }

    /// Total ticks processed this scheduler's lifetime.
    #[inline]
    #[must_use]
    pub const fn ticks_processed(&self) -> u64 {
        self.ticks_processed
    }

    /// Ticks whose callback ran.
    #[inline]
    #[must_use]
    pub const fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Ticks skipped for exceeding the frame-time cap.
    #[inline]
    #[must_use]
    pub const fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }

    /// The session configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &AnimationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler(max_frame_time_ms: f64) -> FrameScheduler {
        FrameScheduler::new(AnimationConfig {
            enabled: true,
            max_frame_time_ms,
        })
    }

    /// Drives the outstanding request at `now_ms`, recording ran deltas.
    fn drive(s: &mut FrameScheduler, now_ms: f64, ran: &mut Vec<f64>) -> TickOutcome {
        let request = s.pending_request().expect("scheduler should be armed");
        s.tick(request, now_ms, |delta| ran.push(delta))
    }

    #[test]
    fn test_enable_arms_request() {
        let mut s = scheduler(16.67);
        assert_eq!(s.state(), SchedulerState::Idle);

        let request = s.enable();
        assert!(request.is_some());
        assert_eq!(s.state(), SchedulerState::Scheduled);

        // Enabling again keeps the same request.
        assert_eq!(s.enable(), request);
    }

    #[test]
    fn test_config_gate_blocks_enable() {
        let mut s = FrameScheduler::new(AnimationConfig {
            enabled: false,
            max_frame_time_ms: 16.67,
        });
        assert!(s.enable().is_none());
        assert_eq!(s.state(), SchedulerState::Idle);
    }

    #[test]
    fn test_first_tick_is_baseline() {
        let mut s = scheduler(16.67);
        let _ = s.enable();
        let mut ran = Vec::new();

        assert_eq!(drive(&mut s, 0.0, &mut ran), TickOutcome::Baseline);
        assert!(ran.is_empty());
        // Re-armed after the baseline tick.
        assert!(s.pending_request().is_some());
    }

    #[test]
    fn test_frame_time_cap_skips_slow_tick() {
        // Deltas 5, 5, 30, 5 against a 16.67ms cap: tick 3 is skipped.
        let mut s = scheduler(16.67);
        let _ = s.enable();
        let mut ran = Vec::new();

        assert_eq!(drive(&mut s, 0.0, &mut ran), TickOutcome::Baseline);
        assert_eq!(drive(&mut s, 5.0, &mut ran), TickOutcome::Ran { delta_ms: 5.0 });
        assert_eq!(drive(&mut s, 10.0, &mut ran), TickOutcome::Ran { delta_ms: 5.0 });
        assert_eq!(
            drive(&mut s, 40.0, &mut ran),
            TickOutcome::Skipped { delta_ms: 30.0 }
        );
        assert_eq!(drive(&mut s, 45.0, &mut ran), TickOutcome::Ran { delta_ms: 5.0 });

        assert_eq!(ran, vec![5.0, 5.0, 5.0]);
        assert_eq!(s.frames_run(), 3);
        assert_eq!(s.frames_skipped(), 1);
    }

    #[test]
    fn test_disable_cancels_outstanding_request() {
        let mut s = scheduler(16.67);
        let _ = s.enable();
        let mut ran = Vec::new();
        let _ = drive(&mut s, 0.0, &mut ran);

        let cancelled = s.pending_request().unwrap();
        s.disable();
        assert_eq!(s.state(), SchedulerState::Idle);

        // Simulated late deliveries after disable: zero invocations.
        for t in [10.0, 20.0, 30.0] {
            assert_eq!(
                s.tick(cancelled, t, |delta| ran.push(delta)),
                TickOutcome::Disabled
            );
        }
        assert!(ran.is_empty());
    }

    #[test]
    fn test_stale_request_dropped_after_reenable() {
        let mut s = scheduler(16.67);
        let _ = s.enable();
        let mut ran = Vec::new();
        let _ = drive(&mut s, 0.0, &mut ran);

        let old = s.pending_request().unwrap();
        s.disable();
        let new = s.enable().unwrap();
        assert_ne!(old, new);

        // The pre-disable request is dead even though we're scheduled again.
        assert_eq!(s.tick(old, 10.0, |delta| ran.push(delta)), TickOutcome::Stale);
        assert!(ran.is_empty());

        // The fresh session starts from a fresh baseline - the delta
        // spanning the disabled period never reaches the callback.
        assert_eq!(s.tick(new, 5000.0, |delta| ran.push(delta)), TickOutcome::Baseline);
        assert!(ran.is_empty());
    }

    #[test]
    fn test_fps_whole_second_sample() {
        let mut s = scheduler(1000.0);
        let _ = s.enable();
        let mut ran = Vec::new();

        // Window opens at the baseline tick (t=0). Ticks every 100ms:
        // the tick at t=1000 closes the window with 11 ticks counted.
        let _ = drive(&mut s, 0.0, &mut ran);
        assert_eq!(s.fps(), 60); // assumed target rate until first sample

        for i in 1..=10 {
            let _ = drive(&mut s, f64::from(i) * 100.0, &mut ran);
        }
        assert_eq!(s.fps(), 11);

        // Next window: 10 ticks over the following second.
        for i in 11..=20 {
            let _ = drive(&mut s, f64::from(i) * 100.0, &mut ran);
        }
        assert_eq!(s.fps(), 10);
    }
}
