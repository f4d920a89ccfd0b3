//! # Frame Loop
//!
//! ```text
//! Browser:  rAF(t0) ─> task.frame(dt) ─> rAF(t1) ─> task.frame(dt) ─> ...
//!                                      (unmount cancels the pending rAF)
//!
//! Native:   worker ── recv_timeout(16ms) ──┬─ timeout   ─> task.frame(dt)
//!                                          └─ stop/drop ─> exit, join
//! ```
//!
//! Both drivers feed a [`FrameTask`] one call per frame and honour
//! [`FrameControl::Stop`]. Delta time is clamped so a long pause (tab in the
//! background, debugger) does not produce one huge step.

use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{RecvTimeoutError, Sender};

use crate::config::FrameConfig;
use crate::error::{FxError, FxResult};

/// Whether a frame driver should schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Schedule the next frame.
    Continue,
    /// Stop the loop.
    Stop,
}

/// Work done once per display frame.
pub trait FrameTask {
    /// Runs one frame. `dt` is seconds since the previous frame.
    fn frame(&mut self, dt: f32) -> FrameControl;
}

impl<F> FrameTask for F
where
    F: FnMut(f32) -> FrameControl,
{
    fn frame(&mut self, dt: f32) -> FrameControl {
        self(dt)
    }
}

/// Turns successive frame timestamps (ms) into clamped delta times.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Largest delta handed to a task, in seconds.
    pub const MAX_DELTA: f32 = 0.1;

    /// A clock that has not seen a frame yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_ms: None }
    }

    /// Records a timestamp and returns seconds since the previous one.
    ///
    /// The first tick returns `0.0`. Timestamps that go backwards yield `0.0`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(prev) => ((now_ms - prev) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.min(Self::MAX_DELTA)
    }

    /// Forgets the previous timestamp.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Frame timing statistics.
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    /// Frames run.
    pub frames: u64,
    /// Sum of frame deltas in seconds.
    pub total_secs: f64,
    /// Shortest delta seen.
    pub min_dt: f32,
    /// Longest delta seen.
    pub max_dt: f32,
}

impl FrameStats {
    /// Empty statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frames: 0,
            total_secs: 0.0,
            min_dt: f32::INFINITY,
            max_dt: 0.0,
        }
    }

    /// Records one frame delta.
    pub fn record(&mut self, dt: f32) {
        self.frames += 1;
        self.total_secs += f64::from(dt);
        self.min_dt = self.min_dt.min(dt);
        self.max_dt = self.max_dt.max(dt);
    }

    /// Returns average frame time in milliseconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames == 0 {
            return 0.0;
        }
        self.total_secs * 1000.0 / self.frames as f64
    }

    /// Returns average FPS.
    #[must_use]
    pub fn avg_fps(&self) -> f64 {
        let avg_ms = self.avg_frame_ms();
        if avg_ms <= 0.0 {
            return 0.0;
        }
        1000.0 / avg_ms
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Bookkeeping for a self-rescheduling frame chain.
///
/// `H` is the platform's handle for a requested frame; dropping it must
/// cancel that frame. Once [`stop`](Self::stop) has been called no handle
/// is kept and [`begin_frame`](Self::begin_frame) refuses to run a body.
#[derive(Debug)]
pub struct FrameSlot<H> {
    pending: Option<H>,
    running: bool,
}

impl<H> FrameSlot<H> {
    /// A running slot with nothing scheduled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            running: true,
        }
    }

    /// Called first thing in a frame callback. Forgets the handle that just
    /// fired and returns whether the frame body may run.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        self.running
    }

    /// Keeps `handle` as the next frame. A stopped slot drops it at once.
    pub fn arm(&mut self, handle: H) {
        if self.running {
            self.pending = Some(handle);
        }
    }

    /// Stops the chain and cancels the pending frame. Returns whether the
    /// chain was running.
    pub fn stop(&mut self) -> bool {
        self.pending = None;
        std::mem::replace(&mut self.running, false)
    }

    /// Whether [`stop`](Self::stop) has not been called yet.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a frame is scheduled.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H> Default for FrameSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives a [`FrameTask`] on a worker thread at a fixed interval.
///
/// The native stand-in for a display refresh callback. Stopping (or
/// dropping) signals the worker and joins it, so once [`stop`](Self::stop)
/// returns the task is never called again.
pub struct FixedIntervalLoop {
    stop_tx: Option<Sender<()>>,
    worker: Option<JoinHandle<FrameStats>>,
}

impl FixedIntervalLoop {
    /// Starts the worker. The first frame runs one `interval` from now.
    ///
    /// # Errors
    ///
    /// [`FxError::DriverSpawn`] if the OS refuses the thread.
    pub fn spawn<T>(mut task: T, interval: Duration) -> FxResult<Self>
    where
        T: FrameTask + Send + 'static,
    {
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(1);

        let worker = std::thread::Builder::new()
            .name("folio-frame".to_owned())
            .spawn(move || {
                let mut stats = FrameStats::new();
                let mut last = Instant::now();
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                    let now = Instant::now();
                    let dt = now
                        .duration_since(last)
                        .as_secs_f32()
                        .min(FrameClock::MAX_DELTA);
                    last = now;
                    stats.record(dt);
                    if task.frame(dt) == FrameControl::Stop {
                        break;
                    }
                }
                stats
            })
            .map_err(|e| FxError::DriverSpawn(e.to_string()))?;

        tracing::debug!(interval_ms = interval.as_millis() as u64, "fixed-interval frame loop started");
        Ok(Self {
            stop_tx: Some(stop_tx),
            worker: Some(worker),
        })
    }

    /// Starts the worker at the configured fallback interval.
    ///
    /// # Errors
    ///
    /// As [`spawn`](Self::spawn).
    pub fn with_config<T>(task: T, config: &FrameConfig) -> FxResult<Self>
    where
        T: FrameTask + Send + 'static,
    {
        Self::spawn(task, config.fallback_interval())
    }

    /// Whether the worker has exited (stopped itself or was stopped).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Stops the loop, waits for the worker, and returns its statistics.
    #[must_use = "stopping returns the loop's frame statistics"]
    pub fn stop(mut self) -> FrameStats {
        self.shutdown()
    }

    fn shutdown(&mut self) -> FrameStats {
        if let Some(tx) = self.stop_tx.take() {
            // Worker may already be gone; a closed channel stops it too.
            let _ = tx.try_send(());
        }
        let Some(worker) = self.worker.take() else {
            return FrameStats::new();
        };
        match worker.join() {
            Ok(stats) => {
                tracing::debug!(frames = stats.frames, avg_ms = stats.avg_frame_ms(), "frame loop stopped");
                stats
            }
            Err(_) => {
                tracing::warn!("frame task panicked");
                FrameStats::new()
            }
        }
    }
}

impl Drop for FixedIntervalLoop {
    fn drop(&mut self) {
        self.shutdown();
    }
}
