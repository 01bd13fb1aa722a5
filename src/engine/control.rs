// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Worker flags and the pause handshake.
//!
//! The worker owns all solver state while a job runs. The only things shared
//! with the controlling thread are the flags in [`WorkerControl`]:
//! - `stop`: cooperative cancellation, polled between marks
//! - `working`: the busy guard, set for the lifetime of a job
//! - the [`PauseGate`], where the worker suspends after a notification
//!   until it is resumed or stopped

use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct GateState {
    paused: bool,
    release: bool,
    pause_next: bool,
}

/// Suspend/resume handshake between the worker and the controlling thread.
#[derive(Debug, Default)]
pub struct PauseGate {
    state: Mutex<GateState>,
    cv: Condvar,
}

impl PauseGate {
    /// Ask the worker to suspend at its next pause point.
    pub fn request_pause(&self) {
        self.state.lock().pause_next = true;
    }

    pub fn pause_requested(&self) -> bool {
        self.state.lock().pause_next
    }

    /// Let a suspended worker continue. Has no effect if the worker is running.
    pub fn resume(&self) -> bool {
        let mut state = self.state.lock();
        if !state.paused {
            return false;
        }
        state.release = true;
        self.cv.notify_all();
        true
    }

    pub fn is_paused(&self) -> bool {
        self.state.lock().paused
    }

    /// Block until resumed or until `stop` is raised.
    fn suspend(&self, stop: &AtomicBool) {
        let mut state = self.state.lock();
        state.pause_next = false;
        if stop.load(Ordering::Acquire) {
            return;
        }
        state.paused = true;
        state.release = false;
        while !state.release && !stop.load(Ordering::Acquire) {
            self.cv.wait(&mut state);
        }
        state.paused = false;
        state.release = false;
    }

    /// Wake a suspended worker so it can observe the stop flag.
    fn wake(&self) {
        let _state = self.state.lock();
        self.cv.notify_all();
    }
}

/// Flags shared between a running job and its controller.
#[derive(Debug, Default)]
pub struct WorkerControl {
    stop: AtomicBool,
    working: AtomicBool,
    gate: PauseGate,
}

impl WorkerControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    /// Ask the running job to unwind. A suspended worker is released.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Release);
        self.gate.wake();
    }

    /// Raised by the worker itself, e.g. when a solution makes further search redundant.
    pub(crate) fn raise_stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    pub(crate) fn clear_stop(&self) {
        self.stop.store(false, Ordering::Release);
    }

    pub fn is_working(&self) -> bool {
        self.working.load(Ordering::Acquire)
    }

    /// Mark a job as running. The returned guard clears both flags when dropped,
    /// including when the job panics.
    ///
    /// Returns None if a job is already running.
    pub(crate) fn begin(self: &Arc<Self>) -> Option<WorkGuard> {
        if self
            .working
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }
        self.clear_stop();
        Some(WorkGuard(Arc::clone(self)))
    }

    pub fn gate(&self) -> &PauseGate {
        &self.gate
    }

    /// Suspend if a job is running and `wanted`.
    ///
    /// A pending pause request is not consulted here: the caller folds it
    /// into `wanted` through the pause table, and it stays pending across
    /// notifications that never pause.
    pub(crate) fn pause_point(&self, wanted: bool) {
        if wanted && self.is_working() {
            self.gate.suspend(&self.stop);
        }
    }
}

/// Busy guard for one job.
#[derive(Debug)]
pub struct WorkGuard(Arc<WorkerControl>);

impl Drop for WorkGuard {
    fn drop(&mut self) {
        self.0.working.store(false, Ordering::Release);
        self.0.stop.store(false, Ordering::Release);
    }
}
