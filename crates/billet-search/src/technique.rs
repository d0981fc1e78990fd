// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The common surface of all solving techniques.
//!
//! A technique instance runs single-threaded and cooperatively: its run
//! loop is intended to execute on a dedicated worker while a monitoring
//! caller polls progress from another thread. Coordination happens through
//! two cloneable handles backed by atomics: `StopHandle` for cooperative
//! cancellation and `ProgressHandle` for lock-free counters. Cancellation
//! is observed at discrete step boundaries only (the end of a leaf, a
//! frontier pop, or an iteration); there is no preemption and no internal
//! timeout. Bounding wall-clock time is the monitoring side's job: poll,
//! then set the stop flag.

use crate::{num::CostNumeric, result::TechniqueOutcome, state::AssignmentState};
use std::sync::{
    atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering},
    Arc,
};

/// A cloneable handle used to request cooperative cancellation of a
/// running technique from another thread.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    /// Creates a new `StopHandle` with the stop flag cleared.
    #[inline]
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Requests the technique to stop at its next step boundary.
    #[inline]
    pub fn request_stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Checks whether a stop has been requested.
    #[inline]
    pub fn is_stop_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Clears the stop flag, e.g. before reusing a technique instance.
    #[inline]
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

/// Shared atomic progress counters.
///
/// Writers update these at step boundaries; readers on other threads get
/// eventually-consistent values without any locking.
#[derive(Debug, Default)]
struct ProgressCounters {
    steps: AtomicU64,
    best_cost: AtomicI64,
    best_step: AtomicU64,
    has_best: AtomicBool,
    running: AtomicBool,
}

/// A cloneable handle onto a technique's progress counters.
#[derive(Debug, Clone, Default)]
pub struct ProgressHandle {
    counters: Arc<ProgressCounters>,
}

/// An instantaneous view of a technique's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Steps completed so far (leaves, frontier pops, or iterations,
    /// depending on the technique).
    pub steps: u64,
    /// The best objective observed so far, if any solution was seen.
    pub best_cost: Option<i64>,
    /// The step at which the best objective was observed.
    pub best_step: u64,
    /// Whether the run loop is currently executing.
    pub running: bool,
}

impl ProgressHandle {
    /// Creates a new `ProgressHandle` with all counters zeroed.
    #[inline]
    pub fn new() -> Self {
        Self {
            counters: Arc::new(ProgressCounters::default()),
        }
    }

    /// Records one completed step.
    #[inline]
    pub fn on_step(&self) {
        self.counters.steps.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a new best objective observed at the given step.
    #[inline]
    pub fn record_best(&self, cost: i64, step: u64) {
        self.counters.best_cost.store(cost, Ordering::Relaxed);
        self.counters.best_step.store(step, Ordering::Relaxed);
        self.counters.has_best.store(true, Ordering::Relaxed);
    }

    /// Marks the run loop as executing or finished.
    #[inline]
    pub fn set_running(&self, running: bool) {
        self.counters.running.store(running, Ordering::Relaxed);
    }

    /// Checks whether the run loop is currently executing.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.counters.running.load(Ordering::Relaxed)
    }

    /// Resets all counters, e.g. before reusing a technique instance.
    pub fn reset(&self) {
        self.counters.steps.store(0, Ordering::Relaxed);
        self.counters.best_cost.store(0, Ordering::Relaxed);
        self.counters.best_step.store(0, Ordering::Relaxed);
        self.counters.has_best.store(false, Ordering::Relaxed);
        self.counters.running.store(false, Ordering::Relaxed);
    }

    /// Takes an instantaneous, eventually-consistent view of the counters.
    pub fn snapshot(&self) -> ProgressSnapshot {
        let has_best = self.counters.has_best.load(Ordering::Relaxed);
        ProgressSnapshot {
            steps: self.counters.steps.load(Ordering::Relaxed),
            best_cost: if has_best {
                Some(self.counters.best_cost.load(Ordering::Relaxed))
            } else {
                None
            },
            best_step: self.counters.best_step.load(Ordering::Relaxed),
            running: self.counters.running.load(Ordering::Relaxed),
        }
    }
}

/// The surface shared by every solving technique.
///
/// Construction happens per technique (problem plus tunable parameters);
/// this trait covers the run lifecycle and the accessors a monitoring
/// caller relies on.
pub trait Technique<T>
where
    T: CostNumeric,
{
    /// Returns the name of the technique.
    fn name(&self) -> &str;

    /// Runs the technique to completion on the calling thread.
    fn run(&mut self) -> TechniqueOutcome<T>;

    /// Returns a handle for requesting cooperative cancellation.
    fn stop_handle(&self) -> StopHandle;

    /// Returns a handle onto the lock-free progress counters.
    fn progress(&self) -> ProgressHandle;

    /// Requests the technique to stop at its next step boundary.
    fn request_stop(&self) {
        self.stop_handle().request_stop();
    }

    /// Checks whether the run loop is currently executing.
    fn is_running(&self) -> bool {
        self.progress().is_running()
    }

    /// Returns an independent snapshot of the live state.
    fn current_state(&self) -> AssignmentState;

    /// Returns an independent snapshot of the best state found so far.
    ///
    /// Techniques that retain only numeric best-cost statistics (the
    /// stochastic ones) return `None`; their answer is the final current
    /// state.
    fn best_state(&self) -> Option<AssignmentState>;
}

impl<T> std::fmt::Debug for dyn Technique<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Technique({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn Technique<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Technique({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_handle_roundtrip() {
        let handle = StopHandle::new();
        assert!(!handle.is_stop_requested());

        handle.request_stop();
        assert!(handle.is_stop_requested());

        handle.reset();
        assert!(!handle.is_stop_requested());
    }

    #[test]
    fn test_stop_handle_clones_share_the_flag() {
        let handle = StopHandle::new();
        let observer = handle.clone();

        handle.request_stop();
        assert!(observer.is_stop_requested());
    }

    #[test]
    fn test_progress_snapshot_without_best() {
        let progress = ProgressHandle::new();
        progress.on_step();
        progress.on_step();

        let snapshot = progress.snapshot();
        assert_eq!(snapshot.steps, 2);
        assert_eq!(snapshot.best_cost, None);
        assert!(!snapshot.running);
    }

    #[test]
    fn test_progress_records_best_and_running() {
        let progress = ProgressHandle::new();
        let observer = progress.clone();

        progress.set_running(true);
        progress.on_step();
        progress.record_best(-3, 1);

        let snapshot = observer.snapshot();
        assert_eq!(snapshot.steps, 1);
        assert_eq!(snapshot.best_cost, Some(-3));
        assert_eq!(snapshot.best_step, 1);
        assert!(snapshot.running);
    }

    #[test]
    fn test_progress_reset_clears_everything() {
        let progress = ProgressHandle::new();
        progress.on_step();
        progress.record_best(5, 1);
        progress.set_running(true);

        progress.reset();
        let snapshot = progress.snapshot();
        assert_eq!(snapshot.steps, 0);
        assert_eq!(snapshot.best_cost, None);
        assert!(!snapshot.running);
    }
}
