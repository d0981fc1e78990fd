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

//! # Worker-Orchestrated Solver
//!
//! A high-level facade that constructs a technique from the registry,
//! runs it on a dedicated worker thread, and monitors it from the calling
//! thread. The monitoring side owns the two cooperative levers the core
//! exposes: it polls the lock-free progress counters and, when a
//! wall-clock budget is configured, sets the stop flag once the budget
//! elapses. The worker observes the flag at its next step boundary, so
//! the in-progress step always completes before the run winds down.

use crate::{
    config::TechniqueConfig,
    registry::{TechniqueKind, TechniqueRegistry, UnknownTechniqueError},
};
use billet_model::model::Model;
use billet_search::{
    num::CostNumeric, problem::PlacementProblem, result::TechniqueOutcome,
};
use std::time::{Duration, Instant};

/// Builder for `Solver`.
#[derive(Debug)]
pub struct SolverBuilder<T>
where
    T: CostNumeric + 'static,
{
    registry: TechniqueRegistry<T>,
    config: TechniqueConfig,
    time_limit: Option<Duration>,
    poll_interval: Duration,
}

impl<T> SolverBuilder<T>
where
    T: CostNumeric + 'static,
{
    /// Creates a builder with the built-in registry and default
    /// configuration.
    #[inline]
    pub fn new() -> Self {
        Self {
            registry: TechniqueRegistry::with_builtins(),
            config: TechniqueConfig::default(),
            time_limit: None,
            poll_interval: Duration::from_millis(10),
        }
    }

    /// Replaces the technique registry.
    #[inline]
    pub fn with_registry(mut self, registry: TechniqueRegistry<T>) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the technique configuration.
    #[inline]
    pub fn with_config(mut self, config: TechniqueConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets a wall-clock budget, enforced by polling plus flag-setting
    /// from the monitoring thread.
    #[inline]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Sets how often the monitoring thread wakes up.
    #[inline]
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Builds the `Solver`.
    #[inline]
    pub fn build(self) -> Solver<T> {
        Solver {
            registry: self.registry,
            config: self.config,
            time_limit: self.time_limit,
            poll_interval: self.poll_interval,
        }
    }
}

impl<T> Default for SolverBuilder<T>
where
    T: CostNumeric + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Single-run orchestration: registry lookup, worker thread, monitoring.
#[derive(Debug)]
pub struct Solver<T>
where
    T: CostNumeric + 'static,
{
    registry: TechniqueRegistry<T>,
    config: TechniqueConfig,
    time_limit: Option<Duration>,
    poll_interval: Duration,
}

impl<T> Solver<T>
where
    T: CostNumeric + 'static,
{
    /// Returns the configured wall-clock budget, if any.
    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Solves the given model with the selected technique.
    ///
    /// The technique runs on a dedicated worker thread while this thread
    /// monitors it; the call returns once the worker finishes.
    pub fn solve(
        &self,
        model: Model<T>,
        kind: TechniqueKind,
    ) -> Result<TechniqueOutcome<T>, UnknownTechniqueError> {
        let problem = PlacementProblem::new(model);
        let mut technique = self.registry.construct(kind, problem, &self.config)?;

        let stop = technique.stop_handle();
        let progress = technique.progress();

        tracing::info!(technique = %technique.name(), "solve started");

        let outcome = std::thread::scope(|scope| {
            let worker = scope.spawn(move || technique.run());

            let started = Instant::now();
            let mut budget_spent = false;
            while !worker.is_finished() {
                if let Some(limit) = self.time_limit {
                    if !budget_spent && started.elapsed() >= limit {
                        stop.request_stop();
                        budget_spent = true;
                        tracing::info!(?limit, "time budget elapsed, stop requested");
                    }
                }
                std::thread::sleep(self.poll_interval);
            }

            worker.join().expect("technique worker thread panicked")
        });

        tracing::info!(
            reason = %outcome.termination_reason(),
            steps = progress.snapshot().steps,
            "solve finished"
        );

        Ok(outcome)
    }
}
