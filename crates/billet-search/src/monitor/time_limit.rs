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

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::CostNumeric,
};
use std::time::{Duration, Instant};

/// A monitor that requests termination once a wall-clock budget has
/// elapsed.
///
/// The budget is enforced cooperatively: the clock is consulted at step
/// boundaries, so an in-progress step always completes and the run may
/// overshoot the limit by the duration of one step.
#[derive(Debug, Clone)]
pub struct TimeLimitMonitor<T> {
    start_time: Instant,
    limit: Duration,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> TimeLimitMonitor<T> {
    /// Creates a new `TimeLimitMonitor` with the given wall-clock budget.
    /// The clock starts when the monitor observes `on_enter_search`.
    #[inline]
    pub fn new(limit: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            limit,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the configured wall-clock budget.
    #[inline]
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl<T> SearchMonitor<T> for TimeLimitMonitor<T>
where
    T: CostNumeric,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self) {
        self.start_time = Instant::now();
    }

    fn on_exit_search(&mut self) {}
    fn on_step(&mut self) {}
    fn on_solution_found(&mut self, _cost: T, _step: u64) {}

    fn search_command(&self) -> SearchCommand {
        if self.start_time.elapsed() >= self.limit {
            SearchCommand::Terminate(format!(
                "Time limit of {:.2?} reached",
                self.limit
            ))
        } else {
            SearchCommand::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_generous_budget_continues() {
        let mut monitor = TimeLimitMonitor::<IntegerType>::new(Duration::from_secs(3600));
        monitor.on_enter_search();
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_zero_budget_terminates_immediately() {
        let mut monitor = TimeLimitMonitor::<IntegerType>::new(Duration::ZERO);
        monitor.on_enter_search();
        assert!(matches!(
            monitor.search_command(),
            SearchCommand::Terminate(_)
        ));
    }
}
