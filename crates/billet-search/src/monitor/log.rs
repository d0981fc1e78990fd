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

/// A monitor that prints an interval-throttled progress table and emits
/// tracing events on run boundaries and new incumbents.
#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    steps: u64,
    best_cost: Option<T>,
}

impl<T> LogMonitor<T>
where
    T: CostNumeric,
{
    /// Creates a new `LogMonitor` that prints at most once per
    /// `log_interval`.
    pub fn new(log_interval: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            steps: 0,
            best_cost: None,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<14}",
            "Elapsed", "Steps", "Best Cost"
        );
        println!("{}", "-".repeat(44));
    }

    #[inline(always)]
    fn log_line(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best_cost_str = match &self.best_cost {
            Some(cost) => format!("{}", cost),
            None => "Inf".to_string(),
        };

        let elapsed_field = format!("{:.1}s", elapsed);
        println!(
            "{:<9} | {:<14} | {:<14}",
            elapsed_field, self.steps, best_cost_str
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogMonitor<T>
where
    T: CostNumeric,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: CostNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.steps = 0;
        self.best_cost = None;

        tracing::info!("search started");
        self.print_header();
    }

    fn on_exit_search(&mut self) {
        self.log_line();
        tracing::info!(
            steps = self.steps,
            elapsed = ?self.start_time.elapsed(),
            "search finished"
        );
    }

    fn on_step(&mut self) {
        self.steps += 1;
        if self.last_log_time.elapsed() >= self.log_interval {
            self.log_line();
        }
    }

    fn on_solution_found(&mut self, cost: T, step: u64) {
        self.best_cost = Some(cost);
        tracing::debug!(cost = %cost, step, "new best solution");
    }

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_log_monitor_never_terminates() {
        let mut monitor = LogMonitor::<IntegerType>::new(Duration::from_secs(3600));
        monitor.on_enter_search();
        monitor.on_step();
        monitor.on_solution_found(7, 1);
        monitor.on_exit_search();

        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_best_cost_tracks_latest_incumbent() {
        let mut monitor = LogMonitor::<IntegerType>::default();
        monitor.on_solution_found(9, 1);
        monitor.on_solution_found(4, 2);
        assert_eq!(monitor.best_cost, Some(4));
    }
}
