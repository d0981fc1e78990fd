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

//! Technique outcome and termination reporting.
//!
//! This module encapsulates the final result produced by a technique run:
//! the best solution discovered (if any), aggregate run statistics, and a
//! concise termination reason. The reasons distinguish between exhausting
//! the search space, the stochastic stopping rule firing, cooperative
//! abortion, and structural infeasibility detected at initialization.

use crate::err::InfeasibleError;
use billet_model::solution::Solution;
use std::time::Duration;

/// Why a technique run ended.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// The deterministic search space was fully explored up to the
    /// requested depth.
    Exhausted,

    /// The stochastic stopping rule was satisfied.
    Converged,

    /// The run was aborted cooperatively (stop flag or monitor).
    /// The string names the source of the abort.
    Aborted(String),

    /// The configuration was structurally infeasible at initialization.
    Infeasible(InfeasibleError),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Exhausted => write!(f, "Search Space Exhausted"),
            TerminationReason::Converged => write!(f, "Stopping Rule Satisfied"),
            TerminationReason::Aborted(msg) => write!(f, "Aborted: {}", msg),
            TerminationReason::Infeasible(err) => write!(f, "Infeasible: {}", err),
        }
    }
}

/// Aggregate metrics shared by all technique families.
///
/// `steps` counts the technique's natural unit of work: goal leaves for
/// depth-first search, frontier pops for breadth-first search, iterations
/// for annealing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunStatistics {
    /// Steps performed by the run loop.
    pub steps: u64,

    /// Number of solutions encountered during the run.
    pub solutions_found: u64,

    /// Total time taken by the run.
    pub time_total: Duration,
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self {
            steps: 0,
            solutions_found: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl RunStatistics {
    /// Called at each step of the run loop.
    #[inline]
    pub fn on_step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    /// Called when a solution is encountered.
    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    /// Sets the total time taken by the run.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Run Statistics:")?;
        writeln!(f, "  Steps:            {}", self.steps)?;
        writeln!(f, "  Solutions Found:  {}", self.solutions_found)?;
        writeln!(f, "  Total Time:       {:.2?}", self.time_total)
    }
}

/// Result of a technique run after termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechniqueOutcome<T> {
    termination_reason: TerminationReason,
    solution: Option<Solution<T>>,
    statistics: RunStatistics,
}

impl<T> TechniqueOutcome<T> {
    /// Creates an outcome for a fully exhausted deterministic search.
    #[inline]
    pub fn exhausted(solution: Option<Solution<T>>, statistics: RunStatistics) -> Self {
        Self {
            termination_reason: TerminationReason::Exhausted,
            solution,
            statistics,
        }
    }

    /// Creates an outcome for a satisfied stochastic stopping rule.
    #[inline]
    pub fn converged(solution: Option<Solution<T>>, statistics: RunStatistics) -> Self {
        Self {
            termination_reason: TerminationReason::Converged,
            solution,
            statistics,
        }
    }

    /// Creates an outcome for a cooperatively aborted run.
    #[inline]
    pub fn aborted<R>(
        solution: Option<Solution<T>>,
        reason: R,
        statistics: RunStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        Self {
            termination_reason: TerminationReason::Aborted(reason.into()),
            solution,
            statistics,
        }
    }

    /// Creates an outcome for a structurally infeasible configuration.
    #[inline]
    pub fn infeasible(error: InfeasibleError, statistics: RunStatistics) -> Self {
        Self {
            termination_reason: TerminationReason::Infeasible(error),
            solution: None,
            statistics,
        }
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the solution carried by this outcome, if any.
    #[inline]
    pub fn solution(&self) -> Option<&Solution<T>> {
        self.solution.as_ref()
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns the solution, if any.
    #[inline]
    pub fn into_solution(self) -> Option<Solution<T>> {
        self.solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::CapacityShortfallError;
    use billet_model::solution::Solution;

    #[test]
    fn test_exhausted_outcome_carries_solution_and_stats() {
        let mut stats = RunStatistics::default();
        stats.on_step();
        stats.on_solution_found();

        let solution = Solution::new(4i64, Vec::new());
        let outcome = TechniqueOutcome::exhausted(Some(solution.clone()), stats);

        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Exhausted
        );
        assert_eq!(outcome.solution(), Some(&solution));
        assert_eq!(outcome.statistics().steps, 1);
        assert_eq!(outcome.statistics().solutions_found, 1);
    }

    #[test]
    fn test_infeasible_outcome_has_no_solution() {
        let outcome: TechniqueOutcome<i64> = TechniqueOutcome::infeasible(
            CapacityShortfallError::new(1, 2).into(),
            RunStatistics::default(),
        );

        assert!(outcome.solution().is_none());
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Infeasible(_)
        ));
    }

    #[test]
    fn test_aborted_reason_is_rendered() {
        let outcome: TechniqueOutcome<i64> =
            TechniqueOutcome::aborted(None, "stop requested", RunStatistics::default());

        let rendered = format!("{}", outcome.termination_reason());
        assert!(rendered.contains("stop requested"));
    }

    #[test]
    fn test_statistics_display_formats_all_fields() {
        let mut stats = RunStatistics::default();
        stats.on_step();
        stats.set_total_time(Duration::from_millis(1500));

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Steps:            1"));
        assert!(rendered.contains("Solutions Found:  0"));
        assert!(rendered.contains("Total Time:"));
    }
}
