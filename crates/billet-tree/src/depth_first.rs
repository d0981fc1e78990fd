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

//! Exhaustive depth-first backtracking.
//!
//! The technique explores every branch of the deterministic search tree up
//! to a caller-supplied maximum level, using an explicit history stack of
//! `Move`s instead of recursion. One shared problem state is mutated
//! destructively; each descent is reversed exactly by the matching
//! retreat, and the cumulative cost is maintained incrementally (add the
//! delta on descent, subtract it on retreat).
//!
//! At every goal leaf the cumulative cost is compared against the best
//! known; improvements store an independent clone of the state together
//! with the leaf index. The cooperative stop flag and the monitor are
//! consulted between leaves only, so the leaf currently being explored
//! always completes first.

use crate::stats::TreeSearchStatistics;
use billet_model::solution::Solution;
use billet_search::{
    monitor::{
        no_op::NoOperationMonitor,
        search_monitor::{SearchCommand, SearchMonitor},
    },
    moves::Move,
    num::CostNumeric,
    problem::Problem,
    result::{RunStatistics, TechniqueOutcome},
    state::AssignmentState,
    technique::{ProgressHandle, StopHandle, Technique},
};
use num_traits::Zero;
use std::time::Instant;

/// Tunable parameters of the depth-first technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DepthFirstParams {
    max_level: Option<usize>,
}

impl DepthFirstParams {
    /// Explore the full tree, down to the goal level.
    #[inline]
    pub fn full_depth() -> Self {
        Self { max_level: None }
    }

    /// Explore only down to the given level.
    #[inline]
    pub fn to_level(max_level: usize) -> Self {
        Self {
            max_level: Some(max_level),
        }
    }

    /// Returns the configured maximum level, if bounded.
    #[inline]
    pub fn max_level(&self) -> Option<usize> {
        self.max_level
    }

    /// Resolves the effective maximum level for a problem with the given
    /// level count.
    #[inline]
    fn resolve(&self, num_levels: usize) -> usize {
        match self.max_level {
            Some(level) => level.min(num_levels),
            None => num_levels,
        }
    }
}

/// Exhaustive depth-first backtracking over the deterministic move
/// protocol.
#[derive(Debug)]
pub struct DepthFirstTechnique<T, P, M = NoOperationMonitor<T>>
where
    T: CostNumeric,
{
    problem: P,
    params: DepthFirstParams,
    monitor: M,
    stop: StopHandle,
    progress: ProgressHandle,
    best_state: Option<AssignmentState>,
    best_cost: Option<T>,
    best_leaf_index: u64,
    stats: TreeSearchStatistics,
}

impl<T, P> DepthFirstTechnique<T, P, NoOperationMonitor<T>>
where
    T: CostNumeric,
    P: Problem<T>,
{
    /// Creates a new unsupervised depth-first technique.
    pub fn new(problem: P, params: DepthFirstParams) -> Self {
        Self::with_monitor(problem, params, NoOperationMonitor::new())
    }
}

impl<T, P, M> DepthFirstTechnique<T, P, M>
where
    T: CostNumeric,
    P: Problem<T>,
    M: SearchMonitor<T>,
{
    /// Creates a new depth-first technique observed by the given monitor.
    pub fn with_monitor(problem: P, params: DepthFirstParams, monitor: M) -> Self {
        Self {
            problem,
            params,
            monitor,
            stop: StopHandle::new(),
            progress: ProgressHandle::new(),
            best_state: None,
            best_cost: None,
            best_leaf_index: 0,
            stats: TreeSearchStatistics::default(),
        }
    }

    /// Returns the statistics of the most recent run.
    #[inline]
    pub fn statistics(&self) -> &TreeSearchStatistics {
        &self.stats
    }

    /// Returns the best objective found by the most recent run, if any.
    #[inline]
    pub fn best_cost(&self) -> Option<T> {
        self.best_cost
    }

    /// Returns the 1-based index of the leaf at which the best objective
    /// was found.
    #[inline]
    pub fn best_leaf_index(&self) -> u64 {
        self.best_leaf_index
    }

    /// Pops the history stack and reverses the move, restoring the level
    /// and cumulative cost. Returns `false` when the stack is empty, i.e.
    /// the root has been exhausted.
    fn retreat_step(
        &mut self,
        history: &mut Vec<Move>,
        level: &mut usize,
        cumulative_cost: &mut T,
    ) -> bool {
        match history.pop() {
            Some(committed) => {
                *level = committed.level();
                *cumulative_cost = *cumulative_cost - self.problem.move_delta_cost(&committed);
                self.problem.retreat(committed);
                self.stats.on_backtrack();
                true
            }
            None => false,
        }
    }

    /// Handles a completed leaf: bookkeeping, best-state tracking, and the
    /// cooperative termination checks.
    fn visit_leaf(
        &mut self,
        level: usize,
        cumulative_cost: T,
        run_stats: &mut RunStatistics,
    ) -> Option<String> {
        self.stats.on_leaf_visited();
        run_stats.on_step();
        self.progress.on_step();
        self.monitor.on_step();

        if self.problem.is_goal_level(level) {
            self.stats.on_solution_found();
            run_stats.on_solution_found();

            let leaf_index = self.stats.leaves_visited;
            let improved = match self.best_cost {
                None => true,
                Some(best) => cumulative_cost < best,
            };

            if improved {
                self.best_cost = Some(cumulative_cost);
                self.best_state = Some(self.problem.state());
                self.best_leaf_index = leaf_index;
                self.progress.record_best(cumulative_cost.into(), leaf_index);
                self.monitor.on_solution_found(cumulative_cost, leaf_index);
            }
        }

        // The leaf has completed; only now is termination observed.
        if self.stop.is_stop_requested() {
            return Some("Stop requested".to_string());
        }
        if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
            return Some(reason);
        }
        None
    }

    fn best_solution(&self) -> Option<Solution<T>> {
        match (&self.best_state, self.best_cost) {
            (Some(state), Some(cost)) => {
                Some(Solution::new(cost, state.place_contents().to_vec()))
            }
            _ => None,
        }
    }
}

impl<T, P, M> Technique<T> for DepthFirstTechnique<T, P, M>
where
    T: CostNumeric,
    P: Problem<T>,
    M: SearchMonitor<T>,
{
    fn name(&self) -> &str {
        "DepthFirstTechnique"
    }

    fn run(&mut self) -> TechniqueOutcome<T> {
        let start_time = Instant::now();
        let mut run_stats = RunStatistics::default();

        self.stats = TreeSearchStatistics::default();
        self.best_state = None;
        self.best_cost = None;
        self.best_leaf_index = 0;
        self.progress.reset();
        self.progress.set_running(true);
        self.monitor.on_enter_search();

        if let Err(err) = self.problem.init_state() {
            run_stats.set_total_time(start_time.elapsed());
            self.stats.set_total_time(start_time.elapsed());
            self.monitor.on_exit_search();
            self.progress.set_running(false);
            return TechniqueOutcome::infeasible(err, run_stats);
        }

        let max_level = self.params.resolve(self.problem.num_levels());
        let mut history: Vec<Move> = Vec::with_capacity(max_level);
        let mut cumulative_cost = T::zero();
        let mut level = 0usize;
        self.stats.on_node_explored();

        // `None` means the stack emptied and the tree is exhausted;
        // `Some(reason)` names a cooperative abort.
        let abort_reason = loop {
            if level == max_level {
                if let Some(reason) = self.visit_leaf(level, cumulative_cost, &mut run_stats) {
                    break Some(reason);
                }
                if !self.retreat_step(&mut history, &mut level, &mut cumulative_cost) {
                    break None;
                }
                continue;
            }

            if self.problem.next_alternative(level) {
                let delta = self.problem.forward_delta_cost();
                let committed = self.problem.commit_forward();
                history.push(committed);
                cumulative_cost = cumulative_cost + delta;
                level += 1;
                self.stats.on_node_explored();
                self.stats.on_depth_update(level as u64);
            } else if !self.retreat_step(&mut history, &mut level, &mut cumulative_cost) {
                break None;
            }
        };

        run_stats.set_total_time(start_time.elapsed());
        self.stats.set_total_time(start_time.elapsed());
        self.monitor.on_exit_search();
        self.progress.set_running(false);

        let solution = self.best_solution();
        match abort_reason {
            None => TechniqueOutcome::exhausted(solution, run_stats),
            Some(reason) => TechniqueOutcome::aborted(solution, reason, run_stats),
        }
    }

    fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    fn progress(&self) -> ProgressHandle {
        self.progress.clone()
    }

    fn current_state(&self) -> AssignmentState {
        self.problem.state()
    }

    fn best_state(&self) -> Option<AssignmentState> {
        self.best_state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billet_model::{
        index::{ItemIndex, PlaceIndex},
        model::{Model, ModelBuilder},
        slot::SlotContent,
    };
    use billet_search::{problem::PlacementProblem, result::TerminationReason};

    type IntegerType = i64;

    /// Four items over four unit-capacity places, every place mandatory.
    /// The optimum picks the anti-diagonal of the matrix for a cost of 4.
    fn build_square_model() -> Model<IntegerType> {
        let costs: [[IntegerType; 4]; 4] =
            [[4, 3, 2, 1], [3, 2, 1, 2], [2, 1, 2, 3], [1, 2, 3, 4]];

        let mut builder = ModelBuilder::<IntegerType>::new(4);
        for _ in 0..4 {
            builder.add_group(1, 1);
        }
        for (item, row) in costs.iter().enumerate() {
            builder.set_preference_row(ItemIndex::new(item), row);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_finds_the_optimal_assignment_on_the_square_model() {
        let problem = PlacementProblem::new(build_square_model());
        let mut technique = DepthFirstTechnique::new(problem, DepthFirstParams::full_depth());

        let outcome = technique.run();
        assert_eq!(outcome.termination_reason(), &TerminationReason::Exhausted);

        let solution = outcome.solution().expect("expected a solution");
        assert_eq!(solution.objective_value(), 4);

        // The optimum is the anti-diagonal: item 3 at place 0, item 2 at
        // place 1, and so on.
        for place in 0..4 {
            assert_eq!(
                solution.content_of_place(PlaceIndex::new(place)),
                SlotContent::item(ItemIndex::new(3 - place))
            );
        }
    }

    #[test]
    fn test_visits_every_permutation_of_the_square_model() {
        let problem = PlacementProblem::new(build_square_model());
        let mut technique = DepthFirstTechnique::new(problem, DepthFirstParams::full_depth());

        technique.run();

        // All places are mandatory and capacities are tight, so the tree
        // has exactly 4! goal leaves.
        assert_eq!(technique.statistics().leaves_visited, 24);
        assert_eq!(technique.statistics().solutions_found, 24);
        assert!(technique.best_leaf_index() >= 1);
        assert!(technique.best_leaf_index() <= 24);
    }

    #[test]
    fn test_optional_places_may_stay_empty() {
        let mut builder = ModelBuilder::<IntegerType>::new(2);
        builder.add_group(0, 3);
        builder.set_preference_row(ItemIndex::new(0), &[5, 1, 9]);
        builder.set_preference_row(ItemIndex::new(1), &[2, 8, 1]);
        let problem = PlacementProblem::new(builder.build().unwrap());

        let mut technique = DepthFirstTechnique::new(problem, DepthFirstParams::full_depth());
        let outcome = technique.run();

        let solution = outcome.solution().expect("expected a solution");
        // Item 0 at place 1 and item 1 at place 2; place 0 stays empty.
        assert_eq!(solution.objective_value(), 2);
        assert!(solution
            .content_of_place(PlaceIndex::new(0))
            .is_empty());
    }

    #[test]
    fn test_bounded_depth_records_no_goal_state() {
        let problem = PlacementProblem::new(build_square_model());
        let mut technique = DepthFirstTechnique::new(problem, DepthFirstParams::to_level(2));

        let outcome = technique.run();
        assert_eq!(outcome.termination_reason(), &TerminationReason::Exhausted);
        assert!(outcome.solution().is_none());
        // Levels 0 and 1 pick distinct items: 4 * 3 leaves at level 2.
        assert_eq!(technique.statistics().leaves_visited, 12);
        assert_eq!(technique.statistics().solutions_found, 0);
    }

    #[test]
    fn test_stop_request_completes_the_current_leaf_first() {
        let problem = PlacementProblem::new(build_square_model());
        let mut technique = DepthFirstTechnique::new(problem, DepthFirstParams::full_depth());

        technique.request_stop();
        let outcome = technique.run();

        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Aborted(_)
        ));
        // The leaf being explored finishes before the flag is observed.
        assert_eq!(technique.statistics().leaves_visited, 1);
    }

    #[test]
    fn test_infeasible_configuration_fails_before_searching() {
        let mut builder = ModelBuilder::<IntegerType>::new(3);
        builder.add_group(0, 1);
        let problem = PlacementProblem::new(builder.build().unwrap());

        let mut technique = DepthFirstTechnique::new(problem, DepthFirstParams::full_depth());
        let outcome = technique.run();

        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Infeasible(_)
        ));
        assert_eq!(technique.statistics().leaves_visited, 0);
    }

    #[test]
    fn test_progress_counters_reflect_the_run() {
        let problem = PlacementProblem::new(build_square_model());
        let mut technique = DepthFirstTechnique::new(problem, DepthFirstParams::full_depth());
        let progress = technique.progress();

        technique.run();

        let snapshot = progress.snapshot();
        assert_eq!(snapshot.steps, 24);
        assert_eq!(snapshot.best_cost, Some(4));
        assert!(!snapshot.running);
    }

    #[test]
    fn test_best_state_is_an_independent_snapshot() {
        let problem = PlacementProblem::new(build_square_model());
        let mut technique = DepthFirstTechnique::new(problem, DepthFirstParams::full_depth());

        technique.run();

        let best = technique.best_state().expect("expected a best state");
        assert!(best.is_complete());
        assert_eq!(
            best.place_content(PlaceIndex::new(0)),
            SlotContent::item(ItemIndex::new(3))
        );
    }
}
