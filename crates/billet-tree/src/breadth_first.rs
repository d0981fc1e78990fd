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

//! Exhaustive breadth-first level search.
//!
//! The technique explores the deterministic tree in level order with a
//! FIFO frontier of `(state snapshot, cumulative cost, level)` nodes. Each
//! frontier pop re-seats the shared problem on the node's snapshot and
//! generates all alternatives at that node's level; every child is applied
//! forward, cloned for the frontier, and immediately retreated so the next
//! alternative expands from the parent again. Cloning exists only to make
//! the frontier entries independent of one another; the reversal protocol
//! is the same one the depth-first technique uses.
//!
//! The run ends when the frontier holds only nodes at the maximum level
//! (or drains earlier). Unlike depth-first search, the best goal state
//! recorded among all visited nodes up to the maximum level is a true
//! optimum among all solutions reachable within that depth.

use crate::{
    frontier::{Frontier, FrontierNode},
    stats::TreeSearchStatistics,
};
use billet_model::solution::Solution;
use billet_search::{
    monitor::{
        no_op::NoOperationMonitor,
        search_monitor::{SearchCommand, SearchMonitor},
    },
    num::CostNumeric,
    problem::Problem,
    result::{RunStatistics, TechniqueOutcome},
    state::AssignmentState,
    technique::{ProgressHandle, StopHandle, Technique},
};
use num_traits::Zero;
use std::time::Instant;

/// Tunable parameters of the breadth-first technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreadthFirstParams {
    max_level: Option<usize>,
}

impl BreadthFirstParams {
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

/// Exhaustive breadth-first level search over the deterministic move
/// protocol.
#[derive(Debug)]
pub struct BreadthFirstTechnique<T, P, M = NoOperationMonitor<T>>
where
    T: CostNumeric,
{
    problem: P,
    params: BreadthFirstParams,
    monitor: M,
    stop: StopHandle,
    progress: ProgressHandle,
    frontier: Frontier<T>,
    best_state: Option<AssignmentState>,
    best_cost: Option<T>,
    stats: TreeSearchStatistics,
}

impl<T, P> BreadthFirstTechnique<T, P, NoOperationMonitor<T>>
where
    T: CostNumeric,
    P: Problem<T>,
{
    /// Creates a new unsupervised breadth-first technique.
    pub fn new(problem: P, params: BreadthFirstParams) -> Self {
        Self::with_monitor(problem, params, NoOperationMonitor::new())
    }
}

impl<T, P, M> BreadthFirstTechnique<T, P, M>
where
    T: CostNumeric,
    P: Problem<T>,
    M: SearchMonitor<T>,
{
    /// Creates a new breadth-first technique observed by the given
    /// monitor.
    pub fn with_monitor(problem: P, params: BreadthFirstParams, monitor: M) -> Self {
        Self {
            problem,
            params,
            monitor,
            stop: StopHandle::new(),
            progress: ProgressHandle::new(),
            frontier: Frontier::new(),
            best_state: None,
            best_cost: None,
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

    /// Records a goal state if it improves on the best known one.
    fn record_goal_state(
        &mut self,
        state: &AssignmentState,
        cost: T,
        run_stats: &mut RunStatistics,
    ) {
        self.stats.on_solution_found();
        run_stats.on_solution_found();

        let improved = match self.best_cost {
            None => true,
            Some(best) => cost < best,
        };

        if improved {
            self.best_cost = Some(cost);
            self.best_state = Some(state.clone());
            self.progress.record_best(cost.into(), self.stats.nodes_explored);
            self.monitor.on_solution_found(cost, self.stats.nodes_explored);
        }
    }

    /// Expands one popped node: generates every alternative at the node's
    /// level, pushing an independent child snapshot per alternative.
    fn expand_node(&mut self, node: FrontierNode<T>, run_stats: &mut RunStatistics) {
        let level = node.level();
        let parent_cost = node.cumulative_cost();

        // Re-seat the shared problem on this node; the enumeration at
        // `level` starts fresh for it.
        self.problem.set_state(node.into_state());

        while self.problem.next_alternative(level) {
            let delta = self.problem.forward_delta_cost();
            let committed = self.problem.commit_forward();

            let child_cost = parent_cost + delta;
            let child_level = level + 1;
            let child_state = self.problem.state();

            self.stats.on_node_explored();
            self.stats.on_depth_update(child_level as u64);

            if self.problem.is_goal_level(child_level) {
                self.record_goal_state(&child_state, child_cost, run_stats);
            }

            self.frontier
                .push(FrontierNode::new(child_state, child_cost, child_level));

            // Back to the parent before trying the next alternative.
            self.problem.retreat(committed);
        }
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

impl<T, P, M> Technique<T> for BreadthFirstTechnique<T, P, M>
where
    T: CostNumeric,
    P: Problem<T>,
    M: SearchMonitor<T>,
{
    fn name(&self) -> &str {
        "BreadthFirstTechnique"
    }

    fn run(&mut self) -> TechniqueOutcome<T> {
        let start_time = Instant::now();
        let mut run_stats = RunStatistics::default();

        self.stats = TreeSearchStatistics::default();
        self.best_state = None;
        self.best_cost = None;
        self.frontier.reset();
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
        self.stats.on_node_explored();
        self.frontier
            .push(FrontierNode::new(self.problem.state(), T::zero(), 0));

        // `None` means the frontier drained or holds only maximum-level
        // nodes; `Some(reason)` names a cooperative abort.
        let abort_reason = loop {
            match self.frontier.front_level() {
                None => break None,
                // Levels are non-decreasing across the FIFO: once the
                // front is at the maximum level, every node is.
                Some(level) if level >= max_level => break None,
                Some(_) => {}
            }

            let Some(node) = self.frontier.pop() else {
                break None;
            };

            self.expand_node(node, &mut run_stats);

            run_stats.on_step();
            self.progress.on_step();
            self.monitor.on_step();

            // The pop has been fully expanded; only now is termination
            // observed.
            if self.stop.is_stop_requested() {
                break Some("Stop requested".to_string());
            }
            if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
                break Some(reason);
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
