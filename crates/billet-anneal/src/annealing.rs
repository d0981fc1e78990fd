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

//! Simulated annealing over the stochastic move protocol.
//!
//! The technique initializes the problem with a feasible complete
//! assignment and then iterates: propose a random exchange, price it,
//! accept improving (and equal) moves unconditionally, and accept
//! worsening moves with the Metropolis probability `exp(-delta / T)`
//! against a uniform draw. Accepted moves mutate the live state; only
//! numeric best-cost/best-iteration statistics are retained. No best
//! state copy exists, so the final current state is the answer.
//!
//! The run continues while the temperature is still above its floor OR
//! the iterations since the last improvement are still within the
//! patience window; termination requires both predicates to be false
//! simultaneously. The disjunction is intentional: a still-warm schedule
//! or a recent improvement each keep the run alive on their own.

use crate::{cooling::CoolingSchedule, stats::AnnealingStatistics};
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
use rand::Rng;
use std::time::Instant;

/// Tunable parameters of the annealing technique that are not part of the
/// cooling schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnnealingParams {
    patience: u64,
}

impl AnnealingParams {
    /// Creates parameters with the given patience window: the number of
    /// iterations without improvement the run tolerates after the
    /// temperature has reached its floor.
    #[inline]
    pub fn new(patience: u64) -> Self {
        Self { patience }
    }

    /// Returns the patience window.
    #[inline]
    pub fn patience(&self) -> u64 {
        self.patience
    }
}

/// Stochastic local search driven by a temperature-dependent acceptance
/// rule.
#[derive(Debug)]
pub struct SimulatedAnnealingTechnique<T, P, C, R, M = NoOperationMonitor<T>>
where
    T: CostNumeric,
{
    problem: P,
    cooling: C,
    params: AnnealingParams,
    rng: R,
    monitor: M,
    stop: StopHandle,
    progress: ProgressHandle,
    best_cost: Option<T>,
    best_iteration: u64,
    stats: AnnealingStatistics,
}

impl<T, P, C, R> SimulatedAnnealingTechnique<T, P, C, R, NoOperationMonitor<T>>
where
    T: CostNumeric,
    P: Problem<T>,
    C: CoolingSchedule,
    R: Rng,
{
    /// Creates a new unsupervised annealing technique.
    pub fn new(problem: P, cooling: C, params: AnnealingParams, rng: R) -> Self {
        Self::with_monitor(problem, cooling, params, rng, NoOperationMonitor::new())
    }
}

impl<T, P, C, R, M> SimulatedAnnealingTechnique<T, P, C, R, M>
where
    T: CostNumeric,
    P: Problem<T>,
    C: CoolingSchedule,
    R: Rng,
    M: SearchMonitor<T>,
{
    /// Creates a new annealing technique observed by the given monitor.
    pub fn with_monitor(
        problem: P,
        cooling: C,
        params: AnnealingParams,
        rng: R,
        monitor: M,
    ) -> Self {
        Self {
            problem,
            cooling,
            params,
            rng,
            monitor,
            stop: StopHandle::new(),
            progress: ProgressHandle::new(),
            best_cost: None,
            best_iteration: 0,
            stats: AnnealingStatistics::default(),
        }
    }

    /// Returns the statistics of the most recent run.
    #[inline]
    pub fn statistics(&self) -> &AnnealingStatistics {
        &self.stats
    }

    /// Returns the best objective observed by the most recent run, if
    /// any. Note that the corresponding state is not retained.
    #[inline]
    pub fn best_cost(&self) -> Option<T> {
        self.best_cost
    }

    /// Returns the iteration at which the best objective was observed.
    #[inline]
    pub fn best_iteration(&self) -> u64 {
        self.best_iteration
    }

    /// Decides whether to accept a proposed exchange with the given cost
    /// delta under the current temperature.
    fn should_accept(&mut self, delta: T) -> bool {
        // Improving and sideways moves are always taken.
        if delta <= T::zero() {
            return true;
        }

        // Worsening move: Metropolis criterion against a uniform draw.
        let temperature = self.cooling.current();
        if self.cooling.is_frozen() || temperature <= 1e-9 {
            return false;
        }

        let delta_value: i64 = delta.into();
        let acceptance_probability = (-(delta_value as f64) / temperature).exp();
        self.rng.random_bool(acceptance_probability.min(1.0))
    }
}

impl<T, P, C, R, M> Technique<T> for SimulatedAnnealingTechnique<T, P, C, R, M>
where
    T: CostNumeric,
    P: Problem<T>,
    C: CoolingSchedule,
    R: Rng,
    M: SearchMonitor<T>,
{
    fn name(&self) -> &str {
        "SimulatedAnnealingTechnique"
    }

    fn run(&mut self) -> TechniqueOutcome<T> {
        let start_time = Instant::now();
        let mut run_stats = RunStatistics::default();

        self.stats = AnnealingStatistics::default();
        self.best_cost = None;
        self.best_iteration = 0;
        self.progress.reset();
        self.progress.set_running(true);
        self.monitor.on_enter_search();

        // Fail fast: an infeasible configuration never iterates.
        if let Err(err) = self.problem.init_goal_state() {
            run_stats.set_total_time(start_time.elapsed());
            self.stats.set_total_time(start_time.elapsed());
            self.monitor.on_exit_search();
            self.progress.set_running(false);
            return TechniqueOutcome::infeasible(err, run_stats);
        }

        self.cooling.on_start();

        let mut current_cost = self.problem.cost();
        self.best_cost = Some(current_cost);
        self.best_iteration = 0;
        self.progress.record_best(current_cost.into(), 0);
        run_stats.on_solution_found();

        let mut iteration: u64 = 0;
        let mut last_improvement: u64 = 0;

        // `None` means the stopping rule fired; `Some(reason)` names a
        // cooperative abort.
        let abort_reason = loop {
            // Continuation is the disjunction of the two predicates; both
            // must fail at once for the run to stop.
            let within_patience =
                iteration.saturating_sub(last_improvement) < self.params.patience();
            if self.cooling.is_frozen() && !within_patience {
                break None;
            }

            iteration += 1;

            let swap = self.problem.propose_random_swap(&mut self.rng);
            let delta = self.problem.swap_delta_cost(&swap);

            if self.should_accept(delta) {
                self.problem.apply_swap(&swap);
                current_cost = current_cost + delta;
                self.stats.on_accepted_move();

                let improved = match self.best_cost {
                    None => true,
                    Some(best) => current_cost < best,
                };
                if improved {
                    self.best_cost = Some(current_cost);
                    self.best_iteration = iteration;
                    last_improvement = iteration;
                    self.stats.on_improvement();
                    self.progress.record_best(current_cost.into(), iteration);
                    self.monitor.on_solution_found(current_cost, iteration);
                }
            } else {
                // Rejected proposals are simply discarded.
                self.stats.on_rejected_move();
            }

            // Temperature time passes regardless of the outcome.
            self.cooling.on_iteration();
            self.stats.on_iteration();
            run_stats.on_step();
            self.progress.on_step();
            self.monitor.on_step();

            // The iteration has completed; only now is termination
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

        // No best-state copy exists; the final current state is the
        // answer.
        let final_state = self.problem.state();
        let solution = Solution::new(current_cost, final_state.place_contents().to_vec());

        match abort_reason {
            None => TechniqueOutcome::converged(Some(solution), run_stats),
            Some(reason) => TechniqueOutcome::aborted(Some(solution), reason, run_stats),
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
        // Only numeric best-cost statistics are kept.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooling::PlateauGeometricCooling;
    use billet_model::{
        index::ItemIndex,
        model::{Model, ModelBuilder},
    };
    use billet_search::{problem::PlacementProblem, result::TerminationReason};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    type IntegerType = i64;

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

    fn build_technique(
        seed: u64,
    ) -> SimulatedAnnealingTechnique<
        IntegerType,
        PlacementProblem<IntegerType>,
        PlateauGeometricCooling,
        ChaCha8Rng,
    > {
        let problem = PlacementProblem::new(build_square_model());
        // Ample wait time and slow cooling for reliable convergence on
        // the tiny instance.
        let cooling = PlateauGeometricCooling::new(10.0, 0.9, 50, 1e-3);
        SimulatedAnnealingTechnique::new(
            problem,
            cooling,
            AnnealingParams::new(500),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_converges_to_the_square_model_optimum_with_high_frequency() {
        let mut successes = 0;
        for seed in 0..10 {
            let mut technique = build_technique(seed);
            let outcome = technique.run();

            assert_eq!(
                outcome.termination_reason(),
                &TerminationReason::Converged
            );
            let solution = outcome.solution().expect("expected a solution");
            if solution.objective_value() == 4 {
                successes += 1;
            }
        }
        assert!(
            successes >= 8,
            "expected at least 8 of 10 seeded runs to reach cost 4, got {}",
            successes
        );
    }

    #[test]
    fn test_reported_objective_matches_the_final_state() {
        let mut technique = build_technique(42);
        let outcome = technique.run();

        let solution = outcome.solution().expect("expected a solution");
        // The outcome prices the final current state, which the caller
        // reads as the answer.
        let final_state = technique.current_state();
        assert_eq!(solution.place_contents(), final_state.place_contents());

        let mut recomputed = 0;
        for (place, content) in final_state.place_contents().iter().enumerate() {
            if let Some(item) = content.item_index() {
                recomputed += build_square_model()
                    .preference_cost(item, billet_model::index::PlaceIndex::new(place));
            }
        }
        assert_eq!(solution.objective_value(), recomputed);
    }

    #[test]
    fn test_no_best_state_is_retained() {
        let mut technique = build_technique(1);
        technique.run();

        assert!(technique.best_state().is_none());
        // Numeric bookkeeping is still available.
        assert!(technique.best_cost().is_some());
    }

    #[test]
    fn test_infeasible_configuration_fails_before_any_iteration() {
        let mut builder = ModelBuilder::<IntegerType>::new(5);
        builder.add_group(1, 2);
        let problem = PlacementProblem::new(builder.build().unwrap());

        let mut technique = SimulatedAnnealingTechnique::new(
            problem,
            PlateauGeometricCooling::new(1.0, 0.5, 1, 0.0),
            AnnealingParams::new(10),
            ChaCha8Rng::seed_from_u64(0),
        );

        let outcome = technique.run();
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Infeasible(_)
        ));
        assert_eq!(technique.statistics().iterations, 0);
    }

    #[test]
    fn test_patience_keeps_a_frozen_run_alive() {
        let problem = PlacementProblem::new(build_square_model());
        // The floor equals the initial temperature, so the schedule is
        // frozen from the first iteration.
        let cooling = PlateauGeometricCooling::new(1.0, 0.5, 1, 1.0);

        let mut technique = SimulatedAnnealingTechnique::new(
            problem,
            cooling,
            AnnealingParams::new(100),
            ChaCha8Rng::seed_from_u64(3),
        );

        let outcome = technique.run();
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Converged
        );
        // The patience window alone kept the frozen run iterating.
        assert!(technique.statistics().iterations >= 100);
    }

    #[test]
    fn test_zero_patience_with_frozen_schedule_stops_immediately() {
        let problem = PlacementProblem::new(build_square_model());
        let cooling = PlateauGeometricCooling::new(1.0, 0.5, 1, 1.0);

        let mut technique = SimulatedAnnealingTechnique::new(
            problem,
            cooling,
            AnnealingParams::new(0),
            ChaCha8Rng::seed_from_u64(3),
        );

        let outcome = technique.run();
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Converged
        );
        assert_eq!(technique.statistics().iterations, 0);
        // The initial goal state is still reported as the answer.
        assert!(outcome.solution().is_some());
    }

    #[test]
    fn test_stop_request_completes_the_current_iteration_first() {
        let mut technique = build_technique(9);
        technique.request_stop();

        let outcome = technique.run();
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Aborted(_)
        ));
        assert_eq!(technique.statistics().iterations, 1);
    }

    #[test]
    fn test_accepted_and_rejected_moves_partition_the_iterations() {
        let mut technique = build_technique(5);
        technique.run();

        let stats = technique.statistics();
        assert_eq!(
            stats.accepted_moves + stats.rejected_moves,
            stats.iterations
        );
    }
}
