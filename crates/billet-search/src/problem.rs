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

//! The problem abstraction shared by all solving techniques.
//!
//! A `Problem` owns the live mutable `AssignmentState` and exposes two
//! move protocols over it:
//!
//! - The **deterministic protocol** is a state machine over tree levels
//!   `0..num_levels`. Level `l` decides the content of place `l`. Each
//!   level keeps a cursor over its untried alternatives; alternatives are
//!   enumerated in a fixed order (item ids strictly ascending, "leave
//!   empty" always last) so exhaustive runs are reproducible. A committed
//!   step yields a `Move` that the matching `retreat` reverses exactly,
//!   including the cursor position of the retreated level.
//! - The **stochastic protocol** proposes exchanging the contents of two
//!   places, prices the exchange without mutating anything, and applies
//!   it only on acceptance.
//!
//! Both protocols maintain the objective incrementally: a step's cost
//! delta is available before the step is applied, and applying it never
//! requires a full recomputation.

use crate::{
    err::{CapacityShortfallError, InfeasibleError, MandatoryExcessError},
    moves::{Move, RandomSwap},
    num::CostNumeric,
    state::AssignmentState,
};
use billet_model::{
    index::{ItemIndex, PlaceIndex},
    model::Model,
    slot::SlotContent,
};
use num_traits::Zero;
use rand::{Rng, RngCore};

/// The capability interface consumed by the solving techniques.
///
/// Implementations own the live mutable state; every snapshot handed out
/// through `state()` is a deep copy, never an alias.
pub trait Problem<T>
where
    T: CostNumeric,
{
    /// Returns the number of items to place.
    fn num_items(&self) -> usize;

    /// Returns the number of tree levels, which equals the place count.
    fn num_levels(&self) -> usize;

    /// Returns the objective value of the live state. O(places).
    fn cost(&self) -> T;

    /// Returns an independent snapshot of the live state.
    fn state(&self) -> AssignmentState;

    /// Replaces the live state with the given snapshot.
    ///
    /// This invalidates every deterministic cursor: the caller may have
    /// jumped to an unrelated node of the tree, so enumeration at any
    /// level starts fresh afterwards.
    fn set_state(&mut self, state: AssignmentState);

    /// Resets the live state to the root node: all places empty, no items
    /// matched, all cursors fresh.
    ///
    /// Returns an error if the configuration is structurally infeasible.
    fn init_state(&mut self) -> Result<(), InfeasibleError>;

    /// Advances to the next untried alternative at the given level,
    /// resuming from this level's cursor.
    ///
    /// Returns `false` when no alternative remains; this is normal
    /// pruning, not an error.
    fn next_alternative(&mut self, level: usize) -> bool;

    /// Returns the cost delta of the pending alternative; zero for
    /// "leave empty".
    fn forward_delta_cost(&self) -> T;

    /// Commits the pending alternative, descending one level. Returns the
    /// `Move` required to reverse the step.
    fn commit_forward(&mut self) -> Move;

    /// Reverses the given move exactly: the place is emptied, the item
    /// unmatched, and the retreated level's cursor is left where it was so
    /// enumeration resumes rather than restarts.
    fn retreat(&mut self, committed: Move);

    /// Returns the cost delta that the given committed move contributed.
    fn move_delta_cost(&self, committed: &Move) -> T;

    /// Checks whether the given level is the goal level, i.e. every place
    /// has been decided.
    fn is_goal_level(&self, level: usize) -> bool;

    /// Builds a feasible complete assignment in the live state, for use as
    /// the stochastic technique's starting point.
    ///
    /// Returns an error if the configuration is structurally infeasible.
    fn init_goal_state(&mut self) -> Result<(), InfeasibleError>;

    /// Proposes an exchange of the contents of two places, resampling
    /// until the excluded cases are avoided.
    fn propose_random_swap(&self, rng: &mut dyn RngCore) -> RandomSwap;

    /// Prices the given exchange without mutating the live state.
    fn swap_delta_cost(&self, swap: &RandomSwap) -> T;

    /// Applies the given exchange to the live state.
    fn apply_swap(&mut self, swap: &RandomSwap);
}

/// The pending alternative produced by `next_alternative` and consumed by
/// `commit_forward`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct PendingAlternative {
    content: SlotContent,
    place: PlaceIndex,
    level: usize,
}

/// The concrete placement problem: fixed model data plus the live state
/// and the cursor bookkeeping of the deterministic protocol.
///
/// Cursor encoding per level: values below `num_items` name the next item
/// id to consider, `num_items` means "leave empty" is the next candidate,
/// and anything above marks the level exhausted.
#[derive(Debug, Clone)]
pub struct PlacementProblem<T>
where
    T: CostNumeric,
{
    model: Model<T>,
    state: AssignmentState,
    cursors: Vec<usize>,
    pending: Option<PendingAlternative>,
    // Number of committed levels, when known. `None` after `set_state`
    // until the next commit re-anchors it.
    depth: Option<usize>,
}

impl<T> PlacementProblem<T>
where
    T: CostNumeric,
{
    /// Creates a new `PlacementProblem` owning the given model. The live
    /// state starts at the root node; call `init_state` or
    /// `init_goal_state` before searching.
    pub fn new(model: Model<T>) -> Self {
        let state = AssignmentState::new(model.num_places(), model.num_items());
        let cursors = vec![0; model.num_places()];

        Self {
            model,
            state,
            cursors,
            pending: None,
            depth: None,
        }
    }

    /// Returns the model this problem is defined over.
    #[inline]
    pub fn model(&self) -> &Model<T> {
        &self.model
    }

    /// Checks the structural capacity invariants: the places must be able
    /// to admit every item, and the mandatory minima must be satisfiable.
    fn check_structural_feasibility(&self) -> Result<(), InfeasibleError> {
        let num_items = self.model.num_items();
        let total_capacity = self.model.total_maximum_occupancy();
        if total_capacity < num_items {
            return Err(CapacityShortfallError::new(total_capacity, num_items).into());
        }

        let total_minimum = self.model.total_minimum_occupancy();
        if total_minimum > num_items {
            return Err(MandatoryExcessError::new(total_minimum, num_items).into());
        }

        Ok(())
    }

    /// Resets the cursor of every level.
    #[inline]
    fn reset_cursors(&mut self) {
        self.cursors.fill(0);
    }

    /// Checks whether the place at `level` may be left empty: the place
    /// must be non-mandatory and the places after it must still be able to
    /// hold every outstanding item.
    #[inline]
    fn can_leave_empty(&self, level: usize) -> bool {
        let place = PlaceIndex::new(level);
        if self.model.is_place_mandatory(place) {
            return false;
        }

        let spare_places = self.model.num_places() - level - 1;
        spare_places >= self.state.num_unmatched()
    }
}

impl<T> Problem<T> for PlacementProblem<T>
where
    T: CostNumeric,
{
    #[inline]
    fn num_items(&self) -> usize {
        self.model.num_items()
    }

    #[inline]
    fn num_levels(&self) -> usize {
        self.model.num_places()
    }

    fn cost(&self) -> T {
        let mut total = T::zero();
        for (place, content) in self.state.place_contents().iter().enumerate() {
            if let Some(item) = content.item_index() {
                total = total + self.model.preference_cost(item, PlaceIndex::new(place));
            }
        }
        total
    }

    #[inline]
    fn state(&self) -> AssignmentState {
        self.state.clone()
    }

    fn set_state(&mut self, state: AssignmentState) {
        assert!(
            state.num_places() == self.model.num_places()
                && state.num_items() == self.model.num_items(),
            "called `PlacementProblem::set_state` with mismatched dimensions: the model has {} places and {} items but the state has {} and {}",
            self.model.num_places(),
            self.model.num_items(),
            state.num_places(),
            state.num_items()
        );

        self.state = state;
        self.reset_cursors();
        self.pending = None;
        self.depth = None;
    }

    fn init_state(&mut self) -> Result<(), InfeasibleError> {
        self.check_structural_feasibility()?;

        self.state.reset();
        self.reset_cursors();
        self.pending = None;
        self.depth = Some(0);
        Ok(())
    }

    fn next_alternative(&mut self, level: usize) -> bool {
        assert!(
            level < self.model.num_places(),
            "called `PlacementProblem::next_alternative` with level out of bounds: the level count is {} but the level is {}",
            self.model.num_places(),
            level
        );
        if let Some(depth) = self.depth {
            debug_assert!(
                depth == level,
                "called `PlacementProblem::next_alternative` at level {} while the committed depth is {}",
                level,
                depth
            );
        }

        let num_items = self.model.num_items();
        let place = PlaceIndex::new(level);

        loop {
            let cursor = self.cursors[level];

            if cursor < num_items {
                self.cursors[level] = cursor + 1;
                let item = ItemIndex::new(cursor);
                if self.state.is_item_matched(item) {
                    continue;
                }

                self.pending = Some(PendingAlternative {
                    content: SlotContent::item(item),
                    place,
                    level,
                });
                return true;
            }

            if cursor == num_items {
                // "Leave empty" is always the final alternative at a node.
                self.cursors[level] = cursor + 1;
                if self.can_leave_empty(level) {
                    self.pending = Some(PendingAlternative {
                        content: SlotContent::empty(),
                        place,
                        level,
                    });
                    return true;
                }
            }

            self.pending = None;
            return false;
        }
    }

    fn forward_delta_cost(&self) -> T {
        let pending = self
            .pending
            .as_ref()
            .expect("called `PlacementProblem::forward_delta_cost` without a pending alternative");

        match pending.content.item_index() {
            Some(item) => self.model.preference_cost(item, pending.place),
            None => T::zero(),
        }
    }

    fn commit_forward(&mut self) -> Move {
        let pending = self
            .pending
            .take()
            .expect("called `PlacementProblem::commit_forward` without a pending alternative");

        if let Some(item) = pending.content.item_index() {
            self.state.fill_place(pending.place, item);
        }

        self.depth = Some(pending.level + 1);

        // The node one level deeper is brand new; its enumeration starts
        // from scratch.
        if pending.level + 1 < self.cursors.len() {
            self.cursors[pending.level + 1] = 0;
        }

        Move::new(pending.content, pending.place, pending.level)
    }

    fn retreat(&mut self, committed: Move) {
        if let Some(depth) = self.depth {
            assert!(
                depth == committed.level() + 1,
                "called `PlacementProblem::retreat` with a move at level {} while the committed depth is {}",
                committed.level(),
                depth
            );
        }

        match committed.content().item_index() {
            Some(_) => {
                assert!(
                    self.state.place_content(committed.place()) == committed.content(),
                    "called `PlacementProblem::retreat` with a move whose content {} does not match the live state at {}",
                    committed.content(),
                    committed.place()
                );
                self.state.clear_place(committed.place());
            }
            None => {
                assert!(
                    self.state.place_content(committed.place()).is_empty(),
                    "called `PlacementProblem::retreat` with an empty move but the place {} is occupied",
                    committed.place()
                );
            }
        }

        // The retreated level's cursor is deliberately left untouched, so
        // the next alternative at that node resumes where it left off.
        self.depth = Some(committed.level());
        self.pending = None;
    }

    fn move_delta_cost(&self, committed: &Move) -> T {
        match committed.content().item_index() {
            Some(item) => self.model.preference_cost(item, committed.place()),
            None => T::zero(),
        }
    }

    #[inline]
    fn is_goal_level(&self, level: usize) -> bool {
        level == self.model.num_places()
    }

    fn init_goal_state(&mut self) -> Result<(), InfeasibleError> {
        self.check_structural_feasibility()?;

        self.state.reset();
        self.reset_cursors();
        self.pending = None;
        self.depth = None;

        let num_places = self.model.num_places();
        let num_items = self.model.num_items();
        let mut next_item = 0;

        // Pass 1: mandatory places in place order, ascending item ids.
        for place in 0..num_places {
            let place_index = PlaceIndex::new(place);
            if self.model.is_place_mandatory(place_index) {
                self.state
                    .fill_place(place_index, ItemIndex::new(next_item));
                next_item += 1;
            }
        }

        // Pass 2: remaining places take the leftover items.
        for place in 0..num_places {
            if next_item == num_items {
                break;
            }
            let place_index = PlaceIndex::new(place);
            if self.state.place_content(place_index).is_empty() {
                self.state
                    .fill_place(place_index, ItemIndex::new(next_item));
                next_item += 1;
            }
        }

        debug_assert!(
            next_item == num_items,
            "`PlacementProblem::init_goal_state` left {} items unplaced despite the capacity check",
            num_items - next_item
        );

        Ok(())
    }

    fn propose_random_swap(&self, rng: &mut dyn RngCore) -> RandomSwap {
        let num_places = self.model.num_places();
        assert!(
            num_places > 1,
            "called `PlacementProblem::propose_random_swap` on a model with fewer than two places"
        );
        assert!(
            self.state.num_matched_items() > 0,
            "called `PlacementProblem::propose_random_swap` on a state with no matched items"
        );

        // Resamples until none of the excluded cases applies; the live
        // state must admit at least one exchange.
        loop {
            let first = PlaceIndex::new(rng.random_range(0..num_places));
            let second = PlaceIndex::new(rng.random_range(0..num_places));

            if first == second {
                continue;
            }

            let first_content = self.state.place_content(first);
            let second_content = self.state.place_content(second);

            if first_content.is_empty() && second_content.is_empty() {
                continue;
            }

            // Exactly one side empty: the exchange would drain the filled
            // place, which must not be mandatory.
            if first_content.is_empty() && self.model.is_place_mandatory(second) {
                continue;
            }
            if second_content.is_empty() && self.model.is_place_mandatory(first) {
                continue;
            }

            return RandomSwap::new(first, second);
        }
    }

    fn swap_delta_cost(&self, swap: &RandomSwap) -> T {
        let first = swap.first();
        let second = swap.second();
        let first_content = self.state.place_content(first);
        let second_content = self.state.place_content(second);

        let mut delta = T::zero();
        if let Some(item) = first_content.item_index() {
            delta = delta + self.model.preference_cost(item, second)
                - self.model.preference_cost(item, first);
        }
        if let Some(item) = second_content.item_index() {
            delta = delta + self.model.preference_cost(item, first)
                - self.model.preference_cost(item, second);
        }
        delta
    }

    fn apply_swap(&mut self, swap: &RandomSwap) {
        self.state.swap_places(swap.first(), swap.second());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billet_model::model::ModelBuilder;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    type IntegerType = i64;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn pi(i: usize) -> PlaceIndex {
        PlaceIndex::new(i)
    }

    /// 3 items over two groups: group 0 contributes places 0 and 1 (place
    /// 0 mandatory), group 1 contributes places 2 and 3 (none mandatory).
    fn build_problem() -> PlacementProblem<IntegerType> {
        let mut builder = ModelBuilder::<IntegerType>::new(3);
        builder.add_group(1, 2).add_group(0, 2);
        builder.set_preference_row(ii(0), &[4, 3, 2, 1]);
        builder.set_preference_row(ii(1), &[3, 2, 1, 2]);
        builder.set_preference_row(ii(2), &[2, 1, 2, 3]);
        PlacementProblem::new(builder.build().unwrap())
    }

    #[test]
    fn test_init_state_resets_to_root() {
        let mut problem = build_problem();
        problem.init_state().unwrap();

        let state = problem.state();
        assert!(state.place_contents().iter().all(|c| c.is_empty()));
        assert_eq!(state.num_unmatched(), 3);
        assert_eq!(problem.cost(), 0);
    }

    #[test]
    fn test_init_state_detects_capacity_shortfall() {
        let mut builder = ModelBuilder::<IntegerType>::new(5);
        builder.add_group(0, 2);
        let mut problem = PlacementProblem::new(builder.build().unwrap());

        let err = problem.init_state().unwrap_err();
        assert!(matches!(err, InfeasibleError::CapacityShortfall(_)));
    }

    #[test]
    fn test_init_state_detects_mandatory_excess() {
        let mut builder = ModelBuilder::<IntegerType>::new(1);
        builder.add_group(2, 2);
        let mut problem = PlacementProblem::new(builder.build().unwrap());

        let err = problem.init_state().unwrap_err();
        assert!(matches!(err, InfeasibleError::MandatoryExcess(_)));
    }

    #[test]
    fn test_alternatives_ascend_and_offer_empty_last() {
        let mut builder = ModelBuilder::<IntegerType>::new(2);
        builder.add_group(0, 3);
        let mut problem = PlacementProblem::new(builder.build().unwrap());
        problem.init_state().unwrap();

        // Level 0 of a non-mandatory place with spare capacity: items in
        // ascending order, then the empty alternative, then exhaustion.
        assert!(problem.next_alternative(0));
        assert_eq!(problem.commit_candidate_content(), SlotContent::item(ii(0)));
        assert!(problem.next_alternative(0));
        assert_eq!(problem.commit_candidate_content(), SlotContent::item(ii(1)));
        assert!(problem.next_alternative(0));
        assert_eq!(problem.commit_candidate_content(), SlotContent::empty());
        assert!(!problem.next_alternative(0));
    }

    #[test]
    fn test_empty_is_not_offered_at_mandatory_place() {
        let mut builder = ModelBuilder::<IntegerType>::new(1);
        builder.add_group(1, 1).add_group(0, 1);
        let mut problem = PlacementProblem::new(builder.build().unwrap());
        problem.init_state().unwrap();

        assert!(problem.next_alternative(0));
        assert_eq!(problem.commit_candidate_content(), SlotContent::item(ii(0)));
        // Place 0 is mandatory, so "leave empty" is never offered there.
        assert!(!problem.next_alternative(0));
    }

    #[test]
    fn test_empty_is_not_offered_without_spare_capacity() {
        let mut builder = ModelBuilder::<IntegerType>::new(2);
        builder.add_group(0, 2);
        let mut problem = PlacementProblem::new(builder.build().unwrap());
        problem.init_state().unwrap();

        assert!(problem.next_alternative(0));
        assert!(problem.next_alternative(0));
        // Both items are still outstanding; leaving place 0 empty would
        // strand one of them.
        assert!(!problem.next_alternative(0));
    }

    #[test]
    fn test_commit_and_retreat_restore_state_bit_identically() {
        let mut problem = build_problem();
        problem.init_state().unwrap();

        let before = problem.state();
        let cost_before = problem.cost();

        assert!(problem.next_alternative(0));
        let delta = problem.forward_delta_cost();
        let mv = problem.commit_forward();
        assert_eq!(problem.cost(), cost_before + delta);

        problem.retreat(mv);
        assert_eq!(problem.state(), before);
        assert_eq!(problem.cost(), cost_before);
    }

    #[test]
    fn test_cursor_resumes_after_retreat() {
        let mut problem = build_problem();
        problem.init_state().unwrap();

        assert!(problem.next_alternative(0));
        let first = problem.commit_forward();
        assert_eq!(first.content(), SlotContent::item(ii(0)));

        problem.retreat(first);

        // The cursor at level 0 resumes past item 0 instead of restarting.
        assert!(problem.next_alternative(0));
        let second = problem.commit_forward();
        assert_eq!(second.content(), SlotContent::item(ii(1)));
    }

    #[test]
    fn test_matched_items_are_skipped_at_deeper_levels() {
        let mut problem = build_problem();
        problem.init_state().unwrap();

        assert!(problem.next_alternative(0));
        let mv = problem.commit_forward();
        assert_eq!(mv.content(), SlotContent::item(ii(0)));

        // Item 0 is taken; level 1 starts at item 1.
        assert!(problem.next_alternative(1));
        assert_eq!(problem.commit_candidate_content(), SlotContent::item(ii(1)));
    }

    #[test]
    fn test_forward_delta_cost_reads_the_cost_matrix() {
        let mut problem = build_problem();
        problem.init_state().unwrap();

        assert!(problem.next_alternative(0));
        // Pending alternative is item 0 at place 0, costing 4.
        assert_eq!(problem.forward_delta_cost(), 4);
    }

    #[test]
    fn test_set_state_starts_cursors_fresh() {
        let mut problem = build_problem();
        problem.init_state().unwrap();

        // Advance the cursor at level 0 past item 0.
        assert!(problem.next_alternative(0));
        let snapshot = problem.state();
        problem.set_state(snapshot);

        // After the jump the enumeration starts from scratch.
        assert!(problem.next_alternative(0));
        assert_eq!(problem.commit_candidate_content(), SlotContent::item(ii(0)));
    }

    #[test]
    fn test_state_snapshots_are_value_equal_and_independent() {
        let mut problem = build_problem();
        problem.init_state().unwrap();

        let first = problem.state();
        let second = problem.state();
        assert_eq!(first, second);

        assert!(problem.next_alternative(0));
        problem.commit_forward();
        // Earlier snapshots do not observe the mutation.
        assert!(first.place_contents().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_goal_level_is_the_place_count() {
        let problem = build_problem();
        assert!(!problem.is_goal_level(0));
        assert!(!problem.is_goal_level(3));
        assert!(problem.is_goal_level(4));
    }

    #[test]
    fn test_init_goal_state_fills_mandatory_places_first() {
        let mut builder = ModelBuilder::<IntegerType>::new(3);
        builder.add_group(1, 2).add_group(1, 1);
        let mut problem = PlacementProblem::new(builder.build().unwrap());
        problem.init_goal_state().unwrap();

        let state = problem.state();
        // Mandatory places 0 and 2 take items 0 and 1 in place order; the
        // leftover item 2 lands in the first free place.
        assert_eq!(state.place_content(pi(0)), SlotContent::item(ii(0)));
        assert_eq!(state.place_content(pi(2)), SlotContent::item(ii(1)));
        assert_eq!(state.place_content(pi(1)), SlotContent::item(ii(2)));
        assert!(state.is_complete());
    }

    #[test]
    fn test_init_goal_state_errors_on_infeasible_configuration() {
        let mut builder = ModelBuilder::<IntegerType>::new(4);
        builder.add_group(0, 3);
        let mut problem = PlacementProblem::new(builder.build().unwrap());

        assert!(problem.init_goal_state().is_err());
    }

    #[test]
    fn test_proposed_swaps_avoid_the_excluded_cases() {
        let mut builder = ModelBuilder::<IntegerType>::new(2);
        builder.add_group(1, 2).add_group(0, 2);
        let mut problem = PlacementProblem::new(builder.build().unwrap());
        problem.init_goal_state().unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let swap = problem.propose_random_swap(&mut rng);
            let first_content = problem.state.place_content(swap.first());
            let second_content = problem.state.place_content(swap.second());

            assert_ne!(swap.first(), swap.second());
            assert!(!(first_content.is_empty() && second_content.is_empty()));
            if first_content.is_empty() {
                assert!(!problem.model().is_place_mandatory(swap.second()));
            }
            if second_content.is_empty() {
                assert!(!problem.model().is_place_mandatory(swap.first()));
            }
        }
    }

    #[test]
    fn test_swap_delta_matches_applied_cost_change() {
        let mut problem = build_problem();
        problem.init_goal_state().unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let swap = problem.propose_random_swap(&mut rng);
            let cost_before = problem.cost();
            let delta = problem.swap_delta_cost(&swap);
            // Pricing the exchange does not mutate anything.
            assert_eq!(problem.cost(), cost_before);

            problem.apply_swap(&swap);
            assert_eq!(problem.cost(), cost_before + delta);
        }
    }

    #[test]
    #[should_panic(expected = "called `PlacementProblem::retreat` with a move at level")]
    fn test_retreat_rejects_level_mismatch() {
        let mut problem = build_problem();
        problem.init_state().unwrap();

        assert!(problem.next_alternative(0));
        let mv = problem.commit_forward();
        let stale = Move::new(mv.content(), mv.place(), 2);
        problem.retreat(stale);
    }

    #[test]
    #[should_panic(expected = "called `PlacementProblem::commit_forward` without a pending")]
    fn test_commit_without_pending_alternative_is_misuse() {
        let mut problem = build_problem();
        problem.init_state().unwrap();
        let _ = problem.commit_forward();
    }

    impl PlacementProblem<IntegerType> {
        /// Test helper exposing the pending alternative's content.
        fn commit_candidate_content(&self) -> SlotContent {
            self.pending
                .as_ref()
                .expect("no pending alternative")
                .content
        }
    }
}
