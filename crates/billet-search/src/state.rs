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

//! Assignment state management for the search techniques.
//!
//! This module provides `AssignmentState`, a compact, mutable container
//! tracking the incremental matching of items to places during search.
//!
//! Key responsibilities:
//! - Maintain the ordered sequence of place contents (item or empty).
//! - Track which items are matched using a `FixedBitSet`.
//! - Maintain the remaining-to-match counter and the invariant
//!   `num_unmatched + matched bits == num_items`.
//!
//! The state is a value type: the owning problem hands out deep copies,
//! never aliases, so callers can hold snapshots without observing later
//! mutation. Equality is structural, which the move-reversal tests rely
//! on to verify bit-identical restoration.

use billet_model::{
    index::{ItemIndex, PlaceIndex},
    slot::SlotContent,
};
use fixedbitset::FixedBitSet;

/// A compact, mutable container holding the incremental search state for
/// the assignment problem.
///
/// The state tracks:
/// - `place_contents`: the ordered sequence of place contents.
/// - `matched_items`: bitset indicating whether an item is currently
///   placed somewhere.
/// - `num_unmatched`: how many items still await a place.
///
/// Invariants (debug-checked):
/// - `num_unmatched <= num_items`
/// - An item index appears in at most one place.
/// - `matched_items.count_ones() + num_unmatched == num_items`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentState {
    place_contents: Vec<SlotContent>,
    matched_items: FixedBitSet,
    num_unmatched: usize,
    num_items: usize,
}

impl AssignmentState {
    /// Creates a new `AssignmentState` with the specified number of places
    /// and items. The initial state has all places empty and no items
    /// matched.
    #[inline]
    pub fn new(num_places: usize, num_items: usize) -> Self {
        Self {
            place_contents: vec![SlotContent::empty(); num_places],
            matched_items: FixedBitSet::with_capacity(num_items),
            num_unmatched: num_items,
            num_items,
        }
    }

    /// Returns the number of places in this state.
    #[inline]
    pub fn num_places(&self) -> usize {
        self.place_contents.len()
    }

    /// Returns the number of items in this state.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Returns the number of items still awaiting a place.
    #[inline]
    pub fn num_unmatched(&self) -> usize {
        self.num_unmatched
    }

    /// Returns the number of items currently placed.
    #[inline]
    pub fn num_matched_items(&self) -> usize {
        self.num_items - self.num_unmatched
    }

    /// Checks whether every item has been placed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.num_unmatched == 0
    }

    /// Returns the content of the specified place.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `place_index` is out of bounds.
    #[inline]
    pub fn place_content(&self, place_index: PlaceIndex) -> SlotContent {
        let index = place_index.get();
        debug_assert!(
            index < self.num_places(),
            "called `AssignmentState::place_content` with place index out of bounds: the len is {} but the index is {}",
            self.num_places(),
            index
        );

        self.place_contents[index]
    }

    /// Returns a slice of the contents of all places.
    #[inline]
    pub fn place_contents(&self) -> &[SlotContent] {
        &self.place_contents
    }

    /// Checks whether the specified item is currently placed.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `item_index` is out of bounds.
    #[inline]
    pub fn is_item_matched(&self, item_index: ItemIndex) -> bool {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items,
            "called `AssignmentState::is_item_matched` with item index out of bounds: the len is {} but the index is {}",
            self.num_items,
            index
        );

        self.matched_items.contains(index)
    }

    /// Places an item at the specified place.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if the indices are out of bounds, if the
    /// place is already occupied, or if the item is already matched.
    #[inline]
    pub fn fill_place(&mut self, place_index: PlaceIndex, item_index: ItemIndex) {
        let place = place_index.get();
        let item = item_index.get();
        debug_assert!(
            place < self.num_places(),
            "called `AssignmentState::fill_place` with place index out of bounds: the len is {} but the index is {}",
            self.num_places(),
            place
        );
        debug_assert!(
            item < self.num_items,
            "called `AssignmentState::fill_place` with item index out of bounds: the len is {} but the index is {}",
            self.num_items,
            item
        );
        debug_assert!(
            self.place_contents[place].is_empty(),
            "called `AssignmentState::fill_place` on place {} which is already occupied",
            place
        );
        debug_assert!(
            !self.matched_items.contains(item),
            "called `AssignmentState::fill_place` with item {} already matched",
            item
        );
        debug_assert!(
            self.num_unmatched > 0,
            "called `AssignmentState::fill_place` but no unmatched items remain"
        );

        self.place_contents[place] = SlotContent::item(item_index);
        self.matched_items.insert(item);
        self.num_unmatched -= 1;

        debug_assert!(self.num_unmatched <= self.num_items);
    }

    /// Empties the specified place, unmatching the item it held.
    /// Returns the item that was removed.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `place_index` is out of bounds or the
    /// place is empty.
    #[inline]
    pub fn clear_place(&mut self, place_index: PlaceIndex) -> ItemIndex {
        let place = place_index.get();
        debug_assert!(
            place < self.num_places(),
            "called `AssignmentState::clear_place` with place index out of bounds: the len is {} but the index is {}",
            self.num_places(),
            place
        );

        let content = self.place_contents[place];
        debug_assert!(
            content.is_item(),
            "called `AssignmentState::clear_place` on place {} which is empty",
            place
        );

        let item_index = content
            .item_index()
            .expect("place content checked non-empty above");

        self.place_contents[place] = SlotContent::empty();
        self.matched_items.set(item_index.get(), false);
        self.num_unmatched += 1;

        debug_assert!(self.num_unmatched <= self.num_items);
        item_index
    }

    /// Exchanges the contents of two places. Matched flags and the
    /// remaining counter are unaffected, as no item enters or leaves the
    /// assignment.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if either index is out of bounds.
    #[inline]
    pub fn swap_places(&mut self, first: PlaceIndex, second: PlaceIndex) {
        debug_assert!(
            first.get() < self.num_places(),
            "called `AssignmentState::swap_places` with place index out of bounds: the len is {} but the index is {}",
            self.num_places(),
            first.get()
        );
        debug_assert!(
            second.get() < self.num_places(),
            "called `AssignmentState::swap_places` with place index out of bounds: the len is {} but the index is {}",
            self.num_places(),
            second.get()
        );

        self.place_contents.swap(first.get(), second.get());
    }

    /// Resets the state to its initial configuration: all places empty,
    /// no items matched.
    #[inline]
    pub fn reset(&mut self) {
        self.place_contents.fill(SlotContent::empty());
        self.matched_items.clear();
        self.num_unmatched = self.num_items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn pi(i: usize) -> PlaceIndex {
        PlaceIndex::new(i)
    }

    #[test]
    fn test_new_state_is_empty_and_unmatched() {
        let state = AssignmentState::new(4, 3);
        assert_eq!(state.num_places(), 4);
        assert_eq!(state.num_items(), 3);
        assert_eq!(state.num_unmatched(), 3);
        assert_eq!(state.num_matched_items(), 0);
        assert!(!state.is_complete());
        assert!(state.place_contents().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_fill_and_clear_are_inverse() {
        let mut state = AssignmentState::new(3, 2);
        let before = state.clone();

        state.fill_place(pi(1), ii(0));
        assert!(state.is_item_matched(ii(0)));
        assert_eq!(state.num_unmatched(), 1);
        assert_eq!(state.place_content(pi(1)), SlotContent::item(ii(0)));

        let removed = state.clear_place(pi(1));
        assert_eq!(removed, ii(0));
        assert_eq!(state, before);
    }

    #[test]
    fn test_complete_when_all_items_placed() {
        let mut state = AssignmentState::new(2, 2);
        state.fill_place(pi(0), ii(1));
        state.fill_place(pi(1), ii(0));
        assert!(state.is_complete());
        assert_eq!(state.num_matched_items(), 2);
    }

    #[test]
    fn test_swap_preserves_matched_flags_and_counter() {
        let mut state = AssignmentState::new(3, 1);
        state.fill_place(pi(0), ii(0));

        state.swap_places(pi(0), pi(2));
        assert!(state.place_content(pi(0)).is_empty());
        assert_eq!(state.place_content(pi(2)), SlotContent::item(ii(0)));
        assert!(state.is_item_matched(ii(0)));
        assert_eq!(state.num_unmatched(), 0);
    }

    #[test]
    fn test_reset_restores_initial_configuration() {
        let mut state = AssignmentState::new(2, 2);
        state.fill_place(pi(0), ii(0));
        state.fill_place(pi(1), ii(1));

        state.reset();
        assert_eq!(state, AssignmentState::new(2, 2));
    }

    #[test]
    fn test_clone_is_independent_of_original() {
        let mut state = AssignmentState::new(2, 1);
        let snapshot = state.clone();

        state.fill_place(pi(0), ii(0));
        assert!(snapshot.place_content(pi(0)).is_empty());
        assert_ne!(state, snapshot);
    }
}
