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

//! Reversible move records.
//!
//! `Move` captures sufficient information to undo one deterministic
//! forward step during backtracking: the content that was committed, the
//! place it went to, and the tree level the step descended from. Moves are
//! cheap to copy, pushed on a history stack by the depth-first technique,
//! and applied-then-discarded by the breadth-first technique. Each move is
//! consumed exactly once by the matching retreat.
//!
//! `RandomSwap` is the stochastic counterpart: a proposal to exchange the
//! contents of two places, evaluated without mutation and applied only on
//! acceptance.

use billet_model::{index::PlaceIndex, slot::SlotContent};

/// An immutable record of a single deterministic forward step, sufficient
/// to reverse it exactly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    content: SlotContent,
    place: PlaceIndex,
    level: usize,
}

impl Move {
    /// Creates a new `Move`.
    #[inline]
    pub fn new(content: SlotContent, place: PlaceIndex, level: usize) -> Self {
        Self {
            content,
            place,
            level,
        }
    }

    /// Returns the content that was committed (an item, or empty).
    #[inline]
    pub fn content(&self) -> SlotContent {
        self.content
    }

    /// Returns the place the content was committed to.
    #[inline]
    pub fn place(&self) -> PlaceIndex {
        self.place
    }

    /// Returns the tree level this move descended from.
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Move(place: {}, content: {}, level: {})",
            self.place.get(),
            self.content,
            self.level
        )
    }
}

/// A proposal to exchange the contents of two distinct places.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RandomSwap {
    first: PlaceIndex,
    second: PlaceIndex,
}

impl RandomSwap {
    /// Creates a new `RandomSwap`.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if both indices address the same place.
    #[inline]
    pub fn new(first: PlaceIndex, second: PlaceIndex) -> Self {
        debug_assert!(
            first != second,
            "called `RandomSwap::new` with identical places: {}",
            first
        );

        Self { first, second }
    }

    /// Returns the first place of the exchange.
    #[inline]
    pub fn first(&self) -> PlaceIndex {
        self.first
    }

    /// Returns the second place of the exchange.
    #[inline]
    pub fn second(&self) -> PlaceIndex {
        self.second
    }
}

impl std::fmt::Display for RandomSwap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RandomSwap(first: {}, second: {})",
            self.first.get(),
            self.second.get()
        )
    }
}
