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

use crate::{index::PlaceIndex, slot::SlotContent};
use num_traits::{PrimInt, Signed};

/// The final solution to an assignment problem.
///
/// Data is indexed directly by `PlaceIndex` (i.e., index `i` corresponds
/// to place `i`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<T> {
    /// The total objective cost of this solution.
    objective_value: T,

    /// The content of each place.
    /// `place_contents[p]` is the item assigned to place `p`, or empty.
    place_contents: Vec<SlotContent>,
}

impl<T> Solution<T>
where
    T: PrimInt + Signed + Copy,
{
    /// Constructs a new `Solution`.
    pub fn new(objective_value: T, place_contents: Vec<SlotContent>) -> Self {
        Self {
            objective_value,
            place_contents,
        }
    }

    /// Returns the content of a specific place.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `place_index` is out of bounds.
    #[inline]
    pub fn content_of_place(&self, place_index: PlaceIndex) -> SlotContent {
        let index = place_index.get();
        debug_assert!(
            index < self.num_places(),
            "called `Solution::content_of_place` with place index out of bounds: the len is {} but the index is {}",
            self.num_places(),
            index
        );

        self.place_contents[index]
    }

    /// Returns the number of places in this solution.
    #[inline]
    pub fn num_places(&self) -> usize {
        self.place_contents.len()
    }

    /// Returns the number of places occupied by an item.
    #[inline]
    pub fn num_filled_places(&self) -> usize {
        self.place_contents.iter().filter(|c| c.is_item()).count()
    }

    /// Returns the total objective value of this solution.
    #[inline]
    pub fn objective_value(&self) -> T {
        self.objective_value
    }

    /// Returns a slice of the contents of all places.
    #[inline]
    pub fn place_contents(&self) -> &[SlotContent] {
        &self.place_contents
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: PrimInt + Signed + Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution Summary")?;
        writeln!(f, "   Objective Value: {}", self.objective_value)?;
        writeln!(f)?;

        if self.num_places() == 0 {
            writeln!(f, "   (No places)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10}", "Place", "Item")?;
        writeln!(f, "   {:-<10}-+-{:-<10}", "", "")?;
        for (place, content) in self.place_contents.iter().enumerate() {
            writeln!(f, "   {:<10} | {:<10}", place, content)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ItemIndex;

    fn occupied(i: usize) -> SlotContent {
        SlotContent::item(ItemIndex::new(i))
    }

    #[test]
    fn test_new_and_basic_accessors() {
        let contents = vec![occupied(2), SlotContent::empty(), occupied(0)];
        let sol = Solution::new(17i64, contents.clone());

        assert_eq!(sol.objective_value(), 17);
        assert_eq!(sol.num_places(), 3);
        assert_eq!(sol.num_filled_places(), 2);
        assert_eq!(sol.place_contents(), &contents[..]);
        assert_eq!(sol.content_of_place(PlaceIndex::new(0)), occupied(2));
        assert!(sol.content_of_place(PlaceIndex::new(1)).is_empty());
    }

    #[test]
    fn test_empty_solution_is_valid() {
        let sol = Solution::new(0i64, Vec::new());
        assert_eq!(sol.objective_value(), 0);
        assert_eq!(sol.num_places(), 0);
        assert_eq!(sol.num_filled_places(), 0);
    }

    #[test]
    fn test_display_lists_every_place() {
        let sol = Solution::new(5i64, vec![occupied(1), SlotContent::empty()]);
        let rendered = format!("{}", sol);

        assert!(rendered.contains("Objective Value: 5"));
        assert!(rendered.contains("Place"));
        assert!(rendered.contains("Item"));
        // Place 1 is empty and renders as a dash.
        assert!(rendered.contains('-'));
    }

    #[test]
    fn test_clone_preserves_equality() {
        let sol = Solution::new(9i64, vec![occupied(0)]);
        let copy = sol.clone();
        assert_eq!(sol, copy);
    }
}
