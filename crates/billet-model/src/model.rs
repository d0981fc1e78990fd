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
    err::{InvertedOccupancyError, ModelError, NoGroupsError, ZeroCapacityGroupError},
    index::{GroupIndex, ItemIndex, PlaceIndex},
};
use num_traits::{PrimInt, Signed, Zero};

#[inline(always)]
fn flatten_index(num_places: usize, item_index: ItemIndex, place_index: PlaceIndex) -> usize {
    item_index.get() * num_places + place_index.get()
}

/// Represents the theoretical search space size of the assignment problem.
///
/// At tree level `k` a node branches into at most one alternative per
/// still-unmatched item plus the "leave empty" alternative, so the level
/// population is bounded by $L_k = L_{k-1} \times (N - k + 2)$ for $N$
/// items. Summed over all place levels these numbers exceed standard
/// integer limits quickly, so this struct stores the value in
/// **Logarithmic Space** ($\log_{10}$).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Complexity {
    /// The base-10 logarithm of the total search space size.
    /// If the size is $1.5 \times 10^{20}$, this stores $20.176$.
    log_val: f64,
}

impl Complexity {
    /// Calculates the complexity for a given number of items and places.
    pub fn new(num_items: usize, num_places: usize) -> Self {
        if num_places == 0 {
            return Complexity { log_val: 0.0 }; // 1 node (root), log10(1) = 0
        }

        // Helper to compute log10(10^a + 10^b)
        let log10_add = |a: f64, b: f64| -> f64 {
            let max = a.max(b);
            let min = a.min(b);
            // Factor out 10^max: 10^max * (1 + 10^(min-max))
            max + (1.0 + 10.0_f64.powf(min - max)).log10()
        };

        // 'current_level_log' tracks log10(L_k)
        let mut current_level_log = 0.0; // Level 0 has 1 node, log10(1) = 0.0

        // 'total_sum_log' tracks log10(Sum(L_0...L_k))
        let mut total_sum_log = 0.0;

        for k in 1..=num_places {
            // Branching factor for this step: untried items plus the
            // "leave empty" alternative.
            let remaining_items = (num_items as f64 - (k as f64) + 1.0).max(0.0);
            let branching_log = (remaining_items + 1.0).log10();

            // L_k = L_{k-1} * BranchingFactor
            current_level_log += branching_log;

            // Total += L_k (performed in log space)
            total_sum_log = log10_add(total_sum_log, current_level_log);
        }

        Complexity {
            log_val: total_sum_log,
        }
    }

    /// Returns the percentage of the search space that was actually explored.
    /// Returns None if the space is too massive to represent as f64.
    pub fn coverage(&self, nodes_explored: u64) -> Option<f64> {
        if self.log_val > 15.0 {
            return Some(0.0);
        }

        let total_size = 10.0_f64.powf(self.log_val);
        if total_size == 0.0 {
            return None;
        }

        Some((nodes_explored as f64 / total_size) * 100.0)
    }

    /// Returns the exponent (order of magnitude).
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }

    /// Returns the mantissa (coefficient).
    #[inline]
    pub fn mantissa(&self) -> f64 {
        let fractional_part = self.log_val - self.log_val.floor();
        10.0_f64.powf(fractional_part)
    }

    /// Returns the raw Log10 value. Useful for progress bars.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.log_val
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} × 10^{}", self.mantissa(), self.exponent())
    }
}

impl std::fmt::Debug for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Complexity(log10={:.4})", self.log_val)
    }
}

/// The immutable data model describing items, groups, places, and
/// transformed preference costs.
///
/// This struct holds all pre-validated, queryable data:
/// - `costs[item * num_places + place]`: the transformed preference cost of
///   placing an item at a place (lower is better).
/// - `place_groups[place]`: the group each place belongs to.
/// - `place_mandatory[place]`: whether the place must be filled to honor
///   its group's minimum occupancy.
/// - `group_min_occupancies[group]` / `group_max_occupancies[group]`: the
///   occupancy window of each group. A group with maximum `m` contributes
///   exactly `m` places, the first `min` of which are mandatory.
///
/// Construction:
/// - Use `ModelBuilder` and call `ModelBuilder::build` to obtain a
///   validated `Model`.
#[derive(Clone)]
pub struct Model<T>
where
    T: PrimInt + Signed,
{
    costs: Vec<T>,                     // len = num_items * num_places
    place_groups: Vec<GroupIndex>,     // len = num_places
    place_mandatory: Vec<bool>,        // len = num_places
    group_min_occupancies: Vec<usize>, // len = num_groups
    group_max_occupancies: Vec<usize>, // len = num_groups
    num_items: usize,
    num_mandatory_places: usize,
    total_minimum_occupancy: usize,
}

impl<T> Model<T>
where
    T: PrimInt + Signed,
{
    /// Returns the number of items in the model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use billet_model::model::ModelBuilder;
    ///
    /// let mut builder = ModelBuilder::<i64>::new(3);
    /// builder.add_group(1, 2).add_group(0, 2);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.num_items(), 3);
    /// ```
    #[inline]
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Returns the number of places in the model. This equals the sum of
    /// the maximum occupancies over all groups.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use billet_model::model::ModelBuilder;
    ///
    /// let mut builder = ModelBuilder::<i64>::new(3);
    /// builder.add_group(1, 2).add_group(0, 2);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.num_places(), 4);
    /// ```
    #[inline]
    pub fn num_places(&self) -> usize {
        self.place_groups.len()
    }

    /// Returns the number of groups in the model.
    #[inline]
    pub fn num_groups(&self) -> usize {
        self.group_max_occupancies.len()
    }

    /// Returns the number of mandatory places in the model. This equals
    /// the sum of the minimum occupancies over all groups.
    #[inline]
    pub fn num_mandatory_places(&self) -> usize {
        self.num_mandatory_places
    }

    /// Returns the sum of the minimum occupancies over all groups.
    #[inline]
    pub fn total_minimum_occupancy(&self) -> usize {
        self.total_minimum_occupancy
    }

    /// Returns the sum of the maximum occupancies over all groups, which
    /// equals the place count.
    #[inline]
    pub fn total_maximum_occupancy(&self) -> usize {
        self.num_places()
    }

    /// Returns the complexity of the model's search space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use billet_model::model::ModelBuilder;
    ///
    /// let mut builder = ModelBuilder::<i64>::new(2);
    /// builder.add_group(0, 3);
    /// let model = builder.build().unwrap();
    /// let complexity = model.complexity();
    /// println!("Model complexity: {}", complexity);
    /// ```
    #[inline]
    pub fn complexity(&self) -> Complexity {
        Complexity::new(self.num_items(), self.num_places())
    }

    /// Returns the group the specified place belongs to.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `place_index` is out of bounds.
    #[inline]
    pub fn place_group(&self, place_index: PlaceIndex) -> GroupIndex {
        let index = place_index.get();
        debug_assert!(
            index < self.num_places(),
            "called `Model::place_group` with place index out of bounds: the len is {} but the index is {}",
            self.num_places(),
            index
        );

        self.place_groups[index]
    }

    /// Checks whether the specified place is mandatory, i.e. whether its
    /// group's minimum occupancy makes it non-optional to fill.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `place_index` is out of bounds.
    #[inline]
    pub fn is_place_mandatory(&self, place_index: PlaceIndex) -> bool {
        let index = place_index.get();
        debug_assert!(
            index < self.num_places(),
            "called `Model::is_place_mandatory` with place index out of bounds: the len is {} but the index is {}",
            self.num_places(),
            index
        );

        self.place_mandatory[index]
    }

    /// Returns the minimum occupancy of the specified group.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `group_index` is out of bounds.
    #[inline]
    pub fn group_min_occupancy(&self, group_index: GroupIndex) -> usize {
        let index = group_index.get();
        debug_assert!(
            index < self.num_groups(),
            "called `Model::group_min_occupancy` with group index out of bounds: the len is {} but the index is {}",
            self.num_groups(),
            index
        );

        self.group_min_occupancies[index]
    }

    /// Returns the maximum occupancy of the specified group.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `group_index` is out of bounds.
    #[inline]
    pub fn group_max_occupancy(&self, group_index: GroupIndex) -> usize {
        let index = group_index.get();
        debug_assert!(
            index < self.num_groups(),
            "called `Model::group_max_occupancy` with group index out of bounds: the len is {} but the index is {}",
            self.num_groups(),
            index
        );

        self.group_max_occupancies[index]
    }

    /// Returns the transformed preference cost of placing the specified
    /// item at the specified place. Lower is better.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `item_index` or `place_index` are out of
    /// bounds.
    #[inline]
    pub fn preference_cost(&self, item_index: ItemIndex, place_index: PlaceIndex) -> T {
        debug_assert!(
            item_index.get() < self.num_items(),
            "called `Model::preference_cost` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            item_index.get()
        );
        debug_assert!(
            place_index.get() < self.num_places(),
            "called `Model::preference_cost` with place index out of bounds: the len is {} but the index is {}",
            self.num_places(),
            place_index.get()
        );

        self.costs[flatten_index(self.num_places(), item_index, place_index)]
    }

    /// Returns the transformed preference cost of placing the specified
    /// item at the specified place without bounds checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `item_index` is within
    /// `0..num_items` and `place_index` is within `0..num_places`.
    #[inline]
    pub unsafe fn preference_cost_unchecked(
        &self,
        item_index: ItemIndex,
        place_index: PlaceIndex,
    ) -> T {
        debug_assert!(
            item_index.get() < self.num_items(),
            "called `Model::preference_cost_unchecked` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            item_index.get()
        );
        debug_assert!(
            place_index.get() < self.num_places(),
            "called `Model::preference_cost_unchecked` with place index out of bounds: the len is {} but the index is {}",
            self.num_places(),
            place_index.get()
        );

        unsafe {
            *self
                .costs
                .get_unchecked(flatten_index(self.num_places(), item_index, place_index))
        }
    }

    /// Returns a slice of all preference costs in item-major layout.
    #[inline]
    pub fn preference_costs(&self) -> &[T] {
        &self.costs
    }
}

impl<T> std::fmt::Debug for Model<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("num_items", &self.num_items)
            .field("num_places", &self.num_places())
            .field("num_groups", &self.num_groups())
            .field("num_mandatory_places", &self.num_mandatory_places)
            .finish()
    }
}

/// A mutable configuration object used to assemble a validated `Model`.
///
/// Groups are added one at a time; each group with maximum occupancy `m`
/// contributes `m` places in declaration order, the first `min` of which
/// are mandatory. Preference costs default to zero until set.
///
/// # Examples
///
/// ```rust
/// use billet_model::index::{ItemIndex, PlaceIndex};
/// use billet_model::model::ModelBuilder;
///
/// let mut builder = ModelBuilder::<i64>::new(2);
/// builder.add_group(1, 2);
/// builder.set_preference_cost(ItemIndex::new(0), PlaceIndex::new(0), 3);
/// builder.set_preference_cost(ItemIndex::new(1), PlaceIndex::new(1), 1);
/// let model = builder.build().unwrap();
/// assert_eq!(model.preference_cost(ItemIndex::new(0), PlaceIndex::new(0)), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ModelBuilder<T>
where
    T: PrimInt + Signed,
{
    num_items: usize,
    group_min_occupancies: Vec<usize>,
    group_max_occupancies: Vec<usize>,
    // Place-major columns; flattened to item-major on build, once the
    // final place count is known.
    costs_by_place: Vec<Vec<T>>,
}

impl<T> ModelBuilder<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `ModelBuilder` for the given number of items.
    #[inline]
    pub fn new(num_items: usize) -> Self {
        Self {
            num_items,
            group_min_occupancies: Vec::new(),
            group_max_occupancies: Vec::new(),
            costs_by_place: Vec::new(),
        }
    }

    /// Returns the number of items configured so far.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Returns the number of places contributed by the groups added so far.
    #[inline]
    pub fn num_places(&self) -> usize {
        self.costs_by_place.len()
    }

    /// Adds a group with the given occupancy window. The group contributes
    /// `max_occupancy` places whose preference costs default to zero.
    pub fn add_group(&mut self, min_occupancy: usize, max_occupancy: usize) -> &mut Self {
        self.group_min_occupancies.push(min_occupancy);
        self.group_max_occupancies.push(max_occupancy);
        for _ in 0..max_occupancy {
            self.costs_by_place.push(vec![T::zero(); self.num_items]);
        }
        self
    }

    /// Sets the preference cost of placing the specified item at the
    /// specified place.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds, or if `place_index` does
    /// not address a place contributed by a previously added group.
    pub fn set_preference_cost(
        &mut self,
        item_index: ItemIndex,
        place_index: PlaceIndex,
        cost: T,
    ) -> &mut Self {
        assert!(
            item_index.get() < self.num_items,
            "called `ModelBuilder::set_preference_cost` with item index out of bounds: the len is {} but the index is {}",
            self.num_items,
            item_index.get()
        );
        assert!(
            place_index.get() < self.costs_by_place.len(),
            "called `ModelBuilder::set_preference_cost` with place index out of bounds: the len is {} but the index is {}",
            self.costs_by_place.len(),
            place_index.get()
        );

        self.costs_by_place[place_index.get()][item_index.get()] = cost;
        self
    }

    /// Sets the full preference row for one item across all places added
    /// so far.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds or if the row length does
    /// not match the current place count.
    pub fn set_preference_row(&mut self, item_index: ItemIndex, row: &[T]) -> &mut Self {
        assert!(
            item_index.get() < self.num_items,
            "called `ModelBuilder::set_preference_row` with item index out of bounds: the len is {} but the index is {}",
            self.num_items,
            item_index.get()
        );
        assert!(
            row.len() == self.costs_by_place.len(),
            "called `ModelBuilder::set_preference_row` with inconsistent row length: expected {} but got {}",
            self.costs_by_place.len(),
            row.len()
        );

        for (place, &cost) in row.iter().enumerate() {
            self.costs_by_place[place][item_index.get()] = cost;
        }
        self
    }

    /// Validates the configuration and builds the immutable `Model`.
    ///
    /// Structural capacity feasibility (whether the places can actually
    /// admit all items) is deliberately *not* checked here; it is the
    /// run-time concern of the techniques' initialization.
    pub fn build(self) -> Result<Model<T>, ModelError> {
        if self.group_max_occupancies.is_empty() {
            return Err(NoGroupsError.into());
        }

        for (group, (&min, &max)) in self
            .group_min_occupancies
            .iter()
            .zip(self.group_max_occupancies.iter())
            .enumerate()
        {
            let group_index = GroupIndex::new(group);
            if max == 0 {
                return Err(ZeroCapacityGroupError::new(group_index).into());
            }
            if min > max {
                return Err(InvertedOccupancyError::new(group_index, min, max).into());
            }
        }

        let num_places = self.costs_by_place.len();
        let mut place_groups = Vec::with_capacity(num_places);
        let mut place_mandatory = Vec::with_capacity(num_places);

        for (group, (&min, &max)) in self
            .group_min_occupancies
            .iter()
            .zip(self.group_max_occupancies.iter())
            .enumerate()
        {
            for slot in 0..max {
                place_groups.push(GroupIndex::new(group));
                place_mandatory.push(slot < min);
            }
        }

        // Flatten the place-major columns into the item-major layout used
        // by the hot cost lookups.
        let mut costs = Vec::with_capacity(self.num_items * num_places);
        for item in 0..self.num_items {
            for place in 0..num_places {
                costs.push(self.costs_by_place[place][item]);
            }
        }

        let num_mandatory_places = place_mandatory.iter().filter(|&&m| m).count();
        let total_minimum_occupancy = self.group_min_occupancies.iter().sum();

        Ok(Model {
            costs,
            place_groups,
            place_mandatory,
            group_min_occupancies: self.group_min_occupancies,
            group_max_occupancies: self.group_max_occupancies,
            num_items: self.num_items,
            num_mandatory_places,
            total_minimum_occupancy,
        })
    }
}
