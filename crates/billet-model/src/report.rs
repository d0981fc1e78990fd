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

//! Stable reporting accessors for solutions.
//!
//! Downstream layers render solutions into tabular form. The rendering
//! itself lives outside this workspace; the contract here is a capability
//! trait exposing stable heading, detail, and summary rows per concrete
//! problem variant, so that reporting code never reaches into solver
//! internals.

use crate::{
    index::PlaceIndex,
    model::Model,
    solution::Solution,
};
use num_traits::{PrimInt, Signed};

/// A capability for rendering a solution as rows of display strings.
///
/// Implementations exist per concrete problem variant, since the meaning
/// of a place (and therefore the columns worth reporting) differs between
/// variants.
pub trait SolutionReport {
    /// Returns the column headings of the detail table.
    fn detail_headings(&self) -> Vec<String>;

    /// Returns one detail row per place.
    fn detail_rows(&self) -> Vec<Vec<String>>;

    /// Returns summary key/value rows for the whole solution.
    fn summary_rows(&self) -> Vec<(String, String)>;
}

/// Reporting view over a placement solution and the model it solves.
#[derive(Debug, Clone, Copy)]
pub struct PlacementReport<'a, T>
where
    T: PrimInt + Signed,
{
    model: &'a Model<T>,
    solution: &'a Solution<T>,
}

impl<'a, T> PlacementReport<'a, T>
where
    T: PrimInt + Signed,
{
    /// Creates a reporting view for the given model and solution.
    ///
    /// # Panics
    ///
    /// Panics if the solution's place count does not match the model's.
    pub fn new(model: &'a Model<T>, solution: &'a Solution<T>) -> Self {
        assert!(
            model.num_places() == solution.num_places(),
            "called `PlacementReport::new` with inconsistent place counts: the model has {} but the solution has {}",
            model.num_places(),
            solution.num_places()
        );

        Self { model, solution }
    }
}

impl<'a, T> SolutionReport for PlacementReport<'a, T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn detail_headings(&self) -> Vec<String> {
        vec![
            "Place".to_string(),
            "Group".to_string(),
            "Mandatory".to_string(),
            "Item".to_string(),
            "Cost".to_string(),
        ]
    }

    fn detail_rows(&self) -> Vec<Vec<String>> {
        (0..self.model.num_places())
            .map(|p| {
                let place = PlaceIndex::new(p);
                let content = self.solution.content_of_place(place);
                let cost = match content.item_index() {
                    Some(item) => format!("{}", self.model.preference_cost(item, place)),
                    None => "0".to_string(),
                };
                vec![
                    format!("{}", p),
                    format!("{}", self.model.place_group(place).get()),
                    if self.model.is_place_mandatory(place) {
                        "yes".to_string()
                    } else {
                        "no".to_string()
                    },
                    format!("{}", content),
                    cost,
                ]
            })
            .collect()
    }

    fn summary_rows(&self) -> Vec<(String, String)> {
        vec![
            (
                "Objective".to_string(),
                format!("{}", self.solution.objective_value()),
            ),
            (
                "Filled places".to_string(),
                format!("{}", self.solution.num_filled_places()),
            ),
            (
                "Empty places".to_string(),
                format!(
                    "{}",
                    self.solution.num_places() - self.solution.num_filled_places()
                ),
            ),
            (
                "Items".to_string(),
                format!("{}", self.model.num_items()),
            ),
        ]
    }
}
