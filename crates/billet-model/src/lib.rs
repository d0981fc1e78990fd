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

//! # Billet Model
//!
//! **The Core Domain Model for the Billet Assignment Solver.**
//!
//! This crate defines the fundamental data structures used to represent the
//! capacitated many-to-one assignment problem: items are matched to places,
//! places belong to groups with minimum and maximum occupancy, and every
//! item/place pairing carries a transformed preference cost. It serves as
//! the data interchange layer between the problem definition (user input)
//! and the solving engines (`billet_tree`, `billet_anneal`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`index`**: Provides strongly-typed wrappers (`ItemIndex`,
//!   `PlaceIndex`, `GroupIndex`) to prevent logical indexing errors.
//! * **`slot`**: Sentinel-based place content, keeping "item or empty" to
//!   a single machine word in performance-critical loops.
//! * **`model`**: Contains the `Model` (immutable, optimized for solving)
//!   and `ModelBuilder` (mutable, optimized for configuration).
//! * **`solution`**: Defines the output format, including objective values
//!   and per-place assignments.
//! * **`report`**: Stable row/heading accessors consumed by external
//!   reporting layers.
//! * **`err`**: Build-time validation errors.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types. You cannot
//!     accidentally use an `ItemIndex` to access a place table.
//! 2.  **Memory Layout**: Data is stored in flattened vectors rather than
//!     nested structures to maximize cache locality during search.
//! 3.  **Fail-Fast**: Builders validate inputs eagerly so the solvers
//!     never encounter a structurally invalid model.

pub mod err;
pub mod index;
pub mod model;
pub mod report;
pub mod slot;
pub mod solution;
