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

//! # Billet Tree
//!
//! **Exhaustive deterministic techniques for the Billet Assignment
//! Solver.**
//!
//! Two strategies consume the same deterministic move protocol:
//!
//! * **`depth_first`**: branch exploration with an explicit history stack
//!   of reversible moves, mutating one shared problem state.
//! * **`breadth_first`**: level-order exploration with a FIFO frontier of
//!   independent state snapshots, retreating the shared problem after
//!   each expansion.
//!
//! The differing state-management strategies (reversal versus cloning)
//! are intentional trade-offs between mutation complexity and memory, and
//! both runs to full depth enumerate exactly the same goal states.

pub mod breadth_first;
pub mod depth_first;
pub mod frontier;
pub mod stats;
