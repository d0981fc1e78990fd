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

//! # Billet Search
//!
//! **The shared search substrate of the Billet Assignment Solver.**
//!
//! This crate hosts everything the solving techniques have in common:
//!
//! * **`state`**: the live mutable `AssignmentState` (place contents,
//!   matched flags, remaining counter) with deep-copy snapshot semantics.
//! * **`moves`**: reversible `Move` records for backtracking and
//!   `RandomSwap` proposals for local search.
//! * **`problem`**: the `Problem` capability trait plus the concrete
//!   `PlacementProblem`, exposing the deterministic and stochastic move
//!   protocols over one shared state.
//! * **`technique`**: the `Technique` run-lifecycle trait together with
//!   the lock-free `StopHandle`/`ProgressHandle` pair used for
//!   cross-thread monitoring.
//! * **`monitor`**: composable observers (interrupt, time limit, logging)
//!   consulted at step boundaries.
//! * **`result`**: outcome and termination-reason reporting.
//! * **`num`**: the `CostNumeric` trait alias bounding the generic cost
//!   type.
//! * **`err`**: structural infeasibility errors raised at initialization.
//!
//! The deterministic protocol is intentionally shared verbatim by both
//! exhaustive techniques; the breadth-first strategy layers state cloning
//! on top of the very same commit/retreat pair the depth-first strategy
//! uses destructively.

pub mod err;
pub mod monitor;
pub mod moves;
pub mod num;
pub mod problem;
pub mod result;
pub mod state;
pub mod technique;
