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

//! # Cost Numeric Trait
//!
//! Unified numeric bounds for search and technique components.
//! `CostNumeric` specifies the integer capabilities required by the
//! solver: intrinsic traits (`PrimInt`, `Signed`), conversion into `i64`
//! for lock-free progress reporting, and thread-safety markers for
//! concurrent monitoring.
//!
//! ## Motivation
//!
//! Exact search pipelines should remain generic over integer types while
//! retaining predictable arithmetic semantics. This trait collects the
//! necessary bounds into a single alias, simplifying generic signatures
//! across the workspace.
//!
//! Note: `i128` is intentionally excluded (no lossless `Into<i64>`), as
//! preference costs never approach that range in practice.

use num_traits::{FromPrimitive, PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for numeric types that can be used as preference costs.
/// These are usually the signed integer types `i8`, `i16`, `i32` and
/// `i64`.
pub trait CostNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + Into<i64>
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + Hash
{
}

impl<T> CostNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + Into<i64>
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + Hash
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cost_numeric<T: CostNumeric>() {}

    #[test]
    fn test_standard_signed_integers_satisfy_the_alias() {
        assert_cost_numeric::<i8>();
        assert_cost_numeric::<i16>();
        assert_cost_numeric::<i32>();
        assert_cost_numeric::<i64>();
    }
}
