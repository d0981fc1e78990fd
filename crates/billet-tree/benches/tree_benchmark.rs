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

use billet_model::{
    index::ItemIndex,
    model::{Model, ModelBuilder},
};
use billet_search::problem::PlacementProblem;
use billet_tree::{
    breadth_first::{BreadthFirstParams, BreadthFirstTechnique},
    depth_first::{DepthFirstParams, DepthFirstTechnique},
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

type IntegerType = i64;

/// Builds a dense assignment instance with `n` items over `n` mandatory
/// unit places. Costs are deterministic but unstructured enough to avoid
/// degenerate pruning behavior.
fn build_model(n: usize) -> Model<IntegerType> {
    let mut builder = ModelBuilder::<IntegerType>::new(n);
    for _ in 0..n {
        builder.add_group(1, 1);
    }
    for item in 0..n {
        let row: Vec<IntegerType> = (0..n)
            .map(|place| (((item * 7 + place * 13) % 17) + 1) as IntegerType)
            .collect();
        builder.set_preference_row(ItemIndex::new(item), &row);
    }
    builder.build().unwrap()
}

fn bench_depth_first(c: &mut Criterion) {
    let model = build_model(7);

    c.bench_function("depth_first_full_enumeration", |b| {
        b.iter(|| {
            let problem = PlacementProblem::new(model.clone());
            let mut technique =
                DepthFirstTechnique::new(problem, DepthFirstParams::full_depth());
            black_box(technique.run())
        })
    });
}

fn bench_breadth_first(c: &mut Criterion) {
    let model = build_model(6);

    c.bench_function("breadth_first_full_enumeration", |b| {
        b.iter(|| {
            let problem = PlacementProblem::new(model.clone());
            let mut technique =
                BreadthFirstTechnique::new(problem, BreadthFirstParams::full_depth());
            black_box(technique.run())
        })
    });
}

criterion_group!(benches, bench_depth_first, bench_breadth_first);
criterion_main!(benches);
