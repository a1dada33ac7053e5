//! Criterion micro-benchmarks for shock propagation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use food_web_lab::{FoodWebGraph, PopulationMap, ShockPropagator, ShockSpec, Species};

/// A layered web: every species in layer n eats every species in layer n - 1.
fn layered_web(layers: usize, width: usize) -> (FoodWebGraph, PopulationMap) {
    let name = |layer: usize, i: usize| Species::new(format!("s{}_{}", layer, i));

    let nodes: Vec<Species> = (0..layers)
        .flat_map(|l| (0..width).map(move |i| (l, i)))
        .map(|(l, i)| name(l, i))
        .collect();

    let mut edges = Vec::new();
    for l in 1..layers {
        for prey in 0..width {
            for predator in 0..width {
                edges.push((name(l - 1, prey), name(l, predator)));
            }
        }
    }

    let population = nodes.iter().cloned().map(|s| (s, 1_000)).collect();
    let graph = FoodWebGraph::try_new(nodes, edges).unwrap();
    (graph, population)
}

/// Benchmark: Remove a species in the middle of the classroom-sized forest web.
fn bench_remove_small_web(c: &mut Criterion) {
    let (graph, population) = layered_web(5, 2);
    let target = Species::from("s2_0");
    let propagator = ShockPropagator::default();

    c.bench_function("remove_small_web", |b| {
        b.iter(|| {
            let result = propagator
                .apply(&graph, black_box(&population), &target, ShockSpec::Remove)
                .unwrap();
            black_box(result);
        });
    });
}

/// Benchmark: Halve a species in a 10x10 layered web (900 links).
fn bench_decline_dense_web(c: &mut Criterion) {
    let (graph, population) = layered_web(10, 10);
    let target = Species::from("s5_5");
    let propagator = ShockPropagator::default();

    c.bench_function("decline_dense_web", |b| {
        b.iter(|| {
            let result = propagator
                .apply(&graph, black_box(&population), &target, ShockSpec::AdjustByPercent(-50))
                .unwrap();
            black_box(result);
        });
    });
}

criterion_group!(benches, bench_remove_small_web, bench_decline_dense_web);
criterion_main!(benches);
