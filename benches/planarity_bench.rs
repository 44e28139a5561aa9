use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use planarity::graph::Graph;
use planarity::is_planar;

// Random connected graph: spanning tree plus sparse extra edges.
fn connected_graph(n: usize, extra_prob: f64, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges: Vec<(usize, usize)> = Vec::new();
    for v in 1..n {
        edges.push((rng.gen_range(0..v), v));
    }
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.r#gen::<f64>() < extra_prob {
                edges.push((u, v));
            }
        }
    }
    Graph::from_edges(n, &edges)
}

fn cycle(n: usize) -> Graph {
    let mut edges: Vec<(usize, usize)> = (0..n - 1).map(|v| (v, v + 1)).collect();
    edges.push((n - 1, 0));
    Graph::from_edges(n, &edges)
}

fn bench_planarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_planar");

    for &(n, p) in &[(64usize, 0.02), (256, 0.005), (1024, 0.001)] {
        let graph = connected_graph(n, p, 42);
        group.bench_with_input(BenchmarkId::new("random", n), &graph, |b, g| {
            b.iter(|| is_planar(g).unwrap())
        });
    }

    let ring = cycle(1024);
    group.bench_function("cycle/1024", |b| b.iter(|| is_planar(&ring).unwrap()));

    let k5 = Graph::new(
        (0..5)
            .map(|v| (0..5).filter(|&u| u != v).collect())
            .collect(),
    );
    group.bench_function("k5", |b| b.iter(|| is_planar(&k5).unwrap()));

    group.finish();
}

criterion_group!(benches, bench_planarity);
criterion_main!(benches);
