use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use edgerank::{pagerank, Graph, GraphConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(nodes: usize, edges: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = Graph::new(nodes, GraphConfig::default()).unwrap();
    for _ in 0..edges {
        let from = rng.gen_range(0..nodes);
        let to = rng.gen_range(0..nodes);
        graph.add_edge(from, to).unwrap();
    }
    graph
}

/// Benchmark edge insertion throughput (amortized list growth)
fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for edges in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(edges), edges, |b, &edges| {
            b.iter(|| {
                let graph = random_graph(1_000, edges);
                criterion::black_box(graph.edge_count());
            });
        });
    }
    group.finish();
}

/// Benchmark a full solve at increasing graph sizes
fn bench_pagerank(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagerank");

    for nodes in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(nodes), nodes, |b, &nodes| {
            b.iter(|| {
                let mut graph = random_graph(nodes, nodes * 10);
                let summary = pagerank(&mut graph).unwrap();
                criterion::black_box(summary.iterations);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_edge_insertion, bench_pagerank);
criterion_main!(benches);
