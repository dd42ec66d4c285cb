//! Criterion benchmarks for adjgraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use adjgraph::graph::Graph;
use adjgraph::types::GraphConfig;

/// Build a random graph with `node_count` nodes and about `edges_per_node` edges each.
fn make_random_graph(node_count: usize, edges_per_node: usize, directed: bool) -> Graph {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new(GraphConfig { directed });
    let values: Vec<String> = (0..node_count).map(|i| format!("node_{}", i)).collect();

    for value in &values {
        graph.add_node(value);
    }
    for source in &values {
        for _ in 0..edges_per_node {
            let target = &values[rng.gen_range(0..node_count)];
            graph.add_edge(source, target);
        }
    }
    graph
}

fn bench_add_edge(c: &mut Criterion) {
    let values: Vec<String> = (0..1_000).map(|i| format!("node_{}", i)).collect();

    c.bench_function("add_edge_10k_undirected", |b| {
        b.iter(|| {
            let mut graph = Graph::undirected();
            for i in 0..10_000 {
                graph.add_edge(&values[i % 1_000], &values[(i * 7 + 3) % 1_000]);
            }
            black_box(graph.adjacency_count())
        })
    });
}

fn bench_remove_edge(c: &mut Criterion) {
    let graph = make_random_graph(1_000, 5, false);

    c.bench_function("remove_edge_1k_undirected", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| {
                for i in 0..1_000 {
                    g.remove_edge(&format!("node_{}", i), &format!("node_{}", (i + 1) % 1_000));
                }
                g
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_bfs_full(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 5, false);

    c.bench_function("bfs_10k_nodes_full", |b| {
        b.iter(|| black_box(graph.breadth_first_from("node_0").count()))
    });
}

fn bench_bfs_directed(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 5, true);

    c.bench_function("bfs_10k_nodes_directed", |b| {
        b.iter(|| black_box(graph.breadth_first_from("node_0").count()))
    });
}

fn bench_bfs_first_100(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 5, false);

    c.bench_function("bfs_10k_nodes_take_100", |b| {
        b.iter(|| black_box(graph.breadth_first_from("node_0").take(100).count()))
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_remove_edge,
    bench_bfs_full,
    bench_bfs_directed,
    bench_bfs_first_100,
);
criterion_main!(benches);
