//! Breadth-first traversal tests.

use adjgraph::graph::{Graph, GraphBuilder};
use adjgraph::types::Node;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn values<'g>(nodes: impl Iterator<Item = &'g Node>) -> Vec<&'g str> {
    nodes.map(Node::value).collect()
}

/// The four-node undirected graph: (a,c), (a,b), (c,d), (b,c).
fn diamond() -> Graph {
    GraphBuilder::new()
        .edge("a", "c")
        .edge("a", "b")
        .edge("c", "d")
        .edge("b", "c")
        .build()
}

#[test]
fn test_no_root_is_empty() {
    let graph = diamond();
    let mut bfs = graph.breadth_first(None);
    assert!(bfs.next().is_none());
    assert!(bfs.next().is_none());
}

#[test]
fn test_isolated_node() {
    let mut graph = Graph::undirected();
    let a = graph.add_node("a");
    assert_eq!(values(graph.breadth_first(Some(a))), ["a"]);
}

#[test]
fn test_concrete_bfs_order() {
    init_logger();
    let graph = diamond();
    let a = graph.node_exists("a");
    assert_eq!(values(graph.breadth_first(a)), ["a", "c", "b", "d"]);
}

#[test]
fn test_bfs_from_other_root() {
    let graph = diamond();
    // d: [c]; c: [a, d, b]; a: [c, b]
    assert_eq!(values(graph.breadth_first_from("d")), ["d", "c", "a", "b"]);
}

#[test]
fn test_bfs_from_missing_value_is_empty() {
    let graph = diamond();
    assert_eq!(graph.breadth_first_from("nope").count(), 0);
}

#[test]
fn test_directed_follows_outgoing_only() {
    let graph = GraphBuilder::new()
        .directed(true)
        .edge("a", "b")
        .edge("a", "c")
        .edge("b", "d")
        .edge("d", "a")
        .edge("e", "a")
        .build();

    assert_eq!(values(graph.breadth_first_from("b")), ["b", "d", "a", "c"]);
    // e reaches everything, nothing reaches e
    assert_eq!(values(graph.breadth_first_from("e")), ["e", "a", "b", "c", "d"]);
    assert_eq!(values(graph.breadth_first_from("c")), ["c"]);
}

#[test]
fn test_unreachable_nodes_not_visited() {
    let graph = GraphBuilder::new()
        .edge("a", "b")
        .edge("x", "y")
        .node("lonely")
        .build();
    assert_eq!(values(graph.breadth_first_from("a")), ["a", "b"]);
}

#[test]
fn test_each_node_yielded_once_despite_duplicates() {
    init_logger();
    let graph = GraphBuilder::new()
        .edge("a", "b")
        .edge("a", "b")
        .edge("a", "b")
        .edge("b", "c")
        .edge("c", "a")
        .edge("a", "a")
        .build();

    let order = values(graph.breadth_first_from("a"));
    assert_eq!(order, ["a", "b", "c"]);
}

#[test]
fn test_levels_before_deeper_nodes() {
    // Chain a-b-c-d-e plus shortcut a-e: e is one hop from a.
    let graph = GraphBuilder::new()
        .edge("a", "b")
        .edge("b", "c")
        .edge("c", "d")
        .edge("d", "e")
        .edge("a", "e")
        .build();
    assert_eq!(
        values(graph.breadth_first_from("a")),
        ["a", "b", "e", "c", "d"]
    );
}

#[test]
fn test_lazy_early_termination() {
    let mut graph = Graph::undirected();
    for i in 0..1000 {
        graph.add_edge("hub", &format!("leaf{}", i));
    }

    let mut bfs = graph.breadth_first_from("hub");
    let first: Vec<_> = bfs.by_ref().take(3).map(Node::value).collect();
    assert_eq!(first, ["hub", "leaf0", "leaf1"]);
    assert_eq!(bfs.visited_count(), 3);
    // The hub's leaves were queued, the rest are untouched.
    assert!(bfs.pending() >= 998);
}

#[test]
fn test_exhausted_traversal_stays_exhausted() {
    let graph = diamond();
    let mut bfs = graph.breadth_first_from("a");
    assert_eq!(bfs.by_ref().count(), 4);
    assert!(bfs.next().is_none());
    assert!(bfs.next().is_none());
    assert_eq!(bfs.pending(), 0);
}

#[test]
fn test_second_traversal_is_fresh() {
    let graph = diamond();
    let a = graph.node_exists("a");

    let mut first = graph.breadth_first(a);
    first.next();
    first.next();

    let second = values(graph.breadth_first(a));
    assert_eq!(second, ["a", "c", "b", "d"]);
    assert_eq!(values(first), ["b", "d"]);
}

#[test]
fn test_traversal_after_edge_removal() {
    let mut graph = diamond();
    graph.remove_edge("c", "d");
    assert_eq!(values(graph.breadth_first_from("a")), ["a", "c", "b"]);
    assert_eq!(values(graph.breadth_first_from("d")), ["d"]);
}

#[test]
fn test_yielded_nodes_expose_adjacency() {
    let graph = diamond();
    let root = graph.breadth_first_from("a").next().unwrap();
    let adjacent: Vec<&str> = root
        .adjacents()
        .iter()
        .map(|&id| graph.node(id).unwrap().value())
        .collect();
    assert_eq!(adjacent, ["c", "b"]);
}

#[test]
fn test_foreign_root_yields_nothing() {
    let mut big = Graph::undirected();
    for value in ["a", "b", "c"] {
        big.add_node(value);
    }
    let foreign = big.node_exists("c");

    let mut small = Graph::undirected();
    small.add_edge("x", "y");

    let mut bfs = small.breadth_first(foreign);
    assert!(bfs.next().is_none());
    assert_eq!(bfs.visited_count(), 0);
    assert_eq!(bfs.pending(), 0);
}

#[test]
fn test_visited_count_tracks_yielded_nodes() {
    let graph = diamond();
    let mut bfs = graph.breadth_first_from("a");
    assert_eq!(bfs.visited_count(), 0);
    bfs.next();
    assert_eq!(bfs.visited_count(), 1);
    assert_eq!(bfs.by_ref().count(), 3);
    assert_eq!(bfs.visited_count(), 4);
}

#[test]
fn test_clone_continues_from_same_point() {
    let graph = diamond();
    let mut bfs = graph.breadth_first_from("a");
    bfs.next();
    bfs.next();

    let fork = bfs.clone();
    assert_eq!(values(fork), ["b", "d"]);
    assert_eq!(values(bfs), ["b", "d"]);
}
