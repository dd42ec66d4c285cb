//! Build a small undirected graph, print its adjacency and a breadth-first walk.

use adjgraph::Graph;

fn main() {
    let mut graph = Graph::undirected();

    let (first, _) = graph.add_edge("a", "c");
    graph.add_edge("a", "b");
    graph.add_edge("c", "d");
    graph.add_edge("b", "c");

    println!("Graph nodes:");
    for (value, adjacents) in graph.adjacency_listing() {
        println!("  {} {:?}", value, adjacents);
    }

    println!("Breadth-first search:");
    let order: Vec<&str> = graph
        .breadth_first(Some(first))
        .map(|node| node.value())
        .collect();
    println!("  {}", order.join(" > "));
}
