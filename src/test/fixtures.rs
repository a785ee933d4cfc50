use crate::{algorithms::AdjacencyView, Graph};

/// Path `0 - 1 - ... - (n-1)`.
pub fn path_graph(n: u32) -> Graph<u32> {
    let mut graph = Graph::undirected();
    for i in 0..n {
        graph.add_node(i);
    }
    for i in 1..n {
        graph.add_edge(i - 1, i).unwrap();
    }
    graph
}

/// Cycle on `n` nodes; `n < 3` degrades to a path.
pub fn cycle_graph(n: u32) -> Graph<u32> {
    let mut graph = path_graph(n);
    if n >= 3 {
        graph.add_edge(n - 1, 0).unwrap();
    }
    graph
}

/// Complete graph K_n.
pub fn complete_graph(n: u32) -> Graph<u32> {
    let mut graph = Graph::undirected();
    for i in 0..n {
        graph.add_node(i);
        for j in 0..i {
            graph.add_edge(j, i).unwrap();
        }
    }
    graph
}

/// Complete bipartite graph with left side `0..a` and right side `a..a+b`.
pub fn complete_bipartite_graph(a: u32, b: u32) -> Graph<u32> {
    let mut graph = Graph::undirected();
    for left in 0..a {
        for right in a..a + b {
            graph.add_edge(left, right).unwrap();
        }
    }
    graph
}

/// Edges `a-b, a-c, b-c, b-d, c-d, d-e`: a 2-core on `a..=d` with pendant `e`.
pub fn kcore_scenario_view() -> AdjacencyView<&'static str> {
    [
        ("a", "b"),
        ("a", "c"),
        ("b", "c"),
        ("b", "d"),
        ("c", "d"),
        ("d", "e"),
    ]
    .into_iter()
    .collect()
}
