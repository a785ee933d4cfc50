//! End-to-end scenarios across the public API.
//!
//! Each test builds a small graph through the ingestion surface and checks a known answer
//! from one of the analytics families.

use std::collections::BTreeSet;

use graphscope::{
    algorithms::{
        evaluate_common_neighbors, get_k_core, greedy_bipartite_matching, top_pagerank_nodes,
    },
    graph::{EdgeRecord, NodeRecord},
    prelude::*,
};

fn kcore_graph() -> Result<Graph<&'static str>> {
    let mut graph = Graph::undirected();
    for (u, v) in [("a", "b"), ("a", "c"), ("b", "c"), ("b", "d"), ("c", "d"), ("d", "e")] {
        graph.add_edge(u, v)?;
    }
    Ok(graph)
}

#[test]
fn test_kcore_scenario() -> Result<()> {
    let graph = kcore_graph()?;
    let cores = core_decomposition(&AdjacencyView::from(&graph));

    assert_eq!(cores.coreness[&"e"], 1);
    for node in ["a", "b", "c", "d"] {
        assert_eq!(cores.coreness[&node], 2);
    }
    assert_eq!(cores.max_core, 2);
    assert_eq!(
        get_k_core(&AdjacencyView::from(&graph), 2),
        BTreeSet::from(["a", "b", "c", "d"])
    );
    Ok(())
}

#[test]
fn test_complete_graph_coreness() -> Result<()> {
    let n = 6u32;
    let mut graph: Graph<u32> = Graph::undirected();
    for i in 0..n {
        for j in i + 1..n {
            graph.add_edge(i, j)?;
        }
    }
    let cores = core_decomposition(&AdjacencyView::from(&graph));

    assert_eq!(cores.max_core, 5);
    assert!(cores.coreness.values().all(|&c| c == 5));
    Ok(())
}

#[test]
fn test_bfs_scenario() -> Result<()> {
    let mut graph: Graph<u32> = Graph::undirected();
    graph.add_edge(0, 1)?;
    graph.add_edge(1, 2)?;
    graph.add_edge(2, 3)?;

    let result = breadth_first_search(&graph, &0, &BfsOptions::new())?;
    assert_eq!(result.order, vec![0, 1, 2, 3]);

    let path = shortest_path_bfs(&graph, &0, &3)?;
    assert_eq!(path.distance, Some(3));
    assert_eq!(path.path, vec![0, 1, 2, 3]);
    Ok(())
}

#[test]
fn test_pagerank_two_cycle() -> Result<()> {
    let mut graph: Graph<u32> = Graph::directed();
    graph.add_edge(0, 1)?;
    graph.add_edge(1, 0)?;

    let config = PageRankConfig::new()
        .with_damping_factor(0.85)
        .with_tolerance(1e-6);
    let result = pagerank(&graph, &config)?;

    assert!(result.converged);
    assert!((result.ranks[&0] - 0.5).abs() < 1e-6);
    assert!((result.ranks[&1] - 0.5).abs() < 1e-6);

    // Equal ranks are ordered by key.
    let top = top_pagerank_nodes(&result.ranks, 2);
    assert_eq!(top[0].0, 0);
    Ok(())
}

#[test]
fn test_pagerank_idempotent() -> Result<()> {
    let mut graph: Graph<&str> = Graph::directed();
    for (u, v) in [("a", "b"), ("b", "c"), ("c", "a"), ("a", "c"), ("d", "a")] {
        graph.add_edge(u, v)?;
    }
    let config = PageRankConfig::default();

    let first = pagerank(&graph, &config)?;
    let second = pagerank(&graph, &config)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_matching_scenario() -> Result<()> {
    let mut graph: Graph<u32> = Graph::undirected();
    graph.add_edge(0, 2)?;
    graph.add_edge(0, 3)?;
    graph.add_edge(1, 2)?;

    let sides = BipartiteSides::inferred()
        .with_left(vec![0, 1])
        .with_right(vec![2, 3]);
    let matching = maximum_bipartite_matching(&graph, &sides)?;
    assert_eq!(matching.size, 2);
    assert_eq!(matching.partner(&0), Some(&3));
    assert_eq!(matching.partner(&1), Some(&2));

    // Without augmentation node 1 finds node 2 taken.
    let greedy = greedy_bipartite_matching(&graph, &sides)?;
    assert_eq!(greedy.size, 1);
    Ok(())
}

#[test]
fn test_odd_cycle_rejected_by_matching() -> Result<()> {
    let mut graph: Graph<u32> = Graph::undirected();
    graph.add_edge(0, 1)?;
    graph.add_edge(1, 2)?;
    graph.add_edge(2, 0)?;

    assert!(!is_bipartite(&graph)?);
    assert!(matches!(
        maximum_bipartite_matching(&graph, &BipartiteSides::inferred()),
        Err(Error::NotBipartite)
    ));
    Ok(())
}

#[test]
fn test_records_to_link_prediction() -> Result<()> {
    let nodes = vec![NodeRecord::new("hub")];
    let edges = vec![
        EdgeRecord::new("alice", "hub"),
        EdgeRecord::new("bob", "hub"),
        EdgeRecord::new("alice", "carol"),
        EdgeRecord::new("bob", "carol"),
        EdgeRecord::weighted("carol", "dave", 2.5),
    ];
    let graph: Graph<&str> = Graph::from_records(GraphConfig::undirected(), nodes, edges)?;
    assert_eq!(graph.node_count(), 5);

    assert_eq!(common_neighbors_score(&graph, &"alice", &"bob", false), 2);

    let predictions = common_neighbors_prediction(&graph, &LinkPredictionConfig::default());
    assert_eq!(
        (predictions[0].source, predictions[0].target, predictions[0].score),
        ("alice", "bob", 2)
    );
    assert_eq!(
        (predictions[1].source, predictions[1].target),
        ("bob", "alice")
    );

    let evaluation = evaluate_common_neighbors(&graph, &[("alice", "bob")], &[("hub", "dave")]);
    assert!((evaluation.auc - 1.0).abs() < 1e-12);
    assert_eq!(evaluation.threshold, 2);
    Ok(())
}

#[test]
fn test_missing_nodes_are_errors() {
    let graph: Graph<u32> = Graph::undirected();
    assert!(matches!(
        shortest_path_bfs(&graph, &0, &1),
        Err(Error::NodeNotFound(_))
    ));
    assert!(matches!(
        personalized_pagerank(&Graph::<u32>::directed(), &[7], &PageRankConfig::new()),
        Err(Error::NodeNotFound(_))
    ));
}

#[test]
fn test_truss_inside_core() -> Result<()> {
    let view = AdjacencyView::from(&kcore_graph()?);
    let truss = k_truss(&view, 3)?;

    // Triangles a-b-c and b-c-d survive, the pendant d-e does not.
    assert_eq!(truss.len(), 4);
    assert!(!truss.contains(&"e"));
    let core = get_k_core(&view, 2);
    assert!(truss.nodes().all(|n| core.contains(n)));
    Ok(())
}
