#![no_main]

use graphscope::{
    algorithms::{core_decomposition, degeneracy, k_truss, AdjacencyView},
    Graph, GraphConfig,
};
use libfuzzer_sys::fuzz_target;

// First byte picks the configuration, then each 3-byte chunk is `op, a, b`.
fuzz_target!(|data: &[u8]| {
    let Some((&flags, ops)) = data.split_first() else {
        return;
    };
    let config = GraphConfig::new()
        .with_directed(flags & 1 != 0)
        .with_self_loops(flags & 2 != 0)
        .with_parallel_edges(flags & 4 != 0);
    let mut graph: Graph<u8> = Graph::new(config);

    for chunk in ops.chunks_exact(3) {
        let (a, b) = (chunk[1] % 32, chunk[2] % 32);
        match chunk[0] % 5 {
            0 => {
                graph.add_node(a);
            }
            1 => {
                let _ = graph.add_edge(a, b);
            }
            2 => {
                let _ = graph.add_weighted_edge(a, b, f64::from(chunk[2]));
            }
            3 => {
                graph.remove_node(&a);
            }
            _ => {
                graph.remove_edge(&a, &b);
            }
        }
    }

    assert_eq!(graph.nodes().count(), graph.node_count());
    assert_eq!(graph.edges().count(), graph.unique_edge_count());
    if graph.is_directed() {
        let out: usize = graph.nodes().map(|n| graph.out_degree(n.key())).sum();
        let inc: usize = graph.nodes().map(|n| graph.in_degree(n.key())).sum();
        assert_eq!(out, graph.edge_count());
        assert_eq!(inc, graph.edge_count());
    } else {
        for edge in graph.edges() {
            assert!(graph.has_edge(edge.target(), edge.source()));
        }
    }

    let view = AdjacencyView::from(&graph);
    let cores = core_decomposition(&view);
    assert_eq!(cores.max_core, degeneracy(&view));
    if let Ok(truss) = k_truss(&view, 3) {
        assert!(truss.nodes().all(|n| cores.coreness[n] >= 2));
    }
});
