//! Graph analytics over [`Graph`](crate::Graph) and [`AdjacencyView`].
//!
//! Every algorithm here is read-only with respect to its input and deterministic: results
//! are keyed by node in ordered maps, and ties are broken by node key.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`bfs`] - Lazy breadth-first iteration over node indices
//! - [`breadth_first_search`] - Visit order, levels and predecessor tree from a start node
//! - [`shortest_path_bfs`] - Unweighted shortest path between two nodes
//! - [`single_source_shortest_path_bfs`] - Unweighted shortest paths to every reachable node
//! - [`is_bipartite`] - Two-colouring test
//! - [`connected_components`] - Weakly connected components
//!
//! ## Centrality
//!
//! - [`closeness_centrality`] - Closeness or harmonic centrality of every node
//! - [`pagerank`] - PageRank by power iteration
//! - [`personalized_pagerank`] - PageRank teleporting to a seed set
//!
//! ## Matching
//!
//! - [`bipartite_partition`] - Split a bipartite graph into two sides
//! - [`maximum_bipartite_matching`] - Maximum matching by augmenting paths
//! - [`greedy_bipartite_matching`] - Single-pass baseline
//!
//! ## Cohesion
//!
//! - [`core_decomposition`] - Coreness of every node
//! - [`get_k_core`] / [`get_k_core_subgraph`] - Members and view of the k-core
//! - [`degeneracy_ordering`] / [`degeneracy`] - Peeling order and its width
//! - [`k_truss`] - Edges supported by at least `k - 2` triangles
//!
//! ## Link Prediction
//!
//! - [`common_neighbors_score`] - Shared-neighbour count of one pair
//! - [`common_neighbors_prediction`] - Ranked candidate links
//! - [`evaluate_common_neighbors`] - Best-F1 and AUC against labelled pairs
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Graph |
//! |-----------|-----------------|-------|
//! | BFS / shortest paths | O(V + E) | Any |
//! | Closeness | O(V · (V + E)) | Any |
//! | PageRank | O(k · (V + E)) | Directed |
//! | Maximum matching | O(V · E) | Bipartite |
//! | Core decomposition | O(V + E) | Any, direction ignored |
//! | Link prediction | O(V² · d) | Any |

mod centrality;
mod cohesion;
mod link_prediction;
mod matching;
mod traversal;

pub use centrality::{
    closeness_centrality, node_closeness_centrality, pagerank, personalized_pagerank,
    top_pagerank_nodes, ClosenessConfig, ClosenessResult, ClosenessVariant, PageRankConfig,
    PageRankResult,
};
pub use cohesion::{
    core_decomposition, degeneracy, degeneracy_ordering, get_k_core, get_k_core_subgraph,
    k_truss, to_undirected, AdjacencyView, CoreDecomposition,
};
pub use link_prediction::{
    common_neighbors_prediction, common_neighbors_score, evaluate_common_neighbors,
    LinkPrediction, LinkPredictionConfig, LinkPredictionEvaluation,
};
pub use matching::{
    bipartite_partition, greedy_bipartite_matching, maximum_bipartite_matching,
    BipartiteSides, Bipartition, Matching,
};
pub use traversal::{
    bfs, breadth_first_search, breadth_first_search_with, connected_components, is_bipartite,
    shortest_path_bfs, single_source_shortest_path_bfs, BfsIterator, BfsOptions, BfsResult,
    ShortestPath,
};
