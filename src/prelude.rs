//! # graphscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits and
//! functions from the graphscope library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphscope operations
pub use crate::Error;

/// The result type used throughout graphscope
pub use crate::Result;

// ================================================================================================
// Graph
// ================================================================================================

/// Graph storage, configuration and keys
pub use crate::graph::{
    EdgeId, EdgeRecord, EdgeRef, Graph, GraphConfig, GraphFlags, NodeId, NodeKey, NodeRecord,
    NodeRef,
};

/// Index-level graph traits
pub use crate::graph::{GraphBase, Predecessors, Successors};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Traversal
pub use crate::algorithms::{
    bfs, breadth_first_search, connected_components, is_bipartite, shortest_path_bfs,
    single_source_shortest_path_bfs, BfsOptions, BfsResult, ShortestPath,
};

/// Centrality
pub use crate::algorithms::{
    closeness_centrality, pagerank, personalized_pagerank, ClosenessConfig, ClosenessVariant,
    PageRankConfig, PageRankResult,
};

/// Matching
pub use crate::algorithms::{
    bipartite_partition, maximum_bipartite_matching, BipartiteSides, Matching,
};

/// Cohesion
pub use crate::algorithms::{core_decomposition, degeneracy_ordering, k_truss, AdjacencyView};

/// Link prediction
pub use crate::algorithms::{
    common_neighbors_prediction, common_neighbors_score, LinkPredictionConfig,
};
