//! Node centrality measures.
//!
//! - [`closeness_centrality`] - Closeness and harmonic centrality from BFS or Dijkstra
//!   distances
//! - [`pagerank`] - PageRank by power iteration, with personalization
//!
//! | Algorithm | Time Complexity | Graph |
//! |-----------|-----------------|-------|
//! | Closeness (hops) | O(V · (V + E)) | Any |
//! | Closeness (weighted) | O(V · E log V) | Any, non-negative weights |
//! | PageRank | O(k · (V + E)) for k iterations | Directed |

mod closeness;
mod pagerank;

use std::collections::BTreeMap;

pub use closeness::{
    closeness_centrality, node_closeness_centrality, ClosenessConfig, ClosenessResult,
    ClosenessVariant,
};
pub use pagerank::{
    pagerank, personalized_pagerank, top_pagerank_nodes, PageRankConfig, PageRankResult,
};

use crate::graph::NodeKey;

/// Scores sorted descending, equal scores by ascending key.
pub(crate) fn rank_descending<K: NodeKey>(scores: &BTreeMap<K, f64>) -> Vec<(K, f64)> {
    let mut pairs: Vec<(K, f64)> = scores.iter().map(|(k, &s)| (k.clone(), s)).collect();
    pairs.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs
}
