//! Closeness and harmonic centrality.
//!
//! For each source node the shortest-path distances to every other node are computed, either
//! by hop count (BFS) or by summed edge weight (Dijkstra), and reduced to one score.
//!
//! # Formula
//!
//! Standard closeness, with `r` the number of nodes reachable from `v` (excluding `v`):
//!
//! ```text
//! C(v) = 1 / Σ d(v, u)                      over reachable u ≠ v
//! C(v) = (1 / Σ d(v, u)) · r / (n - 1)      when normalized (Wasserman-Faust)
//! ```
//!
//! Harmonic centrality:
//!
//! ```text
//! H(v) = Σ 1 / d(v, u)                      over reachable u with d(v, u) > 0
//! H(v) = H(v) / (n - 1)                     when normalized
//! ```
//!
//! Unreachable nodes contribute nothing to either sum, which makes the harmonic variant the
//! better fit for disconnected graphs.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BinaryHeap},
};

#[cfg(feature = "serde")]
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::{
    algorithms::{centrality::rank_descending, traversal::hop_distances},
    graph::{Graph, NodeId, NodeKey},
    Error, Result,
};

/// Which closeness score to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ClosenessVariant {
    /// Reciprocal of the summed distance to reachable nodes
    #[default]
    Standard,
    /// Sum of reciprocal distances
    Harmonic,
}

/// Configuration for closeness centrality.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosenessConfig {
    /// Score to compute.
    /// Default: Standard
    pub variant: ClosenessVariant,

    /// Whether to normalize scores by graph size.
    /// Default: true
    pub normalized: bool,

    /// Distances strictly greater than this are treated as unreachable.
    /// Default: None
    pub cutoff: Option<f64>,

    /// Use edge weights (Dijkstra) instead of hop counts (BFS).
    /// Default: false
    pub weighted: bool,
}

impl Default for ClosenessConfig {
    fn default() -> Self {
        Self {
            variant: ClosenessVariant::Standard,
            normalized: true,
            cutoff: None,
            weighted: false,
        }
    }
}

impl ClosenessConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score variant.
    #[must_use]
    pub fn with_variant(mut self, variant: ClosenessVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set whether to normalize scores.
    #[must_use]
    pub fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Set the distance cutoff.
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    /// Set whether edge weights are used as distances.
    #[must_use]
    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }
}

/// Closeness scores for every node of a graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ClosenessResult<K> {
    /// Score of each node.
    pub scores: BTreeMap<K, f64>,
}

impl<K: NodeKey> ClosenessResult<K> {
    /// Get the score of a specific node.
    #[must_use]
    pub fn score(&self, node: &K) -> Option<f64> {
        self.scores.get(node).copied()
    }

    /// Get nodes sorted by score (descending), ties by ascending key.
    #[must_use]
    pub fn sorted(&self) -> Vec<(K, f64)> {
        rank_descending(&self.scores)
    }

    /// Get the top N nodes by score.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<(K, f64)> {
        let mut sorted = self.sorted();
        sorted.truncate(n);
        sorted
    }
}

/// Computes closeness centrality for every node.
///
/// Directed graphs use outgoing distances. A node that reaches nothing, and every node of a
/// single-node graph, scores 0.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the cutoff is negative or NaN, or if `weighted` is
/// set and an edge has a negative or non-finite weight.
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, GraphConfig};
/// use graphscope::algorithms::{closeness_centrality, ClosenessConfig, ClosenessVariant};
///
/// let mut graph: Graph<&str> = Graph::new(GraphConfig::undirected());
/// graph.add_edge("hub", "a")?;
/// graph.add_edge("hub", "b")?;
/// graph.add_edge("hub", "c")?;
///
/// let result = closeness_centrality(&graph, &ClosenessConfig::new())?;
/// assert_eq!(result.top_n(1)[0].0, "hub");
/// assert!((result.score(&"hub").unwrap() - 1.0 / 3.0).abs() < 1e-12);
///
/// let harmonic = ClosenessConfig::new().with_variant(ClosenessVariant::Harmonic);
/// let result = closeness_centrality(&graph, &harmonic)?;
/// assert!((result.score(&"hub").unwrap() - 1.0).abs() < 1e-12);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn closeness_centrality<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    config: &ClosenessConfig,
) -> Result<ClosenessResult<K>> {
    validate(graph, config)?;

    let n = graph.node_count();
    let mut scores = BTreeMap::new();
    for id in graph.node_ids() {
        if let Some(key) = graph.key(id) {
            scores.insert(key.clone(), closeness_from(graph, id, n, config));
        }
    }

    #[cfg(feature = "logging")]
    log::debug!(
        "computed {} closeness for {} nodes (normalized: {}, weighted: {})",
        config.variant,
        scores.len(),
        config.normalized,
        config.weighted
    );

    Ok(ClosenessResult { scores })
}

/// Computes closeness centrality for a single node.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `node` is not in the graph, and the same parameter
/// errors as [`closeness_centrality`].
pub fn node_closeness_centrality<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    node: &K,
    config: &ClosenessConfig,
) -> Result<f64> {
    let id = graph
        .node_id(node)
        .ok_or_else(|| Error::node_not_found(node))?;
    validate(graph, config)?;
    Ok(closeness_from(graph, id, graph.node_count(), config))
}

fn validate<K: NodeKey, N, E>(graph: &Graph<K, N, E>, config: &ClosenessConfig) -> Result<()> {
    if let Some(cutoff) = config.cutoff {
        if cutoff.is_nan() || cutoff < 0.0 {
            return Err(invalid_parameter!("closeness cutoff must be >= 0, got {}", cutoff));
        }
    }

    if config.weighted {
        if let Some(edge) = graph
            .edges()
            .find(|e| !e.weight().is_finite() || e.weight() < 0.0)
        {
            return Err(invalid_parameter!(
                "edge weight must be finite and >= 0, got {} on {:?} -> {:?}",
                edge.weight(),
                edge.source(),
                edge.target()
            ));
        }
    }

    Ok(())
}

fn closeness_from<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    source: NodeId,
    n: usize,
    config: &ClosenessConfig,
) -> f64 {
    if n <= 1 {
        return 0.0;
    }

    let distances = if config.weighted {
        weighted_distances(graph, source, config.cutoff)
    } else {
        hop_distances(graph, source, config.cutoff)
    };

    let reached = distances
        .iter()
        .enumerate()
        .filter(|&(index, _)| index != source.index())
        .filter_map(|(_, d)| *d);

    let others = (n - 1) as f64;
    match config.variant {
        ClosenessVariant::Standard => {
            let (reachable, total) = reached.fold((0usize, 0.0f64), |(r, t), d| (r + 1, t + d));
            if reachable == 0 || total <= 0.0 {
                return 0.0;
            }
            let score = 1.0 / total;
            if config.normalized {
                score * reachable as f64 / others
            } else {
                score
            }
        }
        ClosenessVariant::Harmonic => {
            let score: f64 = reached.filter(|&d| d > 0.0).map(|d| 1.0 / d).sum();
            if config.normalized {
                score / others
            } else {
                score
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct DijkstraEntry {
    node: NodeId,
    distance: f64,
}

impl PartialEq for DijkstraEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.node == other.node
    }
}

impl Eq for DijkstraEntry {}

impl PartialOrd for DijkstraEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that BinaryHeap pops the smallest distance first
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Weighted distances from `source` along outgoing edges. Weights must be non-negative.
fn weighted_distances<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    source: NodeId,
    cutoff: Option<f64>,
) -> Vec<Option<f64>> {
    let mut dist: Vec<Option<f64>> = vec![None; graph.node_bound()];
    let mut settled = vec![false; graph.node_bound()];
    let mut heap = BinaryHeap::new();

    dist[source.index()] = Some(0.0);
    heap.push(DijkstraEntry {
        node: source,
        distance: 0.0,
    });

    while let Some(DijkstraEntry { node, distance }) = heap.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        for (next, weight) in graph.out_edges(node) {
            let candidate = distance + weight;
            if cutoff.is_some_and(|c| candidate > c) {
                continue;
            }
            if dist[next.index()].map_or(true, |known| candidate < known) {
                dist[next.index()] = Some(candidate);
                heap.push(DijkstraEntry {
                    node: next,
                    distance: candidate,
                });
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::{
        graph::GraphConfig,
        test::{complete_graph, path_graph},
    };

    const EPS: f64 = 1e-12;

    #[test]
    fn test_variant_strum() {
        assert_eq!(ClosenessVariant::Harmonic.to_string(), "harmonic");
        assert_eq!(
            ClosenessVariant::from_str("standard").unwrap(),
            ClosenessVariant::Standard
        );
        assert_eq!(ClosenessVariant::iter().count(), 2);
    }

    #[test]
    fn test_path_graph_standard() {
        // 0-1-2: the middle node sees distances 1+1, the ends 1+2
        let graph = path_graph(3);
        let raw = ClosenessConfig::new().with_normalized(false);
        let result = closeness_centrality(&graph, &raw).unwrap();

        assert!((result.score(&1).unwrap() - 0.5).abs() < EPS);
        assert!((result.score(&0).unwrap() - 1.0 / 3.0).abs() < EPS);

        let normalized = closeness_centrality(&graph, &ClosenessConfig::new()).unwrap();
        assert!((normalized.score(&1).unwrap() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_complete_graph_harmonic() {
        let graph = complete_graph(5);
        let config = ClosenessConfig::new().with_variant(ClosenessVariant::Harmonic);
        let result = closeness_centrality(&graph, &config).unwrap();

        for (_, score) in result.sorted() {
            assert!((score - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_disconnected_normalization() {
        // Two components: 0-1 and 2. Node 0 reaches one of two other nodes.
        let mut graph = path_graph(2);
        graph.add_node(2);

        let result = closeness_centrality(&graph, &ClosenessConfig::new()).unwrap();
        assert!((result.score(&0).unwrap() - 0.5).abs() < EPS);
        assert_eq!(result.score(&2), Some(0.0));
    }

    #[test]
    fn test_single_node_scores_zero() {
        let mut graph: Graph<u32> = Graph::undirected();
        graph.add_node(7);
        assert_eq!(
            node_closeness_centrality(&graph, &7, &ClosenessConfig::new()).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_cutoff_limits_reach() {
        let graph = path_graph(4);
        let config = ClosenessConfig::new()
            .with_normalized(false)
            .with_cutoff(1.0);
        let score = node_closeness_centrality(&graph, &0, &config).unwrap();
        assert!((score - 1.0).abs() < EPS);
    }

    #[test]
    fn test_directed_uses_out_distances() {
        let mut graph: Graph<&str> = Graph::new(GraphConfig::directed());
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("b", "c").unwrap();

        let result = closeness_centrality(&graph, &ClosenessConfig::new()).unwrap();
        assert_eq!(result.score(&"c"), Some(0.0));
        assert!(result.score(&"a").unwrap() > 0.0);
    }

    #[test]
    fn test_weighted_prefers_light_path() {
        let mut graph: Graph<&str> = Graph::new(GraphConfig::undirected());
        graph.add_weighted_edge("a", "b", 10.0).unwrap();
        graph.add_weighted_edge("a", "c", 1.0).unwrap();
        graph.add_weighted_edge("c", "b", 1.0).unwrap();

        let config = ClosenessConfig::new()
            .with_weighted(true)
            .with_normalized(false);
        let score = node_closeness_centrality(&graph, &"a", &config).unwrap();
        // d(a, c) = 1, d(a, b) = 2
        assert!((score - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut graph: Graph<&str> = Graph::new(GraphConfig::undirected());
        graph.add_weighted_edge("a", "b", -1.0).unwrap();

        let config = ClosenessConfig::new().with_weighted(true);
        assert!(matches!(
            closeness_centrality(&graph, &config),
            Err(Error::InvalidParameter { .. })
        ));
        // Hop distances ignore weights
        assert!(closeness_centrality(&graph, &ClosenessConfig::new()).is_ok());
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        for bad in [f64::NAN, f64::INFINITY] {
            let mut graph: Graph<u32> = Graph::new(GraphConfig::undirected());
            graph.add_weighted_edge(0, 1, bad).unwrap();
            graph.add_edge(1, 2).unwrap();

            let config = ClosenessConfig::new().with_weighted(true);
            assert!(matches!(
                closeness_centrality(&graph, &config),
                Err(Error::InvalidParameter { .. })
            ));
            assert!(matches!(
                node_closeness_centrality(&graph, &0, &config),
                Err(Error::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_missing_node() {
        let graph = path_graph(2);
        assert!(matches!(
            node_closeness_centrality(&graph, &5, &ClosenessConfig::new()),
            Err(Error::NodeNotFound(_))
        ));
    }
}
