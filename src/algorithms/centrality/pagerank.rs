//! PageRank by power iteration.
//!
//! PageRank assigns an importance score to each node of a directed graph based on its link
//! structure. Scores always sum to 1.
//!
//! # Algorithm
//!
//! 1. Initialize every node with rank 1/N (or caller-supplied ranks, re-normalized)
//! 2. For each iteration:
//!    - Seed each node with the teleport term `(1-d) · t(v)`
//!    - Spread the rank held by dangling nodes over all nodes according to `t`
//!    - Each node passes `d · PR(u) · w(u,v) / W(u)` along each outgoing edge
//!    - Stop once the largest per-node change drops below the tolerance
//! 3. Stop after `max_iterations` regardless; running out is reported, not an error
//!
//! Here `t` is the uniform vector 1/N or the normalized personalization vector, `w(u,v)` the
//! edge weight (1 when unweighted) and `W(u)` the total outgoing weight of `u`. A node with
//! no outgoing edges, or with outgoing weight summing to zero, is dangling.

use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    algorithms::centrality::rank_descending,
    graph::{Graph, NodeId, NodeKey},
    Error, Result,
};

/// Configuration for PageRank.
#[derive(Debug, Clone)]
pub struct PageRankConfig<K> {
    /// Damping factor (probability of following a link vs random jump).
    /// Default: 0.85
    pub damping_factor: f64,

    /// Maximum number of iterations before stopping.
    /// Default: 100
    pub max_iterations: usize,

    /// Convergence tolerance. Iteration stops when the max rank change < tolerance.
    /// Default: 1e-6
    pub tolerance: f64,

    /// Teleport distribution. Normalized to sum 1; nodes not listed get 0.
    /// Default: None (uniform)
    pub personalization: Option<HashMap<K, f64>>,

    /// Starting ranks. Normalized to sum 1; nodes not listed start at 0.
    /// Default: None (uniform)
    pub initial_ranks: Option<HashMap<K, f64>>,

    /// Whether edge weights scale the rank passed along each edge.
    /// Default: true
    pub weighted: bool,
}

impl<K> Default for PageRankConfig<K> {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
            personalization: None,
            initial_ranks: None,
            weighted: true,
        }
    }
}

impl<K> PageRankConfig<K> {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    ///
    /// The damping factor represents the probability that a random walker
    /// follows a link instead of jumping to a random node. Must lie in `[0, 1]`.
    #[must_use]
    pub fn with_damping_factor(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    /// Set the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the personalization (teleport) vector.
    #[must_use]
    pub fn with_personalization(mut self, personalization: HashMap<K, f64>) -> Self {
        self.personalization = Some(personalization);
        self
    }

    /// Set the starting ranks.
    #[must_use]
    pub fn with_initial_ranks(mut self, initial_ranks: HashMap<K, f64>) -> Self {
        self.initial_ranks = Some(initial_ranks);
        self
    }

    /// Set whether edge weights are used.
    #[must_use]
    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }
}

/// Result of a PageRank computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PageRankResult<K> {
    /// PageRank score of each node.
    pub ranks: BTreeMap<K, f64>,

    /// Number of iterations performed.
    pub iterations: usize,

    /// Whether the ranks converged within tolerance.
    pub converged: bool,

    /// Max per-node change in the last iteration.
    pub final_delta: f64,
}

impl<K: NodeKey> PageRankResult<K> {
    /// Get the PageRank score of a specific node.
    #[must_use]
    pub fn score(&self, node: &K) -> Option<f64> {
        self.ranks.get(node).copied()
    }

    /// Get nodes sorted by score (descending), ties by ascending key.
    #[must_use]
    pub fn sorted(&self) -> Vec<(K, f64)> {
        rank_descending(&self.ranks)
    }

    /// Get the top N nodes by score.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<(K, f64)> {
        top_pagerank_nodes(&self.ranks, n)
    }
}

/// Computes PageRank for every node of a directed graph.
///
/// # Arguments
///
/// * `graph` - A directed graph
/// * `config` - Iteration parameters, optional personalization and initial ranks
///
/// # Errors
///
/// - [`Error::RequiresDirected`] if the graph is undirected
/// - [`Error::InvalidParameter`] if the damping factor lies outside `[0, 1]`, the tolerance
///   is negative or NaN, a weighted graph has a negative or non-finite edge weight, or the
///   personalization vector has a negative or non-finite entry or a non-positive sum
/// - [`Error::NodeNotFound`] if the personalization or initial ranks name an absent node
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, GraphConfig};
/// use graphscope::algorithms::{pagerank, PageRankConfig};
///
/// let mut graph: Graph<u32> = Graph::new(GraphConfig::directed());
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 0)?;
///
/// let result = pagerank(&graph, &PageRankConfig::new())?;
/// assert!(result.converged);
/// assert!((result.ranks[&0] - 0.5).abs() < 1e-6);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn pagerank<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    config: &PageRankConfig<K>,
) -> Result<PageRankResult<K>> {
    if !graph.is_directed() {
        return Err(Error::RequiresDirected);
    }
    let d = config.damping_factor;
    if !(0.0..=1.0).contains(&d) {
        return Err(invalid_parameter!("damping factor must lie in [0, 1], got {}", d));
    }
    if config.tolerance.is_nan() || config.tolerance < 0.0 {
        return Err(invalid_parameter!(
            "tolerance must be >= 0, got {}",
            config.tolerance
        ));
    }

    let nodes: Vec<NodeId> = graph.node_ids().collect();
    let n = nodes.len();
    if n == 0 {
        return Ok(PageRankResult {
            ranks: BTreeMap::new(),
            iterations: 0,
            converged: true,
            final_delta: 0.0,
        });
    }

    let mut dense: Vec<usize> = vec![usize::MAX; graph.node_bound()];
    for (i, id) in nodes.iter().enumerate() {
        dense[id.index()] = i;
    }

    // Outgoing edges per dense index, with total outgoing weight
    let mut out_edges: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
    let mut out_weight: Vec<f64> = vec![0.0; n];
    for (i, &id) in nodes.iter().enumerate() {
        for (target, weight) in graph.out_edges(id) {
            let weight = if config.weighted { weight } else { 1.0 };
            if !weight.is_finite() || weight < 0.0 {
                return Err(invalid_parameter!(
                    "edge weight must be finite and >= 0, got {} leaving {:?}",
                    weight,
                    graph.key(id)
                ));
            }
            out_edges[i].push((dense[target.index()], weight));
            out_weight[i] += weight;
        }
    }
    let dangling: Vec<bool> = out_weight.iter().map(|&w| w <= 0.0).collect();

    let teleport = match &config.personalization {
        Some(map) => personalization_vector(graph, map, &dense, n)?,
        None => vec![1.0 / n as f64; n],
    };
    let mut ranks = match &config.initial_ranks {
        Some(map) => initial_vector(graph, map, &dense, n)?,
        None => vec![1.0 / n as f64; n],
    };
    let mut next: Vec<f64> = vec![0.0; n];

    let mut iterations = 0;
    let mut converged = false;
    let mut final_delta = f64::INFINITY;

    while iterations < config.max_iterations {
        iterations += 1;

        let dangling_sum: f64 = (0..n).filter(|&i| dangling[i]).map(|i| ranks[i]).sum();
        for (slot, &t) in next.iter_mut().zip(&teleport) {
            *slot = (1.0 - d) * t + d * dangling_sum * t;
        }

        for i in 0..n {
            if dangling[i] {
                continue;
            }
            let share = d * ranks[i] / out_weight[i];
            for &(j, weight) in &out_edges[i] {
                next[j] += share * weight;
            }
        }

        let max_delta = max_change(&ranks, &next);
        final_delta = max_delta;
        std::mem::swap(&mut ranks, &mut next);

        if max_delta < config.tolerance {
            converged = true;
            break;
        }
    }

    #[cfg(feature = "logging")]
    {
        if converged {
            log::debug!(
                "PageRank converged after {} iterations (delta {:e}, {} nodes)",
                iterations,
                final_delta,
                n
            );
        } else {
            log::warn!(
                "PageRank did not converge within {} iterations (delta {:e}, tolerance {:e})",
                config.max_iterations,
                final_delta,
                config.tolerance
            );
        }
    }

    let ranks = nodes
        .iter()
        .zip(ranks)
        .filter_map(|(&id, rank)| graph.key(id).map(|key| (key.clone(), rank)))
        .collect();

    Ok(PageRankResult {
        ranks,
        iterations,
        converged,
        final_delta,
    })
}

/// Computes PageRank with teleportation restricted to a seed set.
///
/// Each seed receives an equal share of the teleport mass; the remaining parameters come
/// from `config`, whose own personalization is replaced.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] if `seeds` is empty
/// - [`Error::NodeNotFound`] if a seed is not in the graph
/// - Every error of [`pagerank`]
pub fn personalized_pagerank<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    seeds: &[K],
    config: &PageRankConfig<K>,
) -> Result<PageRankResult<K>> {
    if seeds.is_empty() {
        return Err(invalid_parameter!("personalized PageRank needs at least one seed"));
    }

    let mut personalization = HashMap::with_capacity(seeds.len());
    for seed in seeds {
        if !graph.has_node(seed) {
            return Err(Error::node_not_found(seed));
        }
        personalization.insert(seed.clone(), 1.0);
    }

    pagerank(graph, &config.clone().with_personalization(personalization))
}

/// Returns the `n` highest-ranked nodes, descending by rank.
///
/// Equal ranks are ordered by ascending key, so the output is deterministic.
#[must_use]
pub fn top_pagerank_nodes<K: NodeKey>(ranks: &BTreeMap<K, f64>, n: usize) -> Vec<(K, f64)> {
    let mut sorted = rank_descending(ranks);
    sorted.truncate(n);
    sorted
}

/// Largest per-node change between two rank vectors. A NaN change yields NaN.
fn max_change(old: &[f64], new: &[f64]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(o, n)| (n - o).abs())
        .fold(0.0, |acc, delta| {
            // f64::max ignores NaN
            if acc.is_nan() || delta.is_nan() {
                f64::NAN
            } else {
                acc.max(delta)
            }
        })
}

fn personalization_vector<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    map: &HashMap<K, f64>,
    dense: &[usize],
    n: usize,
) -> Result<Vec<f64>> {
    let mut vector = vec![0.0; n];
    for (key, &value) in map {
        let id = graph
            .node_id(key)
            .ok_or_else(|| Error::node_not_found(key))?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid_parameter!(
                "personalization weight for {:?} must be finite and >= 0, got {}",
                key,
                value
            ));
        }
        vector[dense[id.index()]] = value;
    }

    let total: f64 = vector.iter().sum();
    if total <= 0.0 {
        return Err(invalid_parameter!(
            "personalization vector must have a positive sum, got {}",
            total
        ));
    }
    for value in &mut vector {
        *value /= total;
    }
    Ok(vector)
}

fn initial_vector<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    map: &HashMap<K, f64>,
    dense: &[usize],
    n: usize,
) -> Result<Vec<f64>> {
    let mut vector = vec![0.0; n];
    for (key, &value) in map {
        let id = graph
            .node_id(key)
            .ok_or_else(|| Error::node_not_found(key))?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid_parameter!(
                "initial rank for {:?} must be finite and >= 0, got {}",
                key,
                value
            ));
        }
        vector[dense[id.index()]] = value;
    }

    let total: f64 = vector.iter().sum();
    if total <= 0.0 {
        return Ok(vec![1.0 / n as f64; n]);
    }
    for value in &mut vector {
        *value /= total;
    }
    Ok(vector)
}
