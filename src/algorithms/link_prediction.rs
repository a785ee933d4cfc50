//! Common-neighbours link prediction.
//!
//! Two nodes that share many neighbours are likely to become linked. The score of a pair is
//! the number of shared neighbours. [`common_neighbors_prediction`] ranks every candidate
//! pair and [`evaluate_common_neighbors`] measures how well those scores separate held-out
//! edges from known non-edges.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::graph::{Graph, NodeId, NodeKey};

/// Options for [`common_neighbors_prediction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPredictionConfig {
    /// Score ordered pairs as `|out(u) ∩ in(v)|`. Only meaningful on directed graphs; an
    /// undirected graph is always scored on plain neighbours.
    pub directed: bool,
    /// Skip pairs that are already connected.
    pub exclude_existing: bool,
    /// Keep only the best `k` predictions.
    pub top_k: Option<usize>,
    /// Report pairs with no shared neighbour.
    pub include_zero_scores: bool,
}

impl Default for LinkPredictionConfig {
    fn default() -> Self {
        Self {
            directed: false,
            exclude_existing: true,
            top_k: None,
            include_zero_scores: false,
        }
    }
}

impl LinkPredictionConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores ordered pairs.
    #[must_use]
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Sets whether connected pairs are skipped.
    #[must_use]
    pub fn with_exclude_existing(mut self, exclude: bool) -> Self {
        self.exclude_existing = exclude;
        self
    }

    /// Truncates the ranking to `k` entries.
    #[must_use]
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }

    /// Sets whether zero-score pairs are reported.
    #[must_use]
    pub fn with_zero_scores(mut self, include: bool) -> Self {
        self.include_zero_scores = include;
        self
    }
}

/// One scored candidate link.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LinkPrediction<K> {
    /// Source endpoint.
    pub source: K,
    /// Target endpoint.
    pub target: K,
    /// Number of common neighbours.
    pub score: usize,
}

/// Quality of common-neighbour scores against a labelled test set.
///
/// `precision`, `recall` and `f1` are taken at the score `threshold` (pairs scoring at or
/// above it are predicted links) that maximises F1. `auc` is the probability that a random
/// test edge outscores a random non-edge, ties counting half.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LinkPredictionEvaluation {
    /// Precision at the best threshold.
    pub precision: f64,
    /// Recall at the best threshold.
    pub recall: f64,
    /// Best F1 score.
    pub f1: f64,
    /// Score threshold that achieved the best F1.
    pub threshold: usize,
    /// Area under the ROC curve.
    pub auc: f64,
}

/// Returns the number of common neighbours of `u` and `v`, or 0 if either node is absent.
///
/// With `directed` set on a directed graph this counts nodes `w` with `u -> w -> v`.
/// Otherwise edge direction is ignored. Parallel edges do not inflate the count.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::common_neighbors_score, Graph};
///
/// let mut graph: Graph<&str> = Graph::undirected();
/// graph.add_edge("a", "x")?;
/// graph.add_edge("b", "x")?;
/// graph.add_edge("a", "y")?;
/// graph.add_edge("b", "y")?;
///
/// assert_eq!(common_neighbors_score(&graph, &"a", &"b", false), 2);
/// assert_eq!(common_neighbors_score(&graph, &"a", &"missing", false), 0);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[must_use]
pub fn common_neighbors_score<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    u: &K,
    v: &K,
    directed: bool,
) -> usize {
    match (graph.node_id(u), graph.node_id(v)) {
        (Some(u), Some(v)) => score_ids(graph, u, v, directed),
        _ => 0,
    }
}

fn score_ids<K: NodeKey, N, E>(graph: &Graph<K, N, E>, u: NodeId, v: NodeId, directed: bool) -> usize {
    let (left, right): (BTreeSet<NodeId>, BTreeSet<NodeId>) = if directed && graph.is_directed() {
        (
            graph.successor_ids(u).collect(),
            graph.predecessor_ids(v).collect(),
        )
    } else {
        (
            graph.neighbor_ids(u).collect(),
            graph.neighbor_ids(v).collect(),
        )
    };
    left.intersection(&right).count()
}

/// Scores candidate links across the whole graph.
///
/// Undirected mode scores each unordered pair once and reports it in both orientations.
/// Directed mode scores every ordered pair. The ranking is by descending score, then by
/// ascending `(source, target)`.
///
/// This is quadratic in the node count.
///
/// # Examples
///
/// ```rust
/// use graphscope::{
///     algorithms::{common_neighbors_prediction, LinkPredictionConfig},
///     Graph,
/// };
///
/// let mut graph: Graph<u32> = Graph::undirected();
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
///
/// let predictions = common_neighbors_prediction(&graph, &LinkPredictionConfig::default());
/// assert_eq!(predictions.len(), 2);
/// assert_eq!((predictions[0].source, predictions[0].target), (0, 2));
/// assert_eq!((predictions[1].source, predictions[1].target), (2, 0));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[must_use]
pub fn common_neighbors_prediction<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    config: &LinkPredictionConfig,
) -> Vec<LinkPrediction<K>> {
    let mut nodes: Vec<(&K, NodeId)> = graph
        .node_ids()
        .filter_map(|id| graph.key(id).map(|key| (key, id)))
        .collect();
    nodes.sort_by(|a, b| a.0.cmp(b.0));

    let mut predictions = Vec::new();
    for (i, &(source, u)) in nodes.iter().enumerate() {
        for (j, &(target, v)) in nodes.iter().enumerate() {
            if i == j || (!config.directed && j < i) {
                continue;
            }
            if config.exclude_existing {
                let connected = if config.directed {
                    graph.has_edge(source, target)
                } else {
                    graph.has_edge(source, target) || graph.has_edge(target, source)
                };
                if connected {
                    continue;
                }
            }

            let score = score_ids(graph, u, v, config.directed);
            if score == 0 && !config.include_zero_scores {
                continue;
            }
            predictions.push(LinkPrediction {
                source: source.clone(),
                target: target.clone(),
                score,
            });
            if !config.directed {
                predictions.push(LinkPrediction {
                    source: target.clone(),
                    target: source.clone(),
                    score,
                });
            }
        }
    }

    predictions.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.target.cmp(&b.target))
    });
    if let Some(k) = config.top_k {
        predictions.truncate(k);
    }

    #[cfg(feature = "logging")]
    log::trace!("common neighbours: {} candidate links", predictions.len());

    predictions
}

/// Evaluates common-neighbour scores on `train` against held-out `test_edges` (positives)
/// and `non_edges` (negatives).
///
/// Every distinct score is tried as a threshold and the one with the highest F1 is kept;
/// the highest threshold wins a tie. Pairs with absent endpoints score 0. The AUC is 0.5
/// when either labelled set is empty.
#[must_use]
pub fn evaluate_common_neighbors<K: NodeKey, N, E>(
    train: &Graph<K, N, E>,
    test_edges: &[(K, K)],
    non_edges: &[(K, K)],
) -> LinkPredictionEvaluation {
    let directed = train.is_directed();
    let score_all = |pairs: &[(K, K)]| -> Vec<usize> {
        pairs
            .iter()
            .map(|(u, v)| common_neighbors_score(train, u, v, directed))
            .collect()
    };
    let positives = score_all(test_edges);
    let negatives = score_all(non_edges);

    let thresholds: BTreeSet<usize> = positives.iter().chain(&negatives).copied().collect();

    let mut best = LinkPredictionEvaluation {
        precision: 0.0,
        recall: 0.0,
        f1: 0.0,
        threshold: 0,
        auc: auc(&positives, &negatives),
    };
    let mut found = false;
    for &threshold in thresholds.iter().rev() {
        let tp = positives.iter().filter(|&&s| s >= threshold).count();
        let fp = negatives.iter().filter(|&&s| s >= threshold).count();

        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, positives.len());
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        if !found || f1 > best.f1 {
            found = true;
            best.precision = precision;
            best.recall = recall;
            best.f1 = f1;
            best.threshold = threshold;
        }
    }

    #[cfg(feature = "logging")]
    log::debug!(
        "common neighbours evaluation: {} positives, {} negatives, f1 {:.4} at {}, auc {:.4}",
        positives.len(),
        negatives.len(),
        best.f1,
        best.threshold,
        best.auc
    );

    best
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Rank-based AUC: for every negative, the positives ranked above it, ties counting half.
#[allow(clippy::cast_precision_loss)]
fn auc(positives: &[usize], negatives: &[usize]) -> f64 {
    if positives.is_empty() || negatives.is_empty() {
        return 0.5;
    }
    let mut sorted = positives.to_vec();
    sorted.sort_unstable();

    let mut credit = 0.0;
    for &negative in negatives {
        let below = sorted.partition_point(|&p| p < negative);
        let not_above = sorted.partition_point(|&p| p <= negative);
        let above = sorted.len() - not_above;
        let tied = not_above - below;
        credit += above as f64 + 0.5 * tied as f64;
    }
    credit / (positives.len() * negatives.len()) as f64
}
