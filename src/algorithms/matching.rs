//! Bipartite partitioning and matching.
//!
//! - [`bipartite_partition`] - Two-colours the graph into left and right sides
//! - [`maximum_bipartite_matching`] - Maximum-cardinality matching by augmenting paths
//!   (Kuhn's algorithm)
//! - [`greedy_bipartite_matching`] - Single-pass first-fit matching, a cheap baseline
//!
//! Edge direction is ignored throughout: an edge in either direction between a left and a
//! right node makes them matchable.
//!
//! # Complexity
//!
//! The augmenting-path matcher runs one search per left node, each bounded by O(E), for
//! O(V · E) overall. The search keeps an explicit stack instead of recursing, so deep
//! alternating paths cannot overflow the call stack.

use std::collections::{BTreeMap, HashSet};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    algorithms::traversal::two_colouring,
    graph::{Graph, NodeId, NodeKey},
    Error, Result,
};

/// A two-colouring of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Bipartition<K> {
    /// Nodes coloured like the first node of their component, in insertion order
    pub left: Vec<K>,
    /// The remaining nodes, in insertion order
    pub right: Vec<K>,
}

/// Caller-supplied sides for a matching.
///
/// With neither side given, the sides come from [`bipartite_partition`]. With one side
/// given, the other side is every remaining node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BipartiteSides<K> {
    /// Left side, matched in the given order
    pub left: Option<Vec<K>>,
    /// Right side
    pub right: Option<Vec<K>>,
}

impl<K> Default for BipartiteSides<K> {
    fn default() -> Self {
        BipartiteSides {
            left: None,
            right: None,
        }
    }
}

impl<K> BipartiteSides<K> {
    /// Infer both sides from the graph.
    #[must_use]
    pub fn inferred() -> Self {
        Self::default()
    }

    /// Set the left side.
    #[must_use]
    pub fn with_left(mut self, left: Vec<K>) -> Self {
        self.left = Some(left);
        self
    }

    /// Set the right side.
    #[must_use]
    pub fn with_right(mut self, right: Vec<K>) -> Self {
        self.right = Some(right);
        self
    }
}

/// A matching between left and right nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Matching<K> {
    /// Left node -> matched right node
    pub pairs: BTreeMap<K, K>,
    /// Number of matched pairs
    pub size: usize,
}

impl<K: NodeKey> Matching<K> {
    /// Returns the right partner of a left node.
    #[must_use]
    pub fn partner(&self, left: &K) -> Option<&K> {
        self.pairs.get(left)
    }
}

/// Splits the graph into two sides with no edge inside either side.
///
/// Each connected component is coloured by BFS, ignoring edge direction; the first node of
/// each component in insertion order goes left. Returns `None` if any component contains an
/// odd cycle or a self-loop.
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, GraphConfig};
/// use graphscope::algorithms::bipartite_partition;
///
/// let mut graph: Graph<u32> = Graph::new(GraphConfig::undirected());
/// graph.add_edge(0, 2)?;
/// graph.add_edge(1, 2)?;
///
/// let sides = bipartite_partition(&graph).unwrap();
/// assert_eq!(sides.left, vec![0, 1]);
/// assert_eq!(sides.right, vec![2]);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[must_use]
pub fn bipartite_partition<K: NodeKey, N, E>(graph: &Graph<K, N, E>) -> Option<Bipartition<K>> {
    let colour = two_colouring(graph)?;

    let mut partition = Bipartition {
        left: Vec::new(),
        right: Vec::new(),
    };
    for id in graph.node_ids() {
        let Some(key) = graph.key(id) else {
            continue;
        };
        if colour[id.index()] == Some(true) {
            partition.right.push(key.clone());
        } else {
            partition.left.push(key.clone());
        }
    }
    Some(partition)
}

/// Computes a maximum-cardinality matching with augmenting paths.
///
/// Left nodes are processed in order. For each one, a depth-first search over right
/// neighbours not yet visited in this attempt either claims a free right node or re-routes
/// the current partner of a matched one. The visited set is reset per left node.
///
/// # Errors
///
/// - [`Error::NotBipartite`] if the sides must be inferred and the graph has no
///   two-colouring
/// - [`Error::NodeNotFound`] if a supplied side names an absent node
/// - [`Error::InvalidParameter`] if a node is supplied on both sides
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, GraphConfig};
/// use graphscope::algorithms::{maximum_bipartite_matching, BipartiteSides};
///
/// let mut graph: Graph<u32> = Graph::new(GraphConfig::undirected());
/// graph.add_edge(0, 2)?;
/// graph.add_edge(0, 3)?;
/// graph.add_edge(1, 2)?;
///
/// let sides = BipartiteSides::inferred().with_left(vec![0, 1]);
/// let matching = maximum_bipartite_matching(&graph, &sides)?;
/// assert_eq!(matching.size, 2);
/// assert_eq!(matching.partner(&0), Some(&3));
/// assert_eq!(matching.partner(&1), Some(&2));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn maximum_bipartite_matching<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    sides: &BipartiteSides<K>,
) -> Result<Matching<K>> {
    let (left, is_right) = resolve_sides(graph, sides)?;
    let mut state = MatchState::new(graph.node_bound());

    for &root in &left {
        state.visited.iter_mut().for_each(|v| *v = false);
        state.augment(graph, root, &is_right);
    }

    let matching = state.into_matching(graph, &left);

    #[cfg(feature = "logging")]
    log::debug!(
        "augmenting-path matching: {} of {} left nodes matched",
        matching.size,
        left.len()
    );

    Ok(matching)
}

/// Computes a maximal matching in one pass without augmentation.
///
/// Each left node, in order, claims its first right neighbour that is still free. The result
/// can be smaller than [`maximum_bipartite_matching`].
///
/// # Errors
///
/// Same as [`maximum_bipartite_matching`].
pub fn greedy_bipartite_matching<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    sides: &BipartiteSides<K>,
) -> Result<Matching<K>> {
    let (left, is_right) = resolve_sides(graph, sides)?;
    let mut state = MatchState::new(graph.node_bound());

    for &u in &left {
        let free = graph
            .neighbor_ids(u)
            .find(|v| is_right[v.index()] && state.match_right[v.index()].is_none());
        if let Some(v) = free {
            state.match_left[u.index()] = Some(v);
            state.match_right[v.index()] = Some(u);
        }
    }

    Ok(state.into_matching(graph, &left))
}

/// Resolves the left side (in matching order) and a right-side membership mask.
fn resolve_sides<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    sides: &BipartiteSides<K>,
) -> Result<(Vec<NodeId>, Vec<bool>)> {
    let lookup = |keys: &[K]| -> Result<Vec<NodeId>> {
        let mut seen = HashSet::with_capacity(keys.len());
        let mut ids = Vec::with_capacity(keys.len());
        for key in keys {
            let id = graph
                .node_id(key)
                .ok_or_else(|| Error::node_not_found(key))?;
            if seen.insert(id) {
                ids.push(id);
            }
        }
        Ok(ids)
    };

    let mut is_right = vec![false; graph.node_bound()];
    let left = match (&sides.left, &sides.right) {
        (None, None) => {
            let colour = two_colouring(graph).ok_or(Error::NotBipartite)?;
            let mut left = Vec::new();
            for id in graph.node_ids() {
                if colour[id.index()] == Some(true) {
                    is_right[id.index()] = true;
                } else {
                    left.push(id);
                }
            }
            left
        }
        (Some(left_keys), None) => {
            let left = lookup(left_keys)?;
            is_right.iter_mut().for_each(|r| *r = true);
            for id in &left {
                is_right[id.index()] = false;
            }
            left
        }
        (None, Some(right_keys)) => {
            for id in lookup(right_keys)? {
                is_right[id.index()] = true;
            }
            graph.node_ids().filter(|id| !is_right[id.index()]).collect()
        }
        (Some(left_keys), Some(right_keys)) => {
            let left = lookup(left_keys)?;
            for id in lookup(right_keys)? {
                is_right[id.index()] = true;
            }
            if let Some(both) = left.iter().find(|id| is_right[id.index()]) {
                return Err(invalid_parameter!(
                    "node {:?} is listed on both sides",
                    graph.key(*both)
                ));
            }
            left
        }
    };

    Ok((left, is_right))
}

/// One level of the explicit augmenting-path search.
struct Frame {
    left: NodeId,
    candidates: Vec<NodeId>,
    cursor: usize,
}

struct MatchState {
    match_left: Vec<Option<NodeId>>,
    match_right: Vec<Option<NodeId>>,
    visited: Vec<bool>,
}

impl MatchState {
    fn new(bound: usize) -> Self {
        MatchState {
            match_left: vec![None; bound],
            match_right: vec![None; bound],
            visited: vec![false; bound],
        }
    }

    /// Searches for an augmenting path from `root` and applies it. Returns `true` if the
    /// matching grew.
    fn augment<K: NodeKey, N, E>(
        &mut self,
        graph: &Graph<K, N, E>,
        root: NodeId,
        is_right: &[bool],
    ) -> bool {
        let candidates = |u: NodeId| -> Vec<NodeId> {
            graph
                .neighbor_ids(u)
                .filter(|v| is_right[v.index()])
                .collect()
        };

        let mut stack = vec![Frame {
            left: root,
            candidates: candidates(root),
            cursor: 0,
        }];

        loop {
            let Some(frame) = stack.last_mut() else {
                return false;
            };
            let Some(&v) = frame.candidates.get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            if self.visited[v.index()] {
                continue;
            }
            self.visited[v.index()] = true;

            match self.match_right[v.index()] {
                Some(partner) => stack.push(Frame {
                    left: partner,
                    candidates: candidates(partner),
                    cursor: 0,
                }),
                None => {
                    // Every frame claims the right node it last tried
                    for frame in &stack {
                        let Some(&right) = frame
                            .cursor
                            .checked_sub(1)
                            .and_then(|i| frame.candidates.get(i))
                        else {
                            continue;
                        };
                        self.match_left[frame.left.index()] = Some(right);
                        self.match_right[right.index()] = Some(frame.left);
                    }
                    return true;
                }
            }
        }
    }

    fn into_matching<K: NodeKey, N, E>(self, graph: &Graph<K, N, E>, left: &[NodeId]) -> Matching<K> {
        let pairs: BTreeMap<K, K> = left
            .iter()
            .filter_map(|&u| {
                let v = self.match_left[u.index()]?;
                Some((graph.key(u)?.clone(), graph.key(v)?.clone()))
            })
            .collect();
        let size = pairs.len();
        Matching { pairs, size }
    }
}
