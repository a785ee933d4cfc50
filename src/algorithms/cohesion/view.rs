//! Undirected neighbour-set view used by the cohesion algorithms.

use std::collections::{btree_map, BTreeMap, BTreeSet, HashMap};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::graph::{Graph, NodeKey};

/// An undirected, unweighted adjacency view: node -> set of neighbours.
///
/// The view is always symmetric: whenever `v` is a neighbour of `u`, `u` is a neighbour of
/// `v`. A self-loop is a node listed in its own neighbour set. Views can be taken from a
/// [`Graph`] (edge direction ignored), collected from an edge list, or assembled by hand,
/// so cohesion analysis can run on adjacency data that never lived in a `Graph`.
///
/// # Examples
///
/// ```rust
/// use graphscope::algorithms::AdjacencyView;
///
/// let view: AdjacencyView<&str> = [("a", "b"), ("b", "c")].into_iter().collect();
/// assert_eq!(view.len(), 3);
/// assert_eq!(view.degree(&"b"), 2);
/// assert!(view.contains_edge(&"c", &"b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AdjacencyView<K: Ord> {
    adjacency: BTreeMap<K, BTreeSet<K>>,
}

impl<K: NodeKey> Default for AdjacencyView<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: NodeKey> AdjacencyView<K> {
    /// Creates an empty view.
    #[must_use]
    pub fn new() -> Self {
        AdjacencyView {
            adjacency: BTreeMap::new(),
        }
    }

    /// Builds a view from a graph, ignoring edge direction, weights and payloads.
    #[must_use]
    pub fn from_graph<N, E>(graph: &Graph<K, N, E>) -> Self {
        let mut view = Self::new();
        for id in graph.node_ids() {
            let Some(key) = graph.key(id) else {
                continue;
            };
            let neighbours = graph
                .neighbor_ids(id)
                .filter_map(|n| graph.key(n))
                .cloned()
                .collect();
            view.adjacency.insert(key.clone(), neighbours);
        }
        view
    }

    /// Adds an isolated node. Existing nodes are left unchanged.
    pub fn add_node(&mut self, node: K) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds an undirected edge, creating missing endpoints.
    pub fn add_edge(&mut self, u: K, v: K) {
        self.adjacency.entry(v.clone()).or_default().insert(u.clone());
        self.adjacency.entry(u).or_default().insert(v);
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the view has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if the node is present.
    #[must_use]
    pub fn contains(&self, node: &K) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns `true` if `u` and `v` are adjacent.
    #[must_use]
    pub fn contains_edge(&self, u: &K, v: &K) -> bool {
        self.adjacency.get(u).is_some_and(|n| n.contains(v))
    }

    /// Returns the neighbour set of a node.
    #[must_use]
    pub fn neighbors(&self, node: &K) -> Option<&BTreeSet<K>> {
        self.adjacency.get(node)
    }

    /// Returns the number of neighbours of a node, 0 if absent. A self-loop counts once.
    #[must_use]
    pub fn degree(&self, node: &K) -> usize {
        self.adjacency.get(node).map_or(0, BTreeSet::len)
    }

    /// Returns the number of undirected edges, self-loops included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(u, neighbours)| neighbours.range(u..).count())
            .sum()
    }

    /// Iterates over the nodes in ascending key order.
    pub fn nodes(&self) -> btree_map::Keys<'_, K, BTreeSet<K>> {
        self.adjacency.keys()
    }

    /// Iterates over `(node, neighbours)` in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, K, BTreeSet<K>> {
        self.adjacency.iter()
    }

    /// Returns the view induced by `keep`: those nodes and the edges among them.
    #[must_use]
    pub fn induced(&self, keep: &BTreeSet<K>) -> Self {
        let adjacency = self
            .adjacency
            .iter()
            .filter(|(node, _)| keep.contains(*node))
            .map(|(node, neighbours)| {
                let kept = neighbours.intersection(keep).cloned().collect();
                (node.clone(), kept)
            })
            .collect();
        AdjacencyView { adjacency }
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<K, BTreeSet<K>> {
        &self.adjacency
    }

    /// Consumes the view and returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<K, BTreeSet<K>> {
        self.adjacency
    }

    /// Dense form: keys in ascending order and neighbour lists by position. Runs in
    /// expected O(V + E).
    pub(crate) fn dense(&self) -> (Vec<&K>, Vec<Vec<usize>>) {
        let keys: Vec<&K> = self.adjacency.keys().collect();
        let position: HashMap<&K, usize> =
            keys.iter().enumerate().map(|(i, &key)| (key, i)).collect();
        let adjacency = self
            .adjacency
            .values()
            .map(|neighbours| {
                neighbours
                    .iter()
                    .filter_map(|n| position.get(n).copied())
                    .collect()
            })
            .collect();
        (keys, adjacency)
    }
}

impl<K: NodeKey> From<BTreeMap<K, BTreeSet<K>>> for AdjacencyView<K> {
    /// Wraps a hand-built map, adding the mirror of every listed edge. Nodes that only appear
    /// as neighbours become nodes of the view.
    fn from(map: BTreeMap<K, BTreeSet<K>>) -> Self {
        let mut view = Self::new();
        for (node, neighbours) in map {
            view.add_node(node.clone());
            for neighbour in neighbours {
                view.add_edge(node.clone(), neighbour);
            }
        }
        view
    }
}

impl<K: NodeKey> FromIterator<(K, K)> for AdjacencyView<K> {
    fn from_iter<I: IntoIterator<Item = (K, K)>>(edges: I) -> Self {
        let mut view = Self::new();
        for (u, v) in edges {
            view.add_edge(u, v);
        }
        view
    }
}

impl<K: NodeKey, N, E> From<&Graph<K, N, E>> for AdjacencyView<K> {
    fn from(graph: &Graph<K, N, E>) -> Self {
        Self::from_graph(graph)
    }
}

/// Folds a directed weighted adjacency map into an undirected view.
///
/// Both directions are recorded for every directed edge and weights are discarded. A
/// self-loop becomes a self-referencing entry. Nodes appearing only as targets are included.
#[must_use]
pub fn to_undirected<K: NodeKey>(directed: &BTreeMap<K, BTreeMap<K, f64>>) -> AdjacencyView<K> {
    let mut view = AdjacencyView::new();
    for (source, targets) in directed {
        view.add_node(source.clone());
        for target in targets.keys() {
            view.add_edge(source.clone(), target.clone());
        }
    }
    view
}
