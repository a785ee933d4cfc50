//! The keyed, arena-backed graph container.
//!
//! [`Graph`] maps caller keys to dense [`NodeId`] slots and stores every logical edge once in
//! an edge arena. Each node slot carries its own adjacency maps keyed by neighbour index:
//!
//! - `outgoing` - edges leaving the node (all incident edges for undirected graphs)
//! - `incoming` - edges entering the node, maintained for directed graphs only
//!
//! Removed nodes and edges leave tombstones, so indices handed out earlier are never reused
//! for a different node or edge.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::{
    graph::{
        iter::{Edges, NeighborIds, Neighbors, NodeIds, Nodes},
        EdgeId, EdgeRef, GraphBase, GraphConfig, NodeId, NodeKey, NodeRef, Predecessors,
        Successors,
    },
    Error, Result,
};

/// Storage for a single node: key, payload and adjacency.
#[derive(Debug, Clone)]
pub(crate) struct NodeSlot<K, N> {
    pub(crate) key: K,
    pub(crate) data: Option<N>,
    pub(crate) outgoing: BTreeMap<NodeId, Vec<EdgeId>>,
    pub(crate) incoming: BTreeMap<NodeId, Vec<EdgeId>>,
}

/// Storage for a single logical edge.
#[derive(Debug, Clone)]
pub(crate) struct EdgeSlot<E> {
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
    pub(crate) weight: f64,
    pub(crate) data: Option<E>,
}

/// A directed or undirected graph keyed by caller-supplied node identifiers.
///
/// `Graph<K, N, E>` owns its nodes and edges. Nodes are addressed by keys of type `K` and
/// may carry a payload of type `N`; edges carry an `f64` weight (1.0 by default) and an
/// optional payload of type `E`. Directedness, self-loop policy and parallel-edge policy are
/// fixed at construction through [`GraphConfig`].
///
/// # Type Parameters
///
/// * `K` - The node key type (see [`NodeKey`])
/// * `N` - The node payload type
/// * `E` - The edge payload type
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, GraphConfig};
///
/// let mut graph: Graph<&str> = Graph::new(GraphConfig::undirected());
/// graph.add_edge("A", "B")?;
/// graph.add_edge("B", "C")?;
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.degree(&"B"), 2);
/// assert!(graph.has_edge(&"B", &"A"));
///
/// let neighbors: Vec<&&str> = graph.neighbors(&"B").collect();
/// assert_eq!(neighbors, vec![&"A", &"C"]);
/// # Ok::<(), graphscope::Error>(())
/// ```
///
/// # Thread Safety
///
/// `Graph` is [`Send`] and [`Sync`] when its type parameters are. Analysis routines take
/// `&Graph` and never mutate it.
#[derive(Debug, Clone)]
pub struct Graph<K, N = (), E = ()> {
    config: GraphConfig,
    pub(crate) slots: Vec<Option<NodeSlot<K, N>>>,
    pub(crate) edges: Vec<Option<EdgeSlot<E>>>,
    index: HashMap<K, NodeId>,
    node_count: usize,
    edge_count: usize,
}

impl<K: NodeKey, N, E> Default for Graph<K, N, E> {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl<K: NodeKey, N, E> Graph<K, N, E> {
    /// Creates an empty graph with the given configuration.
    #[must_use]
    pub fn new(config: GraphConfig) -> Self {
        Graph {
            config,
            slots: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
            node_count: 0,
            edge_count: 0,
        }
    }

    /// Creates an empty directed graph with the default edge policies.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(GraphConfig::directed())
    }

    /// Creates an empty undirected graph with the default edge policies.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(GraphConfig::undirected())
    }

    /// Returns the configuration the graph was created with.
    #[must_use]
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Returns `true` if edges are directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.config.is_directed()
    }

    /// Adds a node, or returns the index of the existing node with this key.
    ///
    /// Re-adding an existing key is a no-op.
    pub fn add_node(&mut self, key: K) -> NodeId {
        match self.index.get(&key) {
            Some(&id) => id,
            None => self.insert_node(key, None),
        }
    }

    /// Adds a node carrying a payload.
    ///
    /// If the key already exists, the graph is left unchanged and the first payload is kept.
    pub fn add_node_with_data(&mut self, key: K, data: N) -> NodeId {
        match self.index.get(&key) {
            Some(&id) => id,
            None => self.insert_node(key, Some(data)),
        }
    }

    /// Removes a node and every edge touching it.
    ///
    /// # Returns
    ///
    /// `true` if the node existed, `false` otherwise.
    pub fn remove_node(&mut self, key: &K) -> bool {
        let Some(id) = self.index.remove(key) else {
            return false;
        };
        let Some(slot) = self.slots.get_mut(id.0).and_then(Option::take) else {
            return false;
        };

        let directed = self.config.is_directed();
        let mut removed: BTreeSet<EdgeId> = BTreeSet::new();

        for (&other, ids) in &slot.outgoing {
            removed.extend(ids.iter().copied());
            if other == id {
                continue;
            }
            if let Some(other_slot) = self.slot_mut(other) {
                if directed {
                    other_slot.incoming.remove(&id);
                } else {
                    other_slot.outgoing.remove(&id);
                }
            }
        }

        for (&other, ids) in &slot.incoming {
            removed.extend(ids.iter().copied());
            if other == id {
                continue;
            }
            if let Some(other_slot) = self.slot_mut(other) {
                other_slot.outgoing.remove(&id);
            }
        }

        for edge in &removed {
            if let Some(entry) = self.edges.get_mut(edge.0) {
                *entry = None;
            }
        }

        self.edge_count -= removed.len();
        self.node_count -= 1;

        #[cfg(feature = "logging")]
        log::trace!(
            "removed node {:?} ({}) with {} incident edges",
            slot.key,
            id,
            removed.len()
        );

        true
    }

    /// Adds an edge with weight 1.0, creating missing endpoints.
    ///
    /// # Errors
    ///
    /// - [`Error::SelfLoopNotAllowed`] if `source == target` and self-loops are disabled
    /// - [`Error::ParallelEdgeNotAllowed`] if the pair is already connected and parallel
    ///   edges are disabled
    ///
    /// A failed call leaves the graph unchanged; no endpoint is created.
    pub fn add_edge(&mut self, source: K, target: K) -> Result<EdgeId> {
        self.try_add_edge(source, target, 1.0, None)
    }

    /// Adds a weighted edge, creating missing endpoints.
    ///
    /// # Errors
    ///
    /// Same as [`add_edge`](Graph::add_edge).
    pub fn add_weighted_edge(&mut self, source: K, target: K, weight: f64) -> Result<EdgeId> {
        self.try_add_edge(source, target, weight, None)
    }

    /// Adds a weighted edge carrying a payload, creating missing endpoints.
    ///
    /// # Errors
    ///
    /// Same as [`add_edge`](Graph::add_edge).
    pub fn add_edge_with_data(
        &mut self,
        source: K,
        target: K,
        weight: f64,
        data: E,
    ) -> Result<EdgeId> {
        self.try_add_edge(source, target, weight, Some(data))
    }

    /// Removes every edge between `source` and `target`.
    ///
    /// For undirected graphs the pair is unordered. Both endpoints stay in the graph.
    ///
    /// # Returns
    ///
    /// `true` if at least one edge was removed.
    pub fn remove_edge(&mut self, source: &K, target: &K) -> bool {
        let (Some(s), Some(t)) = (self.node_id(source), self.node_id(target)) else {
            return false;
        };

        let removed = self.unlink(s, t);
        for edge in &removed {
            if let Some(entry) = self.edges.get_mut(edge.0) {
                *entry = None;
            }
        }
        self.edge_count -= removed.len();
        !removed.is_empty()
    }

    /// Removes all nodes and edges. The configuration is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.edges.clear();
        self.index.clear();
        self.node_count = 0;
        self.edge_count = 0;
    }

    /// Returns `true` if a node with this key exists.
    #[must_use]
    pub fn has_node(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns `true` if at least one edge connects `source` to `target`.
    ///
    /// For undirected graphs the pair is unordered.
    #[must_use]
    pub fn has_edge(&self, source: &K, target: &K) -> bool {
        match (self.node_id(source), self.node_id(target)) {
            (Some(s), Some(t)) => self
                .slot(s)
                .is_some_and(|slot| slot.outgoing.contains_key(&t)),
            _ => false,
        }
    }

    /// Returns a view of the node with this key.
    #[must_use]
    pub fn node(&self, key: &K) -> Option<NodeRef<'_, K, N>> {
        let id = self.node_id(key)?;
        let slot = self.slot(id)?;
        Some(NodeRef::new(id, &slot.key, slot.data.as_ref()))
    }

    /// Returns the first edge from `source` to `target`, oriented as requested.
    #[must_use]
    pub fn edge(&self, source: &K, target: &K) -> Option<EdgeRef<'_, K, E>> {
        self.edges_between(source, target).next()
    }

    /// Returns every edge from `source` to `target` in insertion order, oriented as
    /// requested.
    ///
    /// More than one edge is only possible when parallel edges are enabled.
    pub fn edges_between<'g>(
        &'g self,
        source: &K,
        target: &K,
    ) -> impl Iterator<Item = EdgeRef<'g, K, E>> + 'g {
        let pair = self.node_id(source).zip(self.node_id(target));
        let ids: &'g [EdgeId] = pair
            .and_then(|(s, t)| self.slot(s)?.outgoing.get(&t))
            .map_or(&[][..], Vec::as_slice);

        ids.iter().filter_map(move |&edge| {
            let (s, t) = pair?;
            self.edge_view(edge, s, t)
        })
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of logical edges added and not yet removed.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the number of edges yielded by [`edges`](Graph::edges).
    ///
    /// Every logical edge is enumerated exactly once, so this always matches
    /// [`edge_count`](Graph::edge_count).
    #[must_use]
    pub fn unique_edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Returns the number of incident edge endpoints of a node.
    ///
    /// Parallel edges count separately. An undirected self-loop counts twice. For directed
    /// graphs this is `in_degree + out_degree`. An absent node has degree 0.
    #[must_use]
    pub fn degree(&self, key: &K) -> usize {
        let Some(id) = self.node_id(key) else {
            return 0;
        };
        if self.is_directed() {
            self.out_degree_of(id) + self.in_degree_of(id)
        } else {
            self.slot(id).map_or(0, |slot| {
                slot.outgoing
                    .iter()
                    .map(|(&other, ids)| if other == id { 2 * ids.len() } else { ids.len() })
                    .sum()
            })
        }
    }

    /// Returns the number of edges leaving a node, or the degree for undirected graphs.
    #[must_use]
    pub fn out_degree(&self, key: &K) -> usize {
        if !self.is_directed() {
            return self.degree(key);
        }
        self.node_id(key).map_or(0, |id| self.out_degree_of(id))
    }

    /// Returns the number of edges entering a node, or the degree for undirected graphs.
    #[must_use]
    pub fn in_degree(&self, key: &K) -> usize {
        if !self.is_directed() {
            return self.degree(key);
        }
        self.node_id(key).map_or(0, |id| self.in_degree_of(id))
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> Nodes<'_, K, N> {
        Nodes::new(&self.slots, self.node_count)
    }

    /// Returns an iterator over all logical edges in insertion order.
    ///
    /// Undirected edges are oriented so that `source <= target`.
    pub fn edges(&self) -> Edges<'_, K, N, E> {
        Edges::new(self, &self.edges)
    }

    /// Returns the distinct neighbours of a node.
    ///
    /// For directed graphs this is the union of in- and out-neighbours. An absent node yields
    /// an empty iterator.
    pub fn neighbors(&self, key: &K) -> Neighbors<'_, K, N, E> {
        let ids = self
            .node_id(key)
            .map_or_else(NeighborIds::empty, |id| self.neighbor_ids(id));
        Neighbors::new(self, ids)
    }

    /// Returns the distinct targets of edges leaving a node.
    pub fn out_neighbors(&self, key: &K) -> Neighbors<'_, K, N, E> {
        let ids = self
            .node_id(key)
            .map_or_else(NeighborIds::empty, |id| self.successor_ids(id));
        Neighbors::new(self, ids)
    }

    /// Returns the distinct sources of edges entering a node.
    pub fn in_neighbors(&self, key: &K) -> Neighbors<'_, K, N, E> {
        let ids = self
            .node_id(key)
            .map_or_else(NeighborIds::empty, |id| self.predecessor_ids(id));
        Neighbors::new(self, ids)
    }

    /// Returns a copy restricted to the given nodes and the edges among them.
    ///
    /// Keys not present in the graph are ignored. Node order, edge order and payloads are
    /// preserved.
    #[must_use]
    pub fn induced_subgraph<'a, I>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
        N: Clone,
        E: Clone,
    {
        let wanted: HashSet<NodeId> = keys.into_iter().filter_map(|k| self.node_id(k)).collect();

        let mut sub = Graph::new(self.config);
        let mut remap: HashMap<NodeId, NodeId> = HashMap::with_capacity(wanted.len());
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(slot) = slot else {
                continue;
            };
            let old = NodeId::new(index);
            if wanted.contains(&old) {
                let new = sub.insert_node(slot.key.clone(), slot.data.clone());
                remap.insert(old, new);
            }
        }

        for edge in self.edges.iter().flatten() {
            if let (Some(&s), Some(&t)) = (remap.get(&edge.source), remap.get(&edge.target)) {
                sub.insert_edge(s, t, edge.weight, edge.data.clone());
            }
        }

        sub
    }

    /// Returns the arena index of the node with this key.
    #[must_use]
    pub fn node_id(&self, key: &K) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// Returns the key of the node at this arena index.
    #[must_use]
    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.slot(node).map(|slot| &slot.key)
    }

    /// Returns an iterator over the arena indices of all live nodes.
    pub fn node_ids(&self) -> NodeIds<'_, K, N> {
        NodeIds::new(&self.slots, self.node_count)
    }

    /// Returns an exclusive upper bound for every node index ever handed out.
    #[must_use]
    pub fn node_bound(&self) -> usize {
        self.slots.len()
    }

    /// Returns the distinct successor indices of a node.
    pub fn successor_ids(&self, node: NodeId) -> NeighborIds<'_> {
        self.slot(node)
            .map_or_else(NeighborIds::empty, |slot| NeighborIds::single(&slot.outgoing))
    }

    /// Returns the distinct predecessor indices of a node.
    pub fn predecessor_ids(&self, node: NodeId) -> NeighborIds<'_> {
        let directed = self.is_directed();
        self.slot(node).map_or_else(NeighborIds::empty, |slot| {
            if directed {
                NeighborIds::single(&slot.incoming)
            } else {
                NeighborIds::single(&slot.outgoing)
            }
        })
    }

    /// Returns the distinct neighbour indices of a node, ignoring edge direction.
    pub fn neighbor_ids(&self, node: NodeId) -> NeighborIds<'_> {
        let directed = self.is_directed();
        self.slot(node).map_or_else(NeighborIds::empty, |slot| {
            if directed {
                NeighborIds::merged(&slot.outgoing, &slot.incoming)
            } else {
                NeighborIds::single(&slot.outgoing)
            }
        })
    }

    /// Returns `(target, weight)` for every edge leaving a node, parallel edges included.
    ///
    /// For undirected graphs every incident edge is reported once from this node's side.
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.slot(node).into_iter().flat_map(move |slot| {
            slot.outgoing.iter().flat_map(move |(&target, ids)| {
                ids.iter().filter_map(move |edge| {
                    self.edges
                        .get(edge.0)
                        .and_then(Option::as_ref)
                        .map(|edge| (target, edge.weight))
                })
            })
        })
    }

    pub(crate) fn slot(&self, node: NodeId) -> Option<&NodeSlot<K, N>> {
        self.slots.get(node.0).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, node: NodeId) -> Option<&mut NodeSlot<K, N>> {
        self.slots.get_mut(node.0).and_then(Option::as_mut)
    }

    fn out_degree_of(&self, node: NodeId) -> usize {
        self.slot(node)
            .map_or(0, |slot| slot.outgoing.values().map(Vec::len).sum())
    }

    fn in_degree_of(&self, node: NodeId) -> usize {
        self.slot(node)
            .map_or(0, |slot| slot.incoming.values().map(Vec::len).sum())
    }

    fn edge_view(&self, edge: EdgeId, from: NodeId, to: NodeId) -> Option<EdgeRef<'_, K, E>> {
        let slot = self.edges.get(edge.0)?.as_ref()?;
        Some(EdgeRef::new(
            edge,
            self.key(from)?,
            self.key(to)?,
            slot.weight,
            slot.data.as_ref(),
        ))
    }

    fn try_add_edge(
        &mut self,
        source: K,
        target: K,
        weight: f64,
        data: Option<E>,
    ) -> Result<EdgeId> {
        if source == target && !self.config.allows_self_loops() {
            return Err(Error::SelfLoopNotAllowed(format!("{source:?}")));
        }
        if !self.config.allows_parallel_edges() && self.has_edge(&source, &target) {
            return Err(Error::ParallelEdgeNotAllowed {
                from: format!("{source:?}"),
                to: format!("{target:?}"),
            });
        }

        let s = self.add_node(source);
        let t = self.add_node(target);
        Ok(self.insert_edge(s, t, weight, data))
    }

    pub(crate) fn insert_node(&mut self, key: K, data: Option<N>) -> NodeId {
        let id = NodeId::new(self.slots.len());
        self.index.insert(key.clone(), id);
        self.slots.push(Some(NodeSlot {
            key,
            data,
            outgoing: BTreeMap::new(),
            incoming: BTreeMap::new(),
        }));
        self.node_count += 1;
        id
    }

    fn insert_edge(&mut self, source: NodeId, target: NodeId, weight: f64, data: Option<E>) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(Some(EdgeSlot {
            source,
            target,
            weight,
            data,
        }));
        self.link(id, source, target);
        self.edge_count += 1;
        id
    }

    /// Registers an edge in the adjacency of both endpoints.
    fn link(&mut self, edge: EdgeId, source: NodeId, target: NodeId) {
        let directed = self.config.is_directed();
        if let Some(slot) = self.slot_mut(source) {
            slot.outgoing.entry(target).or_default().push(edge);
        }
        if directed {
            if let Some(slot) = self.slot_mut(target) {
                slot.incoming.entry(source).or_default().push(edge);
            }
        } else if source != target {
            if let Some(slot) = self.slot_mut(target) {
                slot.outgoing.entry(source).or_default().push(edge);
            }
        }
    }

    /// Drops the adjacency entries between two nodes on both sides and returns the edges
    /// they referenced.
    fn unlink(&mut self, source: NodeId, target: NodeId) -> Vec<EdgeId> {
        let directed = self.config.is_directed();
        let removed = self
            .slot_mut(source)
            .and_then(|slot| slot.outgoing.remove(&target))
            .unwrap_or_default();
        if removed.is_empty() {
            return removed;
        }

        if directed {
            if let Some(slot) = self.slot_mut(target) {
                slot.incoming.remove(&source);
            }
        } else if source != target {
            if let Some(slot) = self.slot_mut(target) {
                slot.outgoing.remove(&source);
            }
        }
        removed
    }
}

impl<K: NodeKey, N, E> GraphBase for Graph<K, N, E> {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn node_bound(&self) -> usize {
        self.slots.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        NodeIds::new(&self.slots, self.node_count)
    }
}

impl<K: NodeKey, N, E> Successors for Graph<K, N, E> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.successor_ids(node)
    }
}

impl<K: NodeKey, N, E> Predecessors for Graph<K, N, E> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.predecessor_ids(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected() -> Graph<&'static str> {
        Graph::new(GraphConfig::undirected())
    }

    fn directed() -> Graph<&'static str> {
        Graph::new(GraphConfig::directed())
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph: Graph<&str, u32> = Graph::undirected();
        let a = graph.add_node_with_data("a", 1);
        let again = graph.add_node_with_data("a", 2);

        assert_eq!(a, again);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node(&"a").and_then(|n| n.data()), Some(&1));
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut graph = undirected();
        graph.add_edge("a", "b").unwrap();

        assert!(graph.has_node(&"a"));
        assert!(graph.has_node(&"b"));
        assert!(graph.has_edge(&"a", &"b"));
        assert!(graph.has_edge(&"b", &"a"));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.unique_edge_count(), 1);
    }

    #[test]
    fn test_directed_edge_is_one_way() {
        let mut graph = directed();
        graph.add_edge("a", "b").unwrap();

        assert!(graph.has_edge(&"a", &"b"));
        assert!(!graph.has_edge(&"b", &"a"));
        assert_eq!(graph.out_degree(&"a"), 1);
        assert_eq!(graph.in_degree(&"a"), 0);
        assert_eq!(graph.in_degree(&"b"), 1);
        assert_eq!(graph.degree(&"b"), 1);
    }

    #[test]
    fn test_self_loop_rejected_without_side_effects() {
        let mut graph: Graph<&str> = Graph::new(GraphConfig::undirected().with_self_loops(false));
        let result = graph.add_edge("x", "x");

        assert!(matches!(result, Err(Error::SelfLoopNotAllowed(_))));
        assert!(!graph.has_node(&"x"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_parallel_edge_rejected() {
        let mut graph = undirected();
        graph.add_edge("a", "b").unwrap();

        let result = graph.add_edge("b", "a");
        assert!(matches!(result, Err(Error::ParallelEdgeNotAllowed { .. })));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_directed_reverse_edge_is_not_parallel() {
        let mut graph = directed();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("b", "a").unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(&"a").count(), 1);
    }

    #[test]
    fn test_parallel_edges_when_allowed() {
        let mut graph: Graph<&str> = Graph::new(GraphConfig::undirected().with_parallel_edges(true));
        graph.add_weighted_edge("a", "b", 1.0).unwrap();
        graph.add_weighted_edge("b", "a", 2.0).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(&"a"), 2);
        assert_eq!(graph.neighbors(&"a").count(), 1);

        let weights: Vec<f64> = graph.edges_between(&"a", &"b").map(|e| e.weight()).collect();
        assert_eq!(weights, vec![1.0, 2.0]);

        assert!(graph.remove_edge(&"a", &"b"));
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.has_edge(&"b", &"a"));
    }

    #[test]
    fn test_edge_lookup_orientation() {
        let mut graph: Graph<&str, (), &str> = Graph::undirected();
        graph.add_edge_with_data("a", "b", 3.0, "ab").unwrap();

        let reverse = graph.edge(&"b", &"a").unwrap();
        assert_eq!(*reverse.source(), "b");
        assert_eq!(*reverse.target(), "a");
        assert_eq!(reverse.data(), Some(&"ab"));
        assert!((reverse.weight() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_self_loop_degree() {
        let mut graph = undirected();
        graph.add_edge("a", "a").unwrap();
        graph.add_edge("a", "b").unwrap();

        assert_eq!(graph.degree(&"a"), 3);
        assert_eq!(graph.unique_edge_count(), 2);

        let mut digraph = directed();
        digraph.add_edge("a", "a").unwrap();
        assert_eq!(digraph.out_degree(&"a"), 1);
        assert_eq!(digraph.in_degree(&"a"), 1);
        assert_eq!(digraph.degree(&"a"), 2);
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut graph = directed();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("c", "a").unwrap();
        graph.add_edge("b", "c").unwrap();
        graph.add_edge("a", "a").unwrap();

        assert!(graph.remove_node(&"a"));
        assert!(!graph.remove_node(&"a"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.in_degree(&"b"), 0);
        assert_eq!(graph.out_degree(&"c"), 0);
        assert_eq!(graph.unique_edge_count(), 1);
    }

    #[test]
    fn test_remove_node_undirected_mirrors() {
        let mut graph = undirected();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("a", "c").unwrap();

        assert!(graph.remove_node(&"a"));
        assert_eq!(graph.degree(&"b"), 0);
        assert_eq!(graph.neighbors(&"c").count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_missing_edge() {
        let mut graph = undirected();
        graph.add_node("a");
        assert!(!graph.remove_edge(&"a", &"b"));
        assert!(!graph.remove_edge(&"a", &"a"));
    }

    #[test]
    fn test_absent_node_queries() {
        let graph = directed();
        assert_eq!(graph.degree(&"ghost"), 0);
        assert_eq!(graph.in_degree(&"ghost"), 0);
        assert_eq!(graph.out_degree(&"ghost"), 0);
        assert_eq!(graph.neighbors(&"ghost").count(), 0);
        assert!(graph.node(&"ghost").is_none());
        assert!(graph.edge(&"ghost", &"ghost").is_none());
    }

    #[test]
    fn test_directed_neighbors_union() {
        let mut graph = directed();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("c", "a").unwrap();
        graph.add_edge("b", "a").unwrap();

        let all: Vec<&&str> = graph.neighbors(&"a").collect();
        assert_eq!(all, vec![&"b", &"c"]);
        let out: Vec<&&str> = graph.out_neighbors(&"a").collect();
        assert_eq!(out, vec![&"b"]);
        let inc: Vec<&&str> = graph.in_neighbors(&"a").collect();
        assert_eq!(inc, vec![&"b", &"c"]);
    }

    #[test]
    fn test_clear_keeps_config() {
        let mut graph: Graph<&str> = Graph::new(GraphConfig::directed().with_self_loops(false));
        graph.add_edge("a", "b").unwrap();
        graph.clear();

        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_directed());
        assert!(graph.add_edge("a", "a").is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut graph = undirected();
        graph.add_edge("a", "b").unwrap();
        let snapshot = graph.clone();
        graph.add_edge("b", "c").unwrap();

        assert_eq!(snapshot.node_count(), 2);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_induced_subgraph() {
        let mut graph: Graph<u32, &str> = Graph::undirected();
        graph.add_node_with_data(1, "one");
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph.add_edge(1, 3).unwrap();

        let sub = graph.induced_subgraph(&[1, 3, 99]);
        assert_eq!(sub.node_count(), 2);
        assert_eq!(sub.edge_count(), 1);
        assert!(sub.has_edge(&3, &1));
        assert_eq!(sub.node(&1).and_then(|n| n.data()), Some(&"one"));
    }

    #[test]
    fn test_index_level_access() {
        let mut graph = directed();
        graph.add_weighted_edge("a", "b", 0.5).unwrap();
        graph.add_weighted_edge("a", "c", 1.5).unwrap();
        graph.remove_node(&"b");

        let a = graph.node_id(&"a").unwrap();
        assert_eq!(graph.key(a), Some(&"a"));
        assert_eq!(graph.node_bound(), 3);
        assert_eq!(graph.node_ids().count(), 2);

        let out: Vec<(NodeId, f64)> = graph.out_edges(a).collect();
        assert_eq!(out, vec![(NodeId::new(2), 1.5)]);

        let succ: Vec<NodeId> = graph.successors(a).collect();
        assert_eq!(succ, vec![NodeId::new(2)]);
        let pred: Vec<NodeId> = graph.predecessors(NodeId::new(2)).collect();
        assert_eq!(pred, vec![a]);
        assert_eq!(graph.successors(NodeId::new(1)).count(), 0);
    }
}
