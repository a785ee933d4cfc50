//! Node identifiers, key bounds and borrowed node views.
//!
//! Every node in a [`Graph`](crate::Graph) is addressed two ways: by its caller-supplied
//! key (any [`NodeKey`] type such as `u32`, `&str` or `String`) and by a dense arena index,
//! [`NodeId`], that algorithms use to size per-node arrays.

use std::{fmt, hash::Hash};

/// Bound required of caller-supplied node keys.
///
/// Keys must be cloneable, hashable and totally ordered. The ordering is used to pick the
/// canonical orientation of undirected edges and to break ties deterministically in ranked
/// results. `Debug` is needed to render keys into error messages.
///
/// This trait is implemented for every type satisfying the bounds and cannot be implemented
/// manually.
pub trait NodeKey: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> NodeKey for T {}

/// A strongly-typed arena index for nodes within a graph.
///
/// `NodeId` wraps a `usize` index, providing type safety to prevent
/// accidental mixing of node indices with other integer values. Node IDs are assigned
/// sequentially starting from 0 when nodes are added to a graph and are never reused,
/// even after the node is removed.
///
/// # Usage
///
/// Node IDs are returned by [`Graph::add_node`](crate::Graph::add_node) and resolved with
/// [`Graph::node_id`](crate::Graph::node_id). They are used to:
///
/// - Index per-node arrays inside algorithms
/// - Drive the generic traversal traits ([`Successors`](crate::graph::Successors))
/// - Map results back to keys via [`Graph::key`](crate::Graph::key)
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, GraphConfig, NodeId};
///
/// let mut graph: Graph<&str> = Graph::new(GraphConfig::directed());
/// let a: NodeId = graph.add_node("A");
/// let b: NodeId = graph.add_node("B");
///
/// assert_ne!(a, b);
/// assert_eq!(graph.key(a), Some(&"A"));
/// ```
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// This constructor is primarily intended for internal use and testing.
    /// Normal usage should obtain `NodeId` values from [`Graph::add_node`](crate::Graph::add_node).
    ///
    /// # Arguments
    ///
    /// * `index` - The raw node index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    ///
    /// The index can be used to index into vectors sized by
    /// [`GraphBase::node_bound`](crate::graph::GraphBase::node_bound).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// A borrowed view of a node: its arena index, key and optional payload.
///
/// Produced by [`Graph::node`](crate::Graph::node) and the [`Graph::nodes`](crate::Graph::nodes)
/// iterator.
pub struct NodeRef<'g, K, N> {
    id: NodeId,
    key: &'g K,
    data: Option<&'g N>,
}

impl<'g, K, N> NodeRef<'g, K, N> {
    pub(crate) fn new(id: NodeId, key: &'g K, data: Option<&'g N>) -> Self {
        NodeRef { id, key, data }
    }

    /// Returns the arena index of the node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the caller-supplied key of the node.
    #[must_use]
    pub fn key(&self) -> &'g K {
        self.key
    }

    /// Returns the payload attached when the node was first added, if any.
    #[must_use]
    pub fn data(&self) -> Option<&'g N> {
        self.data
    }
}

impl<K, N> Clone for NodeRef<'_, K, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, N> Copy for NodeRef<'_, K, N> {}

impl<K: fmt::Debug, N: fmt::Debug> fmt::Debug for NodeRef<'_, K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", self.key)
            .field("data", &self.data)
            .finish()
    }
}
