//! Trait definitions for index-level graph access.
//!
//! The analysis routines in [`algorithms`](crate::algorithms) work on dense [`NodeId`]
//! indices rather than caller keys. These traits describe the minimal surface they need, so
//! index-level traversal such as [`bfs`](crate::algorithms::bfs) can run over any structure
//! that exposes it.
//!
//! - [`GraphBase`] - Node count, arena bound and node iteration
//! - [`Successors`] - Forward adjacency
//! - [`Predecessors`] - Backward adjacency
//!
//! For undirected graphs successors and predecessors are the same neighbour set.

use crate::graph::NodeId;

/// Base trait providing core graph properties.
///
/// # Required Methods
///
/// - [`node_count`](GraphBase::node_count) - Returns the number of live nodes
/// - [`node_bound`](GraphBase::node_bound) - Returns an exclusive upper bound on node indices
/// - [`node_ids`](GraphBase::node_ids) - Returns an iterator over all live node IDs
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an exclusive upper bound for every [`NodeId::index`] in the graph.
    ///
    /// Removed nodes leave gaps in the index space, so this can exceed
    /// [`node_count`](GraphBase::node_count). Per-node arrays must be sized by this value.
    fn node_bound(&self) -> usize;

    /// Returns an iterator over all live node identifiers in ascending index order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, GraphConfig, NodeId};
/// use graphscope::graph::Successors;
///
/// let mut graph: Graph<&str> = Graph::new(GraphConfig::directed());
/// graph.add_edge("A", "B")?;
/// graph.add_edge("A", "C")?;
///
/// let a = graph.node_id(&"A").unwrap();
/// let successors: Vec<NodeId> = graph.successors(a).collect();
/// assert_eq!(successors.len(), 2);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the distinct successor nodes of the given node.
    ///
    /// An unknown node yields an empty iterator.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the distinct predecessor nodes of the given node.
    ///
    /// An unknown node yields an empty iterator.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal adjacency-list graph for exercising the traits in isolation
    struct TestGraph {
        node_count: usize,
        edges: Vec<(NodeId, NodeId)>,
    }

    impl GraphBase for TestGraph {
        fn node_count(&self) -> usize {
            self.node_count
        }

        fn node_bound(&self) -> usize {
            self.node_count
        }

        fn node_ids(&self) -> impl Iterator<Item = NodeId> {
            (0..self.node_count).map(NodeId::new)
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.edges
                .iter()
                .filter(move |(src, _)| *src == node)
                .map(|(_, dst)| *dst)
        }
    }

    impl Predecessors for TestGraph {
        fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.edges
                .iter()
                .filter(move |(_, dst)| *dst == node)
                .map(|(src, _)| *src)
        }
    }

    #[test]
    fn test_graph_base() {
        let graph = TestGraph {
            node_count: 5,
            edges: vec![],
        };
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.node_bound(), 5);

        let ids: Vec<NodeId> = graph.node_ids().collect();
        assert_eq!(ids.first(), Some(&NodeId::new(0)));
        assert_eq!(ids.last(), Some(&NodeId::new(4)));
    }

    #[test]
    fn test_successors_and_predecessors() {
        let graph = TestGraph {
            node_count: 3,
            edges: vec![
                (NodeId::new(0), NodeId::new(2)),
                (NodeId::new(1), NodeId::new(2)),
            ],
        };

        let succ: Vec<NodeId> = graph.successors(NodeId::new(0)).collect();
        assert_eq!(succ, vec![NodeId::new(2)]);

        let pred: Vec<NodeId> = graph.predecessors(NodeId::new(2)).collect();
        assert_eq!(pred, vec![NodeId::new(0), NodeId::new(1)]);

        assert!(graph.predecessors(NodeId::new(0)).next().is_none());
    }
}
