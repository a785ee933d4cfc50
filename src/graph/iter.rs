//! Lazy, restartable iterators over graph contents.
//!
//! Each call to [`Graph::nodes`](crate::Graph::nodes), [`Graph::edges`](crate::Graph::edges)
//! or [`Graph::neighbors`](crate::Graph::neighbors) returns a fresh iterator that walks the
//! arena with an explicit cursor. The iterators borrow the graph, so it cannot be mutated
//! while one is alive, and they are cheap to [`Clone`] to restart a walk from the
//! current position.

use std::{
    collections::btree_map,
    iter::{Enumerate, Peekable},
    slice,
};

use crate::graph::{
    store::{EdgeSlot, NodeSlot},
    EdgeId, EdgeRef, Graph, NodeId, NodeKey, NodeRef,
};

type AdjacencyKeys<'g> = Peekable<btree_map::Keys<'g, NodeId, Vec<EdgeId>>>;

/// Iterator over the live nodes of a graph, in insertion order.
pub struct Nodes<'g, K, N> {
    inner: Enumerate<slice::Iter<'g, Option<NodeSlot<K, N>>>>,
    remaining: usize,
}

impl<'g, K, N> Nodes<'g, K, N> {
    pub(crate) fn new(slots: &'g [Option<NodeSlot<K, N>>], remaining: usize) -> Self {
        Nodes {
            inner: slots.iter().enumerate(),
            remaining,
        }
    }
}

impl<'g, K, N> Iterator for Nodes<'g, K, N> {
    type Item = NodeRef<'g, K, N>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.inner.find_map(|(index, slot)| {
            slot.as_ref()
                .map(|slot| NodeRef::new(NodeId::new(index), &slot.key, slot.data.as_ref()))
        })?;
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, N> ExactSizeIterator for Nodes<'_, K, N> {}

impl<K, N> Clone for Nodes<'_, K, N> {
    fn clone(&self) -> Self {
        Nodes {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

/// Iterator over the arena indices of the live nodes of a graph.
pub struct NodeIds<'g, K, N> {
    inner: Enumerate<slice::Iter<'g, Option<NodeSlot<K, N>>>>,
    remaining: usize,
}

impl<'g, K, N> NodeIds<'g, K, N> {
    pub(crate) fn new(slots: &'g [Option<NodeSlot<K, N>>], remaining: usize) -> Self {
        NodeIds {
            inner: slots.iter().enumerate(),
            remaining,
        }
    }
}

impl<K, N> Iterator for NodeIds<'_, K, N> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self
            .inner
            .find_map(|(index, slot)| slot.as_ref().map(|_| NodeId::new(index)))?;
        self.remaining -= 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, N> ExactSizeIterator for NodeIds<'_, K, N> {}

impl<K, N> Clone for NodeIds<'_, K, N> {
    fn clone(&self) -> Self {
        NodeIds {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

/// Iterator over the logical edges of a graph, in insertion order.
///
/// Undirected edges are yielded once each, oriented so that `source <= target` by key
/// ordering. Directed edges keep the orientation they were added with.
pub struct Edges<'g, K, N, E> {
    graph: &'g Graph<K, N, E>,
    inner: Enumerate<slice::Iter<'g, Option<EdgeSlot<E>>>>,
}

impl<'g, K, N, E> Edges<'g, K, N, E> {
    pub(crate) fn new(graph: &'g Graph<K, N, E>, edges: &'g [Option<EdgeSlot<E>>]) -> Self {
        Edges {
            graph,
            inner: edges.iter().enumerate(),
        }
    }
}

impl<'g, K: NodeKey, N, E> Iterator for Edges<'g, K, N, E> {
    type Item = EdgeRef<'g, K, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.inner.find_map(|(index, slot)| {
            let edge = slot.as_ref()?;
            let mut source = graph.key(edge.source)?;
            let mut target = graph.key(edge.target)?;
            if !graph.is_directed() && target < source {
                std::mem::swap(&mut source, &mut target);
            }
            Some(EdgeRef::new(
                EdgeId::new(index),
                source,
                target,
                edge.weight,
                edge.data.as_ref(),
            ))
        })
    }
}

impl<K, N, E> Clone for Edges<'_, K, N, E> {
    fn clone(&self) -> Self {
        Edges {
            graph: self.graph,
            inner: self.inner.clone(),
        }
    }
}

/// Iterator over distinct adjacent node indices.
///
/// Walks one adjacency map, or merges the outgoing and incoming maps of a directed node so
/// that a node adjacent in both directions is reported once. Output is in ascending
/// [`NodeId`] order.
#[derive(Clone)]
pub struct NeighborIds<'g> {
    first: Option<AdjacencyKeys<'g>>,
    second: Option<AdjacencyKeys<'g>>,
}

impl<'g> NeighborIds<'g> {
    pub(crate) fn empty() -> Self {
        NeighborIds {
            first: None,
            second: None,
        }
    }

    pub(crate) fn single(map: &'g btree_map::BTreeMap<NodeId, Vec<EdgeId>>) -> Self {
        NeighborIds {
            first: Some(map.keys().peekable()),
            second: None,
        }
    }

    pub(crate) fn merged(
        first: &'g btree_map::BTreeMap<NodeId, Vec<EdgeId>>,
        second: &'g btree_map::BTreeMap<NodeId, Vec<EdgeId>>,
    ) -> Self {
        NeighborIds {
            first: Some(first.keys().peekable()),
            second: Some(second.keys().peekable()),
        }
    }

    fn peek(keys: &mut Option<AdjacencyKeys<'g>>) -> Option<NodeId> {
        keys.as_mut().and_then(|it| it.peek().map(|id| **id))
    }

    fn advance(keys: &mut Option<AdjacencyKeys<'g>>) {
        if let Some(it) = keys.as_mut() {
            it.next();
        }
    }
}

impl Iterator for NeighborIds<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match (Self::peek(&mut self.first), Self::peek(&mut self.second)) {
            (Some(a), Some(b)) => {
                if a <= b {
                    Self::advance(&mut self.first);
                }
                if b <= a {
                    Self::advance(&mut self.second);
                }
                Some(a.min(b))
            }
            (Some(a), None) => {
                Self::advance(&mut self.first);
                Some(a)
            }
            (None, Some(b)) => {
                Self::advance(&mut self.second);
                Some(b)
            }
            (None, None) => None,
        }
    }
}

/// Iterator over the keys of distinct adjacent nodes.
pub struct Neighbors<'g, K, N, E> {
    graph: &'g Graph<K, N, E>,
    ids: NeighborIds<'g>,
}

impl<'g, K, N, E> Neighbors<'g, K, N, E> {
    pub(crate) fn new(graph: &'g Graph<K, N, E>, ids: NeighborIds<'g>) -> Self {
        Neighbors { graph, ids }
    }
}

impl<'g, K: NodeKey, N, E> Iterator for Neighbors<'g, K, N, E> {
    type Item = &'g K;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.ids.find_map(|id| graph.key(id))
    }
}

impl<K, N, E> Clone for Neighbors<'_, K, N, E> {
    fn clone(&self) -> Self {
        Neighbors {
            graph: self.graph,
            ids: self.ids.clone(),
        }
    }
}
