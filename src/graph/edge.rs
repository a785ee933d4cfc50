//! Edge identifiers and borrowed edge views.
//!
//! Each logical edge lives once in the graph's edge arena and is addressed by an [`EdgeId`].
//! Undirected edges are linked from both endpoints; looking an edge up from its far endpoint
//! yields an [`EdgeRef`] whose source and target are swapped, so callers always see the edge
//! oriented the way they asked for it.

use std::fmt;

/// A strongly-typed identifier for edges within a graph.
///
/// `EdgeId` wraps a `usize` index, providing type safety to prevent
/// accidental mixing of edge indices with other integer values or node indices.
/// Edge IDs are assigned sequentially starting from 0 when edges are added to a graph
/// and are not reused after removal.
///
/// # Examples
///
/// ```rust
/// use graphscope::{EdgeId, Graph, GraphConfig};
///
/// let mut graph: Graph<&str> = Graph::new(GraphConfig::directed());
/// let edge: EdgeId = graph.add_edge("A", "B")?;
/// assert_eq!(edge, EdgeId::new(0));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    ///
    /// This constructor is primarily intended for internal use and testing.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw edge index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// A borrowed, oriented view of an edge.
///
/// For directed graphs the orientation always matches how the edge was added. For undirected
/// graphs it depends on how the edge was reached: [`Graph::edge`](crate::Graph::edge) orients
/// it from the first argument, while [`Graph::edges`](crate::Graph::edges) uses the canonical
/// orientation (`source <= target` by key ordering).
pub struct EdgeRef<'g, K, E> {
    id: EdgeId,
    source: &'g K,
    target: &'g K,
    weight: f64,
    data: Option<&'g E>,
}

impl<'g, K, E> EdgeRef<'g, K, E> {
    pub(crate) fn new(
        id: EdgeId,
        source: &'g K,
        target: &'g K,
        weight: f64,
        data: Option<&'g E>,
    ) -> Self {
        EdgeRef {
            id,
            source,
            target,
            weight,
            data,
        }
    }

    /// Returns the arena identifier of the logical edge.
    ///
    /// Both orientations of an undirected edge share the same identifier.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the source key of this orientation.
    #[must_use]
    pub fn source(&self) -> &'g K {
        self.source
    }

    /// Returns the target key of this orientation.
    #[must_use]
    pub fn target(&self) -> &'g K {
        self.target
    }

    /// Returns the edge weight (1.0 unless set explicitly).
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the payload attached to the edge, if any.
    #[must_use]
    pub fn data(&self) -> Option<&'g E> {
        self.data
    }

    /// Returns `true` if source and target are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool
    where
        K: PartialEq,
    {
        self.source == self.target
    }
}

impl<K, E> Clone for EdgeRef<'_, K, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, E> Copy for EdgeRef<'_, K, E> {}

impl<K: fmt::Debug, E: fmt::Debug> fmt::Debug for EdgeRef<'_, K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeRef")
            .field("id", &self.id)
            .field("source", self.source)
            .field("target", self.target)
            .field("weight", &self.weight)
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_roundtrip_usize() {
        let edge: EdgeId = 456usize.into();
        assert_eq!(edge.index(), 456);
        let value: usize = edge.into();
        assert_eq!(value, 456);
    }

    #[test]
    fn test_edge_id_formatting() {
        let edge = EdgeId::new(7);
        assert_eq!(format!("{edge:?}"), "EdgeId(7)");
        assert_eq!(format!("{edge}"), "e7");
    }

    #[test]
    fn test_edge_ref_accessors() {
        let (a, b) = ("a", "b");
        let label = "road";
        let edge = EdgeRef::new(EdgeId::new(3), &a, &b, 2.5, Some(&label));

        assert_eq!(edge.id(), EdgeId::new(3));
        assert_eq!(*edge.source(), "a");
        assert_eq!(*edge.target(), "b");
        assert!((edge.weight() - 2.5).abs() < f64::EPSILON);
        assert_eq!(edge.data(), Some(&"road"));
        assert!(!edge.is_self_loop());
    }

    #[test]
    fn test_edge_ref_self_loop() {
        let a = 1u32;
        let edge: EdgeRef<'_, u32, ()> = EdgeRef::new(EdgeId::new(0), &a, &a, 1.0, None);
        assert!(edge.is_self_loop());
    }
}
