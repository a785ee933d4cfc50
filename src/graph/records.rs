//! Plain record shapes for bulk graph ingestion.
//!
//! Records decouple graph construction from the container API: a loader can deserialize a
//! list of [`NodeRecord`]s and [`EdgeRecord`]s (with the `serde` feature enabled) and hand
//! them to [`Graph::from_records`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    graph::{Graph, GraphConfig, NodeKey},
    Result,
};

/// A node to ingest: its key and an optional payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeRecord<K, N = ()> {
    /// Node key
    pub id: K,
    /// Optional node payload
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: Option<N>,
}

impl<K, N> NodeRecord<K, N> {
    /// Creates a record without payload.
    pub fn new(id: K) -> Self {
        NodeRecord { id, data: None }
    }

    /// Creates a record carrying a payload.
    pub fn with_data(id: K, data: N) -> Self {
        NodeRecord {
            id,
            data: Some(data),
        }
    }
}

/// An edge to ingest. A missing weight means 1.0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeRecord<K, E = ()> {
    /// Source node key
    pub source: K,
    /// Target node key
    pub target: K,
    /// Optional weight
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: Option<f64>,
    /// Optional edge payload
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: Option<E>,
}

impl<K, E> EdgeRecord<K, E> {
    /// Creates an unweighted record without payload.
    pub fn new(source: K, target: K) -> Self {
        EdgeRecord {
            source,
            target,
            weight: None,
            data: None,
        }
    }

    /// Creates a weighted record without payload.
    pub fn weighted(source: K, target: K, weight: f64) -> Self {
        EdgeRecord {
            source,
            target,
            weight: Some(weight),
            data: None,
        }
    }
}

impl<K: NodeKey, N, E> Graph<K, N, E> {
    /// Builds a graph from node and edge records.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::SelfLoopNotAllowed`](crate::Error::SelfLoopNotAllowed) or
    /// [`Error::ParallelEdgeNotAllowed`](crate::Error::ParallelEdgeNotAllowed) raised while
    /// adding edges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphscope::{Graph, GraphConfig};
    /// use graphscope::graph::{EdgeRecord, NodeRecord};
    ///
    /// let nodes = vec![NodeRecord::with_data("a", 10u32)];
    /// let edges: Vec<EdgeRecord<&str>> = vec![EdgeRecord::new("a", "b"), EdgeRecord::weighted("b", "c", 2.0)];
    ///
    /// let graph: Graph<&str, u32> = Graph::from_records(GraphConfig::undirected(), nodes, edges)?;
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge(&"c", &"b").map(|e| e.weight()), Some(2.0));
    /// # Ok::<(), graphscope::Error>(())
    /// ```
    pub fn from_records<NI, EI>(config: GraphConfig, nodes: NI, edges: EI) -> Result<Self>
    where
        NI: IntoIterator<Item = NodeRecord<K, N>>,
        EI: IntoIterator<Item = EdgeRecord<K, E>>,
    {
        let mut graph = Graph::new(config);
        graph.extend_from_records(nodes, edges)?;
        Ok(graph)
    }

    /// Adds node and edge records to this graph.
    ///
    /// Nodes are added first, then edges in order. Edge endpoints are created if absent.
    ///
    /// # Errors
    ///
    /// Stops at the first edge rejected by the graph configuration and returns that error.
    /// Records processed before the failure stay applied.
    pub fn extend_from_records<NI, EI>(&mut self, nodes: NI, edges: EI) -> Result<()>
    where
        NI: IntoIterator<Item = NodeRecord<K, N>>,
        EI: IntoIterator<Item = EdgeRecord<K, E>>,
    {
        for record in nodes {
            match record.data {
                Some(data) => self.add_node_with_data(record.id, data),
                None => self.add_node(record.id),
            };
        }

        for record in edges {
            let weight = record.weight.unwrap_or(1.0);
            match record.data {
                Some(data) => self.add_edge_with_data(record.source, record.target, weight, data)?,
                None => self.add_weighted_edge(record.source, record.target, weight)?,
            };
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_from_records_keeps_payloads() {
        let nodes = vec![NodeRecord::with_data(1u32, "one"), NodeRecord::new(2)];
        let edges = vec![EdgeRecord {
            source: 1u32,
            target: 3,
            weight: None,
            data: Some('x'),
        }];

        let graph: Graph<u32, &str, char> =
            Graph::from_records(GraphConfig::directed(), nodes, edges).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.node(&1).and_then(|n| n.data()), Some(&"one"));
        let edge = graph.edge(&1, &3).unwrap();
        assert!((edge.weight() - 1.0).abs() < f64::EPSILON);
        assert_eq!(edge.data(), Some(&'x'));
    }

    #[test]
    fn test_extend_stops_at_first_violation() {
        let mut graph: Graph<&str> = Graph::new(GraphConfig::undirected().with_self_loops(false));
        let edges = vec![
            EdgeRecord::new("a", "b"),
            EdgeRecord::new("c", "c"),
            EdgeRecord::new("d", "e"),
        ];

        let result = graph.extend_from_records(Vec::new(), edges);
        assert!(matches!(result, Err(Error::SelfLoopNotAllowed(_))));
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.has_node(&"d"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_records_deserialize_with_defaults() {
        let json = r#"[{"source": "a", "target": "b"}, {"source": "b", "target": "c", "weight": 0.5}]"#;
        let edges: Vec<EdgeRecord<String>> = serde_json::from_str(json).unwrap();

        assert_eq!(edges[0].weight, None);
        assert_eq!(edges[1].weight, Some(0.5));

        let graph: Graph<String> =
            Graph::from_records(GraphConfig::undirected(), Vec::new(), edges).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }
}
