//! Keyed graph container and index-level traversal traits.
//!
//! This module provides the [`Graph`] type every analysis in this crate operates on, plus the
//! supporting identifier types, configuration and iterators.
//!
//! # Architecture
//!
//! - **Keys and indices**: Nodes are added and queried by caller keys ([`NodeKey`]). Each
//!   node also owns a dense [`NodeId`] arena slot; algorithms size per-node arrays with
//!   [`GraphBase::node_bound`] and map results back with [`Graph::key`].
//! - **Edge arena**: Every logical edge is stored once and addressed by an [`EdgeId`].
//!   Undirected edges are linked from both endpoints; directed graphs additionally keep
//!   incoming adjacency.
//! - **Policy**: [`GraphConfig`] fixes directedness, self-loop acceptance and parallel-edge
//!   acceptance at construction.
//! - **Traits**: [`GraphBase`], [`Successors`] and [`Predecessors`] expose index-level
//!   adjacency for generic algorithms such as [`bfs`](crate::algorithms::bfs).
//!
//! # Key Components
//!
//! - [`Graph`] - The owning container
//! - [`NodeRef`] / [`EdgeRef`] - Borrowed views returned by lookups and iterators
//! - [`NodeRecord`] / [`EdgeRecord`] - Bulk ingestion shapes
//!
//! # Examples
//!
//! ```rust
//! use graphscope::{Graph, GraphConfig};
//!
//! let mut graph: Graph<u32> = Graph::new(GraphConfig::directed());
//! graph.add_edge(1, 2)?;
//! graph.add_edge(2, 3)?;
//! graph.add_edge(3, 1)?;
//!
//! assert_eq!(graph.out_degree(&1), 1);
//! assert_eq!(graph.in_degree(&1), 1);
//! assert_eq!(graph.neighbors(&1).count(), 2);
//! # Ok::<(), graphscope::Error>(())
//! ```

mod config;
mod edge;
mod iter;
mod node;
mod records;
mod store;
mod traits;

pub use config::{GraphConfig, GraphFlags};
pub use edge::{EdgeId, EdgeRef};
pub use iter::{Edges, NeighborIds, Neighbors, NodeIds, Nodes};
pub use node::{NodeId, NodeKey, NodeRef};
pub use records::{EdgeRecord, NodeRecord};
pub use store::Graph;
pub use traits::{GraphBase, Predecessors, Successors};
