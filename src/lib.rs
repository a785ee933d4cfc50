// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphscope
//!
//! An in-memory graph analytics core: a mutable directed or undirected graph plus a suite of
//! deterministic, single-threaded algorithms that run over it.
//!
//! ## Features
//!
//! - **Graph** - Generic over node key, node payload and edge payload, with self-loop and
//!   parallel-edge policies fixed at construction
//! - **Traversal** - Breadth-first search, unweighted shortest paths, bipartite test
//! - **Centrality** - Closeness and harmonic centrality, PageRank with personalization
//! - **Matching** - Bipartite partition and maximum matching
//! - **Cohesion** - Linear-time core decomposition, degeneracy ordering, k-truss
//! - **Link prediction** - Common-neighbour scoring and evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use graphscope::prelude::*;
//!
//! let mut graph: Graph<u32> = Graph::undirected();
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! graph.add_edge(2, 3)?;
//!
//! let path = shortest_path_bfs(&graph, &0, &3)?;
//! assert_eq!(path.distance, Some(3));
//! assert_eq!(path.path, vec![0, 1, 2, 3]);
//!
//! let cores = core_decomposition(&AdjacencyView::from(&graph));
//! assert_eq!(cores.max_core, 1);
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ## Cargo Features
//!
//! - `logging` (default) - Emit summaries through the [`log`](https://docs.rs/log) facade
//! - `serde` - `Serialize` for results, `Serialize`/`Deserialize` for ingestion records
//!
//! ## Determinism
//!
//! No algorithm uses randomness. Per-node results are returned in ordered maps, and every
//! ranking breaks equal scores by ascending node key, so repeated runs on the same graph
//! produce identical output.
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! cargo +nightly fuzz run graph_ops --release
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo test --all-features
//! cargo bench
//! ```

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph: Graph<&str> = Graph::new(GraphConfig::directed());
/// graph.add_edge("a", "b")?;
/// graph.add_edge("b", "a")?;
/// let ranks = pagerank(&graph, &PageRankConfig::default())?;
/// assert!(ranks.converged);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub mod prelude;

/// The graph data structure.
///
/// # Key Types
///
/// - [`Graph`] - Arena-backed adjacency storage keyed by caller-chosen node keys
/// - [`GraphConfig`] - Directedness and edge policies
/// - [`NodeId`] / [`EdgeId`] - Dense arena indices for index-level algorithms
/// - [`graph::NodeRecord`] / [`graph::EdgeRecord`] - Ingestion records
pub mod graph;

/// Analytics algorithms: traversal, centrality, matching, cohesion and link prediction.
pub mod algorithms;

/// `graphscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `graphscope` Error type
///
/// See [`Error`] for the failure taxonomy.
pub use error::Error;

/// Core graph types.
pub use graph::{EdgeId, Graph, GraphConfig, NodeId};
