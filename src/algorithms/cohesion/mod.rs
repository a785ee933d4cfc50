//! Cohesive subgraph analysis on undirected neighbour-set views.
//!
//! These routines work on an [`AdjacencyView`] instead of a [`Graph`](crate::Graph): edge
//! direction, weights and parallel edges do not affect cohesion, and a view can also be
//! built from adjacency data that never lived in a graph.
//!
//! | Algorithm | Time Complexity |
//! |-----------|-----------------|
//! | [`core_decomposition`] | O(V + E) |
//! | [`degeneracy_ordering`] | O(V + E) |
//! | [`k_truss`] | O(E^1.5 log V) |

mod kcore;
mod truss;
mod view;

pub use kcore::{
    core_decomposition, degeneracy, degeneracy_ordering, get_k_core, get_k_core_subgraph,
    CoreDecomposition,
};
pub use truss::k_truss;
pub use view::{to_undirected, AdjacencyView};
