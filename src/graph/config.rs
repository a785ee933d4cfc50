//! Graph construction policy.
//!
//! A [`GraphConfig`] is fixed when a [`Graph`](crate::Graph) is created and survives
//! [`Graph::clear`](crate::Graph::clear). It is backed by a small [`GraphFlags`] bitset.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Raw policy flags of a graph
    pub struct GraphFlags: u8 {
        /// Edges are ordered pairs and incoming adjacency is tracked
        const DIRECTED = 0x01;
        /// Edges with identical source and target are accepted
        const ALLOW_SELF_LOOPS = 0x02;
        /// More than one edge per endpoint pair is accepted
        const ALLOW_PARALLEL_EDGES = 0x04;
    }
}

/// Construction policy of a graph: directedness, self-loop policy and parallel-edge policy.
///
/// The defaults are undirected, self-loops allowed and parallel edges rejected.
///
/// # Examples
///
/// ```rust
/// use graphscope::GraphConfig;
///
/// let config = GraphConfig::directed().with_parallel_edges(true);
/// assert!(config.is_directed());
/// assert!(config.allows_self_loops());
/// assert!(config.allows_parallel_edges());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphConfig {
    flags: GraphFlags,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            flags: GraphFlags::ALLOW_SELF_LOOPS,
        }
    }
}

impl GraphConfig {
    /// Creates the default configuration (undirected, self-loops allowed, no parallel edges).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directed configuration with default edge policies.
    #[must_use]
    pub fn directed() -> Self {
        Self::default().with_directed(true)
    }

    /// Creates an undirected configuration with default edge policies.
    #[must_use]
    pub fn undirected() -> Self {
        Self::default()
    }

    /// Builds a configuration from raw flags.
    #[must_use]
    pub const fn from_flags(flags: GraphFlags) -> Self {
        GraphConfig { flags }
    }

    /// Sets whether edges are directed.
    #[must_use]
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.flags.set(GraphFlags::DIRECTED, directed);
        self
    }

    /// Sets whether self-loops are accepted.
    #[must_use]
    pub fn with_self_loops(mut self, allow: bool) -> Self {
        self.flags.set(GraphFlags::ALLOW_SELF_LOOPS, allow);
        self
    }

    /// Sets whether parallel edges are accepted.
    #[must_use]
    pub fn with_parallel_edges(mut self, allow: bool) -> Self {
        self.flags.set(GraphFlags::ALLOW_PARALLEL_EDGES, allow);
        self
    }

    /// Returns `true` if the graph is directed.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.flags.contains(GraphFlags::DIRECTED)
    }

    /// Returns `true` if self-loops are accepted.
    #[must_use]
    pub const fn allows_self_loops(&self) -> bool {
        self.flags.contains(GraphFlags::ALLOW_SELF_LOOPS)
    }

    /// Returns `true` if parallel edges are accepted.
    #[must_use]
    pub const fn allows_parallel_edges(&self) -> bool {
        self.flags.contains(GraphFlags::ALLOW_PARALLEL_EDGES)
    }

    /// Returns the raw flags.
    #[must_use]
    pub const fn flags(&self) -> GraphFlags {
        self.flags
    }
}
