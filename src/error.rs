use thiserror::Error;

macro_rules! invalid_parameter {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidParameter {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidParameter {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Graph mutation and every analysis routine report failures through this enum. Each variant
/// names one failure mode so callers can match on it instead of parsing messages.
///
/// # Error Categories
///
/// ## Lookup Errors
/// - [`Error::NodeNotFound`] - An operation referenced a node that is not in the graph
///
/// ## Configuration Violations
/// - [`Error::SelfLoopNotAllowed`] - A self-loop was added to a graph that forbids them
/// - [`Error::ParallelEdgeNotAllowed`] - A second edge between the same endpoints was added
///   to a graph that forbids parallel edges
///
/// ## Precondition Violations
/// - [`Error::RequiresDirected`] - The algorithm is only defined on directed graphs
/// - [`Error::RequiresUndirected`] - The algorithm is only defined on undirected graphs
/// - [`Error::NotBipartite`] - The graph has no valid two-colouring
/// - [`Error::InvalidParameter`] - An argument is outside its valid range
///
/// PageRank running out of iterations is *not* an error; it is reported through
/// [`PageRankResult::converged`](crate::algorithms::PageRankResult::converged).
///
/// # Examples
///
/// ```rust
/// use graphscope::{Error, Graph, GraphConfig};
///
/// let mut graph: Graph<&str> = Graph::new(GraphConfig::undirected().with_self_loops(false));
///
/// match graph.add_edge("a", "a") {
///     Ok(_) => println!("edge added"),
///     Err(Error::SelfLoopNotAllowed(node)) => println!("rejected self-loop on {}", node),
///     Err(e) => println!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The referenced node does not exist in the graph.
    ///
    /// Raised by traversal start nodes, shortest-path endpoints, per-node centrality
    /// queries, PageRank personalization seeds and explicitly supplied matching sides.
    /// The payload is the `Debug` rendering of the missing key.
    #[error("Node not found - {0}")]
    NodeNotFound(String),

    /// A self-loop was added while the graph configuration forbids self-loops.
    ///
    /// The edge is not applied and no endpoint is created.
    #[error("Self-loops are not allowed by this graph - {0}")]
    SelfLoopNotAllowed(String),

    /// A parallel edge was added while the graph configuration forbids parallel edges.
    ///
    /// For undirected graphs the endpoints are compared as an unordered pair.
    ///
    /// # Fields
    ///
    /// * `from` - Source endpoint of the rejected edge
    /// * `to` - Target endpoint of the rejected edge
    #[error("Parallel edges are not allowed by this graph - {from} -> {to}")]
    ParallelEdgeNotAllowed {
        /// Source endpoint of the rejected edge
        from: String,
        /// Target endpoint of the rejected edge
        to: String,
    },

    /// The algorithm requires a directed graph.
    #[error("This operation requires a directed graph")]
    RequiresDirected,

    /// The algorithm requires an undirected graph.
    #[error("This operation requires an undirected graph")]
    RequiresUndirected,

    /// The graph is not bipartite and no partition was supplied.
    #[error("The graph is not bipartite")]
    NotBipartite,

    /// An argument was outside of its valid domain.
    ///
    /// Covers damping factors outside `[0, 1]`, negative edge weights for
    /// weight-sensitive algorithms, empty seed sets and `k < 2` for k-truss.
    ///
    /// # Fields
    ///
    /// * `message` - Description of the rejected parameter
    /// * `file` - Source file where the check failed
    /// * `line` - Source line where the check failed
    #[error("Invalid parameter - {file}:{line}: {message}")]
    InvalidParameter {
        /// The message to be printed for the InvalidParameter error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}

impl Error {
    /// Builds a [`Error::NodeNotFound`] from any debuggable key.
    pub(crate) fn node_not_found<K: std::fmt::Debug>(key: &K) -> Self {
        Error::NodeNotFound(format!("{key:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_formats_key() {
        let err = Error::node_not_found(&"missing");
        assert_eq!(err.to_string(), "Node not found - \"missing\"");
    }

    #[test]
    fn test_parallel_edge_message() {
        let err = Error::ParallelEdgeNotAllowed {
            from: "1".to_string(),
            to: "2".to_string(),
        };
        assert!(err.to_string().contains("1 -> 2"));
    }

    #[test]
    fn test_invalid_parameter_macro_captures_location() {
        let err = invalid_parameter!("damping factor {} outside [0, 1]", 1.5);
        match err {
            Error::InvalidParameter {
                message,
                file,
                line,
            } => {
                assert_eq!(message, "damping factor 1.5 outside [0, 1]");
                assert!(file.ends_with("error.rs"));
                assert!(line > 0);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
