//! Breadth-first traversal, unweighted shortest paths and two-colouring.
//!
//! Two layers live here:
//!
//! - [`bfs`] - A lazy index-level iterator over any [`Successors`] implementation
//! - Keyed entry points ([`breadth_first_search`], [`shortest_path_bfs`],
//!   [`single_source_shortest_path_bfs`], [`is_bipartite`], [`connected_components`]) that
//!   resolve caller keys, run the search over [`NodeId`] arrays and map results back
//!
//! Directed graphs are traversed along outgoing edges. [`connected_components`] and the
//! two-colouring ignore direction.
//!
//! # Iteration vs Collection
//!
//! [`bfs`] returns an iterator for lazy evaluation, avoiding unnecessary allocations when only
//! partial traversal is needed. The keyed functions return collected results since they
//! report predecessor trees and levels anyway.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    graph::{Graph, NodeId, NodeKey, Successors},
    Error, Result,
};

/// Breadth-first search iterator.
///
/// This iterator performs a breadth-first traversal starting from a given node.
/// It visits each reachable node exactly once, exploring all nodes at distance d
/// before visiting any node at distance d+1.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let bound = graph.node_bound();
        if start.index() >= bound || !graph.node_ids().any(|id| id == start) {
            return BfsIterator {
                graph,
                queue: VecDeque::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; bound];
        visited[start.index()] = true;

        let mut queue = VecDeque::new();
        queue.push_back(start);

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for succ in self.graph.successors(node) {
            if let Some(seen) = self.visited.get_mut(succ.index()) {
                if !*seen {
                    *seen = true;
                    self.queue.push_back(succ);
                }
            }
        }

        Some(node)
    }
}

impl<G: Successors> Clone for BfsIterator<'_, G> {
    fn clone(&self) -> Self {
        BfsIterator {
            graph: self.graph,
            queue: self.queue.clone(),
            visited: self.visited.clone(),
        }
    }
}

/// Returns a breadth-first search iterator starting from the given node.
///
/// The iterator visits each reachable node exactly once, exploring nodes
/// in order of increasing distance from the start. A start index that does not name a
/// live node yields an empty iterator.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node for traversal
///
/// # Complexity
///
/// - Time: O(V + E) where V is the number of vertices and E is the number of edges
/// - Space: O(V) for the visited set and queue
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, GraphConfig, NodeId};
/// use graphscope::algorithms::bfs;
///
/// let mut graph: Graph<&str> = Graph::new(GraphConfig::directed());
/// graph.add_edge("A", "B")?;
/// graph.add_edge("A", "C")?;
/// graph.add_edge("B", "D")?;
/// graph.add_edge("C", "D")?;
///
/// let a = graph.node_id(&"A").unwrap();
/// let order: Vec<NodeId> = bfs(&graph, a).collect();
/// assert_eq!(order.len(), 4);
/// assert_eq!(graph.key(order[3]), Some(&"D"));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

/// Options for [`breadth_first_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsOptions<K> {
    /// Stop once this node is dequeued. A target absent from the graph never stops the
    /// search.
    pub target: Option<K>,
}

impl<K> Default for BfsOptions<K> {
    fn default() -> Self {
        BfsOptions { target: None }
    }
}

impl<K> BfsOptions<K> {
    /// Creates options for a full traversal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the early-termination target.
    #[must_use]
    pub fn with_target(mut self, target: K) -> Self {
        self.target = Some(target);
        self
    }
}

/// Outcome of a keyed breadth-first search.
///
/// Only dequeued nodes are reported. With an early-termination target, nodes that were
/// discovered but not yet dequeued when the target came off the queue are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BfsResult<K> {
    /// Every visited node
    pub visited: BTreeSet<K>,
    /// Visited nodes in visitation order
    pub order: Vec<K>,
    /// Parent of each visited node in the BFS tree, `None` for the start node
    pub predecessors: BTreeMap<K, Option<K>>,
    /// Hop distance of each visited node from the start node
    pub levels: BTreeMap<K, usize>,
}

/// Outcome of a single-pair unweighted shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ShortestPath<K> {
    /// Hop count, or `None` when the target is unreachable
    pub distance: Option<usize>,
    /// Nodes from source to target inclusive; empty when unreachable
    pub path: Vec<K>,
    /// Parents recorded by the search
    pub predecessors: BTreeMap<K, Option<K>>,
}

impl<K> ShortestPath<K> {
    /// Returns `true` if a path was found.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.distance.is_some()
    }
}

/// Runs a breadth-first search from `start`.
///
/// Equivalent to [`breadth_first_search_with`] with a no-op visitor.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` is not in the graph.
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, GraphConfig};
/// use graphscope::algorithms::{breadth_first_search, BfsOptions};
///
/// let mut graph: Graph<u32> = Graph::new(GraphConfig::undirected());
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
/// graph.add_edge(2, 3)?;
///
/// let result = breadth_first_search(&graph, &0, &BfsOptions::new())?;
/// assert_eq!(result.order, vec![0, 1, 2, 3]);
/// assert_eq!(result.levels[&3], 3);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn breadth_first_search<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    start: &K,
    options: &BfsOptions<K>,
) -> Result<BfsResult<K>> {
    breadth_first_search_with(graph, start, options, |_, _| {})
}

/// Runs a breadth-first search from `start`, calling `visit(node, level)` as each node is
/// dequeued, before its successors are discovered.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` is not in the graph.
pub fn breadth_first_search_with<K, N, E, F>(
    graph: &Graph<K, N, E>,
    start: &K,
    options: &BfsOptions<K>,
    mut visit: F,
) -> Result<BfsResult<K>>
where
    K: NodeKey,
    F: FnMut(&K, usize),
{
    let start_id = graph
        .node_id(start)
        .ok_or_else(|| Error::node_not_found(start))?;
    let target_id = options.target.as_ref().and_then(|t| graph.node_id(t));

    let search = LevelSearch::run_with(graph, start_id, target_id, |node, level| {
        if let Some(key) = graph.key(node) {
            visit(key, level);
        }
    });

    let mut result = BfsResult {
        visited: BTreeSet::new(),
        order: Vec::with_capacity(search.order.len()),
        predecessors: BTreeMap::new(),
        levels: BTreeMap::new(),
    };

    for &node in &search.order {
        let (Some(key), Some(level)) = (graph.key(node), search.level[node.index()]) else {
            continue;
        };
        let parent = search.parent[node.index()].and_then(|p| graph.key(p)).cloned();
        result.visited.insert(key.clone());
        result.order.push(key.clone());
        result.predecessors.insert(key.clone(), parent);
        result.levels.insert(key.clone(), level);
    }

    Ok(result)
}

/// Finds a shortest path by hop count from `source` to `target`.
///
/// `source == target` yields a zero-length single-node path without searching. An
/// unreachable target yields a result with `distance == None` and an empty path.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if either endpoint is not in the graph.
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, GraphConfig};
/// use graphscope::algorithms::shortest_path_bfs;
///
/// let mut graph: Graph<u32> = Graph::new(GraphConfig::undirected());
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
/// graph.add_edge(2, 3)?;
///
/// let path = shortest_path_bfs(&graph, &0, &3)?;
/// assert_eq!(path.distance, Some(3));
/// assert_eq!(path.path, vec![0, 1, 2, 3]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn shortest_path_bfs<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    source: &K,
    target: &K,
) -> Result<ShortestPath<K>> {
    let source_id = graph
        .node_id(source)
        .ok_or_else(|| Error::node_not_found(source))?;
    let target_id = graph
        .node_id(target)
        .ok_or_else(|| Error::node_not_found(target))?;

    if source_id == target_id {
        return Ok(ShortestPath {
            distance: Some(0),
            path: vec![source.clone()],
            predecessors: BTreeMap::from([(source.clone(), None)]),
        });
    }

    let search = LevelSearch::run(graph, source_id, Some(target_id));
    let predecessors = search.discovered_predecessors(graph);

    let Some(distance) = search.level[target_id.index()] else {
        return Ok(ShortestPath {
            distance: None,
            path: Vec::new(),
            predecessors,
        });
    };

    let path = search
        .path_to(target_id)
        .into_iter()
        .filter_map(|id| graph.key(id).cloned())
        .collect();

    Ok(ShortestPath {
        distance: Some(distance),
        path,
        predecessors,
    })
}

/// Computes a shortest path by hop count from `source` to every reachable node.
///
/// Each entry carries its own copy of the predecessor map as it stood when that node was
/// dequeued, so entries stay valid independently of one another. The source maps to a
/// zero-length path.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `source` is not in the graph.
pub fn single_source_shortest_path_bfs<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    source: &K,
) -> Result<BTreeMap<K, ShortestPath<K>>> {
    let source_id = graph
        .node_id(source)
        .ok_or_else(|| Error::node_not_found(source))?;

    let bound = graph.node_bound();
    let mut level: Vec<Option<usize>> = vec![None; bound];
    let mut predecessors: BTreeMap<K, Option<K>> = BTreeMap::from([(source.clone(), None)]);
    let mut paths: Vec<Vec<K>> = vec![Vec::new(); bound];
    let mut results = BTreeMap::new();

    level[source_id.index()] = Some(0);
    paths[source_id.index()] = vec![source.clone()];
    let mut queue = VecDeque::from([source_id]);

    while let Some(node) = queue.pop_front() {
        let Some(key) = graph.key(node) else {
            continue;
        };
        let depth = level[node.index()].unwrap_or(0);

        for succ in graph.successor_ids(node) {
            if level[succ.index()].is_some() {
                continue;
            }
            level[succ.index()] = Some(depth + 1);
            let Some(succ_key) = graph.key(succ) else {
                continue;
            };
            let mut path = paths[node.index()].clone();
            path.push(succ_key.clone());
            paths[succ.index()] = path;
            predecessors.insert(succ_key.clone(), Some(key.clone()));
            queue.push_back(succ);
        }

        results.insert(
            key.clone(),
            ShortestPath {
                distance: Some(depth),
                path: std::mem::take(&mut paths[node.index()]),
                predecessors: predecessors.clone(),
            },
        );
    }

    Ok(results)
}

/// Tests whether an undirected graph admits a two-colouring.
///
/// Every connected component is coloured independently. A self-loop makes the graph
/// non-bipartite.
///
/// # Errors
///
/// Returns [`Error::RequiresUndirected`] for directed graphs.
pub fn is_bipartite<K: NodeKey, N, E>(graph: &Graph<K, N, E>) -> Result<bool> {
    if graph.is_directed() {
        return Err(Error::RequiresUndirected);
    }
    Ok(two_colouring(graph).is_some())
}

/// Returns the weakly connected components of a graph.
///
/// Edge direction is ignored. Components are ordered by their earliest-inserted node and
/// each component lists its nodes in insertion order.
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, GraphConfig};
/// use graphscope::algorithms::connected_components;
///
/// let mut graph: Graph<&str> = Graph::new(GraphConfig::directed());
/// graph.add_edge("a", "b")?;
/// graph.add_edge("c", "b")?;
/// graph.add_node("d");
///
/// assert_eq!(connected_components(&graph), vec![vec!["a", "b", "c"], vec!["d"]]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn connected_components<K: NodeKey, N, E>(graph: &Graph<K, N, E>) -> Vec<Vec<K>> {
    let mut seen = vec![false; graph.node_bound()];
    let mut components = Vec::new();

    for root in graph.node_ids() {
        if seen[root.index()] {
            continue;
        }
        seen[root.index()] = true;

        let mut members = vec![root];
        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            for next in graph.neighbor_ids(node) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    members.push(next);
                    queue.push_back(next);
                }
            }
        }

        members.sort_unstable();
        components.push(
            members
                .into_iter()
                .filter_map(|id| graph.key(id).cloned())
                .collect(),
        );
    }

    components
}

/// Two-colours a graph with edge direction ignored.
///
/// Returns a per-index colour (`false` for the side of each component's first node), or
/// `None` if some edge joins two nodes of the same colour.
pub(crate) fn two_colouring<K: NodeKey, N, E>(graph: &Graph<K, N, E>) -> Option<Vec<Option<bool>>> {
    let mut colour: Vec<Option<bool>> = vec![None; graph.node_bound()];

    for root in graph.node_ids() {
        if colour[root.index()].is_some() {
            continue;
        }
        colour[root.index()] = Some(false);

        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            let current = colour[node.index()]?;
            for next in graph.neighbor_ids(node) {
                match colour[next.index()] {
                    Some(c) if c == current => return None,
                    Some(_) => {}
                    None => {
                        colour[next.index()] = Some(!current);
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    Some(colour)
}

/// Hop distances from `source` along outgoing edges, bounded by an optional cutoff.
pub(crate) fn hop_distances<K: NodeKey, N, E>(
    graph: &Graph<K, N, E>,
    source: NodeId,
    cutoff: Option<f64>,
) -> Vec<Option<f64>> {
    let mut dist: Vec<Option<f64>> = vec![None; graph.node_bound()];
    dist[source.index()] = Some(0.0);

    let mut queue = VecDeque::from([(source, 0usize)]);
    while let Some((node, depth)) = queue.pop_front() {
        let next_depth = depth + 1;
        if cutoff.is_some_and(|c| next_depth as f64 > c) {
            continue;
        }
        for succ in graph.successor_ids(node) {
            if dist[succ.index()].is_none() {
                dist[succ.index()] = Some(next_depth as f64);
                queue.push_back((succ, next_depth));
            }
        }
    }

    dist
}

/// Index-level state of one level-synchronous search.
struct LevelSearch {
    order: Vec<NodeId>,
    parent: Vec<Option<NodeId>>,
    level: Vec<Option<usize>>,
}

impl LevelSearch {
    fn run<K: NodeKey, N, E>(graph: &Graph<K, N, E>, start: NodeId, target: Option<NodeId>) -> Self {
        Self::run_with(graph, start, target, |_, _| {})
    }

    /// Same as [`LevelSearch::run`], calling `on_dequeue(node, level)` as each node leaves
    /// the queue.
    fn run_with<K, N, E, F>(
        graph: &Graph<K, N, E>,
        start: NodeId,
        target: Option<NodeId>,
        mut on_dequeue: F,
    ) -> Self
    where
        K: NodeKey,
        F: FnMut(NodeId, usize),
    {
        let bound = graph.node_bound();
        let mut search = LevelSearch {
            order: Vec::new(),
            parent: vec![None; bound],
            level: vec![None; bound],
        };
        search.level[start.index()] = Some(0);

        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            let depth = search.level[node.index()].unwrap_or(0);
            search.order.push(node);
            on_dequeue(node, depth);
            if Some(node) == target {
                break;
            }

            for succ in graph.successor_ids(node) {
                if search.level[succ.index()].is_none() {
                    search.level[succ.index()] = Some(depth + 1);
                    search.parent[succ.index()] = Some(node);
                    queue.push_back(succ);
                }
            }
        }

        search
    }

    /// Parents of every node discovered so far, keyed.
    fn discovered_predecessors<K: NodeKey, N, E>(
        &self,
        graph: &Graph<K, N, E>,
    ) -> BTreeMap<K, Option<K>> {
        self.level
            .iter()
            .enumerate()
            .filter(|(_, level)| level.is_some())
            .filter_map(|(index, _)| {
                let key = graph.key(NodeId::new(index))?.clone();
                let parent = self.parent[index].and_then(|p| graph.key(p)).cloned();
                Some((key, parent))
            })
            .collect()
    }

    /// Walks parent links back from `node` and returns the path in forward order.
    fn path_to(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        let mut current = node;
        while let Some(parent) = self.parent[current.index()] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::GraphConfig, test::path_graph};

    fn create_tree_graph() -> Graph<&'static str> {
        //       A
        //      / \
        //     B   C
        //    / \   \
        //   D   E   F
        let mut graph = Graph::new(GraphConfig::directed());
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "C").unwrap();
        graph.add_edge("B", "D").unwrap();
        graph.add_edge("B", "E").unwrap();
        graph.add_edge("C", "F").unwrap();
        graph
    }

    #[test]
    fn test_bfs_iterator_tree() {
        let graph = create_tree_graph();
        let order: Vec<&str> = bfs(&graph, NodeId::new(0))
            .filter_map(|id| graph.key(id).copied())
            .collect();
        assert_eq!(order, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_bfs_iterator_invalid_start() {
        let mut graph = create_tree_graph();
        assert_eq!(bfs(&graph, NodeId::new(42)).count(), 0);

        graph.remove_node(&"B");
        assert_eq!(bfs(&graph, NodeId::new(1)).count(), 0);
    }

    #[test]
    fn test_bfs_iterator_clone_resumes() {
        let graph = create_tree_graph();
        let mut iter = bfs(&graph, NodeId::new(0));
        iter.next();
        let rest: Vec<NodeId> = iter.clone().collect();
        assert_eq!(rest.len(), 5);
        assert_eq!(iter.count(), 5);
    }

    #[test]
    fn test_breadth_first_search_path() {
        let graph = path_graph(4);
        let result = breadth_first_search(&graph, &0, &BfsOptions::new()).unwrap();

        assert_eq!(result.order, vec![0, 1, 2, 3]);
        assert_eq!(result.predecessors[&0], None);
        assert_eq!(result.predecessors[&2], Some(1));
        assert_eq!(result.levels[&3], 3);
        assert_eq!(result.visited.len(), 4);
    }

    #[test]
    fn test_breadth_first_search_stops_on_dequeue() {
        let graph = create_tree_graph();
        let options = BfsOptions::new().with_target("C");
        let result = breadth_first_search(&graph, &"A", &options).unwrap();

        // B was dequeued before C, so its children are discovered but not visited
        assert_eq!(result.order, vec!["A", "B", "C"]);
        assert!(!result.visited.contains("D"));
    }

    #[test]
    fn test_breadth_first_search_visitor() {
        let graph = create_tree_graph();
        let mut seen = Vec::new();
        breadth_first_search_with(&graph, &"B", &BfsOptions::new(), |node, level| {
            seen.push((*node, level));
        })
        .unwrap();

        assert_eq!(seen, vec![("B", 0), ("D", 1), ("E", 1)]);
    }

    #[test]
    fn test_visitor_follows_dequeue_order_up_to_target() {
        let graph = create_tree_graph();
        let options = BfsOptions::new().with_target("C");
        let mut seen = Vec::new();
        let result = breadth_first_search_with(&graph, &"A", &options, |node, level| {
            seen.push((*node, level));
        })
        .unwrap();

        assert_eq!(seen, vec![("A", 0), ("B", 1), ("C", 1)]);
        let recorded: Vec<_> = result.order.iter().map(|n| (*n, result.levels[n])).collect();
        assert_eq!(seen, recorded);
    }

    #[test]
    fn test_breadth_first_search_missing_start() {
        let graph = path_graph(2);
        let result = breadth_first_search(&graph, &9, &BfsOptions::new());
        assert!(matches!(result, Err(Error::NodeNotFound(_))));
    }

    #[test]
    fn test_shortest_path_same_node() {
        let graph = path_graph(3);
        let path = shortest_path_bfs(&graph, &1, &1).unwrap();
        assert_eq!(path.distance, Some(0));
        assert_eq!(path.path, vec![1]);
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let mut graph = create_tree_graph();
        graph.add_node("Z");

        let path = shortest_path_bfs(&graph, &"A", &"Z").unwrap();
        assert!(!path.exists());
        assert!(path.path.is_empty());
        assert_eq!(path.predecessors.len(), 6);

        let reverse = shortest_path_bfs(&graph, &"D", &"A").unwrap();
        assert_eq!(reverse.distance, None);
    }

    #[test]
    fn test_shortest_path_missing_endpoint() {
        let graph = path_graph(3);
        assert!(matches!(
            shortest_path_bfs(&graph, &0, &7),
            Err(Error::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_single_source_snapshots() {
        let graph = path_graph(4);
        let all = single_source_shortest_path_bfs(&graph, &0).unwrap();

        assert_eq!(all.len(), 4);
        assert_eq!(all[&0].distance, Some(0));
        assert_eq!(all[&0].path, vec![0]);
        assert_eq!(all[&3].path, vec![0, 1, 2, 3]);
        assert_eq!(all[&3].distance, Some(3));
        // Snapshot taken when node 1 was dequeued: 0, 1 and the newly discovered 2
        assert_eq!(all[&1].predecessors.len(), 3);
        assert_eq!(all[&3].predecessors.len(), 4);
    }

    #[test]
    fn test_is_bipartite() {
        let even = crate::test::cycle_graph(4);
        assert!(is_bipartite(&even).unwrap());

        let odd = crate::test::cycle_graph(5);
        assert!(!is_bipartite(&odd).unwrap());

        let mut looped = path_graph(2);
        looped.add_edge(1, 1).unwrap();
        assert!(!is_bipartite(&looped).unwrap());

        let directed = create_tree_graph();
        assert!(matches!(
            is_bipartite(&directed),
            Err(Error::RequiresUndirected)
        ));
    }

    #[test]
    fn test_connected_components() {
        let mut graph = path_graph(3);
        graph.add_edge(10, 11).unwrap();
        graph.add_node(20);

        let components = connected_components(&graph);
        assert_eq!(components, vec![vec![0, 1, 2], vec![10, 11], vec![20]]);
    }

    #[test]
    fn test_hop_distances_cutoff() {
        let graph = path_graph(4);
        let dist = hop_distances(&graph, NodeId::new(0), Some(2.0));
        assert_eq!(dist, vec![Some(0.0), Some(1.0), Some(2.0), None]);
    }
}
