//! k-truss by triangle-support peeling.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::AdjacencyView;
use crate::{graph::NodeKey, Result};

/// Undirected edge between dense indices, smaller index first.
type DenseEdge = (usize, usize);

fn ordered(u: usize, v: usize) -> DenseEdge {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Returns the k-truss of a view: the maximal subgraph in which every edge closes at least
/// `k - 2` triangles.
///
/// Self-loops never support a triangle and are not part of any truss. Nodes left without a
/// surviving edge are dropped from the result, so the 2-truss is the view minus its isolated
/// nodes and self-loops.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidParameter`] if `k < 2`.
///
/// # Examples
///
/// ```rust
/// use graphscope::algorithms::{k_truss, AdjacencyView};
///
/// // Two triangles sharing the edge b-c, plus a tail c-d.
/// let view: AdjacencyView<char> = [('a', 'b'), ('a', 'c'), ('b', 'c'), ('b', 'e'), ('c', 'e'), ('c', 'd')]
///     .into_iter()
///     .collect();
/// let truss = k_truss(&view, 3)?;
///
/// assert_eq!(truss.len(), 4);
/// assert!(!truss.contains(&'d'));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn k_truss<K: NodeKey>(view: &AdjacencyView<K>, k: usize) -> Result<AdjacencyView<K>> {
    if k < 2 {
        return Err(invalid_parameter!("k-truss requires k >= 2, got {}", k));
    }
    let threshold = k - 2;

    let (keys, dense) = view.dense();
    let mut adjacency: Vec<BTreeSet<usize>> = dense
        .into_iter()
        .enumerate()
        .map(|(v, neighbours)| neighbours.into_iter().filter(|&u| u != v).collect())
        .collect();

    let mut support: BTreeMap<DenseEdge, usize> = BTreeMap::new();
    for u in 0..adjacency.len() {
        for &v in adjacency[u].range(u + 1..) {
            let triangles = adjacency[u].intersection(&adjacency[v]).count();
            support.insert((u, v), triangles);
        }
    }
    #[cfg(feature = "logging")]
    let initial_edges = support.len();

    let mut queue: VecDeque<DenseEdge> = support
        .iter()
        .filter(|(_, s)| **s < threshold)
        .map(|(&edge, _)| edge)
        .collect();

    while let Some((u, v)) = queue.pop_front() {
        if support.remove(&(u, v)).is_none() {
            continue;
        }
        let shared: Vec<usize> = adjacency[u].intersection(&adjacency[v]).copied().collect();
        adjacency[u].remove(&v);
        adjacency[v].remove(&u);

        for w in shared {
            for edge in [ordered(u, w), ordered(v, w)] {
                if let Some(s) = support.get_mut(&edge) {
                    let before = *s;
                    *s = before.saturating_sub(1);
                    if before == threshold {
                        queue.push_back(edge);
                    }
                }
            }
        }
    }

    #[cfg(feature = "logging")]
    log::debug!(
        "{}-truss: kept {} of {} edges",
        k,
        support.len(),
        initial_edges
    );

    Ok(support
        .keys()
        .map(|&(u, v)| (keys[u].clone(), keys[v].clone()))
        .collect())
}
