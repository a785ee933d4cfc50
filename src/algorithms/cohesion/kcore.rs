//! Core decomposition by bucket peeling (Batagelj-Zaversnik).

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::Serialize;

use super::AdjacencyView;
use crate::graph::NodeKey;

/// Coreness of every node of an [`AdjacencyView`].
///
/// The coreness of a node is the largest `k` such that the node belongs to the k-core, the
/// maximal subgraph in which every node has at least `k` neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CoreDecomposition<K: Ord> {
    /// Node -> coreness.
    pub coreness: BTreeMap<K, usize>,
    /// Largest coreness in the view, 0 when empty.
    pub max_core: usize,
    /// Nodes grouped by exact coreness.
    pub cores: BTreeMap<usize, BTreeSet<K>>,
}

impl<K: NodeKey> CoreDecomposition<K> {
    /// Returns the coreness of a node.
    #[must_use]
    pub fn coreness_of(&self, node: &K) -> Option<usize> {
        self.coreness.get(node).copied()
    }

    /// Returns every node with coreness of at least `k`.
    #[must_use]
    pub fn k_core(&self, k: usize) -> BTreeSet<K> {
        self.cores
            .range(k..)
            .flat_map(|(_, nodes)| nodes.iter().cloned())
            .collect()
    }
}

/// Result of one peeling pass over dense indices.
struct Peeling {
    /// Residual degree of each node at removal, which is its coreness.
    core: Vec<usize>,
    /// Nodes in removal order.
    order: Vec<usize>,
}

/// Peels nodes in ascending residual degree using counting-sort buckets.
///
/// `vert` holds the nodes ordered by current degree, `pos` is its inverse and `bin[d]` is
/// the first slot of the degree-`d` bucket. Processing `vert` left to right removes a node
/// of minimum residual degree at every step.
fn peel(adjacency: &[Vec<usize>]) -> Peeling {
    let n = adjacency.len();
    let mut degree: Vec<usize> = adjacency.iter().map(Vec::len).collect();
    let max_degree = degree.iter().copied().max().unwrap_or(0);

    let mut bin = vec![0usize; max_degree + 1];
    for &d in &degree {
        bin[d] += 1;
    }
    let mut start = 0;
    for slot in &mut bin {
        let count = *slot;
        *slot = start;
        start += count;
    }

    let mut pos = vec![0usize; n];
    let mut vert = vec![0usize; n];
    for v in 0..n {
        pos[v] = bin[degree[v]];
        vert[pos[v]] = v;
        bin[degree[v]] += 1;
    }
    for d in (1..=max_degree).rev() {
        bin[d] = bin[d - 1];
    }
    bin[0] = 0;

    for i in 0..n {
        let v = vert[i];
        for &u in &adjacency[v] {
            if degree[u] > degree[v] {
                let du = degree[u];
                let pu = pos[u];
                let pw = bin[du];
                let w = vert[pw];
                if u != w {
                    pos[u] = pw;
                    vert[pu] = w;
                    pos[w] = pu;
                    vert[pw] = u;
                }
                bin[du] += 1;
                degree[u] -= 1;
            }
        }
    }

    Peeling {
        core: degree,
        order: vert,
    }
}

/// Computes the coreness of every node in linear time.
///
/// Isolated nodes have coreness 0. A self-loop adds one to a node's starting degree but is
/// never peeled, so it can lift the node's own coreness by at most one.
///
/// # Examples
///
/// ```rust
/// use graphscope::algorithms::{core_decomposition, AdjacencyView};
///
/// let view: AdjacencyView<char> =
///     [('a', 'b'), ('b', 'c'), ('c', 'a'), ('c', 'd')].into_iter().collect();
/// let cores = core_decomposition(&view);
///
/// assert_eq!(cores.max_core, 2);
/// assert_eq!(cores.coreness_of(&'d'), Some(1));
/// ```
#[must_use]
pub fn core_decomposition<K: NodeKey>(view: &AdjacencyView<K>) -> CoreDecomposition<K> {
    let (keys, adjacency) = view.dense();
    let peeling = peel(&adjacency);

    let mut coreness = BTreeMap::new();
    let mut cores: BTreeMap<usize, BTreeSet<K>> = BTreeMap::new();
    for (key, &core) in keys.iter().zip(&peeling.core) {
        coreness.insert((*key).clone(), core);
        cores.entry(core).or_default().insert((*key).clone());
    }
    let max_core = peeling.core.iter().copied().max().unwrap_or(0);

    #[cfg(feature = "logging")]
    log::debug!(
        "core decomposition: {} nodes, max core {}, {} shells",
        keys.len(),
        max_core,
        cores.len()
    );

    CoreDecomposition {
        coreness,
        max_core,
        cores,
    }
}

/// Returns the nodes of the k-core: every node with coreness of at least `k`.
///
/// The result shrinks monotonically as `k` grows. `k = 0` returns every node.
#[must_use]
pub fn get_k_core<K: NodeKey>(view: &AdjacencyView<K>, k: usize) -> BTreeSet<K> {
    core_decomposition(view).k_core(k)
}

/// Returns the k-core as a view induced on [`get_k_core`].
#[must_use]
pub fn get_k_core_subgraph<K: NodeKey>(view: &AdjacencyView<K>, k: usize) -> AdjacencyView<K> {
    view.induced(&get_k_core(view, k))
}

/// Returns the nodes in the order they are peeled, each step removing a node of minimum
/// remaining degree. Ties go to the node whose bucket slot comes first.
#[must_use]
pub fn degeneracy_ordering<K: NodeKey>(view: &AdjacencyView<K>) -> Vec<K> {
    let (keys, adjacency) = view.dense();
    peel(&adjacency)
        .order
        .into_iter()
        .map(|v| keys[v].clone())
        .collect()
}

/// Returns the degeneracy: the largest residual degree met while peeling, equal to the
/// maximum coreness.
#[must_use]
pub fn degeneracy<K: NodeKey>(view: &AdjacencyView<K>) -> usize {
    let (_, adjacency) = view.dense();
    peel(&adjacency).core.into_iter().max().unwrap_or(0)
}
