use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::data_structures::{NodeArena, SquareMatrix};

/// Result of an all-pairs shortest path computation
///
/// Holds the four tables keyed by dense vertex IDs together with the node
/// identities, so every query can be made with the original nodes. Built once
/// per computation and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsResult<N, W> {
    nodes: NodeArena<N>,
    distance: SquareMatrix<W>,
    next_node: SquareMatrix<Option<usize>>,
    shortest_paths: SquareMatrix<Vec<usize>>,
    infinite_pairs: Vec<(usize, usize)>,
}

impl<N, W> AllPairsResult<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    pub(crate) fn new(
        nodes: NodeArena<N>,
        distance: SquareMatrix<W>,
        next_node: SquareMatrix<Option<usize>>,
        shortest_paths: SquareMatrix<Vec<usize>>,
        infinite_pairs: Vec<(usize, usize)>,
    ) -> Self {
        AllPairsResult {
            nodes,
            distance,
            next_node,
            shortest_paths,
            infinite_pairs,
        }
    }

    /// Nodes in the iteration order used for every table
    pub fn nodes(&self) -> &[N] {
        self.nodes.as_slice()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn vertex_of(&self, node: &N) -> Option<usize> {
        self.nodes.index_of(node)
    }

    /// Shortest distance, infinite if unreachable; `None` if either node is unknown
    pub fn distance(&self, from: &N, to: &N) -> Option<W> {
        let (u, v) = self.pair(from, to)?;
        Some(self.distance[(u, v)])
    }

    /// First hop from `from` toward `to`, `None` if there is no route or `from == to`
    pub fn next_node(&self, from: &N, to: &N) -> Option<&N> {
        let (u, v) = self.pair(from, to)?;
        self.next_node[(u, v)].and_then(|hop| self.nodes.get(hop))
    }

    /// Route from `from` to `to` inclusive; empty if unreachable, `None` if a node is unknown
    pub fn shortest_path(&self, from: &N, to: &N) -> Option<Vec<&N>> {
        let (u, v) = self.pair(from, to)?;
        Some(
            self.shortest_paths[(u, v)]
                .iter()
                .filter_map(|&vertex| self.nodes.get(vertex))
                .collect(),
        )
    }

    pub fn is_reachable(&self, from: &N, to: &N) -> bool {
        self.distance(from, to).map_or(false, |d| !d.is_infinite())
    }

    /// Pairs with no route, in row-major node order
    pub fn infinite_pairs(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.infinite_pairs
            .iter()
            .filter_map(|&(u, v)| Some((self.nodes.get(u)?, self.nodes.get(v)?)))
    }

    pub fn infinite_pair_count(&self) -> usize {
        self.infinite_pairs.len()
    }

    /// Dense distance table by vertex ID
    pub fn distance_matrix(&self) -> &SquareMatrix<W> {
        &self.distance
    }

    /// Dense next-hop table by vertex ID
    pub fn next_node_matrix(&self) -> &SquareMatrix<Option<usize>> {
        &self.next_node
    }

    /// Dense route table by vertex ID
    pub fn path_matrix(&self) -> &SquareMatrix<Vec<usize>> {
        &self.shortest_paths
    }

    pub fn infinite_pair_indices(&self) -> &[(usize, usize)] {
        &self.infinite_pairs
    }

    fn pair(&self, from: &N, to: &N) -> Option<(usize, usize)> {
        Some((self.nodes.index_of(from)?, self.nodes.index_of(to)?))
    }
}
