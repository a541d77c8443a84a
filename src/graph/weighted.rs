use crate::data_structures::NodeArena;
use crate::graph::traits::{Graph, MutableGraph};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Whether edges are one-way or symmetric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Directed,
    Undirected,
}

/// A weighted multigraph over arbitrary node identities, using adjacency lists
///
/// Nodes are interned in first-seen order, which fixes the iteration order used by
/// every algorithm in this crate. Parallel edges are kept as given.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    direction: Direction,

    /// Node identities by vertex ID
    nodes: NodeArena<N>,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Logical edge count; an undirected edge counts once
    edge_count: usize,
}

impl<N, W> WeightedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new(direction: Direction) -> Self {
        WeightedGraph {
            direction,
            nodes: NodeArena::new(),
            outgoing_edges: Vec::new(),
            edge_count: 0,
        }
    }

    pub fn directed() -> Self {
        Self::new(Direction::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Direction::Undirected)
    }

    /// Creates a new graph with room for the specified number of vertices
    pub fn with_capacity(direction: Direction, vertices: usize) -> Self {
        WeightedGraph {
            direction,
            nodes: NodeArena::with_capacity(vertices),
            outgoing_edges: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(direction: Direction, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = Self::new(direction);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Node identities in vertex-ID order
    pub fn nodes(&self) -> &[N] {
        self.nodes.as_slice()
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .iter()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }
}

impl<N, W> Graph<W> for WeightedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    type Node = N;

    fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        self.direction == Direction::Directed
    }

    fn node(&self, vertex: usize) -> Option<&N> {
        self.nodes.get(vertex)
    }

    fn vertex_of(&self, node: &N) -> Option<usize> {
        self.nodes.index_of(node)
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<N, W> MutableGraph<W> for WeightedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    fn add_node(&mut self, node: N) -> usize {
        let id = self.nodes.intern(node);
        if id == self.outgoing_edges.len() {
            self.outgoing_edges.push(Vec::new());
        }
        id
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> (usize, usize) {
        let u = self.add_node(from);
        let v = self.add_node(to);

        self.outgoing_edges[u].push((v, weight));
        if self.direction == Direction::Undirected && u != v {
            self.outgoing_edges[v].push((u, weight));
        }
        self.edge_count += 1;

        (u, v)
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let (u, v) = match (self.nodes.index_of(from), self.nodes.index_of(to)) {
            (Some(u), Some(v)) => (u, v),
            _ => return false,
        };

        let len_before = self.outgoing_edges[u].len();
        self.outgoing_edges[u].retain(|(target, _)| *target != v);
        let removed = len_before - self.outgoing_edges[u].len();

        if self.direction == Direction::Undirected && u != v {
            self.outgoing_edges[v].retain(|(target, _)| *target != u);
        }

        self.edge_count -= removed;
        removed > 0
    }
}
