use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

/// Trait representing a weighted graph whose nodes are addressed by dense vertex IDs
///
/// Vertex IDs run from `0` to `vertex_count() - 1`; each maps to a stable node
/// identity through [`Graph::node`]. Undirected graphs report every edge in both
/// directions from [`Graph::outgoing_edges`].
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Node identity type
    type Node: Clone + Eq + Hash + Debug;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph (undirected edges count once)
    fn edge_count(&self) -> usize;

    /// Returns true if edges are one-way
    fn is_directed(&self) -> bool;

    /// Returns the node identity for a vertex ID
    fn node(&self, vertex: usize) -> Option<&Self::Node>;

    /// Returns the vertex ID for a node identity
    fn vertex_of(&self, node: &Self::Node) -> Option<usize>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of an edge if it exists; the lightest one among parallel edges
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .fold(None, |best: Option<W>, weight| match best {
                Some(current) if current <= weight => Some(current),
                _ => Some(weight),
            })
    }
}

/// Trait for mutable graph operations keyed by node identity
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug + Copy,
{
    /// Adds a node if it is not present and returns its vertex ID
    fn add_node(&mut self, node: Self::Node) -> usize;

    /// Adds an edge with the given weight, adding missing endpoints first.
    /// Returns the vertex IDs of both endpoints.
    fn add_edge(&mut self, from: Self::Node, to: Self::Node, weight: W) -> (usize, usize);

    /// Adds an edge with the default weight of 1
    fn add_unweighted_edge(&mut self, from: Self::Node, to: Self::Node) -> (usize, usize) {
        self.add_edge(from, to, W::one())
    }

    /// Removes every edge between the two nodes (both directions if undirected)
    fn remove_edge(&mut self, from: &Self::Node, to: &Self::Node) -> bool;
}
