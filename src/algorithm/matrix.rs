use std::fmt::Debug;
use log::debug;
use num_traits::Float;

use crate::data_structures::SquareMatrix;
use crate::graph::Graph;
use crate::{Error, Result};

/// Dense distance and next-hop tables over the vertex IDs of a graph
///
/// `distance[(u, v)]` is the weight of the best known `u -> v` route, or infinity
/// when none is known. `next_hop[(u, v)]` is the first vertex to step to along that
/// route; it is `None` exactly when the distance is infinite, except on the
/// diagonal where the empty walk needs no hop.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<W> {
    distance: SquareMatrix<W>,
    next_hop: SquareMatrix<Option<usize>>,
}

impl<W> DistanceMatrix<W>
where
    W: Float + Debug + Copy,
{
    /// Builds the initial tables from the graph's adjacency, before any relaxation.
    ///
    /// Parallel edges keep the lightest weight. Self-loops never raise the zero
    /// self-distance; a negative self-loop lowers it and becomes the diagonal's
    /// next hop. Non-finite weights are rejected.
    pub fn from_graph<G>(graph: &G) -> Result<Self>
    where
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut distance = SquareMatrix::filled(n, W::infinity());
        let mut next_hop = SquareMatrix::filled(n, None);

        for u in 0..n {
            distance[(u, u)] = W::zero();
        }

        let mut edges = 0usize;
        for u in 0..n {
            for (v, weight) in graph.outgoing_edges(u) {
                if !graph.has_vertex(v) {
                    return Err(Error::InvalidVertex(v));
                }
                if !weight.is_finite() {
                    return Err(Error::InvalidWeight {
                        from: describe::<W, G>(graph, u),
                        to: describe::<W, G>(graph, v),
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }
                edges += 1;

                if u == v {
                    if weight < W::zero() && weight < distance[(u, u)] {
                        distance[(u, u)] = weight;
                        next_hop[(u, u)] = Some(u);
                    }
                    continue;
                }

                if weight < distance[(u, v)] {
                    distance[(u, v)] = weight;
                    next_hop[(u, v)] = Some(v);
                }
            }
        }

        debug!("Built {}x{} distance matrix from {} directed edges", n, n, edges);

        Ok(DistanceMatrix { distance, next_hop })
    }

    /// Number of vertices covered by the tables
    pub fn order(&self) -> usize {
        self.distance.order()
    }

    pub fn distance(&self, from: usize, to: usize) -> W {
        self.distance[(from, to)]
    }

    pub fn next_hop(&self, from: usize, to: usize) -> Option<usize> {
        self.next_hop[(from, to)]
    }

    /// True for the diagonal and for every pair with a known route
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        from == to || self.next_hop[(from, to)].is_some()
    }

    pub fn distances(&self) -> &SquareMatrix<W> {
        &self.distance
    }

    pub fn next_hops(&self) -> &SquareMatrix<Option<usize>> {
        &self.next_hop
    }

    pub(crate) fn tables_mut(&mut self) -> (&mut SquareMatrix<W>, &mut SquareMatrix<Option<usize>>) {
        (&mut self.distance, &mut self.next_hop)
    }

    pub(crate) fn into_tables(self) -> (SquareMatrix<W>, SquareMatrix<Option<usize>>) {
        (self.distance, self.next_hop)
    }
}

/// Renders a vertex for error messages using its node identity
fn describe<W, G>(graph: &G, vertex: usize) -> String
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    match graph.node(vertex) {
        Some(node) => format!("{:?}", node),
        None => format!("#{}", vertex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{MutableGraph, WeightedGraph};

    #[test]
    fn test_initial_tables() {
        let graph = WeightedGraph::from_edges(
            crate::Direction::Directed,
            vec![("a", "b", 2.0), ("b", "c", 3.0)],
        );
        let matrix = DistanceMatrix::from_graph(&graph).unwrap();

        assert_eq!(matrix.order(), 3);
        assert_eq!(matrix.distance(0, 0), 0.0);
        assert_eq!(matrix.distance(0, 1), 2.0);
        assert_eq!(matrix.next_hop(0, 1), Some(1));
        assert!(matrix.distance(0, 2).is_infinite());
        assert_eq!(matrix.next_hop(0, 2), None);
        assert_eq!(matrix.next_hop(1, 1), None);
        assert!(matrix.is_reachable(2, 2));
        assert!(!matrix.is_reachable(2, 0));
    }

    #[test]
    fn test_parallel_edges_take_minimum() {
        let graph = WeightedGraph::from_edges(
            crate::Direction::Directed,
            vec![("a", "b", 5.0), ("a", "b", 2.0), ("a", "b", 7.0)],
        );
        let matrix = DistanceMatrix::from_graph(&graph).unwrap();
        assert_eq!(matrix.distance(0, 1), 2.0);
    }

    #[test]
    fn test_undirected_edges_fill_both_directions() {
        let graph = WeightedGraph::from_edges(crate::Direction::Undirected, vec![(1, 2, 4.0)]);
        let matrix = DistanceMatrix::from_graph(&graph).unwrap();
        assert_eq!(matrix.distance(0, 1), 4.0);
        assert_eq!(matrix.distance(1, 0), 4.0);
        assert_eq!(matrix.next_hop(1, 0), Some(0));
    }

    #[test]
    fn test_self_loops() {
        let mut graph: WeightedGraph<&str, f64> = WeightedGraph::directed();
        graph.add_edge("a", "a", 3.0);
        graph.add_edge("b", "b", -1.0);
        let matrix = DistanceMatrix::from_graph(&graph).unwrap();

        assert_eq!(matrix.distance(0, 0), 0.0);
        assert_eq!(matrix.next_hop(0, 0), None);
        assert_eq!(matrix.distance(1, 1), -1.0);
        assert_eq!(matrix.next_hop(1, 1), Some(1));
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        let mut graph: WeightedGraph<&str, f64> = WeightedGraph::directed();
        graph.add_edge("a", "b", f64::NAN);

        match DistanceMatrix::from_graph(&graph) {
            Err(Error::InvalidWeight { from, to, .. }) => {
                assert_eq!(from, "\"a\"");
                assert_eq!(to, "\"b\"");
            }
            other => panic!("expected InvalidWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_graph() {
        let graph: WeightedGraph<u32, f64> = WeightedGraph::directed();
        let matrix = DistanceMatrix::from_graph(&graph).unwrap();
        assert_eq!(matrix.order(), 0);
    }
}
