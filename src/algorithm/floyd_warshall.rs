use std::fmt::Debug;
use std::time::Instant;
use log::{debug, warn};
use num_traits::Float;
use rayon::prelude::*;

use crate::algorithm::matrix::DistanceMatrix;
use crate::algorithm::reconstruct::PathReconstructor;
use crate::algorithm::{AllPairsAlgorithm, AllPairsResult};
use crate::data_structures::{NodeArena, SquareMatrix};
use crate::graph::Graph;
use crate::Result;

/// Floyd-Warshall all-pairs shortest paths
///
/// Time: O(V^3), Memory: O(V^2). The intermediate-node loop is always sequential;
/// with `parallel` enabled the pair loop for each intermediate runs one row per
/// rayon task.
#[derive(Debug, Clone, Default)]
pub struct FloydWarshall {
    /// Relax rows in parallel
    parallel: bool,
}

impl FloydWarshall {
    /// Creates a new sequential Floyd-Warshall instance
    pub fn new() -> Self {
        FloydWarshall { parallel: false }
    }

    /// Enable or disable row-parallel relaxation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Tightens `matrix` over every intermediate vertex, in vertex-ID order
    pub fn relax<W>(&self, matrix: &mut DistanceMatrix<W>)
    where
        W: Float + Debug + Copy + Send + Sync,
    {
        let start = Instant::now();
        let (distance, next_hop) = matrix.tables_mut();

        if self.parallel {
            relax_parallel(distance, next_hop);
        } else {
            relax_sequential(distance, next_hop);
        }

        debug!(
            "Relaxed {} intermediates ({}) in {:?}",
            distance.order(),
            if self.parallel { "parallel" } else { "sequential" },
            start.elapsed()
        );
    }
}

fn relax_sequential<W>(distance: &mut SquareMatrix<W>, next_hop: &mut SquareMatrix<Option<usize>>)
where
    W: Float + Debug + Copy,
{
    let n = distance.order();

    for k in 0..n {
        for i in 0..n {
            // +infinity + anything never relaxes, and d[i][k] cannot become finite mid-row
            if distance[(i, k)] == W::infinity() {
                continue;
            }

            for j in 0..n {
                let candidate = distance[(i, k)] + distance[(k, j)];
                if candidate < distance[(i, j)] {
                    distance[(i, j)] = candidate;
                    next_hop[(i, j)] = next_hop[(i, k)];
                }
            }
        }
    }
}

/// Rows are independent for a fixed `k` once row `k` is snapshotted.
/// Matches the sequential result unless a negative cycle runs through `k`.
fn relax_parallel<W>(distance: &mut SquareMatrix<W>, next_hop: &mut SquareMatrix<Option<usize>>)
where
    W: Float + Debug + Copy + Send + Sync,
{
    let n = distance.order();
    if n == 0 {
        return;
    }

    for k in 0..n {
        let pivot_row: Vec<W> = distance.row(k).to_vec();

        distance
            .cells_mut()
            .par_chunks_mut(n)
            .zip(next_hop.cells_mut().par_chunks_mut(n))
            .for_each(|(dist_row, hop_row)| {
                let d_ik = dist_row[k];
                if d_ik == W::infinity() {
                    return;
                }
                let hop_ik = hop_row[k];

                for (j, d_kj) in pivot_row.iter().enumerate() {
                    let candidate = d_ik + *d_kj;
                    if candidate < dist_row[j] {
                        dist_row[j] = candidate;
                        hop_row[j] = hop_ik;
                    }
                }
            });
    }
}

impl<W, G> AllPairsAlgorithm<W, G> for FloydWarshall
where
    W: Float + Debug + Copy + Send + Sync,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn compute_all_pairs(&self, graph: &G) -> Result<AllPairsResult<G::Node, W>> {
        let n = graph.vertex_count();
        let mut nodes = NodeArena::with_capacity(n);
        for vertex in 0..n {
            if let Some(node) = graph.node(vertex) {
                nodes.intern(node.clone());
            }
        }
        if nodes.len() != n {
            return Err(crate::Error::AlgorithmError(format!(
                "graph reports {} vertices but {} distinct nodes",
                n,
                nodes.len()
            )));
        }

        let mut matrix = DistanceMatrix::from_graph(graph)?;
        self.relax(&mut matrix);

        let routes = PathReconstructor::new(&matrix, nodes.as_slice())
            .reconstruct()
            .map_err(|err| {
                warn!("Path reconstruction failed: {}", err);
                err
            })?;

        debug!(
            "All-pairs result: {} nodes, {} unreachable pairs",
            n,
            routes.infinite_pairs.len()
        );

        let (distance, next_node) = matrix.into_tables();
        Ok(AllPairsResult::new(
            nodes,
            distance,
            next_node,
            routes.paths,
            routes.infinite_pairs,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Direction, WeightedGraph};

    fn relaxed(graph: &WeightedGraph<&'static str, f64>, parallel: bool) -> DistanceMatrix<f64> {
        let mut matrix = DistanceMatrix::from_graph(graph).unwrap();
        FloydWarshall::new().with_parallel(parallel).relax(&mut matrix);
        matrix
    }

    #[test]
    fn test_relaxation_prefers_cheaper_detour() {
        let graph = WeightedGraph::from_edges(
            Direction::Directed,
            vec![("a", "b", 1.0), ("b", "c", 2.0), ("a", "c", 5.0)],
        );
        let matrix = relaxed(&graph, false);

        assert_eq!(matrix.distance(0, 2), 3.0);
        // first hop comes from the a -> b leg, not from b -> c
        assert_eq!(matrix.next_hop(0, 2), Some(1));
        assert!(matrix.distance(2, 0).is_infinite());
        assert_eq!(matrix.next_hop(2, 0), None);
    }

    #[test]
    fn test_next_hop_is_first_step_of_long_route() {
        let graph = WeightedGraph::from_edges(
            Direction::Directed,
            vec![("a", "b", 1.0), ("b", "c", 1.0), ("c", "d", 1.0), ("d", "e", 1.0)],
        );
        let matrix = relaxed(&graph, false);

        assert_eq!(matrix.distance(0, 4), 4.0);
        assert_eq!(matrix.next_hop(0, 4), Some(1));
        assert_eq!(matrix.next_hop(2, 4), Some(3));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let graph = WeightedGraph::from_edges(
            Direction::Undirected,
            vec![
                ("a", "b", 4.0),
                ("a", "c", 1.0),
                ("c", "b", 2.0),
                ("b", "d", 5.0),
                ("c", "d", 8.0),
                ("d", "e", 3.0),
            ],
        );

        assert_eq!(relaxed(&graph, false), relaxed(&graph, true));
    }

    #[test]
    fn test_negative_edge_without_cycle() {
        let graph = WeightedGraph::from_edges(
            Direction::Directed,
            vec![("a", "b", 4.0), ("a", "c", 2.0), ("c", "b", -1.0)],
        );
        let matrix = relaxed(&graph, false);

        assert_eq!(matrix.distance(0, 1), 1.0);
        assert_eq!(matrix.next_hop(0, 1), Some(2));
        assert_eq!(matrix.distance(0, 0), 0.0);
    }

    #[test]
    fn test_negative_infinity_still_relaxes() {
        let graph = WeightedGraph::from_edges(
            Direction::Directed,
            vec![("a", "b", 1.0), ("b", "c", 1.0)],
        );

        for parallel in [false, true] {
            let mut matrix = DistanceMatrix::from_graph(&graph).unwrap();
            matrix.tables_mut().0[(0, 1)] = f64::NEG_INFINITY;
            FloydWarshall::new().with_parallel(parallel).relax(&mut matrix);

            assert_eq!(matrix.distance(0, 2), f64::NEG_INFINITY);
            assert_eq!(matrix.next_hop(0, 2), Some(1));
            assert!(matrix.distance(2, 0).is_infinite());
        }
    }

    #[test]
    fn test_empty_graph_relaxes_to_nothing() {
        let graph: WeightedGraph<&'static str, f64> = WeightedGraph::directed();
        assert_eq!(relaxed(&graph, true).order(), 0);
        assert_eq!(relaxed(&graph, false).order(), 0);
    }
}
