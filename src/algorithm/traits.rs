use std::fmt::Debug;
use num_traits::Float;
use crate::algorithm::AllPairsResult;
use crate::graph::Graph;
use crate::Result;

/// Trait for all-pairs shortest path algorithms
pub trait AllPairsAlgorithm<W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest distances and routes between every ordered pair of nodes
    fn compute_all_pairs(&self, graph: &G) -> Result<AllPairsResult<G::Node, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path between two nodes as a sequence of nodes.
    /// Returns `None` for unknown nodes and for unreachable pairs.
    fn get_path<'r>(
        &self,
        result: &'r AllPairsResult<G::Node, W>,
        from: &G::Node,
        to: &G::Node,
    ) -> Option<Vec<&'r G::Node>> {
        result.shortest_path(from, to).filter(|path| !path.is_empty())
    }
}
