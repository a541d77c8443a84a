use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::matrix::DistanceMatrix;
use crate::data_structures::SquareMatrix;
use crate::{Error, Result};

/// Concrete routes for every ordered pair, as vertex IDs
#[derive(Debug, Clone, PartialEq)]
pub struct Routes {
    /// `paths[(u, v)]` runs from `u` to `v` inclusive; empty when unreachable
    pub paths: SquareMatrix<Vec<usize>>,

    /// Every `(u, v)` with `u != v` and no route, outer `u`, inner `v`
    pub infinite_pairs: Vec<(usize, usize)>,
}

/// Walks a relaxed next-hop table to materialize routes
pub struct PathReconstructor<'a, W, N> {
    matrix: &'a DistanceMatrix<W>,

    /// Node identities by vertex ID, used for error context
    nodes: &'a [N],
}

impl<'a, W, N> PathReconstructor<'a, W, N>
where
    W: Float + Debug + Copy,
    N: Debug,
{
    pub fn new(matrix: &'a DistanceMatrix<W>, nodes: &'a [N]) -> Self {
        PathReconstructor { matrix, nodes }
    }

    /// Reconstructs every pair's route and collects the unreachable pairs
    pub fn reconstruct(&self) -> Result<Routes> {
        let n = self.matrix.order();
        let mut paths = SquareMatrix::filled(n, Vec::new());
        let mut infinite_pairs = Vec::new();

        for u in 0..n {
            for v in 0..n {
                if u == v {
                    // the empty walk, whatever the stored next hop says
                    paths[(u, v)] = vec![u];
                } else if self.matrix.next_hop(u, v).is_none() {
                    infinite_pairs.push((u, v));
                } else {
                    paths[(u, v)] = self.walk(u, v)?;
                }
            }
        }

        Ok(Routes {
            paths,
            infinite_pairs,
        })
    }

    /// Follows next hops from `from` until `to`, failing after `order()` hops
    pub fn walk(&self, from: usize, to: usize) -> Result<Vec<usize>> {
        let limit = self.matrix.order();
        let mut path = vec![from];
        let mut current = from;

        while current != to {
            if path.len() > limit {
                return Err(Error::NonConvergence {
                    from: self.describe(from),
                    to: self.describe(to),
                    limit,
                });
            }

            current = match self.matrix.next_hop(current, to) {
                Some(hop) => hop,
                None => {
                    return Err(Error::BrokenRoute {
                        from: self.describe(from),
                        to: self.describe(to),
                        at: self.describe(current),
                    })
                }
            };
            path.push(current);
        }

        Ok(path)
    }

    fn describe(&self, vertex: usize) -> String {
        match self.nodes.get(vertex) {
            Some(node) => format!("{:?}", node),
            None => format!("#{}", vertex),
        }
    }
}
