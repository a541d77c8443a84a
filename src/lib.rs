//! Floyd Paths - All-Pairs Shortest Paths with Route Reconstruction
//!
//! This library computes the shortest-path distance between every ordered pair of
//! nodes in a weighted graph (directed or undirected) using the Floyd-Warshall
//! dynamic-programming relaxation, and reconstructs a concrete route for every
//! reachable pair from the resulting next-hop table.
//!
//! The computation runs in three stages: a [`DistanceMatrix`] is built from the
//! graph's adjacency, the [`FloydWarshall`] relaxer tightens it over every
//! intermediate node, and the path reconstructor walks the next-hop table to
//! produce an [`AllPairsResult`].

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    floyd_warshall::FloydWarshall, matrix::DistanceMatrix, AllPairsAlgorithm, AllPairsResult,
};
/// Re-export main types for convenient use
pub use graph::weighted::{Direction, WeightedGraph};

use graph::Graph;
use num_traits::Float;
use std::fmt::Debug;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid weight {weight} on edge from {from} to {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("Path reconstruction did not converge from {from} to {to} within {limit} hops")]
    NonConvergence { from: String, to: String, limit: usize },

    #[error("Route from {from} to {to} breaks at {at}: no next hop")]
    BrokenRoute { from: String, to: String, at: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Runs the sequential Floyd-Warshall computation on `graph`.
pub fn floyd_warshall<W, G>(graph: &G) -> Result<AllPairsResult<G::Node, W>>
where
    W: Float + Debug + Copy + Send + Sync,
    G: Graph<W>,
{
    FloydWarshall::new().compute_all_pairs(graph)
}
