use crate::graph::{Direction, Graph, MutableGraph, WeightedGraph};
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::collections::HashSet;

/// Graph with integer node labels and `OrderedFloat<f64>` weights, as produced here
pub type GeneratedGraph = WeightedGraph<usize, OrderedFloat<f64>>;

/// Generates a random graph with `n` vertices and about `edge_factor * n` edges
/// with weights in `[1, 100)`. Self-loops are skipped.
pub fn generate_random<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    direction: Direction,
) -> GeneratedGraph {
    let mut graph = WeightedGraph::with_capacity(direction, n);
    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width x height` grid with 4-connectivity and unit weights.
/// A directed grid carries both directions between neighbours.
pub fn generate_grid(width: usize, height: usize, direction: Direction) -> Result<GeneratedGraph> {
    let size = width.checked_mul(height).ok_or_else(|| {
        Error::InvalidParameter(format!("grid of {}x{} vertices is too large", width, height))
    })?;
    let mut graph = WeightedGraph::with_capacity(direction, size);
    let index = |x: usize, y: usize| y * width + x;

    for v in 0..size {
        graph.add_node(v);
    }

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                link(&mut graph, index(x, y), index(x + 1, y), OrderedFloat(1.0));
            }
            if y + 1 < height {
                link(&mut graph, index(x, y), index(x, y + 1), OrderedFloat(1.0));
            }
        }
    }

    Ok(graph)
}

/// Connects `u` and `v` both ways, whatever the graph's direction
fn link(graph: &mut GeneratedGraph, u: usize, v: usize, weight: OrderedFloat<f64>) {
    graph.add_edge(u, v, weight);
    if graph.is_directed() {
        graph.add_edge(v, u, weight);
    }
}

/// Generates a Barabási-Albert scale-free graph with n vertices and m edges per new vertex.
/// In a directed graph the new vertex points at its targets.
pub fn generate_barabasi_albert<R: Rng>(
    rng: &mut R,
    n: usize,
    m: usize,
    direction: Direction,
) -> Result<GeneratedGraph> {
    if m == 0 {
        return Err(Error::InvalidParameter("m must be positive".to_string()));
    }
    if n <= m {
        return Err(Error::InvalidParameter(format!(
            "n ({}) must be greater than m ({})",
            n, m
        )));
    }

    let mut graph = WeightedGraph::with_capacity(direction, n);

    // Seed with a complete graph on the first m vertices
    for v in 0..m {
        graph.add_node(v);
    }
    for i in 0..m {
        for j in 0..m {
            if i != j && (direction == Direction::Directed || i < j) {
                graph.add_edge(i, j, OrderedFloat(rng.gen_range(1.0..100.0)));
            }
        }
    }

    // Degree of each vertex for preferential attachment
    let mut degrees = vec![m.saturating_sub(1).max(1); m];
    let mut total_degree: usize = degrees.iter().sum();

    for i in m..n {
        graph.add_node(i);
        let mut targets = HashSet::new();

        while targets.len() < m {
            let mut target_value = rng.gen_range(0..total_degree);
            let mut target = 0;
            while target < i && target_value >= degrees[target] {
                target_value -= degrees[target];
                target += 1;
            }

            if target < i && targets.insert(target) {
                graph.add_edge(i, target, OrderedFloat(rng.gen_range(1.0..100.0)));
                degrees[target] += 1;
                total_degree += 1;
            }
        }

        degrees.push(m);
        total_degree += m;
    }

    Ok(graph)
}
