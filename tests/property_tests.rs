use floyd_paths::algorithm::AllPairsResult;
use floyd_paths::graph::generators::{generate_barabasi_albert, generate_random, GeneratedGraph};
use floyd_paths::graph::{Direction, Graph};
use floyd_paths::{AllPairsAlgorithm, FloydWarshall};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

type PairsResult = AllPairsResult<usize, OrderedFloat<f64>>;

// Tolerance for comparing sums accumulated in a different order
const EPSILON: f64 = 1e-9;

fn compute(graph: &GeneratedGraph, parallel: bool) -> PairsResult {
    let algorithm = FloydWarshall::new().with_parallel(parallel);
    <FloydWarshall as AllPairsAlgorithm<OrderedFloat<f64>, GeneratedGraph>>::compute_all_pairs(&algorithm, graph)
        .unwrap()
}

fn sample_graphs() -> Vec<GeneratedGraph> {
    let mut graphs = Vec::new();
    for seed in 0..4u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        graphs.push(generate_random(&mut rng, 25, 1.5, Direction::Directed));
        graphs.push(generate_random(&mut rng, 25, 1.0, Direction::Undirected));
    }
    let mut rng = StdRng::seed_from_u64(99);
    graphs.push(generate_barabasi_albert(&mut rng, 30, 2, Direction::Directed).unwrap());
    graphs.push(generate_barabasi_albert(&mut rng, 30, 2, Direction::Undirected).unwrap());
    graphs
}

#[test]
fn test_self_distance_is_zero() {
    for graph in sample_graphs() {
        let result = compute(&graph, false);
        for v in 0..graph.vertex_count() {
            assert_eq!(result.distance_matrix()[(v, v)], OrderedFloat(0.0));
            assert_eq!(result.path_matrix()[(v, v)], vec![v]);
        }
    }
}

#[test]
fn test_undirected_distances_are_symmetric() {
    for graph in sample_graphs().into_iter().filter(|g| !g.is_directed()) {
        let result = compute(&graph, false);
        let n = graph.vertex_count();
        for u in 0..n {
            for v in 0..n {
                let forward = result.distance_matrix()[(u, v)].into_inner();
                let backward = result.distance_matrix()[(v, u)].into_inner();
                if forward.is_infinite() {
                    assert!(backward.is_infinite());
                } else {
                    assert!((forward - backward).abs() < EPSILON, "{} -> {}", u, v);
                }
            }
        }
    }
}

#[test]
fn test_triangle_inequality() {
    for graph in sample_graphs() {
        let result = compute(&graph, false);
        let d = result.distance_matrix();
        let n = graph.vertex_count();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let via = d[(i, k)].into_inner() + d[(k, j)].into_inner();
                    assert!(
                        d[(i, j)].into_inner() <= via + EPSILON,
                        "d[{}][{}] exceeds route via {}",
                        i, j, k
                    );
                }
            }
        }
    }
}

#[test]
fn test_paths_follow_edges_and_sum_to_distance() {
    for graph in sample_graphs() {
        let result = compute(&graph, false);
        let n = graph.vertex_count();
        for u in 0..n {
            for v in 0..n {
                let distance = result.distance_matrix()[(u, v)].into_inner();
                if distance.is_infinite() {
                    continue;
                }

                let path = &result.path_matrix()[(u, v)];
                assert_eq!(path.first(), Some(&u));
                assert_eq!(path.last(), Some(&v));

                let mut total = 0.0;
                for hop in path.windows(2) {
                    let weight = graph
                        .get_edge_weight(hop[0], hop[1])
                        .expect("path should only use existing edges");
                    total += weight.into_inner();
                }
                assert!((total - distance).abs() < EPSILON, "{} -> {}", u, v);
            }
        }
    }
}

#[test]
fn test_infinite_pairs_match_distances() {
    for graph in sample_graphs() {
        let result = compute(&graph, false);
        let n = graph.vertex_count();

        let mut expected = Vec::new();
        for u in 0..n {
            for v in 0..n {
                let infinite = result.distance_matrix()[(u, v)].is_infinite();
                assert_eq!(infinite, u != v && result.next_node_matrix()[(u, v)].is_none());
                if u != v && infinite {
                    expected.push((u, v));
                    assert!(result.path_matrix()[(u, v)].is_empty());
                }
            }
        }
        assert_eq!(result.infinite_pair_indices(), expected.as_slice());
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    for graph in sample_graphs() {
        assert_eq!(compute(&graph, false), compute(&graph, false));
    }
}

#[test]
fn test_parallel_matches_sequential() {
    for graph in sample_graphs() {
        assert_eq!(compute(&graph, false), compute(&graph, true));
    }
}
