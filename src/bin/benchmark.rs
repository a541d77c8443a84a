use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use floyd_paths::algorithm::{AllPairsAlgorithm, floyd_warshall::FloydWarshall};
use floyd_paths::graph::generators::{generate_random, GeneratedGraph};
use floyd_paths::graph::{Direction, Graph};

// Function to benchmark a configuration on a graph
fn benchmark_algorithm(name: &str, algorithm: &FloydWarshall, graph: &GeneratedGraph) -> Option<Duration> {
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = match <FloydWarshall as AllPairsAlgorithm<OrderedFloat<f64>, GeneratedGraph>>::compute_all_pairs(algorithm, graph) {
        Ok(result) => result,
        Err(e) => {
            println!("  - Failed: {}", e);
            return None;
        }
    };
    let duration = start.elapsed();

    let n = result.node_count();
    let reachable = n * n - result.infinite_pair_count();
    println!("  - Found {} reachable pairs in {:?}", reachable, duration);

    Some(duration)
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![100, 200, 400, 800];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: Floyd-Warshall sequential vs parallel");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let sequential = FloydWarshall::new();
    let parallel = FloydWarshall::new().with_parallel(true);
    let mut rng = StdRng::seed_from_u64(42);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(&mut rng, size, edge_factor, Direction::Directed);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (Some(sequential_time), Some(parallel_time)) = (
            benchmark_algorithm("sequential", &sequential, &graph),
            benchmark_algorithm("parallel", &parallel, &graph),
        ) else {
            continue;
        };

        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64();
        println!("Speedup - parallel vs sequential: {:.2}x", speedup);

        results.push((size, sequential_time, parallel_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Sequential (ms)", "Parallel (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, sequential_time, parallel_time) in &results {
        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64();
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            sequential_time.as_millis(),
            parallel_time.as_millis(),
            speedup
        );
    }
}
