//! Prints the distance and routing table of a small road network.
//!
//! Run with `cargo run --example route_table`.

use colored::*;
use floyd_paths::graph::{MutableGraph, WeightedGraph};
use floyd_paths::AllPairsAlgorithm;
use floyd_paths::FloydWarshall;
use ordered_float::OrderedFloat;

type RoadGraph = WeightedGraph<&'static str, OrderedFloat<f64>>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut graph: RoadGraph = WeightedGraph::undirected();
    graph.add_edge("Depot", "Market", OrderedFloat(4.0));
    graph.add_edge("Depot", "Harbor", OrderedFloat(1.5));
    graph.add_edge("Harbor", "Market", OrderedFloat(2.0));
    graph.add_edge("Market", "Station", OrderedFloat(3.0));
    graph.add_edge("Harbor", "Station", OrderedFloat(6.5));
    graph.add_node("Lighthouse");

    let algorithm = FloydWarshall::new();
    let result = algorithm.compute_all_pairs(&graph)?;

    println!("{}", "Distances".bold().underline());
    print!("{:>12}", "");
    for to in result.nodes() {
        print!("{:>12}", to.cyan());
    }
    println!();

    for from in result.nodes() {
        print!("{:>12}", from.cyan());
        for to in result.nodes() {
            match result.distance(from, to) {
                Some(d) if d.is_infinite() => print!("{:>12}", "-".red()),
                Some(d) => print!("{:>12}", format!("{:.1}", d.into_inner()).green()),
                None => print!("{:>12}", "?"),
            }
        }
        println!();
    }

    println!();
    println!("{}", "Routes".bold().underline());
    for from in result.nodes() {
        for to in result.nodes() {
            if from == to {
                continue;
            }
            let path = <FloydWarshall as AllPairsAlgorithm<OrderedFloat<f64>, RoadGraph>>::get_path(
                &algorithm, &result, from, to,
            );
            match path {
                Some(path) => {
                    let route: Vec<String> = path.iter().map(|node| node.to_string()).collect();
                    println!("{} -> {}: {}", from, to, route.join(" -> ").yellow());
                }
                None => println!("{} -> {}: {}", from, to, "unreachable".red()),
            }
        }
    }

    println!();
    println!("{} unreachable pairs", result.infinite_pair_count().to_string().red().bold());

    Ok(())
}
