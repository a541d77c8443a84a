use floyd_paths::algorithm::floyd_warshall::FloydWarshall;
use floyd_paths::algorithm::traits::AllPairsAlgorithm;
use floyd_paths::graph::{Direction, Graph, MutableGraph, WeightedGraph};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

type GridGraph = WeightedGraph<(usize, usize), OrderedFloat<f64>>;

// Test helper function to create a simple grid graph
fn create_test_grid(width: usize, height: usize, blocked: &[(usize, usize)]) -> GridGraph {
    let mut graph = WeightedGraph::new(Direction::Directed);

    for y in 0..height {
        for x in 0..width {
            graph.add_node((x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            if blocked.contains(&(x, y)) {
                continue;
            }

            // Define possible moves (8 directions)
            let directions = [
                // Cardinal directions (N, E, S, W)
                (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
                // Diagonal directions (NE, SE, SW, NW)
                (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = (nx as usize, ny as usize);
                    if !blocked.contains(&neighbor) {
                        graph.add_edge((x, y), neighbor, OrderedFloat(cost));
                    }
                }
            }
        }
    }

    graph
}

fn get_path<'r>(
    result: &'r floyd_paths::AllPairsResult<(usize, usize), OrderedFloat<f64>>,
    from: (usize, usize),
    to: (usize, usize),
) -> Option<Vec<&'r (usize, usize)>> {
    <FloydWarshall as AllPairsAlgorithm<OrderedFloat<f64>, GridGraph>>::get_path(
        &FloydWarshall::new(),
        result,
        &from,
        &to,
    )
}

fn assert_continuous(graph: &GridGraph, path: &[&(usize, usize)]) {
    for pair in path.windows(2) {
        let u = graph.vertex_of(pair[0]).unwrap();
        let v = graph.vertex_of(pair[1]).unwrap();
        assert!(graph.has_edge(u, v), "Path should only use existing edges");
    }
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(8, 8, &[]);
    let result = FloydWarshall::new().compute_all_pairs(&graph).unwrap();

    let source = (0, 0);
    let target = (7, 7);

    // Straight diagonal is the cheapest route
    let distance = result.distance(&source, &target).unwrap().into_inner();
    assert!((distance - 7.0 * 1.4).abs() < 1e-9);

    let path = get_path(&result, source, target).expect("should construct a path");
    assert_eq!(*path[0], source, "Path should start at source");
    assert_eq!(*path[path.len() - 1], target, "Path should end at target");
    assert_eq!(path.len(), 8);
    assert_continuous(&graph, &path);

    // Every pair in a connected grid is reachable
    assert_eq!(result.infinite_pair_count(), 0);
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    // A wall in column 5 with a gap at the bottom
    let wall: Vec<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    let graph = create_test_grid(10, 10, &wall);
    let result = FloydWarshall::new()
        .with_parallel(true)
        .compute_all_pairs(&graph)
        .unwrap();

    let source = (0, 0);
    let target = (9, 0);

    let path = get_path(&result, source, target).expect("should find a path around obstacles");
    assert_eq!(*path[0], source);
    assert_eq!(*path[path.len() - 1], target);
    assert!(path.iter().all(|cell| !wall.contains(cell)), "Path should avoid the wall");
    assert!(path.iter().any(|&&(_, y)| y >= 8), "Path should go through the gap");
    assert_continuous(&graph, &path);

    // Wall cells have no outgoing edges and no incoming ones
    let blocked = (5, 3);
    assert!(!result.is_reachable(&source, &blocked));
    assert!(!result.is_reachable(&blocked, &source));
    assert_eq!(result.shortest_path(&blocked, &source), Some(vec![]));
    assert_eq!(result.shortest_path(&blocked, &blocked), Some(vec![&blocked]));
}

// Test the city pathfinding scenario
#[test]
fn test_city_pathfinding() {
    let buildings = [
        (3, 3), (4, 3), (5, 3),
        (3, 4), (4, 4), (5, 4),
        (3, 5), (4, 5), (5, 5),
        (10, 10), (11, 10), (12, 10),
        (10, 11), (11, 11), (12, 11),
    ];
    let graph = create_test_grid(14, 13, &buildings);
    let result = FloydWarshall::new().compute_all_pairs(&graph).unwrap();

    // Define some key locations
    let locations = HashMap::from([
        ("home".to_string(), (0, 0)),
        ("work".to_string(), (13, 12)),
        ("gym".to_string(), (9, 4)),
        ("park".to_string(), (4, 9)),
    ]);

    for (from_name, &from) in &locations {
        for (to_name, &to) in &locations {
            let path = get_path(&result, from, to)
                .unwrap_or_else(|| panic!("Should construct a path from {} to {}", from_name, to_name));

            assert_eq!(*path[0], from, "Path should start at source");
            assert_eq!(*path[path.len() - 1], to, "Path should end at target");
            assert_continuous(&graph, &path);

            // The grid is symmetric, so are the distances
            let there = result.distance(&from, &to).unwrap().into_inner();
            let back = result.distance(&to, &from).unwrap().into_inner();
            assert!((there - back).abs() < 1e-9, "{} <-> {}", from_name, to_name);
        }
    }
}
