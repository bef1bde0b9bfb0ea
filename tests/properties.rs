use pathscope::{
    AlgorithmKind, AlgorithmResult, DistanceMap, Graph, Node, TraceStep, run_algorithm,
};

fn graph_from(nodes: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
    let mut graph = Graph::new();
    for id in nodes {
        graph.insert_node(Node {
            id: id.to_string(),
            label: id.to_string(),
        });
    }
    for (source, target, weight) in edges {
        graph.add_edge(source, target, *weight);
    }
    graph
}

fn triangle() -> Graph {
    graph_from(
        &["A", "B", "C"],
        &[("A", "B", 4.0), ("A", "C", 2.0), ("B", "C", 1.0)],
    )
}

fn five_nodes() -> Graph {
    graph_from(
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 4.0),
            ("A", "D", 2.0),
            ("B", "C", 3.0),
            ("B", "D", 1.0),
            ("C", "D", 2.0),
            ("D", "E", 5.0),
            ("A", "E", 8.0),
        ],
    )
}

// Seven nodes, two equally cheap routes into G.
fn seven_nodes() -> Graph {
    graph_from(
        &["A", "B", "C", "D", "E", "F", "G"],
        &[
            ("A", "B", 4.0),
            ("A", "D", 2.0),
            ("B", "C", 3.0),
            ("B", "D", 1.0),
            ("C", "D", 2.0),
            ("C", "F", 6.0),
            ("D", "E", 3.0),
            ("D", "F", 4.0),
            ("E", "G", 2.0),
            ("F", "G", 1.0),
        ],
    )
}

fn fixtures() -> Vec<Graph> {
    vec![triangle(), five_nodes(), seven_nodes()]
}

fn run(kind: AlgorithmKind, graph: &Graph) -> AlgorithmResult {
    run_algorithm(kind, graph, "A").unwrap()
}

fn path_weight(graph: &Graph, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| graph.edge(&pair[0], &pair[1]).unwrap().weight)
        .sum()
}

#[test]
fn test_all_algorithms_agree_on_nonnegative_graphs() {
    for graph in fixtures() {
        let baseline = run(AlgorithmKind::Dijkstra, &graph).distances;
        for kind in [AlgorithmKind::BellmanFord, AlgorithmKind::FloydWarshall] {
            assert_eq!(run(kind, &graph).distances, baseline);
        }
    }
}

#[test]
fn test_path_weights_match_distances() {
    for graph in fixtures() {
        for kind in AlgorithmKind::all() {
            let result = run(kind, &graph);
            for node in graph.nodes() {
                let distance = result.distances[node.id.as_str()];
                let path = &result.paths[node.id.as_str()];
                if distance.is_finite() {
                    assert!(!path.is_empty());
                    assert_eq!(path_weight(&graph, path), distance);
                } else {
                    assert!(path.is_empty());
                }
            }
        }
    }
}

#[test]
fn test_unreachable_nodes_are_infinite_with_empty_paths() {
    let mut graph = five_nodes();
    graph.insert_node(Node {
        id: "X".to_string(),
        label: "Isolated".to_string(),
    });

    for kind in AlgorithmKind::all() {
        let result = run(kind, &graph);
        assert!(result.distances["X"].is_infinite());
        assert!(result.paths["X"].is_empty());
    }
}

#[test]
fn test_traces_are_bookended_by_init_and_final() {
    for graph in fixtures() {
        for kind in AlgorithmKind::all() {
            let result = run(kind, &graph);
            let steps = result.trace.steps();

            assert!(steps.len() >= 2);
            assert!(matches!(steps[0], TraceStep::Init { .. }));
            assert!(matches!(steps[steps.len() - 1], TraceStep::Final { .. }));
            for step in &steps[1..steps.len() - 1] {
                assert!(matches!(
                    step,
                    TraceStep::Visit { .. } | TraceStep::Update { .. }
                ));
            }

            // The closing snapshot is the run's answer.
            assert_eq!(steps[steps.len() - 1].distances(), &result.distances);
        }
    }
}

#[test]
fn test_runs_are_deterministic() {
    let graph = seven_nodes();
    for kind in AlgorithmKind::all() {
        let first = run(kind, &graph);
        let second = run(kind, &graph);

        assert_eq!(first.trace, second.trace);
        assert_eq!(first.distances, second.distances);
        assert_eq!(first.paths, second.paths);
    }
}

#[test]
fn test_distance_snapshots_never_regress() {
    // Distances only ever improve, so each node's value is
    // non-increasing across consecutive snapshots.
    let graph = seven_nodes();
    for kind in AlgorithmKind::all() {
        let result = run(kind, &graph);
        let steps = result.trace.steps();

        for pair in steps.windows(2) {
            let before = pair[0].distances();
            let after = pair[1].distances();
            for (node, &value) in after {
                assert!(value <= before[node.as_str()]);
            }
        }
    }
}

#[test]
fn test_step_descriptions_name_the_actors() {
    let result = run(AlgorithmKind::Dijkstra, &triangle());
    let steps = result.trace.steps();

    assert_eq!(steps[0].description(), "Initialized distances from A");
    assert_eq!(steps[1].description(), "Visiting A");
    assert_eq!(steps[2].description(), "Updated B via A to 4");
    assert_eq!(steps.last().unwrap().description(), "Search complete");

    // Hand-built failure step; runs that fail discard their trace.
    let failure = TraceStep::Final {
        visited: Vec::new(),
        distances: DistanceMap::default(),
        offending_edge: Some(("B".to_string(), "C".to_string())),
    };
    assert_eq!(failure.description(), "Negative cycle detected on edge B -> C");
}
