use pathscope::{AlgorithmError, Graph, Node, TraceStep, run_bellman_ford};

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

fn rounds(trace_steps: &[TraceStep]) -> Vec<usize> {
    trace_steps
        .iter()
        .filter_map(|step| match step {
            TraceStep::Visit {
                round: Some(round),
                node: None,
                ..
            } => Some(*round),
            _ => None,
        })
        .collect()
}

#[test]
fn test_bellman_ford_small_triangle() {
    let result = run_bellman_ford(&triangle(), "A").unwrap();

    assert_eq!(result.distances["A"], 0.0);
    assert_eq!(result.distances["B"], 4.0);
    assert_eq!(result.distances["C"], 2.0);
    assert_eq!(result.paths["B"], vec!["A", "B"]);
    assert_eq!(result.paths["C"], vec!["A", "C"]);
}

#[test]
fn test_bellman_ford_handles_negative_edges() {
    let graph = graph_from(
        &["A", "B", "C"],
        &[("A", "B", 4.0), ("A", "C", 2.0), ("C", "B", -3.0)],
    );
    let result = run_bellman_ford(&graph, "A").unwrap();

    assert_eq!(result.distances["B"], -1.0); // A -> C -> B
    assert_eq!(result.paths["B"], vec!["A", "C", "B"]);
}

#[test]
fn test_bellman_ford_negative_cycle_is_an_error() {
    // The cycle A -> B -> C -> A sums to -1.
    let graph = graph_from(
        &["A", "B", "C"],
        &[("A", "B", 1.0), ("B", "C", -1.0), ("C", "A", -1.0)],
    );
    let err = run_bellman_ford(&graph, "A").unwrap_err();

    assert!(matches!(err, AlgorithmError::NegativeCycle { .. }));
}

#[test]
fn test_bellman_ford_negative_cycle_names_a_relaxable_edge() {
    let graph = graph_from(
        &["A", "B", "C"],
        &[("A", "B", 1.0), ("B", "C", -1.0), ("C", "A", -1.0)],
    );
    let err = run_bellman_ford(&graph, "A").unwrap_err();

    let AlgorithmError::NegativeCycle { from, to } = err else {
        panic!("expected a negative cycle");
    };
    assert!(graph.edge(&from, &to).is_some());
}

#[test]
fn test_bellman_ford_rounds_visit_before_relaxing() {
    let result = run_bellman_ford(&triangle(), "A").unwrap();
    let steps = result.trace.steps();

    // Round 1 relaxes A's edges, round 2 changes nothing and exits.
    assert_eq!(rounds(steps), vec![1, 2]);
    assert!(matches!(
        steps[1],
        TraceStep::Visit { round: Some(1), .. }
    ));
    assert_eq!(steps[1].description(), "Relaxation round 1");
}

#[test]
fn test_bellman_ford_early_exit_keeps_the_quiet_round() {
    let result = run_bellman_ford(&triangle(), "A").unwrap();
    let steps = result.trace.steps();

    // The zero-update round stays in the trace, right before Final.
    assert!(matches!(
        steps[steps.len() - 2],
        TraceStep::Visit { round: Some(2), .. }
    ));
    assert!(matches!(steps[steps.len() - 1], TraceStep::Final { .. }));
}

#[test]
fn test_bellman_ford_unreached_nodes_do_not_relax() {
    // C -> D exists but C itself is never reached from A.
    let graph = graph_from(
        &["A", "B", "C", "D"],
        &[("A", "B", 1.0), ("C", "D", 5.0)],
    );
    let result = run_bellman_ford(&graph, "A").unwrap();

    assert!(result.distances["C"].is_infinite());
    assert!(result.distances["D"].is_infinite());
    let touched_d = result.trace.steps().iter().any(|step| {
        matches!(step, TraceStep::Update { node, .. } if node == "D")
    });
    assert!(!touched_d);
}

#[test]
fn test_bellman_ford_ignores_unreachable_negative_cycle() {
    // X <-> Y is a negative cycle, but nothing connects A to it.
    let graph = graph_from(
        &["A", "X", "Y"],
        &[("X", "Y", -1.0), ("Y", "X", -1.0)],
    );
    let result = run_bellman_ford(&graph, "A").unwrap();

    assert_eq!(result.distances["A"], 0.0);
    assert!(result.distances["X"].is_infinite());
    assert!(result.distances["Y"].is_infinite());
}

#[test]
fn test_bellman_ford_unknown_source() {
    let err = run_bellman_ford(&triangle(), "Z").unwrap_err();

    assert_eq!(
        err,
        AlgorithmError::UnknownSource {
            id: "Z".to_string()
        }
    );
}

#[test]
fn test_bellman_ford_visited_grows_with_updates() {
    let result = run_bellman_ford(&triangle(), "A").unwrap();

    let TraceStep::Final { visited, .. } = &result.trace.steps()[result.trace.len() - 1] else {
        panic!("last step must be Final");
    };
    // Source first, then targets in first-update order.
    assert_eq!(visited, &["A", "B", "C"]);
}

#[test]
fn test_bellman_ford_single_node_graph() {
    let graph = graph_from(&["A"], &[]);
    let result = run_bellman_ford(&graph, "A").unwrap();

    // No rounds run; the trace is just the bookends.
    assert_eq!(result.trace.len(), 2);
    assert_eq!(result.distances["A"], 0.0);
    assert_eq!(result.paths["A"], vec!["A"]);
}
