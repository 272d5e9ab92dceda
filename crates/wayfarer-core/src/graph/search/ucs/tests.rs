use crate::graph::environment::{Environment, EnvironmentOptions};
use crate::graph::node::NodeId;
use crate::graph::types::SearchPath;
use crate::space::{DistanceMetric, Point};

fn six_node_env() -> Environment<f64, 1> {
    let edges = vec![
        (0, 1),
        (0, 2),
        (1, 4),
        (2, 3),
        (2, 4),
        (3, 4),
        (3, 5),
        (4, 5),
    ];
    let options = EnvironmentOptions {
        distance_metric: DistanceMetric::Manhattan,
        ..Default::default()
    };
    let mut env = Environment::with_metric(6, edges, options).unwrap();
    let values: Vec<Point<f64, 1>> = [0.0, 1.0, 1.0, 2.0, 9.0, 6.0]
        .iter()
        .map(|&v| Point::new([v]))
        .collect();
    env.create(&values, &[]).unwrap();
    env
}

/// A denser graph with several equal-cost routes to the goal.
fn sixteen_node_env() -> Environment<f64, 1> {
    let edges = vec![
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (2, 7),
        (3, 7),
        (3, 10),
        (3, 11),
        (3, 12),
        (4, 5),
        (4, 7),
        (5, 6),
        (6, 13),
        (7, 8),
        (8, 9),
        (9, 13),
        (9, 15),
        (10, 11),
        (10, 13),
        (11, 12),
        (11, 14),
        (12, 14),
        (13, 15),
    ];
    let options = EnvironmentOptions {
        distance_metric: DistanceMetric::Manhattan,
        ..Default::default()
    };
    let mut env = Environment::with_metric(16, edges, options).unwrap();
    let values: Vec<Point<f64, 1>> = [
        0.0, 10.0, 1.0, 2.0, 10.0, 15.0, 20.0, 20.0, 25.0, 5.0, 5.0, 4.0, 3.0, 5.0, 3.0, 20.0,
    ]
    .iter()
    .map(|&v| Point::new([v]))
    .collect();
    env.create(&values, &[]).unwrap();
    env
}

fn assert_edge_valid(env: &Environment<f64, 1>, path: &SearchPath) {
    assert!(path.found());
    for pair in path.steps.windows(2) {
        let from = &env.nodes()[pair[0].node.index()];
        assert!(from.neighbors().contains(&pair[1].node));
        let edge_cost = env.cost(pair[0].node, pair[1].node);
        assert!((pair[1].cost - pair[0].cost - edge_cost).abs() < 1e-9);
    }
}

#[test]
fn test_ucs_finds_cheapest_path() {
    let env = six_node_env();
    let path = super::solve(&env, NodeId::new(0), NodeId::new(5));
    let ids: Vec<usize> = path.node_ids().iter().map(|id| id.index()).collect();
    assert_eq!(ids, vec![0, 2, 3, 5]);
    let costs: Vec<f64> = path.steps.iter().map(|step| step.cost).collect();
    assert_eq!(costs, vec![0.0, 1.0, 2.0, 6.0]);
}

#[test]
fn test_ucs_beats_first_reached_route() {
    // Breadth-first on this fixture reaches the goal at cost 12.
    let env = six_node_env();
    let path = super::solve(&env, NodeId::new(0), NodeId::new(5));
    assert_eq!(path.total_cost(), Some(6.0));
}

#[test]
fn test_ucs_optimal_cost_with_equal_cost_alternatives() {
    let env = sixteen_node_env();
    let path = super::solve(&env, NodeId::new(0), NodeId::new(15));
    // Several distinct routes share the optimal cost; the cost is
    // unique even though the node sequence is tie-break dependent.
    assert_eq!(path.total_cost(), Some(20.0));
    assert_edge_valid(&env, &path);
}

#[test]
fn test_ucs_uniform_cost_minimizes_hops() {
    let edges = vec![
        (0, 1),
        (0, 2),
        (1, 4),
        (2, 3),
        (2, 4),
        (3, 4),
        (3, 5),
        (4, 5),
    ];
    let options = EnvironmentOptions {
        use_node_value: false,
        ..Default::default()
    };
    let mut env: Environment<f64, 1> = Environment::with_metric(6, edges, options).unwrap();
    env.create(&[], &[]).unwrap();

    let path = super::solve(&env, NodeId::new(0), NodeId::new(5));
    assert_eq!(path.len(), 4);
    assert_eq!(path.total_cost(), Some(3.0));
}

#[test]
fn test_ucs_start_equals_goal() {
    let env = six_node_env();
    let path = super::solve(&env, NodeId::new(2), NodeId::new(2));
    assert_eq!(path.node_ids(), vec![NodeId::new(2)]);
    assert_eq!(path.total_cost(), Some(0.0));
}

#[test]
fn test_ucs_disconnected_goal_returns_empty_path() {
    let mut env: Environment<f64, 1> =
        Environment::with_metric(3, vec![(0, 1)], EnvironmentOptions::default()).unwrap();
    env.create(&[], &[]).unwrap();
    let path = super::solve(&env, NodeId::new(0), NodeId::new(2));
    assert!(!path.found());
}

#[test]
fn test_ucs_is_deterministic() {
    let env = sixteen_node_env();
    let first = super::solve(&env, NodeId::new(0), NodeId::new(15));
    let second = super::solve(&env, NodeId::new(0), NodeId::new(15));
    assert_eq!(first, second);
}
