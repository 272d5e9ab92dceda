use super::*;
use crate::graph::cost::CostFunction;
use crate::space::DistanceMetric;

fn two_node_env() -> Environment<f64, 2> {
    let mut env =
        Environment::with_metric(2, vec![(0, 1)], EnvironmentOptions::default()).unwrap();
    env.create(
        &[Point::new([0.0, 0.0]), Point::new([3.0, 4.0])],
        &[],
    )
    .unwrap();
    env
}

#[test]
fn test_new_rejects_out_of_bounds_edge() {
    let result: Result<Environment<f64, 1>> = Environment::with_metric(
        3,
        vec![(0, 1), (1, 3)],
        EnvironmentOptions::default(),
    );
    assert!(matches!(
        result,
        Err(WayfarerError::EdgeEndpointOutOfBounds {
            endpoint: 3,
            num_nodes: 3
        })
    ));
}

#[test]
fn test_create_generates_default_names() {
    let env = two_node_env();
    assert_eq!(env.node(0).unwrap().name(), "Node_0");
    assert_eq!(env.node(1).unwrap().name(), "Node_1");
}

#[test]
fn test_create_honors_custom_prefix() {
    let options = EnvironmentOptions {
        node_prefix: "city-".to_string(),
        ..Default::default()
    };
    let mut env: Environment<f64, 1> = Environment::with_metric(2, vec![(0, 1)], options).unwrap();
    env.create(&[], &[]).unwrap();
    assert_eq!(env.node(1).unwrap().name(), "city-1");
}

#[test]
fn test_create_uses_complete_name_list() {
    let mut env: Environment<f64, 1> =
        Environment::with_metric(2, vec![(0, 1)], EnvironmentOptions::default()).unwrap();
    env.create(&[], &["alpha".to_string(), "beta".to_string()])
        .unwrap();
    assert_eq!(env.node(0).unwrap().name(), "alpha");
    assert_eq!(env.node(1).unwrap().name(), "beta");
}

#[test]
fn test_create_ignores_partial_lists() {
    // A list that does not cover every node falls back to defaults.
    let mut env: Environment<f64, 1> =
        Environment::with_metric(3, vec![(0, 1)], EnvironmentOptions::default()).unwrap();
    env.create(&[Point::new([7.0])], &["only-one".to_string()])
        .unwrap();
    assert_eq!(env.node(0).unwrap().name(), "Node_0");
    assert_eq!(env.node(0).unwrap().value(), &Point::zero());
}

#[test]
fn test_create_builds_bidirectional_adjacency() {
    let env = two_node_env();
    assert_eq!(env.node(0).unwrap().neighbors(), &[NodeId::new(1)]);
    assert_eq!(env.node(1).unwrap().neighbors(), &[NodeId::new(0)]);
}

#[test]
fn test_create_directed_adjacency() {
    let options = EnvironmentOptions {
        bidirectional: false,
        ..Default::default()
    };
    let mut env: Environment<f64, 1> = Environment::with_metric(2, vec![(0, 1)], options).unwrap();
    env.create(&[], &[]).unwrap();
    assert_eq!(env.node(0).unwrap().neighbors(), &[NodeId::new(1)]);
    assert!(env.node(1).unwrap().neighbors().is_empty());
}

#[test]
fn test_create_twice_fails() {
    let mut env: Environment<f64, 1> =
        Environment::with_metric(1, vec![], EnvironmentOptions::default()).unwrap();
    env.create(&[], &[]).unwrap();
    assert!(matches!(
        env.create(&[], &[]),
        Err(WayfarerError::AlreadyCreated)
    ));
}

#[test]
fn test_node_before_create_fails() {
    let env: Environment<f64, 1> =
        Environment::with_metric(1, vec![], EnvironmentOptions::default()).unwrap();
    assert!(matches!(env.node(0), Err(WayfarerError::NotCreated)));
}

#[test]
fn test_node_out_of_bounds() {
    let env = two_node_env();
    assert!(matches!(
        env.node(2),
        Err(WayfarerError::NodeIndexOutOfBounds {
            index: 2,
            num_nodes: 2
        })
    ));
}

#[test]
fn test_search_before_create_fails() {
    let env: Environment<f64, 1> =
        Environment::with_metric(2, vec![(0, 1)], EnvironmentOptions::default()).unwrap();
    assert!(matches!(
        env.search(NodeId::new(0), NodeId::new(1), Algorithm::BreadthFirst),
        Err(WayfarerError::NotCreated)
    ));
}

#[test]
fn test_search_rejects_out_of_bounds_endpoints() {
    let env = two_node_env();
    assert!(matches!(
        env.search(NodeId::new(0), NodeId::new(9), Algorithm::UniformCost),
        Err(WayfarerError::NodeIndexOutOfBounds { index: 9, .. })
    ));
}

#[test]
fn test_distance_cost_under_euclidean_metric() {
    let env = two_node_env();
    assert!((env.cost(NodeId::new(0), NodeId::new(1)) - 5.0).abs() < 1e-9);
    assert!((env.heuristic(NodeId::new(0), NodeId::new(1)) - 5.0).abs() < 1e-9);
}

#[test]
fn test_uniform_cost_ignores_values() {
    let options = EnvironmentOptions {
        use_node_value: false,
        ..Default::default()
    };
    let mut env: Environment<f64, 2> = Environment::with_metric(2, vec![(0, 1)], options).unwrap();
    env.create(
        &[Point::new([0.0, 0.0]), Point::new([3.0, 4.0])],
        &[],
    )
    .unwrap();
    assert_eq!(env.cost(NodeId::new(0), NodeId::new(1)), 1.0);
}

#[test]
fn test_explicit_cost_function_overrides_options() {
    let options = EnvironmentOptions::default();
    let mut env: Environment<f64, 1> = Environment::new(
        2,
        vec![(0, 1)],
        CostFunction::uniform_with(2.5),
        options,
    )
    .unwrap();
    env.create(&[Point::new([0.0]), Point::new([10.0])], &[])
        .unwrap();
    assert_eq!(env.cost(NodeId::new(0), NodeId::new(1)), 2.5);
}

#[test]
fn test_search_dispatches_every_algorithm() {
    let env = two_node_env();
    for algorithm in [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::UniformCost,
        Algorithm::AStar,
    ] {
        let path = env.search(NodeId::new(0), NodeId::new(1), algorithm).unwrap();
        assert_eq!(
            path.node_ids(),
            vec![NodeId::new(0), NodeId::new(1)],
            "algorithm {algorithm}"
        );
    }
}

#[test]
fn test_aggregate_cost_combines_parts() {
    let cost_function = CostFunction::weighted_aggregate(
        vec![
            CostFunction::uniform(),
            CostFunction::distance(DistanceMetric::Manhattan),
        ],
        vec![1.0, 0.5],
    )
    .unwrap();
    let mut env: Environment<f64, 1> = Environment::new(
        2,
        vec![(0, 1)],
        cost_function,
        EnvironmentOptions::default(),
    )
    .unwrap();
    env.create(&[Point::new([0.0]), Point::new([4.0])], &[])
        .unwrap();
    // 1.0 * 1.0 + 0.5 * 4.0
    assert_eq!(env.cost(NodeId::new(0), NodeId::new(1)), 3.0);
}
