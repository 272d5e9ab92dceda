//! Environment: the graph the search runs against.
//!
//! The environment owns the node arena and the edge list, materializes
//! nodes and adjacency in `create()`, and dispatches `search()` to the
//! selected algorithm. Adjacency is immutable once `create()` returns,
//! which is what makes concurrent `search` calls over a shared
//! `&Environment` sound: each call allocates its own bookkeeping.

use crate::error::{Result, WayfarerError};
use crate::graph::cost::CostFunction;
use crate::graph::node::{Node, NodeId};
use crate::graph::search;
use crate::graph::types::{Algorithm, SearchPath};
use crate::space::{DistanceMetric, Point, Scalar};

/// Construction options for an environment.
#[derive(Debug, Clone)]
pub struct EnvironmentOptions {
    /// Metric used for distance costs and the A* heuristic
    pub distance_metric: DistanceMetric,
    /// Name prefix for auto-generated node names
    pub node_prefix: String,
    /// Derive edge costs from node values; uniform cost 1.0 otherwise
    pub use_node_value: bool,
    /// Create the reverse neighbor link for every edge
    pub bidirectional: bool,
}

impl Default for EnvironmentOptions {
    fn default() -> Self {
        EnvironmentOptions {
            distance_metric: DistanceMetric::Euclidean,
            node_prefix: "Node_".to_string(),
            use_node_value: true,
            bidirectional: true,
        }
    }
}

/// A graph of metric-embedded nodes, ready to search once created.
#[derive(Debug)]
pub struct Environment<T: Scalar, const D: usize> {
    num_nodes: usize,
    edges: Vec<(usize, usize)>,
    cost_function: CostFunction,
    options: EnvironmentOptions,
    nodes: Vec<Node<T, D>>,
    created: bool,
}

impl<T: Scalar, const D: usize> Environment<T, D> {
    /// Build an environment over `num_nodes` nodes and the given edge
    /// list. Edge endpoints are validated eagerly; a bad edge list
    /// fails before any node is materialized.
    pub fn new(
        num_nodes: usize,
        edges: Vec<(usize, usize)>,
        cost_function: CostFunction,
        options: EnvironmentOptions,
    ) -> Result<Self> {
        for &(u, v) in &edges {
            for endpoint in [u, v] {
                if endpoint >= num_nodes {
                    return Err(WayfarerError::EdgeEndpointOutOfBounds {
                        endpoint,
                        num_nodes,
                    });
                }
            }
        }
        Ok(Environment {
            num_nodes,
            edges,
            cost_function,
            options,
            nodes: Vec::new(),
            created: false,
        })
    }

    /// Convenience constructor deriving the cost function from the
    /// options: distance cost under the configured metric when
    /// `use_node_value` is set, uniform cost 1.0 otherwise.
    pub fn with_metric(
        num_nodes: usize,
        edges: Vec<(usize, usize)>,
        options: EnvironmentOptions,
    ) -> Result<Self> {
        let cost_function = if options.use_node_value {
            CostFunction::distance(options.distance_metric)
        } else {
            CostFunction::uniform()
        };
        Self::new(num_nodes, edges, cost_function, options)
    }

    /// Materialize nodes and adjacency. Must be called exactly once
    /// before `search`. Supplied value/name lists are used only when
    /// their length matches the node count; otherwise every value
    /// defaults to the zero vector and every name to
    /// `<prefix><index>`.
    pub fn create(&mut self, node_values: &[Point<T, D>], node_names: &[String]) -> Result<()> {
        if self.created {
            return Err(WayfarerError::AlreadyCreated);
        }

        let use_names = !node_names.is_empty() && node_names.len() == self.num_nodes;
        let use_values = !node_values.is_empty() && node_values.len() == self.num_nodes;

        self.nodes = (0..self.num_nodes)
            .map(|i| {
                let name = if use_names {
                    node_names[i].clone()
                } else {
                    format!("{}{}", self.options.node_prefix, i)
                };
                let value = if use_values {
                    node_values[i]
                } else {
                    Point::zero()
                };
                Node::new(NodeId::new(i), name, value)
            })
            .collect();

        for &(u, v) in &self.edges {
            self.nodes[u].add_neighbor(Some(NodeId::new(v)));
            if self.options.bidirectional {
                self.nodes[v].add_neighbor(Some(NodeId::new(u)));
            }
        }

        self.created = true;
        tracing::debug!(
            num_nodes = self.num_nodes,
            num_edges = self.edges.len(),
            bidirectional = self.options.bidirectional,
            "environment created"
        );
        Ok(())
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// All nodes, empty before `create()`.
    pub fn nodes(&self) -> &[Node<T, D>] {
        &self.nodes
    }

    /// Bounds-checked node access by index.
    pub fn node(&self, index: usize) -> Result<&Node<T, D>> {
        if !self.created {
            return Err(WayfarerError::NotCreated);
        }
        self.nodes
            .get(index)
            .ok_or(WayfarerError::NodeIndexOutOfBounds {
                index,
                num_nodes: self.num_nodes,
            })
    }

    /// Edge-traversal cost between two nodes of this environment,
    /// delegated to the configured cost function.
    pub fn cost(&self, from: NodeId, to: NodeId) -> f64 {
        self.cost_function
            .cost(&self.nodes[from.index()], &self.nodes[to.index()])
    }

    /// Heuristic estimate for A*: metric distance from `node` to
    /// `goal`, the same computation the distance cost uses.
    /// Admissibility is the caller's responsibility.
    pub fn heuristic(&self, node: NodeId, goal: NodeId) -> f64 {
        self.options.distance_metric.distance(
            self.nodes[node.index()].value(),
            self.nodes[goal.index()].value(),
        )
    }

    /// Find a path from `start` to `goal` using the selected algorithm.
    /// Returns an empty path when the goal is unreachable.
    #[tracing::instrument(skip(self), fields(start = %start, goal = %goal, algorithm = %algorithm))]
    pub fn search(&self, start: NodeId, goal: NodeId, algorithm: Algorithm) -> Result<SearchPath> {
        if !self.created {
            return Err(WayfarerError::NotCreated);
        }
        for id in [start, goal] {
            if id.index() >= self.num_nodes {
                return Err(WayfarerError::NodeIndexOutOfBounds {
                    index: id.index(),
                    num_nodes: self.num_nodes,
                });
            }
        }

        let path = match algorithm {
            Algorithm::BreadthFirst => search::bfs::solve(self, start, goal),
            Algorithm::DepthFirst => search::dfs::solve(self, start, goal),
            Algorithm::UniformCost => search::ucs::solve(self, start, goal),
            Algorithm::AStar => search::a_star::solve(self, start, goal),
        };
        tracing::debug!(
            found = path.found(),
            steps = path.len(),
            total_cost = path.total_cost().unwrap_or(0.0),
            "search finished"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests;
