use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WayfarerError;
use crate::graph::node::NodeId;

/// Search strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Breadth-first search (default). First-reached path, not cost-optimal.
    #[default]
    #[serde(alias = "bfs")]
    BreadthFirst,
    /// Depth-first search. Connectivity only, not cost-optimal.
    #[serde(alias = "dfs")]
    DepthFirst,
    /// Uniform-cost search. Minimum cumulative-cost path.
    #[serde(alias = "ucs")]
    UniformCost,
    /// A* search. Minimum-cost path when the heuristic is admissible.
    #[serde(alias = "astar", alias = "a*")]
    AStar,
}

impl FromStr for Algorithm {
    type Err = WayfarerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "ucs" | "uniform-cost" => Ok(Algorithm::UniformCost),
            "a-star" | "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(WayfarerError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::BreadthFirst => write!(f, "bfs"),
            Algorithm::DepthFirst => write!(f, "dfs"),
            Algorithm::UniformCost => write!(f, "ucs"),
            Algorithm::AStar => write!(f, "a-star"),
        }
    }
}

/// One hop of a search result: a node and the cumulative cost at which
/// it is reached from the start node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathStep {
    pub node: NodeId,
    pub cost: f64,
}

/// An ordered start-to-goal path. An empty step list means the goal was
/// not reachable; that is a normal outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchPath {
    pub steps: Vec<PathStep>,
}

impl SearchPath {
    /// The no-path-found result.
    pub fn not_found() -> Self {
        SearchPath { steps: Vec::new() }
    }

    pub fn found(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Total cumulative cost at the goal; `None` when no path was found.
    pub fn total_cost(&self) -> Option<f64> {
        self.steps.last().map(|step| step.cost)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Node ids along the path in start-to-goal order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.steps.iter().map(|step| step.node).collect()
    }
}
