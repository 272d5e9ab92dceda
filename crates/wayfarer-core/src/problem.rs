//! Declarative search problems.
//!
//! A [`SearchProblem`] is the JSON-friendly description of one search:
//! graph shape, node embedding, endpoints, and algorithm choice. It is
//! what the CLI deserializes from a scenario file; `solve` builds the
//! environment and runs the search in one call.

use serde::Deserialize;

use crate::error::{Result, WayfarerError};
use crate::graph::environment::{Environment, EnvironmentOptions};
use crate::graph::node::NodeId;
use crate::graph::types::{Algorithm, SearchPath};
use crate::space::{DistanceMetric, Point, Scalar};

fn default_true() -> bool {
    true
}

fn default_node_prefix() -> String {
    "Node_".to_string()
}

/// A complete, self-contained description of one search run.
///
/// Every field except `num_nodes`, `start`, and `goal` has a default,
/// so a minimal scenario is just a node count, an edge list, and the
/// two endpoints. `values` rows are dimension-checked against the
/// compile-time point dimension when the environment is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchProblem<T: Scalar> {
    pub num_nodes: usize,
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
    #[serde(default)]
    pub values: Vec<Vec<T>>,
    #[serde(default)]
    pub names: Vec<String>,
    pub start: usize,
    pub goal: usize,
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default)]
    pub metric: DistanceMetric,
    #[serde(default = "default_node_prefix")]
    pub node_prefix: String,
    #[serde(default = "default_true")]
    pub use_node_value: bool,
    #[serde(default = "default_true")]
    pub bidirectional: bool,
}

impl<T: Scalar + for<'de> Deserialize<'de>> SearchProblem<T> {
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

impl<T: Scalar> SearchProblem<T> {
    /// Convert the raw value rows into fixed-dimension points.
    fn points<const D: usize>(&self) -> Result<Vec<Point<T, D>>> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, row)| {
                if row.len() != D {
                    return Err(WayfarerError::DimensionMismatch {
                        index,
                        expected: D,
                        found: row.len(),
                    });
                }
                let mut components = [T::default(); D];
                components.copy_from_slice(row);
                Ok(Point::new(components))
            })
            .collect()
    }

    /// Build and materialize the environment this problem describes.
    pub fn build_environment<const D: usize>(&self) -> Result<Environment<T, D>> {
        let options = EnvironmentOptions {
            distance_metric: self.metric,
            node_prefix: self.node_prefix.clone(),
            use_node_value: self.use_node_value,
            bidirectional: self.bidirectional,
        };
        let points = self.points::<D>()?;
        let mut env = Environment::with_metric(self.num_nodes, self.edges.clone(), options)?;
        env.create(&points, &self.names)?;
        Ok(env)
    }

    /// Build the environment and run the configured search.
    #[tracing::instrument(skip(self), fields(algorithm = %self.algorithm, start = self.start, goal = self.goal))]
    pub fn solve<const D: usize>(&self) -> Result<SearchPath> {
        let env = self.build_environment::<D>()?;
        env.search(
            NodeId::new(self.start),
            NodeId::new(self.goal),
            self.algorithm,
        )
    }
}
