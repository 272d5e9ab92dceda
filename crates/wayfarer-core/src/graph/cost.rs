//! Cost-function strategies for edge traversal.
//!
//! A cost function computes the non-negative cost of moving between two
//! nodes. Variants are a closed tagged enum rather than a trait-object
//! hierarchy; `Aggregate` composes the same capability with weights.
//! All variants are deterministic and side-effect-free given the two
//! node values.

use crate::error::{Result, WayfarerError};
use crate::graph::node::Node;
use crate::space::{DistanceMetric, Scalar};

/// Edge-traversal cost strategy.
#[derive(Debug, Clone)]
pub enum CostFunction {
    /// Fixed constant regardless of the nodes.
    Uniform { value: f64 },
    /// Metric distance between the two node values.
    Distance { metric: DistanceMetric },
    /// Weighted sum of sub cost functions. Weights and parts are kept
    /// in lockstep; the constructors enforce it.
    Aggregate {
        parts: Vec<CostFunction>,
        weights: Vec<f64>,
    },
}

impl CostFunction {
    /// Uniform cost with the conventional default of 1.0 per hop.
    pub fn uniform() -> Self {
        CostFunction::Uniform { value: 1.0 }
    }

    /// Uniform cost with an explicit per-hop value.
    pub fn uniform_with(value: f64) -> Self {
        CostFunction::Uniform { value }
    }

    pub fn distance(metric: DistanceMetric) -> Self {
        CostFunction::Distance { metric }
    }

    /// Equal-weighted aggregate of the given cost functions.
    pub fn aggregate(parts: Vec<CostFunction>) -> Self {
        let weights = vec![1.0; parts.len()];
        CostFunction::Aggregate { parts, weights }
    }

    /// Weighted aggregate. Fails at construction, before any cost
    /// evaluation, when the weight count does not match the part count.
    pub fn weighted_aggregate(parts: Vec<CostFunction>, weights: Vec<f64>) -> Result<Self> {
        if weights.len() != parts.len() {
            return Err(WayfarerError::WeightCountMismatch {
                weights: weights.len(),
                parts: parts.len(),
            });
        }
        Ok(CostFunction::Aggregate { parts, weights })
    }

    /// Cost of traversing from `from` to `to`.
    pub fn cost<T: Scalar, const D: usize>(&self, from: &Node<T, D>, to: &Node<T, D>) -> f64 {
        match self {
            CostFunction::Uniform { value } => *value,
            CostFunction::Distance { metric } => metric.distance(from.value(), to.value()),
            CostFunction::Aggregate { parts, weights } => parts
                .iter()
                .zip(weights.iter())
                .map(|(part, weight)| weight * part.cost(from, to))
                .sum(),
        }
    }
}

impl Default for CostFunction {
    fn default() -> Self {
        CostFunction::uniform()
    }
}
