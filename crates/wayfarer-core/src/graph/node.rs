//! Node entity: identity, display name, metric-space value, adjacency.
//!
//! Nodes live in an arena owned by the `Environment`; neighbor lists
//! hold arena indices rather than references, so nothing dangles if the
//! arena moves before adjacency is frozen.

use std::fmt;

use serde::Serialize;

use crate::space::{Point, Scalar};

/// Stable node identity, issued monotonically by the owning environment
/// at node creation. Equality of nodes is equality of ids, never of
/// names or values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the search space.
#[derive(Debug, Clone)]
pub struct Node<T: Scalar, const D: usize> {
    id: NodeId,
    name: String,
    value: Point<T, D>,
    neighbors: Vec<NodeId>,
}

impl<T: Scalar, const D: usize> Node<T, D> {
    pub fn new(id: NodeId, name: String, value: Point<T, D>) -> Self {
        Node {
            id,
            name,
            value,
            neighbors: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Point<T, D> {
        &self.value
    }

    /// Read-only view of the adjacency list, in insertion order.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Append a neighbor back-reference. A `None` neighbor is logged
    /// and skipped rather than treated as fatal.
    pub fn add_neighbor(&mut self, neighbor: Option<NodeId>) {
        match neighbor {
            Some(id) => self.neighbors.push(id),
            None => {
                tracing::warn!(node = %self.name, "attempted to add a null neighbor, skipping");
            }
        }
    }
}

impl<T: Scalar, const D: usize> PartialEq for Node<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: Scalar, const D: usize> Eq for Node<T, D> {}

impl<T: Scalar, const D: usize> fmt::Display for Node<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.value)
    }
}
