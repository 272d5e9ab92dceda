//! Path reconstruction shared by all search algorithms.

use std::collections::HashMap;

use crate::graph::node::NodeId;
use crate::graph::types::{PathStep, SearchPath};

/// Parent link recorded for a discovered node: the node it was reached
/// from and the cumulative cost of that route. The start node carries
/// no parent and cost zero.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParentLink {
    pub parent: Option<NodeId>,
    pub cost: f64,
}

/// Walk the parent map from `goal` back to `start` and emit the path in
/// start-to-goal order. Returns the empty path when the goal was never
/// recorded or the parent chain does not reach the start.
pub(crate) fn reconstruct(
    start: NodeId,
    goal: NodeId,
    parents: &HashMap<NodeId, ParentLink>,
) -> SearchPath {
    let mut steps: Vec<PathStep> = Vec::new();
    let mut current = goal;
    loop {
        let Some(link) = parents.get(&current) else {
            return SearchPath::not_found();
        };
        steps.push(PathStep {
            node: current,
            cost: link.cost,
        });
        if current == start {
            break;
        }
        match link.parent {
            Some(parent) => current = parent,
            None => return SearchPath::not_found(),
        }
    }
    steps.reverse();
    SearchPath { steps }
}
