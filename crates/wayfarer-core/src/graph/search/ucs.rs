//! Uniform-cost search: min-heap frontier ordered by cumulative cost.
//!
//! The recorded parent of a node is relaxed whenever a strictly cheaper
//! route is discovered, so the settled path is cost-optimal for
//! non-negative edge costs.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::environment::Environment;
use crate::graph::node::NodeId;
use crate::graph::search::path::{reconstruct, ParentLink};
use crate::graph::search::shared::{relax, FrontierEntry};
use crate::graph::types::SearchPath;
use crate::space::Scalar;

pub(crate) fn solve<T: Scalar, const D: usize>(
    env: &Environment<T, D>,
    start: NodeId,
    goal: NodeId,
) -> SearchPath {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut parents: HashMap<NodeId, ParentLink> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    parents.insert(
        start,
        ParentLink {
            parent: None,
            cost: 0.0,
        },
    );
    heap.push(Reverse(FrontierEntry {
        node: start,
        priority: 0.0,
        seq,
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        let current = entry.node;
        if !visited.insert(current) {
            continue;
        }
        if current == goal {
            return reconstruct(start, goal, &parents);
        }
        let settled_cost = parents[&current].cost;
        for &neighbor in env.nodes()[current.index()].neighbors() {
            if visited.contains(&neighbor) {
                continue;
            }
            let tentative = settled_cost + env.cost(current, neighbor);
            seq += 1;
            heap.push(Reverse(FrontierEntry {
                node: neighbor,
                priority: tentative,
                seq,
            }));
            relax(&mut parents, neighbor, current, tentative);
        }
    }

    SearchPath::not_found()
}

#[cfg(test)]
mod tests;
