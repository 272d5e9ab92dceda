//! A* search: min-heap frontier ordered by f(n) = g(n) + h(n).
//!
//! The heuristic is the environment's metric distance from a node to
//! the goal, the same computation the distance cost function performs.
//! The parent map records g(n); relaxation compares g, not f. The
//! engine does not verify admissibility.

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
        priority: env.heuristic(start, goal),
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
                priority: tentative + env.heuristic(neighbor, goal),
                seq,
            }));
            relax(&mut parents, neighbor, current, tentative);
        }
    }

    SearchPath::not_found()
}
