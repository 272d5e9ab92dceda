//! Breadth-first search: FIFO frontier, first-reached parent wins.
//!
//! Cumulative cost is tracked along the discovered path but the result
//! is not cost-optimal by construction.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::environment::Environment;
use crate::graph::node::NodeId;
use crate::graph::search::path::{reconstruct, ParentLink};
use crate::graph::types::SearchPath;
use crate::space::Scalar;

pub(crate) fn solve<T: Scalar, const D: usize>(
    env: &Environment<T, D>,
    start: NodeId,
    goal: NodeId,
) -> SearchPath {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut parents: HashMap<NodeId, ParentLink> = HashMap::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    parents.insert(
        start,
        ParentLink {
            parent: None,
            cost: 0.0,
        },
    );
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        // Lazy deletion: a node may sit in the queue more than once.
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
            queue.push_back(neighbor);
            parents.entry(neighbor).or_insert_with(|| ParentLink {
                parent: Some(current),
                cost: settled_cost + env.cost(current, neighbor),
            });
        }
    }

    SearchPath::not_found()
}
