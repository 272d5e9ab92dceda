//! Shared scaffolding for the priority-queue algorithms (UCS, A*):
//! the frontier heap entry and parent-map relaxation.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::graph::node::NodeId;
use crate::graph::search::path::ParentLink;

/// Min-heap key for `BinaryHeap<Reverse<FrontierEntry>>`: ordered by
/// priority first, insertion sequence second, so ties pop in insertion
/// order and repeated runs are deterministic.
///
/// Uses `f64::total_cmp` for IEEE 754 total ordering, keeping Ord and
/// Eq consistent even if a cost function ever produces a NaN.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub node: NodeId,
    pub priority: f64,
    pub seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority.to_bits() == other.priority.to_bits() && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Record `(parent, cost)` for `node` on first discovery or on strict
/// improvement over the previously recorded cost.
pub(crate) fn relax(
    parents: &mut HashMap<NodeId, ParentLink>,
    node: NodeId,
    parent: NodeId,
    cost: f64,
) {
    match parents.entry(node) {
        Entry::Vacant(slot) => {
            slot.insert(ParentLink {
                parent: Some(parent),
                cost,
            });
        }
        Entry::Occupied(mut slot) => {
            if cost < slot.get().cost {
                slot.insert(ParentLink {
                    parent: Some(parent),
                    cost,
                });
            }
        }
    }
}
