//! Search algorithm implementations
//!
//! Contains the four frontier algorithms and their shared scaffolding:
//! - `bfs`: breadth-first search (FIFO frontier)
//! - `dfs`: depth-first search (LIFO frontier)
//! - `ucs`: uniform-cost search (min-heap on cumulative cost)
//! - `a_star`: A* search (min-heap on cost plus heuristic)
//! - `path`: parent-map to path reconstruction
//! - `shared`: frontier heap entry with deterministic tie-breaking

pub mod a_star;
pub mod bfs;
pub mod dfs;
pub mod path;
pub mod shared;
pub mod ucs;
