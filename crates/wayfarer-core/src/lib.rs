//! Wayfarer Core Library
//!
//! Search engine for graphs embedded in a metric space: the node/graph
//! data model, the cost-function strategies, and the four classic
//! search algorithms (BFS, DFS, UCS, A*).

pub mod error;
pub mod graph;
pub mod logging;
pub mod problem;
pub mod space;
