//! Graph data model and path-finding operations
//!
//! Provides the search engine proper:
//! - Node arena with identity-based equality
//! - Cost-function strategies (uniform, distance, weighted aggregate)
//! - Environment (graph) construction and search dispatch
//! - The four frontier algorithms with shared path reconstruction

pub mod cost;
pub mod environment;
pub mod node;
pub mod search;
pub mod types;

pub use cost::CostFunction;
pub use environment::{Environment, EnvironmentOptions};
pub use node::{Node, NodeId};
pub use types::{Algorithm, PathStep, SearchPath};
