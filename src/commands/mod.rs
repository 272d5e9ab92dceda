//! CLI commands for wayfarer

pub mod dispatch;
pub mod inspect;
pub mod scenario;
pub mod solve;
