//! Scenario loading shared by the solve and inspect commands.

use std::io::Read;
use std::path::Path;

use wayfarer_core::error::{Result, WayfarerError};
use wayfarer_core::problem::SearchProblem;

/// Load a scenario from a JSON file, or from stdin when the path is `-`.
pub fn load(path: &Path) -> Result<SearchProblem<f64>> {
    let input = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    SearchProblem::from_json_str(&input)
}

/// Point dimension for a scenario: the explicit `--dims` flag when
/// given, otherwise the width of the first value row, otherwise 1.
pub fn resolve_dims(problem: &SearchProblem<f64>, dims: Option<usize>) -> Result<usize> {
    let dims = dims
        .or_else(|| problem.values.first().map(Vec::len))
        .unwrap_or(1);
    if (1..=3).contains(&dims) {
        Ok(dims)
    } else {
        Err(WayfarerError::UsageError(format!(
            "unsupported point dimension {dims} (expected 1-3)"
        )))
    }
}
